// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expand/collapse state for detail cards.
//!
//! An [`ExpandableCard`] is a two-state machine. `expand` is accepted only
//! while collapsed and `collapse` only while expanded; anything else is a
//! no-op. There are no timeouts: the state changes only on explicit actions.
//!
//! Expanding to the content's natural height takes two phases because the
//! height is unknown until the content has been laid out:
//!
//! 1. [`expand`](ExpandableCard::expand) mounts the content at zero height
//!    and raises [`needs_measurement`](ExpandableCard::needs_measurement).
//! 2. The caller measures the content (on the web, its `scrollHeight`) and
//!    hands the result to
//!    [`provide_measurement`](ExpandableCard::provide_measurement), which
//!    starts the height animation from the current height to the measured
//!    one.
//!
//! Once the height animation finishes, [`ContentStyle::height`] reports
//! [`ContentHeight::Auto`], so later content reflow needs no new
//! measurement. Collapse animates back to zero and unmounts at the end.

use alloc::vec::Vec;
use core::fmt;

use crate::easing::{CubicBezier, Easing};
use crate::sequencer::Tween;
use crate::time::{Duration, HostTime};

/// Expansion state of one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardState {
    /// Details hidden (the initial state).
    #[default]
    Collapsed,
    /// Details shown.
    Expanded,
}

/// A user action on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardAction {
    /// The "expand details" trigger.
    Expand,
    /// The "collapse" trigger.
    Collapse,
}

/// Which of a card's triggers are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardControls {
    /// The expand trigger; shown only while collapsed.
    pub expand_visible: bool,
    /// The collapse trigger; shown only while expanded.
    pub collapse_visible: bool,
    /// Value for the expand trigger's `aria-expanded` attribute.
    pub aria_expanded: bool,
}

/// Height of the expandable content region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContentHeight {
    /// A fixed height in CSS pixels (used while animating).
    Px(f64),
    /// The content's natural height.
    Auto,
}

/// Styles for the expandable content region at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentStyle {
    /// Region height.
    pub height: ContentHeight,
    /// Region opacity.
    pub opacity: f64,
    /// Gap above the region, in CSS pixels.
    pub margin_top: f64,
    /// Whether the content is in the document at all.
    pub mounted: bool,
}

impl ContentStyle {
    /// The style of a collapsed card at rest.
    pub const COLLAPSED: Self = Self {
        height: ContentHeight::Px(0.0),
        opacity: 0.0,
        margin_top: 0.0,
        mounted: false,
    };
}

/// Expansion timing for one kind of card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpansionTiming {
    /// Height and margin duration.
    pub height: Duration,
    /// Opacity duration.
    pub opacity: Duration,
    /// Curve shared by all three properties.
    pub easing: Easing,
    /// Margin above the content when expanded.
    pub margin_top: f64,
}

impl ExpansionTiming {
    /// Service cards: 0.5 s height on the standard curve, 0.3 s fade, 24 px
    /// gap.
    pub const SERVICE_CARD: Self = Self {
        height: Duration::from_millis(500),
        opacity: Duration::from_millis(300),
        easing: Easing::CubicBezier(CubicBezier::STANDARD),
        margin_top: 24.0,
    };
}

impl Default for ExpansionTiming {
    fn default() -> Self {
        Self::SERVICE_CARD
    }
}

/// One card's expansion state and animations.
#[derive(Clone, Debug)]
pub struct ExpandableCard {
    state: CardState,
    timing: ExpansionTiming,
    height: Tween,
    opacity: Tween,
    margin_top: Tween,
    measured: Option<f64>,
    awaiting_measurement: bool,
}

impl ExpandableCard {
    /// Creates a collapsed card.
    #[must_use]
    pub const fn new(timing: ExpansionTiming) -> Self {
        Self {
            state: CardState::Collapsed,
            timing,
            height: Tween::fixed(0.0),
            opacity: Tween::fixed(0.0),
            margin_top: Tween::fixed(0.0),
            measured: None,
            awaiting_measurement: false,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> CardState {
        self.state
    }

    /// Returns `true` while expanded.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        matches!(self.state, CardState::Expanded)
    }

    /// Returns the most recent content measurement, if any.
    #[must_use]
    pub const fn measured_height(&self) -> Option<f64> {
        self.measured
    }

    /// Expands the card. Returns `false` if it was already expanded.
    pub fn expand(&mut self, now: HostTime) -> bool {
        if self.is_expanded() {
            return false;
        }
        let t = self.timing;
        self.state = CardState::Expanded;
        self.awaiting_measurement = true;
        self.opacity.animate_to(1.0, now, t.opacity, t.easing);
        self.margin_top.animate_to(t.margin_top, now, t.height, t.easing);
        true
    }

    /// Collapses the card. Returns `false` if it was already collapsed.
    pub fn collapse(&mut self, now: HostTime) -> bool {
        if !self.is_expanded() {
            return false;
        }
        let t = self.timing;
        self.state = CardState::Collapsed;
        self.awaiting_measurement = false;
        self.height.animate_to(0.0, now, t.height, t.easing);
        self.opacity.animate_to(0.0, now, t.opacity, t.easing);
        self.margin_top.animate_to(0.0, now, t.height, t.easing);
        true
    }

    /// Applies a user action. Returns `true` if the state changed.
    pub fn apply(&mut self, action: CardAction, now: HostTime) -> bool {
        match action {
            CardAction::Expand => self.expand(now),
            CardAction::Collapse => self.collapse(now),
        }
    }

    /// Returns `true` if the card is expanded but has not yet been told its
    /// content height.
    #[must_use]
    pub const fn needs_measurement(&self) -> bool {
        self.awaiting_measurement
    }

    /// Supplies the content's natural height in CSS pixels.
    ///
    /// The first measurement after [`expand`](Self::expand) starts the
    /// height animation. Later measurements while expanded (for example
    /// after a resize) retarget a running animation or snap a finished one.
    /// Measurements while collapsed are ignored.
    pub fn provide_measurement(&mut self, height: f64, now: HostTime) {
        if !self.is_expanded() {
            return;
        }
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.measured = Some(height);
        if self.awaiting_measurement {
            self.awaiting_measurement = false;
            let t = self.timing;
            self.height.animate_to(height, now, t.height, t.easing);
        } else if self.height.is_settled(now) {
            self.height.set(height);
        } else {
            self.height.retarget(height, now);
        }
    }

    /// Returns which triggers should be shown.
    #[must_use]
    pub const fn controls(&self) -> CardControls {
        let expanded = self.is_expanded();
        CardControls {
            expand_visible: !expanded,
            collapse_visible: expanded,
            aria_expanded: expanded,
        }
    }

    /// Returns `true` while any of the content animations is running.
    #[must_use]
    pub fn is_animating(&self, now: HostTime) -> bool {
        self.awaiting_measurement
            || !self.height.is_settled(now)
            || !self.opacity.is_settled(now)
            || !self.margin_top.is_settled(now)
    }

    /// Samples the content region's style at `now`.
    #[must_use]
    pub fn content_style(&self, now: HostTime) -> ContentStyle {
        let animating = self.is_animating(now);
        if !self.is_expanded() && !animating {
            return ContentStyle::COLLAPSED;
        }
        let height = if self.is_expanded() && !self.awaiting_measurement && self.height.is_settled(now)
        {
            ContentHeight::Auto
        } else {
            ContentHeight::Px(self.height.sample(now))
        };
        ContentStyle {
            height,
            opacity: self.opacity.sample(now),
            margin_top: self.margin_top.sample(now),
            mounted: true,
        }
    }
}

impl Default for ExpandableCard {
    fn default() -> Self {
        Self::new(ExpansionTiming::default())
    }
}

/// A handle to a card in a [`CardDeck`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u32);

impl CardId {
    /// Returns the card's position in its deck.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.0)
    }
}

/// An ordered collection of independent cards.
///
/// Every action is routed to exactly one card; no card's state depends on
/// another's.
#[derive(Clone, Debug, Default)]
pub struct CardDeck {
    cards: Vec<ExpandableCard>,
}

impl CardDeck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a collapsed card and returns its handle.
    pub fn push(&mut self, timing: ExpansionTiming) -> CardId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a page holds a handful of cards"
        )]
        let id = CardId(self.cards.len() as u32);
        self.cards.push(ExpandableCard::new(timing));
        id
    }

    /// Returns the card for `id`.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&ExpandableCard> {
        self.cards.get(id.0 as usize)
    }

    /// Returns the card for `id` mutably.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut ExpandableCard> {
        self.cards.get_mut(id.0 as usize)
    }

    /// Applies `action` to the card `id`. Unknown ids are ignored.
    ///
    /// Returns `true` if the card's state changed.
    pub fn apply(&mut self, id: CardId, action: CardAction, now: HostTime) -> bool {
        self.get_mut(id).is_some_and(|card| card.apply(action, now))
    }

    /// Returns the state of card `id`; unknown ids read as collapsed.
    #[must_use]
    pub fn state(&self, id: CardId) -> CardState {
        self.get(id).map_or(CardState::Collapsed, ExpandableCard::state)
    }

    /// Iterates over all cards with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &ExpandableCard)> {
        (0_u32..).zip(&self.cards).map(|(i, card)| (CardId(i), card))
    }

    /// Iterates mutably over all cards with their handles.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CardId, &mut ExpandableCard)> {
        (0_u32..)
            .zip(&mut self.cards)
            .map(|(i, card)| (CardId(i), card))
    }

    /// Returns the number of expanded cards.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_expanded()).count()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(ms: u64) -> HostTime {
        HostTime(ms * 1000)
    }

    #[test]
    fn starts_collapsed_and_unmounted() {
        let card = ExpandableCard::default();
        assert_eq!(card.state(), CardState::Collapsed);
        assert_eq!(card.content_style(ms(0)), ContentStyle::COLLAPSED);
        assert!(!card.needs_measurement());
    }

    #[test]
    fn actions_only_fire_from_matching_state() {
        let mut card = ExpandableCard::default();
        assert!(!card.collapse(ms(0)), "collapse from collapsed is a no-op");
        assert!(card.expand(ms(0)));
        assert!(!card.expand(ms(10)), "expand from expanded is a no-op");
        assert!(card.collapse(ms(20)));
        assert!(!card.collapse(ms(30)));
    }

    #[test]
    fn controls_are_mutually_exclusive() {
        let mut card = ExpandableCard::default();
        for step in 0..6_u64 {
            let controls = card.controls();
            assert_ne!(
                controls.expand_visible, controls.collapse_visible,
                "exactly one trigger at step {step}"
            );
            assert_eq!(controls.aria_expanded, card.is_expanded());
            let action = if step % 2 == 0 {
                CardAction::Expand
            } else {
                CardAction::Collapse
            };
            card.apply(action, ms(step * 100));
        }
    }

    #[test]
    fn expansion_is_two_phase() {
        let mut card = ExpandableCard::default();
        card.expand(ms(0));
        assert!(card.needs_measurement());

        // Mounted at zero height so the content can be measured.
        let style = card.content_style(ms(0));
        assert!(style.mounted);
        assert_eq!(style.height, ContentHeight::Px(0.0));

        card.provide_measurement(320.0, ms(16));
        assert!(!card.needs_measurement());
        assert_eq!(card.measured_height(), Some(320.0));

        let ContentHeight::Px(h) = card.content_style(ms(266)).height else {
            panic!("height is fixed while animating");
        };
        assert!(h > 160.0 && h < 320.0, "standard curve front-loads: {h}");

        // Opacity finishes first, then height settles to auto.
        assert_eq!(card.content_style(ms(300)).opacity, 1.0);
        assert!(card.is_animating(ms(515)));
        let settled = card.content_style(ms(516));
        assert_eq!(settled.height, ContentHeight::Auto);
        assert_eq!(settled.margin_top, 24.0);
        assert!(!card.is_animating(ms(516)));
    }

    #[test]
    fn collapse_reverses_and_unmounts_at_end() {
        let mut card = ExpandableCard::default();
        card.expand(ms(0));
        card.provide_measurement(200.0, ms(0));
        card.collapse(ms(1_000));

        let mid = card.content_style(ms(1_250));
        assert!(mid.mounted, "still animating out");
        let ContentHeight::Px(h) = mid.height else {
            panic!("collapsing height is fixed");
        };
        assert!(h > 0.0 && h < 200.0, "{h}");

        assert_eq!(card.content_style(ms(1_500)), ContentStyle::COLLAPSED);
    }

    #[test]
    fn remeasure_retargets_without_restarting_fade() {
        let mut card = ExpandableCard::default();
        card.expand(ms(0));
        card.provide_measurement(100.0, ms(0));
        let opacity_before = card.content_style(ms(200)).opacity;
        card.provide_measurement(300.0, ms(200));
        assert_eq!(card.content_style(ms(200)).opacity, opacity_before);
        assert!(!card.needs_measurement());
        assert!(!card.is_animating(ms(500)), "original end time kept");

        // A resize after settling snaps; the style stays auto.
        card.provide_measurement(280.0, ms(900));
        assert_eq!(card.content_style(ms(900)).height, ContentHeight::Auto);
        assert_eq!(card.measured_height(), Some(280.0));
    }

    #[test]
    fn measurement_while_collapsed_is_ignored() {
        let mut card = ExpandableCard::default();
        card.provide_measurement(500.0, ms(0));
        assert_eq!(card.measured_height(), None);
        assert_eq!(card.content_style(ms(0)), ContentStyle::COLLAPSED);
    }

    #[test]
    fn deck_actions_touch_exactly_one_card() {
        let mut deck = CardDeck::new();
        let ids: Vec<CardId> = (0..4)
            .map(|_| deck.push(ExpansionTiming::SERVICE_CARD))
            .collect();
        let mut model = [false; 4];

        // A fixed pseudo-random action sequence.
        let script = [
            (2, CardAction::Expand),
            (0, CardAction::Expand),
            (2, CardAction::Expand),
            (3, CardAction::Collapse),
            (0, CardAction::Collapse),
            (1, CardAction::Expand),
            (2, CardAction::Collapse),
            (3, CardAction::Expand),
        ];
        for (step, &(card, action)) in (0_u64..).zip(&script) {
            deck.apply(ids[card], action, ms(step * 50));
            model[card] = matches!(action, CardAction::Expand);
            for (i, id) in ids.iter().enumerate() {
                assert_eq!(
                    deck.state(*id) == CardState::Expanded,
                    model[i],
                    "card {i} after step {step}"
                );
            }
        }
        assert_eq!(deck.expanded_count(), 2);
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn unknown_card_ids_are_ignored() {
        let mut deck = CardDeck::new();
        let mut other = CardDeck::new();
        other.push(ExpansionTiming::SERVICE_CARD);
        let foreign = other.push(ExpansionTiming::SERVICE_CARD);
        assert!(!deck.apply(foreign, CardAction::Expand, ms(0)));
        assert_eq!(deck.state(foreign), CardState::Collapsed);
        assert!(deck.is_empty());
    }
}
