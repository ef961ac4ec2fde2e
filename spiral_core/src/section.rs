// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring visibility signals into reveal sequences.
//!
//! A [`RevealSection`] binds one visibility signal to the reveals of one
//! page section: an optional heading, an optional staggered list of items
//! and any number of extra blocks. The first time the signal reads `true`,
//! every reveal in the section moves to [`Phase::Visible`]; nothing ever
//! moves it back.
//!
//! A section created with [`RevealSection::on_load`] has no signal and
//! reveals on its first sync, which is how the hero plays its entrance.
//!
//! [`SectionComposer`] holds all sections of a page and syncs them
//! together once per frame.

use alloc::vec::Vec;

use crate::sequencer::{Phase, Reveal, StaggerGroup, Variants, VisualState};
use crate::time::HostTime;
use crate::visibility::{VisibilityObserver, WatchId};

/// The reveals of one page section and the signal that starts them.
#[derive(Clone, Debug)]
pub struct RevealSection {
    name: &'static str,
    watch: Option<WatchId>,
    header: Option<Reveal>,
    items: Option<StaggerGroup>,
    extras: Vec<Reveal>,
    revealed_at: Option<HostTime>,
}

impl RevealSection {
    /// Creates a section revealed when `watch` enters the viewport.
    #[must_use]
    pub const fn new(name: &'static str, watch: WatchId) -> Self {
        Self::with_watch(name, Some(watch))
    }

    /// Creates a section revealed on its first sync.
    #[must_use]
    pub const fn on_load(name: &'static str) -> Self {
        Self::with_watch(name, None)
    }

    const fn with_watch(name: &'static str, watch: Option<WatchId>) -> Self {
        Self {
            name,
            watch,
            header: None,
            items: None,
            extras: Vec::new(),
            revealed_at: None,
        }
    }

    /// Adds a heading reveal.
    #[must_use]
    pub fn with_header(mut self, variants: Variants) -> Self {
        self.header = Some(Reveal::new(variants));
        self
    }

    /// Adds a staggered list of `count` items.
    #[must_use]
    pub fn with_items(mut self, container: Variants, item: Variants, count: usize) -> Self {
        self.items = Some(StaggerGroup::uniform(container, item, count));
        self
    }

    /// Adds a standalone block; blocks are indexed in insertion order.
    #[must_use]
    pub fn with_extra(mut self, variants: Variants) -> Self {
        self.extras.push(Reveal::new(variants));
        self
    }

    /// Returns the section's name, used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the visibility signal, if the section has one.
    #[must_use]
    pub const fn watch(&self) -> Option<WatchId> {
        self.watch
    }

    /// Returns `true` once the section has been revealed.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Returns when the section was revealed.
    #[must_use]
    pub const fn revealed_at(&self) -> Option<HostTime> {
        self.revealed_at
    }

    /// Reveals the section at `now`. Returns `false` if it was already
    /// revealed.
    pub fn trigger(&mut self, now: HostTime) -> bool {
        if self.is_revealed() {
            return false;
        }
        self.revealed_at = Some(now);
        if let Some(header) = &mut self.header {
            header.set_phase(Phase::Visible, now);
        }
        if let Some(items) = &mut self.items {
            items.set_phase(Phase::Visible, now);
        }
        for extra in &mut self.extras {
            extra.set_phase(Phase::Visible, now);
        }
        true
    }

    /// Reads the section's signal from `observer` and reveals the section
    /// if the signal is set.
    ///
    /// Returns `true` on exactly one call: the one that revealed the section.
    pub fn sync<O: VisibilityObserver + ?Sized>(&mut self, observer: &O, now: HostTime) -> bool {
        if self.is_revealed() {
            return false;
        }
        let entered = self
            .watch
            .is_none_or(|watch| observer.has_entered_viewport(watch));
        entered && self.trigger(now)
    }

    /// Returns the heading reveal.
    #[must_use]
    pub const fn header(&self) -> Option<&Reveal> {
        self.header.as_ref()
    }

    /// Returns the item group.
    #[must_use]
    pub const fn items(&self) -> Option<&StaggerGroup> {
        self.items.as_ref()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, StaggerGroup::len)
    }

    /// Returns the standalone blocks.
    #[must_use]
    pub fn extras(&self) -> &[Reveal] {
        &self.extras
    }

    /// Samples the heading at `now`.
    #[must_use]
    pub fn header_state(&self, now: HostTime) -> Option<VisualState> {
        self.header.as_ref().map(|h| h.sample(now))
    }

    /// Samples the item container at `now`.
    #[must_use]
    pub fn container_state(&self, now: HostTime) -> Option<VisualState> {
        self.items.as_ref().map(|g| g.container().sample(now))
    }

    /// Samples item `index` at `now`.
    #[must_use]
    pub fn item_state(&self, index: usize, now: HostTime) -> Option<VisualState> {
        self.items
            .as_ref()
            .and_then(|g| g.children().get(index))
            .map(|child| child.sample(now))
    }

    /// Samples block `index` at `now`.
    #[must_use]
    pub fn extra_state(&self, index: usize, now: HostTime) -> Option<VisualState> {
        self.extras.get(index).map(|e| e.sample(now))
    }

    /// Returns `true` once every reveal in the section has settled.
    ///
    /// An unrevealed section is settled: it rests in its hidden state.
    #[must_use]
    pub fn is_settled(&self, now: HostTime) -> bool {
        if !self.is_revealed() {
            return true;
        }
        self.header.as_ref().is_none_or(|h| h.is_settled(now))
            && self.items.as_ref().is_none_or(|g| g.is_settled(now))
            && self.extras.iter().all(|e| e.is_settled(now))
    }
}

/// Index of a section in a [`SectionComposer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionIndex(pub usize);

/// All reveal sections of one page.
#[derive(Clone, Debug, Default)]
pub struct SectionComposer {
    sections: Vec<RevealSection>,
}

impl SectionComposer {
    /// Creates an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Adds a section and returns its index.
    pub fn push(&mut self, section: RevealSection) -> SectionIndex {
        self.sections.push(section);
        SectionIndex(self.sections.len() - 1)
    }

    /// Returns the section at `index`.
    #[must_use]
    pub fn get(&self, index: SectionIndex) -> Option<&RevealSection> {
        self.sections.get(index.0)
    }

    /// Iterates over all sections.
    pub fn iter(&self) -> impl Iterator<Item = &RevealSection> {
        self.sections.iter()
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Syncs every section against `observer`, returning the sections
    /// revealed by this call.
    pub fn sync<O: VisibilityObserver + ?Sized>(
        &mut self,
        observer: &O,
        now: HostTime,
    ) -> Vec<SectionIndex> {
        self.sections
            .iter_mut()
            .enumerate()
            .filter_map(|(i, section)| section.sync(observer, now).then_some(SectionIndex(i)))
            .collect()
    }

    /// Returns `true` once every section has settled.
    #[must_use]
    pub fn is_settled(&self, now: HostTime) -> bool {
        self.sections.iter().all(|s| s.is_settled(now))
    }

    /// Releases every section's visibility signal.
    pub fn release<O: VisibilityObserver + ?Sized>(&self, observer: &mut O) {
        for watch in self.sections.iter().filter_map(RevealSection::watch) {
            observer.unobserve(watch);
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;
    use crate::sequencer::presets;
    use crate::time::Duration;
    use crate::visibility::{ObserveOptions, ViewportWatcher};

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

    fn ms(ms: u64) -> HostTime {
        HostTime(ms * 1000)
    }

    fn services(watch: WatchId) -> RevealSection {
        RevealSection::new("services", watch)
            .with_header(presets::section_header(Duration::from_millis(400)))
            .with_items(presets::stagger_container(), presets::scroll_reveal(), 4)
    }

    #[test]
    fn half_visible_section_reveals_once() {
        let mut watcher = ViewportWatcher::new();
        let watch = watcher.observe(Some("services"), ObserveOptions::new(0.1, 0.0));
        let mut section = services(watch);

        // The section covers the lower half of the viewport on the first
        // layout pass.
        let bounds = Rect::new(0.0, 400.0, 1280.0, 800.0);
        let latched = watcher.layout_pass(VIEWPORT, |_| Some(bounds));
        assert_eq!(latched, &[watch]);

        let mut reveals = 0;
        for frame in 0..60_u64 {
            watcher.layout_pass(VIEWPORT, |_| Some(bounds));
            if section.sync(&watcher, ms(frame * 16)) {
                reveals += 1;
            }
        }
        assert_eq!(reveals, 1, "reveal triggered exactly once");
        assert_eq!(section.revealed_at(), Some(ms(0)));
    }

    #[test]
    fn unseen_section_stays_hidden() {
        let mut watcher = ViewportWatcher::new();
        let watch = watcher.observe(Some(()), ObserveOptions::SECTION);
        let mut section = services(watch);
        watcher.layout_pass(VIEWPORT, |_| Some(Rect::new(0.0, 2000.0, 1280.0, 2800.0)));
        assert!(!section.sync(&watcher, ms(0)));
        assert_eq!(section.header_state(ms(1_000)), Some(VisualState::faded(20.0)));
        assert_eq!(section.item_state(3, ms(1_000)), Some(VisualState::faded(30.0)));
        assert!(section.is_settled(ms(1_000)));
    }

    #[test]
    fn reveal_fans_out_to_items() {
        let mut watcher = ViewportWatcher::<()>::new();
        let watch = watcher.observe(None, ObserveOptions::SECTION);
        let mut section = services(watch);
        assert!(section.trigger(ms(100)));
        assert!(!section.trigger(ms(200)), "second trigger is a no-op");

        let items = section.items().expect("section has items");
        assert_eq!(items.child_start(0), Some(ms(100)));
        assert_eq!(items.child_start(3), Some(ms(550)));
        assert_eq!(section.item_count(), 4);
        assert!(!section.is_settled(ms(949)));
        assert!(section.is_settled(ms(950)));
        assert_eq!(section.item_state(3, ms(950)), Some(VisualState::REST));
    }

    #[test]
    fn on_load_sections_reveal_on_first_sync() {
        let watcher = ViewportWatcher::<()>::new();
        let mut hero = RevealSection::on_load("hero")
            .with_extra(presets::hero_card())
            .with_extra(presets::scroll_indicator());
        assert!(hero.sync(&watcher, ms(0)));
        assert!(!hero.sync(&watcher, ms(16)));
        assert_eq!(hero.extras().len(), 2);
        assert_eq!(hero.extra_state(0, ms(600)), Some(VisualState::REST));
        assert_eq!(hero.extra_state(1, ms(600)).map(|s| s.opacity), Some(0.0));
    }

    #[test]
    fn composer_reports_each_section_once() {
        let mut watcher = ViewportWatcher::new();
        let top = watcher.observe(Some(0.0_f64), ObserveOptions::SECTION);
        let below = watcher.observe(Some(1500.0), ObserveOptions::SECTION);

        let mut composer = SectionComposer::new();
        let a = composer.push(RevealSection::new("top", top).with_extra(presets::scroll_reveal()));
        let b = composer.push(RevealSection::new("below", below).with_extra(presets::scroll_reveal()));

        let bounds = |y: &f64| Some(Rect::new(0.0, *y, 1280.0, *y + 600.0));
        watcher.layout_pass(VIEWPORT, bounds);
        assert_eq!(composer.sync(&watcher, ms(0)), &[a]);
        assert!(composer.sync(&watcher, ms(16)).is_empty());

        // Scroll 1000 px: the second section now starts at y = 500.
        watcher.layout_pass(VIEWPORT, |y| bounds(&(*y - 1000.0)));
        assert_eq!(composer.sync(&watcher, ms(32)), &[b]);
        assert_eq!(composer.len(), 2);

        composer.release(&mut watcher);
        assert!(!watcher.has_entered_viewport(top));
        assert!(!watcher.has_entered_viewport(below));
    }
}
