// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Phase-driven reveal transitions.
//!
//! A [`Reveal`] maps a two-valued [`Phase`] onto a pair of [`VisualState`]s
//! (the [`Variants`]) and interpolates between them over a [`Transition`].
//! A [`StaggerGroup`] is a container whose phase change fans out to its
//! children, child `i` starting `delay_children + i * stagger_children` after
//! the container changes phase.
//!
//! All types here are clock-agnostic: callers pass the current
//! [`HostTime`] to every mutating and sampling call, so tests can drive
//! them with synthetic time.
//!
//! Setting the phase a reveal is already in does nothing. Changing phase
//! mid-transition starts the new transition from the state sampled at that
//! instant, so the element never jumps.

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::easing::Easing;
use crate::time::{Duration, HostTime};

/// The two poles of a reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not yet revealed (the initial phase).
    #[default]
    Hidden,
    /// Revealed.
    Visible,
}

/// The animatable visual properties of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation from the element's layout position, in CSS pixels.
    pub offset: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl VisualState {
    /// Fully opaque, untransformed.
    pub const REST: Self = Self::new(1.0, Vec2::ZERO, 1.0);

    /// Creates a visual state.
    #[must_use]
    pub const fn new(opacity: f64, offset: Vec2, scale: f64) -> Self {
        Self {
            opacity,
            offset,
            scale,
        }
    }

    /// Transparent and pushed `dy` pixels down.
    #[must_use]
    pub const fn faded(dy: f64) -> Self {
        Self::new(0.0, Vec2::new(0.0, dy), 1.0)
    }

    /// Linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            offset: self.offset.lerp(other.offset, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

/// Timing of a phase change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Interpolation length.
    pub duration: Duration,
    /// Wait between the phase change and the start of interpolation.
    pub delay: Duration,
    /// Progress curve.
    pub easing: Easing,
    /// Start-time increment between consecutive children.
    pub stagger_children: Duration,
    /// Offset of the first child's start from the container's phase change.
    pub delay_children: Duration,
}

impl Transition {
    /// The tween used when no timing is given: 0.3 s ease-out.
    pub const DEFAULT: Self = Self::new(Duration::from_millis(300), Easing::EaseOut);

    /// Applies the target state immediately.
    pub const INSTANT: Self = Self::new(Duration::ZERO, Easing::Linear);

    /// Creates a transition without delays.
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing,
            stagger_children: Duration::ZERO,
            delay_children: Duration::ZERO,
        }
    }

    /// Returns a copy with the given start delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns a copy with the given child stagger increment.
    #[must_use]
    pub const fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger_children = stagger;
        self
    }

    /// Returns a copy with the given first-child offset.
    #[must_use]
    pub const fn with_delay_children(mut self, delay: Duration) -> Self {
        self.delay_children = delay;
        self
    }

    /// Offset of child `index`'s start from its container's phase change.
    #[must_use]
    pub fn child_offset(&self, index: u32) -> Duration {
        self.delay_children + self.stagger_children * index
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A pair of visual states plus the timing between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variants {
    /// State while [`Phase::Hidden`].
    pub hidden: VisualState,
    /// State while [`Phase::Visible`].
    pub visible: VisualState,
    /// Timing used for changes in either direction.
    pub transition: Transition,
}

impl Variants {
    /// Returns the resting state for `phase`.
    #[must_use]
    pub const fn state(&self, phase: Phase) -> VisualState {
        match phase {
            Phase::Hidden => self.hidden,
            Phase::Visible => self.visible,
        }
    }

    /// The same states with every duration and delay removed.
    ///
    /// Used when the user asks the platform for reduced motion.
    #[must_use]
    pub const fn without_motion(self) -> Self {
        Self {
            transition: Transition::INSTANT,
            ..self
        }
    }
}

/// Linear progress of an interpolation that starts at `start` and lasts
/// `duration`, sampled at `now`.
fn progress(start: HostTime, duration: Duration, now: HostTime) -> f64 {
    if now < start {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// One element's phase-driven reveal.
#[derive(Clone, Debug)]
pub struct Reveal {
    variants: Variants,
    phase: Phase,
    from: VisualState,
    start: HostTime,
}

impl Reveal {
    /// Creates a reveal resting in [`Phase::Hidden`].
    #[must_use]
    pub const fn new(variants: Variants) -> Self {
        Self {
            variants,
            phase: Phase::Hidden,
            from: variants.hidden,
            start: HostTime::ZERO,
        }
    }

    /// Returns the variants.
    #[must_use]
    pub const fn variants(&self) -> &Variants {
        &self.variants
    }

    /// Returns the current target phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves to `phase` at `now`. Returns `false` (and changes nothing) if
    /// the reveal is already headed for `phase`.
    pub fn set_phase(&mut self, phase: Phase, now: HostTime) -> bool {
        self.set_phase_after(phase, now, Duration::ZERO)
    }

    /// Like [`set_phase`](Self::set_phase), with interpolation starting
    /// `extra_delay` later than the transition alone dictates.
    pub fn set_phase_after(&mut self, phase: Phase, now: HostTime, extra_delay: Duration) -> bool {
        if phase == self.phase {
            return false;
        }
        self.from = self.sample(now);
        self.phase = phase;
        self.start = now + self.variants.transition.delay + extra_delay;
        true
    }

    /// When interpolation toward the current phase begins (or began).
    #[must_use]
    pub const fn start_time(&self) -> HostTime {
        self.start
    }

    /// When interpolation toward the current phase ends (or ended).
    #[must_use]
    pub fn end_time(&self) -> HostTime {
        self.start + self.variants.transition.duration
    }

    /// Samples the visual state at `now`.
    #[must_use]
    pub fn sample(&self, now: HostTime) -> VisualState {
        let transition = &self.variants.transition;
        let t = transition
            .easing
            .apply(progress(self.start, transition.duration, now));
        self.from.lerp(self.variants.state(self.phase), t)
    }

    /// Returns `true` once the reveal rests at its target state.
    #[must_use]
    pub fn is_settled(&self, now: HostTime) -> bool {
        now >= self.end_time()
    }
}

/// A single-value tween with retargeting.
///
/// Used for properties outside [`VisualState`], such as a card's content
/// height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: HostTime,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A tween resting at `value`.
    #[must_use]
    pub const fn fixed(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start: HostTime::ZERO,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Starts moving toward `to` from wherever the tween is at `now`.
    pub fn animate_to(&mut self, to: f64, now: HostTime, duration: Duration, easing: Easing) {
        self.from = self.sample(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Retargets without restarting the clock: the remaining time is kept
    /// and the curve is re-based on the value sampled at `now`.
    pub fn retarget(&mut self, to: f64, now: HostTime) {
        let remaining = self.end_time().saturating_duration_since(now);
        let easing = self.easing;
        self.animate_to(to, now, remaining, easing);
    }

    /// Jumps to `value` with no animation.
    pub fn set(&mut self, value: f64) {
        *self = Self::fixed(value);
    }

    /// Returns the value the tween is heading for.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.to
    }

    /// When the tween reaches its target.
    #[must_use]
    pub fn end_time(&self) -> HostTime {
        self.start + self.duration
    }

    /// Samples the value at `now`.
    #[must_use]
    pub fn sample(&self, now: HostTime) -> f64 {
        let t = self.easing.apply(progress(self.start, self.duration, now));
        self.from + (self.to - self.from) * t
    }

    /// Returns `true` once the tween rests at its target.
    #[must_use]
    pub fn is_settled(&self, now: HostTime) -> bool {
        now >= self.end_time()
    }
}

/// A container reveal whose phase changes cascade to staggered children.
#[derive(Clone, Debug)]
pub struct StaggerGroup {
    container: Reveal,
    children: Vec<Reveal>,
}

impl StaggerGroup {
    /// Creates a group with one child per entry of `children`.
    ///
    /// Child start offsets come from the container's transition
    /// (`delay_children`, `stagger_children`).
    #[must_use]
    pub fn new(container: Variants, children: impl IntoIterator<Item = Variants>) -> Self {
        Self {
            container: Reveal::new(container),
            children: children.into_iter().map(Reveal::new).collect(),
        }
    }

    /// Creates a group of `count` children sharing the same variants.
    #[must_use]
    pub fn uniform(container: Variants, child: Variants, count: usize) -> Self {
        Self::new(container, core::iter::repeat_n(child, count))
    }

    /// Moves the container and every child to `phase` at `now`.
    ///
    /// Returns `false` if the container is already headed for `phase`.
    pub fn set_phase(&mut self, phase: Phase, now: HostTime) -> bool {
        if !self.container.set_phase(phase, now) {
            return false;
        }
        let transition = self.container.variants.transition;
        for (i, child) in self.children.iter_mut().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "groups hold a handful of children"
            )]
            let offset = transition.child_offset(i as u32);
            child.set_phase_after(phase, now, offset);
        }
        true
    }

    /// Returns the container's current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.container.phase
    }

    /// Returns the container reveal.
    #[must_use]
    pub const fn container(&self) -> &Reveal {
        &self.container
    }

    /// Returns the child reveals in order.
    #[must_use]
    pub fn children(&self) -> &[Reveal] {
        &self.children
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// When child `index` begins interpolating, if it exists.
    #[must_use]
    pub fn child_start(&self, index: usize) -> Option<HostTime> {
        self.children.get(index).map(Reveal::start_time)
    }

    /// Returns `true` once the container and every child have settled.
    #[must_use]
    pub fn is_settled(&self, now: HostTime) -> bool {
        self.container.is_settled(now) && self.children.iter().all(|c| c.is_settled(now))
    }
}

/// A looping or one-shot keyframe track over evenly spaced stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframes<const N: usize> {
    /// Values at evenly spaced stops; the first is at progress 0 and the
    /// last at progress 1.
    pub values: [f64; N],
    /// Length of one pass through all stops.
    pub duration: Duration,
    /// Curve applied within each segment.
    pub easing: Easing,
    /// Wait before the first pass.
    pub delay: Duration,
    /// Whether passes repeat forever.
    pub repeat: bool,
}

impl<const N: usize> Keyframes<N> {
    /// Samples the track at `now` for a track started at `start`.
    #[must_use]
    pub fn sample(&self, start: HostTime, now: HostTime) -> f64 {
        let Some(&first) = self.values.first() else {
            return 0.0;
        };
        let begin = start + self.delay;
        if N == 1 || now < begin {
            return first;
        }
        let period = self.duration.micros();
        let mut elapsed = now.saturating_duration_since(begin).micros();
        if period == 0 || (!self.repeat && elapsed >= period) {
            return self.values[N - 1];
        }
        if self.repeat {
            elapsed %= period;
        }

        let segments = (N - 1) as u64;
        let scaled = elapsed * segments;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "segment index is below N"
        )]
        let segment = (scaled / period) as usize;
        let local = (scaled % period) as f64 / period as f64;
        let a = self.values[segment];
        let b = self.values[segment + 1];
        a + (b - a) * self.easing.apply(local)
    }
}

/// Timing presets used across the site.
pub mod presets {
    use kurbo::Vec2;

    use super::{Keyframes, Transition, Variants, VisualState};
    use crate::easing::Easing;
    use crate::time::Duration;

    /// Transparent only; no offset.
    const TRANSPARENT: VisualState = VisualState::new(0.0, Vec2::ZERO, 1.0);

    /// The hero card on page load: rises 20 px while fading in over 0.6 s.
    #[must_use]
    pub const fn hero_card() -> Variants {
        Variants {
            hidden: VisualState::faded(20.0),
            visible: VisualState::REST,
            transition: Transition::new(Duration::from_millis(600), Easing::EaseOut),
        }
    }

    /// The hero call-to-action row: children start 0.3 s in, 0.1 s apart.
    #[must_use]
    pub const fn button_group() -> Variants {
        Variants {
            hidden: TRANSPARENT,
            visible: VisualState::REST,
            transition: Transition::DEFAULT
                .with_delay_children(Duration::from_millis(300))
                .with_stagger(Duration::from_millis(100)),
        }
    }

    /// One call-to-action button.
    #[must_use]
    pub const fn button() -> Variants {
        Variants {
            hidden: VisualState::faded(10.0),
            visible: VisualState::REST,
            transition: Transition::new(Duration::from_millis(400), Easing::EaseOut),
        }
    }

    /// A card revealed on scroll.
    #[must_use]
    pub const fn scroll_reveal() -> Variants {
        Variants {
            hidden: VisualState::faded(30.0),
            visible: VisualState::REST,
            transition: Transition::new(Duration::from_millis(400), Easing::EaseOut),
        }
    }

    /// A list of scroll-revealed cards, 0.15 s apart.
    #[must_use]
    pub const fn stagger_container() -> Variants {
        Variants {
            hidden: TRANSPARENT,
            visible: VisualState::REST,
            transition: Transition::DEFAULT.with_stagger(Duration::from_millis(150)),
        }
    }

    /// A section heading that rises 20 px over `duration`.
    #[must_use]
    pub const fn section_header(duration: Duration) -> Variants {
        Variants {
            hidden: VisualState::faded(20.0),
            visible: VisualState::REST,
            transition: Transition::new(duration, Easing::EaseOut),
        }
    }

    /// A block that fades and rises 20 px over `duration` after `delay`.
    #[must_use]
    pub const fn delayed_block(duration: Duration, delay: Duration) -> Variants {
        Variants {
            hidden: VisualState::faded(20.0),
            visible: VisualState::REST,
            transition: Transition::new(duration, Easing::EaseOut).with_delay(delay),
        }
    }

    /// A grid whose items start `step` apart.
    #[must_use]
    pub const fn grid(step: Duration) -> Variants {
        Variants {
            hidden: VisualState::REST,
            visible: VisualState::REST,
            transition: Transition::INSTANT.with_stagger(step),
        }
    }

    /// The scroll indicator fading in after the hero has landed.
    #[must_use]
    pub const fn scroll_indicator() -> Variants {
        Variants {
            hidden: TRANSPARENT,
            visible: VisualState::REST,
            transition: Transition::new(Duration::from_millis(600), Easing::EaseOut)
                .with_delay(Duration::from_millis(800)),
        }
    }

    /// The scroll indicator's arrow bob, in pixels along y.
    pub const SCROLL_BOB: Keyframes<3> = Keyframes {
        values: [0.0, 8.0, 0.0],
        duration: Duration::from_millis(2000),
        easing: Easing::EaseInOut,
        delay: Duration::ZERO,
        repeat: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(ms: u64) -> HostTime {
        HostTime(ms * 1000)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn reveal_starts_hidden() {
        let reveal = Reveal::new(presets::scroll_reveal());
        assert_eq!(reveal.phase(), Phase::Hidden);
        assert_eq!(reveal.sample(ms(10_000)), VisualState::faded(30.0));
    }

    #[test]
    fn reveal_interpolates_to_visible() {
        let mut reveal = Reveal::new(presets::scroll_reveal());
        assert!(reveal.set_phase(Phase::Visible, ms(100)));
        assert_eq!(reveal.sample(ms(100)), VisualState::faded(30.0));

        let mid = reveal.sample(ms(300));
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0, "ease-out front-loads: {mid:?}");
        assert!(mid.offset.y > 0.0 && mid.offset.y < 15.0, "offset shrinks: {mid:?}");

        assert!(!reveal.is_settled(ms(499)));
        assert!(reveal.is_settled(ms(500)));
        assert_eq!(reveal.sample(ms(500)), VisualState::REST);
    }

    #[test]
    fn replaying_phase_is_idempotent() {
        let mut reveal = Reveal::new(presets::hero_card());
        assert!(reveal.set_phase(Phase::Visible, ms(0)));
        let start = reveal.start_time();
        let before = reveal.sample(ms(200));

        // Triggered again while animating, and again after settling.
        assert!(!reveal.set_phase(Phase::Visible, ms(200)));
        assert_eq!(reveal.start_time(), start, "no restart");
        assert_eq!(reveal.sample(ms(200)), before);
        assert!(!reveal.set_phase(Phase::Visible, ms(5_000)));
        assert_eq!(reveal.sample(ms(5_000)), VisualState::REST);
    }

    #[test]
    fn interruption_starts_from_sampled_state() {
        let mut reveal = Reveal::new(presets::scroll_reveal());
        reveal.set_phase(Phase::Visible, ms(0));
        let at_interrupt = reveal.sample(ms(200));
        assert!(reveal.set_phase(Phase::Hidden, ms(200)));
        assert_eq!(reveal.sample(ms(200)), at_interrupt, "no jump on reversal");
        let end = reveal.sample(ms(600));
        assert!(close(end.opacity, 0.0) && close(end.offset.y, 30.0), "{end:?}");
    }

    #[test]
    fn transition_delay_holds_initial_state() {
        let mut reveal = Reveal::new(presets::scroll_indicator());
        reveal.set_phase(Phase::Visible, ms(0));
        assert_eq!(reveal.sample(ms(799)).opacity, 0.0);
        assert!(reveal.sample(ms(1_100)).opacity > 0.0);
        assert!(close(reveal.sample(ms(1_400)).opacity, 1.0));
    }

    #[test]
    fn stagger_gaps_equal_increment() {
        let mut group = StaggerGroup::uniform(presets::stagger_container(), presets::scroll_reveal(), 4);
        assert!(group.set_phase(Phase::Visible, ms(1_000)));
        let starts: Vec<_> = (0..4).filter_map(|i| group.child_start(i)).collect();
        assert_eq!(starts.len(), 4);
        for pair in starts.windows(2) {
            assert_eq!(
                pair[1].saturating_duration_since(pair[0]),
                Duration::from_millis(150),
                "gap between consecutive children"
            );
        }
        assert_eq!(starts[0], ms(1_000));
        // Children strictly ordered: a later child never leads an earlier one.
        let sample = |i: usize| group.children()[i].sample(ms(1_200)).opacity;
        assert!(sample(0) > sample(1), "first child leads");
        assert_eq!(sample(2), 0.0, "third child has not started");
    }

    #[test]
    fn delay_children_offsets_first_child() {
        let mut group = StaggerGroup::uniform(presets::button_group(), presets::button(), 3);
        group.set_phase(Phase::Visible, ms(0));
        assert_eq!(group.child_start(0), Some(ms(300)));
        assert_eq!(group.child_start(1), Some(ms(400)));
        assert_eq!(group.child_start(2), Some(ms(500)));
        assert_eq!(group.child_start(3), None);
        assert!(!group.is_settled(ms(899)));
        assert!(group.is_settled(ms(900)));
    }

    #[test]
    fn stagger_group_ignores_repeated_phase() {
        let mut group = StaggerGroup::uniform(presets::stagger_container(), presets::scroll_reveal(), 2);
        assert!(group.set_phase(Phase::Visible, ms(0)));
        assert!(!group.set_phase(Phase::Visible, ms(50)));
        assert_eq!(group.child_start(1), Some(ms(150)));
    }

    #[test]
    fn tween_retarget_keeps_remaining_time() {
        let mut tween = Tween::fixed(0.0);
        tween.animate_to(100.0, ms(0), Duration::from_millis(500), Easing::Linear);
        assert!(close(tween.sample(ms(250)), 50.0));
        tween.retarget(200.0, ms(250));
        assert_eq!(tween.end_time(), ms(500));
        assert!(close(tween.sample(ms(250)), 50.0), "continuous at retarget");
        assert!(close(tween.sample(ms(500)), 200.0));
        assert_eq!(tween.target(), 200.0);
    }

    #[test]
    fn keyframes_bob_and_repeat() {
        let bob = presets::SCROLL_BOB;
        let start = ms(0);
        assert!(close(bob.sample(start, ms(0)), 0.0));
        assert!(close(bob.sample(start, ms(1_000)), 8.0));
        assert!(close(bob.sample(start, ms(2_000)), 0.0));
        assert!(close(bob.sample(start, ms(3_000)), 8.0), "second pass");
        let quarter = bob.sample(start, ms(500));
        assert!(quarter > 0.0 && quarter < 8.0, "mid-segment: {quarter}");
    }

    #[test]
    fn one_shot_keyframes_hold_last_value() {
        let track = Keyframes {
            values: [0.0, 10.0],
            duration: Duration::from_millis(100),
            easing: Easing::Linear,
            delay: Duration::from_millis(50),
            repeat: false,
        };
        assert!(close(track.sample(ms(0), ms(40)), 0.0));
        assert!(close(track.sample(ms(0), ms(100)), 5.0));
        assert!(close(track.sample(ms(0), ms(1_000)), 10.0));
    }

    #[test]
    fn reduced_motion_jumps_to_target() {
        let mut group = StaggerGroup::uniform(
            presets::stagger_container().without_motion(),
            presets::scroll_reveal().without_motion(),
            3,
        );
        group.set_phase(Phase::Visible, ms(40));
        assert!(group.is_settled(ms(40)), "nothing left to animate");
        assert_eq!(group.children()[2].sample(ms(40)), VisualState::REST);
    }
}
