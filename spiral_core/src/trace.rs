// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the frame loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! frame-loop instrumentation calls as motion state changes. All method
//! bodies default to no-ops, so implementing only the events you care about
//! is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing. When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! [`FrameSummaryBuilder`] collects phase timestamps during a frame and
//! produces a [`FrameSummary`] at the end.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::card::{CardId, CardState};
use crate::pointer::{PointerCapabilities, PointerMode};
use crate::time::{Duration, HostTime};
use crate::timing::FrameTick;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which phase of the frame loop is being measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Reading visibility signals and revealing sections.
    Sync,
    /// Sampling reveals, cards, and the pointer into the node store.
    Animate,
    /// Draining dirty channels.
    Evaluate,
    /// Writing changes to the host.
    Present,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the host delivers an animation-frame callback.
#[derive(Clone, Copy, Debug)]
pub struct FrameTickEvent {
    /// Monotonic frame counter.
    pub frame_index: u64,
    /// Host time of the callback.
    pub now: HostTime,
}

impl From<&FrameTick> for FrameTickEvent {
    fn from(tick: &FrameTick) -> Self {
        Self {
            frame_index: tick.frame_index,
            now: tick.now,
        }
    }
}

/// Emitted when a section starts its reveal.
#[derive(Clone, Copy, Debug)]
pub struct SectionRevealEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Section name.
    pub section: &'static str,
    /// Number of staggered items in the section.
    pub items: usize,
    /// Whether the section revealed on load rather than on visibility.
    pub on_load: bool,
    /// When the reveal started.
    pub at: HostTime,
}

/// Emitted when a card changes state.
#[derive(Clone, Copy, Debug)]
pub struct CardToggleEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Which card.
    pub card: CardId,
    /// The state the card moved to.
    pub state: CardState,
    /// When the toggle happened.
    pub at: HostTime,
}

/// Emitted when an expanding card receives its content height.
#[derive(Clone, Copy, Debug)]
pub struct MeasurementEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Which card.
    pub card: CardId,
    /// Measured content height in CSS pixels.
    pub height: f64,
}

/// Emitted once, when the pointer follower is created.
#[derive(Clone, Copy, Debug)]
pub struct PointerModeEvent {
    /// What the platform reported.
    pub capabilities: PointerCapabilities,
    /// The resulting mode.
    pub mode: PointerMode,
}

/// Per-frame summary produced by [`FrameSummaryBuilder`].
#[derive(Clone, Copy, Debug)]
pub struct FrameSummary {
    /// Frame counter.
    pub frame_index: u64,
    /// Host time of the callback.
    pub now: HostTime,
    /// Delta fed to the integrators this frame.
    pub dt: Duration,
    /// Property updates handed to the presenter.
    pub updates: usize,
    /// Whether anything is still moving after this frame.
    pub animating: bool,
    /// Sync phase duration (zero if not measured).
    pub sync: Duration,
    /// Animate phase duration (zero if not measured).
    pub animate: Duration,
    /// Evaluate phase duration (zero if not measured).
    pub evaluate: Duration,
    /// Present phase duration (zero if not measured).
    pub present: Duration,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the frame loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an animation-frame callback is received.
    fn on_frame_tick(&mut self, e: &FrameTickEvent) {
        _ = e;
    }

    /// Called when a section starts its reveal.
    fn on_section_reveal(&mut self, e: &SectionRevealEvent) {
        _ = e;
    }

    /// Called when a card expands or collapses.
    fn on_card_toggle(&mut self, e: &CardToggleEvent) {
        _ = e;
    }

    /// Called when an expanding card is measured.
    fn on_measurement(&mut self, e: &MeasurementEvent) {
        _ = e;
    }

    /// Called when the pointer mode is decided.
    fn on_pointer_mode(&mut self, e: &PointerModeEvent) {
        _ = e;
    }

    /// Called with a per-frame summary.
    fn on_frame_summary(&mut self, s: &FrameSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`FrameTickEvent`].
    #[inline]
    pub fn frame_tick(&mut self, e: &FrameTickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SectionRevealEvent`].
    #[inline]
    pub fn section_reveal(&mut self, e: &SectionRevealEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_section_reveal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CardToggleEvent`].
    #[inline]
    pub fn card_toggle(&mut self, e: &CardToggleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_card_toggle(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MeasurementEvent`].
    #[inline]
    pub fn measurement(&mut self, e: &MeasurementEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_measurement(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PointerModeEvent`].
    #[inline]
    pub fn pointer_mode(&mut self, e: &PointerModeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pointer_mode(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameSummary`].
    #[inline]
    pub fn frame_summary(&mut self, s: &FrameSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_frame_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// FrameSummaryBuilder
// ---------------------------------------------------------------------------

/// Collects phase timestamps during a frame and produces a [`FrameSummary`].
#[derive(Debug)]
pub struct FrameSummaryBuilder {
    tick: FrameTickEvent,
    dt: Duration,
    phase_starts: [Option<HostTime>; 4],
    phase_ends: [Option<HostTime>; 4],
    updates: usize,
    animating: bool,
}

impl FrameSummaryBuilder {
    /// Starts building a summary for the given tick and frame delta.
    #[must_use]
    pub fn new(tick: &FrameTickEvent, dt: Duration) -> Self {
        Self {
            tick: *tick,
            dt,
            phase_starts: [None; 4],
            phase_ends: [None; 4],
            updates: 0,
            animating: false,
        }
    }

    /// Records the start of a phase.
    pub fn phase_begin(&mut self, phase: PhaseKind, t: HostTime) {
        self.phase_starts[phase_index(phase)] = Some(t);
    }

    /// Records the end of a phase.
    pub fn phase_end(&mut self, phase: PhaseKind, t: HostTime) {
        self.phase_ends[phase_index(phase)] = Some(t);
    }

    /// Sets the number of property updates presented.
    pub fn set_updates(&mut self, updates: usize) {
        self.updates = updates;
    }

    /// Sets whether anything is still moving.
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Consumes the builder and produces the final [`FrameSummary`].
    #[must_use]
    pub fn finish(self) -> FrameSummary {
        FrameSummary {
            frame_index: self.tick.frame_index,
            now: self.tick.now,
            dt: self.dt,
            updates: self.updates,
            animating: self.animating,
            sync: self.phase_duration(PhaseKind::Sync),
            animate: self.phase_duration(PhaseKind::Animate),
            evaluate: self.phase_duration(PhaseKind::Evaluate),
            present: self.phase_duration(PhaseKind::Present),
        }
    }

    fn phase_duration(&self, phase: PhaseKind) -> Duration {
        let idx = phase_index(phase);
        match (self.phase_starts[idx], self.phase_ends[idx]) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }
}

/// Maps a [`PhaseKind`] to an array index.
const fn phase_index(phase: PhaseKind) -> usize {
    match phase {
        PhaseKind::Sync => 0,
        PhaseKind::Animate => 1,
        PhaseKind::Evaluate => 2,
        PhaseKind::Present => 3,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tick() -> FrameTickEvent {
        FrameTickEvent {
            frame_index: 42,
            now: HostTime(1_000_000),
        }
    }

    #[test]
    fn frame_tick_event_from_frame_tick() {
        let tick = FrameTick {
            now: HostTime(100),
            frame_index: 7,
        };
        let evt = FrameTickEvent::from(&tick);
        assert_eq!(evt.frame_index, 7);
        assert_eq!(evt.now, HostTime(100));
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_frame_tick(&sample_tick());
        sink.on_pointer_mode(&PointerModeEvent {
            capabilities: PointerCapabilities::UNKNOWN,
            mode: PointerMode::Follow,
        });
        sink.on_frame_summary(&FrameSummaryBuilder::new(&sample_tick(), Duration::ZERO).finish());
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.frame_tick(&sample_tick());
        tracer.section_reveal(&SectionRevealEvent {
            frame_index: 0,
            section: "hero",
            items: 0,
            on_load: true,
            at: HostTime::ZERO,
        });
    }

    #[test]
    fn summary_builder_computes_durations() {
        let mut builder =
            FrameSummaryBuilder::new(&sample_tick(), Duration::from_micros(16_667));

        builder.phase_begin(PhaseKind::Sync, HostTime(1_000_000));
        builder.phase_end(PhaseKind::Sync, HostTime(1_000_020));
        builder.phase_begin(PhaseKind::Animate, HostTime(1_000_020));
        builder.phase_end(PhaseKind::Animate, HostTime(1_000_150));
        builder.phase_begin(PhaseKind::Evaluate, HostTime(1_000_150));
        builder.phase_end(PhaseKind::Evaluate, HostTime(1_000_180));
        builder.phase_begin(PhaseKind::Present, HostTime(1_000_180));
        builder.phase_end(PhaseKind::Present, HostTime(1_000_400));
        builder.set_updates(9);
        builder.set_animating(true);

        let summary = builder.finish();
        assert_eq!(summary.sync, Duration::from_micros(20));
        assert_eq!(summary.animate, Duration::from_micros(130));
        assert_eq!(summary.evaluate, Duration::from_micros(30));
        assert_eq!(summary.present, Duration::from_micros(220));
        assert_eq!(summary.updates, 9);
        assert!(summary.animating);
        assert_eq!(summary.frame_index, 42);
    }

    #[test]
    fn summary_builder_missing_phases_are_zero() {
        let summary = FrameSummaryBuilder::new(&sample_tick(), Duration::ZERO).finish();
        assert_eq!(summary.sync, Duration::ZERO);
        assert_eq!(summary.animate, Duration::ZERO);
        assert_eq!(summary.evaluate, Duration::ZERO);
        assert_eq!(summary.present, Duration::ZERO);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            ticks: Vec<u64>,
            toggles: Vec<CardState>,
        }
        impl TraceSink for RecordingSink {
            fn on_frame_tick(&mut self, e: &FrameTickEvent) {
                self.ticks.push(e.frame_index);
            }
            fn on_card_toggle(&mut self, e: &CardToggleEvent) {
                self.toggles.push(e.state);
            }
        }

        let mut sink = RecordingSink {
            ticks: Vec::new(),
            toggles: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.frame_tick(&sample_tick());
        tracer.card_toggle(&CardToggleEvent {
            frame_index: 42,
            card: crate::card::CardDeck::new().push(crate::card::ExpansionTiming::SERVICE_CARD),
            state: CardState::Expanded,
            at: HostTime(1_000_000),
        });
        drop(tracer);
        assert_eq!(sink.ticks, &[42]);
        assert_eq!(sink.toggles, &[CardState::Expanded]);
    }
}
