// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.

use spiral_core::trace::{
    CardToggleEvent, FrameSummary, FrameTickEvent, MeasurementEvent, PointerModeEvent,
    SectionRevealEvent, TraceSink,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A frame tick.
    FrameTick(FrameTickEvent),
    /// A section reveal.
    SectionReveal(SectionRevealEvent),
    /// A card toggle.
    CardToggle(CardToggleEvent),
    /// A card measurement.
    Measurement(MeasurementEvent),
    /// The pointer mode decision.
    PointerMode(PointerModeEvent),
    /// A frame summary.
    FrameSummary(FrameSummary),
}

impl RecordedEvent {
    /// Returns the frame the event belongs to, if it carries one.
    #[must_use]
    pub fn frame_index(&self) -> Option<u64> {
        match self {
            Self::FrameTick(e) => Some(e.frame_index),
            Self::SectionReveal(e) => Some(e.frame_index),
            Self::CardToggle(e) => Some(e.frame_index),
            Self::Measurement(e) => Some(e.frame_index),
            Self::PointerMode(_) => None,
            Self::FrameSummary(s) => Some(s.frame_index),
        }
    }
}

/// A [`TraceSink`] that stores every event in arrival order.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Returns the names of the sections revealed, in order.
    #[must_use]
    pub fn revealed_sections(&self) -> Vec<&'static str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::SectionReveal(r) => Some(r.section),
                _ => None,
            })
            .collect()
    }

    /// Removes and returns all recorded events.
    pub fn take(&mut self) -> Vec<RecordedEvent> {
        std::mem::take(&mut self.events)
    }
}

impl TraceSink for RecorderSink {
    fn on_frame_tick(&mut self, e: &FrameTickEvent) {
        self.events.push(RecordedEvent::FrameTick(*e));
    }

    fn on_section_reveal(&mut self, e: &SectionRevealEvent) {
        self.events.push(RecordedEvent::SectionReveal(*e));
    }

    fn on_card_toggle(&mut self, e: &CardToggleEvent) {
        self.events.push(RecordedEvent::CardToggle(*e));
    }

    fn on_measurement(&mut self, e: &MeasurementEvent) {
        self.events.push(RecordedEvent::Measurement(*e));
    }

    fn on_pointer_mode(&mut self, e: &PointerModeEvent) {
        self.events.push(RecordedEvent::PointerMode(*e));
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.events.push(RecordedEvent::FrameSummary(*s));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use spiral_core::section::{RevealSection, SectionComposer};
    use spiral_core::sequencer::presets;
    use spiral_core::time::HostTime;
    use spiral_core::trace::Tracer;
    use spiral_core::visibility::{ObserveOptions, VisibilityObserver, ViewportWatcher};

    use super::*;

    #[test]
    fn records_reveals_from_a_frame_loop() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let mut watcher = ViewportWatcher::new();
        let services = watcher.observe(Some(900.0_f64), ObserveOptions::SECTION);
        let mut composer = SectionComposer::new();
        composer.push(RevealSection::on_load("hero").with_extra(presets::hero_card()));
        composer.push(
            RevealSection::new("services", services)
                .with_items(presets::stagger_container(), presets::scroll_reveal(), 4),
        );

        let mut sink = RecorderSink::new();
        let mut scroll = 0.0;
        for frame in 0..20_u64 {
            let now = HostTime(frame * 16_000);
            let mut tracer = Tracer::new(&mut sink);
            tracer.frame_tick(&FrameTickEvent {
                frame_index: frame,
                now,
            });
            watcher.layout_pass(viewport, |top| {
                Some(Rect::new(0.0, top - scroll, 1000.0, top - scroll + 600.0))
            });
            for index in composer.sync(&watcher, now) {
                let Some(section) = composer.get(index) else {
                    continue;
                };
                tracer.section_reveal(&SectionRevealEvent {
                    frame_index: frame,
                    section: section.name(),
                    items: section.item_count(),
                    on_load: section.watch().is_none(),
                    at: now,
                });
            }
            scroll += 25.0;
        }

        assert_eq!(sink.revealed_sections(), ["hero", "services"]);
        let reveal_frames: Vec<_> = sink
            .events()
            .iter()
            .filter(|e| matches!(e, RecordedEvent::SectionReveal(_)))
            .filter_map(RecordedEvent::frame_index)
            .collect();
        // 10% of a 600 px section is 60 px; the top first passes 740 at
        // frame 7 (900 - 7 * 25 = 725).
        assert_eq!(reveal_frames, [0, 7]);
    }
}
