// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines trace output.
//!
//! [`JsonLinesSink`] writes one JSON object per event, one event per line,
//! as the events arrive. Every object carries an `"event"` tag; times are in
//! microseconds.

use std::io::Write;

use serde_json::{Value, json};
use spiral_core::trace::{
    CardToggleEvent, FrameSummary, FrameTickEvent, MeasurementEvent, PointerModeEvent,
    SectionRevealEvent, TraceSink,
};

/// Streams trace events as newline-delimited JSON.
pub struct JsonLinesSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink").finish_non_exhaustive()
    }
}

impl JsonLinesSink {
    /// Creates a sink that writes to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, value: &Value) {
        if serde_json::to_writer(&mut self.writer, value).is_ok() {
            let _ = self.writer.write_all(b"\n");
        }
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_frame_tick(&mut self, e: &FrameTickEvent) {
        self.line(&json!({
            "event": "frame_tick",
            "frame_index": e.frame_index,
            "now_us": e.now.micros(),
        }));
    }

    fn on_section_reveal(&mut self, e: &SectionRevealEvent) {
        self.line(&json!({
            "event": "section_reveal",
            "frame_index": e.frame_index,
            "section": e.section,
            "items": e.items,
            "on_load": e.on_load,
            "at_us": e.at.micros(),
        }));
    }

    fn on_card_toggle(&mut self, e: &CardToggleEvent) {
        self.line(&json!({
            "event": "card_toggle",
            "frame_index": e.frame_index,
            "card": e.card.index(),
            "state": format!("{:?}", e.state),
            "at_us": e.at.micros(),
        }));
    }

    fn on_measurement(&mut self, e: &MeasurementEvent) {
        self.line(&json!({
            "event": "measurement",
            "frame_index": e.frame_index,
            "card": e.card.index(),
            "height": e.height,
        }));
    }

    fn on_pointer_mode(&mut self, e: &PointerModeEvent) {
        self.line(&json!({
            "event": "pointer_mode",
            "mode": format!("{:?}", e.mode),
            "touch": e.capabilities.touch,
        }));
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.line(&json!({
            "event": "frame_summary",
            "frame_index": s.frame_index,
            "now_us": s.now.micros(),
            "dt_us": s.dt.micros(),
            "updates": s.updates,
            "animating": s.animating,
            "sync_us": s.sync.micros(),
            "animate_us": s.animate.micros(),
            "evaluate_us": s.evaluate.micros(),
            "present_us": s.present.micros(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiral_core::pointer::{PointerCapabilities, PointerMode};
    use spiral_core::time::HostTime;

    #[test]
    fn one_object_per_line() {
        let mut sink = JsonLinesSink::with_writer(Vec::<u8>::new());
        sink.on_frame_tick(&FrameTickEvent {
            frame_index: 2,
            now: HostTime(32_000),
        });
        sink.on_section_reveal(&SectionRevealEvent {
            frame_index: 2,
            section: "contact",
            items: 0,
            on_load: false,
            at: HostTime(32_000),
        });
        sink.on_pointer_mode(&PointerModeEvent {
            capabilities: PointerCapabilities::detected(true),
            mode: PointerMode::Native,
        });

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 3, "got: {output}");
        assert_eq!(lines[0]["event"], "frame_tick");
        assert_eq!(lines[0]["now_us"], 32_000);
        assert_eq!(lines[1]["section"], "contact");
        assert_eq!(lines[1]["on_load"], false);
        assert_eq!(lines[2]["mode"], "Native");
        assert_eq!(lines[2]["touch"], true);
    }
}
