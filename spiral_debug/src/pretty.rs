// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Times are
//! printed in milliseconds.

use std::io::Write;

use spiral_core::time::HostTime;
use spiral_core::trace::{
    CardToggleEvent, FrameSummary, FrameTickEvent, MeasurementEvent, PointerModeEvent,
    SectionRevealEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    ticks: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    ///
    /// Frame ticks are not printed; see [`with_ticks`](Self::with_ticks).
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            ticks: false,
        }
    }

    /// Also prints a line for every frame tick.
    #[must_use]
    pub fn with_ticks(mut self) -> Self {
        self.ticks = true;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.saturating_duration_since(HostTime::ZERO).as_millis_f64()
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_frame_tick(&mut self, e: &FrameTickEvent) {
        if !self.ticks {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[tick] frame={} now={:.1}ms",
            e.frame_index,
            ms(e.now),
        );
    }

    fn on_section_reveal(&mut self, e: &SectionRevealEvent) {
        let trigger = if e.on_load { "load" } else { "viewport" };
        let _ = writeln!(
            self.writer,
            "[reveal] frame={} section={} items={} trigger={trigger} at {:.1}ms",
            e.frame_index,
            e.section,
            e.items,
            ms(e.at),
        );
    }

    fn on_card_toggle(&mut self, e: &CardToggleEvent) {
        let _ = writeln!(
            self.writer,
            "[card] frame={} card={} -> {:?} at {:.1}ms",
            e.frame_index,
            e.card.index(),
            e.state,
            ms(e.at),
        );
    }

    fn on_measurement(&mut self, e: &MeasurementEvent) {
        let _ = writeln!(
            self.writer,
            "[measure] frame={} card={} height={:.1}px",
            e.frame_index,
            e.card.index(),
            e.height,
        );
    }

    fn on_pointer_mode(&mut self, e: &PointerModeEvent) {
        let touch = match e.capabilities.touch {
            Some(true) => "yes",
            Some(false) => "no",
            None => "?",
        };
        let _ = writeln!(self.writer, "[pointer] mode={:?} touch={touch}", e.mode);
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        let _ = writeln!(
            self.writer,
            "[summary] frame={} dt={:.2}ms updates={} animating={} \
             sync={}µs animate={}µs eval={}µs present={}µs",
            s.frame_index,
            s.dt.as_millis_f64(),
            s.updates,
            s.animating,
            s.sync.micros(),
            s.animate.micros(),
            s.evaluate.micros(),
            s.present.micros(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiral_core::card::{CardDeck, CardState, ExpansionTiming};
    use spiral_core::pointer::{PointerCapabilities, PointerMode};

    #[test]
    fn ticks_are_opt_in() {
        let tick = FrameTickEvent {
            frame_index: 1,
            now: HostTime(16_000),
        };
        let mut quiet = PrettyPrintSink::with_writer(Vec::<u8>::new());
        quiet.on_frame_tick(&tick);
        assert!(quiet.into_inner().is_empty(), "ticks print only when asked");

        let mut loud = PrettyPrintSink::with_writer(Vec::<u8>::new()).with_ticks();
        loud.on_frame_tick(&tick);
        let output = String::from_utf8(loud.into_inner()).unwrap();
        assert!(output.contains("[tick] frame=1 now=16.0ms"), "got: {output}");
    }

    #[test]
    fn pretty_print_reveal_and_card() {
        let mut deck = CardDeck::new();
        let card = deck.push(ExpansionTiming::SERVICE_CARD);
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_section_reveal(&SectionRevealEvent {
            frame_index: 4,
            section: "case-studies",
            items: 3,
            on_load: false,
            at: HostTime(64_000),
        });
        sink.on_card_toggle(&CardToggleEvent {
            frame_index: 9,
            card,
            state: CardState::Expanded,
            at: HostTime(144_000),
        });
        sink.on_pointer_mode(&PointerModeEvent {
            capabilities: PointerCapabilities::UNKNOWN,
            mode: PointerMode::Follow,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(
            output.contains("[reveal] frame=4 section=case-studies items=3 trigger=viewport"),
            "got: {output}"
        );
        assert!(output.contains("[card] frame=9 card=0 -> Expanded"), "got: {output}");
        assert!(output.contains("[pointer] mode=Follow touch=?"), "got: {output}");
    }
}
