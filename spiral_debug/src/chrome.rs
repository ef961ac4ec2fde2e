// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads events collected by a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes
//! [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Frame summaries become complete (`"X"`) events per measured phase, so
//! the sync/animate/evaluate/present split of each frame is visible on the
//! timeline. Everything else is an instant event.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};
use spiral_core::time::{Duration, HostTime};
use spiral_core::trace::{FrameSummary, PhaseKind};

use crate::recorder::RecordedEvent;

const TID_FRAME: u32 = 0;
const TID_SECTIONS: u32 = 1;
const TID_CARDS: u32 = 2;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::new();

    for recorded in events {
        match recorded {
            RecordedEvent::FrameTick(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "FrameTick",
                    "cat": "Frame",
                    "ts": e.now.micros(),
                    "pid": 0,
                    "tid": TID_FRAME,
                    "s": "g",
                    "args": {
                        "frame_index": e.frame_index,
                    }
                }));
            }
            RecordedEvent::SectionReveal(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": format!("Reveal {}", e.section),
                    "cat": "Section",
                    "ts": e.at.micros(),
                    "pid": 0,
                    "tid": TID_SECTIONS,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "items": e.items,
                        "on_load": e.on_load,
                    }
                }));
            }
            RecordedEvent::CardToggle(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": format!("{:?}", e.state),
                    "cat": "Card",
                    "ts": e.at.micros(),
                    "pid": 0,
                    "tid": TID_CARDS,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "card": e.card.index(),
                    }
                }));
            }
            RecordedEvent::Measurement(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Measurement",
                    "cat": "Card",
                    "ts": 0,
                    "pid": 0,
                    "tid": TID_CARDS,
                    "s": "p",
                    "args": {
                        "frame_index": e.frame_index,
                        "card": e.card.index(),
                        "height": e.height,
                    }
                }));
            }
            RecordedEvent::PointerMode(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "PointerMode",
                    "cat": "Pointer",
                    "ts": 0,
                    "pid": 0,
                    "tid": TID_FRAME,
                    "s": "p",
                    "args": {
                        "mode": format!("{:?}", e.mode),
                        "touch": e.capabilities.touch,
                    }
                }));
            }
            RecordedEvent::FrameSummary(s) => push_phases(&mut out, s),
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

fn push_phases(out: &mut Vec<Value>, s: &FrameSummary) {
    let mut start: HostTime = s.now;
    for (phase, dur) in [
        (PhaseKind::Sync, s.sync),
        (PhaseKind::Animate, s.animate),
        (PhaseKind::Evaluate, s.evaluate),
        (PhaseKind::Present, s.present),
    ] {
        if dur == Duration::ZERO {
            continue;
        }
        out.push(json!({
            "ph": "X",
            "name": format!("{phase:?}"),
            "cat": "Frame",
            "ts": start.micros(),
            "dur": dur.micros(),
            "pid": 0,
            "tid": TID_FRAME,
            "args": {
                "frame_index": s.frame_index,
            }
        }));
        start = start + dur;
    }
    out.push(json!({
        "ph": "i",
        "name": "FrameSummary",
        "cat": "Summary",
        "ts": s.now.micros(),
        "pid": 0,
        "tid": TID_FRAME,
        "s": "g",
        "args": {
            "frame_index": s.frame_index,
            "dt_us": s.dt.micros(),
            "updates": s.updates,
            "animating": s.animating,
        }
    }));
}
