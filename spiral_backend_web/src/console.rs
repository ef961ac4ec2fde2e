// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trace sink that logs to the browser console.

use alloc::format;
use alloc::string::String;

use spiral_core::trace::{
    CardToggleEvent, FrameSummary, MeasurementEvent, PointerModeEvent, SectionRevealEvent,
    TraceSink,
};

/// Writes one `console.log` line per event.
///
/// Frame ticks are not logged. Frame summaries are logged only for frames
/// that presented updates, so an idle page stays quiet.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

fn log(line: &str) {
    web_sys::console::log_1(&line.into());
}

/// Formats a section reveal line.
#[must_use]
pub fn format_section_reveal(e: &SectionRevealEvent) -> String {
    let trigger = if e.on_load { "load" } else { "viewport" };
    format!(
        "[spiral] frame {} reveal {} ({} items, {trigger}) at {:?}",
        e.frame_index, e.section, e.items, e.at
    )
}

impl TraceSink for ConsoleSink {
    fn on_section_reveal(&mut self, e: &SectionRevealEvent) {
        log(&format_section_reveal(e));
    }

    fn on_card_toggle(&mut self, e: &CardToggleEvent) {
        log(&format!(
            "[spiral] frame {} card {:?} -> {:?}",
            e.frame_index, e.card, e.state
        ));
    }

    fn on_measurement(&mut self, e: &MeasurementEvent) {
        log(&format!(
            "[spiral] frame {} card {:?} measured {}px",
            e.frame_index, e.card, e.height
        ));
    }

    fn on_pointer_mode(&mut self, e: &PointerModeEvent) {
        log(&format!(
            "[spiral] pointer {:?} (touch: {:?})",
            e.mode, e.capabilities.touch
        ));
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        if s.updates == 0 {
            return;
        }
        log(&format!(
            "[spiral] frame {} dt={:?} updates={} animating={}",
            s.frame_index, s.dt, s.updates, s.animating
        ));
    }
}

#[cfg(test)]
mod tests {
    use spiral_core::time::HostTime;

    use super::*;

    #[test]
    fn reveal_line() {
        let line = format_section_reveal(&SectionRevealEvent {
            frame_index: 3,
            section: "services",
            items: 4,
            on_load: false,
            at: HostTime(48_000),
        });
        assert!(line.starts_with("[spiral] frame 3 reveal services (4 items, viewport)"), "{line}");
    }
}
