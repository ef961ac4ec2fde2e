// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site-wide motion tunables.

use crate::pointer::Indicator;
use crate::spring::SpringConfig;
use crate::time::Duration;
use crate::visibility::ObserveOptions;

/// Tunables shared by the whole motion layer.
///
/// Per-element timings live in [`sequencer::presets`](crate::sequencer::presets)
/// and [`ExpansionTiming`](crate::card::ExpansionTiming).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Visibility options for page sections.
    pub section: ObserveOptions,
    /// Visibility options for lazily mounted content.
    pub lazy: ObserveOptions,
    /// Spring for the cursor indicators.
    pub cursor_spring: SpringConfig,
    /// Indicator scale while over a link or button.
    pub interactive_scale: f64,
    /// The small cursor indicator.
    pub dot: Indicator,
    /// The large cursor indicator.
    pub ring: Indicator,
    /// Upper bound on the frame delta fed to integrators.
    pub max_frame_delta: Duration,
}

impl MotionConfig {
    /// The values the site ships with.
    pub const SITE: Self = Self {
        section: ObserveOptions::SECTION,
        lazy: ObserveOptions::LAZY,
        cursor_spring: SpringConfig::CURSOR,
        interactive_scale: 1.5,
        dot: Indicator::DOT,
        ring: Indicator::RING,
        max_frame_delta: Duration::from_millis(100),
    };
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::SITE
    }
}
