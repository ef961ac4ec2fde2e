// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame ticks and frame-delta bookkeeping.
//!
//! A backend delivers a [`FrameTick`] for every display frame (on the web,
//! each `requestAnimationFrame` callback). Time-based animations sample
//! directly at [`FrameTick::now`]; integrators such as the cursor spring need
//! the elapsed time since the previous frame, which [`FrameClock`] derives.
//!
//! Browsers stop delivering frames to hidden tabs, so the first frame after a
//! tab returns can arrive seconds after the previous one. [`FrameClock`]
//! clamps such gaps so integrators never take one enormous step.

use crate::time::{Duration, HostTime};

/// A frame opportunity delivered by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Host time of the frame callback.
    pub now: HostTime,
    /// Monotonically increasing frame counter.
    pub frame_index: u64,
}

/// Derives clamped per-frame deltas from successive [`FrameTick`]s.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last: Option<HostTime>,
    max_delta: Duration,
}

impl FrameClock {
    /// Creates a clock whose deltas never exceed `max_delta`.
    #[must_use]
    pub const fn new(max_delta: Duration) -> Self {
        Self {
            last: None,
            max_delta,
        }
    }

    /// Advances to `tick` and returns the time since the previous tick.
    ///
    /// The first tick yields [`Duration::ZERO`], as does a tick whose time
    /// is not after the previous one.
    pub fn advance(&mut self, tick: &FrameTick) -> Duration {
        let delta = match self.last {
            Some(last) => tick.now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        if self.last.is_none_or(|last| tick.now > last) {
            self.last = Some(tick.now);
        }
        delta.min(self.max_delta)
    }

    /// Returns the time of the most recent tick, if any.
    #[must_use]
    pub const fn last(&self) -> Option<HostTime> {
        self.last
    }

    /// Forgets the previous tick; the next delta will be zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
