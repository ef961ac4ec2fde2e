// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spring-smoothed cursor indicators.
//!
//! [`PointerFollower`] owns the page's single pointer state. The move
//! handler is its only writer: it records the raw pointer position and
//! whether the pointer is over an interactive element. The frame loop
//! advances the springs once per tick and reads back one
//! [`IndicatorFrame`] per [`Indicator`].
//!
//! Raw moves between two frames overwrite each other; only the latest one
//! matters.
//!
//! On touch-capable devices the follower is created in
//! [`PointerMode::Native`] and ignores everything: there is no cursor to
//! follow, so nothing is rendered.

use kurbo::{Point, Vec2};

use crate::config::MotionConfig;
use crate::easing::Easing;
use crate::sequencer::Tween;
use crate::spring::{Spring, SpringConfig};
use crate::time::{Duration, HostTime};

/// What the platform reported about its pointing devices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointerCapabilities {
    /// Whether a touch screen is present, or `None` if the check could not
    /// be performed.
    pub touch: Option<bool>,
}

impl PointerCapabilities {
    /// The check could not be performed.
    pub const UNKNOWN: Self = Self { touch: None };

    /// The check ran and found `touch`.
    #[must_use]
    pub const fn detected(touch: bool) -> Self {
        Self { touch: Some(touch) }
    }

    /// Returns `true` only for a positive touch detection.
    #[must_use]
    pub const fn is_touch(self) -> bool {
        matches!(self.touch, Some(true))
    }
}

/// Whether the custom cursor is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerMode {
    /// Indicators follow the pointer.
    Follow,
    /// The platform cursor is used and no indicators are rendered.
    Native,
}

impl PointerMode {
    /// Picks the mode for the given capabilities.
    #[must_use]
    pub const fn for_capabilities(caps: PointerCapabilities) -> Self {
        if caps.is_touch() {
            Self::Native
        } else {
            Self::Follow
        }
    }
}

/// One cursor indicator's geometry and hover timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Indicator {
    /// Diameter in CSS pixels.
    pub size: f64,
    /// Offset from the pointer to the indicator's top-left corner.
    pub anchor: Vec2,
    /// Duration of the hover scale change.
    pub scale_duration: Duration,
}

impl Indicator {
    /// The solid 8 px dot.
    pub const DOT: Self = Self {
        size: 8.0,
        anchor: Vec2::new(-4.0, -4.0),
        scale_duration: Duration::from_millis(150),
    };

    /// The trailing 32 px ring.
    pub const RING: Self = Self {
        size: 32.0,
        anchor: Vec2::new(-16.0, -16.0),
        scale_duration: Duration::from_millis(200),
    };
}

/// Where to draw one indicator this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorFrame {
    /// Top-left corner in viewport coordinates.
    pub position: Point,
    /// Scale about the indicator's centre.
    pub scale: f64,
}

/// The page's pointer state.
#[derive(Clone, Debug)]
pub struct PointerFollower {
    mode: PointerMode,
    spring: SpringConfig,
    indicators: [Indicator; 2],
    interactive_scale: f64,
    x: Spring,
    y: Spring,
    over_interactive: bool,
    scales: [Tween; 2],
}

impl PointerFollower {
    /// Creates the follower; `caps` is consulted once, here.
    #[must_use]
    pub fn new(config: &MotionConfig, caps: PointerCapabilities) -> Self {
        Self {
            mode: PointerMode::for_capabilities(caps),
            spring: config.cursor_spring,
            indicators: [config.dot, config.ring],
            interactive_scale: config.interactive_scale,
            x: Spring::new(0.0),
            y: Spring::new(0.0),
            over_interactive: false,
            scales: [Tween::fixed(1.0), Tween::fixed(1.0)],
        }
    }

    /// Returns the mode chosen at construction.
    #[must_use]
    pub const fn mode(&self) -> PointerMode {
        self.mode
    }

    /// Returns `true` if indicators should be drawn at all.
    #[must_use]
    pub const fn renders_indicators(&self) -> bool {
        matches!(self.mode, PointerMode::Follow)
    }

    /// Records a pointer move to `position`.
    ///
    /// `over_interactive` is whether the event target or one of its
    /// ancestors is a link or button.
    pub fn on_pointer_move(&mut self, position: Point, over_interactive: bool, now: HostTime) {
        if !self.renders_indicators() {
            return;
        }
        self.x.set_target(position.x);
        self.y.set_target(position.y);
        if over_interactive != self.over_interactive {
            self.over_interactive = over_interactive;
            let scale = if over_interactive {
                self.interactive_scale
            } else {
                1.0
            };
            for (tween, indicator) in self.scales.iter_mut().zip(&self.indicators) {
                tween.animate_to(scale, now, indicator.scale_duration, Easing::EaseOut);
            }
        }
    }

    /// Returns whether the last move was over an interactive element.
    #[must_use]
    pub const fn is_over_interactive(&self) -> bool {
        self.over_interactive
    }

    /// Returns the raw pointer position last reported.
    #[must_use]
    pub const fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    /// Returns the smoothed pointer position.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    /// Advances the springs by one frame of length `dt`.
    ///
    /// Returns `true` while the smoothed position is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.renders_indicators() {
            return false;
        }
        let moving_x = self.x.step(&self.spring, dt);
        let moving_y = self.y.step(&self.spring, dt);
        moving_x || moving_y
    }

    /// Returns `true` while a hover scale change is running.
    #[must_use]
    pub fn is_scaling(&self, now: HostTime) -> bool {
        self.scales.iter().any(|t| !t.is_settled(now))
    }

    /// Returns the dot and ring frames at `now`, or `None` in
    /// [`PointerMode::Native`].
    #[must_use]
    pub fn indicators(&self, now: HostTime) -> Option<[IndicatorFrame; 2]> {
        if !self.renders_indicators() {
            return None;
        }
        let position = self.position();
        Some(core::array::from_fn(|i| IndicatorFrame {
            position: position + self.indicators[i].anchor,
            scale: self.scales[i].sample(now),
        }))
    }
}

/// Returns `true` for element tag names that count as interactive.
#[must_use]
pub fn is_interactive_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("a") || tag.eq_ignore_ascii_case("button")
}

/// Returns `true` if any tag on the path from the event target up through
/// its ancestors is interactive.
#[must_use]
pub fn is_interactive_path<'a>(tags: impl IntoIterator<Item = &'a str>) -> bool {
    tags.into_iter().any(is_interactive_tag)
}
