// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped spring integration.
//!
//! A [`Spring`] chases a target value with the dynamics of a mass on a
//! damped spring:
//!
//! ```text
//! m·x'' = −k·(x − target) − c·x'
//! ```
//!
//! It is advanced explicitly, once per frame, by [`Spring::step`]. Each step
//! is split into fixed-size RK4 sub-steps, so a long frame (a dropped frame,
//! a tab that was briefly hidden) integrates as accurately as a run of short
//! ones.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::time::Duration;

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m`.
    pub mass: f64,
    /// Distance from the target below which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f64,
    /// Longest integration sub-step.
    pub max_substep: Duration,
}

impl SpringConfig {
    /// The cursor follower: stiff, slightly overdamped, no overshoot.
    pub const CURSOR: Self = Self {
        stiffness: 700.0,
        damping: 25.0,
        mass: 0.2,
        rest_delta: 0.01,
        rest_speed: 0.5,
        max_substep: Duration::from_micros(4_167),
    };

    /// Returns the damping ratio `ζ = c / (2·√(k·m))`.
    ///
    /// `ζ ≥ 1` means the spring approaches its target without overshooting.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn acceleration(&self, displacement: f64, velocity: f64) -> f64 {
        (-self.stiffness * displacement - self.damping * velocity) / self.mass
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::CURSOR
    }
}

/// A one-dimensional spring-driven value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Creates a spring resting at `value`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the current velocity in units per second.
    #[must_use]
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the target value.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Sets the value the spring chases. Velocity is preserved.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Teleports to `value` and rests there.
    pub fn jump_to(&mut self, value: f64) {
        *self = Self::new(value);
    }

    /// Returns `true` if the spring is resting exactly on its target.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances the spring by `dt`.
    ///
    /// Returns `true` if the value is still moving afterwards. Once within
    /// [`rest_delta`](SpringConfig::rest_delta) of the target and slower
    /// than [`rest_speed`](SpringConfig::rest_speed), the spring snaps onto
    /// the target.
    pub fn step(&mut self, config: &SpringConfig, dt: Duration) -> bool {
        if self.is_at_rest() || dt.is_zero() {
            return !self.is_at_rest();
        }
        let max = config.max_substep.micros().max(1);
        let substeps = dt.micros().div_ceil(max);
        let h = dt.as_secs_f64() / substeps as f64;
        for _ in 0..substeps {
            self.rk4(config, h);
            if self.settle(config) {
                return false;
            }
        }
        true
    }

    fn settle(&mut self, config: &SpringConfig) -> bool {
        if (self.value - self.target).abs() < config.rest_delta
            && self.velocity.abs() < config.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
            return true;
        }
        false
    }

    fn rk4(&mut self, config: &SpringConfig, h: f64) {
        let x = self.value - self.target;
        let v = self.velocity;

        let k1x = v;
        let k1v = config.acceleration(x, v);
        let k2x = v + 0.5 * h * k1v;
        let k2v = config.acceleration(x + 0.5 * h * k1x, k2x);
        let k3x = v + 0.5 * h * k2v;
        let k3v = config.acceleration(x + 0.5 * h * k2x, k3x);
        let k4x = v + h * k3v;
        let k4v = config.acceleration(x + h * k3x, k4x);

        let x = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
        self.value = self.target + x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_micros(16_667);

    #[test]
    fn cursor_spring_is_overdamped() {
        let zeta = SpringConfig::CURSOR.damping_ratio();
        assert!(zeta > 1.0, "no overshoot expected: ζ = {zeta}");
    }

    #[test]
    fn converges_without_overshoot() {
        let config = SpringConfig::CURSOR;
        let mut spring = Spring::new(0.0);
        spring.set_target(500.0);

        let mut prev = spring.value();
        let mut frames = 0;
        while spring.step(&config, FRAME) {
            let v = spring.value();
            assert!(v <= 500.0, "overshot at frame {frames}: {v}");
            assert!(v >= prev, "moved away from target at frame {frames}");
            prev = v;
            frames += 1;
            assert!(frames < 1_000, "runaway integration");
        }
        assert_eq!(spring.value(), 500.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn settles_within_one_second() {
        let config = SpringConfig::CURSOR;
        let mut spring = Spring::new(0.0);
        spring.set_target(1_000.0);
        let mut elapsed = Duration::ZERO;
        while spring.step(&config, FRAME) {
            elapsed = elapsed + FRAME;
            assert!(
                elapsed < Duration::from_millis(1_000),
                "still moving after {elapsed:?}"
            );
        }
    }

    #[test]
    fn long_frames_are_sub_stepped() {
        let config = SpringConfig::CURSOR;
        let mut coarse = Spring::new(0.0);
        let mut fine = Spring::new(0.0);
        coarse.set_target(100.0);
        fine.set_target(100.0);

        // One 32 ms frame is integrated as eight 4 ms sub-steps.
        coarse.step(&config, Duration::from_millis(32));
        for _ in 0..8 {
            fine.step(&config, Duration::from_millis(4));
        }
        assert!(
            (coarse.value() - fine.value()).abs() < 1e-9,
            "{} vs {}",
            coarse.value(),
            fine.value()
        );
    }

    #[test]
    fn huge_frame_stays_stable() {
        let mut spring = Spring::new(0.0);
        spring.set_target(800.0);
        assert!(!spring.step(&SpringConfig::CURSOR, Duration::from_millis(5_000)));
        assert_eq!(spring.value(), 800.0);
    }

    #[test]
    fn resting_spring_stays_put() {
        let mut spring = Spring::new(42.0);
        assert!(!spring.step(&SpringConfig::CURSOR, FRAME));
        assert_eq!(spring.value(), 42.0);
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 42.0, "non-finite targets are ignored");
    }

    #[test]
    fn retarget_mid_flight_keeps_velocity() {
        let config = SpringConfig::CURSOR;
        let mut spring = Spring::new(0.0);
        spring.set_target(200.0);
        spring.step(&config, FRAME);
        let velocity = spring.velocity();
        assert!(velocity > 0.0, "moving toward target");
        spring.set_target(-200.0);
        assert_eq!(spring.velocity(), velocity);
        spring.jump_to(7.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 7.0);
    }
}
