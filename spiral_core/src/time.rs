// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic page time.
//!
//! [`HostTime`] is a point on the page's monotonic clock, expressed in
//! microsecond ticks. The web backend produces these from
//! `performance.now()` and `requestAnimationFrame` timestamps (both
//! `DOMHighResTimeStamp` milliseconds).
//!
//! [`Duration`] is a span in the same microsecond units. Every transition
//! length, delay and stagger increment in this crate is a `Duration`, so
//! animation arithmetic stays in integers until the final interpolation.

use core::fmt;
use core::ops::{Add, Mul, Sub};

/// A point in time, in microseconds since the page's time origin.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// The page's time origin.
    pub const ZERO: Self = Self(0);

    /// Returns the raw microsecond value.
    #[inline]
    #[must_use]
    pub const fn micros(self) -> u64 {
        self.0
    }

    /// Converts a `DOMHighResTimeStamp` (fractional milliseconds) to host
    /// time. Negative and NaN inputs map to [`HostTime::ZERO`].
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float-to-int `as` saturates; page timestamps are far below u64::MAX µs"
    )]
    pub fn from_millis_f64(ms: f64) -> Self {
        Self((ms * 1000.0) as u64)
    }

    /// Returns the time elapsed since `earlier`, or zero if `earlier` is
    /// after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// Adds a duration, saturating at the end of the representable range.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.0))
    }
}

impl Add<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        self.saturating_add(rhs)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({}µs)", self.0)
    }
}

/// A span of time in microseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from microseconds.
    #[inline]
    #[must_use]
    pub const fn from_micros(us: u64) -> Self {
        Self(us)
    }

    /// Creates a duration from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms.saturating_mul(1000))
    }

    /// Creates a duration from fractional seconds. Negative and NaN inputs
    /// map to [`Duration::ZERO`].
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float-to-int `as` saturates; animation spans are tiny"
    )]
    pub fn from_secs_f64(secs: f64) -> Self {
        Self((secs * 1_000_000.0) as u64)
    }

    /// Returns the raw microsecond value.
    #[inline]
    #[must_use]
    pub const fn micros(self) -> u64 {
        self.0
    }

    /// Returns the duration as fractional seconds.
    #[inline]
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Returns the duration as fractional milliseconds.
    #[inline]
    #[must_use]
    pub fn as_millis_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Returns `true` for a zero-length duration.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Saturating addition.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Returns the smaller of two durations.
    #[inline]
    #[must_use]
    pub const fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl Sub for Duration {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

/// Scales a duration by a child index, as used for stagger offsets.
impl Mul<u32> for Duration {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(rhs)))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}µs)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_timestamps_convert_to_micros() {
        assert_eq!(HostTime::from_millis_f64(16.5), HostTime(16_500));
        assert_eq!(HostTime::from_millis_f64(-3.0), HostTime::ZERO);
        assert_eq!(HostTime::from_millis_f64(f64::NAN), HostTime::ZERO);
    }

    #[test]
    fn seconds_round_trip_through_micros() {
        let d = Duration::from_secs_f64(0.15);
        assert_eq!(d, Duration::from_millis(150));
        assert!((d.as_secs_f64() - 0.15).abs() < 1e-9, "0.15 s survives");
        assert!((d.as_millis_f64() - 150.0).abs() < 1e-9, "150 ms survives");
    }

    #[test]
    fn arithmetic_saturates() {
        let t = HostTime(1_000);
        assert_eq!(t.saturating_duration_since(HostTime(5_000)), Duration::ZERO);
        assert_eq!(t.saturating_duration_since(HostTime(400)), Duration(600));
        assert_eq!(HostTime(u64::MAX) + Duration(1), HostTime(u64::MAX));
        assert_eq!(Duration(10) - Duration(30), Duration::ZERO);
    }

    #[test]
    fn stagger_offsets_scale_linearly() {
        let step = Duration::from_millis(100);
        assert_eq!(step * 0, Duration::ZERO);
        assert_eq!(step * 3, Duration::from_millis(300));
        assert_eq!(Duration(u64::MAX) * 2, Duration(u64::MAX));
    }
}
