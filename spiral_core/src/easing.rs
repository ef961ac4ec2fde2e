// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.
//!
//! Every curve maps linear progress `t ∈ [0, 1]` to eased progress with
//! `f(0) = 0` and `f(1) = 1`. The named curves are the CSS keyword curves;
//! [`CubicBezier`] covers arbitrary `cubic-bezier(x1, y1, x2, y2)` timing
//! functions such as the card expansion curve `[0.4, 0, 0.2, 1]`.

/// A CSS-style cubic Bézier timing function with control points
/// `(x1, y1)` and `(x2, y2)`; the end points are fixed at `(0, 0)` and
/// `(1, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    /// First control point, x (clamped to `[0, 1]` when solving).
    pub x1: f64,
    /// First control point, y.
    pub y1: f64,
    /// Second control point, x (clamped to `[0, 1]` when solving).
    pub x2: f64,
    /// Second control point, y.
    pub y2: f64,
}

/// Newton iterations before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;
/// Bisection iterations; 2^-32 is far below one display pixel.
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f64 = 1e-7;

impl CubicBezier {
    /// CSS `ease-in`.
    pub const EASE_IN: Self = Self::new(0.42, 0.0, 1.0, 1.0);
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);
    /// The "standard" deceleration curve used for card expansion.
    pub const STANDARD: Self = Self::new(0.4, 0.0, 0.2, 1.0);

    /// Creates a curve from its two control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Evaluates eased progress for linear progress `t`.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let x1 = self.x1.clamp(0.0, 1.0);
        let x2 = self.x2.clamp(0.0, 1.0);
        let s = solve_parameter(x1, x2, t);
        bezier(self.y1, self.y2, s)
    }
}

/// One coordinate of the curve at parameter `s`.
fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Finds `s` with `x(s) = x`. With control x-coordinates inside `[0, 1]`,
/// `x(s)` is monotonic, so the root is unique.
fn solve_parameter(x1: f64, x2: f64, x: f64) -> f64 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < SOLVE_EPSILON {
            return s;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
        if !(0.0..=1.0).contains(&s) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < SOLVE_EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

/// An easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow finish; the default for reveals.
    #[default]
    EaseOut,
    /// Slow start and finish.
    EaseInOut,
    /// An arbitrary cubic Bézier curve.
    CubicBezier(CubicBezier),
}

impl Easing {
    /// Evaluates eased progress for linear progress `t`, clamping `t` to
    /// `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseIn => CubicBezier::EASE_IN.apply(t),
            Self::EaseOut => CubicBezier::EASE_OUT.apply(t),
            Self::EaseInOut => CubicBezier::EASE_IN_OUT.apply(t),
            Self::CubicBezier(curve) => curve.apply(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicBezier(CubicBezier::STANDARD),
    ];

    #[test]
    fn end_points_are_fixed() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
            assert_eq!(curve.apply(1.0), 1.0, "{curve:?} at 1");
            assert_eq!(curve.apply(-2.0), 0.0, "{curve:?} below range");
            assert_eq!(curve.apply(3.0), 1.0, "{curve:?} above range");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in CURVES {
            let mut prev = 0.0;
            for i in 1..=100 {
                let y = curve.apply(f64::from(i) / 100.0);
                assert!(y + 1e-9 >= prev, "{curve:?} decreased at step {i}");
                prev = y;
            }
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        // Decelerating curves cover more than half the distance by the
        // midpoint; accelerating ones cover less.
        assert!(Easing::EaseOut.apply(0.5) > 0.5, "ease-out front-loads");
        assert!(Easing::EaseIn.apply(0.5) < 0.5, "ease-in back-loads");
        let mid = Easing::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-4, "ease-in-out is symmetric: {mid}");
    }

    #[test]
    fn bezier_matches_known_sample() {
        // cubic-bezier(0.4, 0, 0.2, 1) passes through x = 0.5 at y ≈ 0.7756.
        let y = CubicBezier::STANDARD.apply(0.5);
        assert!((y - 0.7756).abs() < 1e-3, "got {y}");
    }

    #[test]
    fn nan_progress_is_treated_as_start() {
        assert_eq!(Easing::EaseOut.apply(f64::NAN), 0.0);
    }
}
