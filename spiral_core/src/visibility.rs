// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Latched viewport visibility.
//!
//! A *visibility signal* is a boolean that flips from `false` to `true` the
//! first time its element satisfies an intersection threshold against the
//! viewport, and then never changes again. Once latched, the element is no
//! longer measured.
//!
//! The intersection rules follow `IntersectionObserver`:
//!
//! - The test region is the viewport expanded (positive) or contracted
//!   (negative) on every side by the root margin.
//! - The ratio is the visible fraction of the element's area.
//! - Edge adjacency counts as intersecting, so a threshold of `0.0` is
//!   satisfied by an element that merely touches the test region.
//! - A zero-area element that touches the region has ratio `1.0`.
//!
//! [`VisibilityObserver`] is the seam between the pure motion state and a
//! platform's observation mechanism. [`ViewportWatcher`] implements it by
//! polling: each [`layout_pass`](ViewportWatcher::layout_pass) measures every
//! element still being watched. The web backend implements it over native
//! `IntersectionObserver`s instead.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

/// Threshold and root margin for one visibility signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the element's area that must be inside the test region,
    /// in `[0, 1]`.
    pub threshold: f64,
    /// Pixels added to every side of the viewport (negative contracts it).
    pub root_margin: f64,
}

impl ObserveOptions {
    /// Page sections: reveal once a tenth of the section is on screen.
    pub const SECTION: Self = Self {
        threshold: 0.1,
        root_margin: 0.0,
    };

    /// Lazily mounted content: fire on first touch of a region extended
    /// 50 px past the viewport.
    pub const LAZY: Self = Self {
        threshold: 0.0,
        root_margin: 50.0,
    };

    /// Creates options, clamping `threshold` to `[0, 1]`.
    ///
    /// A NaN threshold becomes `0.0`; a non-finite margin becomes `0.0`.
    #[must_use]
    pub fn new(threshold: f64, root_margin: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        let root_margin = if root_margin.is_finite() {
            root_margin
        } else {
            0.0
        };
        Self {
            threshold,
            root_margin,
        }
    }

    /// Returns the test region for `viewport` under this margin.
    ///
    /// A large negative margin can produce an inverted rectangle; such a
    /// region intersects nothing.
    #[must_use]
    pub fn root(&self, viewport: Rect) -> Rect {
        viewport.inflate(self.root_margin, self.root_margin)
    }

    /// Returns `true` if an element with `bounds` satisfies the threshold
    /// against `viewport`.
    #[must_use]
    pub fn is_satisfied_by(&self, bounds: Rect, viewport: Rect) -> bool {
        intersection_ratio(bounds, viewport, self.root_margin)
            .is_some_and(|ratio| ratio >= self.threshold)
    }
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self::SECTION
    }
}

/// Returns the visible fraction of `bounds` inside `viewport` expanded by
/// `root_margin`, or `None` if the two do not intersect at all.
///
/// Touching edges intersect with ratio `0.0` (or `1.0` for a zero-area
/// element).
#[must_use]
pub fn intersection_ratio(bounds: Rect, viewport: Rect, root_margin: f64) -> Option<f64> {
    let root = viewport.inflate(root_margin, root_margin);
    if root.x1 < root.x0 || root.y1 < root.y0 {
        return None;
    }
    let bounds = bounds.abs();

    let x0 = bounds.x0.max(root.x0);
    let y0 = bounds.y0.max(root.y0);
    let x1 = bounds.x1.min(root.x1);
    let y1 = bounds.y1.min(root.y1);
    if x1 < x0 || y1 < y0 {
        return None;
    }

    let area = bounds.area();
    if area <= 0.0 {
        return Some(1.0);
    }
    Some(((x1 - x0) * (y1 - y0) / area).clamp(0.0, 1.0))
}

/// A handle to one visibility signal.
///
/// Handles are generational: after [`unobserve`](VisibilityObserver::unobserve)
/// the handle goes stale and every query on it reports "not entered".
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl WatchId {
    /// Creates a handle from raw parts. Intended for observer
    /// implementations outside this crate.
    #[inline]
    #[must_use]
    pub const fn from_raw(idx: u32, generation: u32) -> Self {
        Self { idx, generation }
    }

    /// Returns the raw slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for WatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WatchId({}@gen{})", self.idx, self.generation)
    }
}

/// Produces latched visibility signals for elements.
///
/// Implementations must guarantee:
///
/// - [`has_entered_viewport`](Self::has_entered_viewport) never goes from
///   `true` back to `false` while the watch is registered.
/// - Observing `None` yields a watch that never fires.
/// - After [`unobserve`](Self::unobserve), nothing delivered late by the
///   platform changes any state.
pub trait VisibilityObserver {
    /// The platform's element handle.
    type Target;

    /// Starts watching `target` and returns the signal's handle.
    fn observe(&mut self, target: Option<Self::Target>, options: ObserveOptions) -> WatchId;

    /// Returns the current value of the signal.
    fn has_entered_viewport(&self, id: WatchId) -> bool;

    /// Releases the watch. Stale handles are ignored.
    fn unobserve(&mut self, id: WatchId);
}

#[derive(Debug)]
enum Slot<T> {
    Free,
    Inert,
    Watching { target: T, options: ObserveOptions },
    Latched,
}

/// A polling [`VisibilityObserver`].
///
/// Targets are opaque; the caller supplies their current bounds during each
/// [`layout_pass`](Self::layout_pass).
#[derive(Debug)]
pub struct ViewportWatcher<T> {
    slots: Vec<Slot<T>>,
    generation: Vec<u32>,
    free_list: Vec<u32>,
}

impl<T> Default for ViewportWatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewportWatcher<T> {
    /// Creates an empty watcher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Measures every watched element and latches those that satisfy their
    /// threshold against `viewport`.
    ///
    /// `measure` returns an element's bounds in the same space as
    /// `viewport`, or `None` if it currently has no layout box. Returns the
    /// handles latched during this pass; a handle is never returned twice.
    pub fn layout_pass<F>(&mut self, viewport: Rect, mut measure: F) -> Vec<WatchId>
    where
        F: FnMut(&T) -> Option<Rect>,
    {
        let mut latched = Vec::new();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            let Slot::Watching { target, options } = slot else {
                continue;
            };
            let Some(bounds) = measure(target) else {
                continue;
            };
            if options.is_satisfied_by(bounds, viewport) {
                *slot = Slot::Latched;
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "slot count is bounded by u32 handles"
                )]
                let idx = idx as u32;
                latched.push(WatchId {
                    idx,
                    generation: self.generation[idx as usize],
                });
            }
        }
        latched
    }

    /// Returns `true` if `id` is registered and still waiting to latch.
    #[must_use]
    pub fn is_watching(&self, id: WatchId) -> bool {
        self.slot(id)
            .is_some_and(|slot| matches!(slot, Slot::Watching { .. }))
    }

    /// Returns the number of elements still being measured.
    #[must_use]
    pub fn watching_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Watching { .. }))
            .count()
    }

    fn slot(&self, id: WatchId) -> Option<&Slot<T>> {
        let idx = id.idx as usize;
        if self.generation.get(idx) != Some(&id.generation) {
            return None;
        }
        self.slots.get(idx)
    }
}

impl<T> VisibilityObserver for ViewportWatcher<T> {
    type Target = T;

    fn observe(&mut self, target: Option<T>, options: ObserveOptions) -> WatchId {
        let slot = match target {
            Some(target) => Slot::Watching { target, options },
            None => Slot::Inert,
        };
        if let Some(idx) = self.free_list.pop() {
            self.slots[idx as usize] = slot;
            WatchId {
                idx,
                generation: self.generation[idx as usize],
            }
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "more than u32::MAX watches is not a supported use"
            )]
            let idx = self.slots.len() as u32;
            self.slots.push(slot);
            self.generation.push(0);
            WatchId { idx, generation: 0 }
        }
    }

    fn has_entered_viewport(&self, id: WatchId) -> bool {
        self.slot(id)
            .is_some_and(|slot| matches!(slot, Slot::Latched))
    }

    fn unobserve(&mut self, id: WatchId) {
        let idx = id.idx as usize;
        if self.generation.get(idx) != Some(&id.generation) || matches!(self.slots[idx], Slot::Free)
        {
            return;
        }
        self.slots[idx] = Slot::Free;
        self.generation[idx] = self.generation[idx].wrapping_add(1);
        self.free_list.push(id.idx);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[test]
    fn ratio_of_partially_visible_element() {
        // Bottom half of a 200 px tall element hangs below the fold.
        let bounds = Rect::new(0.0, 700.0, 100.0, 900.0);
        let ratio = intersection_ratio(bounds, VIEWPORT, 0.0);
        assert_eq!(ratio, Some(0.5));
    }

    #[test]
    fn disjoint_elements_do_not_intersect() {
        let below = Rect::new(0.0, 900.0, 100.0, 1000.0);
        assert_eq!(intersection_ratio(below, VIEWPORT, 0.0), None);
        assert!(!ObserveOptions::new(0.0, 0.0).is_satisfied_by(below, VIEWPORT));
    }

    #[test]
    fn touching_edge_satisfies_zero_threshold() {
        let adjacent = Rect::new(0.0, 800.0, 100.0, 900.0);
        assert_eq!(intersection_ratio(adjacent, VIEWPORT, 0.0), Some(0.0));
        assert!(ObserveOptions::new(0.0, 0.0).is_satisfied_by(adjacent, VIEWPORT));
        assert!(!ObserveOptions::new(0.01, 0.0).is_satisfied_by(adjacent, VIEWPORT));
    }

    #[test]
    fn positive_margin_extends_region() {
        // 30 px below the fold: outside the viewport, inside the lazy margin.
        let bounds = Rect::new(0.0, 830.0, 100.0, 930.0);
        assert!(!ObserveOptions::new(0.0, 0.0).is_satisfied_by(bounds, VIEWPORT));
        assert!(ObserveOptions::LAZY.is_satisfied_by(bounds, VIEWPORT));
    }

    #[test]
    fn negative_margin_contracts_region() {
        let bounds = Rect::new(0.0, 750.0, 100.0, 800.0);
        assert!(ObserveOptions::new(0.5, 0.0).is_satisfied_by(bounds, VIEWPORT));
        assert!(!ObserveOptions::new(0.5, -100.0).is_satisfied_by(bounds, VIEWPORT));
    }

    #[test]
    fn fully_inverted_region_intersects_nothing() {
        let bounds = Rect::new(400.0, 300.0, 600.0, 500.0);
        assert_eq!(intersection_ratio(bounds, VIEWPORT, -10_000.0), None);
    }

    #[test]
    fn zero_area_elements_count_as_fully_visible() {
        let line = Rect::new(10.0, 10.0, 500.0, 10.0);
        assert_eq!(intersection_ratio(line, VIEWPORT, 0.0), Some(1.0));
        assert!(ObserveOptions::new(1.0, 0.0).is_satisfied_by(line, VIEWPORT));
        let offscreen = Rect::new(10.0, 2000.0, 10.0, 2000.0);
        assert_eq!(intersection_ratio(offscreen, VIEWPORT, 0.0), None);
    }

    #[test]
    fn options_clamp_threshold() {
        assert_eq!(ObserveOptions::new(3.0, 0.0).threshold, 1.0);
        assert_eq!(ObserveOptions::new(-1.0, 0.0).threshold, 0.0);
        assert_eq!(ObserveOptions::new(f64::NAN, f64::INFINITY), ObserveOptions::new(0.0, 0.0));
    }

    #[test]
    fn signal_is_monotonic() {
        let mut watcher = ViewportWatcher::new();
        let id = watcher.observe(Some(()), ObserveOptions::SECTION);

        let mut history = Vec::new();
        for step in 0..12 {
            // Scroll down towards the element, then far past it.
            let y = if step < 6 {
                2000.0 - 300.0 * f64::from(step)
            } else {
                -3000.0
            };
            let bounds = Rect::new(0.0, y, 100.0, y + 200.0);
            watcher.layout_pass(VIEWPORT, |_| Some(bounds));
            history.push(watcher.has_entered_viewport(id));
        }
        let first_true = history.iter().position(|&v| v);
        assert_eq!(first_true, Some(5), "latched once the element was fully on screen");
        assert!(
            history[5..].iter().all(|&v| v),
            "signal never reverts: {history:?}"
        );
    }

    #[test]
    fn latch_is_reported_once_and_stops_measuring() {
        let mut watcher = ViewportWatcher::new();
        let id = watcher.observe(Some("hero"), ObserveOptions::SECTION);
        let visible = Rect::new(0.0, 0.0, 100.0, 100.0);

        let mut measured = 0;
        assert_eq!(
            watcher.layout_pass(VIEWPORT, |_| {
                measured += 1;
                Some(visible)
            }),
            vec![id]
        );
        assert!(
            watcher
                .layout_pass(VIEWPORT, |_| {
                    measured += 1;
                    Some(visible)
                })
                .is_empty(),
            "second pass reports nothing"
        );
        assert_eq!(measured, 1, "latched elements are not measured again");
        assert!(!watcher.is_watching(id));
        assert_eq!(watcher.watching_count(), 0);
    }

    #[test]
    fn absent_target_never_fires() {
        let mut watcher = ViewportWatcher::<u32>::new();
        let id = watcher.observe(None, ObserveOptions::LAZY);
        let fired = watcher.layout_pass(VIEWPORT, |_| Some(VIEWPORT));
        assert!(fired.is_empty(), "nothing to measure");
        assert!(!watcher.has_entered_viewport(id));
    }

    #[test]
    fn unobserve_releases_and_invalidates() {
        let mut watcher = ViewportWatcher::new();
        let a = watcher.observe(Some(1_u32), ObserveOptions::SECTION);
        watcher.layout_pass(VIEWPORT, |_| Some(VIEWPORT));
        assert!(watcher.has_entered_viewport(a));

        watcher.unobserve(a);
        assert!(!watcher.has_entered_viewport(a), "stale handle reads false");
        // Double unobserve is a no-op.
        watcher.unobserve(a);

        let b = watcher.observe(Some(2), ObserveOptions::SECTION);
        assert_eq!(b.index(), a.index(), "slot is recycled");
        assert_ne!(b.generation(), a.generation());
        assert!(!watcher.has_entered_viewport(b), "new watch starts unlatched");
        watcher.unobserve(a);
        assert!(watcher.is_watching(b), "stale unobserve leaves the new watch alone");
    }

    #[test]
    fn half_covered_viewport_latches_on_first_pass() {
        // An element covering the lower half of the viewport.
        let mut watcher = ViewportWatcher::new();
        let id = watcher.observe(Some(()), ObserveOptions::new(0.1, 0.0));
        let bounds = Rect::new(0.0, 400.0, 1000.0, 800.0);
        let fired = watcher.layout_pass(VIEWPORT, |_| Some(bounds));
        assert_eq!(fired, vec![id]);
        assert!(watcher.has_entered_viewport(id));
    }
}
