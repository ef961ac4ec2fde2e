// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout reads.

use kurbo::Rect;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Returns the natural height of `el`'s content, ignoring any height the
/// element is currently clamped to.
#[must_use]
pub fn content_height(el: &Element) -> f64 {
    f64::from(el.scroll_height())
}

/// Returns `el`'s border box in viewport coordinates.
#[must_use]
pub fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::from_origin_size((r.x(), r.y()), (r.width(), r.height()))
}

/// Returns the layout viewport as a rectangle at the origin.
///
/// Sizes that cannot be read are treated as zero.
#[must_use]
pub fn viewport(window: &Window) -> Rect {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Rect::new(0.0, 0.0, width, height)
}

/// Returns `true` if the user asked the platform for reduced motion.
#[must_use]
pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Smoothly scrolls `el` into view.
pub fn scroll_into_view_smooth(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
