// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM style application.
//!
//! Translates [`NodeStore`] state into inline styles on existing page
//! elements by applying incremental updates from [`FrameChanges`]. Unlike a
//! compositor, the presenter never creates or destroys elements: the page
//! markup exists up front, and each node is [bound](DomPresenter::bind) to
//! the element it animates.
//!
//! [`NodeStore`]: spiral_core::node::NodeStore
//! [`FrameChanges`]: spiral_core::node::FrameChanges

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;
use spiral_core::backend::Presenter;
use spiral_core::card::ContentHeight;
use spiral_core::node::{Extent, FrameChanges, NodeId, NodeStore};
use web_sys::HtmlElement;

/// Maps [`NodeStore`] slots to live DOM elements, applying incremental
/// updates from [`FrameChanges`].
///
/// [`NodeStore`]: spiral_core::node::NodeStore
pub struct DomPresenter {
    elements: Vec<Option<HtmlElement>>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("bound", &self.elements.iter().flatten().count())
            .field("elements_len", &self.elements.len())
            .finish()
    }
}

impl Default for DomPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl DomPresenter {
    /// Creates a presenter with no bound elements.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Binds `node` to `element`.
    ///
    /// The element's styles are written in full on the next
    /// [`apply`](Presenter::apply) that reports the node as added; bind
    /// nodes before their first evaluation.
    pub fn bind(&mut self, node: NodeId, element: HtmlElement) {
        let slot = node.index() as usize;
        if self.elements.len() <= slot {
            self.elements.resize_with(slot + 1, || None);
        }
        self.elements[slot] = Some(element);
    }

    /// Returns the element bound to the given slot index, if any.
    #[must_use]
    pub fn get_element(&self, idx: u32) -> Option<&HtmlElement> {
        self.elements
            .get(idx as usize)
            .and_then(|slot| slot.as_ref())
    }

    /// Returns the number of bound elements.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.elements.iter().flatten().count()
    }

    fn take_element(&mut self, idx: u32) -> Option<HtmlElement> {
        self.elements.get_mut(idx as usize)?.take()
    }
}

impl Presenter for DomPresenter {
    /// Applies incremental changes from a [`FrameChanges`] to the DOM.
    fn apply(&mut self, store: &NodeStore, changes: &FrameChanges) {
        // 1. Removals: the element keeps its last styles but is no longer
        //    driven.
        for &idx in &changes.removed {
            let _ = self.take_element(idx);
        }

        // 2. Additions: write every property once.
        for &idx in &changes.added {
            if let Some(el) = self.get_element(idx) {
                write_transform(el, store.offset_at(idx), store.scale_at(idx));
                write_opacity(el, store.opacity_at(idx));
                write_extent(el, store.extent_at(idx));
                write_hidden(el, store.hidden_at(idx));
            }
        }

        // 3. Transforms
        for &idx in &changes.transforms {
            if let Some(el) = self.get_element(idx) {
                write_transform(el, store.offset_at(idx), store.scale_at(idx));
            }
        }

        // 4. Opacities
        for &idx in &changes.opacities {
            if let Some(el) = self.get_element(idx) {
                write_opacity(el, store.opacity_at(idx));
            }
        }

        // 5. Extents
        for &idx in &changes.extents {
            if let Some(el) = self.get_element(idx) {
                write_extent(el, store.extent_at(idx));
            }
        }

        // 6. Hidden/shown
        for &idx in &changes.hidden {
            if let Some(el) = self.get_element(idx) {
                write_hidden(el, true);
            }
        }
        for &idx in &changes.shown {
            if let Some(el) = self.get_element(idx) {
                write_hidden(el, false);
            }
        }
    }
}

fn write_transform(el: &HtmlElement, offset: Vec2, scale: f64) {
    let s = el.style();
    match css_transform(offset, scale) {
        Some(css) => {
            let _ = s.set_property("transform", &css);
        }
        None => {
            let _ = s.remove_property("transform");
        }
    }
}

fn write_opacity(el: &HtmlElement, opacity: f64) {
    let s = el.style();
    if opacity >= 1.0 {
        let _ = s.remove_property("opacity");
    } else {
        let _ = s.set_property("opacity", &format!("{opacity}"));
    }
}

fn write_extent(el: &HtmlElement, extent: Extent) {
    let s = el.style();
    match css_height(extent.height) {
        Some(css) => {
            let _ = s.set_property("height", &css);
            // Content taller than the animated box must not spill out.
            let _ = s.set_property("overflow", "hidden");
        }
        None => {
            let _ = s.remove_property("height");
            let _ = s.remove_property("overflow");
        }
    }
    if extent.margin_top == 0.0 {
        let _ = s.remove_property("margin-top");
    } else {
        let _ = s.set_property("margin-top", &format!("{}px", extent.margin_top));
    }
}

fn write_hidden(el: &HtmlElement, hidden: bool) {
    let s = el.style();
    if hidden {
        let _ = s.set_property("display", "none");
    } else {
        let _ = s.remove_property("display");
    }
}

/// Returns the CSS `transform` for an offset and uniform scale, or `None`
/// for the identity.
#[must_use]
pub fn css_transform(offset: Vec2, scale: f64) -> Option<String> {
    if offset == Vec2::ZERO && scale == 1.0 {
        return None;
    }
    let mut css = format!("translate3d({}px, {}px, 0)", offset.x, offset.y);
    if scale != 1.0 {
        css.push_str(&format!(" scale({scale})"));
    }
    Some(css)
}

/// Returns the CSS `height` for a content height, or `None` for `auto`.
#[must_use]
pub fn css_height(height: ContentHeight) -> Option<String> {
    match height {
        ContentHeight::Px(px) => Some(format!("{}px", px.max(0.0))),
        ContentHeight::Auto => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform_is_cleared() {
        assert_eq!(css_transform(Vec2::ZERO, 1.0), None);
    }

    #[test]
    fn offset_and_scale_compose() {
        assert_eq!(
            css_transform(Vec2::new(0.0, 20.0), 1.0).as_deref(),
            Some("translate3d(0px, 20px, 0)")
        );
        assert_eq!(
            css_transform(Vec2::new(12.0, -4.0), 1.5).as_deref(),
            Some("translate3d(12px, -4px, 0) scale(1.5)")
        );
    }

    #[test]
    fn heights() {
        assert_eq!(css_height(ContentHeight::Px(132.5)).as_deref(), Some("132.5px"));
        assert_eq!(css_height(ContentHeight::Px(-1.0)).as_deref(), Some("0px"));
        assert_eq!(css_height(ContentHeight::Auto), None);
    }
}
