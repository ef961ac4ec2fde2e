// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input and touch detection.

use alloc::boxed::Box;

use kurbo::Point;
use spiral_core::pointer::PointerCapabilities;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{AddEventListenerOptions, Element, EventTarget, MouseEvent, Window};

/// Selector matching the elements that count as interactive.
pub const INTERACTIVE_SELECTOR: &str = "a, button";

/// One pointer move, reduced to what the follower needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer position in viewport coordinates.
    pub position: Point,
    /// Whether the target or an ancestor is a link or button.
    pub over_interactive: bool,
}

type MoveClosure = Closure<dyn FnMut(MouseEvent)>;

/// A passive `mousemove` listener, removed when dropped.
pub struct PointerListener {
    target: EventTarget,
    closure: MoveClosure,
}

impl core::fmt::Debug for PointerListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointerListener").finish_non_exhaustive()
    }
}

impl PointerListener {
    /// Listens for `mousemove` on `target`, calling `handler` with each
    /// sample.
    pub fn attach(
        target: &EventTarget,
        mut handler: impl FnMut(PointerSample) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            handler(sample(&event));
        }) as Box<dyn FnMut(MouseEvent)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            "mousemove",
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            closure,
        })
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("mousemove", self.closure.as_ref().unchecked_ref());
    }
}

fn sample(event: &MouseEvent) -> PointerSample {
    let over_interactive = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .is_some_and(|el| is_interactive(&el));
    PointerSample {
        position: Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
        over_interactive,
    }
}

/// Returns `true` if `el` or one of its ancestors is a link or button.
#[must_use]
pub fn is_interactive(el: &Element) -> bool {
    spiral_core::pointer::is_interactive_tag(&el.tag_name())
        || el.closest(INTERACTIVE_SELECTOR).ok().flatten().is_some()
}

/// Checks whether the device has a touch screen.
///
/// Touch is reported when `ontouchstart` exists on the window or the
/// navigator reports touch points. A failed check reports
/// [`PointerCapabilities::UNKNOWN`].
#[must_use]
pub fn touch_capabilities(window: &Window) -> PointerCapabilities {
    let Ok(has_ontouchstart) = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart"))
    else {
        return PointerCapabilities::UNKNOWN;
    };
    let touch_points = window.navigator().max_touch_points();
    PointerCapabilities::detected(has_ontouchstart || touch_points > 0)
}

/// Restores the platform cursor on the document body.
pub fn restore_native_cursor(window: &Window) {
    if let Some(body) = window.document().and_then(|d| d.body()) {
        let _ = body.style().set_property("cursor", "auto");
    }
}
