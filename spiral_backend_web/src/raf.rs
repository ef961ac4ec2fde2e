// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` tick source.
//!
//! [`RafLoop`] drives a [`FrameTick`]-based animation loop using the
//! browser's `requestAnimationFrame` API. Each callback receives a
//! [`DOMHighResTimeStamp`][mdn] (milliseconds from `performance.now()`),
//! which is converted to microsecond [`HostTime`] ticks.
//!
//! The callback's return value decides whether the loop keeps running, so
//! a page whose motion has settled stops asking for frames until something
//! calls [`start`](RafLoop::start) again.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp
//! [`FrameTick`]: spiral_core::timing::FrameTick
//! [`HostTime`]: spiral_core::time::HostTime

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use spiral_core::time::HostTime;
use spiral_core::timing::FrameTick;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// A `requestAnimationFrame` animation loop that emits [`FrameTick`]s.
///
/// Create with [`RafLoop::new`], then call [`start`](Self::start) to begin
/// receiving callbacks. The loop re-registers itself each frame while the
/// callback returns `true`, until [`stop`](Self::stop) is called, or until
/// the `RafLoop` is dropped.
///
/// `RafLoop` is a cheap handle: clones share the same loop, so event
/// handlers can hold one and restart the loop after it went idle.
///
/// [`FrameTick`]: spiral_core::timing::FrameTick
#[derive(Clone)]
pub struct RafLoop {
    inner: Rc<RafInner>,
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct RafInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Created once, on the first `start()`, and reused for every frame.
    closure: RefCell<Option<RafClosure>>,

    /// The user-supplied callback; returns whether to keep running.
    callback: RefCell<Box<dyn FnMut(FrameTick) -> bool>>,

    /// Monotonically increasing frame counter (becomes `FrameTick::frame_index`).
    frame_counter: Cell<u64>,

    /// Whether a frame is currently requested.
    running: Cell<bool>,

    /// The ID returned by the most recent `requestAnimationFrame` call.
    raf_id: Cell<i32>,
}

impl RafLoop {
    /// Creates a new `RafLoop` that is **not yet running**.
    pub fn new(callback: impl FnMut(FrameTick) -> bool + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                frame_counter: Cell::new(0),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Starts the animation loop.
    ///
    /// If already running, this is a no-op.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        if self.inner.closure.borrow().is_none() {
            // The closure holds a weak reference so that dropping the last
            // `RafLoop` handle frees the loop.
            let weak = Rc::downgrade(&self.inner);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                inner.on_frame(timestamp_ms);
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }
        self.inner.request();
    }

    /// Stops the animation loop.
    ///
    /// The pending `requestAnimationFrame` callback is cancelled. Can be
    /// restarted by calling [`start`](Self::start) again.
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.raf_id.get());
    }

    /// Returns `true` if a frame is currently requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl RafInner {
    fn on_frame(&self, timestamp_ms: f64) {
        if !self.running.get() {
            return;
        }

        let frame_index = self.frame_counter.get();
        self.frame_counter.set(frame_index + 1);
        let tick = FrameTick {
            now: HostTime::from_millis_f64(timestamp_ms),
            frame_index,
        };

        // A callback that re-enters `start()` on a clone of this loop sees
        // `running == true` and returns early, so this borrow never overlaps.
        let keep_going = self.callback.borrow_mut()(tick);

        if keep_going && self.running.get() {
            self.request();
        } else {
            self.running.set(false);
        }
    }

    fn request(&self) {
        if let Some(ref closure) = *self.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.raf_id.set(id);
        }
    }
}

impl Drop for RafInner {
    fn drop(&mut self) {
        if self.running.get() {
            cancel_animation_frame(self.raf_id.get());
        }
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("running", &self.inner.running.get())
            .field("frame_counter", &self.inner.frame_counter.get())
            .finish()
    }
}
