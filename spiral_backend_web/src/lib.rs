// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for `spiral_core`.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`DomPresenter`]: inline-style updates on bound elements
//! - [`DomVisibilityObserver`]: one-shot `IntersectionObserver` watches
//! - [`PointerListener`]: passive `mousemove` input with interactive-target
//!   detection, plus [`touch_capabilities`]
//! - [`measure`]: layout reads (content height, bounds, viewport)
//! - [`ConsoleSink`]: a [`TraceSink`](spiral_core::trace::TraceSink) that
//!   logs to the browser console
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Forwards to `spiral_core/trace`.

#![no_std]

extern crate alloc;

mod console;
pub mod measure;
mod observer;
mod pointer;
mod presenter;
mod raf;

pub use console::{ConsoleSink, format_section_reveal};
pub use observer::{DomVisibilityObserver, root_margin_css};
pub use pointer::{
    INTERACTIVE_SELECTOR, PointerListener, PointerSample, is_interactive, restore_native_cursor,
    touch_capabilities,
};
pub use presenter::{DomPresenter, css_height, css_transform};
pub use raf::RafLoop;
pub use spiral_core::backend::Presenter;

use spiral_core::time::HostTime;

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks, the same timeline as
/// the [`FrameTick`](spiral_core::timing::FrameTick)s delivered by
/// [`RafLoop`].
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(raf::performance_now())
}
