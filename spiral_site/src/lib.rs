// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Spiral Lab website.
//!
//! Builds the page named by `<body data-page>` from `spiral_content`, binds
//! every animated element to a [`NodeStore`] through a [`DomPresenter`], and
//! drives sections, cards and the custom cursor from a [`RafLoop`].
//!
//! Build with: `wasm-pack build --target web spiral_site`
//!
//! Then serve `spiral_site/static/` (with the generated `pkg/` copied next to
//! it) and open `index.html` in a browser.
//!
//! The motion layer (`motion`) and the section plans (`plan`) are generic
//! over the element type and are tested natively.
//!
//! [`NodeStore`]: spiral_core::node::NodeStore
//! [`DomPresenter`]: spiral_backend_web::DomPresenter
//! [`RafLoop`]: spiral_backend_web::RafLoop

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod app;
mod dom;
mod home;
mod internship;
mod motion;
mod page;
mod plan;

use wasm_bindgen::prelude::*;

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    app::start()
}
