// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion core for the Spiral Lab site.
//!
//! `spiral_core` holds every piece of page motion that can be expressed
//! without a browser: reveal sequencing, card expansion, cursor smoothing
//! and the bookkeeping that turns all of it into minimal per-frame property
//! writes. It is `no_std` compatible (with `alloc`); the host supplies time,
//! geometry, and pointer input.
//!
//! # Architecture
//!
//! ```text
//!   Host (animation frame + input events)
//!       │
//!       ▼
//!   FrameTick ──► FrameClock::advance() ──► dt
//!       │
//!       ├──► SectionComposer::sync(&impl VisibilityObserver) ──► Reveal / StaggerGroup
//!       ├──► CardDeck (ExpandableCard) ──► ContentStyle
//!       └──► PointerFollower::tick(dt) ──► IndicatorFrame
//!                                 │
//!                 ┌───────────────┘
//!                 ▼
//!   NodeStore (apply_visual / apply_content) ──► evaluate() ──► FrameChanges
//!                                                                  │
//!                                                                  ▼
//!                                                         Presenter::apply()
//! ```
//!
//! **[`visibility`]**: One-shot viewport entry signals. The
//! [`VisibilityObserver`](visibility::VisibilityObserver) trait is the seam
//! between the host's intersection machinery and the rest of the crate;
//! [`ViewportWatcher`](visibility::ViewportWatcher) is a polling
//! implementation driven by supplied element bounds.
//!
//! **[`sequencer`]**: Two-phase variant animation: fades, slides,
//! staggered children, and looping keyframes, plus the site's presets.
//!
//! **[`section`]**: Binds visibility signals to the reveals of each page
//! section so that every section reveals exactly once.
//!
//! **[`card`]**: Expand/collapse state machine with measured-height
//! animation for the service cards.
//!
//! **[`spring`]** and **[`pointer`]**: Damped springs and the custom cursor
//! that follows the pointer with them, disabled on touch devices.
//!
//! **[`node`]**: Struct-of-arrays store of animated elements with
//! generational handles; writes mark [`dirty`] channels only when a value
//! actually changes.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait that hosts
//! implement to apply frame changes to their element trees.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! frame-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod card;
pub mod config;
pub mod dirty;
pub mod easing;
pub mod node;
pub mod pointer;
pub mod section;
pub mod sequencer;
pub mod spring;
pub mod time;
pub mod timing;
pub mod trace;
pub mod visibility;
