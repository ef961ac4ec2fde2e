// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debug and export tools for `spiral_core` traces.
//!
//! This crate provides [`TraceSink`](spiral_core::trace::TraceSink)
//! implementations for native development and tests:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`json::JsonLinesSink`]: one JSON object per event, per line.
//! - [`recorder::RecorderSink`]: keeps every event in memory.
//! - [`chrome::export`]: converts recorded events to Chrome Trace Event
//!   Format JSON for `chrome://tracing` or Perfetto.

pub mod chrome;
pub mod json;
pub mod pretty;
pub mod recorder;
