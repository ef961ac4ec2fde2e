// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated element storage.
//!
//! A *node* stands for one animated element on the page. Each node has:
//!
//! - An identity ([`NodeId`]), a generational handle that becomes stale when
//!   the node is destroyed.
//! - **Properties** written by the motion layer each frame:
//!   [`offset`](NodeStore::set_offset), [`scale`](NodeStore::set_scale),
//!   [`opacity`](NodeStore::set_opacity), [`extent`](NodeStore::set_extent)
//!   and [`hidden`](NodeStore::set_hidden).
//!
//! There is no hierarchy: the document already nests elements, and every
//! animated property here is applied to exactly one element.
//!
//! # Dirty tracking
//!
//! Setters mark the matching [`dirty`](crate::dirty) channel only when the
//! value changes. [`NodeStore::evaluate`] drains the channels into
//! [`FrameChanges`], which a [`Presenter`](crate::backend::Presenter)
//! applies.

mod evaluate;
mod id;
mod store;

pub use evaluate::FrameChanges;
pub use id::NodeId;
pub use store::{Extent, NodeStore};
