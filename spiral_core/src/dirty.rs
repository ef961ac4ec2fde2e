// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The node store tracks changes per property category with
//! [`understory_dirty`]. Nodes are independent, so every channel is
//! local-only: marking a node dirty never marks another node.
//!
//! Setters on [`NodeStore`](crate::node::NodeStore) only mark a channel when
//! the stored value actually changes, so a frame that re-applies the same
//! sampled state produces no work for the presenter.
//!
//! [`NodeStore::evaluate`](crate::node::NodeStore::evaluate) drains every
//! channel into [`FrameChanges`](crate::node::FrameChanges).

use understory_dirty::Channel;

/// Offset or scale changed.
pub const TRANSFORM: Channel = Channel::new(0);

/// Opacity changed.
pub const OPACITY: Channel = Channel::new(1);

/// Height or top margin changed.
pub const EXTENT: Channel = Channel::new(2);

/// Hidden flag changed.
pub const VISIBILITY: Channel = Channel::new(3);
