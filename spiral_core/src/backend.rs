// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! A backend crate provides the following pieces:
//!
//! - **Tick source**: produces [`FrameTick`] values from the platform's
//!   frame callback (on the web, `requestAnimationFrame`).
//! - **Time**: a `now() -> HostTime` free function reading the platform's
//!   monotonic clock.
//! - **Visibility**: an implementation of
//!   [`VisibilityObserver`](crate::visibility::VisibilityObserver) over the
//!   platform's intersection mechanism.
//! - **Presenter**: implements the [`Presenter`] trait to apply frame
//!   changes to the platform's element tree.
//!
//! [`FrameTick`]: crate::timing::FrameTick

use crate::node::{FrameChanges, NodeStore};

/// Applies evaluated frame changes to a platform-native element tree.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_frame(tick: FrameTick) {
///     let dt = clock.advance(&tick);
///
///     // Animate: sample reveals, cards and the cursor into the store.
///     section.sync(&observer, tick.now);
///     store.apply_visual(node, section.header_state(tick.now));
///     follower.tick(dt);
///
///     // Evaluate: drain dirty channels.
///     let changes = store.evaluate();
///
///     // Present: apply incremental changes to the native tree.
///     presenter.apply(&store, &changes);
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`FrameChanges`] to the backing element tree,
    /// reading current property values from `store` as needed.
    fn apply(&mut self, store: &NodeStore, changes: &FrameChanges);
}
