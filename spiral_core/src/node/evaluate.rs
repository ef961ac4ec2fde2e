// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame evaluation and change tracking.
//!
//! Evaluation drains each dirty channel in a fixed order (TRANSFORM,
//! OPACITY, EXTENT, VISIBILITY). The VISIBILITY drain compares each node's
//! hidden flag with the state last handed to the presenter, so a flag that
//! was toggled and toggled back within one frame reports nothing.
//!
//! [`FrameChanges`] uses raw slot indices (`u32`) so that backends can read
//! the store through the `*_at()` accessors.

use alloc::vec::Vec;

use understory_dirty::Channel;

use super::store::NodeStore;
use crate::dirty;

/// The set of changes produced by a single [`NodeStore::evaluate`] call.
#[derive(Clone, Debug, Default)]
pub struct FrameChanges {
    /// Nodes whose offset or scale changed.
    pub transforms: Vec<u32>,
    /// Nodes whose opacity changed.
    pub opacities: Vec<u32>,
    /// Nodes whose extent changed.
    pub extents: Vec<u32>,
    /// Nodes that went from shown to hidden.
    pub hidden: Vec<u32>,
    /// Nodes that went from hidden to shown.
    pub shown: Vec<u32>,
    /// Nodes created since the last evaluate.
    pub added: Vec<u32>,
    /// Nodes destroyed since the last evaluate.
    pub removed: Vec<u32>,
}

impl FrameChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.transforms.clear();
        self.opacities.clear();
        self.extents.clear();
        self.hidden.clear();
        self.shown.clear();
        self.added.clear();
        self.removed.clear();
    }

    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
            && self.opacities.is_empty()
            && self.extents.is_empty()
            && self.hidden.is_empty()
            && self.shown.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
    }

    /// Number of distinct property updates in this frame.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.transforms.len()
            + self.opacities.len()
            + self.extents.len()
            + self.hidden.len()
            + self.shown.len()
    }
}

impl NodeStore {
    /// Drains all dirty channels and returns the set of changes.
    pub fn evaluate(&mut self) -> FrameChanges {
        let mut changes = FrameChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer
    /// to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut FrameChanges) {
        changes.clear();

        changes.transforms = self.drain_live(dirty::TRANSFORM);
        changes.opacities = self.drain_live(dirty::OPACITY);
        changes.extents = self.drain_live(dirty::EXTENT);

        let visibility = self.drain_live(dirty::VISIBILITY);
        for idx in visibility {
            let i = idx as usize;
            let hidden = self.hidden[i];
            if hidden == self.presented_hidden[i] {
                continue;
            }
            self.presented_hidden[i] = hidden;
            if hidden {
                changes.hidden.push(idx);
            } else {
                changes.shown.push(idx);
            }
        }

        core::mem::swap(&mut self.pending_added, &mut changes.added);
        core::mem::swap(&mut self.pending_removed, &mut changes.removed);
    }

    /// Drains `channel`, dropping slots destroyed since they were marked.
    fn drain_live(&mut self, channel: Channel) -> Vec<u32> {
        let mut drained: Vec<u32> = self
            .dirty
            .drain(channel)
            .deterministic()
            .run()
            .collect();
        drained.retain(|&idx| self.alive[idx as usize]);
        drained
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;

    #[test]
    fn no_change_evaluate_returns_empty() {
        let mut store = NodeStore::new();
        let id = store.create_node();

        let first = store.evaluate();
        assert_eq!(first.added, &[id.idx]);

        let changes = store.evaluate();
        assert!(changes.is_empty());
    }

    #[test]
    fn setters_only_mark_real_changes() {
        let mut store = NodeStore::new();
        let id = store.create_node();
        let _ = store.evaluate();

        // Writing the values the node already has is not a change.
        store.set_opacity(id, 1.0);
        store.set_offset(id, Vec2::ZERO);
        store.set_hidden(id, false);
        assert!(store.evaluate().is_empty());

        store.set_offset(id, Vec2::new(0.0, 12.0));
        store.set_scale(id, 1.5);
        store.set_opacity(id, 0.4);
        let changes = store.evaluate();
        assert_eq!(changes.transforms, &[id.idx], "offset and scale share a channel");
        assert_eq!(changes.opacities, &[id.idx]);
        assert_eq!(changes.update_count(), 2);
    }

    #[test]
    fn hidden_transitions_are_reported_once() {
        let mut store = NodeStore::new();
        let id = store.create_node();
        let _ = store.evaluate();

        store.set_hidden(id, true);
        let changes = store.evaluate();
        assert_eq!(changes.hidden, &[id.idx]);
        assert!(changes.shown.is_empty());

        store.set_hidden(id, false);
        let changes = store.evaluate();
        assert_eq!(changes.shown, &[id.idx]);
    }

    #[test]
    fn toggled_back_within_frame_reports_nothing() {
        let mut store = NodeStore::new();
        let id = store.create_node();
        let _ = store.evaluate();

        store.set_hidden(id, true);
        store.set_hidden(id, false);
        let changes = store.evaluate();
        assert!(changes.hidden.is_empty() && changes.shown.is_empty());
    }

    #[test]
    fn destroyed_nodes_drop_pending_changes() {
        let mut store = NodeStore::new();
        let keep = store.create_node();
        let gone = store.create_node();
        let _ = store.evaluate();

        store.set_opacity(keep, 0.5);
        store.set_opacity(gone, 0.5);
        store.destroy_node(gone);
        let changes = store.evaluate();
        assert_eq!(changes.opacities, &[keep.idx]);
        assert_eq!(changes.removed, &[gone.idx]);
    }

    #[test]
    fn every_marked_node_is_reported() {
        let mut store = NodeStore::new();
        let ids: Vec<_> = (0..5).map(|_| store.create_node()).collect();
        let _ = store.evaluate();
        for id in ids.iter().rev() {
            store.set_opacity(*id, 0.0);
        }
        let mut reported = store.evaluate().opacities;
        reported.sort_unstable();
        let expected: Vec<u32> = ids.iter().map(|id| id.idx).collect();
        assert_eq!(reported, expected);
    }
}
