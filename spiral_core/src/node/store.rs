// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays node storage with allocation and property management.

use alloc::vec::Vec;

use kurbo::Vec2;
use understory_dirty::{CycleHandling, DirtyTracker};

use super::id::NodeId;
use crate::card::{ContentHeight, ContentStyle};
use crate::dirty;
use crate::sequencer::VisualState;

/// Box extent of a node whose height is animated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Height of the box.
    pub height: ContentHeight,
    /// Gap above the box, in CSS pixels.
    pub margin_top: f64,
}

impl Extent {
    /// The box's own layout: auto height, no extra margin.
    pub const NATURAL: Self = Self {
        height: ContentHeight::Auto,
        margin_top: 0.0,
    };
}

impl Default for Extent {
    fn default() -> Self {
        Self::NATURAL
    }
}

/// Struct-of-arrays storage for every animated element on the page.
///
/// Nodes are addressed by [`NodeId`] handles. Each node occupies a slot in
/// parallel arrays. Destroyed nodes are recycled via a free list, and
/// generation counters prevent stale handle access.
#[derive(Debug)]
pub struct NodeStore {
    // -- Properties (set by callers) --
    pub(crate) offset: Vec<Vec2>,
    pub(crate) scale: Vec<f64>,
    pub(crate) opacity: Vec<f64>,
    pub(crate) extent: Vec<Extent>,
    pub(crate) hidden: Vec<bool>,

    // -- Presented state (written by evaluate) --
    pub(crate) presented_hidden: Vec<bool>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) alive: Vec<bool>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStore {
    /// Creates an empty node store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: Vec::new(),
            scale: Vec::new(),
            opacity: Vec::new(),
            extent: Vec::new(),
            hidden: Vec::new(),
            presented_hidden: Vec::new(),
            generation: Vec::new(),
            alive: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
        }
    }

    // -- Allocation API --

    /// Creates a node and returns its handle.
    ///
    /// The node starts at rest: no offset, unit scale, full opacity,
    /// natural extent, not hidden.
    pub fn create_node(&mut self) -> NodeId {
        let idx = if let Some(idx) = self.free_list.pop() {
            let i = idx as usize;
            self.generation[i] += 1;
            self.offset[i] = Vec2::ZERO;
            self.scale[i] = 1.0;
            self.opacity[i] = 1.0;
            self.extent[i] = Extent::NATURAL;
            self.hidden[i] = false;
            self.presented_hidden[i] = false;
            self.alive[i] = true;
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.offset.push(Vec2::ZERO);
            self.scale.push(1.0);
            self.opacity.push(1.0);
            self.extent.push(Extent::NATURAL);
            self.hidden.push(false);
            self.presented_hidden.push(false);
            self.generation.push(0);
            self.alive.push(true);
            idx
        };

        self.pending_added.push(idx);

        NodeId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a node, freeing its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_node(&mut self, id: NodeId) {
        self.validate(id);
        let idx = id.idx;
        self.dirty.remove_key(idx);
        self.generation[idx as usize] += 1;
        self.alive[idx as usize] = false;
        self.free_list.push(idx);
        self.pending_added.retain(|&added| added != idx);
        self.pending_removed.push(idx);
    }

    /// Returns whether the given handle refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        id.idx < self.len
            && self.generation[id.idx as usize] == id.generation
            && self.alive[id.idx as usize]
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    // -- Property getters --

    /// Returns the translation of a node.
    #[must_use]
    pub fn offset(&self, id: NodeId) -> Vec2 {
        self.validate(id);
        self.offset[id.idx as usize]
    }

    /// Returns the scale of a node.
    #[must_use]
    pub fn scale(&self, id: NodeId) -> f64 {
        self.validate(id);
        self.scale[id.idx as usize]
    }

    /// Returns the opacity of a node.
    #[must_use]
    pub fn opacity(&self, id: NodeId) -> f64 {
        self.validate(id);
        self.opacity[id.idx as usize]
    }

    /// Returns the extent of a node.
    #[must_use]
    pub fn extent(&self, id: NodeId) -> Extent {
        self.validate(id);
        self.extent[id.idx as usize]
    }

    /// Returns whether a node is hidden.
    #[must_use]
    pub fn hidden(&self, id: NodeId) -> bool {
        self.validate(id);
        self.hidden[id.idx as usize]
    }

    // -- Mutation API (marks dirty on change) --

    /// Sets the translation of a node.
    pub fn set_offset(&mut self, id: NodeId, offset: Vec2) {
        self.validate(id);
        let slot = &mut self.offset[id.idx as usize];
        if *slot != offset {
            *slot = offset;
            self.dirty.mark(id.idx, dirty::TRANSFORM);
        }
    }

    /// Sets the scale of a node.
    pub fn set_scale(&mut self, id: NodeId, scale: f64) {
        self.validate(id);
        let slot = &mut self.scale[id.idx as usize];
        if *slot != scale {
            *slot = scale;
            self.dirty.mark(id.idx, dirty::TRANSFORM);
        }
    }

    /// Sets the opacity of a node, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, id: NodeId, opacity: f64) {
        self.validate(id);
        let opacity = opacity.clamp(0.0, 1.0);
        let slot = &mut self.opacity[id.idx as usize];
        if *slot != opacity {
            *slot = opacity;
            self.dirty.mark(id.idx, dirty::OPACITY);
        }
    }

    /// Sets the extent of a node.
    pub fn set_extent(&mut self, id: NodeId, extent: Extent) {
        self.validate(id);
        let slot = &mut self.extent[id.idx as usize];
        if *slot != extent {
            *slot = extent;
            self.dirty.mark(id.idx, dirty::EXTENT);
        }
    }

    /// Sets whether a node is hidden.
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        self.validate(id);
        let slot = &mut self.hidden[id.idx as usize];
        if *slot != hidden {
            *slot = hidden;
            self.dirty.mark(id.idx, dirty::VISIBILITY);
        }
    }

    /// Writes a sampled reveal state onto a node.
    pub fn apply_visual(&mut self, id: NodeId, state: VisualState) {
        self.set_offset(id, state.offset);
        self.set_scale(id, state.scale);
        self.set_opacity(id, state.opacity);
    }

    /// Writes a sampled card content style onto a node.
    pub fn apply_content(&mut self, id: NodeId, style: ContentStyle) {
        self.set_extent(
            id,
            Extent {
                height: style.height,
                margin_top: style.margin_top,
            },
        );
        self.set_opacity(id, style.opacity);
        self.set_hidden(id, !style.mounted);
    }

    // -- Raw-index accessors for backends --
    //
    // These accept raw slot indices (as found in `FrameChanges`) rather than
    // `NodeId` handles, skipping generation validation.

    /// Returns the translation at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn offset_at(&self, idx: u32) -> Vec2 {
        self.check_slot(idx);
        self.offset[idx as usize]
    }

    /// Returns the scale at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn scale_at(&self, idx: u32) -> f64 {
        self.check_slot(idx);
        self.scale[idx as usize]
    }

    /// Returns the opacity at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn opacity_at(&self, idx: u32) -> f64 {
        self.check_slot(idx);
        self.opacity[idx as usize]
    }

    /// Returns the extent at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn extent_at(&self, idx: u32) -> Extent {
        self.check_slot(idx);
        self.extent[idx as usize]
    }

    /// Returns whether the node at raw slot `idx` is hidden.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn hidden_at(&self, idx: u32) -> bool {
        self.check_slot(idx);
        self.hidden[idx as usize]
    }

    // -- Internal helpers --

    fn check_slot(&self, idx: u32) {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: NodeId) {
        assert!(
            self.is_alive(id),
            "stale NodeId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }
}
