// SPDX-License-Identifier: Apache-2.0
//! Per-frame change sets.

use crate::record::PlaneRecord;

/// The three disjoint change sets produced by one tracker step.
///
/// All three vectors are freshly built each frame — a delta is a
/// point-in-time result, never an accumulator. `removed` carries the
/// last-known canonical snapshot of each now-absent surface, not an empty
/// placeholder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameDelta {
    /// Surfaces first seen this frame, in snapshot order.
    pub added: Vec<PlaneRecord>,
    /// Surfaces whose data changed this frame, in snapshot order.
    pub updated: Vec<PlaneRecord>,
    /// Surfaces absent from this frame's snapshot. Order is unspecified
    /// (table iteration order); removal order carries no semantic weight.
    pub removed: Vec<PlaneRecord>,
}

impl FrameDelta {
    /// Creates an empty delta.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no surface changed in any way this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }

    /// Computes per-category counts for this delta.
    #[must_use]
    pub fn stats(&self) -> DeltaStats {
        DeltaStats {
            added: self.added.len(),
            updated: self.updated.len(),
            removed: self.removed.len(),
        }
    }
}

/// Per-category counts for a [`FrameDelta`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeltaStats {
    /// Count of surfaces added.
    pub added: usize,
    /// Count of surfaces updated.
    pub updated: usize,
    /// Count of surfaces removed.
    pub removed: usize,
}
