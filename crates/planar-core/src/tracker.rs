// SPDX-License-Identifier: Apache-2.0
//! The diff engine: known-surfaces table and per-frame classification.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::delta::FrameDelta;
use crate::ident::PlaneId;
use crate::record::PlaneRecord;

/// Diff engine holding the table of currently known surfaces.
///
/// Call [`step`](Self::step) exactly once per frame with the complete
/// current snapshot (not a delta). The tracker partitions the snapshot
/// against its table into added/updated/removed sets and mutates the table
/// to match the snapshot. `&mut self` makes the single-in-flight-call
/// requirement a compile-time fact; the tracker is single-threaded,
/// synchronous, and never blocks.
///
/// The table is owned exclusively by the tracker: entries are inserted on
/// first sighting, replaced on detected change, and evicted when a surface
/// is absent from a frame. Consumers only ever see the change sets returned
/// from `step`.
#[derive(Debug, Default)]
pub struct PlaneTracker {
    table: FxHashMap<PlaneId, PlaneRecord>,
}

impl PlaneTracker {
    /// Creates a tracker with an empty known-surfaces table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of currently known surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no surface is currently known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns `true` if a surface with the given id is currently known.
    #[must_use]
    pub fn contains(&self, id: &PlaneId) -> bool {
        self.table.contains_key(id)
    }

    /// Iterates the ids of currently known surfaces, in unspecified order.
    pub fn tracked_ids(&self) -> impl Iterator<Item = &PlaneId> + '_ {
        self.table.keys()
    }

    /// Ingests one frame's complete canonical snapshot and returns the
    /// change sets.
    ///
    /// Classification per record, in snapshot order:
    ///
    /// - id not in the table: the record is stored and reported in `added`;
    /// - id in the table and the stored entry carries a timestamp: changed
    ///   iff the timestamps differ;
    /// - id in the table without a timestamp: changed iff the records differ
    ///   structurally (exact value equality, see [`PlaneRecord`]).
    ///
    /// Changed records replace their table entry and are reported in
    /// `updated`; unchanged records leave the table untouched and appear in
    /// no set. Surfaces whose id is absent from the snapshot are evicted and
    /// reported in `removed` with their last stored record.
    ///
    /// An id appearing twice in one snapshot (malformed backend output) is
    /// last-write-wins: the second occurrence compares against the first's
    /// freshly stored value and may itself count as an update. An id that
    /// reappears after eviction is an ordinary `added`; the tracker keeps no
    /// memory of prior removals.
    pub fn step(&mut self, batch: &[PlaneRecord]) -> FrameDelta {
        let mut delta = FrameDelta::new();
        let mut seen: FxHashSet<PlaneId> = FxHashSet::default();

        for record in batch {
            seen.insert(record.id.clone());
            match self.table.get(&record.id) {
                None => {
                    self.table.insert(record.id.clone(), record.clone());
                    delta.added.push(record.clone());
                }
                Some(stored) => {
                    let changed = match stored.timestamp {
                        Some(ts) => record.timestamp != Some(ts),
                        None => stored != record,
                    };
                    if changed {
                        self.table.insert(record.id.clone(), record.clone());
                        delta.updated.push(record.clone());
                    }
                }
            }
        }

        // Eviction scan: anything known but not seen this frame is gone.
        // The stored record moves out of the table so `removed` carries the
        // last-known snapshot without another clone.
        let gone: Vec<PlaneId> = self
            .table
            .keys()
            .filter(|id| !seen.contains(*id))
            .cloned()
            .collect();
        for id in &gone {
            if let Some(stored) = self.table.remove(id) {
                delta.removed.push(stored);
            }
        }

        trace!(
            added = delta.added.len(),
            updated = delta.updated.len(),
            removed = delta.removed.len(),
            tracked = self.table.len(),
            "frame diff"
        );
        delta
    }
}
