// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use std::collections::{BTreeMap, BTreeSet};

use planar_core::{PlaneId, PlaneRecord, PlaneTracker};
use proptest::prelude::*;

fn record(id: u8, x: u8) -> PlaneRecord {
    PlaneRecord {
        id: PlaneId::from(u64::from(id)),
        timestamp: None,
        position: [f64::from(x), 0.0, 0.0],
        orientation: [0.0, 0.0, 0.0, 1.0],
        extent: [1.0, 1.0],
        vertices: None,
    }
}

/// One frame: a small set of unique surface ids, each with a coarse position
/// so that re-sightings are sometimes unchanged and sometimes moved.
fn frame_strategy() -> impl Strategy<Value = BTreeMap<u8, u8>> {
    prop::collection::btree_map(0..6u8, 0..4u8, 0..6)
}

fn id_set(records: &[PlaneRecord]) -> BTreeSet<PlaneId> {
    records.iter().map(|r| r.id.clone()).collect()
}

proptest! {
    /// Every id present in the pre-step table or in the batch lands in
    /// exactly one of added / updated / removed / unchanged, and the table
    /// always ends up matching the batch.
    #[test]
    fn partition_property_holds_across_frames(
        frames in prop::collection::vec(frame_strategy(), 1..12)
    ) {
        let mut tracker = PlaneTracker::new();
        for frame in frames {
            let pre: BTreeSet<PlaneId> = tracker.tracked_ids().cloned().collect();
            let batch: Vec<PlaneRecord> =
                frame.iter().map(|(&id, &x)| record(id, x)).collect();
            let batch_ids = id_set(&batch);

            let delta = tracker.step(&batch);
            let added = id_set(&delta.added);
            let updated = id_set(&delta.updated);
            let removed = id_set(&delta.removed);

            // No id in two change sets in the same call.
            prop_assert!(added.is_disjoint(&updated));
            prop_assert!(added.is_disjoint(&removed));
            prop_assert!(updated.is_disjoint(&removed));

            // Unique ids per frame, so set sizes match sequence lengths.
            prop_assert_eq!(added.len(), delta.added.len());
            prop_assert_eq!(updated.len(), delta.updated.len());
            prop_assert_eq!(removed.len(), delta.removed.len());

            // added is exactly the never-before-seen part of the batch.
            let expect_added: BTreeSet<PlaneId> =
                batch_ids.difference(&pre).cloned().collect();
            prop_assert_eq!(&added, &expect_added);

            // removed is exactly the known-but-absent part of the table.
            let expect_removed: BTreeSet<PlaneId> =
                pre.difference(&batch_ids).cloned().collect();
            prop_assert_eq!(&removed, &expect_removed);

            // updated only ever names surfaces known before and present now.
            let carried: BTreeSet<PlaneId> =
                pre.intersection(&batch_ids).cloned().collect();
            prop_assert!(updated.is_subset(&carried));

            // The table now mirrors the snapshot.
            let post: BTreeSet<PlaneId> = tracker.tracked_ids().cloned().collect();
            prop_assert_eq!(post, batch_ids);
        }
    }

    /// Replaying the same frame twice never reports changes the second time.
    #[test]
    fn identical_refeed_is_silent(frame in frame_strategy()) {
        let mut tracker = PlaneTracker::new();
        let batch: Vec<PlaneRecord> =
            frame.iter().map(|(&id, &x)| record(id, x)).collect();
        tracker.step(&batch);
        let delta = tracker.step(&batch);
        prop_assert!(delta.is_empty());
    }
}
