// SPDX-License-Identifier: Apache-2.0
//! The canonical surface record.
//!
//! A [`PlaneRecord`] is plain, deeply-comparable value data: no backend
//! handles, no shared buffers. Two records for the same surface can be
//! compared purely by value, which is what the diff engine relies on for
//! backends that supply no change timestamp.

use crate::ident::PlaneId;

/// Normalized, backend-independent representation of one detected plane.
///
/// `position`, `orientation`, and `extent` are always present; `timestamp`
/// and `vertices` are present only when the session's backend supplies them
/// (uniformly per backend, not per record).
///
/// # Equality policy
///
/// Structural equality is exact component-wise `f64` equality (the derived
/// `PartialEq`). Untimestamped backends redeliver bit-identical buffers when
/// nothing changed, so exact comparison is sufficient; a tolerance would
/// mask genuinely small motions as "unchanged".
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneRecord {
    /// Stable surface identity, unique within a frame.
    pub id: PlaneId,
    /// Monotonic change timestamp, if the backend supplies one. Its presence
    /// switches the diff engine from structural to timestamp comparison.
    pub timestamp: Option<f64>,
    /// World-space translation [x, y, z].
    pub position: [f64; 3],
    /// Unit quaternion rotation [x, y, z, w].
    pub orientation: [f64; 4],
    /// Planar size along two axes. Backend-native convention; treated as
    /// opaque by the core.
    pub extent: [f64; 2],
    /// Polygon boundary as ordered vertex triples, if the backend supplies
    /// a boundary.
    pub vertices: Option<Vec<[f64; 3]>>,
}
