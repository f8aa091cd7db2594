// SPDX-License-Identifier: Apache-2.0
//! The normalizer: raw backend record to canonical record.
//!
//! Normalization is total over the closed [`RawPlane`] union: a well-formed
//! variant always yields a [`PlaneRecord`]. Shape violations are caught
//! earlier, when the driver converts loose backend output into [`RawPlane`]
//! (see [`ShapeError`](crate::ShapeError)).

use glam::DMat4;

use crate::raw::RawPlane;
use crate::record::PlaneRecord;

/// Converts one raw surface record into the canonical record shape.
///
/// Per backend:
///
/// - **Transform**: the combined 4x4 matrix is decomposed into translation
///   and rotation (scale is discarded; plane size travels in `extent`). No
///   timestamp is synthesized and no boundary exists in this encoding.
/// - **Timestamped**: fields are copied through unchanged; the boundary is
///   re-chunked into vertex triples. The timestamp substitutes for
///   structural equality downstream, so no per-element rebuild is needed.
/// - **Indexed**: every component is rebuilt element by element, widening
///   the sensor-native `f32` buffers to `f64`, so the canonical record is
///   plain value data with no tie to backend storage.
#[must_use]
pub fn normalize(raw: &RawPlane) -> PlaneRecord {
    match raw {
        RawPlane::Transform {
            identity,
            transform,
            extent,
        } => {
            let (_scale, rotation, translation) =
                DMat4::from_cols_array(transform).to_scale_rotation_translation();
            PlaneRecord {
                id: identity.canonicalize(),
                timestamp: None,
                position: [translation.x, translation.y, translation.z],
                orientation: [rotation.x, rotation.y, rotation.z, rotation.w],
                extent: *extent,
                vertices: None,
            }
        }
        RawPlane::Timestamped {
            identity,
            timestamp,
            position,
            orientation,
            extent,
            boundary,
        } => PlaneRecord {
            id: identity.canonicalize(),
            timestamp: Some(*timestamp),
            position: *position,
            orientation: *orientation,
            extent: *extent,
            vertices: boundary.as_ref().map(|b| triples(b.components())),
        },
        RawPlane::Indexed {
            identity,
            position,
            orientation,
            extent,
            boundary,
        } => PlaneRecord {
            id: identity.canonicalize(),
            timestamp: None,
            position: [
                f64::from(position[0]),
                f64::from(position[1]),
                f64::from(position[2]),
            ],
            orientation: [
                f64::from(orientation[0]),
                f64::from(orientation[1]),
                f64::from(orientation[2]),
                f64::from(orientation[3]),
            ],
            extent: [f64::from(extent[0]), f64::from(extent[1])],
            vertices: boundary.as_ref().map(|b| widened_triples(b.components())),
        },
    }
}

/// Re-chunks a flat `[x, y, z, ...]` component list into vertex triples.
///
/// A trailing remainder shorter than one triple is dropped; arity is the
/// driver's contract to enforce, not the normalizer's.
fn triples(flat: &[f64]) -> Vec<[f64; 3]> {
    flat.chunks_exact(3)
        .map(|v| [v[0], v[1], v[2]])
        .collect()
}

/// Like [`triples`], widening single-precision components to `f64`.
fn widened_triples(flat: &[f32]) -> Vec<[f64; 3]> {
    flat.chunks_exact(3)
        .map(|v| [f64::from(v[0]), f64::from(v[1]), f64::from(v[2])])
        .collect()
}
