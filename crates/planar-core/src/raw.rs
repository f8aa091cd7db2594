// SPDX-License-Identifier: Apache-2.0
//! Raw backend shapes.
//!
//! The supported backends expose the per-frame surface list in three
//! incompatible encodings. Rather than probing each record for fields, the
//! driver declares the session's [`Backend`] once (the backend shape is a
//! property of the sensor, not of individual records) and converts every raw
//! record into the closed [`RawPlane`] union. A record that cannot be
//! converted is a contract violation surfaced as [`ShapeError`], never a
//! silently dropped surface.

use thiserror::Error;

use crate::ident::RawId;

/// The raw encoding a sensing backend uses for its surface list.
///
/// Chosen once per session by the driver; every record in every frame of the
/// session is expected to conform to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Backend {
    /// ARKit-style: one combined 4x4 transform, no change timestamps.
    Transform,
    /// Backends with an explicit monotonic change timestamp per record.
    Timestamped,
    /// Draft ARCore-style: single-precision index-addressable buffers and no
    /// timestamps.
    Indexed,
}

/// Polygon boundary as a flat `[x, y, z, x, y, z, ...]` component list.
///
/// Backends name this field either `polygon` or `vertices`; the variant
/// records which one supplied the data (the driver prefers `polygon` when a
/// record carries both). The normalizer treats the two identically.
#[derive(Clone, Debug, PartialEq)]
pub enum Boundary<T> {
    /// Boundary taken from the backend's `polygon` field.
    Polygon(Vec<T>),
    /// Boundary taken from the backend's `vertices` field.
    Vertices(Vec<T>),
}

impl<T> Boundary<T> {
    /// Returns the flat component list regardless of source field.
    #[must_use]
    pub fn components(&self) -> &[T] {
        match self {
            Self::Polygon(flat) | Self::Vertices(flat) => flat,
        }
    }
}

/// One raw surface record, in the session backend's native encoding.
///
/// This is the closed union the normalizer dispatches on. Each variant
/// carries exactly the fields its backend supplies; there is no optional
/// field that is "sometimes there" within a variant except the boundary,
/// which backends genuinely omit for planes without a detected polygon.
#[derive(Clone, Debug, PartialEq)]
pub enum RawPlane {
    /// Combined-transform record ([`Backend::Transform`]).
    Transform {
        /// Backend-reported identity.
        identity: RawId,
        /// Column-major 4x4 transform combining translation, rotation, and
        /// scale.
        transform: [f64; 16],
        /// Planar size along two axes, already in backend-native convention.
        extent: [f64; 2],
    },
    /// Timestamped record ([`Backend::Timestamped`]).
    Timestamped {
        /// Backend-reported identity.
        identity: RawId,
        /// Monotonic change timestamp.
        timestamp: f64,
        /// World-space translation.
        position: [f64; 3],
        /// Unit quaternion rotation.
        orientation: [f64; 4],
        /// Planar size along two axes.
        extent: [f64; 2],
        /// Optional polygon boundary.
        boundary: Option<Boundary<f64>>,
    },
    /// Untimestamped single-precision record ([`Backend::Indexed`]).
    ///
    /// The buffers are sensor-native `f32`; the normalizer rebuilds them
    /// element by element into plain `f64` data so canonical records compare
    /// by value.
    Indexed {
        /// Backend-reported identity.
        identity: RawId,
        /// World-space translation.
        position: [f32; 3],
        /// Unit quaternion rotation.
        orientation: [f32; 4],
        /// Planar size along two axes.
        extent: [f32; 2],
        /// Optional polygon boundary.
        boundary: Option<Boundary<f32>>,
    },
}

impl RawPlane {
    /// Returns the backend kind this record conforms to.
    #[must_use]
    pub fn backend(&self) -> Backend {
        match self {
            Self::Transform { .. } => Backend::Transform,
            Self::Timestamped { .. } => Backend::Timestamped,
            Self::Indexed { .. } => Backend::Indexed,
        }
    }

    /// Returns the backend-reported identity of this record.
    #[must_use]
    pub fn identity(&self) -> &RawId {
        match self {
            Self::Transform { identity, .. }
            | Self::Timestamped { identity, .. }
            | Self::Indexed { identity, .. } => identity,
        }
    }
}

/// Contract violation raised while converting driver input into [`RawPlane`].
///
/// These are precondition failures of the driver/backend contract, not
/// recoverable per-record faults: a malformed record means the driver chose
/// the wrong backend shape (or the backend is broken), and silently skipping
/// it would corrupt the added/updated/removed partition. Drivers must fail
/// the frame and leave the tracker untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The record carries neither an `identifier` nor an `id` field.
    #[error("record is missing an identity field (`identifier` or `id`)")]
    MissingIdentity,
    /// The record lacks a field the session's declared backend requires, or
    /// a field has the wrong arity.
    #[error("record does not conform to the {backend:?} backend shape: {detail}")]
    UnsupportedShape {
        /// The backend the session declared.
        backend: Backend,
        /// What was missing or malformed.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_components_ignore_source_field() {
        let poly: Boundary<f64> = Boundary::Polygon(vec![1.0, 2.0, 3.0]);
        let verts: Boundary<f64> = Boundary::Vertices(vec![1.0, 2.0, 3.0]);
        assert_eq!(poly.components(), verts.components());
    }

    #[test]
    fn backend_kind_tracks_variant() {
        let raw = RawPlane::Indexed {
            identity: RawId::Number(1),
            position: [0.0; 3],
            orientation: [0.0, 0.0, 0.0, 1.0],
            extent: [1.0, 1.0],
            boundary: None,
        };
        assert_eq!(raw.backend(), Backend::Indexed);
    }
}
