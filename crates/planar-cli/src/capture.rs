// SPDX-License-Identifier: Apache-2.0
//! Capture wire format and backend-shape classification.
//!
//! A capture is a JSON array of frames; each frame is an array of loose,
//! duck-shaped records as backends actually emit them. The driver (this
//! CLI) decides the session's [`Backend`] once — from the first record or a
//! command-line override — and converts every record into the closed
//! [`RawPlane`] union, surfacing [`ShapeError`] on contract violations.

use planar_core::{Backend, Boundary, RawId, RawPlane, ShapeError};
use serde::Deserialize;

/// One raw record as it appears on the wire, all fields optional.
///
/// Which fields must be present is decided by the session backend, not per
/// record; [`classify`] enforces that.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireRecord {
    /// Explicit identity field (preferred).
    pub identifier: Option<RawId>,
    /// Fallback numeric-or-string identity field.
    pub id: Option<RawId>,
    /// Monotonic change timestamp.
    pub timestamp: Option<f64>,
    /// Column-major 4x4 transform, 16 components.
    pub transform: Option<Vec<f64>>,
    /// World-space translation, 3 components.
    pub position: Option<Vec<f64>>,
    /// Unit quaternion rotation, 4 components.
    pub orientation: Option<Vec<f64>>,
    /// Planar size, 2 components.
    pub extent: Option<Vec<f64>>,
    /// Flat polygon boundary (preferred over `vertices`).
    pub polygon: Option<Vec<f64>>,
    /// Flat polygon boundary (legacy field name).
    pub vertices: Option<Vec<f64>>,
}

/// One frame of a capture.
pub type WireFrame = Vec<WireRecord>;

/// Infers the backend shape from a record.
///
/// Priority order mirrors the classification contract: a combined transform
/// marks the transform backend, an explicit timestamp the timestamped one,
/// anything else the indexed one.
#[must_use]
pub fn detect_backend(record: &WireRecord) -> Backend {
    if record.transform.is_some() {
        Backend::Transform
    } else if record.timestamp.is_some() {
        Backend::Timestamped
    } else {
        Backend::Indexed
    }
}

/// Converts a loose wire record into the closed raw union for the session's
/// declared backend.
pub fn classify(record: &WireRecord, backend: Backend) -> Result<RawPlane, ShapeError> {
    let identity = record
        .identifier
        .clone()
        .or_else(|| record.id.clone())
        .ok_or(ShapeError::MissingIdentity)?;

    match backend {
        Backend::Transform => Ok(RawPlane::Transform {
            identity,
            transform: fixed::<16>(record.transform.as_deref(), "transform", backend)?,
            extent: fixed::<2>(record.extent.as_deref(), "extent", backend)?,
        }),
        Backend::Timestamped => {
            let timestamp = record.timestamp.ok_or_else(|| missing("timestamp", backend))?;
            Ok(RawPlane::Timestamped {
                identity,
                timestamp,
                position: fixed::<3>(record.position.as_deref(), "position", backend)?,
                orientation: fixed::<4>(record.orientation.as_deref(), "orientation", backend)?,
                extent: fixed::<2>(record.extent.as_deref(), "extent", backend)?,
                boundary: boundary_f64(record),
            })
        }
        Backend::Indexed => Ok(RawPlane::Indexed {
            identity,
            position: narrowed::<3>(record.position.as_deref(), "position", backend)?,
            orientation: narrowed::<4>(record.orientation.as_deref(), "orientation", backend)?,
            extent: narrowed::<2>(record.extent.as_deref(), "extent", backend)?,
            boundary: boundary_f32(record),
        }),
    }
}

/// `polygon` wins over `vertices` when a record carries both.
fn boundary_f64(record: &WireRecord) -> Option<Boundary<f64>> {
    record
        .polygon
        .clone()
        .map(Boundary::Polygon)
        .or_else(|| record.vertices.clone().map(Boundary::Vertices))
}

#[allow(clippy::cast_possible_truncation)]
fn boundary_f32(record: &WireRecord) -> Option<Boundary<f32>> {
    let narrow = |flat: &Vec<f64>| flat.iter().map(|&v| v as f32).collect::<Vec<f32>>();
    record
        .polygon
        .as_ref()
        .map(|flat| Boundary::Polygon(narrow(flat)))
        .or_else(|| {
            record
                .vertices
                .as_ref()
                .map(|flat| Boundary::Vertices(narrow(flat)))
        })
}

fn missing(field: &str, backend: Backend) -> ShapeError {
    ShapeError::UnsupportedShape {
        backend,
        detail: format!("missing `{field}`"),
    }
}

fn fixed<const N: usize>(
    field: Option<&[f64]>,
    name: &str,
    backend: Backend,
) -> Result<[f64; N], ShapeError> {
    let slice = field.ok_or_else(|| missing(name, backend))?;
    <[f64; N]>::try_from(slice).map_err(|_| ShapeError::UnsupportedShape {
        backend,
        detail: format!("`{name}` must have {N} components, got {}", slice.len()),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn narrowed<const N: usize>(
    field: Option<&[f64]>,
    name: &str,
    backend: Backend,
) -> Result<[f32; N], ShapeError> {
    let wide = fixed::<N>(field, name, backend)?;
    Ok(wide.map(|v| v as f32))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn indexed_record(id: u64) -> WireRecord {
        WireRecord {
            id: Some(RawId::Number(id)),
            position: Some(vec![0.0, 0.0, 0.0]),
            orientation: Some(vec![0.0, 0.0, 0.0, 1.0]),
            extent: Some(vec![1.0, 1.0]),
            ..WireRecord::default()
        }
    }

    #[test]
    fn detection_priority_is_transform_then_timestamp() {
        let mut record = indexed_record(1);
        assert_eq!(detect_backend(&record), Backend::Indexed);
        record.timestamp = Some(10.0);
        assert_eq!(detect_backend(&record), Backend::Timestamped);
        record.transform = Some(vec![0.0; 16]);
        assert_eq!(detect_backend(&record), Backend::Transform);
    }

    #[test]
    fn missing_identity_is_a_typed_error() {
        let mut record = indexed_record(1);
        record.id = None;
        assert_eq!(
            classify(&record, Backend::Indexed),
            Err(ShapeError::MissingIdentity)
        );
    }

    #[test]
    fn identifier_wins_over_id() {
        let mut record = indexed_record(1);
        record.identifier = Some(RawId::Text("named".to_owned()));
        let raw = classify(&record, Backend::Indexed).unwrap();
        assert_eq!(raw.identity(), &RawId::Text("named".to_owned()));
    }

    #[test]
    fn wrong_arity_is_an_unsupported_shape() {
        let mut record = indexed_record(1);
        record.position = Some(vec![0.0, 0.0]);
        let err = classify(&record, Backend::Indexed).unwrap_err();
        assert!(matches!(err, ShapeError::UnsupportedShape { .. }));
    }

    #[test]
    fn polygon_is_preferred_over_vertices() {
        let mut record = indexed_record(1);
        record.polygon = Some(vec![1.0, 0.0, 1.0]);
        record.vertices = Some(vec![9.0, 9.0, 9.0]);
        let raw = classify(&record, Backend::Indexed).unwrap();
        let RawPlane::Indexed { boundary, .. } = raw else {
            unreachable!("classified against the indexed backend");
        };
        assert_eq!(boundary, Some(Boundary::Polygon(vec![1.0, 0.0, 1.0])));
    }

    #[test]
    fn timestamped_shape_requires_a_timestamp() {
        let record = indexed_record(1);
        let err = classify(&record, Backend::Timestamped).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::UnsupportedShape {
                backend: Backend::Timestamped,
                ..
            }
        ));
    }
}
