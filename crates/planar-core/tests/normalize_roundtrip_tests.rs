// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use approx::assert_relative_eq;
use glam::{DMat4, DQuat, DVec3};
use planar_core::{normalize, RawId, RawPlane};

const EPS: f64 = 1e-9;

fn transform_record(translation: DVec3, rotation: DQuat, scale: DVec3) -> RawPlane {
    RawPlane::Transform {
        identity: RawId::Text("t".to_owned()),
        transform: DMat4::from_scale_rotation_translation(scale, rotation, translation)
            .to_cols_array(),
        extent: [2.0, 3.0],
    }
}

/// Quaternions q and -q encode the same rotation; compare up to sign.
fn assert_same_rotation(got: [f64; 4], want: DQuat) {
    let dot = got[0] * want.x + got[1] * want.y + got[2] * want.z + got[3] * want.w;
    assert_relative_eq!(dot.abs(), 1.0, epsilon = EPS);
}

#[test]
fn decomposition_recovers_translation_and_rotation() {
    let translation = DVec3::new(1.25, -0.5, 4.0);
    let rotation = DQuat::from_axis_angle(DVec3::new(0.0, 1.0, 0.0), 0.75);
    let raw = transform_record(translation, rotation, DVec3::ONE);

    let rec = normalize(&raw);
    assert_relative_eq!(rec.position[0], translation.x, epsilon = EPS);
    assert_relative_eq!(rec.position[1], translation.y, epsilon = EPS);
    assert_relative_eq!(rec.position[2], translation.z, epsilon = EPS);
    assert_same_rotation(rec.orientation, rotation);
    assert_eq!(rec.extent, [2.0, 3.0]);
}

#[test]
fn nonuniform_scale_does_not_leak_into_position_or_rotation() {
    let translation = DVec3::new(-2.0, 0.25, 1.0);
    let rotation = DQuat::from_axis_angle(DVec3::new(1.0, 0.0, 0.0).normalize(), -1.1);
    let raw = transform_record(translation, rotation, DVec3::new(2.0, 1.0, 0.5));

    let rec = normalize(&raw);
    assert_relative_eq!(rec.position[0], translation.x, epsilon = EPS);
    assert_relative_eq!(rec.position[1], translation.y, epsilon = EPS);
    assert_relative_eq!(rec.position[2], translation.z, epsilon = EPS);
    assert_same_rotation(rec.orientation, rotation);
}

#[test]
fn roundtrip_over_sampled_rotations() {
    let axes = [
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(1.0, 1.0, 1.0).normalize(),
        DVec3::new(-1.0, 2.0, 0.5).normalize(),
    ];
    let angles = [0.0, 0.3, std::f64::consts::FRAC_PI_2, 2.4, -1.7];
    for axis in axes {
        for angle in angles {
            let rotation = DQuat::from_axis_angle(axis, angle);
            let translation = DVec3::new(angle, -angle, 0.5 * angle);
            let raw = transform_record(translation, rotation, DVec3::ONE);
            let rec = normalize(&raw);
            assert_same_rotation(rec.orientation, rotation);
            assert_relative_eq!(rec.position[0], translation.x, epsilon = EPS);
        }
    }
}
