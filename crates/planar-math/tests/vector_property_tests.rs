// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Algebraic properties of `Vector` under randomized inputs.

use planar_math::{deg_to_rad, Vector};
use proptest::prelude::*;

fn close(a: &Vector, b: &Vector, tol: f32) -> bool {
    let scale = 1.0 + b.norm();
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .all(|(x, y)| (x - y).abs() <= tol * scale)
}

fn coord() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0
}

proptest! {
    #[test]
    fn reflect_twice_with_unit_normal_is_identity(
        x in coord(),
        y in coord(),
        deg in 0.0f32..360.0,
    ) {
        let theta = deg_to_rad(deg);
        let n = Vector::xy(theta.cos(), theta.sin());
        let v = Vector::xy(x, y);
        let back = v.reflect(&n).reflect(&n);
        prop_assert!(close(&back, &v, 1e-3), "v={v:?} back={back:?}");
    }

    #[test]
    fn reflect_with_unit_normal_preserves_length(
        x in coord(),
        y in coord(),
        deg in 0.0f32..360.0,
    ) {
        let theta = deg_to_rad(deg);
        let n = Vector::xy(theta.cos(), theta.sin());
        let v = Vector::xy(x, y);
        let r = v.reflect(&n);
        prop_assert!((r.norm() - v.norm()).abs() <= 1e-3 * (1.0 + v.norm()));
    }

    #[test]
    fn slide_result_is_orthogonal_to_unit_normal(
        x in coord(),
        y in coord(),
        deg in 0.0f32..360.0,
    ) {
        let theta = deg_to_rad(deg);
        let n = Vector::xy(theta.cos(), theta.sin());
        let s = Vector::xy(x, y).slide(&n);
        prop_assert!(s.dot(&n).abs() <= 1e-3 * (1.0 + x.abs() + y.abs()));
    }

    #[test]
    fn four_quarter_turns_return_to_start(x in coord(), y in coord()) {
        let v = Vector::xy(x, y);
        let r = v.rotate90().rotate90().rotate90().rotate90();
        prop_assert_eq!(r.to_array(), v.to_array());
        prop_assert_eq!(v.rotate90().rotate_minus90().to_array(), v.to_array());
    }

    #[test]
    fn rotate90_is_orthogonal(x in coord(), y in coord()) {
        let v = Vector::xy(x, y);
        prop_assert!(v.dot(&v.rotate90()).abs() <= 1e-6 * (1.0 + v.norm_squared()));
    }

    #[test]
    fn projection_is_parallel_to_target(
        x in coord(),
        y in coord(),
        tx in 1.0f32..100.0,
        ty in coord(),
    ) {
        let target = Vector::xy(tx, ty);
        let p = Vector::xy(x, y).projection(&target);
        let cross = p.cross(&target).z();
        prop_assert!(cross.abs() <= 1e-2 * (1.0 + p.norm() * target.norm()));
    }

    #[test]
    fn translate_matches_plus(x in coord(), y in coord(), dx in coord(), dy in coord()) {
        let v = Vector::xy(x, y);
        let d = Vector::xy(dx, dy);
        prop_assert!(close(&v.translate(&d), &v.plus(&d), 1e-6));
    }
}

#[test]
fn cross_of_planar_vectors_is_purely_z() {
    let c = Vector::xy(1.0, 0.0).cross(&Vector::xy(0.0, 1.0));
    assert_eq!(c.to_array(), [0.0, 0.0, 1.0]);
    let d = Vector::xy(0.0, 1.0).cross(&Vector::xy(1.0, 0.0));
    assert_eq!(d.to_array(), [0.0, 0.0, -1.0]);
}

#[test]
fn norm_ignores_homogeneous_weight() {
    let v = Vector::new(3.0, 4.0, 0.0);
    assert!((v.norm() - 5.0).abs() < 1e-6);
    let w = Vector::new(1.0, 2.0, 2.0);
    assert!((w.norm() - 3.0).abs() < 1e-6);
}
