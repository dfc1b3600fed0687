// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Angle measures between two direction vectors, in degrees.
//!
//! Each measure returns `0` when either input is the null vector.

use crate::{clamp, rad_to_deg, Vector};

fn cosine(u: &Vector, v: &Vector) -> f32 {
    clamp(u.dot(v) / (u.norm() * v.norm()), -1.0, 1.0)
}

/// Unsigned angle in `[0, 180]` from the normalized dot product.
pub fn theta_by_dot(u: &Vector, v: &Vector) -> f32 {
    if u.is_null() || v.is_null() {
        return 0.0;
    }
    rad_to_deg(cosine(u, v).acos())
}

/// Angle in `[0, 90]` from the normalized cross-product magnitude.
///
/// `asin` folds obtuse angles back below 90°: `theta_by_cross` of vectors 120°
/// apart is 60°.
pub fn theta_by_cross(u: &Vector, v: &Vector) -> f32 {
    if u.is_null() || v.is_null() {
        return 0.0;
    }
    let sine = clamp(u.cross(v).norm() / (u.norm() * v.norm()), -1.0, 1.0);
    rad_to_deg(sine.asin())
}

/// `1 - cos(theta)` scaled by `180 / pi`; monotone in the true angle and
/// free of inverse trigonometry.
pub fn pseudo_theta_by_dot(u: &Vector, v: &Vector) -> f32 {
    if u.is_null() || v.is_null() {
        return 0.0;
    }
    rad_to_deg(1.0 - cosine(u, v))
}

/// Difference of the square pseudo-angles of `u` and `v`, see
/// [`Vector::pseudo_angle`].
pub fn pseudo_theta_square(u: &Vector, v: &Vector) -> f32 {
    if u.is_null() || v.is_null() {
        return 0.0;
    }
    (u.pseudo_angle() - v.pseudo_angle()).abs()
}
