// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! planar-math: value-type vector algebra for the planar collision kernel.
//!
//! * [`Vector`] is an immutable `(x, y, z)` triple with an implicit homogeneous
//!   weight of `1`; the third coordinate is carried but the kernel never
//!   compares on it.
//! * [`Matrix`] is a column-major 4×4 homogeneous transform used for the fixed
//!   quarter-turn rotations and translations.
//! * [`Prng`] and the [`RandomSource`] seam keep every randomized heuristic
//!   reproducible from a seed.
//!
//! All arithmetic is `f32`.

mod angle;
mod matrix;
mod prng;
mod vector;

use std::f32::consts::TAU;

use thiserror::Error;

pub use angle::{pseudo_theta_by_dot, pseudo_theta_square, theta_by_cross, theta_by_dot};
pub use matrix::Matrix;
pub use prng::{Prng, RandomSource};
pub use vector::Vector;

/// Global epsilon used by tests and callers when comparing derived values.
pub const EPSILON: f32 = 1e-6;

/// Errors raised by vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A unit vector was requested from a vector with zero length.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
}

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// Callers must pass `min <= max`; reversed bounds return `max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
