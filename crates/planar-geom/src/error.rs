// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use planar_math::MathError;
use thiserror::Error;

/// Errors emitted by the geometry kernel.
///
/// Every variant is local to one computation; none leaves a volume or particle
/// in a partially updated state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A bounding volume was requested for an empty vertex list.
    #[error("cannot build a bounding volume from an empty vertex list")]
    EmptyInput,
    /// A unit vector was required from a zero-length vector.
    #[error("degenerate vector: {0}")]
    DegenerateVector(#[from] MathError),
    /// Intersection-point recovery hit a zero denominator (parallel lines).
    #[error("segments are parallel; intersection point is undefined")]
    ParallelSegments,
    /// A circle or particle radius was negative or not finite.
    #[error("invalid radius {0}")]
    InvalidRadius(f32),
}
