// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use planar_math::{RandomSource, Vector};
use tracing::debug;

use crate::types::rect::Rect;
use crate::GeomError;

/// Circle in the xy plane.
///
/// Invariant: `radius` is finite and non-negative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    center: Vector,
    radius: f32,
}

impl Circle {
    /// Creates a circle.
    ///
    /// # Errors
    /// [`GeomError::InvalidRadius`] if `radius` is negative, NaN or infinite.
    pub fn new(center: Vector, radius: f32) -> Result<Self, GeomError> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(GeomError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Center.
    pub fn center(&self) -> Vector {
        self.center
    }

    /// Radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Same radius, moved to `center`.
    pub fn with_center(&self, center: Vector) -> Self {
        Self {
            center,
            radius: self.radius,
        }
    }

    /// Returns `true` if `point` is inside or on the circle.
    pub fn contains(&self, point: &Vector) -> bool {
        self.center.planar_distance(point) <= self.radius
    }
}

fn enclosing_radius(center: &Vector, points: &[Vector]) -> f32 {
    points
        .iter()
        .map(|p| center.planar_distance(p))
        .fold(f32::NEG_INFINITY, f32::max)
}

/// Approximate minimum enclosing circle by random search.
///
/// Draws `samples` candidate centers uniformly from `domain` (the viewport, not
/// the bounds of `points`), measures each candidate's worst-case distance to
/// the point set, and keeps the candidate with the smallest one. Ties keep the
/// earlier candidate. `samples == 0` is treated as `1`.
///
/// This is Monte-Carlo search, not Welzl's algorithm: more samples improve the
/// result but it is never certified minimal, and when the optimal center lies
/// outside `domain` it cannot be found at all. Cost is `O(samples * n)`.
///
/// # Errors
/// [`GeomError::EmptyInput`] if `points` is empty.
pub fn bounding_circle<R: RandomSource + ?Sized>(
    points: &[Vector],
    domain: &Rect,
    samples: usize,
    rng: &mut R,
) -> Result<Circle, GeomError> {
    if points.is_empty() {
        return Err(GeomError::EmptyInput);
    }
    let mut best: Option<(Vector, f32)> = None;
    for _ in 0..samples.max(1) {
        let candidate = domain.sample(rng);
        let radius = enclosing_radius(&candidate, points);
        if best.is_some_and(|(_, r)| radius >= r) {
            continue;
        }
        best = Some((candidate, radius));
    }
    let (center, radius) = best.ok_or(GeomError::EmptyInput)?;
    debug!(samples, radius, "bounding circle chosen");
    Circle::new(center, radius)
}
