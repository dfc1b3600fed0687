// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use planar_math::Vector;

use crate::GeomError;

/// Axis-aligned bounding box with a swept snapshot.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components, for both the
///   current and the snapshot corners.
/// - `last_min`/`last_max` hold the extents from before the most recent
///   [`Aabb::translate`]. They feed the `was_*` side queries and nothing else.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vector,
    max: Vector,
    last_min: Vector,
    last_max: Vector,
}

fn component_min(a: &Vector, b: &Vector) -> Vector {
    Vector::new(a.x().min(b.x()), a.y().min(b.y()), a.z().min(b.z()))
}

fn component_max(a: &Vector, b: &Vector) -> Vector {
    Vector::new(a.x().max(b.x()), a.y().max(b.y()), a.z().max(b.z()))
}

impl Aabb {
    /// Builds the minimal AABB that contains all `points`.
    ///
    /// # Errors
    /// [`GeomError::EmptyInput`] if `points` is empty.
    pub fn from_points(points: &[Vector]) -> Result<Self, GeomError> {
        let (first, rest) = points.split_first().ok_or(GeomError::EmptyInput)?;
        let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| {
            (component_min(&min, p), component_max(&max, p))
        });
        Ok(Self::from_corners(min, max))
    }

    /// Box spanned by two points in any order.
    pub fn spanning(a: Vector, b: Vector) -> Self {
        Self::from_corners(component_min(&a, &b), component_max(&a, &b))
    }

    /// Builds a box centered at `center` with half-extents `hx`, `hy` (z is flat).
    ///
    /// Negative half-extents are taken by magnitude.
    pub fn from_center_half_extents(center: Vector, hx: f32, hy: f32) -> Self {
        let he = Vector::xy(hx.abs(), hy.abs());
        Self::from_corners(center.minus(&he), center.plus(&he))
    }

    fn from_corners(min: Vector, max: Vector) -> Self {
        Self {
            min,
            max,
            last_min: min,
            last_max: max,
        }
    }

    /// Minimum corner.
    pub fn min(&self) -> Vector {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Vector {
        self.max
    }

    /// Minimum corner before the most recent translation.
    pub fn last_min(&self) -> Vector {
        self.last_min
    }

    /// Maximum corner before the most recent translation.
    pub fn last_max(&self) -> Vector {
        self.last_max
    }

    /// Midpoint of `min` and `max`, computed on every call.
    pub fn center(&self) -> Vector {
        self.min.plus(&self.max).times(0.5)
    }

    /// Snapshots the current extents, then shifts the box by `delta`.
    ///
    /// The snapshot is taken first so swept queries always compare the
    /// previous frame of `self` against the current frame of the other box.
    pub fn translate(&mut self, delta: &Vector) {
        self.last_min = self.min;
        self.last_max = self.max;
        self.shift(delta);
    }

    // Moves the extents without touching the snapshot.
    fn shift(&mut self, delta: &Vector) {
        self.min = self.min.translate(delta);
        self.max = self.max.translate(delta);
    }

    /// Bottom was at or above `that`'s top in the previous frame.
    ///
    /// All four side queries count touching, so a box that reaches a face
    /// exactly is still pushed back onto it.
    pub fn was_above(&self, that: &Self) -> bool {
        self.last_min.y() >= that.last_max.y()
    }

    /// Top was at or below `that`'s bottom in the previous frame.
    pub fn was_below(&self, that: &Self) -> bool {
        self.last_max.y() <= that.last_min.y()
    }

    /// Right edge was at or left of `that`'s left edge in the previous frame.
    pub fn was_left_of(&self, that: &Self) -> bool {
        self.last_max.x() <= that.last_min.x()
    }

    /// Left edge was at or right of `that`'s right edge in the previous frame.
    pub fn was_right_of(&self, that: &Self) -> bool {
        self.last_min.x() >= that.last_max.x()
    }

    /// Moves along y so the bottom rests on `other`'s top.
    pub fn correct_was_above(&mut self, other: &Self) {
        self.shift(&Vector::xy(0.0, other.max.y() - self.min.y()));
    }

    /// Moves along y so the top rests on `other`'s bottom.
    pub fn correct_was_below(&mut self, other: &Self) {
        self.shift(&Vector::xy(0.0, other.min.y() - self.max.y()));
    }

    /// Moves along x so the right edge rests on `other`'s left edge.
    pub fn correct_was_left_of(&mut self, other: &Self) {
        self.shift(&Vector::xy(other.min.x() - self.max.x(), 0.0));
    }

    /// Moves along x so the left edge rests on `other`'s right edge.
    pub fn correct_was_right_of(&mut self, other: &Self) {
        self.shift(&Vector::xy(other.max.x() - self.min.x(), 0.0));
    }

    /// Returns `true` unless the boxes are strictly separated on x or y.
    ///
    /// Touching faces count as a collision.
    pub fn collides_with(&self, that: &Self) -> bool {
        !(self.max.x() < that.min.x()
            || self.max.y() < that.min.y()
            || self.min.x() > that.max.x()
            || self.min.y() > that.max.y())
    }

    /// Returns `true` if `point` is inside or on the boundary (x and y only).
    pub fn contains(&self, point: &Vector) -> bool {
        !(self.max.x() < point.x()
            || self.max.y() < point.y()
            || self.min.x() > point.x()
            || self.min.y() > point.y())
    }

    /// The four planar corners, counter-clockwise from `min`.
    pub fn corners(&self) -> [Vector; 4] {
        let (lo, hi) = (self.min, self.max);
        [
            Vector::xy(lo.x(), lo.y()),
            Vector::xy(hi.x(), lo.y()),
            Vector::xy(hi.x(), hi.y()),
            Vector::xy(lo.x(), hi.y()),
        ]
    }
}
