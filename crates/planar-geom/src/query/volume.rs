// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use planar_math::{Matrix, Vector};

use crate::types::{aabb::Aabb, circle::Circle, obb::Obb};

/// Closed set of bounding volumes the kernel can test against each other.
///
/// Every pair is handled by an exhaustive `match`, so adding a variant fails
/// to compile until all of its pairings exist.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Volume {
    /// Axis-aligned box.
    Aabb(Aabb),
    /// Oriented box.
    Obb(Obb),
    /// Circle.
    Circle(Circle),
}

impl Volume {
    /// Returns `true` if `point` lies inside or on the volume.
    pub fn contains(&self, point: &Vector) -> bool {
        match self {
            Self::Aabb(b) => b.contains(point),
            Self::Obb(o) => o.contains(point),
            Self::Circle(c) => c.contains(point),
        }
    }

    /// Returns `true` if the two volumes overlap or touch.
    pub fn intersects(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Aabb(a), Self::Aabb(b)) => a.collides_with(b),
            (Self::Aabb(a), Self::Circle(c)) | (Self::Circle(c), Self::Aabb(a)) => {
                aabb_circle(a, c)
            }
            (Self::Circle(a), Self::Circle(b)) => circle_circle(a, b),
            (Self::Obb(o), Self::Circle(c)) | (Self::Circle(c), Self::Obb(o)) => obb_circle(o, c),
            (Self::Obb(o), Self::Aabb(a)) | (Self::Aabb(a), Self::Obb(o)) => obb_aabb(o, a),
            (Self::Obb(a), Self::Obb(b)) => obb_obb(a, b),
        }
    }
}

impl From<Aabb> for Volume {
    fn from(value: Aabb) -> Self {
        Self::Aabb(value)
    }
}

impl From<Obb> for Volume {
    fn from(value: Obb) -> Self {
        Self::Obb(value)
    }
}

impl From<Circle> for Volume {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

// Squared distance from `point` to `[min, max]` on x and y; zero on an axis
// where the point lies inside the interval.
fn clamped_distance_squared(min: &Vector, max: &Vector, point: &Vector) -> f32 {
    let axis = |p: f32, lo: f32, hi: f32| {
        if p < lo {
            (lo - p) * (lo - p)
        } else if p > hi {
            (p - hi) * (p - hi)
        } else {
            0.0
        }
    };
    axis(point.x(), min.x(), max.x()) + axis(point.y(), min.y(), max.y())
}

/// Box–circle test: the clamped squared distance from the center to the box
/// is at most `r²`.
pub fn aabb_circle(aabb: &Aabb, circle: &Circle) -> bool {
    let r = circle.radius();
    clamped_distance_squared(&aabb.min(), &aabb.max(), &circle.center()) <= r * r
}

/// Circle–circle test: `‖c1 - c2‖ <= r1 + r2`.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    a.center().planar_distance(&b.center()) <= a.radius() + b.radius()
}

/// OBB–circle test in the box's local frame.
///
/// The rows of the frame matrix are the box axes, so both centers rotate into
/// coordinates where the box is axis aligned with half-extents `e`; the
/// box–circle test then runs there.
pub fn obb_circle(obb: &Obb, circle: &Circle) -> bool {
    let frame = Matrix::from_rows(&obb.u(), &obb.v());
    let center = frame.transform_point(&circle.center().planar());
    let local = Aabb::from_center_half_extents(
        frame.transform_point(&obb.center()),
        obb.extents()[0],
        obb.extents()[1],
    );
    let r = circle.radius();
    clamped_distance_squared(&local.min(), &local.max(), &center) <= r * r
}

fn interval_along(corners: &[Vector], axis: &Vector) -> (f32, f32) {
    corners.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), c| {
        let d = c.dot(axis);
        (lo.min(d), hi.max(d))
    })
}

fn intervals_overlap((a_lo, a_hi): (f32, f32), (b_lo, b_hi): (f32, f32)) -> bool {
    !(a_hi < b_lo || b_hi < a_lo)
}

/// OBB–AABB test on the world axes only.
///
/// The box corners are projected onto world X and Y and both projected
/// intervals must overlap the AABB's. This is two of the four axes a full
/// separating-axis test needs: the OBB's own axes are never tried, so a
/// rotated box that is separated only along `u` or `v` is reported as
/// intersecting. Use [`obb_obb`] on an AABB-shaped OBB when the exact answer
/// matters.
pub fn obb_aabb(obb: &Obb, aabb: &Aabb) -> bool {
    let corners = obb.corners();
    let (min, max) = (aabb.min(), aabb.max());
    intervals_overlap(interval_along(&corners, &Vector::UNIT_X), (min.x(), max.x()))
        && intervals_overlap(interval_along(&corners, &Vector::UNIT_Y), (min.y(), max.y()))
}

/// OBB–OBB separating-axis test over both boxes' axes (four in total).
pub fn obb_obb(a: &Obb, b: &Obb) -> bool {
    let ca = a.corners();
    let cb = b.corners();
    [a.u(), a.v(), b.u(), b.v()]
        .iter()
        .all(|axis| intervals_overlap(interval_along(&ca, axis), interval_along(&cb, axis)))
}
