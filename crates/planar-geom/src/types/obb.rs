// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use planar_math::{deg_to_rad, Vector};
use tracing::debug;

use crate::config::GeomConfig;
use crate::GeomError;

/// Oriented bounding box found by a fixed-resolution angular scan.
///
/// The scan tries axis `u = (cos θ, sin θ)` with `v = rotate90(u)` for
/// `θ = 0°, 1°, …` and keeps the orientation with the smallest quarter area
/// `ex * ey`. It is a brute-force search over sampled angles, not rotating
/// calipers over hull edges, so the true minimum-area box may lie between two
/// samples. Cost is `O(steps * n)`; the result is deterministic for a given
/// input.
///
/// Invariants: `u` and `v` are orthonormal; `extents` are non-negative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Obb {
    center: Vector,
    u: Vector,
    v: Vector,
    extents: [f32; 2],
    quarter_area: f32,
    angle_degrees: f32,
}

/// Signed coordinate of `point` along `axis`: the length of the projection,
/// negated when the projection points away from the axis.
fn axis_coordinate(point: &Vector, axis: &Vector) -> f32 {
    let projection = point.projection(axis);
    let magnitude = projection.norm();
    if projection.dot(axis) > 0.0 {
        magnitude
    } else {
        -magnitude
    }
}

fn interval(points: &[Vector], axis: &Vector) -> (f32, f32) {
    points.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
        let c = axis_coordinate(p, axis);
        (lo.min(c), hi.max(c))
    })
}

impl Obb {
    /// Scans the default 90 orientations (0° through 89°).
    ///
    /// # Errors
    /// [`GeomError::EmptyInput`] if `points` is empty.
    pub fn from_points(points: &[Vector]) -> Result<Self, GeomError> {
        Self::from_points_with_steps(points, GeomConfig::DEFAULT_OBB_ANGLE_STEPS)
    }

    /// Scans the orientations configured in `config`.
    ///
    /// # Errors
    /// [`GeomError::EmptyInput`] if `points` is empty.
    pub fn from_points_with(points: &[Vector], config: &GeomConfig) -> Result<Self, GeomError> {
        Self::from_points_with_steps(points, config.obb_angle_steps)
    }

    /// Scans `steps` orientations at 1° increments starting from 0°.
    ///
    /// Because every scan starts at 0° with the same increment, a longer scan
    /// never yields a larger quarter area than a shorter one.
    ///
    /// # Errors
    /// [`GeomError::EmptyInput`] if `points` is empty.
    pub fn from_points_with_steps(points: &[Vector], steps: u16) -> Result<Self, GeomError> {
        if points.is_empty() {
            return Err(GeomError::EmptyInput);
        }
        let mut best: Option<Self> = None;
        for step in 0..steps.max(1) {
            let degrees = f32::from(step);
            let theta = deg_to_rad(degrees);
            let u = Vector::xy(theta.cos(), theta.sin());
            let v = u.rotate90();

            let (min_u, max_u) = interval(points, &u);
            let (min_v, max_v) = interval(points, &v);
            let extents = [(max_u - min_u) / 2.0, (max_v - min_v) / 2.0];
            let quarter_area = extents[0] * extents[1];

            if best.as_ref().is_some_and(|b| quarter_area >= b.quarter_area) {
                continue;
            }
            let center = u
                .times((max_u + min_u) / 2.0)
                .plus(&v.times((max_v + min_v) / 2.0));
            best = Some(Self {
                center,
                u,
                v,
                extents,
                quarter_area,
                angle_degrees: degrees,
            });
        }
        let best = best.ok_or(GeomError::EmptyInput)?;
        debug!(
            angle = best.angle_degrees,
            quarter_area = best.quarter_area,
            vertices = points.len(),
            "obb scan settled"
        );
        Ok(best)
    }

    /// Center in world coordinates.
    pub fn center(&self) -> Vector {
        self.center
    }

    /// First axis (unit).
    pub fn u(&self) -> Vector {
        self.u
    }

    /// Second axis, `u` turned +90°.
    pub fn v(&self) -> Vector {
        self.v
    }

    /// Half-extents `[ex, ey]` along `u` and `v`.
    pub fn extents(&self) -> [f32; 2] {
        self.extents
    }

    /// `ex * ey`, a quarter of the box area.
    pub fn quarter_area(&self) -> f32 {
        self.quarter_area
    }

    /// Orientation of `u` in degrees.
    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }

    /// World-space corners, counter-clockwise starting at `-u -v`.
    pub fn corners(&self) -> [Vector; 4] {
        let eu = self.u.times(self.extents[0]);
        let ev = self.v.times(self.extents[1]);
        [
            self.center.minus(&eu).minus(&ev),
            self.center.plus(&eu).minus(&ev),
            self.center.plus(&eu).plus(&ev),
            self.center.minus(&eu).plus(&ev),
        ]
    }

    /// Returns `true` if `point` lies inside or on the box.
    pub fn contains(&self, point: &Vector) -> bool {
        let offset = point.planar().minus(&self.center);
        axis_coordinate(&offset, &self.u).abs() <= self.extents[0]
            && axis_coordinate(&offset, &self.v).abs() <= self.extents[1]
    }
}
