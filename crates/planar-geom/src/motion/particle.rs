// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use planar_math::Vector;
use tracing::{trace, warn};

use crate::config::ReflectionPolicy;
use crate::types::{aabb::Aabb, circle::Circle, segment::Segment};
use crate::GeomError;

/// Which swept-side flags were set for a collision.
///
/// More than one flag can be set at a time when the particle approaches a
/// wall diagonally.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SweptSides {
    /// Hitbox was above the wall's box last frame.
    pub above: bool,
    /// Hitbox was below the wall's box last frame.
    pub below: bool,
    /// Hitbox was left of the wall's box last frame.
    pub left_of: bool,
    /// Hitbox was right of the wall's box last frame.
    pub right_of: bool,
}

impl SweptSides {
    /// Evaluates all four `was_*` queries of `hitbox` against `wall`.
    pub fn between(hitbox: &Aabb, wall: &Aabb) -> Self {
        Self {
            above: hitbox.was_above(wall),
            below: hitbox.was_below(wall),
            left_of: hitbox.was_left_of(wall),
            right_of: hitbox.was_right_of(wall),
        }
    }
}

/// One collision observed during [`Particle::step_with`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CollisionEvent<'a> {
    /// Index of the segment in the slice passed to the step.
    pub index: usize,
    /// The segment that was hit.
    pub segment: &'a Segment,
    /// Swept-side flags before correction.
    pub swept: SweptSides,
}

/// Outcome of one particle step.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StepReport {
    /// Indices of the segments hit, in scan order.
    pub collisions: Vec<usize>,
    /// Indices of hit segments whose reflection was skipped because the
    /// segment has no normal (zero length).
    pub skipped_reflections: Vec<usize>,
    /// Segments pushed by the collision callback. They were not scanned in the
    /// step that produced them.
    pub spawned: Vec<Segment>,
}

/// Moving circular body with an axis-aligned hitbox.
///
/// The hitbox is the square of half-extent `radius` around the center and is
/// the only shape used for collision; [`Particle::center`] is read back from
/// it after every step.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    body: Circle,
    velocity: Vector,
    hitbox: Aabb,
    reflection: ReflectionPolicy,
}

impl Particle {
    /// Creates a particle at `center` moving by `velocity` per step.
    ///
    /// # Errors
    /// [`GeomError::InvalidRadius`] if `radius` is negative or not finite.
    pub fn new(center: Vector, velocity: Vector, radius: f32) -> Result<Self, GeomError> {
        let body = Circle::new(center, radius)?;
        Ok(Self {
            body,
            velocity,
            hitbox: Aabb::from_center_half_extents(center, radius, radius),
            reflection: ReflectionPolicy::default(),
        })
    }

    /// Replaces the reflection policy.
    pub fn with_reflection(mut self, policy: ReflectionPolicy) -> Self {
        self.reflection = policy;
        self
    }

    /// Current center.
    pub fn center(&self) -> Vector {
        self.body.center()
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Overrides the velocity.
    pub fn set_velocity(&mut self, velocity: Vector) {
        self.velocity = velocity;
    }

    /// Radius.
    pub fn radius(&self) -> f32 {
        self.body.radius()
    }

    /// Collision hitbox, including its previous-frame snapshot.
    pub fn hitbox(&self) -> &Aabb {
        &self.hitbox
    }

    /// Reflection policy applied on collision.
    pub fn reflection(&self) -> ReflectionPolicy {
        self.reflection
    }

    /// The particle as a circle, for volume queries.
    pub fn as_circle(&self) -> Circle {
        self.body
    }

    /// Advances one step against `segments` with no collision callback.
    pub fn step(&mut self, segments: &[Segment]) -> StepReport {
        self.step_with(segments, |_, _| {})
    }

    /// Advances one step against `segments`.
    ///
    /// Order within the step:
    /// 1. translate the hitbox by the velocity (refreshing its snapshot);
    /// 2. test the box of every segment against the hitbox;
    /// 3. on a hit, call `on_collision`, apply every correction whose swept
    ///    flag is set (a diagonal hit applies two), then reflect the velocity;
    /// 4. read the center back from the corrected hitbox.
    ///
    /// `segments` is a snapshot for the whole step. New segments go into the
    /// buffer handed to `on_collision` and come back in
    /// [`StepReport::spawned`] for the caller to merge.
    pub fn step_with<F>(&mut self, segments: &[Segment], mut on_collision: F) -> StepReport
    where
        F: FnMut(&CollisionEvent<'_>, &mut Vec<Segment>),
    {
        let mut report = StepReport::default();
        self.hitbox.translate(&self.velocity);

        for (index, segment) in segments.iter().enumerate() {
            let wall = segment.aabb();
            if !self.hitbox.collides_with(&wall) {
                continue;
            }
            let swept = SweptSides::between(&self.hitbox, &wall);
            trace!(index, ?swept, "particle hit segment");

            on_collision(&CollisionEvent { index, segment, swept }, &mut report.spawned);

            if swept.above {
                self.hitbox.correct_was_above(&wall);
            }
            if swept.below {
                self.hitbox.correct_was_below(&wall);
            }
            if swept.left_of {
                self.hitbox.correct_was_left_of(&wall);
            }
            if swept.right_of {
                self.hitbox.correct_was_right_of(&wall);
            }

            match self.reflect_off(segment) {
                Ok(velocity) => self.velocity = velocity,
                Err(err) => {
                    warn!(index, %err, "reflection skipped");
                    report.skipped_reflections.push(index);
                }
            }
            report.collisions.push(index);
        }

        self.body = self.body.with_center(self.hitbox.center());
        report
    }

    fn reflect_off(&self, segment: &Segment) -> Result<Vector, GeomError> {
        match self.reflection {
            ReflectionPolicy::SurfaceNormal => Ok(self.velocity.reflect(&segment.unit_normal()?)),
            ReflectionPolicy::RawEndpoint => Ok(self.velocity.reflect(&segment.b())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn wall_at_x(x: f32) -> Segment {
        Segment::new(Vector::xy(x, -5.0), Vector::xy(x, 5.0))
    }

    #[test]
    fn free_flight_moves_by_velocity() {
        let mut p = Particle::new(Vector::ZERO, Vector::xy(1.0, 2.0), 0.5).expect("valid radius");
        let report = p.step(&[]);
        assert!(report.collisions.is_empty());
        assert_eq!(p.center().to_array(), [1.0, 2.0, 0.0]);
        assert_eq!(p.hitbox().last_min().to_array(), [-0.5, -0.5, 0.0]);
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert_eq!(
            Particle::new(Vector::ZERO, Vector::ZERO, -2.0),
            Err(GeomError::InvalidRadius(-2.0))
        );
    }

    #[test]
    fn wall_hit_corrects_position_and_reverses_velocity() {
        let mut p = Particle::new(Vector::ZERO, Vector::xy(1.0, 0.0), 1.0).expect("valid radius");
        let report = p.step(&[wall_at_x(1.0)]);
        assert_eq!(report.collisions, vec![0]);
        assert_eq!(p.hitbox().max().x(), 1.0);
        assert_eq!(p.center().to_array(), [0.0, 0.0, 0.0]);
        assert!(p.velocity().x() < 0.0);
        assert!((p.velocity().x() + 1.0).abs() < 1e-6);
        assert!(p.velocity().y().abs() < 1e-6);
    }

    #[test]
    fn ceiling_hit_from_below_bounces_once_and_leaves() {
        let ceiling = Segment::new(Vector::xy(-5.0, 1.0), Vector::xy(5.0, 1.0));
        let mut p = Particle::new(Vector::ZERO, Vector::xy(0.0, 1.0), 1.0).expect("valid radius");

        let report = p.step(&[ceiling]);
        assert_eq!(report.collisions, vec![0]);
        assert_eq!(p.center().to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(p.hitbox().max().y(), 1.0);
        assert!((p.velocity().y() + 1.0).abs() < 1e-6);

        for expected in [-1.0, -2.0, -3.0] {
            let report = p.step(&[ceiling]);
            assert!(report.collisions.is_empty());
            assert!((p.center().y() - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn floor_hit_from_above_rests_on_the_floor() {
        let floor = Segment::new(Vector::xy(5.0, -1.0), Vector::xy(-5.0, -1.0));
        let mut p = Particle::new(Vector::ZERO, Vector::xy(0.0, -1.0), 1.0).expect("valid radius");
        let report = p.step(&[floor]);
        assert_eq!(report.collisions, vec![0]);
        assert_eq!(p.hitbox().min().y(), -1.0);
        assert!(p.velocity().y() > 0.0);
        assert!(p.step(&[floor]).collisions.is_empty());
    }

    #[test]
    fn degenerate_segment_skips_reflection_without_failing() {
        let dot = Segment::new(Vector::xy(1.5, 0.0), Vector::xy(1.5, 0.0));
        let mut p = Particle::new(Vector::ZERO, Vector::xy(1.0, 0.0), 1.0).expect("valid radius");
        let report = p.step(&[dot]);
        assert_eq!(report.collisions, vec![0]);
        assert_eq!(report.skipped_reflections, vec![0]);
        assert_eq!(p.velocity().to_array(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn callback_sees_event_and_spawns_are_buffered() {
        let mut p = Particle::new(Vector::ZERO, Vector::xy(1.0, 0.0), 1.0).expect("valid radius");
        let segments = [wall_at_x(1.0)];
        let mut seen = Vec::new();
        let report = p.step_with(&segments, |event, spawn| {
            seen.push((event.index, event.swept));
            spawn.push(wall_at_x(-20.0));
        });
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, 0);
        assert!(seen[0].1.left_of);
        assert_eq!(report.spawned, vec![wall_at_x(-20.0)]);
    }
}
