// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::config::GeomConfig;
use crate::motion::particle::{CollisionEvent, Particle};
use crate::types::segment::Segment;

/// Summary of one [`Simulation::tick`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, starting at 1 for the first tick.
    pub tick: u64,
    /// Collisions across all particles.
    pub collisions: usize,
    /// Reflections skipped on degenerate segments.
    pub skipped_reflections: usize,
    /// Segments appended to the world after the tick.
    pub spawned: usize,
}

/// Particles moving through a world of wall segments.
///
/// Each tick steps every particle in insertion order against the same segment
/// snapshot. Segments produced by collision callbacks are appended once all
/// particles have moved, so they take part from the next tick on.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: GeomConfig,
    particles: Vec<Particle>,
    segments: Vec<Segment>,
    ticks: u64,
}

impl Simulation {
    /// Empty world using `config`.
    pub fn new(config: GeomConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Adds a particle and returns its index. The world's reflection policy
    /// replaces the particle's own.
    pub fn add_particle(&mut self, particle: Particle) -> usize {
        self.particles
            .push(particle.with_reflection(self.config.reflection));
        self.particles.len() - 1
    }

    /// Adds a wall segment and returns its index.
    pub fn add_segment(&mut self, segment: Segment) -> usize {
        self.segments.push(segment);
        self.segments.len() - 1
    }

    /// Configuration the world was built with.
    pub fn config(&self) -> &GeomConfig {
        &self.config
    }

    /// Particles in insertion order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Wall segments in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances every particle by one step.
    pub fn tick(&mut self) -> TickReport {
        self.tick_with(|_, _, _| {})
    }

    /// Advances every particle by one step, calling `on_collision` with the
    /// particle index for each hit.
    ///
    /// Callbacks may push new segments into the buffer they are given; those
    /// are appended to [`Simulation::segments`] after the last particle moved.
    pub fn tick_with<F>(&mut self, mut on_collision: F) -> TickReport
    where
        F: FnMut(usize, &CollisionEvent<'_>, &mut Vec<Segment>),
    {
        self.ticks += 1;
        let mut report = TickReport {
            tick: self.ticks,
            ..TickReport::default()
        };
        let mut spawned = Vec::new();

        for (particle_index, particle) in self.particles.iter_mut().enumerate() {
            let step = particle.step_with(&self.segments, |event, buffer| {
                on_collision(particle_index, event, buffer);
            });
            report.collisions += step.collisions.len();
            report.skipped_reflections += step.skipped_reflections.len();
            spawned.extend(step.spawned);
        }

        report.spawned = spawned.len();
        self.segments.extend(spawned);
        debug!(
            tick = report.tick,
            collisions = report.collisions,
            spawned = report.spawned,
            segments = self.segments.len(),
            "tick finished"
        );
        report
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::ReflectionPolicy;
    use planar_math::Vector;

    fn wall_at_x(x: f32) -> Segment {
        Segment::new(Vector::xy(x, -5.0), Vector::xy(x, 5.0))
    }

    #[test]
    fn add_particle_applies_world_policy() {
        let mut sim = Simulation::new(GeomConfig {
            reflection: ReflectionPolicy::RawEndpoint,
            ..GeomConfig::default()
        });
        let p = Particle::new(Vector::ZERO, Vector::ZERO, 1.0).expect("valid radius");
        let idx = sim.add_particle(p);
        assert_eq!(idx, 0);
        assert_eq!(sim.particles()[0].reflection(), ReflectionPolicy::RawEndpoint);
    }

    #[test]
    fn spawned_segments_join_after_the_tick() {
        let mut sim = Simulation::new(GeomConfig::default());
        sim.add_segment(wall_at_x(1.0));
        sim.add_particle(
            Particle::new(Vector::ZERO, Vector::xy(1.0, 0.0), 1.0).expect("valid radius"),
        );
        // A second particle sits where the spawned wall lands; it must not see it
        // during the tick that spawned it.
        sim.add_particle(
            Particle::new(Vector::xy(20.0, 20.0), Vector::ZERO, 1.0).expect("valid radius"),
        );

        let mut calls = Vec::new();
        let report = sim.tick_with(|pi, event, buffer| {
            calls.push((pi, event.index));
            buffer.push(Segment::new(Vector::xy(19.0, 20.0), Vector::xy(21.0, 20.0)));
        });
        assert_eq!(calls, vec![(0, 0)]);
        assert_eq!(report.tick, 1);
        assert_eq!(report.collisions, 1);
        assert_eq!(report.spawned, 1);
        assert_eq!(sim.segments().len(), 2);

        let report = sim.tick();
        assert_eq!(report.tick, 2);
        assert!(report.collisions >= 1);
        assert_eq!(sim.ticks(), 2);
    }
}
