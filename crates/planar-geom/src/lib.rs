// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Planar collision kernel.

This crate provides:
- Axis-aligned bounding boxes with a swept snapshot and side corrections (`Aabb`).
- Oriented bounding boxes found by a 1° angular scan (`Obb`).
- A randomized bounding-circle heuristic (`bounding_circle`).
- Segment straddle tests and intersection-point recovery.
- Pairwise intersection across all bounding volumes (`Volume`).
- Particles that bounce off wall segments, and a tick-driven `Simulation`.

Design notes:
- Comparisons use `x` and `y` only; `z` is carried but never decides a result.
- Float32 throughout; randomness only enters through a caller-supplied
  `RandomSource`, so runs are reproducible from a seed.
- Boundary contact counts as intersection.
"]

/// Kernel tuning (`GeomConfig`, `ReflectionPolicy`).
pub mod config;
mod error;
/// Particle motion and the simulation loop.
pub mod motion;
/// Intersection queries.
pub mod query;
/// Foundational geometric types.
pub mod types;

pub use config::{GeomConfig, ReflectionPolicy};
pub use error::GeomError;
pub use motion::particle::{CollisionEvent, Particle, StepReport, SweptSides};
pub use motion::simulation::{Simulation, TickReport};
pub use query::segment_intersection::{intersection_point, segments_intersect};
pub use query::volume::Volume;
pub use types::aabb::Aabb;
pub use types::circle::{bounding_circle, Circle};
pub use types::obb::Obb;
pub use types::rect::Rect;
pub use types::segment::{random_segment, Segment, SegmentSum};

pub use planar_math;
