// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tuning knobs for the kernel's heuristics.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a particle's velocity is mirrored when it hits a wall segment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReflectionPolicy {
    /// Reflect about the unit normal of the segment (`rotate90` of its unit
    /// direction). Speed is preserved exactly.
    #[default]
    SurfaceNormal,
    /// Reflect about the segment's end point taken as a raw position vector.
    ///
    /// The argument is neither unit length nor normal to the wall, so the
    /// result only resembles a bounce: speed changes and the tangential
    /// component is skewed. Kept to reproduce legacy trajectories.
    RawEndpoint,
}

/// Kernel configuration.
///
/// Deserializing a partial document fills missing fields from [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeomConfig {
    /// Number of 1° steps scanned by the OBB search, starting at 0°.
    /// `0` is treated as `1`.
    pub obb_angle_steps: u16,
    /// Candidate centers drawn by the bounding-circle heuristic.
    /// `0` is treated as `1`.
    pub circle_samples: usize,
    /// Velocity response applied on collision.
    pub reflection: ReflectionPolicy,
}

impl GeomConfig {
    /// Default number of OBB scan steps (0° through 89°).
    pub const DEFAULT_OBB_ANGLE_STEPS: u16 = 90;
    /// Default number of bounding-circle samples.
    pub const DEFAULT_CIRCLE_SAMPLES: usize = 10;
}

impl Default for GeomConfig {
    fn default() -> Self {
        Self {
            obb_angle_steps: Self::DEFAULT_OBB_ANGLE_STEPS,
            circle_samples: Self::DEFAULT_CIRCLE_SAMPLES,
            reflection: ReflectionPolicy::SurfaceNormal,
        }
    }
}
