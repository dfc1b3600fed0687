// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Intersection queries between segments and between bounding volumes.
//!
//! Boundary contact counts as intersection for every query in this module.

#[doc = "Segment/segment straddle tests and intersection-point recovery."]
pub mod segment_intersection;
#[doc = "Closed `Volume` enum and its pairwise intersection dispatch."]
pub mod volume;
