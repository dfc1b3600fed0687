// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometric value types: rectangles, segments and bounding volumes.
//!
//! Comparisons use `x` and `y` only; the `z` component of every vertex is
//! carried through construction but never decides containment or overlap.

#[doc = "Axis-aligned bounding boxes with a swept (previous-frame) snapshot."]
pub mod aabb;
#[doc = "Circles and the randomized bounding-circle heuristic."]
pub mod circle;
#[doc = "Oriented bounding boxes found by an angular scan."]
pub mod obb;
#[doc = "Axis-aligned rectangles used as search domains and segment limits."]
pub mod rect;
#[doc = "Line segments and segment vector sums."]
pub mod segment;
