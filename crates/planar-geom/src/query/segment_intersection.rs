// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use planar_math::Vector;

use crate::types::segment::Segment;
use crate::GeomError;

/// Where two points fall relative to the line through a segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Side {
    /// Both strictly on one side: no straddle.
    Apart,
    /// On opposite sides, or one of them on the line.
    Straddles,
    /// Both on the line (or the segment has zero length).
    OnLine,
}

/// Sign test of `c` and `d` against the line through `segment`, in the
/// segment's local frame (its first endpoint at the origin).
fn side(segment: &Segment, c: &Vector, d: &Vector) -> Side {
    let origin = segment.a().planar();
    let b = segment.b().planar().minus(&origin);
    let bc = b.cross(&c.planar().minus(&origin)).z();
    let bd = b.cross(&d.planar().minus(&origin)).z();
    if bc == 0.0 && bd == 0.0 {
        Side::OnLine
    } else if (bc > 0.0 && bd > 0.0) || (bc < 0.0 && bd < 0.0) {
        Side::Apart
    } else {
        Side::Straddles
    }
}

fn straddle_each_other(ab: &Segment, cd: &Segment) -> bool {
    match (side(ab, &cd.a(), &cd.b()), side(cd, &ab.a(), &ab.b())) {
        (Side::Apart, _) | (_, Side::Apart) => false,
        (Side::Straddles, Side::Straddles) => true,
        // No line to straddle: fall back to the x/y spans.
        _ => ab.aabb().collides_with(&cd.aabb()),
    }
}

/// Returns `true` if `ab` and `cd` intersect, touching included.
///
/// Two straddle tests: `cd`'s endpoints against the line of `ab`, then `ab`'s
/// endpoints against the line of `cd`. Either test rejects only when both
/// points are strictly on one side. When a test has no line to work with
/// (collinear segments, or a zero-length segment) the spans decide instead:
/// collinear segments intersect only if they overlap, and a zero-length
/// segment only if its point lies on the other segment.
pub fn segments_intersect(ab: &Segment, cd: &Segment) -> bool {
    straddle_each_other(ab, cd)
}

/// Point where `ab` crosses `cd`, in world coordinates.
///
/// Runs the same straddle tests as [`segments_intersect`], then solves
/// `t = (C - A)·N / (B - A)·N` with `N` the unit normal of `cd` and returns
/// `A + t (B - A)`. Inputs that do not intersect give `Ok(None)` before any
/// error is considered.
///
/// # Errors
/// - [`GeomError::DegenerateVector`] if `cd` has zero length (no normal).
/// - [`GeomError::ParallelSegments`] if `ab` is parallel to `cd`: overlapping
///   collinear segments, or a zero-length `ab` lying on `cd`.
pub fn intersection_point(ab: &Segment, cd: &Segment) -> Result<Option<Vector>, GeomError> {
    if !straddle_each_other(ab, cd) {
        return Ok(None);
    }
    let a = ab.a().planar();
    let direction = ab.direction().planar();
    let normal = cd.unit_normal()?;
    let denominator = direction.dot(&normal);
    if denominator == 0.0 {
        return Err(GeomError::ParallelSegments);
    }
    let t = cd.a().planar().minus(&a).dot(&normal) / denominator;
    Ok(Some(a.plus(&direction.times(t))))
}
