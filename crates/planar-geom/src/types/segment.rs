// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use planar_math::{RandomSource, Vector};

use crate::types::aabb::Aabb;
use crate::types::rect::Rect;
use crate::GeomError;

/// Ordered pair of endpoints `(a, b)`.
///
/// Geometrically undirected, but the order decides which side counts as
/// "left" in the straddle tests and which end [`Segment::b`] names.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    a: Vector,
    b: Vector,
}

impl Segment {
    /// Creates a segment from `a` to `b`.
    pub const fn new(a: Vector, b: Vector) -> Self {
        Self { a, b }
    }

    /// First endpoint.
    pub fn a(&self) -> Vector {
        self.a
    }

    /// Second endpoint.
    pub fn b(&self) -> Vector {
        self.b
    }

    /// Direction `b - a` (not normalized).
    pub fn direction(&self) -> Vector {
        self.b.minus(&self.a)
    }

    /// Same endpoints in the opposite order.
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Box spanned by the two endpoints.
    pub fn aabb(&self) -> Aabb {
        Aabb::spanning(self.a, self.b)
    }

    /// Horizontal and vertical limits of the segment.
    pub fn limits(&self) -> Rect {
        Rect::new(self.a.x(), self.b.x(), self.a.y(), self.b.y())
    }

    /// Unit normal: the unit direction turned +90°.
    ///
    /// # Errors
    /// [`GeomError::DegenerateVector`] when both endpoints coincide.
    pub fn unit_normal(&self) -> Result<Vector, GeomError> {
        Ok(self.direction().planar().to_unit_vector()?.rotate90())
    }

    /// Both endpoints translated by `delta`.
    pub fn translate(&self, delta: &Vector) -> Self {
        Self::new(self.a.translate(delta), self.b.translate(delta))
    }
}

/// Draws a segment whose endpoints are independent uniform points of `domain`.
pub fn random_segment<R: RandomSource + ?Sized>(domain: &Rect, rng: &mut R) -> Segment {
    let a = domain.sample(rng);
    let b = domain.sample(rng);
    Segment::new(a, b)
}

/// Head-to-tail vector addition of two segments.
///
/// `first` is moved so it starts at the origin, `second` is moved so it starts
/// at the head of `first`, and `sum` runs from the origin to the head of the
/// chained `second`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentSum {
    first: Segment,
    second: Segment,
    sum: Segment,
}

impl SegmentSum {
    /// Chains `second` onto `first` and builds their sum.
    pub fn new(first: Segment, second: Segment) -> Self {
        let first = first.translate(&first.a().inverse());
        let second = second.translate(&first.b().minus(&second.a()));
        let sum = Segment::new(first.a(), second.b());
        Self { first, second, sum }
    }

    /// First addend, starting at the origin.
    pub fn first(&self) -> Segment {
        self.first
    }

    /// Second addend, starting at the head of the first.
    pub fn second(&self) -> Segment {
        self.second
    }

    /// The resultant segment.
    pub fn sum(&self) -> Segment {
        self.sum
    }

    /// The same sum taken in the other order (`second + first`).
    ///
    /// The resultant is unchanged; only the addends swap places, which is what
    /// vector addition's commutativity predicts.
    pub fn commuted(&self) -> Self {
        Self::new(self.second, self.first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(ax: f32, ay: f32, bx: f32, by: f32) -> Segment {
        Segment::new(Vector::xy(ax, ay), Vector::xy(bx, by))
    }

    #[test]
    fn limits_are_ordered_regardless_of_endpoint_order() {
        let l = seg(4.0, -1.0, -2.0, 3.0).limits();
        assert_eq!([l.left(), l.right(), l.bottom(), l.top()], [-2.0, 4.0, -1.0, 3.0]);
    }

    #[test]
    fn unit_normal_turns_left() {
        let n = seg(0.0, 0.0, 5.0, 0.0).unit_normal();
        assert_eq!(n.map(Vector::to_array), Ok([0.0, 1.0, 0.0]));
        assert!(matches!(
            seg(1.0, 1.0, 1.0, 1.0).unit_normal(),
            Err(GeomError::DegenerateVector(_))
        ));
    }

    #[test]
    fn segment_sum_chains_head_to_tail() {
        let s = SegmentSum::new(seg(1.0, 1.0, 3.0, 2.0), seg(-5.0, 0.0, -5.0, 4.0));
        assert_eq!(s.first(), seg(0.0, 0.0, 2.0, 1.0));
        assert_eq!(s.second(), seg(2.0, 1.0, 2.0, 5.0));
        assert_eq!(s.sum(), seg(0.0, 0.0, 2.0, 5.0));
    }

    #[test]
    fn commuted_sum_has_the_same_resultant() {
        let s = SegmentSum::new(seg(1.0, 1.0, 3.0, 2.0), seg(-5.0, 0.0, -5.0, 4.0));
        let c = s.commuted();
        assert_eq!(c.first(), seg(0.0, 0.0, 0.0, 4.0));
        assert_eq!(c.second(), seg(0.0, 4.0, 2.0, 5.0));
        assert_eq!(c.sum(), s.sum());
    }
}
