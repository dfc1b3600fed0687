// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use planar_math::{RandomSource, Vector};

/// Axis-aligned rectangle `[left, right] × [bottom, top]` in world units (y up).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
}

impl Rect {
    /// Creates a rectangle; swapped bounds are reordered.
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            bottom: bottom.min(top),
            top: bottom.max(top),
        }
    }

    /// Rectangle of the given size centered on the origin, as a viewport whose
    /// world origin sits in the middle of the screen.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(-width / 2.0, width / 2.0, -height / 2.0, height / 2.0)
    }

    /// Smallest x.
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Largest x.
    pub fn right(&self) -> f32 {
        self.right
    }

    /// Smallest y.
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Largest y.
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains(&self, point: &Vector) -> bool {
        (self.left..=self.right).contains(&point.x()) && (self.bottom..=self.top).contains(&point.y())
    }

    /// Draws a uniformly distributed point (`z = 0`) from the rectangle.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vector {
        let x = rng.next_unit().mul_add(self.width(), self.left);
        let y = rng.next_unit().mul_add(self.height(), self.bottom);
        Vector::xy(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_math::Prng;

    #[test]
    fn centered_viewport_spans_origin() {
        let r = Rect::centered(800.0, 600.0);
        assert_eq!([r.left(), r.right(), r.bottom(), r.top()], [-400.0, 400.0, -300.0, 300.0]);
        assert!(r.contains(&Vector::ZERO));
        assert!(r.contains(&Vector::xy(400.0, -300.0)));
        assert!(!r.contains(&Vector::xy(400.5, 0.0)));
    }

    #[test]
    fn samples_fall_inside() {
        let r = Rect::new(10.0, -10.0, 5.0, 2.0);
        let mut prng = Prng::from_seed_u64(3);
        for _ in 0..500 {
            assert!(r.contains(&r.sample(&mut prng)));
        }
    }
}
