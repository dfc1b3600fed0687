// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Matrix, MathError};

/// Immutable 3-component vector used for both points and directions.
///
/// * The homogeneous weight is implicitly `1` and never leaves this crate; it
///   only appears when a [`Matrix`] transforms the vector.
/// * `z` is carried through every operation but geometric comparisons in the
///   kernel only look at `x` and `y`.
/// * Every operation returns a new value.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector {
    data: [f32; 3],
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a planar vector (`z = 0`).
    pub const fn xy(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0)
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component (placeholder; never compared on).
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    pub(crate) fn to_homogeneous(self) -> [f32; 4] {
        [self.data[0], self.data[1], self.data[2], 1.0]
    }

    /// Adds two vectors.
    pub fn plus(&self, that: &Self) -> Self {
        Self::new(
            self.data[0] + that.data[0],
            self.data[1] + that.data[1],
            self.data[2] + that.data[2],
        )
    }

    /// Subtracts `that` from this vector.
    pub fn minus(&self, that: &Self) -> Self {
        self.plus(&that.inverse())
    }

    /// Negates every component.
    pub fn inverse(&self) -> Self {
        self.times(-1.0)
    }

    /// Scales the vector by `scalar`.
    pub fn times(&self, scalar: f32) -> Self {
        Self::new(
            self.data[0] * scalar,
            self.data[1] * scalar,
            self.data[2] * scalar,
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, that: &Self) -> f32 {
        self.data[0] * that.data[0] + self.data[1] * that.data[1] + self.data[2] * that.data[2]
    }

    /// Cross product with another vector.
    ///
    /// For planar inputs only the `z` component of the result is non-zero and
    /// its sign tells which side of `self` the vector `that` lies on.
    pub fn cross(&self, that: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = that.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Euclidean length over the three components.
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Squared Euclidean length.
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Returns `self * (1 / norm)`.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateVector`] when the norm is zero or so small
    /// that its reciprocal is not finite.
    pub fn to_unit_vector(&self) -> Result<Self, MathError> {
        let inv = 1.0 / self.norm();
        if !inv.is_finite() {
            return Err(MathError::DegenerateVector);
        }
        Ok(self.times(inv))
    }

    /// Projects this vector onto `that`: `that * (self·that / that·that)`.
    ///
    /// Projecting onto the zero vector yields non-finite components.
    pub fn projection(&self, that: &Self) -> Self {
        that.times(self.dot(that) / that.dot(that))
    }

    /// Removes the component along `normal`: `self - normal * (normal·self)`.
    ///
    /// `normal` must be unit length. The method does not normalize it; a
    /// non-unit argument produces a vector that is neither the tangential
    /// component nor parallel to the surface.
    pub fn slide(&self, normal: &Self) -> Self {
        self.minus(&normal.times(normal.dot(self)))
    }

    /// Mirrors the vector about the plane with normal `normal`:
    /// `self - normal * 2 * (normal·self)`.
    ///
    /// `normal` must be unit length. The method does not normalize it; with a
    /// non-unit argument the result is not a reflection and its length differs
    /// from `self`.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.minus(&normal.times(2.0).times(normal.dot(self)))
    }

    /// Rotates +90° about the z axis: `(x, y) -> (-y, x)`.
    pub fn rotate90(&self) -> Self {
        Matrix::quarter_turn().transform_point(self)
    }

    /// Rotates −90° about the z axis: `(x, y) -> (y, -x)`.
    pub fn rotate_minus90(&self) -> Self {
        Matrix::quarter_turn_inverse().transform_point(self)
    }

    /// Translates the vector by `delta` through a homogeneous translation matrix.
    ///
    /// Points and directions share `w = 1`, so this shifts either kind.
    pub fn translate(&self, delta: &Self) -> Self {
        Matrix::translation(delta.x(), delta.y(), delta.z()).transform_point(self)
    }

    /// Returns `true` when every component is exactly zero.
    pub fn is_null(&self) -> bool {
        self.data.iter().all(|c| *c == 0.0)
    }

    /// Drops `z` to zero.
    pub fn planar(&self) -> Self {
        Self::xy(self.data[0], self.data[1])
    }

    /// Distance to `that` in the xy plane.
    pub fn planar_distance(&self, that: &Self) -> f32 {
        self.planar().minus(&that.planar()).norm()
    }

    /// Square (octant) pseudo-angle with the positive X axis, in pseudo-degrees.
    ///
    /// Walks the perimeter of the unit square instead of the unit circle: the
    /// value is monotone in the true angle, exact at every multiple of 45° and
    /// lies in `[0, 360)`. The null vector maps to `0`.
    pub fn pseudo_angle(&self) -> f32 {
        let (x, y) = (self.x(), self.y());
        if x == 0.0 && y == 0.0 {
            return 0.0;
        }
        let octants = if y >= 0.0 {
            if x >= 0.0 {
                if x >= y {
                    y / x
                } else {
                    2.0 - x / y
                }
            } else if -x <= y {
                2.0 - x / y
            } else {
                4.0 + y / x
            }
        } else if x < 0.0 {
            if -x >= -y {
                4.0 + y / x
            } else {
                6.0 - x / y
            }
        } else if x <= -y {
            6.0 - x / y
        } else {
            8.0 + y / x
        };
        octants * 45.0
    }
}

impl From<[f32; 3]> for Vector {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<[f32; 2]> for Vector {
    fn from(value: [f32; 2]) -> Self {
        Self::xy(value[0], value[1])
    }
}

impl core::ops::Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl core::ops::Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(&rhs)
    }
}

impl core::ops::Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.inverse()
    }
}

impl core::ops::Mul<f32> for Vector {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.times(rhs)
    }
}
