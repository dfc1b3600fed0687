// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vector;

/// Column‑major 4×4 homogeneous matrix.
///
/// - Storage is `data[col * 4 + row]`; translation occupies column 3.
/// - [`Matrix::transform_point`] multiplies the column vector `(x, y, z, 1)`.
///   Directions go through the same path (`w = 1`); the rotations built here
///   carry no translation so that is only observable for
///   [`Matrix::translation`].
///
/// # Examples
/// ```
/// use planar_math::{Matrix, Vector};
/// let t = Matrix::translation(5.0, -3.0, 2.0);
/// let p = Vector::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix {
    data: [f32; 16],
}

impl Matrix {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a translation matrix.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        let mut m = Self::identity();
        m.data[12] = tx;
        m.data[13] = ty;
        m.data[14] = tz;
        m
    }

    /// +90° rotation about z, obtained by rewriting the identity's top-left
    /// 2×2 block. Entries are exact so repeated quarter turns do not drift.
    pub const fn quarter_turn() -> Self {
        let mut m = Self::identity();
        m.data[0] = 0.0;
        m.data[1] = 1.0;
        m.data[4] = -1.0;
        m.data[5] = 0.0;
        m
    }

    /// −90° rotation about z; the transpose of [`Matrix::quarter_turn`].
    pub const fn quarter_turn_inverse() -> Self {
        let mut m = Self::identity();
        m.data[0] = 0.0;
        m.data[1] = -1.0;
        m.data[4] = 1.0;
        m.data[5] = 0.0;
        m
    }

    /// Change of basis whose first two rows are `r0` and `r1`.
    ///
    /// With orthonormal `r0`, `r1` this rotates world coordinates into the
    /// frame spanned by those axes: `transform_point(p) = (r0·p, r1·p, p.z)`.
    pub fn from_rows(r0: &Vector, r1: &Vector) -> Self {
        let mut m = Self::identity();
        m.data[0] = r0.x();
        m.data[4] = r0.y();
        m.data[1] = r1.x();
        m.data[5] = r1.y();
        m
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Applying the product to a point applies `rhs` first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Transforms a point in homogeneous coordinates (`w = 1`, no divide).
    pub fn transform_point(&self, point: &Vector) -> Vector {
        let h = point.to_homogeneous();
        let mut out = [0.0f32; 3];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|col| self.at(row, col) * h[col]).sum();
        }
        Vector::from(out)
    }
}

impl From<[f32; 16]> for Matrix {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Matrix {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
