//! Determinants, minors, cofactors and inverses of square matrices.
//!
//! These are implemented separately for every supported size (1x1 up to 8x8), since the size of a
//! minor (`N - 1`) cannot be expressed with stable const generics.

use crate::{Matrix, Number};

impl<T: Number> Matrix<T, 1, 1> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }

    /// Inverts this 1x1 matrix.
    ///
    /// No check is performed: if the matrix is singular, the result contains the value of dividing
    /// by zero (infinity or NaN for floating-point types). Use [`Matrix::try_inverse`] to check for
    /// singular matrices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(Mat1f::IDENTITY.inverse(), Mat1f::IDENTITY);
    /// assert_eq!(Matrix::from_rows([[4.0]]).inverse(), Matrix::from_rows([[0.25]]));
    /// ```
    #[doc(alias = "invert")]
    pub fn inverse(&self) -> Self {
        Matrix::from_columns([[T::ONE / self[(0, 0)]]])
    }

    /// Inverts this 1x1 matrix, or returns [`None`] if it is singular.
    pub fn try_inverse(&self) -> Option<Self> {
        if self.determinant() == T::ZERO {
            log::trace!("cannot invert singular 1x1 matrix");
            return None;
        }
        Some(self.inverse())
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.determinant(), -2);
    /// ```
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.transpose().0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Returns the [determinant] of the matrix.
    ///
    /// Expands along the first row, sharing the six 2x2 sub-determinants of the bottom two rows
    /// between the four 3x3 minors.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c, d], [e, f, g, h], [i, j, k, l], [m, n, o, p]] = self.transpose().0;

        let d01 = i * n - j * m;
        let d02 = i * o - k * m;
        let d03 = i * p - l * m;
        let d12 = j * o - k * n;
        let d13 = j * p - l * n;
        let d23 = k * p - l * o;

        a * (f * d23 - g * d13 + h * d12) - b * (e * d23 - g * d03 + h * d02)
            + c * (e * d13 - f * d03 + h * d01)
            - d * (e * d12 - f * d02 + g * d01)
    }
}

/// Cofactor expansion along the first row, for sizes without a closed form.
macro_rules! expansion_determinant {
    ($($n:literal),+) => {
        $(
            impl<T: Number> Matrix<T, $n, $n> {
                /// Returns the [determinant] of the matrix, computed by cofactor expansion along
                /// the first row.
                ///
                /// Determinants exist for sizes up to 8x8. Each size needs its own impl because the
                /// minor's size `N - 1` can't be written with stable const generics.
                ///
                /// [determinant]: https://en.wikipedia.org/wiki/Determinant
                pub fn determinant(&self) -> T {
                    let term = |col: usize| self[(0, col)] * self.minor(0, col).determinant();

                    // Positive terms first, then the negative ones.
                    let mut det = term(0);
                    for col in (2..$n).step_by(2) {
                        det = det + term(col);
                    }
                    for col in (1..$n).step_by(2) {
                        det = det - term(col);
                    }
                    det
                }
            }
        )+
    };
}
expansion_determinant!(5, 6, 7, 8);

macro_rules! square_ops {
    ($($n:literal => $m:literal),+) => {
        $(
            impl<T: Number> Matrix<T, $n, $n> {
                /// Returns the matrix that remains after removing row `row` and column `col`.
                ///
                /// # Panics
                ///
                /// Panics if `row` or `col` is out of bounds.
                pub fn minor(&self, row: usize, col: usize) -> Matrix<T, $m, $m> {
                    assert!(
                        row < $n && col < $n,
                        "minor ({row}, {col}) out of bounds for {}x{} matrix", $n, $n,
                    );
                    Matrix::from_fn(|r, c| {
                        let r = if r < row { r } else { r + 1 };
                        let c = if c < col { c } else { c + 1 };
                        self[(r, c)]
                    })
                }

                /// Returns the determinant of [`Matrix::minor`], negated if `row + col` is odd.
                pub fn cofactor(&self, row: usize, col: usize) -> T {
                    let det = self.minor(row, col).determinant();
                    if (row ^ col) & 1 == 1 {
                        -det
                    } else {
                        det
                    }
                }

                /// Returns the adjugate of this matrix (the transpose of its cofactor matrix).
                #[doc(alias = "adjoint")]
                pub fn adjugate(&self) -> Self {
                    Matrix::from_fn(|row, col| self.cofactor(col, row))
                }

                /// Inverts this matrix by dividing its [adjugate] by its determinant.
                ///
                /// No check is performed: if the matrix is singular, the result contains the value
                /// of dividing by zero (infinities or NaNs for floating-point types). Use
                /// [`Matrix::try_inverse`] to check for singular matrices.
                ///
                /// [adjugate]: Matrix::adjugate
                #[doc(alias = "invert")]
                pub fn inverse(&self) -> Self {
                    self.adjugate() * (T::ONE / self.determinant())
                }

                /// Inverts this matrix, or returns [`None`] if its determinant is zero.
                pub fn try_inverse(&self) -> Option<Self> {
                    let det = self.determinant();
                    if det == T::ZERO {
                        log::trace!("cannot invert singular {}x{} matrix", $n, $n);
                        return None;
                    }
                    Some(self.adjugate() * (T::ONE / det))
                }
            }
        )+
    };
}
square_ops!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);
