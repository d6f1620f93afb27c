use std::{array, fmt, mem};

use crate::{traits::CastFrom, Number, One, Vector, Zero};

mod ops;
mod square;
mod transform;

pub use transform::Handedness;

macro_rules! square_aliases {
    ($($n:literal: $generic:ident, $f32:ident, $f64:ident;)+) => {
        $(
            #[doc = concat!("A square matrix with ", $n, " rows and columns.")]
            pub type $generic<T> = Matrix<T, $n, $n>;
            #[doc = concat!("A ", $n, "x", $n, " matrix of [`f32`].")]
            pub type $f32 = $generic<f32>;
            #[doc = concat!("A ", $n, "x", $n, " matrix of [`f64`].")]
            pub type $f64 = $generic<f64>;
        )+
    };
}

square_aliases! {
    1: Mat1, Mat1f, Mat1d;
    2: Mat2, Mat2f, Mat2d;
    3: Mat3, Mat3f, Mat3d;
    4: Mat4, Mat4f, Mat4d;
}

macro_rules! rect_aliases {
    ($($name:ident = $r:literal x $c:literal),+ $(,)?) => {
        $(
            #[doc = concat!("A matrix with ", $r, " rows and ", $c, " columns.")]
            pub type $name<T> = Matrix<T, $r, $c>;
        )+
    };
}

rect_aliases! {
    Mat2x3 = 2 x 3,
    Mat2x4 = 2 x 4,
    Mat3x2 = 3 x 2,
    Mat3x4 = 3 x 4,
    Mat4x2 = 4 x 2,
    Mat4x3 = 4 x 3,
}

/// A matrix of `R` rows and `C` columns, stored column by column.
///
/// # Creating matrices
///
/// - [`Matrix::from_rows`] reads the rows top to bottom, which is usually the most legible way to
///   write a matrix literal. [`Matrix::from_columns`] takes the columns instead.
/// - [`Matrix::from_fn`] computes each element from its `(row, col)` position.
/// - [`Matrix::from_diagonal`] builds a square matrix that is zero outside of its diagonal.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are available as constants.
/// - Rotations, scalings and projections come from the transform builders, such as
///   [`Matrix::from_axis_angle`] and [`Matrix::perspective`].
///
/// # Indexing
///
/// Elements are addressed with a `(row, col)` tuple, counting from 0, in the same order used in
/// mathematical notation:
///
/// ```
/// # use gmath::*;
/// let mut m = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// assert_eq!(m[(1, 0)], 4);
/// m[(0, 2)] = -3;
/// assert_eq!(m.row(0), vec3(1, 2, -3));
/// ```
///
/// An index outside of the matrix panics. [`Matrix::get`] and [`Matrix::get_mut`] return [`None`]
/// instead.
///
/// [`Matrix::row`] and [`Matrix::column`] copy out whole rows or columns. The storage order is
/// visible through [`Matrix::as_slice`]: the element at `(row, col)` lives at `col * R + row`.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[cfg(feature = "bytemuck")]
#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from its rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Matrix::from_rows([vec2(1, 2), vec2(3, 4), vec2(5, 6)]);
    /// assert_eq!(m.column(1), vec3(2, 4, 6));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Matrix::from_columns(rows).transpose()
    }

    /// Builds a matrix from its columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let by_columns = Matrix::from_columns([[1, 3], [2, 4]]);
    /// let by_rows = Matrix::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(by_columns, by_rows);
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Builds a matrix by calling `cb(row, col)` for every element.
    ///
    /// The closure is invoked in storage order, one column after another.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let hilbert = Mat3d::from_fn(|row, col| 1.0 / (row + col + 1) as f64);
    /// assert_eq!(hilbert[(0, 0)], 1.0);
    /// assert_eq!(hilbert[(2, 1)], 0.25);
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Transforms each element with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Matrix::from_rows([[1, -2], [-3, 4]]);
    /// assert_eq!(m.map(i32::abs), Matrix::from_rows([[1, 2], [3, 4]]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Converts each element to the scalar type `U`, with the semantics of an `as` cast.
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        U: CastFrom<T>,
    {
        self.map(U::cast_from)
    }

    /// Mirrors the matrix along its diagonal, turning rows into columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.transpose(), Mat3x2::from_columns([[1, 2, 3], [4, 5, 6]]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        let mut columns = self.0.map(|column| column.into_iter());
        Matrix(array::from_fn(|_| {
            array::from_fn(|col| match columns[col].next() {
                Some(elem) => elem,
                None => unreachable!("every column has `R` elements"),
            })
        }))
    }

    /// Borrows the element at `(row, col)`, or returns [`None`] if either index is too large.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.get(1, 2), Some(&6));
    /// assert_eq!(m.get(2, 1), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col)?.get(row)
    }

    /// Mutably borrows the element at `(row, col)`, or returns [`None`] if either index is too
    /// large.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col)?.get_mut(row)
    }

    /// Copies out column `col`.
    ///
    /// # Panics
    ///
    /// If `col >= C`.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }

    /// Copies out row `row`.
    ///
    /// # Panics
    ///
    /// If `row >= R`.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        assert!(row < R, "row index {row} out of bounds for matrix with {R} rows");
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Borrows all elements in storage (column-major) order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Matrix::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(m.as_slice(), &[1, 3, 2, 4]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Mutably borrows all elements in storage (column-major) order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Copies `self` into the top left corner of a matrix of a different size.
    ///
    /// Rows and columns that don't fit are dropped. New positions are filled with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Mat2::from_rows([[5, 6], [7, 8]]);
    /// assert_eq!(m.resize::<1, 3>(), Matrix::from_rows([[5, 6, 0]]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(mut self) -> Matrix<T, R2, C2>
    where
        T: Zero,
    {
        Matrix::from_fn(|row, col| match self.get_mut(row, col) {
            Some(elem) => mem::replace(elem, T::ZERO),
            None => T::ZERO,
        })
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Ones on the main diagonal, zeros elsewhere.
    ///
    /// For a matrix that isn't square, the diagonal runs from `(0, 0)` until it leaves the matrix.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; R]; C];
        let mut i = 0;
        while i < R && i < C {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self(columns)
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Copies the main diagonal into a vector.
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Builds a matrix with `diag` on its main diagonal and zero everywhere else.
    ///
    /// Only square matrices are supported, so that the size follows from the diagonal's length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let scale = Matrix::from_diagonal(vec3(2.0, 3.0, 1.0));
    /// assert_eq!(scale * vec3(1.0, 1.0, 5.0), vec3(2.0, 3.0, 5.0));
    /// assert_eq!(scale.into_diagonal(), [2.0, 3.0, 1.0]);
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Sums up the main diagonal.
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Wraps an array of columns.
impl<T, const R: usize, const C: usize> From<[[T; R]; C]> for Matrix<T, R, C> {
    #[inline]
    fn from(columns: [[T; R]; C]) -> Self {
        Self(columns)
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; R]; C] {
    #[inline]
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.0
    }
}

/// Lists the rows, each on its own line with `{:#?}`.
impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a, T, const R: usize, const C: usize>(&'a Matrix<T, R, C>, usize);

        impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Row<'_, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let Row(mat, row) = *self;
                f.write_str("[")?;
                for col in 0..C {
                    if col != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", mat[(row, col)])?;
                }
                f.write_str("]")
            }
        }

        f.debug_list()
            .entries((0..R).map(|row| Row(self, row)))
            .finish()
    }
}

/// Prints one row per line, as `|a, b, c|`.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..R {
            if row != 0 {
                f.write_str("\n")?;
            }
            f.write_str("|")?;
            for col in 0..C {
                if col != 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(&self[(row, col)], f)?;
            }
            f.write_str("|")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat3x2::from_rows([vec2(1, 2), vec2(3, 4), vec2(5, 6)]),
            Matrix::from([[1, 3, 5], [2, 4, 6]]),
        );
    }

    #[test]
    fn rows_columns() {
        let mat = Mat2x3::from_fn(|row, col| 3 * row + col + 1);
        assert_eq!(mat.row(0), vec3(1, 2, 3));
        assert_eq!(mat.row(1), vec3(4, 5, 6));
        assert_eq!(mat.column(0), vec2(1, 4));
        assert_eq!(mat.column(2), vec2(3, 6));
    }

    #[test]
    #[should_panic]
    fn row_out_of_bounds() {
        Mat2x3::<i32>::ZERO.row(2);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let _ = Mat2x3::<i32>::ZERO[(0, 3)];
    }

    #[test]
    fn checked_access() {
        let mut mat = Mat3x2::<i32>::ZERO;
        assert_eq!(mat.get(3, 0), None);
        assert_eq!(mat.get_mut(0, 2), None);
        if let Some(elem) = mat.get_mut(2, 1) {
            *elem = 7;
        }
        assert_eq!(mat[(2, 1)], 7);
        assert_eq!(mat.get(2, 1), Some(&7));
    }

    #[test]
    fn storage_order() {
        let mat = Mat3x4::from_fn(|row, col| row * 10 + col);
        for (i, elem) in mat.as_slice().iter().enumerate() {
            assert_eq!(*elem, (i % 3) * 10 + i / 3);
        }

        let mut mat = Mat2::<i32>::ZERO;
        mat.as_mut_slice()[1] = 5;
        assert_eq!(mat[(1, 0)], 5);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([-1, 6, 2]);
        assert_eq!(mat[(1, 1)], 6);
        assert_eq!(mat[(0, 1)], 0);
        assert_eq!(mat[(2, 0)], 0);
        assert_eq!(mat.into_diagonal(), [-1, 6, 2]);
        assert_eq!(mat.trace(), 7);
        assert_eq!(Mat4f::IDENTITY.trace(), 4.0);
    }

    #[test]
    fn fmt() {
        let mat = Mat2::from_rows([[9, -8], [7, 6]]);
        assert_eq!(format!("{mat:?}"), "[[9, -8], [7, 6]]");
        assert_eq!(format!("{mat:#?}"), "[\n    [9, -8],\n    [7, 6],\n]");

        let mat = Matrix::from_rows([[0.5, -1.0, 2.0], [3.0, 4.0, 0.125]]);
        assert_eq!(mat.to_string(), "|0.5, -1, 2|\n|3, 4, 0.125|");
        assert_eq!(Mat1::from_rows([[3]]).to_string(), "|3|");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(
            Mat2x3::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
        assert_eq!(
            Mat3x2::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0], [0, 1], [0, 0]])
        );
    }

    #[test]
    fn resize() {
        let mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(
            mat.resize::<3, 2>(),
            Matrix::from_rows([[1, 2], [4, 5], [0, 0]])
        );
        assert_eq!(mat.resize::<1, 1>(), Matrix::from_rows([[1]]));
        assert_eq!(mat.resize::<2, 3>(), mat);
    }

    #[test]
    fn transpose() {
        let mat = Mat2x4::from_fn(|row, col| (row, col));
        let t = mat.transpose();
        for row in 0..4 {
            for col in 0..2 {
                assert_eq!(t[(row, col)], (col, row));
            }
        }
        assert_eq!(t.transpose(), mat);
    }

    #[test]
    fn cast() {
        let mat = Matrix::from_rows([[1.7f32, -0.5], [3.0, 200.9]]);
        assert_eq!(mat.cast::<i32>(), Matrix::from_rows([[1, 0], [3, 200]]));
        assert_eq!(mat.cast::<u8>()[(1, 1)], 200);
    }
}
