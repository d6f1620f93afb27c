//! Operator impls for [`Matrix`].

use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    traits::{Number, ScalarDiv},
    Matrix, Vector,
};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T: Hash, const R: usize, const C: usize> Hash for Matrix<T, R, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Sums `term(0) + term(1) + ... + term(n - 1)`.
///
/// The first term initializes the accumulator, so no additional `0 + x` is performed.
#[inline]
fn sum_terms<T: Number>(n: usize, mut term: impl FnMut(usize) -> T) -> T {
    if n == 0 {
        return T::ZERO;
    }
    (1..n).fold(term(0), |acc, k| acc + term(k))
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| sum_terms(C, |col| self[(row, col)] * rhs[col]))
    }
}

/// Row Vector * Matrix.
///
/// This is the same as multiplying the transposed matrix with `self` as a column vector.
impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R>
where
    T: Number,
{
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Vector::from_fn(|col| sum_terms(R, |row| self[row] * rhs[(row, col)]))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| sum_terms(N, |k| self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Matrix, storing the product in `self`.
impl<T, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! elementwise_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt;)+) => {
        $(
            /// Element-wise operation between two matrices of the same size.
            impl<T, const R: usize, const C: usize> $trait<Matrix<T, R, C>> for Matrix<T, R, C>
            where
                T: $trait<Output = T> + Copy,
            {
                type Output = Matrix<T, R, C>;

                fn $method(self, rhs: Matrix<T, R, C>) -> Self::Output {
                    Matrix::from_fn(|row, col| self[(row, col)] $op rhs[(row, col)])
                }
            }

            /// Element-wise operation between two matrices of the same size.
            impl<T, const R: usize, const C: usize> $assign_trait<Matrix<T, R, C>> for Matrix<T, R, C>
            where
                T: $assign_trait + Copy,
            {
                fn $assign_method(&mut self, rhs: Matrix<T, R, C>) {
                    self.as_mut_slice()
                        .iter_mut()
                        .zip(rhs.as_slice())
                        .for_each(|(lhs, rhs)| lhs.$assign_method(*rhs));
                }
            }
        )+
    };
}

elementwise_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Div::div, DivAssign::div_assign, /;
}

macro_rules! scalar_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt;)+) => {
        $(
            /// Matrix-Scalar operation, applied to every element.
            impl<T, const R: usize, const C: usize> $trait<T> for Matrix<T, R, C>
            where
                T: $trait<Output = T> + Copy,
            {
                type Output = Matrix<T, R, C>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $op rhs)
                }
            }

            /// Matrix-Scalar operation, applied to every element.
            impl<T, const R: usize, const C: usize> $assign_trait<T> for Matrix<T, R, C>
            where
                T: $assign_trait + Copy,
            {
                fn $assign_method(&mut self, rhs: T) {
                    self.as_mut_slice().iter_mut().for_each(|lhs| lhs.$assign_method(rhs));
                }
            }
        )+
    };
}

scalar_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
}

/// Matrix-Scalar division.
///
/// Floating-point matrices are multiplied with the reciprocal of `rhs`. See [`ScalarDiv`].
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: ScalarDiv,
{
    type Output = Matrix<T, R, C>;

    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}

/// Matrix-Scalar division.
impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: ScalarDiv,
{
    fn div_assign(&mut self, rhs: T) {
        T::div_elems(self.as_mut_slice(), rhs);
    }
}

macro_rules! scalar_lhs_ops {
    ($($types:ty),+) => {
        $(
            scalar_lhs_ops!(@impl $types: Add::add +, Sub::sub -, Mul::mul *, Div::div /);
        )+
    };
    (@impl $ty:ty: $($trait:ident::$method:ident $op:tt),+) => {
        $(
            impl<const R: usize, const C: usize> $trait<Matrix<$ty, R, C>> for $ty {
                type Output = Matrix<$ty, R, C>;

                fn $method(self, rhs: Matrix<$ty, R, C>) -> Self::Output {
                    rhs.map(|elem| self $op elem)
                }
            }
        )+
    };
}

scalar_lhs_ops!(f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
