//! Operator impls for [`Vector`].

use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use crate::traits::ScalarDiv;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T: Hash, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.0.eq(other)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Implements an element-wise vector-vector operator, a broadcasting vector-scalar operator, and
/// the compound assignment forms of both.
macro_rules! elementwise_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt;)+) => {
        $(
            /// Element-wise operation.
            impl<T, const N: usize> $trait<Vector<T, N>> for Vector<T, N>
            where
                T: $trait,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l $op r)
                }
            }

            /// Element-wise operation.
            impl<T, const N: usize> $assign_trait<Vector<T, N>> for Vector<T, N>
            where
                T: $assign_trait,
            {
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    self.as_mut_slice()
                        .iter_mut()
                        .zip(rhs.into_array())
                        .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
                }
            }

            /// Vector-Scalar operation, applied to every element.
            impl<T, const N: usize> $trait<T> for Vector<T, N>
            where
                T: $trait + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $op rhs)
                }
            }

            /// Vector-Scalar operation, applied to every element.
            impl<T, const N: usize> $assign_trait<T> for Vector<T, N>
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

elementwise_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Rem::rem, RemAssign::rem_assign, %;
}

// NB: we support both vector-scalar and element-wise vector-vector operations. This rules out a
// more generic implementation `Mul<U> for Vector<T, N> where T: Mul<U>`.

/// Element-wise division.
impl<T, const N: usize> Div<Vector<T, N>> for Vector<T, N>
where
    T: Div,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(a, b)| a / b)
    }
}

/// Element-wise division.
impl<T, const N: usize> DivAssign<Vector<T, N>> for Vector<T, N>
where
    T: DivAssign,
{
    fn div_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs /= rhs);
    }
}

/// Vector-Scalar division (scaling).
///
/// Floating-point vectors are multiplied with the reciprocal of `rhs`, integer vectors are divided
/// element by element. See [`ScalarDiv`].
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: ScalarDiv,
{
    type Output = Vector<T, N>;

    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}

/// Vector-Scalar division (scaling).
impl<T, const N: usize> DivAssign<T> for Vector<T, N>
where
    T: ScalarDiv,
{
    fn div_assign(&mut self, rhs: T) {
        T::div_elems(self.as_mut_slice(), rhs);
    }
}

/// Implements scalar-vector operators, where the scalar is the left operand.
///
/// These can't be written generically over `T` because of the orphan rules, so they are provided
/// for the primitive types.
macro_rules! scalar_lhs_ops {
    ($($types:ty),+) => {
        $(
            scalar_lhs_ops!(@impl $types: Add::add +, Sub::sub -, Mul::mul *, Div::div /, Rem::rem %);
        )+
    };
    (@impl $ty:ty: $($trait:ident::$method:ident $op:tt),+) => {
        $(
            impl<const N: usize> $trait<Vector<$ty, N>> for $ty {
                type Output = Vector<$ty, N>;

                fn $method(self, rhs: Vector<$ty, N>) -> Self::Output {
                    rhs.map(|elem| self $op elem)
                }
            }
        )+
    };
}

scalar_lhs_ops!(f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
