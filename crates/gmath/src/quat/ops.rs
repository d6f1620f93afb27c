use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{traits::ScalarDiv, Number, Quat, Vec3};

impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vec[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vec[index]
    }
}

/// The Hamilton product.
///
/// `a * b` first rotates by `b`, then by `a`.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [ax, ay, az, aw] = self.vec.into_array();
        let [bx, by, bz, bw] = rhs.vec.into_array();
        Quat::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by + ay * bw + az * bx - ax * bz,
            aw * bz + az * bw + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector.
impl<T: Number> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.rotate(rhs)
    }
}

impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Quat { vec: -self.vec }
    }
}

macro_rules! componentwise_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt;)+) => {
        $(
            impl<T: Number> $trait for Quat<T> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self::Output {
                    Quat { vec: self.vec $op rhs.vec }
                }
            }

            impl<T: Number> $assign_trait for Quat<T> {
                fn $assign_method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }
        )+
    };
}

componentwise_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
}

macro_rules! scalar_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt;)+) => {
        $(
            /// Applies the scalar operation to all four components.
            impl<T: Number> $trait<T> for Quat<T> {
                type Output = Self;

                fn $method(self, rhs: T) -> Self::Output {
                    Quat { vec: self.vec $op rhs }
                }
            }

            impl<T: Number> $assign_trait<T> for Quat<T> {
                fn $assign_method(&mut self, rhs: T) {
                    *self = *self $op rhs;
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

/// Divides all four components by a scalar.
impl<T: Number + ScalarDiv> Div<T> for Quat<T> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<T: Number + ScalarDiv> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, rhs: T) {
        self.vec /= rhs;
    }
}

macro_rules! scalar_lhs_ops {
    ($($types:ty),+) => {
        $(
            scalar_lhs_ops!(@impl $types: Add::add +, Sub::sub -, Mul::mul *);
        )+
    };
    (@impl $ty:ty: $($trait:ident::$method:ident $op:tt),+) => {
        $(
            impl $trait<Quat<$ty>> for $ty {
                type Output = Quat<$ty>;

                fn $method(self, rhs: Quat<$ty>) -> Self::Output {
                    Quat { vec: self $op rhs.vec }
                }
            }
        )+
    };
}

scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, i128, isize);
