use std::{fmt, ops};

/// Trigonometric functions and their inverses, with angles in radians.
pub trait Trig: Sized {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Four-quadrant arc tangent of `self / other`.
    fn atan2(self, other: Self) -> Self;
    /// Returns `(self.sin(), self.cos())`.
    fn sin_cos(self) -> (Self, Self);
}

/// Square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Pairwise minimum and maximum.
///
/// Integers forward to [`Ord`]. Floats use the inherent `min`/`max`, which ignore a NaN operand.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    /// Restricts `self` to the range `min..=max`, computed as `max(min, min(self, max))`.
    ///
    /// Unlike [`Ord::clamp`] and [`f32::clamp`], this does not panic if `min > max`. `min` is
    /// returned in that case.
    fn clamp(self, min: Self, max: Self) -> Self {
        min.max(self.min(max))
    }
}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Scalars with an additive identity.
pub trait Zero {
    /// `0`
    const ZERO: Self;
}

/// Scalars with a multiplicative identity.
pub trait One {
    /// `1`
    const ONE: Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0: f32, f64);

/// Signed scalars closed under `+`, `-`, `*` and `/`.
///
/// Implemented automatically. Unsigned integers lack [`Neg`][ops::Neg] and are therefore excluded.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Scalars that vectors and matrices can be divided by.
///
/// Floating-point scalars compute the reciprocal once and multiply every element with it, which
/// may differ from a direct division in the last bit. Integer scalars divide each element, which
/// truncates toward zero.
pub trait ScalarDiv: Copy {
    /// Divides every element of `elems` by `divisor`.
    fn div_elems(elems: &mut [Self], divisor: Self);
}

macro_rules! int_scalar_div {
    ($($types:ty),+) => {
        $(
            impl ScalarDiv for $types {
                #[inline]
                fn div_elems(elems: &mut [Self], divisor: Self) {
                    elems.iter_mut().for_each(|elem| *elem /= divisor);
                }
            }
        )+
    };
}
int_scalar_div!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Lossy numeric conversion, with the semantics of an `as` cast.
pub trait CastFrom<T> {
    fn cast_from(value: T) -> Self;
}

macro_rules! cast_from {
    ($($to:ty),+) => {
        $(
            cast_from!(@from $to: f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
        )+
    };
    (@from $to:ty: $($from:ty),+) => {
        $(
            impl CastFrom<$from> for $to {
                #[inline]
                fn cast_from(value: $from) -> Self {
                    value as $to
                }
            }
        )+
    };
}
cast_from!(f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Floating-point scalar types.
///
/// Bundles the capability traits above with the remaining transcendental and rounding functions of
/// the standard library's `f32`/`f64`. This is the bound used by the element-wise math functions
/// in [`elementwise`][crate::elementwise] and by quaternion interpolation.
pub trait Float:
    Number
    + Trig
    + Sqrt
    + Abs
    + MinMax
    + ScalarDiv
    + PartialOrd
    + ops::Rem<Output = Self>
    + CastFrom<f64>
    + fmt::Debug
{
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    #[doc(alias = "log")]
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn is_finite(self) -> bool;

    /// Linearly interpolates between `self` and `other`, computed as `self + (other - self) * t`.
    fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }
}

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl ScalarDiv for $types {
                #[inline]
                fn div_elems(elems: &mut [Self], divisor: Self) {
                    let recip = 1.0 / divisor;
                    elems.iter_mut().for_each(|elem| *elem *= recip);
                }
            }

            impl Float for $types {
                fn sinh(self) -> Self {
                    self.sinh()
                }

                fn cosh(self) -> Self {
                    self.cosh()
                }

                fn tanh(self) -> Self {
                    self.tanh()
                }

                fn exp(self) -> Self {
                    self.exp()
                }

                fn exp2(self) -> Self {
                    self.exp2()
                }

                fn ln(self) -> Self {
                    self.ln()
                }

                fn log2(self) -> Self {
                    self.log2()
                }

                fn log10(self) -> Self {
                    self.log10()
                }

                fn powf(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }

                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }

                fn round(self) -> Self {
                    self.round()
                }

                fn is_finite(self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! int_abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )+
    };
}
int_abs!(i8, i16, i32, i64, i128, isize);
