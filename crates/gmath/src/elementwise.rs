//! Scalar math applied to every element of a vector.
//!
//! Unary functions are available as methods on [`Vector`] (eg. [`Vector::sqrt`]). Functions taking
//! more than one argument are free functions in this module, and accept any mix of vectors and
//! scalars via the [`Broadcast`] trait. Scalars are broadcast to every element.
//!
//! ```
//! # use gmath::*;
//! use gmath::elementwise::{clamp, lerp, pow};
//!
//! let v = vec3(1.0, 2.0, 3.0);
//! assert_eq!(pow(v, 2.0), vec3(1.0, 4.0, 9.0));
//! assert_eq!(pow(2.0, v), vec3(2.0, 4.0, 8.0));
//! assert_eq!(clamp(v, 1.5, 2.5), vec3(1.5, 2.0, 2.5));
//! assert_eq!(lerp(Vec3d::ZERO, v, 0.5), vec3(0.5, 1.0, 1.5));
//! ```

use std::ops::Rem;

use crate::{Abs, Float, MinMax, Number, Sqrt, Trig, Vector};

/// Values that can be used as an `N`-element vector argument.
///
/// Implemented by [`Vector<T, N>`] itself, and by the primitive scalar types, which are splatted
/// into every element.
pub trait Broadcast<T, const N: usize>: Copy {
    fn broadcast(self) -> Vector<T, N>;
}

impl<T: Copy, const N: usize> Broadcast<T, N> for Vector<T, N> {
    #[inline]
    fn broadcast(self) -> Vector<T, N> {
        self
    }
}

macro_rules! broadcast_scalars {
    ($($types:ty),+) => {
        $(
            impl<const N: usize> Broadcast<$types, N> for $types {
                #[inline]
                fn broadcast(self) -> Vector<$types, N> {
                    Vector::splat(self)
                }
            }
        )+
    };
}
broadcast_scalars!(f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! unary_methods {
    ($bound:ident: $($name:ident),+) => {
        impl<T: $bound, const N: usize> Vector<T, N> {
            $(
                #[doc = concat!("Applies [`f32::", stringify!($name), "`] (or its `f64` counterpart) to every element.")]
                #[inline]
                pub fn $name(self) -> Self {
                    self.map(T::$name)
                }
            )+
        }
    };
}

unary_methods!(Trig: sin, cos, tan, asin, acos, atan);
unary_methods!(Float: sinh, cosh, tanh, exp, exp2, ln, log2, log10, floor, ceil, round);
unary_methods!(Sqrt: sqrt);
unary_methods!(Abs: abs);

/// Raises each element of `base` to the power given by the matching element of `exponent`.
pub fn pow<T, A, B, const N: usize>(base: A, exponent: B) -> Vector<T, N>
where
    T: Float,
    A: Broadcast<T, N>,
    B: Broadcast<T, N>,
{
    base.broadcast()
        .zip(exponent.broadcast())
        .map(|(b, e)| b.powf(e))
}

/// Four-quadrant arc tangent of `y / x`, element by element.
///
/// ```
/// # use gmath::*;
/// use std::f64::consts::FRAC_PI_2;
/// use gmath::elementwise::atan2;
///
/// let angles = atan2(vec2(1.0, 0.0), vec2(0.0, -1.0));
/// assert_eq!(angles.x(), FRAC_PI_2);
/// assert_eq!(angles.y(), std::f64::consts::PI);
/// ```
pub fn atan2<T, A, B, const N: usize>(y: A, x: B) -> Vector<T, N>
where
    T: Trig + Copy,
    A: Broadcast<T, N>,
    B: Broadcast<T, N>,
{
    y.broadcast().zip(x.broadcast()).map(|(y, x)| y.atan2(x))
}

/// Element-wise remainder, with the semantics of the `%` operator.
#[doc(alias = "mod", alias = "fmod")]
pub fn rem<T, A, B, const N: usize>(a: A, b: B) -> Vector<T, N>
where
    T: Rem<Output = T> + Copy,
    A: Broadcast<T, N>,
    B: Broadcast<T, N>,
{
    a.broadcast() % b.broadcast()
}

/// Element-wise minimum.
pub fn min<T, A, B, const N: usize>(a: A, b: B) -> Vector<T, N>
where
    T: MinMax + Copy,
    A: Broadcast<T, N>,
    B: Broadcast<T, N>,
{
    a.broadcast().min(b.broadcast())
}

/// Element-wise maximum.
pub fn max<T, A, B, const N: usize>(a: A, b: B) -> Vector<T, N>
where
    T: MinMax + Copy,
    A: Broadcast<T, N>,
    B: Broadcast<T, N>,
{
    a.broadcast().max(b.broadcast())
}

/// Linear interpolation `a + (b - a) * t`, element by element.
pub fn lerp<T, A, B, F, const N: usize>(a: A, b: B, t: F) -> Vector<T, N>
where
    T: Number,
    A: Broadcast<T, N>,
    B: Broadcast<T, N>,
    F: Broadcast<T, N>,
{
    let a = a.broadcast();
    a + (b.broadcast() - a) * t.broadcast()
}

/// Restricts each element of `value` to the range given by `lo` and `hi`.
///
/// Computed as `max(lo, min(value, hi))`, so elements where `lo > hi` are set to `lo`.
pub fn clamp<T, V, L, H, const N: usize>(value: V, lo: L, hi: H) -> Vector<T, N>
where
    T: MinMax + Copy,
    V: Broadcast<T, N>,
    L: Broadcast<T, N>,
    H: Broadcast<T, N>,
{
    value.broadcast().clamp(lo.broadcast(), hi.broadcast())
}
