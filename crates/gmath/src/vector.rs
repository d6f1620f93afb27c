use std::{array, fmt};

use crate::{
    traits::{CastFrom, Float, Number, Sqrt},
    Mat2, MinMax, One, Trig, Zero,
};

mod access;
mod ops;

macro_rules! aliases {
    ($($n:literal: $generic:ident, $f32:ident, $f64:ident;)+) => {
        $(
            #[doc = concat!("A vector with ", $n, " elements.")]
            pub type $generic<T> = Vector<T, $n>;
            #[doc = concat!("A vector with ", $n, " [`f32`] elements.")]
            pub type $f32 = $generic<f32>;
            #[doc = concat!("A vector with ", $n, " [`f64`] elements.")]
            pub type $f64 = $generic<f64>;
        )+
    };
}

aliases! {
    1: Vec1, Vec1f, Vec1d;
    2: Vec2, Vec2f, Vec2d;
    3: Vec3, Vec3f, Vec3d;
    4: Vec4, Vec4f, Vec4d;
}

/// A column vector with `N` elements of type `T`.
///
/// Vectors are plain values: they are [`Copy`] whenever `T` is, never allocate, and are laid out
/// exactly like `[T; N]`.
///
/// # Creating vectors
///
/// - [`vec1`], [`vec2`], [`vec3`] and [`vec4`] take the elements as arguments.
/// - [`Vector::splat`] repeats one value, [`Vector::from_fn`] computes each element from its index.
/// - `From<[T; N]>` wraps an existing array.
/// - [`Vector::extend`] and [`Vector::truncate`] add or remove the last element.
/// - [`Vector::cast`] converts the element type with `as` semantics.
/// - [`Vector::ZERO`], [`Vector::ONE`] and the unit vectors `X`, `Y`, `Z` and `W` are available as
///   associated constants.
///
/// # Reading and writing elements
///
/// - Indexing (`v[i]`) works like on arrays and panics when `i >= N`.
/// - Up to 4 dimensions, the accessors `x()`/`y()`/`z()`/`w()` (and the color aliases `r()`,
///   `g()`, `b()`, `a()`) return copies of an element, and the `_mut` variants return references
///   into the vector.
/// - [`Vector::as_slice`], [`Vector::as_array`] and [`Vector::into_array`] expose the backing
///   array, as do the [`AsRef`] and [`AsMut`] impls.
///
/// # Operators
///
/// `+`, `-`, `*`, `/` and `%` work element by element between two vectors, and broadcast a scalar
/// operand on either side. See [`elementwise`][crate::elementwise] for math functions.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The vector whose elements are all [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// The vector whose elements are all [`T::ONE`][One::ONE].
    pub const ONE: Self = Self([T::ONE; N]);
}

macro_rules! unit_vectors {
    ($($n:literal => $($axis:ident: $idx:literal),+;)+) => {
        $(
            impl<T: Zero + One + Copy> Vector<T, $n> {
                $(
                    #[doc = concat!("The unit vector along the ", stringify!($axis), " axis.")]
                    pub const $axis: Self = {
                        let mut elems = [T::ZERO; $n];
                        elems[$idx] = T::ONE;
                        Self(elems)
                    };
                )+
            }
        )+
    };
}

unit_vectors! {
    1 => X: 0;
    2 => X: 0, Y: 1;
    3 => X: 0, Y: 1, Z: 2;
    4 => X: 0, Y: 1, Z: 2, W: 3;
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with every element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(Vector::splat(0.5), vec2(0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `cb` with each index from `0` to `N - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let squares: Vec4<usize> = Vector::from_fn(|i| i * i);
    /// assert_eq!(squares, [0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Transforms each element with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec3(-1, 0, 2).map(|e| e >= 0), vec3(false, true, true));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let pairs = vec2('a', 'b').zip(vec2(1, 2));
    /// assert_eq!(pairs, vec2(('a', 1), ('b', 2)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        self.map(|a| match other.next() {
            Some(b) => (a, b),
            None => unreachable!("both vectors have `N` elements"),
        })
    }

    /// Converts each element to the scalar type `U`, with the semantics of an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = vec3(1.9f64, -2.5, 300.0).cast::<i32>();
    /// assert_eq!(v, vec3(1, -2, 300));
    /// assert_eq!(v.cast::<f32>(), vec3(1.0, -2.0, 300.0));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        U: CastFrom<T>,
    {
        self.map(U::cast_from)
    }

    /// Borrows the elements as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the elements as an array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Mutably borrows the elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mut v = Vec4::<u8>::ZERO;
    /// v.as_mut_slice()[2..].fill(9);
    /// assert_eq!(v, [0, 0, 9, 9]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the backing array.
    ///
    /// Same as the `From<Vector<T, N>>` impl for `[T; N]`, but without needing a type annotation.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the dot product `Σ self[i] * other[i]`.
    ///
    /// Its sign tells whether the angle between the vectors is acute (positive), a right angle
    /// (zero) or obtuse (negative). [`Vector::angle_to`] computes the angle itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec3(2, -1, 4).dot(vec3(3, 5, 1)), 5);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.zip(other)
            .into_array()
            .into_iter()
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length, `self.dot(self)`.
    ///
    /// Cheaper than [`Vector::length`] and exact for integers.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the Euclidean length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// assert_eq!(Vec4f::W.length(), 1.0);
    /// ```
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (self - other).length2()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        self.distance2(other).sqrt()
    }

    /// Scales this vector to length one.
    ///
    /// The reciprocal of the length is computed once and multiplied with each element. A vector of
    /// length zero results in NaN elements; use [`Vector::try_normalize`] if that can happen.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec2(-5.0, 0.0).normalize(), vec2(-1.0, 0.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self * (T::ONE / self.length())
    }

    /// Divides this vector by its length, or returns [`None`] if the length is zero or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec2(0.0, -2.0).try_normalize(), Some(vec2(0.0, -1.0)));
    /// assert_eq!(Vec2f::ZERO.try_normalize(), None);
    /// ```
    pub fn try_normalize(self) -> Option<Self>
    where
        T: Float,
    {
        let length = self.length();
        if length == T::ZERO || !length.is_finite() {
            log::trace!("cannot normalize vector of length {length:?}");
            return None;
        }
        Some(self * (T::ONE / length))
    }

    /// Returns the unsigned angle between `self` and `other`, in radians (`0..=π`).
    ///
    /// Both vectors need a non-zero length. The cosine is clamped to `[-1, 1]` before taking its
    /// arc cosine, so (anti-)parallel vectors yield `0` or `π` instead of NaN when rounding pushes
    /// the cosine out of range.
    ///
    /// [`Vector::signed_angle_to`] distinguishes the rotation direction of 2D vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// use std::f32::consts::{FRAC_PI_2, PI};
    /// use approx::assert_relative_eq;
    ///
    /// assert_relative_eq!(Vec3f::X.angle_to(Vec3f::Z), FRAC_PI_2);
    /// assert_relative_eq!(Vec3f::X.angle_to(-Vec3f::X), PI);
    /// ```
    pub fn angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt + MinMax,
    {
        let cos = self.dot(other) / (self.length() * other.length());
        MinMax::clamp(cos, -T::ONE, T::ONE).acos()
    }

    /// Linearly interpolates between `self` and `other`, computed as `self + (other - self) * t`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(4.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.25), vec2(1.0, 12.5));
    /// ```
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }

    /// Takes the smaller of each pair of elements.
    ///
    /// For floats, a NaN element loses against a number (see [`f32::min`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let a = vec3(4.0, f32::NAN, -1.0);
    /// assert_eq!(a.min(vec3(2.0, 7.0, 0.0)), vec3(2.0, 7.0, -1.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| MinMax::min(self[i], other[i]))
    }

    /// Takes the larger of each pair of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec3(4, 9, -1).max(vec3(2, 7, 0)), vec3(4, 9, 0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| MinMax::max(self[i], other[i]))
    }

    /// Limits each element to the range given by the matching elements of `min` and `max`.
    ///
    /// Each element is computed as `max(min, min(self, max))`, so an inverted range yields `min`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = vec3(-5, 2, 9);
    /// assert_eq!(v.clamp(Vector::splat(0), Vector::splat(4)), vec3(0, 2, 4));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| MinMax::clamp(self[i], min[i], max[i]))
    }
}

macro_rules! resize {
    ($($small:literal <=> $large:literal: [$($elem:ident),+];)+) => {
        $(
            impl<T> Vector<T, $small> {
                #[doc = concat!("Appends `value`, producing a vector with ", $large, " elements.")]
                pub fn extend(self, value: T) -> Vector<T, $large> {
                    let [$($elem),+] = self.0;
                    Vector([$($elem,)+ value])
                }
            }

            impl<T> Vector<T, $large> {
                #[doc = concat!("Drops the last element, producing a vector with ", $small, " elements.")]
                pub fn truncate(self) -> Vector<T, $small> {
                    let [$($elem,)+ _] = self.0;
                    Vector([$($elem),+])
                }
            }
        )+
    };
}

resize! {
    1 <=> 2: [x];
    2 <=> 3: [x, y];
    3 <=> 4: [x, y, z];
}

impl<T> Vector<T, 2> {
    /// Rotates `self` clockwise by `radians`, with the Y axis pointing up.
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise by `radians`, with the Y axis pointing up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let v = vec2(2.0, 0.0).rotate_counterclockwise(std::f64::consts::FRAC_PI_2);
    /// assert_abs_diff_eq!(v, vec2(0.0, 2.0), epsilon = 1e-12);
    /// ```
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Returns the clockwise angle (in radians, `-π..=π`) that rotates `self` onto the direction
    /// of `other`.
    ///
    /// Counterclockwise rotations come out negative. This assumes the Y axis points up; with a
    /// Y-down coordinate system (like most image coordinates), swap the operands.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// use std::f32::consts::FRAC_PI_2;
    /// use approx::assert_relative_eq;
    ///
    /// assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), FRAC_PI_2);
    /// assert_relative_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -FRAC_PI_2);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// Returns `self.x * other.y - self.y * other.x`.
    ///
    /// This is the Z component of the 3D cross product of both vectors extended with `z = 0`, and
    /// is positive when `other` lies counterclockwise of `self`.
    #[doc(alias = "cross")]
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        let [ax, ay] = self.0;
        let [bx, by] = other.0;
        ax * by - ay * bx
    }
}

impl<T> Vector<T, 3> {
    /// Returns the cross product `self × other`.
    ///
    /// The result is perpendicular to both inputs and follows the right-hand rule, so swapping
    /// the operands flips its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(Vec3::<i32>::X.cross(Vec3::Y), Vec3::<i32>::Z);
    /// assert_eq!(vec3(0, 2, 0).cross(vec3(3, 0, 0)), vec3(0, 0, -6));
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Vector([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// Formats the elements like a tuple.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .fold(&mut f.debug_tuple(""), |tup, elem| tup.field(elem))
            .finish()
    }
}

/// Formats the vector as `(v0, v1, ..., vn-1)`.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

macro_rules! borrow_impls {
    ($($target:ty),+) => {
        $(
            impl<T, const N: usize> AsRef<$target> for Vector<T, N> {
                #[inline]
                fn as_ref(&self) -> &$target {
                    &self.0
                }
            }

            impl<T, const N: usize> AsMut<$target> for Vector<T, N> {
                #[inline]
                fn as_mut(&mut self) -> &mut $target {
                    &mut self.0
                }
            }
        )+
    };
}

borrow_impls!([T], [T; N]);

/// Creates a [`Vec1`].
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Creates a [`Vec2`] from its `x` and `y` elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Creates a [`Vec3`] from its `x`, `y` and `z` elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Creates a [`Vec4`] from its `x`, `y`, `z` and `w` elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        f32::consts::{FRAC_PI_2, FRAC_PI_4, PI},
        hash::{Hash, Hasher},
    };

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn fmt() {
        assert_eq!(Vec4f::W.to_string(), "(0, 0, 0, 1)");
        assert_eq!(vec1(7).to_string(), "(7)");
        assert_eq!(vec3(0.5, -1.0, 2.25).to_string(), "(0.5, -1, 2.25)");
        assert_eq!(format!("{:?}", vec2(1.5f32, 0.0)), "(1.5, 0.0)");
        assert_eq!(format!("{:?}", vec1(3)), "(3,)");
    }

    #[test]
    fn constants() {
        assert_eq!(Vec3f::ZERO, [0.0; 3]);
        assert_eq!(Vec4::<i32>::ONE, [1; 4]);
        assert_eq!(Vec2::<i8>::Y, [0, 1]);
        assert_eq!(Vec3::<u8>::Z, [0, 0, 1]);
        assert_eq!(Vec4::<i64>::W, [0, 0, 0, 1]);
        assert_eq!(Vec1::<u32>::X, [1]);
    }

    #[test]
    fn concat_and_split() {
        let v = vec2(1, 2).extend(3).extend(4);
        assert_eq!(v, vec4(1, 2, 3, 4));
        assert_eq!(v.truncate(), vec3(1, 2, 3));
        assert_eq!(v.truncate().truncate().truncate(), vec1(1));
        assert_eq!(vec1(1).extend(2), vec2(1, 2));
    }

    #[test]
    fn rotate() {
        assert_abs_diff_eq!(Vec2f::Y.rotate_clockwise(FRAC_PI_2), Vec2f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2f::Y.rotate_clockwise(PI), -Vec2f::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2f::X.rotate_clockwise(PI), -Vec2f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2f::X.rotate_counterclockwise(FRAC_PI_2), Vec2f::Y, epsilon = 1e-6);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(2, -1, 4).dot(vec3(3, 5, 1)), 5);
        assert_eq!(vec3(2, -1, 4).dot(vec3(2, -1, 4)), 21);
        assert_eq!(Vec3f::X.dot(Vec3f::X), 1.0);
        assert_eq!(Vec3f::X.dot(Vec3f::Z), 0.0);

        let (a, b) = (vec4(0.5, -3.0, 2.0, 8.0), vec4(-1.5, 0.25, 4.0, 1.0));
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn cross() {
        let a = vec3(1.0f32, -2.0, 0.5);
        let b = vec3(3.0f32, 0.25, -1.0);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(a), Vec3f::ZERO);
        assert_relative_eq!(a.cross(b).dot(a), 0.0);
        assert_relative_eq!(a.cross(b).dot(b), 0.0);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
        assert_eq!(vec2(1, 0).perp_dot(vec2(0, 1)), 1);
    }

    #[test]
    fn normalize() {
        for v in [vec3(3.0f32, -4.0, 12.0), vec3(1e-3, 0.0, 0.0), vec3(-7.0, 7.0, 7.0)] {
            assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
        }
        assert!(Vec3f::ZERO.normalize().x().is_nan());
        assert_eq!(vec2(f32::INFINITY, 0.0).try_normalize(), None);
    }

    #[test]
    fn distance() {
        assert_eq!(vec3(1, 2, 3).distance2(vec3(1, 2, 3)), 0);
        assert_eq!(vec3(0.0, 0.0, -2.0).distance(vec3(0.0, 0.0, 2.0)), 4.0);
    }

    #[test]
    fn angle() {
        assert_relative_eq!(Vec3f::Y.angle_to(Vec3f::X), FRAC_PI_2);
        assert_relative_eq!(Vec3f::X.angle_to(Vec3f::Y), FRAC_PI_2);

        assert_relative_eq!(Vec3f::Y.angle_to(Vec3f::Y), 0.0);
        assert_relative_eq!(Vec3f::Y.angle_to(-Vec3f::Y), PI);
        assert_relative_eq!(Vec3f::Y.angle_to(-Vec3f::X), FRAC_PI_2);

        assert_relative_eq!(vec2(0.0f32, 2.0).angle_to(vec2(-3.0, 0.0)), FRAC_PI_2);
        assert_relative_eq!(vec2(1.0f32, 1.0).angle_to(vec2(1.0, -1.0)), FRAC_PI_2);
    }

    #[test]
    fn angle_of_antiparallel_vectors_is_not_nan() {
        // Rounding can push the cosine of these outside of [-1, 1].
        let a = vec3(0.1f32, 0.2, 0.3);
        let b = a * -3.0;
        let angle = a.angle_to(b);
        assert!(!angle.is_nan());
        assert_relative_eq!(angle, PI, epsilon = 1e-3);

        let parallel = a.angle_to(a * 7.0);
        assert!(!parallel.is_nan());
        assert_abs_diff_eq!(parallel, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn angle_at_extreme_magnitudes() {
        // The squared lengths of these overflow and underflow `f32`.
        let huge = vec3(1e10f32, 0.0, 0.0).angle_to(vec3(1e10, 1e10, 0.0));
        assert_relative_eq!(huge, FRAC_PI_4, epsilon = 1e-6);
        let tiny = vec3(1e-12f32, 0.0, 0.0).angle_to(vec3(0.0, 1e-12, 0.0));
        assert_relative_eq!(tiny, FRAC_PI_2, epsilon = 1e-6);
        let mixed = vec2(3e19f32, 0.0).angle_to(vec2(-2e-19, 0.0));
        assert_relative_eq!(mixed, PI, epsilon = 1e-6);
    }

    #[test]
    fn hash_matches_eq() {
        let hash = |v: &Vec3<i32>| {
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        };
        let a = vec3(4, -1, 7);
        let b = Vector::from([4, -1, 7]);
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn signed_angle() {
        assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), FRAC_PI_2);
        assert_relative_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -FRAC_PI_2);
        assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);

        let turned = vec2(0.0f32, 1.0).rotate_clockwise(1.2);
        assert_relative_eq!(Vec2f::Y.signed_angle_to(turned), 1.2, epsilon = 1e-5);
        assert_relative_eq!(turned.signed_angle_to(Vec2f::Y), -1.2, epsilon = 1e-5);
    }

    #[test]
    fn min_max_clamp() {
        let v = vec3(1.0, 5.0, -3.0);
        assert_eq!(v.min(Vector::splat(2.0)), vec3(1.0, 2.0, -3.0));
        assert_eq!(v.max(Vector::splat(2.0)), vec3(2.0, 5.0, 2.0));
        assert_eq!(
            v.clamp(Vector::splat(0.0), vec3(0.5, 10.0, 10.0)),
            vec3(0.5, 5.0, 0.0)
        );
        // Inverted bounds yield the lower bound.
        assert_eq!(v.clamp(Vector::splat(4.0), Vector::splat(3.0)), Vector::splat(4.0));
    }

    #[test]
    fn lerp() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-1.0, 4.0, 3.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), vec3(0.0, 3.0, 3.0));
    }
}
