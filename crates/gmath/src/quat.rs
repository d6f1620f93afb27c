use std::fmt;

use crate::{
    traits::{CastFrom, Float},
    vec4, MinMax, Number, One, Sqrt, Trig, Vec3, Vector, Zero,
};

mod ops;

/// A quaternion with [`f32`] elements.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] elements.
pub type Quatd = Quat<f64>;

/// A quaternion `xi + yj + zk + w`.
///
/// The components are stored like a [`Vec4`][crate::Vec4] in `x`, `y`, `z`, `w` order. `x`, `y`
/// and `z` make up the [imaginary part][Quat::imaginary] and `w` is the [real part][Quat::real].
/// Quaternions of length one describe rotations in 3D space.
///
/// Unit length is not enforced. The constructors that take rotation angles produce unit
/// quaternions, but arithmetic like `+` or scaling can leave that space; use [`Quat::normalize`]
/// to get back to a valid rotation.
///
/// Multiplication (`*`) is the Hamilton product. The product `a * b` rotates by `b` first, then by
/// `a`, just like the matrix product of the corresponding rotation matrices.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// `0i + 0j + 0k + 1`, the rotation by zero radians.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its components.
    ///
    /// `x`, `y` and `z` form the imaginary part, `w` is the real part.
    #[doc(alias = "from_components")]
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Reinterprets a [`Vector`] as a quaternion, with `w` becoming the real part.
    #[inline]
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its imaginary part and its real part.
    pub fn from_parts(imaginary: Vec3<T>, real: T) -> Self {
        Self {
            vec: imaginary.extend(real),
        }
    }

    /// Returns the components of this quaternion as a 4-dimensional [`Vector`], ordered `x`, `y`,
    /// `z`, `w`.
    #[inline]
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns a reference to the components of this quaternion.
    #[inline]
    pub fn as_vec(&self) -> &Vector<T, 4> {
        &self.vec
    }

    /// Returns the coefficient of `i`.
    #[inline]
    pub fn x(&self) -> T
    where
        T: Copy,
    {
        self.vec[0]
    }

    /// Returns the coefficient of `j`.
    #[inline]
    pub fn y(&self) -> T
    where
        T: Copy,
    {
        self.vec[1]
    }

    /// Returns the coefficient of `k`.
    #[inline]
    pub fn z(&self) -> T
    where
        T: Copy,
    {
        self.vec[2]
    }

    /// Returns the real part.
    #[inline]
    pub fn w(&self) -> T
    where
        T: Copy,
    {
        self.vec[3]
    }

    /// Returns the imaginary part `(x, y, z)` as a [`Vector`].
    #[inline]
    pub fn imaginary(&self) -> Vec3<T>
    where
        T: Copy,
    {
        self.vec.truncate()
    }

    /// Returns the real part `w`.
    #[inline]
    pub fn real(&self) -> T
    where
        T: Copy,
    {
        self.w()
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion that rotates counterclockwise by `radians` around `axis`.
    ///
    /// `axis` must be normalized for the result to be a unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// use std::f32::consts::FRAC_PI_2;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let q = Quat::from_axis_angle(Vec3f::Z, FRAC_PI_2);
    /// assert_abs_diff_eq!(q * Vec3f::X, Vec3f::Y, epsilon = 1e-6);
    /// ```
    #[doc(alias = "angle_axis")]
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_parts(axis * sin, cos)
    }

    /// Creates a quaternion that rotates counterclockwise by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::new(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion that rotates counterclockwise by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::new(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion that rotates counterclockwise by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::new(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion from Euler angles (in radians).
    ///
    /// The result is equal to `from_rotation_x(x) * from_rotation_y(y) * from_rotation_z(z)`, and
    /// represents the same rotation as [`Matrix::from_euler`][crate::Matrix::from_euler].
    #[doc(alias = "euler", alias = "from_rotation_xyz")]
    pub fn from_euler(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        let half = Self::one_half();
        let (sx, cx) = (x * half).sin_cos();
        let (sy, cy) = (y * half).sin_cos();
        let (sz, cz) = (z * half).sin_cos();

        Self::new(
            sx * cy * cz + cx * sy * sz,
            cx * sy * cz - sx * cy * sz,
            cx * cy * sz + sx * sy * cz,
            cx * cy * cz - sx * sy * sz,
        )
    }

    /// Creates a quaternion from Euler angles given in degrees.
    ///
    /// See [`Quat::from_euler`].
    pub fn from_euler_degrees(x: T, y: T, z: T) -> Self
    where
        T: Float,
    {
        let to_radians = T::cast_from(std::f64::consts::PI / 180.0);
        Self::from_euler(x * to_radians, y * to_radians, z * to_radians)
    }

    /// Computes the dot product of the components of `self` and `other`.
    ///
    /// For unit quaternions, this is the cosine of half the angle between the rotations.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the sum of the squared components.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the norm `sqrt(x² + y² + z² + w²)`.
    ///
    /// [`Quat::rotate`] only yields a rotation if this is one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Scales the quaternion to unit length.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Negates the imaginary part of this quaternion.
    ///
    /// For unit quaternions, this is the inverse rotation.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        Self::new(-x, -y, -z, w)
    }

    /// Returns the inverse rotation.
    ///
    /// This is the [conjugate][Quat::conjugate], which only equals the multiplicative inverse
    /// for unit quaternions. Quaternions that are not normalized must be normalized first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// use approx::assert_relative_eq;
    ///
    /// let q = Quat::from_euler(0.5, -0.25, 1.0);
    /// assert_relative_eq!(q * q.inverse(), Quat::IDENTITY, epsilon = 1e-6);
    /// ```
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        self.conjugate()
    }

    /// Linearly interpolates between the components of `self` and `other`.
    ///
    /// The result is generally not normalized.
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }

    /// Spherical linear interpolation between the rotations `self` and `other`.
    ///
    /// Interpolates along the shorter arc: if the quaternions point into opposite hemispheres,
    /// `other` is negated first (`q` and `-q` represent the same rotation). When the rotations are
    /// nearly identical, this falls back to linear interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// use std::f64::consts::PI;
    /// use approx::assert_relative_eq;
    ///
    /// let a = Quat::IDENTITY;
    /// let b = Quat::from_rotation_z(PI / 2.0);
    /// assert_relative_eq!(a.slerp(b, 0.5), Quat::from_rotation_z(PI / 4.0), epsilon = 1e-12);
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Float,
    {
        let mut other = other;
        let mut cos = self.dot(other);
        if cos < T::ZERO {
            other = -other;
            cos = -cos;
        }
        let cos = MinMax::min(cos, T::ONE);

        let (weight_self, weight_other) = if cos > T::cast_from(0.9999) {
            (T::ONE - t, t)
        } else {
            let angle = cos.acos();
            let inv_sin = T::ONE / angle.sin();
            (
                inv_sin * (angle * (T::ONE - t)).sin(),
                inv_sin * (angle * t).sin(),
            )
        };
        self * weight_self + other * weight_other
    }

    /// Raises this unit quaternion to the power `exponent`, scaling its rotation angle.
    ///
    /// `q.pow(0.5)` is the rotation halfway to `q`, `q.pow(2.0)` rotates twice as far. The
    /// quaternion must be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// use approx::assert_relative_eq;
    ///
    /// let q = Quat::from_rotation_y(1.2);
    /// assert_relative_eq!(q.pow(0.5), Quat::from_rotation_y(0.6), epsilon = 1e-12);
    /// ```
    pub fn pow(self, exponent: T) -> Self
    where
        T: Float,
    {
        let half_angle = MinMax::clamp(self.w(), -T::ONE, T::ONE).acos();
        let new_half_angle = half_angle * exponent;
        let sin = half_angle.sin();
        if sin == T::ZERO {
            // No rotation axis to scale along.
            return Self::from_parts(Vector::ZERO, new_half_angle.cos());
        }
        Self::from_parts(
            self.imaginary() * (new_half_angle.sin() / sin),
            new_half_angle.cos(),
        )
    }

    /// Rotates `v` by this quaternion.
    ///
    /// Also available as `self * v`.
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        let n = self.imaginary();
        let t = n.cross(v) * (T::ONE + T::ONE);
        v + t * self.w() + n.cross(t)
    }

    /// Returns the direction the X axis is rotated to.
    pub fn right(&self) -> Vec3<T>
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        let two = T::ONE + T::ONE;
        Vector::from([
            T::ONE - two * (y * y + z * z),
            two * (x * y + z * w),
            two * (x * z - y * w),
        ])
    }

    /// Returns the direction the Y axis is rotated to.
    pub fn up(&self) -> Vec3<T>
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        let two = T::ONE + T::ONE;
        Vector::from([
            two * (x * y - z * w),
            T::ONE - two * (x * x + z * z),
            two * (y * z + x * w),
        ])
    }

    /// Returns the direction the Z axis is rotated to.
    pub fn forward(&self) -> Vec3<T>
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        let two = T::ONE + T::ONE;
        Vector::from([
            two * (x * z + y * w),
            two * (y * z - x * w),
            T::ONE - two * (x * x + y * y),
        ])
    }

    /// Converts each component to the scalar type `U`, with the semantics of an `as` cast.
    pub fn cast<U>(self) -> Quat<U>
    where
        U: CastFrom<T>,
    {
        Quat {
            vec: self.vec.cast(),
        }
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    #[inline]
    fn from(vec: Vector<T, 4>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    #[inline]
    fn from(q: Quat<T>) -> Self {
        q.vec
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.vec.as_array();
        f.debug_tuple("Quat")
            .field(x)
            .field(y)
            .field(z)
            .field(w)
            .finish()
    }
}

/// Formats the quaternion as `(xi + yj + zk + w)`.
impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.vec.as_array();
        write!(f, "({x}i + {y}j + {z}k + {w})")
    }
}
