//! Transformation and projection matrices.
//!
//! All matrices built here transform column vectors, ie. they are applied as `matrix * vector`.
//! Multiplying a row vector from the left (`vector * matrix`) applies the transposed matrix, which
//! for rotations is the inverse rotation.

use crate::{Float, Mat3, Mat4, Matrix, Number, Quat, Trig, Vec3, Vector};

/// Which way the Z axis of view space points, relative to the viewing direction.
///
/// With [`Handedness::Left`], the camera looks down the positive Z axis; with
/// [`Handedness::Right`], it looks down the negative Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Handedness {
    #[default]
    Left,
    Right,
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([[cos, sin], [-sin, cos]])
    }
}

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Creates a matrix that scales by `factor` along `axis`, and leaves every direction
    /// perpendicular to `axis` unchanged.
    ///
    /// `axis` must be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Mat3::scale_along(Vec3f::Y, 3.0);
    /// assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(1.0, 3.0, 1.0));
    /// ```
    pub fn scale_along(axis: Vector<T, N>, factor: T) -> Self {
        let k = factor - T::ONE;
        Self::from_fn(|row, col| {
            let scaled = k * axis[row] * axis[col];
            if row == col {
                T::ONE + scaled
            } else {
                scaled
            }
        })
    }
}

impl<T: Number + Trig> Matrix<T, 3, 3> {
    /// Creates a matrix that rotates counterclockwise by `radians` around `axis` (when looking
    /// down `axis` towards the origin).
    ///
    /// `axis` must be normalized.
    ///
    /// The matrix is meant to be applied to column vectors (`rot * v`). Multiplying a row vector
    /// from the left (`v * rot`) rotates in the opposite direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// use std::f32::consts::FRAC_PI_2;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let rot = Mat3::from_axis_angle(Vec3f::Z, FRAC_PI_2);
    /// assert_abs_diff_eq!(rot * Vec3f::X, Vec3f::Y, epsilon = 1e-6);
    /// ```
    #[doc(alias = "rodrigues")]
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let t = T::ONE - c;
        let [x, y, z] = axis.into_array();

        let (txx, tyy, tzz) = (t * x * x, t * y * y, t * z * z);
        let (txy, txz, tyz) = (t * x * y, t * x * z, t * y * z);
        let (sx, sy, sz) = (s * x, s * y, s * z);

        Self::from_columns([
            [txx + c, txy + sz, txz - sy],
            [txy - sz, tyy + c, tyz + sx],
            [txz + sy, tyz - sx, tzz + c],
        ])
    }

    /// Creates a rotation matrix from Euler angles (in radians).
    ///
    /// The result is `Rx * Ry * Rz`: applied to a vector, it rotates around Z first, then Y, then
    /// X. Equivalently, it's an intrinsic rotation around X, then the rotated Y, then the rotated
    /// Z axis.
    #[rustfmt::skip]
    pub fn from_euler(x: T, y: T, z: T) -> Self {
        let (sx, cx) = x.sin_cos();
        let (sy, cy) = y.sin_cos();
        let (sz, cz) = z.sin_cos();

        Self::from_rows([
            [cy * cz,                -cy * sz,                 sy],
            [cx * sz + sx * sy * cz, cx * cz - sx * sy * sz, -sx * cy],
            [sx * sz - cx * sy * cz, sx * cz + cx * sy * sz,  cx * cy],
        ])
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Creates the rotation matrix corresponding to the unit quaternion `q`.
    ///
    /// Also available as a [`From`] conversion.
    pub fn from_quat(q: Quat<T>) -> Self {
        let [x, y, z, w] = q.into_vec().into_array();
        let two = T::ONE + T::ONE;

        let (xx, yy, zz) = (two * x * x, two * y * y, two * z * z);
        let (xy, xz, yz) = (two * x * y, two * x * z, two * y * z);
        let (xw, yw, zw) = (two * x * w, two * y * w, two * z * w);

        Self::from_columns([
            [T::ONE - yy - zz, xy + zw, xz - yw],
            [xy - zw, T::ONE - xx - zz, yz + xw],
            [xz + yw, yz - xw, T::ONE - xx - yy],
        ])
    }

    /// Augments this 3x3 matrix with a translation, creating a 4x4 affine transform.
    ///
    /// The 3x3 matrix occupies the top-left corner, the translation the first three elements of
    /// the last column, and the bottom row is `[0, 0, 0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Mat3::from_diagonal([2.0, 2.0, 2.0]).with_translation(vec3(1.0, 0.0, -1.0));
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(3.0, 2.0, 1.0, 1.0));
    /// // Directions (w = 0) are not translated.
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(2.0, 2.0, 2.0, 0.0));
    /// ```
    #[doc(alias = "translate")]
    pub fn with_translation(self, translation: Vec3<T>) -> Mat4<T> {
        let [c0, c1, c2] = self.0;
        Matrix::from_columns([
            Vector::from(c0).extend(T::ZERO),
            Vector::from(c1).extend(T::ZERO),
            Vector::from(c2).extend(T::ZERO),
            translation.extend(T::ONE),
        ])
    }
}

impl<T: Number> From<Quat<T>> for Mat3<T> {
    fn from(q: Quat<T>) -> Self {
        Mat3::from_quat(q)
    }
}

impl<T: Number> From<Quat<T>> for Mat4<T> {
    /// Creates a 4x4 rotation matrix without translation.
    fn from(q: Quat<T>) -> Self {
        Mat3::from_quat(q).with_translation(Vector::ZERO)
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a perspective projection matrix.
    ///
    /// `fov_y` is the vertical field of view in radians, `aspect` the ratio of width to height.
    /// Points on the near plane are mapped to a clip-space depth of -1, points on the far plane to
    /// +1 (after the perspective divide). [`Handedness`] selects whether the camera looks down the
    /// positive or negative Z axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// use std::f64::consts::FRAC_PI_2;
    /// use approx::assert_relative_eq;
    ///
    /// let proj = Mat4::perspective(FRAC_PI_2, 1.0, 0.1, 100.0, Handedness::Right);
    /// let clip = proj * vec4(0.0, 0.0, -0.1, 1.0);
    /// assert_relative_eq!(clip.z() / clip.w(), -1.0, epsilon = 1e-12);
    /// ```
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T, handedness: Handedness) -> Self {
        let two = T::ONE + T::ONE;
        let tan_half_fov = (fov_y / two).tan();
        let inv_range = T::ONE / (far - near);

        let xs = T::ONE / (aspect * tan_half_fov);
        let ys = T::ONE / tan_half_fov;
        let mut zs = (far + near) * inv_range;
        let mut w_from_z = T::ONE;
        let z_offset = -two * far * near * inv_range;

        if handedness == Handedness::Right {
            zs = -zs;
            w_from_z = -w_from_z;
        }

        let o = T::ZERO;
        Self::from_columns([
            [xs, o, o, o],
            [o, ys, o, o],
            [o, o, zs, w_from_z],
            [o, o, z_offset, o],
        ])
    }

    /// Creates an orthographic projection matrix that maps the box between `min` and `max` to the
    /// `[-1, 1]` cube.
    ///
    /// With [`Handedness::Right`], the Z axis is flipped, so that `-min.z()` maps to -1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let proj = Mat4::orthographic(vec3(-2.0, -1.0, 0.0), vec3(2.0, 1.0, 10.0), Handedness::Left);
    /// assert_eq!(proj * vec4(2.0, -1.0, 0.0, 1.0), vec4(1.0, -1.0, -1.0, 1.0));
    /// assert_eq!(proj * vec4(0.0, 0.0, 10.0, 1.0), vec4(0.0, 0.0, 1.0, 1.0));
    /// ```
    #[doc(alias = "ortho")]
    pub fn orthographic(min: Vec3<T>, max: Vec3<T>, handedness: Handedness) -> Self {
        let two = T::ONE + T::ONE;
        let inv_range = (max - min).map(|range| T::ONE / range);
        let mut mul = inv_range * two;
        let add = -(max + min) * inv_range;

        if handedness == Handedness::Right {
            *mul.z_mut() = -mul.z();
        }

        let o = T::ZERO;
        Self::from_columns([
            [mul.x(), o, o, o],
            [o, mul.y(), o, o],
            [o, o, mul.z(), o],
            [add.x(), add.y(), add.z(), T::ONE],
        ])
    }

    /// Creates an orthographic projection matrix from the planes bounding the view volume.
    ///
    /// This is [`Matrix::orthographic`] with `min = (left, bottom, near)` and
    /// `max = (right, top, far)`.
    pub fn orthographic_bounds(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
        handedness: Handedness,
    ) -> Self {
        Self::orthographic(
            Vector::from([left, bottom, near]),
            Vector::from([right, top, far]),
            handedness,
        )
    }
}
