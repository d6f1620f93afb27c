//! Randomized checks of the algebraic properties, cross-checked against nalgebra.

use std::f64::consts::{FRAC_PI_2, PI};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use gmath::{vec3, vec4, Handedness, Mat2d, Mat3d, Mat4d, Matrix, Quat, Quatd, Vec3d, Vector};
use nalgebra as na;

const LOG: bool = false;
const SEED: u64 = 0x5eed_61a7_4a11_0c3f;
const ITERATIONS: usize = 25;

fn init_logger() {
    if LOG {
        env_logger::builder()
            .filter_module("gmath", log::LevelFilter::Trace)
            .try_init()
            .ok();
    }
}

fn random_vector<const N: usize>(rng: &mut fastrand::Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| rng.f64() * 2.0 - 1.0)
}

/// Returns a diagonally dominant (and thus well-conditioned) random matrix.
fn random_matrix<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, N, N> {
    Matrix::from_fn(|row, col| {
        let off = rng.f64() * 2.0 - 1.0;
        if row == col {
            off + N as f64
        } else {
            off
        }
    })
}

fn random_unit_quat(rng: &mut fastrand::Rng) -> (Vec3d, f64, Quatd) {
    let axis = loop {
        let v = random_vector::<3>(rng);
        if v.length() > 0.1 {
            break v.normalize();
        }
    };
    let angle = (rng.f64() * 2.0 - 1.0) * PI;
    (axis, angle, Quat::from_axis_angle(axis, angle))
}

fn to_na<const R: usize, const C: usize>(m: &Matrix<f64, R, C>) -> na::SMatrix<f64, R, C> {
    na::SMatrix::from_fn(|row, col| m[(row, col)])
}

fn from_na<const R: usize, const C: usize>(m: &na::SMatrix<f64, R, C>) -> Matrix<f64, R, C> {
    Matrix::from_fn(|row, col| m[(row, col)])
}

fn to_na_vec(v: Vec3d) -> na::Vector3<f64> {
    na::Vector3::new(v.x(), v.y(), v.z())
}

fn from_na_vec(v: &na::Vector3<f64>) -> Vec3d {
    vec3(v.x, v.y, v.z)
}

fn from_na_quat(q: &na::UnitQuaternion<f64>) -> Vector<f64, 4> {
    Vector::from_fn(|i| q.coords[i])
}

fn na_quat(axis: Vec3d, angle: f64) -> na::UnitQuaternion<f64> {
    na::UnitQuaternion::from_axis_angle(&na::Unit::new_normalize(to_na_vec(axis)), angle)
}

/// Runs the square matrix checks for each listed size.
macro_rules! check_square {
    ($($n:literal),+) => {
        $({
            let mut rng = fastrand::Rng::with_seed(SEED + $n);
            for _ in 0..ITERATIONS {
                let m = random_matrix::<$n>(&mut rng);
                let reference = to_na(&m);

                assert_relative_eq!(
                    m.determinant(),
                    reference.determinant(),
                    max_relative = 1e-9
                );
                assert_relative_eq!(
                    m.transpose().determinant(),
                    m.determinant(),
                    max_relative = 1e-9
                );

                let inv = m.inverse();
                let reference_inv = reference.try_inverse().unwrap();
                assert_abs_diff_eq!(inv, from_na(&reference_inv), epsilon = 1e-9);
                assert_abs_diff_eq!(m * inv, Matrix::IDENTITY, epsilon = 1e-9);
                assert_abs_diff_eq!(inv * m, Matrix::IDENTITY, epsilon = 1e-9);
                assert_abs_diff_eq!(inv.inverse(), m, epsilon = 1e-9);
                assert_eq!(m.try_inverse(), Some(inv));

                assert_eq!(m.transpose().transpose(), m);
                assert_relative_eq!(
                    m.transpose().adjugate(),
                    m.adjugate().transpose(),
                    epsilon = 1e-9,
                    max_relative = 1e-9
                );
            }
        })+
    };
}

#[test]
fn square_matrices() {
    init_logger();
    check_square!(2, 3, 4, 5, 6, 7, 8);
}

#[test]
fn known_determinants() {
    assert_eq!(Matrix::from_rows([[1, 2], [3, 4]]).determinant(), -2);
    assert_eq!(Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).determinant(), -2.0);
    assert_eq!(Mat2d::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat3d::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat4d::IDENTITY.determinant(), 1.0);
    assert_eq!(Matrix::<i32, 5, 5>::ZERO.determinant(), 0);
}

#[test]
fn singular_matrices_have_no_inverse() {
    init_logger();
    let m = Matrix::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
    assert_eq!(m.determinant(), 0.0);
    assert_eq!(m.try_inverse(), None);
    assert_eq!(Mat4d::ZERO.try_inverse(), None);
}

#[test]
fn products() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ITERATIONS {
        let a = Matrix::<f64, 2, 3>::from_fn(|_, _| rng.f64());
        let b = Matrix::<f64, 3, 4>::from_fn(|_, _| rng.f64());
        let v = random_vector::<4>(&mut rng);
        let w = random_vector::<2>(&mut rng);

        assert_abs_diff_eq!(a * b, from_na(&(to_na(&a) * to_na(&b))), epsilon = 1e-12);
        assert_abs_diff_eq!((a * b) * v, a * (b * v), epsilon = 1e-12);
        assert_abs_diff_eq!((a * b).transpose(), b.transpose() * a.transpose(), epsilon = 1e-12);
        assert_eq!(w * a, a.transpose() * w);
    }
}

#[test]
fn vector_algebra() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ITERATIONS {
        let a = random_vector::<3>(&mut rng);
        let b = random_vector::<3>(&mut rng);
        let c = random_vector::<3>(&mut rng);

        assert_abs_diff_eq!((a + b) - b, a, epsilon = 1e-12);
        assert_abs_diff_eq!((a * 3.0) / 3.0, a, epsilon = 1e-12);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.cross(a), Vec3d::ZERO);

        let cross = a.cross(b);
        assert_abs_diff_eq!(cross.dot(a), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cross.dot(b), 0.0, epsilon = 1e-12);
        assert_eq!(b.cross(a), -cross);
        assert_relative_eq!(
            cross.length2(),
            a.length2() * b.length2() - a.dot(b) * a.dot(b),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            a.dot(b.cross(c)),
            Matrix::from_columns([a, b, c]).determinant(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            from_na_vec(&to_na_vec(a).cross(&to_na_vec(b))),
            cross,
            epsilon = 1e-15
        );

        assert_relative_eq!(a.normalize().length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(a.angle_to(b), to_na_vec(a).angle(&to_na_vec(b)), epsilon = 1e-9);
        assert_relative_eq!(a.distance(b), (a - b).length());
        assert_eq!(a.lerp(b, 0.0), a);
    }
}

#[test]
fn quaternions_match_nalgebra() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ITERATIONS {
        let (axis, angle, q) = random_unit_quat(&mut rng);
        let reference = na_quat(axis, angle);
        let v = random_vector::<3>(&mut rng);

        assert_abs_diff_eq!(
            q.into_vec(),
            from_na_quat(&reference),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(q * v, from_na_vec(&(reference * to_na_vec(v))), epsilon = 1e-12);
        assert_abs_diff_eq!(
            Mat3d::from_quat(q),
            from_na(reference.to_rotation_matrix().matrix()),
            epsilon = 1e-12
        );

        let (axis2, angle2, q2) = random_unit_quat(&mut rng);
        let product = reference * na_quat(axis2, angle2);
        assert_abs_diff_eq!(
            (q * q2).into_vec(),
            from_na_quat(&product),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(q.inverse() * (q * v), v, epsilon = 1e-12);
    }
}

#[test]
fn euler_angles_match_composed_rotations() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ITERATIONS {
        let [x, y, z] = random_vector::<3>(&mut rng).map(|a| a * PI).into_array();
        let reference = na_quat(Vec3d::X, x) * na_quat(Vec3d::Y, y) * na_quat(Vec3d::Z, z);

        assert_abs_diff_eq!(
            Quat::from_euler(x, y, z).into_vec(),
            from_na_quat(&reference),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Mat3d::from_euler(x, y, z),
            from_na(reference.to_rotation_matrix().matrix()),
            epsilon = 1e-12
        );
    }
}

#[test]
fn rotation_representations_agree() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ITERATIONS {
        let (axis, angle, q) = random_unit_quat(&mut rng);
        let v = random_vector::<3>(&mut rng);

        let by_quat = q * v;
        let by_matrix = Mat3d::from_axis_angle(axis, angle) * v;
        let by_affine = Mat4d::from(q) * v.extend(1.0);
        assert_abs_diff_eq!(by_quat, by_matrix, epsilon = 1e-12);
        assert_abs_diff_eq!(by_affine, by_quat.extend(1.0), epsilon = 1e-12);
        assert_relative_eq!(by_quat.length(), v.length(), epsilon = 1e-12);

        let flat = v.truncate();
        let rotated = Mat3d::from_axis_angle(Vec3d::Z, angle) * flat.extend(0.0);
        assert_abs_diff_eq!(
            Mat2d::rotation_counterclockwise(angle) * flat,
            rotated.truncate(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(flat.rotate_counterclockwise(angle), rotated.truncate(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            flat.rotate_clockwise(-angle),
            flat.rotate_counterclockwise(angle),
            epsilon = 1e-12
        );
    }
}

#[test]
fn slerp() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    let angle_between = |a: Quatd, b: Quatd| 2.0 * a.dot(b).abs().min(1.0).acos();
    for _ in 0..ITERATIONS {
        let (_, _, a) = random_unit_quat(&mut rng);
        let (_, _, b) = random_unit_quat(&mut rng);
        if a.dot(b).abs() > 0.999 {
            continue;
        }

        assert_abs_diff_eq!(a.slerp(b, 0.0), a, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_between(a.slerp(b, 1.0), b), 0.0, epsilon = 1e-6);

        let total = angle_between(a, b);
        for t in [0.25, 0.5, 0.75] {
            let q = a.slerp(b, t);
            assert_relative_eq!(q.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(angle_between(a, q), total * t, epsilon = 1e-6);
        }
    }
}

#[test]
fn angle_is_scale_invariant() {
    let mut rng = fastrand::Rng::with_seed(SEED ^ 0xa6);
    for _ in 0..ITERATIONS {
        let a = random_vector::<3>(&mut rng);
        let b = random_vector::<3>(&mut rng);
        if a.length() < 0.1 || b.length() < 0.1 {
            continue;
        }
        let expected = a.angle_to(b);

        // Squared lengths overflow (or underflow) `f64` at these scales, the lengths don't.
        let (huge, tiny) = (2f64.powi(500), 2f64.powi(-500));
        for scale in [huge, tiny] {
            assert_relative_eq!((a * scale).angle_to(b * scale), expected, epsilon = 1e-9);
        }
        assert_relative_eq!((a * huge).angle_to(b * tiny), expected, epsilon = 1e-9);
    }
}

#[test]
fn slerp_endpoints() {
    init_logger();

    let mut rng = fastrand::Rng::with_seed(SEED ^ 0x51);
    let up_to_sign = |q: Quatd, expected: Quatd| {
        let sign = if q.dot(expected) < 0.0 { -1.0 } else { 1.0 };
        assert_abs_diff_eq!(q * sign, expected, epsilon = 1e-12);
    };
    for _ in 0..ITERATIONS {
        let (_, _, a) = random_unit_quat(&mut rng);
        let (_, _, b) = random_unit_quat(&mut rng);
        // A nearby rotation, which takes the linear interpolation path.
        let (axis, _, _) = random_unit_quat(&mut rng);
        let near = (a * Quat::from_axis_angle(axis, 1e-3)).normalize();

        for b in [b, -b, near, -near] {
            assert_abs_diff_eq!(a.slerp(b, 0.0), a, epsilon = 1e-12);
            up_to_sign(a.slerp(b, 1.0), b);
        }
    }
}

#[test]
fn perspective_matches_nalgebra() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ITERATIONS {
        let fov_y = 0.2 + rng.f64() * 2.5;
        let aspect = 0.5 + rng.f64() * 2.0;
        let near = 0.01 + rng.f64();
        let far = near + 1.0 + rng.f64() * 100.0;

        let rh = Mat4d::perspective(fov_y, aspect, near, far, Handedness::Right);
        let reference = na::Perspective3::new(aspect, fov_y, near, far);
        assert_relative_eq!(rh, from_na(&reference.to_homogeneous()), epsilon = 1e-12);

        // The left-handed projection is the right-handed one with a mirrored Z axis.
        let lh = Mat4d::perspective(fov_y, aspect, near, far, Handedness::Left);
        assert_relative_eq!(
            lh,
            rh * Mat4d::from_diagonal([1.0, 1.0, -1.0, 1.0]),
            epsilon = 1e-12
        );

        for (proj, dir) in [(rh, -1.0), (lh, 1.0)] {
            let clip_near = proj * vec4(0.0, 0.0, near * dir, 1.0);
            let clip_far = proj * vec4(0.0, 0.0, far * dir, 1.0);
            assert_relative_eq!(clip_near.z() / clip_near.w(), -1.0, epsilon = 1e-9);
            assert_relative_eq!(clip_far.z() / clip_far.w(), 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn orthographic_matches_nalgebra() {
    let ortho = Mat4d::orthographic_bounds(-4.0, 2.0, -1.0, 3.0, 0.5, 20.0, Handedness::Right);
    let reference = na::Orthographic3::new(-4.0, 2.0, -1.0, 3.0, 0.5, 20.0);
    assert_relative_eq!(ortho, from_na(&reference.to_homogeneous()), epsilon = 1e-12);

    let lh = Mat4d::orthographic(vec3(-4.0, -1.0, 0.5), vec3(2.0, 3.0, 20.0), Handedness::Left);
    assert_relative_eq!(
        lh * vec4(-4.0, -1.0, 0.5, 1.0),
        vec4(-1.0, -1.0, -1.0, 1.0),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        lh * vec4(2.0, 3.0, 20.0, 1.0),
        vec4(1.0, 1.0, 1.0, 1.0),
        epsilon = 1e-12
    );
}

#[test]
fn quarter_turn_about_z() {
    let rotation = Mat3d::from_axis_angle(Vec3d::Z, FRAC_PI_2);
    assert_abs_diff_eq!(rotation * Vec3d::X, Vec3d::Y, epsilon = 1e-12);
    // As a row vector, the point is rotated the other way.
    assert_abs_diff_eq!(Vec3d::X * rotation, -Vec3d::Y, epsilon = 1e-12);
    assert_abs_diff_eq!(
        Quat::from_axis_angle(Vec3d::Z, FRAC_PI_2) * Vec3d::X,
        Vec3d::Y,
        epsilon = 1e-12
    );
}

#[test]
fn translation_composes_with_rotation() {
    let rotation = Mat3d::from_axis_angle(Vec3d::Y, FRAC_PI_2);
    let transform = rotation.with_translation(vec3(1.0, 2.0, 3.0));
    let point = transform * vec4(1.0, 0.0, 0.0, 1.0);
    assert_abs_diff_eq!(point, vec4(1.0, 2.0, 2.0, 1.0), epsilon = 1e-12);

    let inv = transform.inverse();
    assert_abs_diff_eq!(inv * point, vec4(1.0, 0.0, 0.0, 1.0), epsilon = 1e-12);
}
