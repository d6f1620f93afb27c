//! Fixed-size vectors, matrices and quaternions for graphics and geometry code.
//!
//! # Overview
//!
//! - [`Vector<T, N>`] is an `N`-dimensional vector. It supports element-wise arithmetic, scalar
//!   arithmetic (in both operand orders), and geometric operations like [`Vector::dot`],
//!   [`Vector::cross`], [`Vector::normalize`] and [`Vector::angle_to`].
//! - [`Matrix<T, R, C>`] is an `R`x`C` matrix stored in column-major order. Square matrices have a
//!   [determinant][Matrix::determinant], [minors][Matrix::minor], [cofactors][Matrix::cofactor]
//!   and an [inverse][Matrix::inverse].
//! - [`Quat<T>`] is a quaternion, mostly used to represent 3D rotations.
//! - The [`elementwise`] module lifts scalar math functions (`sin`, `sqrt`, `clamp`, ...) to
//!   vectors, with broadcasting of scalar arguments.
//!
//! Vectors are treated as column vectors: `matrix * vector` transforms `vector`, and the
//! transform builders ([`Matrix::from_axis_angle`], [`Matrix::perspective`], ...) produce matrices
//! that are meant to be used that way. `vector * matrix` treats `vector` as a row vector, which
//! is the same as transforming it with the transposed matrix.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors, further
//!   simplifying their API. With the `bytemuck` feature (enabled by default), all types can be
//!   cast to bytes and uploaded to the GPU directly.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Don't offer SIMD-specialized implementations.
//! - Put at least some effort into designing an ergonomic API that adheres to the
//!   [Rust API Guidelines].
//!
//! Approximate comparisons are provided by implementing the traits of the [`approx`] crate.
//!
//! [Rust API Guidelines]: https://rust-lang.github.io/api-guidelines/

mod approx_eq;
pub mod elementwise;
mod matrix;
mod quat;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
