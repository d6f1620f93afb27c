//! Approximate equality via the [`approx`] traits.
//!
//! Compound types are considered equal if all of their elements are, using the same tolerance for
//! every element.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Quat, Vector};

macro_rules! approx_impls {
    ($($ty:ident<T $(, const $c:ident)*> => |$this:ident| $elems:expr;)+) => {
        $(
            impl<T $(, const $c: usize)*> AbsDiffEq for $ty<T $(, $c)*>
            where
                T: AbsDiffEq,
                T::Epsilon: Copy,
            {
                type Epsilon = T::Epsilon;

                fn default_epsilon() -> Self::Epsilon {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    let lhs = { let $this = self; $elems };
                    let rhs = { let $this = other; $elems };
                    lhs.iter()
                        .zip(rhs)
                        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
                }
            }

            impl<T $(, const $c: usize)*> RelativeEq for $ty<T $(, $c)*>
            where
                T: RelativeEq,
                T::Epsilon: Copy,
            {
                fn default_max_relative() -> Self::Epsilon {
                    T::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: Self::Epsilon,
                    max_relative: Self::Epsilon,
                ) -> bool {
                    let lhs = { let $this = self; $elems };
                    let rhs = { let $this = other; $elems };
                    lhs.iter()
                        .zip(rhs)
                        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
                }
            }

            impl<T $(, const $c: usize)*> UlpsEq for $ty<T $(, $c)*>
            where
                T: UlpsEq,
                T::Epsilon: Copy,
            {
                fn default_max_ulps() -> u32 {
                    T::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                    let lhs = { let $this = self; $elems };
                    let rhs = { let $this = other; $elems };
                    lhs.iter()
                        .zip(rhs)
                        .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
                }
            }
        )+
    };
}

approx_impls! {
    Vector<T, const N> => |v| v.as_slice();
    Matrix<T, const R, const C> => |m| m.as_slice();
    Quat<T> => |q| q.as_vec().as_slice();
}

#[cfg(test)]
mod tests {
    use approx::{
        abs_diff_eq, abs_diff_ne, assert_relative_eq, assert_relative_ne, assert_ulps_eq,
        relative_eq,
    };

    use crate::{vec2, vec3, Mat2f, Matrix, Quat};

    #[test]
    fn vector() {
        assert!(abs_diff_eq!(vec2(1.0, 2.0), vec2(1.05, 1.95), epsilon = 0.1));
        assert!(abs_diff_ne!(vec2(1.0, 2.0), vec2(1.05, 1.8), epsilon = 0.1));
        assert_relative_eq!(vec3(1.0f32, 2.0, 3.0), vec3(1.0, 2.0, 3.0 + 1e-7));
        assert_relative_ne!(vec3(1.0f32, 2.0, 3.0), vec3(1.0, 2.0, 3.1));
        assert_ulps_eq!(vec2(0.1 + 0.2, 1.0), vec2(0.3, 1.0));
    }

    #[test]
    fn matrix() {
        let a = Matrix::from_rows([[1.0, 0.0], [0.0, 1.0]]);
        let b = Matrix::from_rows([[1.0, 1e-9], [0.0, 1.0]]);
        assert!(abs_diff_eq!(a, b, epsilon = 1e-6));
        assert!(!abs_diff_eq!(a, b * 1e6, epsilon = 1e-6));
        assert_ulps_eq!(Mat2f::IDENTITY * 0.1 * 3.0, Mat2f::IDENTITY * 0.3);
    }

    #[test]
    fn quat() {
        let q = Quat::new(0.0, 0.0, 0.0, 1.0);
        assert!(relative_eq!(q, Quat::new(1e-20, 0.0, 0.0, 1.0)));
        assert!(!relative_eq!(q, Quat::new(0.0, 0.0, 0.0, -1.0)));
    }
}
