//! Named element accessors.
//!
//! Each accessor reads or writes an element of the backing array directly, so `v.x()` is the same
//! as `v[0]`, and `v.r()` is an alias for it.

use super::Vector;

macro_rules! accessors {
    ($n:literal: $($idx:literal => $get:ident, $get_mut:ident, $color:ident, $color_mut:ident;)+) => {
        impl<T> Vector<T, $n> {
            $(
                #[inline]
                pub fn $get(&self) -> T
                where
                    T: Copy,
                {
                    self.0[$idx]
                }

                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.0[$idx]
                }

                #[inline]
                pub fn $color(&self) -> T
                where
                    T: Copy,
                {
                    self.0[$idx]
                }

                #[inline]
                pub fn $color_mut(&mut self) -> &mut T {
                    &mut self.0[$idx]
                }
            )+
        }
    };
}

accessors!(1:
    0 => x, x_mut, r, r_mut;
);
accessors!(2:
    0 => x, x_mut, r, r_mut;
    1 => y, y_mut, g, g_mut;
);
accessors!(3:
    0 => x, x_mut, r, r_mut;
    1 => y, y_mut, g, g_mut;
    2 => z, z_mut, b, b_mut;
);
accessors!(4:
    0 => x, x_mut, r, r_mut;
    1 => y, y_mut, g, g_mut;
    2 => z, z_mut, b, b_mut;
    3 => w, w_mut, a, a_mut;
);
