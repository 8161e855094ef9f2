use std::cmp::Ordering;

use crate::key::SortKey;

// Interpolation walks from the bracketing sample by a ceiling-rounded share
// of the gap. The distance is computed through `abs_diff` and applied in the
// unsigned domain, so descending brackets and full-range signed spans both
// stay exact. The u128 intermediate cannot overflow for spans and counts of
// up to 64 bits each.
macro_rules! numeric_sort_key {
    ($(($t:ty, $u:ty)),* $(,)?) => {
        $(
            impl SortKey for $t {
                #[inline]
                fn key_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn interpolate(x0: Self, x1: Self, y0: u64, y1: u64, target: u64) -> Self {
                    let span = x0.abs_diff(x1) as u128;
                    let step = ((target - y0) as u128 * span).div_ceil((y1 - y0) as u128);
                    if x0 <= x1 {
                        (x0 as $u).wrapping_add(step as $u) as $t
                    } else {
                        (x0 as $u).wrapping_sub(step as $u) as $t
                    }
                }
            }
        )*
    };
}

numeric_sort_key!(
    (u8, u8),
    (u16, u16),
    (u32, u32),
    (u64, u64),
    (usize, usize),
    (i8, u8),
    (i16, u16),
    (i32, u32),
    (i64, u64),
    (isize, usize),
);

// Ordered but not arithmetic: keeps the nearest-sample default.
impl SortKey for bool {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

macro_rules! float_sort_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl SortKey for $t {
                #[inline]
                fn key_cmp(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                #[inline]
                fn interpolate(x0: Self, x1: Self, y0: u64, y1: u64, target: u64) -> Self {
                    let fraction = (target - y0) as $t / (y1 - y0) as $t;
                    x0 + fraction * (x1 - x0)
                }
            }
        )*
    };
}

float_sort_key!(f32, f64);
