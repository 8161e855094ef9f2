use std::cmp::Ordering;

use crate::comm::Communicable;

/// A value the sort can order and ship between ranks.
///
/// `SortKey` is implemented for the 8- to 64-bit integers, `usize`/`isize`,
/// the floats and `bool` out of the box. Implement it for your own key type
/// to sort by it:
///
/// * `key_cmp` must be a total order; it is used for every comparison the
///   sort makes, so it has to agree with itself across ranks.
/// * `interpolate` is an optional refinement hook. Arithmetic key types
///   override it so a splitter can be placed *between* two adjacent samples;
///   the default keeps the lower sample, which is the right behaviour for
///   keys that are ordered but not arithmetic.
pub trait SortKey: Communicable {
    /// Total order over keys.
    fn key_cmp(&self, other: &Self) -> Ordering;

    /// Pick a splitter between adjacent samples `x0` and `x1` whose
    /// cumulative counts `y0` and `y1` bracket `target` (`y0 <= target < y1`,
    /// `y0 < y1`). `x1` may order below `x0` when the sort runs descending.
    #[inline]
    fn interpolate(x0: Self, x1: Self, y0: u64, y1: u64, target: u64) -> Self {
        let _ = (x1, y0, y1, target);
        x0
    }
}
