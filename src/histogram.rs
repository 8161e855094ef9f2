use std::cmp::Ordering;

#[cfg(feature = "multi-threaded")]
use rayon::prelude::*;

use crate::key::SortKey;
use crate::order::SortOrder;

/// For every probe, the number of elements of the sorted slice `v` whose key
/// does not order above the probe. Probes are independent, so they are
/// binary-searched in parallel when the `multi-threaded` feature is on.
pub fn probe_counts<T, K, B>(v: &[T], probes: &[K], order: &SortOrder<T, K, B>) -> Vec<u64>
where
    T: Sync,
    K: SortKey,
    B: Fn(&T) -> K + Sync,
{
    #[cfg(feature = "multi-threaded")]
    {
        probes
            .par_iter()
            .map(|probe| elements_not_above(v, probe, order))
            .collect()
    }

    #[cfg(not(feature = "multi-threaded"))]
    {
        probes
            .iter()
            .map(|probe| elements_not_above(v, probe, order))
            .collect()
    }
}

#[inline]
fn elements_not_above<T, K, B>(v: &[T], probe: &K, order: &SortOrder<T, K, B>) -> u64
where
    K: SortKey,
    B: Fn(&T) -> K + Sync,
{
    v.partition_point(|element| order.cmp_keys(&order.project(element), probe) != Ordering::Greater)
        as u64
}

/// First-difference of a cumulative histogram: bucket k receives the
/// elements between probes k-1 and k, and the bucket past the last probe
/// receives the remainder up to `total`. The histogram is monotone because
/// the probes are sorted, so every count is non-negative and they sum to
/// `total`.
pub fn bucket_counts(cumulative: &[u64], total: u64) -> Vec<u64> {
    let mut counts = Vec::with_capacity(cumulative.len() + 1);
    let mut previous = 0;
    for &c in cumulative {
        debug_assert!(previous <= c && c <= total);
        counts.push(c - previous);
        previous = c;
    }
    counts.push(total - previous);
    counts
}

#[cfg(test)]
mod tests {
    use super::{bucket_counts, probe_counts};
    use crate::order::SortOrder;

    #[test]
    fn counts_are_ranks_in_the_sorted_slice() {
        let v = vec![10u32, 20, 20, 30, 40];
        let order = SortOrder::natural();
        let counts = probe_counts(&v, &[5, 10, 20, 35, 40, 99], &order);
        assert_eq!(counts, [0, 1, 3, 4, 5, 5]);
    }

    #[test]
    fn counts_follow_a_descending_order() {
        let v = vec![40u32, 30, 20, 10];
        let order = SortOrder::<u32, u32>::natural().descending();
        let counts = probe_counts(&v, &[40, 25, 10], &order);
        assert_eq!(counts, [1, 2, 4]);
    }

    #[test]
    fn counts_use_projected_keys() {
        let v = vec![0x0001_0000_0000u64, 0x0002_0000_0000, 0x0003_0000_0000];
        let order = SortOrder::by_key(|packed: &u64| (packed >> 32) as u32);
        let counts = probe_counts(&v, &[2], &order);
        assert_eq!(counts, [2]);
    }

    #[test]
    fn buckets_are_first_differences() {
        assert_eq!(bucket_counts(&[3, 7, 7], 10), [3, 4, 0, 3]);
        assert_eq!(bucket_counts(&[], 5), [5]);
        assert_eq!(bucket_counts(&[0, 0], 4), [0, 0, 4]);
    }
}
