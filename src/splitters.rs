use crate::key::SortKey;
use crate::order::SortOrder;

/// Choose the `parts - 1` splitter keys on the coordinating rank.
///
/// `samples` is the globally sorted sample vector and `hist` its summed
/// cumulative histogram, one slot per sample plus the global element count
/// in the tail slot. For every boundary the selector finds the last sample
/// whose cumulative count stays at or below the ideal position, then lets
/// the key type refine the splitter into the gap towards the next sample.
/// Sampling undershoots the true quantiles, and the cumulative counts are
/// close to linear between adjacent samples, so this refinement recovers
/// most of the error without another round of communication.
pub fn select_splitters<T, K, B>(
    samples: &[K],
    hist: &[u64],
    parts: usize,
    order: &SortOrder<T, K, B>,
) -> Vec<K>
where
    K: SortKey,
    B: Fn(&T) -> K + Sync,
{
    let k_total = samples.len();
    debug_assert_eq!(hist.len(), k_total + 1);
    let total = hist[k_total];

    let mut splitters = Vec::with_capacity(parts - 1);
    for i in 1..parts {
        let target = ideal_position(i as u64, total, parts as u64);
        // One past the last sample whose cumulative count is <= target.
        let c = hist[..k_total].partition_point(|&h| h <= target);
        let splitter = if c == 0 {
            // The target sits below every sample; the first sample is the
            // closest boundary available.
            samples[0]
        } else if c < k_total && order.interpolates() {
            debug_assert!(hist[c - 1] <= target && target < hist[c]);
            K::interpolate(samples[c - 1], samples[c], hist[c - 1], hist[c], target)
        } else {
            samples[c - 1]
        };
        splitters.push(splitter);
    }

    debug_assert!(splitters
        .windows(2)
        .all(|w| order.cmp_keys(&w[0], &w[1]) != std::cmp::Ordering::Greater));
    splitters
}

/// round(i * total / parts) with halves rounded up, in 128-bit arithmetic so
/// the product cannot overflow for any 64-bit operand.
#[inline]
fn ideal_position(i: u64, total: u64, parts: u64) -> u64 {
    ((2 * i as u128 * total as u128 + parts as u128) / (2 * parts as u128)) as u64
}
