use crate::comm::{Collectives, Communicable};
use crate::config::{SihConfig, SortError, SortStats};
use crate::key::SortKey;
use crate::order::SortOrder;
use crate::pipeline;

/// Sort a collection that is spread across the ranks of a communicator.
///
/// Every rank calls this collectively with its local slice of the data, the
/// same configuration and a consistent order. On return, rank i holds a
/// contiguous segment of the global sorted sequence, and every element on
/// rank i orders at or below every element on rank i + 1. The local input is
/// consumed; the returned buffer usually has a different length (segments
/// are near-balanced, to within one splitter interval).
///
/// Along with the sorted segment the call returns [`SortStats`]: the chosen
/// splitter keys and every rank's final element count.
///
/// Every rank must contribute at least one element, and all ranks must agree
/// on the communicator, root and order — mismatches between ranks cannot be
/// detected from inside the call and will deadlock or garble the exchange.
pub fn sih_sort<T, K, B, C>(
    v: Vec<T>,
    order: &SortOrder<T, K, B>,
    config: &SihConfig<'_, C, T>,
) -> Result<(Vec<T>, SortStats<K>), SortError>
where
    T: Communicable,
    K: SortKey,
    B: Fn(&T) -> K + Sync,
    C: Collectives,
{
    pipeline::distributed_sort(v, order, config)
}

/// One-call distributed sorting for collections of naturally ordered keys.
pub trait SihSort<T: Communicable>: Sized {
    /// Sort the distributed collection under the key type's own ascending
    /// order, with rank 0 coordinating.
    ///
    /// ```
    /// use sihsort::{LocalComm, SihSort};
    ///
    /// let outputs: Vec<Vec<u32>> = std::thread::scope(|s| {
    ///     let handles: Vec<_> = LocalComm::mesh(2)
    ///         .into_iter()
    ///         .zip([vec![5_u32, 1, 9], vec![4, 2, 8]])
    ///         .map(|(comm, local)| s.spawn(move || local.sih_sort_unstable(&comm).unwrap()))
    ///         .collect();
    ///     handles.into_iter().map(|h| h.join().unwrap()).collect()
    /// });
    ///
    /// assert_eq!(outputs.concat(), [1, 2, 4, 5, 8, 9]);
    /// ```
    fn sih_sort_unstable<C: Collectives>(self, comm: &C) -> Result<Vec<T>, SortError>;
}

impl<T: SortKey> SihSort<T> for Vec<T> {
    fn sih_sort_unstable<C: Collectives>(self, comm: &C) -> Result<Vec<T>, SortError> {
        let order = SortOrder::natural();
        let config = SihConfig::new(comm);
        sih_sort(self, &order, &config).map(|(v, _)| v)
    }
}
