use thiserror::Error;

use crate::comm::Collectives;

/// The local sorting pass applied to the input array and to the received
/// buffer after the exchange.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LocalSorter<T> {
    /// `slice::sort_unstable_by` under the active order. The default.
    Unstable,
    /// `slice::sort_by`, for callers who want the local passes stable.
    Stable,
    /// A user-supplied sorter. It must leave the slice ordered exactly as
    /// the `SortOrder` given to the sort call would.
    Custom(fn(&mut [T])),
}

impl<T> Default for LocalSorter<T> {
    fn default() -> Self {
        LocalSorter::Unstable
    }
}

/// Per-call configuration: the communicator, the coordinating rank and the
/// local sorting pass.
pub struct SihConfig<'c, C, T> {
    pub comm: &'c C,
    pub root: usize,
    pub sorter: LocalSorter<T>,
}

impl<'c, C: Collectives, T> SihConfig<'c, C, T> {
    /// Configuration with rank 0 coordinating and the default local sorter.
    pub fn new(comm: &'c C) -> Self {
        SihConfig {
            comm,
            root: 0,
            sorter: LocalSorter::default(),
        }
    }

    /// Let `root` coordinate the sample and splitter selection.
    pub fn root(mut self, root: usize) -> Self {
        self.root = root;
        self
    }

    /// Use `sorter` for the two local sorting passes.
    pub fn sorter(mut self, sorter: LocalSorter<T>) -> Self {
        self.sorter = sorter;
        self
    }
}

/// What the sort decided: the splitter keys that partition the global order,
/// and the number of elements every rank ended up with.
#[derive(Clone, Debug, PartialEq)]
pub struct SortStats<K> {
    /// The `size - 1` keys separating consecutive ranks' segments, sorted
    /// under the active order. Empty on a single-rank communicator.
    pub splitters: Vec<K>,
    /// Post-sort element count of every rank, indexed by rank.
    pub num_elements: Vec<u64>,
}

/// Argument errors raised before any collective is entered.
///
/// These are preconditions: a rank that fails one returns the error without
/// communicating, so the caller must guarantee them on every rank to avoid
/// stranding the peers in a collective.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("rank {rank}: local array is empty; every rank must contribute at least one element")]
    EmptyLocal { rank: usize },
    #[error("root rank {root} does not exist in a communicator of size {size}")]
    RootOutOfRange { root: usize, size: usize },
}
