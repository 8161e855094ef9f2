pub mod local;
#[cfg(feature = "mpi")]
pub mod mpi;

/// Marker for types that can travel between ranks: plain fixed-size values
/// with a wire representation the transport understands.
#[cfg(feature = "mpi")]
pub trait Communicable: ::mpi::traits::Equivalence + Copy + Send + Sync + 'static {}
#[cfg(feature = "mpi")]
impl<T> Communicable for T where T: ::mpi::traits::Equivalence + Copy + Send + Sync + 'static {}

#[cfg(not(feature = "mpi"))]
pub trait Communicable: Copy + Send + Sync + 'static {}
#[cfg(not(feature = "mpi"))]
impl<T> Communicable for T where T: Copy + Send + Sync + 'static {}

/// The collective operations the sort consumes, in the shape it consumes them.
///
/// Every method is collective: all ranks of the communicator must call it, in
/// the same order, with consistent arguments. The sort issues exactly one
/// gather, two broadcasts, one reduction, one stride-1 all-to-all, one
/// all-reduction and one variable-count all-to-all per multi-rank call, in
/// that order, and nothing else.
///
/// Two implementations ship with the crate: [`MpiComm`](mpi::MpiComm), a thin
/// adapter over an MPI communicator, and [`LocalComm`](local::LocalComm), an
/// in-process mesh of worker threads.
pub trait Collectives {
    /// This process' identity within the communicator, in `0..size()`.
    fn rank(&self) -> usize;

    /// Number of participating processes.
    fn size(&self) -> usize;

    /// Fixed-stride gather onto `root`.
    ///
    /// Every rank contributes the same number of items. On `root`, `recv`
    /// must be `Some` slice of `size() * send.len()` slots and receives rank
    /// i's contribution at offset `i * send.len()`; on every other rank
    /// `recv` is `None`.
    fn gather_into<K: Communicable>(&self, root: usize, send: &[K], recv: Option<&mut [K]>);

    /// In-place broadcast of `buf` from `root` to every rank.
    fn broadcast_into<K: Communicable>(&self, root: usize, buf: &mut [K]);

    /// Element-wise sum reduction onto `root`. `recv` is `Some` on the root
    /// only, with the same length as `send`.
    fn reduce_sum_into(&self, root: usize, send: &[u64], recv: Option<&mut [u64]>);

    /// Element-wise sum reduction with the result delivered to every rank.
    fn all_reduce_sum_into(&self, send: &[u64], recv: &mut [u64]);

    /// Stride-1 all-to-all: slot j of `send` is delivered to rank j, and slot
    /// i of `recv` is what rank i addressed to this rank. Both slices span
    /// `size()` slots.
    fn all_to_all_into(&self, send: &[u64], recv: &mut [u64]);

    /// Variable-count all-to-all of payload items. `send` is a concatenation
    /// of `size()` runs of `send_counts[j]` items, in rank order; `recv` is
    /// laid out the same way under `recv_counts` and must span their sum.
    fn all_to_all_varcount_into<T: Communicable>(
        &self,
        send: &[T],
        send_counts: &[u64],
        recv: &mut [T],
        recv_counts: &[u64],
    );
}
