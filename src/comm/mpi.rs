use mpi::collective::SystemOperation;
use mpi::datatype::{Partition, PartitionMut};
use mpi::topology::Rank;
use mpi::traits::*;
use mpi::Count;

use crate::comm::{Collectives, Communicable};

/// Adapter running the sort's collectives over an MPI communicator.
///
/// ```ignore
/// let universe = mpi::initialize().unwrap();
/// let comm = MpiComm(universe.world());
/// ```
///
/// Counts are converted to the MPI `Count` type, so per-destination payloads
/// must stay within its range. Transport failures follow the communicator's
/// MPI error handler (the default handler aborts the job); the adapter adds
/// no recovery of its own.
pub struct MpiComm<C>(pub C);

fn displacements(counts: &[Count]) -> Vec<Count> {
    counts
        .iter()
        .scan(0, |acc, &c| {
            let d = *acc;
            *acc += c;
            Some(d)
        })
        .collect()
}

impl<C: Communicator> Collectives for MpiComm<C> {
    fn rank(&self) -> usize {
        self.0.rank() as usize
    }

    fn size(&self) -> usize {
        self.0.size() as usize
    }

    fn gather_into<K: Communicable>(&self, root: usize, send: &[K], recv: Option<&mut [K]>) {
        let root_process = self.0.process_at_rank(root as Rank);
        match recv {
            Some(recv) => root_process.gather_into_root(send, recv),
            None => root_process.gather_into(send),
        }
    }

    fn broadcast_into<K: Communicable>(&self, root: usize, buf: &mut [K]) {
        self.0.process_at_rank(root as Rank).broadcast_into(buf);
    }

    fn reduce_sum_into(&self, root: usize, send: &[u64], recv: Option<&mut [u64]>) {
        let root_process = self.0.process_at_rank(root as Rank);
        match recv {
            Some(recv) => root_process.reduce_into_root(send, recv, SystemOperation::sum()),
            None => root_process.reduce_into(send, SystemOperation::sum()),
        }
    }

    fn all_reduce_sum_into(&self, send: &[u64], recv: &mut [u64]) {
        self.0.all_reduce_into(send, recv, SystemOperation::sum());
    }

    fn all_to_all_into(&self, send: &[u64], recv: &mut [u64]) {
        self.0.all_to_all_into(send, recv);
    }

    fn all_to_all_varcount_into<T: Communicable>(
        &self,
        send: &[T],
        send_counts: &[u64],
        recv: &mut [T],
        recv_counts: &[u64],
    ) {
        let send_counts: Vec<Count> = send_counts.iter().map(|&c| c as Count).collect();
        let send_displs = displacements(&send_counts);
        let recv_counts: Vec<Count> = recv_counts.iter().map(|&c| c as Count).collect();
        let recv_displs = displacements(&recv_counts);

        let send_partition = Partition::new(send, &send_counts[..], &send_displs[..]);
        let mut recv_partition = PartitionMut::new(recv, &recv_counts[..], &recv_displs[..]);
        self.0
            .all_to_all_varcount_into(&send_partition, &mut recv_partition);
    }
}
