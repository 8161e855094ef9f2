use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use crate::comm::{Collectives, Communicable};

type Message = Box<dyn Any + Send>;

/// Number of times each collective has been entered by one rank.
#[derive(Default)]
pub struct CollectiveTally {
    pub gather: AtomicU64,
    pub broadcast: AtomicU64,
    pub reduce: AtomicU64,
    pub all_reduce: AtomicU64,
    pub all_to_all: AtomicU64,
    pub all_to_all_varcount: AtomicU64,
}

impl CollectiveTally {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.gather.load(Ordering::Relaxed)
            + self.broadcast.load(Ordering::Relaxed)
            + self.reduce.load(Ordering::Relaxed)
            + self.all_reduce.load(Ordering::Relaxed)
            + self.all_to_all.load(Ordering::Relaxed)
            + self.all_to_all_varcount.load(Ordering::Relaxed)
    }
}

/// An in-process communicator: one `LocalComm` per worker thread, wired into
/// a full mesh of channels.
///
/// [`LocalComm::mesh`] builds all the endpoints for a communicator of a given
/// size; hand one endpoint to each thread and the threads can sort together
/// exactly as MPI ranks would. Message passing uses unbounded channels, so a
/// collective never deadlocks as long as every endpoint keeps calling the
/// collectives in the same order.
pub struct LocalComm {
    rank: usize,
    size: usize,
    to: Vec<Sender<Message>>,
    from: Vec<Receiver<Message>>,
    tally: Arc<CollectiveTally>,
}

impl LocalComm {
    /// Build all `size` endpoints of a fully-connected communicator. The
    /// endpoint at index i is rank i.
    pub fn mesh(size: usize) -> Vec<LocalComm> {
        assert!(size >= 1, "a communicator needs at least one rank");

        let mut txs: Vec<Vec<Option<Sender<Message>>>> = Vec::with_capacity(size);
        let mut rxs: Vec<Vec<Option<Receiver<Message>>>> = Vec::with_capacity(size);
        for _ in 0..size {
            let mut tx_row = Vec::with_capacity(size);
            let mut rx_row = Vec::with_capacity(size);
            for _ in 0..size {
                let (tx, rx) = channel();
                tx_row.push(Some(tx));
                rx_row.push(Some(rx));
            }
            txs.push(tx_row);
            rxs.push(rx_row);
        }

        (0..size)
            .map(|rank| LocalComm {
                rank,
                size,
                to: (0..size).map(|j| txs[rank][j].take().unwrap()).collect(),
                from: (0..size).map(|i| rxs[i][rank].take().unwrap()).collect(),
                tally: Arc::new(CollectiveTally::default()),
            })
            .collect()
    }

    /// This endpoint's collective counters. Clone the handle before moving
    /// the endpoint into its worker thread.
    pub fn tally(&self) -> Arc<CollectiveTally> {
        Arc::clone(&self.tally)
    }

    fn post<M: Any + Send>(&self, dst: usize, msg: M) {
        self.to[dst]
            .send(Box::new(msg))
            .expect("peer endpoint dropped mid-collective");
    }

    fn take<M: Any + Send>(&self, src: usize) -> M {
        let msg = self
            .from[src]
            .recv()
            .expect("peer endpoint dropped mid-collective");
        *msg.downcast::<M>()
            .expect("ranks disagree on the collective schedule")
    }
}

impl Collectives for LocalComm {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn gather_into<K: Communicable>(&self, root: usize, send: &[K], recv: Option<&mut [K]>) {
        CollectiveTally::bump(&self.tally.gather);
        self.post(root, send.to_vec());
        if self.rank == root {
            let recv = recv.expect("gather root must supply a receive buffer");
            let stride = send.len();
            for i in 0..self.size {
                let block: Vec<K> = self.take(i);
                recv[i * stride..(i + 1) * stride].copy_from_slice(&block);
            }
        }
    }

    fn broadcast_into<K: Communicable>(&self, root: usize, buf: &mut [K]) {
        CollectiveTally::bump(&self.tally.broadcast);
        if self.rank == root {
            for j in 0..self.size {
                self.post(j, buf.to_vec());
            }
        }
        let block: Vec<K> = self.take(root);
        buf.copy_from_slice(&block);
    }

    fn reduce_sum_into(&self, root: usize, send: &[u64], recv: Option<&mut [u64]>) {
        CollectiveTally::bump(&self.tally.reduce);
        self.post(root, send.to_vec());
        if self.rank == root {
            let recv = recv.expect("reduce root must supply a receive buffer");
            recv.fill(0);
            for i in 0..self.size {
                let block: Vec<u64> = self.take(i);
                for (acc, v) in recv.iter_mut().zip(block) {
                    *acc += v;
                }
            }
        }
    }

    fn all_reduce_sum_into(&self, send: &[u64], recv: &mut [u64]) {
        CollectiveTally::bump(&self.tally.all_reduce);
        // Reduce onto rank 0, then fan back out over the same mesh.
        self.post(0, send.to_vec());
        if self.rank == 0 {
            let mut acc = vec![0u64; send.len()];
            for i in 0..self.size {
                let block: Vec<u64> = self.take(i);
                for (a, v) in acc.iter_mut().zip(block) {
                    *a += v;
                }
            }
            for j in 0..self.size {
                self.post(j, acc.clone());
            }
        }
        let block: Vec<u64> = self.take(0);
        recv.copy_from_slice(&block);
    }

    fn all_to_all_into(&self, send: &[u64], recv: &mut [u64]) {
        CollectiveTally::bump(&self.tally.all_to_all);
        for j in 0..self.size {
            self.post(j, send[j]);
        }
        for (i, slot) in recv.iter_mut().enumerate() {
            *slot = self.take::<u64>(i);
        }
    }

    fn all_to_all_varcount_into<T: Communicable>(
        &self,
        send: &[T],
        send_counts: &[u64],
        recv: &mut [T],
        recv_counts: &[u64],
    ) {
        CollectiveTally::bump(&self.tally.all_to_all_varcount);
        let mut offset = 0;
        for (j, &count) in send_counts.iter().enumerate() {
            let count = count as usize;
            self.post(j, send[offset..offset + count].to_vec());
            offset += count;
        }
        let mut offset = 0;
        for (i, &count) in recv_counts.iter().enumerate() {
            let count = count as usize;
            let block: Vec<T> = self.take(i);
            debug_assert_eq!(block.len(), count);
            recv[offset..offset + count].copy_from_slice(&block);
            offset += count;
        }
    }
}
