use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::BitAnd;
use std::thread;

use block_pseudorand::block_rand;
use rayon::prelude::*;

use crate::comm::local::LocalComm;
use crate::comm::Communicable;
use crate::config::{LocalSorter, SihConfig, SortStats};
use crate::key::SortKey;
use crate::order::SortOrder;
use crate::sih_sort::sih_sort;

/// One rank's worth of keys, uniform across the type's whole range.
pub fn uniform_inputs<T>(n: usize) -> Vec<T>
where
    T: SortKey,
{
    block_rand(n)
}

/// One rank's worth of keys where every other value is coarsened onto the
/// few values surviving `coarse_mask`. The cumulative distribution of such
/// data mixes smooth slopes with flat, duplicate-heavy steps, so splitter
/// intervals land on interpolatable gaps and degenerate ones alike.
pub fn mixed_inputs<T>(n: usize, coarse_mask: T) -> Vec<T>
where
    T: SortKey + BitAnd<Output = T>,
{
    let mut inputs: Vec<T> = block_rand(n);
    inputs
        .par_chunks_mut(2)
        .for_each(|pair| pair[0] = pair[0] & coarse_mask);
    inputs
}

/// Run one sort collectively: one worker thread per rank, each holding one
/// of `inputs`, wired through a `LocalComm` mesh. Results come back in rank
/// order.
pub fn run_mesh_opts<T, K, B, M>(
    inputs: Vec<Vec<T>>,
    make_order: M,
    root: usize,
    sorter: LocalSorter<T>,
) -> Vec<(Vec<T>, SortStats<K>)>
where
    T: Communicable,
    K: SortKey,
    B: Fn(&T) -> K + Sync,
    M: Fn() -> SortOrder<T, K, B> + Sync,
{
    thread::scope(|s| {
        let handles: Vec<_> = LocalComm::mesh(inputs.len())
            .into_iter()
            .zip(inputs)
            .map(|(comm, local)| {
                let make_order = &make_order;
                s.spawn(move || {
                    let order = make_order();
                    let config = SihConfig::new(&comm).root(root).sorter(sorter);
                    sih_sort(local, &order, &config).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}

pub fn run_mesh<T, K, B, M>(inputs: Vec<Vec<T>>, make_order: M) -> Vec<(Vec<T>, SortStats<K>)>
where
    T: Communicable,
    K: SortKey,
    B: Fn(&T) -> K + Sync,
    M: Fn() -> SortOrder<T, K, B> + Sync,
{
    run_mesh_opts(inputs, make_order, 0, LocalSorter::Unstable)
}

pub fn run_natural<T>(inputs: Vec<Vec<T>>) -> Vec<(Vec<T>, SortStats<T>)>
where
    T: SortKey,
{
    run_mesh(inputs, SortOrder::natural)
}

pub fn assert_globally_sorted<T, K, B>(outputs: &[Vec<T>], order: &SortOrder<T, K, B>)
where
    T: Copy,
    K: SortKey,
    B: Fn(&T) -> K + Sync,
{
    let all: Vec<T> = outputs.concat();
    assert!(
        all.windows(2)
            .all(|w| order.cmp_elements(&w[0], &w[1]) != Ordering::Greater),
        "concatenated outputs are not sorted"
    );
}

pub fn assert_same_elements<T>(expected: &[Vec<T>], outputs: &[Vec<T>])
where
    T: Ord + Debug + Copy,
{
    let mut a: Vec<T> = expected.concat();
    let mut b: Vec<T> = outputs.concat();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b, "outputs are not a permutation of the inputs");
}
