/// A throughput harness: uneven per-rank buffers of uniform u64 keys, timed,
/// with the splitters and final counts reported on the root.
///
/// ```text
/// mpirun -n 8 cargo run --release --bin largescale --features harness
/// ```
use std::time::Instant;

use mpi::traits::*;
use rand::Rng;
use sihsort::{sih_sort, MpiComm, SihConfig, SortOrder};

fn main() {
    let universe = mpi::initialize().unwrap();
    let world = universe.world();
    let rank = world.rank();
    let comm = MpiComm(world);

    // Deliberately uneven local sizes.
    let n = 1_000_000 + 2048 * rank as usize;
    let mut rng = rand::thread_rng();
    let local: Vec<u64> = (0..n).map(|_| rng.gen()).collect();

    let order = SortOrder::natural();
    let config = SihConfig::new(&comm);

    let start = Instant::now();
    let (sorted, stats) = sih_sort(local, &order, &config).unwrap();
    let elapsed = start.elapsed().as_millis();

    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    println!(
        "rank {}: {} in, {} out, {}ms",
        rank,
        n,
        sorted.len(),
        elapsed
    );

    if rank == 0 {
        let total: u64 = stats.num_elements.iter().sum();
        println!("total elements: {}", total);
        println!("per-rank counts: {:?}", stats.num_elements);
        println!("splitters: {:?}", stats.splitters);
    }
}
