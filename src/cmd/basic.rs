/// A minimal driver: every rank fills a small buffer with random integers,
/// sorts collectively and prints its segment.
///
/// ```text
/// mpirun -n 4 cargo run --bin basic --features harness
/// ```
use mpi::traits::*;
use rand::Rng;
use sihsort::{MpiComm, SihSort};

fn main() {
    let universe = mpi::initialize().unwrap();
    let world = universe.world();
    let rank = world.rank();
    let comm = MpiComm(world);

    let mut rng = rand::thread_rng();
    let local: Vec<i64> = (0..16).map(|_| rng.gen_range(-100..=100)).collect();
    println!("rank {} input:  {:?}", rank, local);

    let sorted = local.sih_sort_unstable(&comm).unwrap();
    println!("rank {} output: {:?}", rank, sorted);

    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
}
