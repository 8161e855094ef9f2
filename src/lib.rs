//! # sihsort
//!
//! sihsort is a distributed, comparison-based sample sort: it orders a
//! collection spread across many processes, none of which could hold all of
//! it alone. After a sort, rank i holds a contiguous segment of the global
//! order, every element on rank i orders at or below every element on rank
//! i + 1, and the segments are near-balanced.
//!
//! ## Usage
//!
//! ```ignore
//! use mpi::traits::*;
//! use sihsort::{MpiComm, SihSort};
//!
//! let universe = mpi::initialize().unwrap();
//! let comm = MpiComm(universe.world());
//!
//! // `local` is this rank's share of the data.
//! let sorted = local.sih_sort_unstable(&comm).unwrap();
//! ```
//!
//! Each rank passes in its local `Vec` and gets back its segment of the
//! global order. For projections, direction, comparators, a non-zero root or
//! a custom local sorter, use [`sih_sort`] with a [`SortOrder`] and a
//! [`SihConfig`]:
//!
//! ```ignore
//! use sihsort::{sih_sort, SihConfig, SortOrder};
//!
//! let order = SortOrder::by_key(|row: &Row| row.timestamp).descending();
//! let config = SihConfig::new(&comm).root(0);
//! let (sorted, stats) = sih_sort(local, &order, &config).unwrap();
//! ```
//!
//! The returned [`SortStats`] carries the splitter keys that partition the
//! global order and every rank's final element count.
//!
//! ## How it works
//!
//! Every rank sorts locally, then contributes a deterministic set of sample
//! keys. The root gathers and sorts the samples, every rank histograms them
//! against its local data, and the summed histogram tells the root where
//! each sample sits in the global order. Splitters are then interpolated
//! between the bracketing samples — between two adjacent samples the
//! cumulative distribution is close to linear, so interpolation recovers
//! most of the sampling error without extra communication. A second
//! histogram against the splitters yields exact per-destination counts, one
//! variable all-to-all moves the payload, and a final local sort finishes
//! each segment.
//!
//! The collective schedule is fixed and minimal: one gather, two broadcasts,
//! one reduction, one all-to-all, one all-reduction and one variable
//! all-to-all per sort. A single-rank communicator short-circuits to a plain
//! local sort.
//!
//! ## Sorting custom types
//!
//! Elements only need to be plain fixed-size values; ordering goes through
//! the key that a [`SortOrder`] projects out of each element. Key types
//! implement [`SortKey`]; the primitive integers and floats come with
//! interpolation-capable implementations, and an ordered-but-not-arithmetic
//! key only needs `key_cmp`:
//!
//! ```ignore
//! use sihsort::SortKey;
//!
//! impl SortKey for Timestamp {
//!     fn key_cmp(&self, other: &Self) -> std::cmp::Ordering {
//!         self.micros.cmp(&other.micros)
//!     }
//! }
//! ```
//!
//! ## Communicators
//!
//! The sort runs over anything implementing [`Collectives`]. [`MpiComm`]
//! adapts an MPI communicator (cargo feature `mpi`, on by default);
//! [`LocalComm`] wires worker threads of one process into a mesh, which is
//! how the test suite exercises multi-rank behaviour and a convenient way to
//! use the algorithm without an MPI launcher.
//!
//! ## Features
//!
//! * `multi-threaded` (default) — histogram probes run on rayon.
//! * `mpi` (default) — the `MpiComm` adapter.
//! * `harness` — builds the `basic` and `largescale` driver binaries.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

mod config;
mod histogram;
mod key;
mod key_impl;
mod linspace;
mod order;
mod pipeline;
mod sampler;
mod sih_sort;
mod sorter;
mod splitters;

#[cfg(test)]
mod test_utils;

// Public modules
pub mod comm;

// Public exports
pub use comm::local::LocalComm;
#[cfg(feature = "mpi")]
pub use comm::mpi::MpiComm;
pub use comm::{Collectives, Communicable};
pub use config::{LocalSorter, SihConfig, SortError, SortStats};
pub use key::SortKey;
pub use order::SortOrder;
pub use sih_sort::{sih_sort, SihSort};
