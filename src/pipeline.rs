use crate::comm::{Collectives, Communicable};
use crate::config::{SihConfig, SortError, SortStats};
use crate::histogram;
use crate::key::SortKey;
use crate::linspace::ceil_log2;
use crate::order::SortOrder;
use crate::sampler;
use crate::sorter;
use crate::splitters;

macro_rules! profile {
    ($($arg:tt)*) => {
        #[cfg(feature = "work_profiles")]
        println!($($arg)*);
    };
}

/// The distributed pipeline. All ranks must enter together; the collective
/// schedule is fixed — Gather, Bcast, Reduce, Bcast, Alltoall, Allreduce,
/// Alltoallv, each exactly once — and the two local sorts bracket it.
pub fn distributed_sort<T, K, B, C>(
    mut v: Vec<T>,
    order: &SortOrder<T, K, B>,
    config: &SihConfig<'_, C, T>,
) -> Result<(Vec<T>, SortStats<K>), SortError>
where
    T: Communicable,
    K: SortKey,
    B: Fn(&T) -> K + Sync,
    C: Collectives,
{
    let comm = config.comm;
    let parts = comm.size();
    let rank = comm.rank();
    let root = config.root;

    if root >= parts {
        return Err(SortError::RootOutOfRange { root, size: parts });
    }
    if v.is_empty() {
        return Err(SortError::EmptyLocal { rank });
    }

    sorter::sort_elements(&mut v, order, &config.sorter);

    if parts == 1 {
        let num_elements = vec![v.len() as u64];
        return Ok((
            v,
            SortStats {
                splitters: Vec::new(),
                num_elements,
            },
        ));
    }

    let is_root = rank == root;
    let local_len = v.len() as u64;
    let k_local = 2 * parts * ceil_log2(parts) as usize;
    let k_total = k_local * parts;

    profile!("({}) SAMPLE {}", rank, k_local);
    let local_samples = sampler::extract_samples(&v, order, k_local);

    // Gather every rank's contribution on the root and sort them there, so
    // the broadcast hands every rank the identical sorted sample vector.
    let mut samples = vec![local_samples[0]; k_total];
    comm.gather_into(
        root,
        &local_samples,
        is_root.then_some(&mut samples[..]),
    );
    if is_root {
        sorter::sort_keys(&mut samples, order, &config.sorter);
    }
    comm.broadcast_into(root, &mut samples[..]);

    // Local rank of every sample, with the local element count riding in the
    // tail slot so the reduction also delivers the global count to the root.
    profile!("({}) HISTOGRAM {}", rank, k_total);
    let mut sample_hist = histogram::probe_counts(&v, &samples, order);
    sample_hist.push(local_len);
    let mut summed_sample_hist = vec![0u64; if is_root { k_total + 1 } else { 0 }];
    comm.reduce_sum_into(
        root,
        &sample_hist,
        is_root.then_some(&mut summed_sample_hist[..]),
    );
    drop(sample_hist);

    let mut splitters = if is_root {
        splitters::select_splitters(&samples, &summed_sample_hist, parts, order)
    } else {
        vec![local_samples[0]; parts - 1]
    };
    comm.broadcast_into(root, &mut splitters[..]);
    drop(samples);

    // Second histogram pass, against the splitters this time. The root seeds
    // the tail slot with the global count and everyone else with zero, so
    // the later all-reduction carries it to every rank unchanged.
    profile!("({}) HISTOGRAM {}", rank, parts - 1);
    let mut splitter_hist = histogram::probe_counts(&v, &splitters, order);
    splitter_hist.push(if is_root { summed_sample_hist[k_total] } else { 0 });

    let send_counts = histogram::bucket_counts(&splitter_hist[..parts - 1], local_len);
    let mut recv_counts = vec![0u64; parts];
    comm.all_to_all_into(&send_counts, &mut recv_counts);

    let mut summed_splitter_hist = vec![0u64; parts];
    comm.all_reduce_sum_into(&splitter_hist, &mut summed_splitter_hist);
    let total = summed_splitter_hist[parts - 1];
    let num_elements = histogram::bucket_counts(&summed_splitter_hist[..parts - 1], total);

    // The incoming counts and the reduced histogram derive this rank's final
    // count independently; they must agree.
    let incoming: u64 = recv_counts.iter().sum();
    debug_assert_eq!(incoming, num_elements[rank]);

    profile!("({}) EXCHANGE {}", rank, incoming);
    let mut received = vec![v[0]; incoming as usize];
    comm.all_to_all_varcount_into(&v, &send_counts, &mut received, &recv_counts);
    drop(v);

    // The received buffer is a concatenation of pre-sorted runs, one per
    // source rank; a plain comparison sort on it is simple and fast enough
    // at this size.
    sorter::sort_elements(&mut received, order, &config.sorter);

    Ok((
        received,
        SortStats {
            splitters,
            num_elements,
        },
    ))
}
