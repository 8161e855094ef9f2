use crate::config::LocalSorter;
use crate::key::SortKey;
use crate::order::SortOrder;

/// Run the configured local pass over a slice of elements.
pub fn sort_elements<T, K, B>(v: &mut [T], order: &SortOrder<T, K, B>, sorter: &LocalSorter<T>)
where
    K: SortKey,
    B: Fn(&T) -> K + Sync,
{
    match sorter {
        LocalSorter::Unstable => v.sort_unstable_by(|a, b| order.cmp_elements(a, b)),
        LocalSorter::Stable => v.sort_by(|a, b| order.cmp_elements(a, b)),
        LocalSorter::Custom(sort) => sort(v),
    }
}

/// Sort gathered sample keys on the root. A `Custom` sorter only knows how
/// to order elements, so keys take the matching built-in strategy instead.
pub fn sort_keys<T, K, B>(keys: &mut [K], order: &SortOrder<T, K, B>, sorter: &LocalSorter<T>)
where
    K: SortKey,
    B: Fn(&T) -> K + Sync,
{
    match sorter {
        LocalSorter::Stable => keys.sort_by(|a, b| order.cmp_keys(a, b)),
        LocalSorter::Unstable | LocalSorter::Custom(_) => {
            keys.sort_unstable_by(|a, b| order.cmp_keys(a, b))
        }
    }
}
