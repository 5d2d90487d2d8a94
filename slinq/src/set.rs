// Set algebra. Each operation builds a hash set over one input and probes it
// with the other, so they are linear in the combined input length. The price
// is that `distinct` gives no ordering guarantee at all; sort the result if
// order matters.

use std::hash::Hash;

use crate::HashSet;

/// Returns every distinct value of `seq` exactly once.
///
/// The order of the result is unspecified. Of several equal elements, the
/// first one encountered is the one that is kept.
pub fn distinct<T>(seq: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity_and_hasher(seq.len(), Default::default());
    for item in seq {
        seen.insert(item);
    }
    seen.into_iter().cloned().collect()
}

/// Returns the elements of `first` that do not occur in `second`.
///
/// Every element of `first` is tested on its own, so duplicates in `first`
/// survive. Order follows `first`.
pub fn except<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let excluded = second.iter().collect::<HashSet<_>>();
    first
        .iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}

/// Returns the elements of `second` that also occur in `first`.
///
/// Note the direction: `first` only provides membership, while order and
/// duplicates of the result follow `second`.
pub fn intersect<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let members = first.iter().collect::<HashSet<_>>();
    second
        .iter()
        .filter(|item| members.contains(item))
        .cloned()
        .collect()
}
