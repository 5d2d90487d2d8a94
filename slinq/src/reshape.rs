use crate::error;

/// Folds `seq` from left to right, starting with `initial`.
///
/// Returns `initial` unchanged if `seq` is empty.
pub fn aggregate<T, A, F>(seq: &[T], initial: A, accumulator: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    seq.iter().fold(initial, accumulator)
}

/// Creates a sequence holding `count` clones of `value`.
pub fn repeat<T>(value: T, count: usize) -> Vec<T>
where
    T: Clone,
{
    vec![value; count]
}

/// Returns the elements of `seq` in reverse order.
pub fn reverse<T>(seq: &[T]) -> Vec<T>
where
    T: Clone,
{
    seq.iter().rev().cloned().collect()
}

/// Splits `seq` into consecutive chunks of `size` elements.
///
/// The last chunk is shorter if `seq.len()` is not a multiple of `size`, so
/// there are `ceil(seq.len() / size)` chunks. An empty `seq` gives no
/// chunks.
///
/// A `size` of zero fails with [`error::Error::InvalidParameter`].
pub fn chunk<T>(seq: &[T], size: usize) -> error::Result<Vec<Vec<T>>>
where
    T: Clone,
{
    if size == 0 {
        log::trace!("chunk: size 0 for {} elements", seq.len());
        return Err(error::Error::InvalidParameter);
    }
    Ok(seq.chunks(size).map(|chunk| chunk.to_vec()).collect())
}

/// Combines the elements of `first` and `second` pairwise with `selector`.
///
/// Stops at the end of the shorter sequence; the remaining elements of the
/// longer one are ignored.
pub fn zip<A, B, R, F>(first: &[A], second: &[B], mut selector: F) -> Vec<R>
where
    F: FnMut(&A, &B) -> R,
{
    first
        .iter()
        .zip(second)
        .map(|(a, b)| selector(a, b))
        .collect()
}
