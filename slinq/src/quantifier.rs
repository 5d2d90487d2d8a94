// Quantifiers and searches. These look at elements left to right and stop as
// soon as the answer is known.

use crate::error;

/// Returns `true` when every element satisfies `predicate`.
///
/// An empty sequence yields `false`, not the vacuous `true` of standard
/// logic: `all` is only `true` when there was at least one element to check.
///
/// Stops at the first element that fails the predicate.
pub fn all<T, F>(seq: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    if seq.is_empty() {
        return false;
    }
    seq.iter().all(|item| predicate(item))
}

/// Returns `true` when at least one element satisfies `predicate`.
///
/// Stops at the first match. An empty sequence yields `false`.
pub fn any<T, F>(seq: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    seq.iter().any(|item| predicate(item))
}

/// Counts the elements that satisfy `predicate`.
pub fn count<T, F>(seq: &[T], mut predicate: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|&item| predicate(item)).count()
}

/// Returns the first element that satisfies `predicate`.
///
/// Fails with [`error::Error::EmptySequence`] when `seq` has no elements at
/// all, and with [`error::Error::NoMatch`] when there are elements but none
/// of them match. Use `seq.first()` if you want the first element
/// regardless of the predicate.
pub fn first<T, F>(seq: &[T], mut predicate: F) -> error::Result<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    if seq.is_empty() {
        log::trace!("first: empty sequence");
        return Err(error::Error::EmptySequence);
    }
    for item in seq {
        if predicate(item) {
            return Ok(item.clone());
        }
    }
    log::trace!("first: no match among {} elements", seq.len());
    Err(error::Error::NoMatch)
}

/// Returns the only element that satisfies `predicate`.
///
/// Fails with [`error::Error::EmptySequence`] on an empty sequence and with
/// [`error::Error::MultipleMatches`] as soon as a second match is found.
///
/// When the sequence has elements but none match, this is *not* an error:
/// the result is `Ok(None)`. Note this differs from [`first`], which
/// reports [`error::Error::NoMatch`] in that situation.
pub fn single<T, F>(seq: &[T], mut predicate: F) -> error::Result<Option<T>>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    if seq.is_empty() {
        log::trace!("single: empty sequence");
        return Err(error::Error::EmptySequence);
    }
    let mut found: Option<&T> = None;
    for item in seq {
        if predicate(item) {
            if found.is_some() {
                log::trace!("single: more than one match among {} elements", seq.len());
                return Err(error::Error::MultipleMatches);
            }
            found = Some(item);
        }
    }
    Ok(found.cloned())
}
