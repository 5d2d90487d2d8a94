/// Returns the elements that satisfy `predicate`, in their original order.
///
/// Named `where_` as `where` is a Rust keyword.
pub fn where_<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|&item| predicate(item)).cloned().collect()
}

/// Transforms every element with `selector`. The result has the same length
/// and order as `seq`.
pub fn select<T, R, F>(seq: &[T], selector: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    seq.iter().map(selector).collect()
}

/// Maps every element, together with its zero-based index, to a
/// sub-sequence and concatenates the sub-sequences in order.
pub fn select_many<T, R, I, F>(seq: &[T], mut selector: F) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    F: FnMut(&T, usize) -> I,
{
    let mut result = Vec::new();
    for (i, outer) in seq.iter().enumerate() {
        result.extend(selector(outer, i));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_where_preserves_order() {
        assert_eq!(
            where_(&["xyz", "abc", "vwx", "def", "xxx"], |s| s.contains('x')),
            vec!["xyz", "vwx", "xxx"]
        );
    }

    #[test]
    fn test_where_empty() {
        let empty: [u8; 0] = [];
        assert!(where_(&empty, |_| true).is_empty());
    }

    #[test]
    fn test_select_changes_type() {
        assert_eq!(select(&[1, 22, 333], |n| n.to_string().len()), vec![1, 2, 3]);
    }

    #[test]
    fn test_select_many_passes_index() {
        let result = select_many(&['a', 'b', 'c'], |c, i| std::iter::repeat(*c).take(i));
        assert_eq!(result, vec!['b', 'c', 'c']);
    }

    #[test]
    fn test_select_many_outer_then_inner() {
        let result = select_many(&[vec![1, 2], vec![], vec![3]], |inner, _| inner.clone());
        assert_eq!(result, vec![1, 2, 3]);
    }
}
