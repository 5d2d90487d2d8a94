use std::collections::HashMap as StdHashMap;
use std::hash::{BuildHasher, Hash};

use crate::HashMap;

/// Builds a map with a key and a value taken from every element.
///
/// When two elements produce the same key, the later element's value wins.
pub fn to_map<T, K, V, FK, FV>(
    seq: &[T],
    mut key_selector: FK,
    mut value_selector: FV,
) -> HashMap<K, V>
where
    K: Eq + Hash,
    FK: FnMut(&T) -> K,
    FV: FnMut(&T) -> V,
{
    let mut map = HashMap::with_capacity_and_hasher(seq.len(), Default::default());
    for item in seq {
        map.insert(key_selector(item), value_selector(item));
    }
    map
}

/// Turns every entry of `map` into one result element with `selector`.
///
/// The order of the result is the iteration order of `map`, which is
/// unspecified.
pub fn to_slice<K, V, S, R, F>(map: &StdHashMap<K, V, S>, mut selector: F) -> Vec<R>
where
    S: BuildHasher,
    F: FnMut(&K, &V) -> R,
{
    map.iter().map(|(key, value)| selector(key, value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_map() {
        let map = to_map(&["one", "two", "three"], |s| s.len(), |s| s.to_string());
        assert_eq!(map.len(), 2);
        assert_eq!(map[&3], "two");
        assert_eq!(map[&5], "three");
    }

    #[test]
    fn test_to_map_last_write_wins() {
        let map = to_map(&[(1, 'a'), (2, 'b'), (1, 'c')], |(k, _)| *k, |(_, v)| *v);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], 'c');
    }

    #[test]
    fn test_to_slice_from_std_map() {
        let mut map = StdHashMap::new();
        map.insert(1, "one");
        map.insert(2, "two");
        let mut result = to_slice(&map, |k, v| format!("{v}={k}"));
        result.sort();
        assert_eq!(result, vec!["one=1", "two=2"]);
    }

    #[test]
    fn test_to_slice_empty() {
        let map: HashMap<u8, u8> = HashMap::default();
        assert!(to_slice(&map, |k, v| k + v).is_empty());
    }
}
