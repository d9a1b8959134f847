//! Utility functions and traits for `SimpleHashMap`

use crate::SimpleHashMap;

/// Extension trait for map implementations that provides additional utility methods
pub trait HashMapExtensions {
    /// Returns true if the map holds a value for the given key
    fn contains_key(&self, key: i32) -> bool;
}

impl HashMapExtensions for SimpleHashMap {
    fn contains_key(&self, key: i32) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}

/// Creates a `SimpleHashMap` with the default configuration from key-value pairs.
///
/// Later pairs win when a key repeats.
pub fn from_pairs<I>(iter: I) -> SimpleHashMap
where
    I: IntoIterator<Item = (i32, i64)>,
{
    let mut map = SimpleHashMap::new();
    map.extend(iter);
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let map = from_pairs(vec![(1, 10), (2, 20), (3, 30), (1, 11)]);

        assert_eq!(map.get(1).unwrap(), Some(11));
        assert_eq!(map.get(2).unwrap(), Some(20));
        assert_eq!(map.get(3).unwrap(), Some(30));
        assert_eq!(map.size(), 3);
    }

    #[test]
    fn test_from_pairs_grows() {
        let map = from_pairs((0..100).map(|key| (key, i64::from(key))));

        assert_eq!(map.size(), 100);
        assert_eq!(map.capacity(), 256);
        assert_eq!(map.get(99).unwrap(), Some(99));
    }

    #[test]
    fn test_contains_key() {
        let mut map = SimpleHashMap::new();
        map.put(1, 1).unwrap();

        assert!(map.contains_key(1));
        assert!(!map.contains_key(17));
    }
}
