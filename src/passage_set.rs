use crate::grid::{wall_key, WallKey};

use fnv::FnvHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::iter::FromIterator;

/// The walls that have been knocked down. Lookups are insensitive to the order of the two cells.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PassageSet {
    keys: FnvHashSet<WallKey>,
}

impl PassageSet {
    pub fn new() -> Self {
        PassageSet {
            keys: FnvHashSet::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PassageSet {
            keys: FnvHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns true if the wall was not already open.
    pub fn insert(&mut self, a: usize, b: usize) -> bool {
        self.keys.insert(wall_key(a, b))
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.keys.contains(&wall_key(a, b))
    }

    pub fn contains_key(&self, key: &WallKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iteration order is unspecified; use `sorted_keys` for anything that must be stable.
    pub fn iter(&self) -> impl Iterator<Item = &WallKey> {
        self.keys.iter()
    }

    pub fn sorted_keys(&self) -> Vec<WallKey> {
        let mut keys: Vec<_> = self.keys.iter().cloned().collect();
        keys.sort_unstable();

        keys
    }
}

impl FromIterator<(usize, usize)> for PassageSet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut set = PassageSet::new();
        for (a, b) in iter {
            set.insert(a, b);
        }

        set
    }
}

impl Serialize for PassageSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sorted_keys().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PassageSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keys = Vec::<WallKey>::deserialize(deserializer)?;

        Ok(keys.into_iter().map(|k| k.cells()).collect())
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_argument_order() {
        let mut set = PassageSet::new();

        assert!(set.insert(7, 2));
        assert!(!set.insert(2, 7));
        assert!(set.contains(2, 7));
        assert!(set.contains(7, 2));
        assert!(set.contains_key(&wall_key(2, 7)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_sorted_keys_are_canonical() {
        let set: PassageSet = vec![(5, 4), (1, 0), (3, 1)].into_iter().collect();
        let keys: Vec<_> = set.sorted_keys().iter().map(|k| k.cells()).collect();

        assert_eq!(keys, vec![(0, 1), (1, 3), (4, 5)]);
    }

    #[test]
    fn test_ron_round_trip_keeps_keys() {
        let set: PassageSet = vec![(0, 1), (2, 1)].into_iter().collect();
        let text = ron::ser::to_string(&set).unwrap();
        let back: PassageSet = ron::de::from_str(&text).unwrap();

        assert_eq!(back, set);
    }
}
