//! Sparse edge-weight map for weighted undirected graphs.

use rustc_hash::FxHashMap;

/// Sparse map from an unordered node pair to an integer edge weight.
///
/// Keys are canonicalized with the lower node index first, so `(a, b)` and
/// `(b, a)` address the same entry. A self-pair `(i, i)` carries node `i`'s
/// own linear bias. Duplicate inserts overwrite: last write wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeWeights {
    weights: FxHashMap<(u32, u32), i64>,
}

impl EdgeWeights {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the weight for the undirected pair `(a, b)`.
    pub fn insert(&mut self, a: u32, b: u32, weight: i64) {
        self.weights.insert(canonical(a, b), weight);
    }

    /// The weight for the undirected pair `(a, b)`, if present.
    pub fn get(&self, a: u32, b: u32) -> Option<i64> {
        self.weights.get(&canonical(a, b)).copied()
    }

    /// True if a weight is defined for the pair `(a, b)`.
    pub fn contains(&self, a: u32, b: u32) -> bool {
        self.weights.contains_key(&canonical(a, b))
    }

    /// Number of stored entries (self-pairs included).
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True if no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate `((a, b), weight)` entries with `a <= b`, unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), i64)> + '_ {
        self.weights.iter().map(|(&pair, &w)| (pair, w))
    }
}

impl FromIterator<((u32, u32), i64)> for EdgeWeights {
    fn from_iter<T: IntoIterator<Item = ((u32, u32), i64)>>(iter: T) -> Self {
        let mut map = Self::new();
        for ((a, b), w) in iter {
            map.insert(a, b, w);
        }
        map
    }
}

fn canonical(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_undirected() {
        let mut map = EdgeWeights::new();
        map.insert(3, 1, 5);
        assert_eq!(map.get(1, 3), Some(5));
        assert_eq!(map.get(3, 1), Some(5));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut map = EdgeWeights::new();
        map.insert(0, 1, 5);
        map.insert(1, 0, -2);
        assert_eq!(map.get(0, 1), Some(-2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_self_pair() {
        let mut map = EdgeWeights::new();
        map.insert(2, 2, 7);
        assert!(map.contains(2, 2));
        assert_eq!(map.get(2, 2), Some(7));
    }

    #[test]
    fn test_from_iter() {
        let map: EdgeWeights = [((1, 0), 5), ((1, 2), 3)].into_iter().collect();
        assert_eq!(map.get(0, 1), Some(5));
        assert_eq!(map.get(2, 1), Some(3));
    }
}
