#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type SizeMap<K> = HashMap<K, f64>;
#[cfg(not(feature = "std"))]
type SizeMap<K> = BTreeMap<K, f64>;

/// Bound for item keys used to index the [`MeasuredCache`].
///
/// With `std` this is `Hash + Eq` (backed by a `HashMap`); without it, `Ord` (backed by a
/// `BTreeMap`).
#[cfg(feature = "std")]
pub trait ItemKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> ItemKey for K {}

#[cfg(not(feature = "std"))]
pub trait ItemKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> ItemKey for K {}

/// Observed item sizes keyed by item key.
///
/// A cached size overrides the estimate for that key only. Entries are added as items report
/// their rendered size and are dropped wholesale on invalidation.
#[derive(Clone, Debug)]
pub struct MeasuredCache<K> {
    sizes: SizeMap<K>,
}

impl<K> Default for MeasuredCache<K> {
    fn default() -> Self {
        Self {
            sizes: SizeMap::new(),
        }
    }
}

impl<K: ItemKey> MeasuredCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.sizes.get(key).copied()
    }

    /// Records `size` for `key`, returning the previously cached size.
    pub fn insert(&mut self, key: K, size: f64) -> Option<f64> {
        self.sizes.insert(key, size)
    }

    pub fn clear(&mut self) {
        self.sizes.clear();
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.sizes.iter().map(|(k, v)| (k, *v))
    }
}
