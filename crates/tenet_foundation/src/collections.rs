//! Persistent collections with structural sharing.
//!
//! These are thin wrappers around the `im` crate's persistent collections.
//! [`LtSet`] and [`LtMap`] sit on `im`'s B-tree set and map, so two
//! collections holding the same elements iterate identically no matter how
//! they were built. That canonical form is what the value comparators consume.

use std::fmt;

/// Persistent vector with structural sharing.
///
/// Cloning is O(1). Modifications return a new vector sharing structure
/// with the original.
#[derive(Clone)]
pub struct LtVec<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> LtVec<T> {
    /// Creates an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a new vector with the element appended.
    #[must_use]
    pub fn push_back(&self, value: T) -> Self {
        let mut new = self.0.clone();
        new.push_back(value);
        Self(new)
    }

    /// Returns a new vector with the element at `index` replaced.
    ///
    /// Returns `None` if `index` is out of bounds.
    #[must_use]
    pub fn update(&self, index: usize, value: T) -> Option<Self> {
        if index >= self.len() {
            return None;
        }
        let mut new = self.0.clone();
        new.set(index, value);
        Some(Self(new))
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.front()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.back()
    }
}

impl<T: Clone> Default for LtVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for LtVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for LtVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for LtVec<T> {}

impl<T: Clone> FromIterator<T> for LtVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> From<Vec<T>> for LtVec<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone> IntoIterator for LtVec<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a LtVec<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Persistent set with structural sharing.
///
/// Elements are unique under `Ord` and iterate in ascending order, which is
/// the set's canonical form. Cloning is O(1); membership is O(log n).
#[derive(Clone)]
pub struct LtSet<T>(im::OrdSet<T>)
where
    T: Clone + Ord;

impl<T: Clone + Ord> LtSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the set contains the value.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    /// Returns a new set with the value inserted.
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        Self(self.0.update(value))
    }

    /// Returns a new set with the value removed.
    #[must_use]
    pub fn remove(&self, value: &T) -> Self {
        Self(self.0.without(value))
    }

    /// Returns an iterator over the elements in canonical order.
    pub fn iter(&self) -> im::ordset::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns a new set that is the union of this set and another.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.clone().union(other.0.clone()))
    }

    /// Returns a new set that is the intersection of this set and another.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.clone().intersection(other.0.clone()))
    }

    /// Returns a new set holding the elements of this set absent from
    /// `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.clone().relative_complement(other.0.clone()))
    }

    /// Returns a lazy iterator over the elements present in exactly one of
    /// the two sets.
    ///
    /// Nodes the two sets share are skipped without being visited, so
    /// `a.symmetric_difference(&b).next()` is a cheap equality check.
    pub fn symmetric_difference<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a T> {
        self.0.diff(&other.0).filter_map(|item| match item {
            im::ordset::DiffItem::Add(value) | im::ordset::DiffItem::Remove(value) => Some(value),
            im::ordset::DiffItem::Update { .. } => None,
        })
    }
}

impl<T: Clone + Ord> Default for LtSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord + fmt::Debug> fmt::Debug for LtSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Ord> PartialEq for LtSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Ord> Eq for LtSet<T> {}

impl<T: Clone + Ord> FromIterator<T> for LtSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::OrdSet::from_iter(iter))
    }
}

impl<'a, T: Clone + Ord> IntoIterator for &'a LtSet<T> {
    type Item = &'a T;
    type IntoIter = im::ordset::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Persistent map with structural sharing.
///
/// Entries are unique by key and iterate sorted by key, the canonical pair
/// form regardless of insertion order.
#[derive(Clone)]
pub struct LtMap<K, V>(im::OrdMap<K, V>)
where
    K: Clone + Ord,
    V: Clone;

impl<K: Clone + Ord, V: Clone> LtMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.0.contains_key(key)
    }

    /// Returns a new map with the key-value pair inserted, replacing any
    /// previous value for the key.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        Self(self.0.update(key, value))
    }

    /// Returns a new map with the key removed.
    #[must_use]
    pub fn remove(&self, key: &K) -> Self {
        Self(self.0.without(key))
    }

    /// Returns an iterator over key-value pairs in canonical key order.
    pub fn iter(&self) -> im::ordmap::Iter<'_, K, V> {
        self.0.iter()
    }

    /// Returns an iterator over keys in canonical order.
    pub fn keys(&self) -> im::ordmap::Keys<'_, K, V> {
        self.0.keys()
    }

    /// Returns an iterator over values in canonical key order.
    pub fn values(&self) -> im::ordmap::Values<'_, K, V> {
        self.0.values()
    }

    /// Returns a new map that is the union of this map and another.
    ///
    /// If a key exists in both maps, the value from `other` is used.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.clone().union_with(other.0.clone(), |_, theirs| theirs))
    }
}

impl<K: Clone + Ord, V: Clone> Default for LtMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Ord + fmt::Debug, V: Clone + fmt::Debug> fmt::Debug for LtMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Clone + Ord, V: Clone + PartialEq> PartialEq for LtMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Clone + Ord, V: Clone + Eq> Eq for LtMap<K, V> {}

impl<K: Clone + Ord, V: Clone> FromIterator<(K, V)> for LtMap<K, V> {
    /// Builds a map from pairs; when a key repeats, the last value wins.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(im::OrdMap::from_iter(iter))
    }
}
