//! Set implementation
//!
//! An unordered collection of unique elements backed by a hash table, for
//! single-owner use. There is no internal synchronization: share a [`Set`]
//! across threads behind a lock, or use [`SyncMap`](crate::SyncMap) when
//! concurrent key/value access is the actual requirement.
//!
//! ## Example
//!
//! ```rust
//! use synckit::Set;
//!
//! let mut set = Set::new();
//! set.insert(1);
//! set.insert(2);
//! set.insert(2);
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&2));
//! ```

use core::fmt;
use core::hash::Hash;
use fxhash::FxHashMap;
use std::collections::hash_map;

/// An unordered set of unique elements
///
/// Elements are kept as keys of a hash table mapping to a unit presence
/// marker. Each element appears at most once; iteration order is
/// unspecified and may vary between runs.
///
/// All operations are total: inserting a duplicate and removing an absent
/// element are no-ops, not errors.
#[derive(Clone)]
pub struct Set<T> {
    elems: FxHashMap<T, ()>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self {
            elems: FxHashMap::default(),
        }
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Create a new, empty set
    pub fn new() -> Self {
        Self {
            elems: FxHashMap::default(),
        }
    }

    /// Create an empty set with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elems: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Return the number of distinct elements currently present
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Return whether the set holds no elements
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Return whether `elem` is present
    pub fn contains(&self, elem: &T) -> bool {
        self.elems.contains_key(elem)
    }

    /// Insert `elem`, returning whether it was newly added
    ///
    /// Inserting an element that is already present is a no-op and returns
    /// `false`.
    pub fn insert(&mut self, elem: T) -> bool {
        self.elems.insert(elem, ()).is_none()
    }

    /// Remove `elem`, returning whether it was present
    ///
    /// Removing an absent element is a no-op and returns `false`.
    pub fn remove(&mut self, elem: &T) -> bool {
        self.elems.remove(elem).is_some()
    }

    /// Remove every element produced by `elems`
    ///
    /// Absent elements are skipped. The bulk counterpart of
    /// [`Extend::extend`] for removal.
    pub fn remove_all<'a, I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        for elem in elems {
            self.elems.remove(elem);
        }
    }

    /// Remove all elements; the set remains usable afterward
    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Iterate over the elements in unspecified order
    ///
    /// Each element is produced exactly once. The set cannot be mutated
    /// while the iterator is alive.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elems.keys(),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.elems.insert(elem, ());
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elems.keys()).finish()
    }
}

/// Iterator over the elements of a [`Set`]
///
/// Created by [`Set::iter`].
pub struct Iter<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.clone()).finish()
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
