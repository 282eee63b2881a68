//! Sharded Concurrent Map Implementation
//!
//! This module implements a key/value map that is safe for simultaneous use
//! from multiple threads. The table is split into a fixed number of shards,
//! each guarded by its own reader/writer lock, so operations on different
//! shards never contend and operations on the same key serialize through a
//! single lock.
//!
//! ## Design
//!
//! The map uses:
//! - A power-of-2 number of shards, selected by the high bits of the key
//!   hash
//! - One `parking_lot::RwLock` per shard, cache-line padded to prevent
//!   false sharing between shard locks
//! - An `FxHashMap` per shard as the backing table
//!
//! ## Atomicity
//!
//! Every key maps to exactly one shard for the lifetime of the map, so any
//! single operation on a key holds that key's shard lock for its full
//! duration. This yields per-key linearizability: callers observe a
//! consistent order of effects for each key. No total order across
//! different keys is guaranteed, and [`SyncMap::clear`] / [`SyncMap::iter`]
//! / [`SyncMap::len`] visit shards one at a time rather than atomically.
//!
//! Compound caller sequences (a `get` followed by a conditional `insert`)
//! are **not** atomic; express them through [`SyncMap::get_or_insert`],
//! [`SyncMap::compare_and_swap`], or [`SyncMap::compare_and_delete`]
//! instead.
//!
//! ## Performance Characteristics
//!
//! - **get**: O(1) average case, shared lock on one shard
//! - **insert / remove**: O(1) average case, exclusive lock on one shard
//! - **iter**: O(n), locks one shard at a time
//!
//! ## Example
//!
//! ```rust
//! use synckit::SyncMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let map = Arc::new(SyncMap::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let map = Arc::clone(&map);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 map.insert(t * 100 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(map.len(), 400);
//! ```

use crate::util::CachePadded;
use core::fmt;
use core::hash::{Hash, Hasher};
use fxhash::{FxHashMap, FxHasher};
use parking_lot::RwLock;
use std::collections::hash_map::Entry;

/// Number of shards (must be a power of 2)
const SHARD_COUNT: usize = 16;

type Shard<K, V> = CachePadded<RwLock<FxHashMap<K, V>>>;

/// A concurrent key/value map with sharded locking
///
/// `SyncMap` is safe to share across threads without external locking.
/// Each individual operation is atomic with respect to all other operations
/// on the same key; see the [module docs](self) for the exact guarantees.
///
/// Values are returned by value rather than by reference, since a reference
/// would outlive the internal shard lock. Operations that return values
/// therefore require `V: Clone`; keep values small or wrap them in `Arc`.
///
/// # Type Parameters
///
/// * `K` - The key type, must implement `Hash + Eq`
/// * `V` - The value type; `Clone` where values are returned, `PartialEq`
///   for the compare-and-* operations
///
/// # Examples
///
/// ```rust
/// use synckit::SyncMap;
///
/// let map: SyncMap<i32, String> = SyncMap::new();
/// map.insert(1, "hello".to_string());
/// assert_eq!(map.get(&1), Some("hello".to_string()));
/// ```
pub struct SyncMap<K, V> {
    shards: [Shard<K, V>; SHARD_COUNT],
}

impl<K, V> SyncMap<K, V>
where
    K: Hash + Eq,
{
    /// Create a new, empty map
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synckit::SyncMap;
    ///
    /// let map: SyncMap<i32, String> = SyncMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            shards: core::array::from_fn(|_| CachePadded::new(RwLock::new(FxHashMap::default()))),
        }
    }

    /// Return the value associated with `key`, or `None` if absent
    ///
    /// Takes a shared lock on the key's shard, so concurrent `get`s for
    /// keys on the same shard do not block each other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synckit::SyncMap;
    ///
    /// let map = SyncMap::new();
    /// map.insert("a", 1);
    /// assert_eq!(map.get(&"a"), Some(1));
    /// assert_eq!(map.get(&"b"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.shard_for(key).read().get(key).cloned()
    }

    /// Return whether `key` is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.shard_for(key).read().contains_key(key)
    }

    /// Unconditionally associate `value` with `key`
    ///
    /// Returns the value the key previously held, or `None` if the key was
    /// newly inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synckit::SyncMap;
    ///
    /// let map = SyncMap::new();
    /// assert_eq!(map.insert(1, "hello"), None);
    /// assert_eq!(map.insert(1, "world"), Some("hello"));
    /// ```
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.shard_for(&key).write().insert(key, value)
    }

    /// Return the existing value for `key` if present, otherwise store
    /// `value`
    ///
    /// The result is `(current, true)` if the key was already present (the
    /// map is left unmodified), or `(value, false)` if `value` was stored.
    ///
    /// Atomic per key: if N threads race this call for one absent key,
    /// exactly one observes `false` and its value is the one every other
    /// caller gets back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synckit::SyncMap;
    ///
    /// let map = SyncMap::new();
    /// assert_eq!(map.get_or_insert("k", 1), (1, false));
    /// assert_eq!(map.get_or_insert("k", 2), (1, true));
    /// ```
    pub fn get_or_insert(&self, key: K, value: V) -> (V, bool)
    where
        V: Clone,
    {
        let mut shard = self.shard_for(&key).write();
        match shard.entry(key) {
            Entry::Occupied(entry) => (entry.get().clone(), true),
            Entry::Vacant(entry) => (entry.insert(value).clone(), false),
        }
    }

    /// Remove `key`, returning the value it held
    ///
    /// Atomically removes the entry and returns its prior value, or `None`
    /// if the key was absent. Removing an absent key is a no-op, not an
    /// error; ignore the result when only the removal matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synckit::SyncMap;
    ///
    /// let map = SyncMap::new();
    /// map.insert("a", 1);
    /// assert_eq!(map.remove(&"a"), Some(1));
    /// assert_eq!(map.remove(&"a"), None);
    /// ```
    pub fn remove(&self, key: &K) -> Option<V> {
        self.shard_for(key).write().remove(key)
    }

    /// Replace the value for `key` with `new` only if it currently equals
    /// `old`
    ///
    /// Returns whether the swap occurred. The map is left unchanged when
    /// the key is absent or holds a value other than `old`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synckit::SyncMap;
    ///
    /// let map = SyncMap::new();
    /// map.insert("k", 1);
    /// assert!(map.compare_and_swap(&"k", &1, 2));
    /// assert!(!map.compare_and_swap(&"k", &1, 3));
    /// assert_eq!(map.get(&"k"), Some(2));
    /// ```
    pub fn compare_and_swap(&self, key: &K, old: &V, new: V) -> bool
    where
        V: PartialEq,
    {
        let mut shard = self.shard_for(key).write();
        match shard.get_mut(key) {
            Some(current) if current == old => {
                *current = new;
                true
            }
            _ => false,
        }
    }

    /// Remove the entry for `key` only if its value currently equals `old`
    ///
    /// Returns whether the deletion occurred. An absent key always yields
    /// `false`, even when `old` is the value type's default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synckit::SyncMap;
    ///
    /// let map: SyncMap<&str, i32> = SyncMap::new();
    /// assert!(!map.compare_and_delete(&"k", &0));
    /// map.insert("k", 1);
    /// assert!(!map.compare_and_delete(&"k", &2));
    /// assert!(map.compare_and_delete(&"k", &1));
    /// ```
    pub fn compare_and_delete(&self, key: &K, old: &V) -> bool
    where
        V: PartialEq,
    {
        let mut shard = self.shard_for(key).write();
        if shard.get(key) == Some(old) {
            shard.remove(key);
            true
        } else {
            false
        }
    }

    /// Remove all entries
    ///
    /// Shards are cleared one at a time, so a `clear` racing concurrent
    /// writers is not atomic as a whole: entries written during the clear
    /// may or may not survive it. The map remains usable afterward.
    pub fn clear(&self) {
        for shard in &self.shards {
            shard.write().clear();
        }
    }

    /// Return the number of entries
    ///
    /// Shard counts are summed one shard at a time, so the result may be
    /// stale while other threads are mutating the map.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    /// Return whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.read().is_empty())
    }

    /// Iterate over cloned `(key, value)` pairs
    ///
    /// The traversal is lazy per shard: each shard is read-locked and
    /// snapshotted only when the iterator reaches it, then released before
    /// any pair is yielded. No lock is held between calls to `next`.
    ///
    /// Consistency: a key present for the entire traversal is yielded
    /// exactly once; keys inserted or removed mid-traversal may or may not
    /// be observed; no key is ever yielded twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synckit::SyncMap;
    ///
    /// let map = SyncMap::new();
    /// map.insert(1, 10);
    /// map.insert(2, 20);
    ///
    /// let mut pairs: Vec<_> = map.iter().collect();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![(1, 10), (2, 20)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            map: self,
            shard_idx: 0,
            buffer: Vec::new().into_iter(),
        }
    }

    fn shard_for(&self, key: &K) -> &Shard<K, V> {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        // High bits pick the shard; the per-shard table hashes with the
        // same function and consumes the low bits.
        let idx = (hasher.finish() >> 32) as usize & (SHARD_COUNT - 1);
        &self.shards[idx]
    }
}

impl<K: Hash + Eq, V> Default for SyncMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for SyncMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            shards: core::array::from_fn(|i| {
                CachePadded::new(RwLock::new(self.shards[i].read().clone()))
            }),
        }
    }
}

impl<K, V> fmt::Debug for SyncMap<K, V>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_map();
        for shard in &self.shards {
            entries.entries(shard.read().iter());
        }
        entries.finish()
    }
}

impl<K, V> Extend<(K, V)> for &SyncMap<K, V>
where
    K: Hash + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for SyncMap<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Lazy shard-by-shard traversal over a [`SyncMap`]
///
/// Created by [`SyncMap::iter`]. Holds no lock between calls to `next`.
pub struct Iter<'a, K, V> {
    map: &'a SyncMap<K, V>,
    shard_idx: usize,
    buffer: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for Iter<'_, K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        loop {
            if let Some(pair) = self.buffer.next() {
                return Some(pair);
            }
            if self.shard_idx >= SHARD_COUNT {
                return None;
            }
            // Snapshot the next shard and release its lock before yielding.
            let shard = self.map.shards[self.shard_idx].read();
            self.buffer = shard
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Vec<_>>()
                .into_iter();
            self.shard_idx += 1;
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("shard_idx", &self.shard_idx)
            .field("buffered", &self.buffer.len())
            .finish()
    }
}

impl<'a, K, V> IntoIterator for &'a SyncMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Item = (K, V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
