//! # synckit
//!
//! Small, focused collection helpers for concurrent and single-threaded code.
//!
//! ## Features
//!
//! - **[`SyncMap`]**: A key/value map safe for simultaneous use from many
//!   threads, built on sharded reader/writer locks
//! - **[`Set`]**: A hash set of unique elements for single-owner use
//! - **[`slices`]**: Linear-scan membership helpers for slices
//!
//! The three components are independent: none calls another, and each is a
//! thin adapter over a single backing container.
//!
//! ## Quick Start
//!
//! ```rust
//! use synckit::SyncMap;
//!
//! let map = SyncMap::new();
//! map.insert("answer", 42);
//! assert_eq!(map.get(&"answer"), Some(42));
//! ```
//!
//! ## Thread Safety
//!
//! [`SyncMap`] may be shared across threads without external locking; every
//! individual operation is atomic with respect to other operations on the
//! same key. [`Set`] and the [`slices`] helpers provide no concurrency
//! safety; they are single-owner structures, which the borrow checker
//! enforces through their `&mut self` mutators.
//!
//! ## Error Handling
//!
//! No operation in this crate panics or returns an error under normal use.
//! Absence and failed conditional updates are reported through `Option` and
//! `bool` results.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod map;
pub mod set;
pub mod slices;

pub use crate::map::SyncMap;
pub use crate::set::Set;

/// Common utilities and helper types
pub mod util {
    use core::ops::{Deref, DerefMut};

    /// Pads and aligns a value to the length of a cache line.
    ///
    /// Shard locks that land on the same cache line contend with each other
    /// even when they guard unrelated data; padding each lock to its own
    /// line avoids that false sharing.
    #[repr(align(64))]
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct CachePadded<T> {
        value: T,
    }

    impl<T> CachePadded<T> {
        /// Create a new cache-padded value
        #[inline]
        pub const fn new(value: T) -> Self {
            Self { value }
        }

        /// Get the inner value
        #[inline]
        pub fn into_inner(self) -> T {
            self.value
        }
    }

    impl<T> Deref for CachePadded<T> {
        type Target = T;

        #[inline]
        fn deref(&self) -> &T {
            &self.value
        }
    }

    impl<T> DerefMut for CachePadded<T> {
        #[inline]
        fn deref_mut(&mut self) -> &mut T {
            &mut self.value
        }
    }

    impl<T: core::fmt::Debug> core::fmt::Debug for CachePadded<T> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            core::fmt::Debug::fmt(&self.value, f)
        }
    }
}
