//! Map implementations
//!
//! This module provides a concurrent map for shared key/value state.
//!
//! ## Available Maps
//!
//! - [`SyncMap`]: Sharded reader/writer locking with per-key atomic
//!   operations
//!
//! ## Choosing a Map
//!
//! - Use `SyncMap` whenever several threads read and write the same
//!   key/value state without external locking
//! - For single-threaded key/value state, `std::collections::HashMap` is
//!   the better fit; `SyncMap` pays for its shard locks even uncontended

pub mod sync;

pub use self::sync::SyncMap;


#[cfg(test)]
mod proptests;
