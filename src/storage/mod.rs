//! Document storage for docstore
//!
//! A single in-memory map from id to document. This is the only source of
//! truth: there is no secondary index and no persistence.
//!
//! # Invariants
//!
//! - Every key equals the `id` of the document stored under it
//! - `put` is an unconditional insert-or-replace
//! - `values` is a full O(n) scan

mod map;

pub use map::StorageMap;
