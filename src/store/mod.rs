//! DocumentStore for docstore
//!
//! # Operation Flow
//!
//! - `save`: identity manager resolves id and created time, then storage write
//! - `search`: full storage scan, then predicate filter
//! - `find_by_id`: direct storage read
//!
//! # Errors
//!
//! `save` of an absent document is the only failure on the typed API. The
//! JSON entry points can additionally fail on malformed input.

mod errors;
#[allow(clippy::module_inception)]
mod store;

pub use errors::{StoreError, StoreResult};
pub use store::DocumentStore;
