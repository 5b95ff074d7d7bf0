//! docstore - An in-memory document repository
//!
//! Upsert, point lookup by id and multi-predicate search over a single
//! owned map. Nothing is persisted and nothing is shared between stores.
//!
//! ```
//! use docstore::{DocumentDraft, DocumentStore, SearchRequest};
//!
//! # fn main() -> Result<(), docstore::StoreError> {
//! let mut store = DocumentStore::new();
//! let saved = store.save(DocumentDraft::with_text("Alpha", "first"))?;
//!
//! assert_eq!(store.find_by_id(&saved.id), Some(saved));
//!
//! let hits = store.search(&SearchRequest {
//!     title_prefixes: vec!["Al".into()],
//!     ..SearchRequest::default()
//! });
//! assert_eq!(hits.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod identity;
pub mod observability;
pub mod search;
pub mod storage;
pub mod store;

pub use config::{ConfigError, ConfigResult, StoreConfig};
pub use document::{Author, Document, DocumentDraft};
pub use identity::IdPolicy;
pub use search::{AuthorMatch, SearchRequest};
pub use store::{DocumentStore, StoreError, StoreResult};
