//! HashMap-backed document map
//!
//! The map owns every stored `Document`. Readers borrow; the store clones
//! before handing documents to callers.

use std::collections::HashMap;

use crate::document::Document;

/// Key-unique mapping from document id to document
#[derive(Debug, Default)]
pub struct StorageMap {
    documents: HashMap<String, Document>,
}

impl StorageMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the document stored under `id`.
    ///
    /// Returns the previously stored document, if any.
    pub fn put(&mut self, id: String, document: Document) -> Option<Document> {
        debug_assert_eq!(id, document.id, "map key must equal document id");
        self.documents.insert(id, document)
    }

    /// Direct read by id
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    /// Returns true if `id` is already taken
    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    /// Iterate all stored documents in map order (unspecified)
    pub fn values(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
