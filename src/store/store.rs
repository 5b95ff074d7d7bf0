//! The document store
//!
//! Wires the identity manager, the storage map and the predicate matcher
//! together behind `save`, `search` and `find_by_id`.

use crate::config::StoreConfig;
use crate::document::{Document, DocumentDraft};
use crate::identity::{Clock, IdGenerator, IdOrigin, IdentityManager, SystemClock, UuidGenerator};
use crate::observability::{Logger, MetricsRegistry, MetricsSnapshot, Severity};
use crate::search::{PredicateMatcher, SearchRequest};
use crate::storage::StorageMap;

use super::errors::{StoreError, StoreResult};

/// In-memory document repository
///
/// Each instance owns its own map; stores never share state. Writes take
/// `&mut self`, so a caller that needs to share a store across threads must
/// wrap it in its own lock.
#[derive(Debug)]
pub struct DocumentStore {
    config: StoreConfig,
    identity: IdentityManager,
    matcher: PredicateMatcher,
    storage: StorageMap,
    logger: Logger,
    metrics: MetricsRegistry,
}

impl DocumentStore {
    /// Store with the default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// UUID v4 ids and the system clock
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_parts(config, Box::new(UuidGenerator), Box::new(SystemClock))
    }

    /// Fully injected construction
    pub fn with_parts(
        config: StoreConfig,
        generator: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            config,
            identity: IdentityManager::with_sources(config.id_policy, generator, clock),
            matcher: PredicateMatcher::new(config.author_match),
            storage: StorageMap::new(),
            logger: Logger::new(config.log_level),
            metrics: MetricsRegistry::new(),
        }
    }

    /// Replace the logger built from `config.log_level`
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Upsert a document.
    ///
    /// Resolves the id and creation time, stores the result and returns a
    /// copy of what was stored. Fails only when `document` is `None`.
    pub fn save(&mut self, document: impl Into<Option<DocumentDraft>>) -> StoreResult<Document> {
        let draft = match document.into() {
            Some(draft) => draft,
            None => {
                self.metrics.increment_saves_rejected();
                self.logger
                    .error("SAVE_REJECTED", &[("reason", "document is absent")]);
                return Err(StoreError::invalid_argument("Document cannot be null"));
            }
        };

        let resolution = self.identity.resolve(&draft, &self.storage);

        match &resolution.origin {
            IdOrigin::Regenerated { requested } => {
                self.metrics.increment_ids_regenerated();
                self.logger.warn(
                    "DOCUMENT_ID_REGENERATED",
                    &[("requested", requested.as_str()), ("id", resolution.id.as_str())],
                );
            }
            IdOrigin::Overwritten => {
                self.logger
                    .info("DOCUMENT_OVERWRITTEN", &[("id", resolution.id.as_str())]);
            }
            IdOrigin::Generated | IdOrigin::Supplied => {}
        }

        let origin = resolution.origin.as_str();
        let document = draft.resolve(resolution.id, resolution.created);
        let previous = self.storage.put(document.id.clone(), document.clone());

        self.metrics.record_save(previous.is_none());
        self.metrics.set_documents(self.storage.len() as u64);

        if self.logger.enabled(Severity::Trace) {
            let created = document.created.to_rfc3339();
            self.logger.trace(
                "DOCUMENT_SAVED",
                &[
                    ("id", document.id.as_str()),
                    ("origin", origin),
                    ("created", created.as_str()),
                ],
            );
        }

        Ok(document)
    }

    /// Parse a JSON document and `save` it.
    ///
    /// JSON `null` is the absent document and fails with `InvalidArgument`.
    pub fn save_json(&mut self, json: &str) -> StoreResult<Document> {
        let draft: Option<DocumentDraft> = serde_json::from_str(json)?;
        self.save(draft)
    }

    /// All stored documents satisfying `request`, in unspecified order.
    ///
    /// Never fails; no match gives an empty vector.
    pub fn search(&self, request: &SearchRequest) -> Vec<Document> {
        let results = self.matcher.filter(self.storage.values(), request);

        self.metrics.increment_searches();
        if self.logger.enabled(Severity::Trace) {
            let scanned = self.storage.len().to_string();
            let matched = results.len().to_string();
            self.logger.trace(
                "SEARCH_EXECUTED",
                &[("scanned", scanned.as_str()), ("matched", matched.as_str())],
            );
        }

        results
    }

    /// Parse a JSON search request and run it. JSON `null` matches everything.
    pub fn search_json(&self, json: &str) -> StoreResult<Vec<Document>> {
        let request: Option<SearchRequest> = serde_json::from_str(json)?;
        Ok(self.search(&request.unwrap_or_default()))
    }

    /// Copy of the document stored under `id`, if any
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        let found = self.storage.get(id).cloned();
        self.metrics.record_lookup(found.is_some());
        found
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Point-in-time copy of the operation counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
