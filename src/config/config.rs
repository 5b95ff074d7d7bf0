//! Store configuration
//!
//! JSON shape (every field optional):
//!
//! ```json
//! {
//!   "id_policy": "regenerate_on_collision",
//!   "author_match": "document_id",
//!   "log_level": "warn"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::identity::IdPolicy;
use crate::observability::LogLevel;
use crate::search::AuthorMatch;

use super::errors::{ConfigError, ConfigResult};

/// Behavior switches for a `DocumentStore`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// What `save` does with a supplied id that is already stored
    #[serde(default)]
    pub id_policy: IdPolicy,

    /// Which field `authorIds` is compared against
    #[serde(default)]
    pub author_match: AuthorMatch,

    /// Minimum severity written to the log
    #[serde(default)]
    pub log_level: LogLevel,
}

impl StoreConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn with_author_match(mut self, author_match: AuthorMatch) -> Self {
        self.author_match = author_match;
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }
}
