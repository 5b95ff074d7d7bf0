//! Document value types
//!
//! `DocumentDraft` is what callers hand to `save`. `Document` is what the
//! store keeps and hands back: its id and creation time are always resolved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author attached to a document. Plain value, no identity enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Author {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Author {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }
}

/// A stored document
///
/// `id` is unique within a store and never changes once assigned.
/// `created` is set at first save and never overwritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    pub created: DateTime<Utc>,
}

impl Document {
    /// Returns the document ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Author identifier, if the document has an author
    pub fn author_id(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.id.as_str())
    }
}

/// Input to `DocumentStore::save`
///
/// Every field is optional. A missing id asks the store to generate one,
/// a missing `created` defaults to the time of the save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocumentDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl DocumentDraft {
    /// Empty draft with no id and no creation time
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft with only title and content set
    pub fn with_text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Finalize the draft with a resolved id and creation time
    pub(crate) fn resolve(self, id: String, created: DateTime<Utc>) -> Document {
        Document {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            created,
        }
    }
}

impl From<Document> for DocumentDraft {
    fn from(doc: Document) -> Self {
        Self {
            id: Some(doc.id),
            title: doc.title,
            content: doc.content,
            author: doc.author,
            created: Some(doc.created),
        }
    }
}
