//! Field predicates
//!
//! Each predicate checks one document field. A predicate only exists for a
//! constrained field; see `SearchRequest::predicates`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Which document field the author-id list is compared against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorMatch {
    /// Compare against the document's own id (legacy behavior)
    #[default]
    DocumentId,
    /// Compare against `author.id`
    AuthorId,
}

impl AuthorMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorMatch::DocumentId => "document_id",
            AuthorMatch::AuthorId => "author_id",
        }
    }
}

impl fmt::Display for AuthorMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single active constraint, borrowed from a `SearchRequest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<'a> {
    /// Title starts with any prefix (case-sensitive)
    TitlePrefix(&'a [String]),
    /// Content contains any needle (case-sensitive)
    ContentContains(&'a [String]),
    /// Author identifier equals any id
    Author { ids: &'a [String], mode: AuthorMatch },
    /// `created` within `[from, to]`, either end open
    CreatedRange {
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    },
}

impl Predicate<'_> {
    /// Evaluate against one document.
    ///
    /// A document whose checked field is absent always passes.
    pub fn test(&self, doc: &Document) -> bool {
        match self {
            Predicate::TitlePrefix(prefixes) => match &doc.title {
                None => true,
                Some(title) => prefixes.iter().any(|p| title.starts_with(p.as_str())),
            },
            Predicate::ContentContains(needles) => match &doc.content {
                None => true,
                Some(content) => needles.iter().any(|n| content.contains(n.as_str())),
            },
            Predicate::Author { ids, mode } => {
                let target = match mode {
                    AuthorMatch::DocumentId => Some(doc.id.as_str()),
                    AuthorMatch::AuthorId => doc.author_id(),
                };
                match target {
                    None => true,
                    Some(target) => ids.iter().any(|id| id == target),
                }
            }
            Predicate::CreatedRange { from, to } => {
                if matches!(from, Some(from) if doc.created < *from) {
                    return false;
                }
                if matches!(to, Some(to) if doc.created > *to) {
                    return false;
                }
                true
            }
        }
    }
}
