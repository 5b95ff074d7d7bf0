//! Search request type
//!
//! Every field may be left empty. An empty list, a JSON `null` list and a
//! missing bound all mean "no constraint on this field".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::predicate::{AuthorMatch, Predicate};

/// Multi-field search request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchRequest {
    /// Match if the title starts with any of these
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title_prefixes: Vec<String>,
    /// Match if the content contains any of these
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contains_contents: Vec<String>,
    /// Match if the author identifier equals any of these
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author_ids: Vec<String>,
    /// Inclusive lower bound on `created`
    #[serde(default)]
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created`
    #[serde(default)]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Request with no constraints; matches every document
    pub fn all() -> Self {
        Self::default()
    }

    /// True if no field carries a constraint
    pub fn is_unconstrained(&self) -> bool {
        self.title_prefixes.is_empty()
            && self.contains_contents.is_empty()
            && self.author_ids.is_empty()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }

    /// Compile the active constraints into predicates.
    ///
    /// Unconstrained fields produce no predicate at all, so an empty result
    /// means every document matches.
    pub fn predicates(&self, author_match: AuthorMatch) -> Vec<Predicate<'_>> {
        let mut predicates = Vec::with_capacity(4);

        if !self.title_prefixes.is_empty() {
            predicates.push(Predicate::TitlePrefix(&self.title_prefixes));
        }
        if !self.contains_contents.is_empty() {
            predicates.push(Predicate::ContentContains(&self.contains_contents));
        }
        if !self.author_ids.is_empty() {
            predicates.push(Predicate::Author {
                ids: &self.author_ids,
                mode: author_match,
            });
        }
        if self.created_from.is_some() || self.created_to.is_some() {
            predicates.push(Predicate::CreatedRange {
                from: self.created_from,
                to: self.created_to,
            });
        }

        predicates
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
