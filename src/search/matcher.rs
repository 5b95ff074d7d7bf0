//! Predicate matching for search
//!
//! A document matches when all predicates hold. No predicates means every
//! document matches.

use crate::document::Document;

use super::predicate::{AuthorMatch, Predicate};
use super::request::SearchRequest;

/// Evaluates search requests against documents
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateMatcher {
    author_match: AuthorMatch,
}

impl PredicateMatcher {
    pub fn new(author_match: AuthorMatch) -> Self {
        Self { author_match }
    }

    /// Checks if a document matches all predicates (AND semantics)
    pub fn matches(document: &Document, predicates: &[Predicate<'_>]) -> bool {
        predicates.iter().all(|pred| pred.test(document))
    }

    /// Checks a single document against a request
    pub fn matches_request(&self, document: &Document, request: &SearchRequest) -> bool {
        Self::matches(document, &request.predicates(self.author_match))
    }

    /// Keep the documents that satisfy `request`, cloning them out.
    ///
    /// Input order is preserved.
    pub fn filter<'d, I>(&self, documents: I, request: &SearchRequest) -> Vec<Document>
    where
        I: IntoIterator<Item = &'d Document>,
    {
        let predicates = request.predicates(self.author_match);
        documents
            .into_iter()
            .filter(|doc| Self::matches(doc, &predicates))
            .cloned()
            .collect()
    }
}
