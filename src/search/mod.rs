//! Search subsystem for docstore
//!
//! # Matching Flow
//!
//! 1. Compile the request into predicates, one per constrained field
//! 2. Scan every stored document
//! 3. Keep documents for which all predicates hold
//!
//! Within one field, list entries are alternatives (any may match). Across
//! fields, predicates combine with AND. A document missing the checked field
//! passes that field's predicate. Results come back in storage order, which
//! is unspecified.

mod matcher;
mod predicate;
mod request;

pub use matcher::PredicateMatcher;
pub use predicate::{AuthorMatch, Predicate};
pub use request::SearchRequest;
