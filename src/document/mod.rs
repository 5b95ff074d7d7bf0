//! Document data model
//!
//! - `Document`: the resolved, stored form
//! - `DocumentDraft`: the input form accepted by `save`
//! - `Author`: plain author value

mod types;

pub use types::{Author, Document, DocumentDraft};
