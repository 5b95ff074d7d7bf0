//! Configuration for docstore
//!
//! A store is configured in code or from a JSON file. Every field has a
//! default, and the defaults reproduce the legacy behavior:
//!
//! - `id_policy`: `regenerate_on_collision`
//! - `author_match`: `document_id`
//! - `log_level`: `warn`

#[allow(clippy::module_inception)]
mod config;
mod errors;

pub use config::StoreConfig;
pub use errors::{ConfigError, ConfigResult};
