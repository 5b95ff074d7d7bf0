//! Observability for docstore
//!
//! - Structured JSON logging, filtered by level
//! - Per-store operation counters
//!
//! Observability never changes the outcome of an operation.
//!
//! # Usage
//!
//! ```
//! use docstore::observability::{LogBuffer, LogLevel, Logger, MetricsRegistry};
//!
//! let buffer = LogBuffer::new();
//! let logger = Logger::with_buffer(LogLevel::Info, buffer.clone());
//! logger.info("DOCUMENT_OVERWRITTEN", &[("id", "abc")]);
//! assert_eq!(buffer.lines().len(), 1);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_searches();
//! assert_eq!(metrics.snapshot().searches, 1);
//! ```

mod logger;
mod metrics;

pub use logger::{format_line, LogBuffer, LogLevel, Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
