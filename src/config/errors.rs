//! Configuration errors
//!
//! Error codes:
//! - DOCSTORE_CONFIG_IO
//! - DOCSTORE_CONFIG_PARSE

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failure to read or parse a `StoreConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config content is not valid JSON for `StoreConfig`
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "DOCSTORE_CONFIG_IO",
            Self::Parse(_) => "DOCSTORE_CONFIG_PARSE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ConfigError::from(parse).code(), "DOCSTORE_CONFIG_PARSE");
    }

    #[test]
    fn test_io_display_names_path() {
        let err = ConfigError::Io {
            path: "/missing.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.code(), "DOCSTORE_CONFIG_IO");
        assert!(err.to_string().contains("/missing.json"));
    }
}
