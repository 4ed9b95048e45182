//! Error types for rulekit operations.
//!
//! This module defines [`RulekitError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RulekitError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RulekitError::Other`) for unexpected errors
//! - Scan-level I/O failures are never surfaced as errors: discovery is
//!   best-effort, so they are logged as warnings and skipped
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rulekit operations.
#[derive(Debug, Error)]
pub enum RulekitError {
    /// Lookup for a key not present in the registry. Carries the full list
    /// of known keys for diagnosability.
    #[error("Template not found: {key}. Available templates: {}", available.join(", "))]
    TemplateNotFound {
        key: String,
        available: Vec<String>,
    },

    /// Template content could not be read from disk (e.g. the file was
    /// removed between scan and load).
    #[error("Failed to load template: {}", path.display())]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rulekit operations.
pub type Result<T> = std::result::Result<T, RulekitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_not_found_displays_key_and_available() {
        let err = RulekitError::TemplateNotFound {
            key: "missing".into(),
            available: vec!["auth".into(), "api_routes".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("missing"));
        assert!(msg.contains("auth"));
        assert!(msg.contains("api_routes"));
    }

    #[test]
    fn template_not_found_with_empty_registry() {
        let err = RulekitError::TemplateNotFound {
            key: "anything".into(),
            available: vec![],
        };
        assert!(err.to_string().contains("anything"));
    }

    #[test]
    fn template_load_displays_path_and_cause() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = RulekitError::TemplateLoad {
            path: PathBuf::from("/templates/example.mdc.liquid"),
            source: io_err,
        };
        assert!(err.to_string().contains("/templates/example.mdc.liquid"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RulekitError = io_err.into();
        assert!(matches!(err, RulekitError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(RulekitError::TemplateNotFound {
                key: "test".into(),
                available: vec![],
            })
        }
        assert!(returns_error().is_err());
    }
}
