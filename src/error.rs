//! Unified error types for chainaudit.
//!
//! The dashboard logic itself cannot fail; these errors cover loading and
//! validating configuration. Report output and terminal I/O go through
//! `anyhow` at the CLI boundary.

use crate::config::{ConfigError, ConfigFileError};
use thiserror::Error;

/// Main error type for chainaudit operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ChainAuditError {
    /// Errors while reading a config file
    #[error("Config file error: {context}")]
    ConfigFile {
        context: String,
        #[source]
        source: ConfigFileError,
    },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenient Result type for chainaudit operations
pub type Result<T> = std::result::Result<T, ChainAuditError>;

impl ChainAuditError {
    /// Collapse a list of validation failures into one error.
    ///
    /// Returns `None` when the list is empty.
    #[must_use]
    pub fn from_config_errors(errors: &[ConfigError]) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Some(Self::Config(joined))
    }
}

impl From<ConfigFileError> for ChainAuditError {
    fn from(err: ConfigFileError) -> Self {
        Self::ConfigFile {
            context: String::new(),
            source: err,
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings chain outward: `"outer: inner"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ChainAuditError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: ChainAuditError, new_ctx: &str) -> ChainAuditError {
    match err {
        ChainAuditError::ConfigFile {
            context: existing,
            source,
        } => ChainAuditError::ConfigFile {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ChainAuditError::Config(msg) => ChainAuditError::Config(chain_context(new_ctx, &msg)),
    }
}

fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
