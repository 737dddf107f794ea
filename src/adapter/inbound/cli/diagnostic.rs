//! Miette-based error diagnostics for CLI error presentation.
//!
//! Configuration mistakes are shown against the file content with a labeled
//! span and a help line.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::ConfigError;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(squadforge::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Configuration file content.
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Create a diagnostic pointing at `len` bytes from `offset` in `src`.
    #[must_use]
    pub fn new(message: impl Into<String>, src: impl Into<String>, offset: usize, len: usize) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic for a configuration error found in `src`.
    ///
    /// Parse errors carry their own span. Validation errors are located by
    /// searching for the offending key; when it is absent the span is empty.
    #[must_use]
    pub fn from_config_error(error: &ConfigError, src: &str) -> Self {
        match error {
            ConfigError::Parse(e) => {
                let span = e.span().unwrap_or(0..0);
                Self::new(e.message(), src, span.start, span.len())
                    .with_help("check the TOML syntax near the marked location")
            }
            ConfigError::InvalidValue { field, reason } => {
                let (offset, len) = locate_key(src, field);
                Self::new(format!("invalid value for {field}: {reason}"), src, offset, len)
            }
            ConfigError::MissingField { field } => {
                Self::new(format!("missing required field: {field}"), src, 0, 0)
                    .with_help(format!("add `{field} = ...` to the file"))
            }
            ConfigError::ReadFile(e) => Self::new(format!("failed to read config file: {e}"), src, 0, 0),
        }
    }
}

/// Byte range of the first `key =` assignment in `src`.
fn locate_key(src: &str, key: &str) -> (usize, usize) {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let start = offset + (line.len() - trimmed.len());
                return (start, line.trim_end().len() - (line.len() - trimmed.len()));
            }
        }
        offset += line.len();
    }
    (0, 0)
}
