//! Error types for docbrowser.
//!
//! Library crates use [`DocBrowserError`] via `thiserror`.
//! App crates (cli/tui) wrap this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for loading configuration and documentation sources.
///
/// Browser operations themselves never fail; these errors only come from
/// reading files off disk.
#[derive(Debug, thiserror::Error)]
pub enum DocBrowserError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// TOML or Markdown parsing error.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Navigation tree validation error (duplicate ids, empty tree, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocBrowserError>;

impl DocBrowserError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = DocBrowserError::config("unknown start section");
        assert_eq!(err.to_string(), "config error: unknown start section");

        let err = DocBrowserError::validation("duplicate item id 'chatgpt'");
        assert!(err.to_string().contains("duplicate item id"));
    }

    #[test]
    fn io_error_carries_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DocBrowserError::io("/tmp/nav.toml", source);
        let msg = err.to_string();
        assert!(msg.contains("nav.toml"));
        assert!(msg.contains("gone"));
    }
}
