//! Error types for swatch chart generation.
//!
//! Every failure aborts the run. Each variant carries the file or key that
//! caused it so the message printed on stderr points straight at the input
//! that needs fixing.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, SwatchError>;

/// Errors produced while loading inputs or rendering the chart.
#[derive(Debug, Error)]
pub enum SwatchError {
    /// An input document is malformed or has the wrong shape.
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse {
        /// Document that failed to parse
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A scheme key or colour name is missing.
    #[error("{what} '{key}' not found in {}{}", .path.display(), hint_suffix(.hint))]
    Lookup {
        /// Kind of thing looked up ("Colour scheme", "Colour", ...)
        what: &'static str,
        /// Missing key
        key: String,
        /// Document that was searched
        path: PathBuf,
        /// Optional hint, such as the keys that do exist
        hint: Option<String>,
    },

    /// A colour value is not a valid 6-digit hex colour.
    #[error("Invalid hex colour '{value}' for '{name}': expected 6 hex digits (#RRGGBB)")]
    Value {
        /// Colour name the value belongs to
        name: String,
        /// Offending value
        value: String,
    },

    /// Reading an input or writing the output failed.
    #[error("Failed to {action} {}", .path.display())]
    Io {
        /// What was being attempted ("read", "create", "write")
        action: &'static str,
        /// File involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Command-line or configuration values are unusable.
    #[error("{0}")]
    Usage(String),
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_deref().map(|h| format!(" ({h})")).unwrap_or_default()
}

impl SwatchError {
    /// Builds a [`SwatchError::Parse`] for `path`.
    pub fn parse(path: &Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Builds a [`SwatchError::Io`] for `path`.
    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Builds a [`SwatchError::Usage`].
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Process exit code for this error.
    ///
    /// Usage problems exit with 2 (matching clap's own usage failures),
    /// everything else with 1.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}
