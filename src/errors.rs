/*!
 * Error types for the flashgen application.
 *
 * This module contains custom error types for different parts of the
 * pipeline, using the thiserror crate for ergonomic error definitions.
 * Structural errors abort a run with no output; content gaps (missing
 * translations) are recoverable and never surface here.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Structural errors found while splitting markup into regions.
///
/// Every variant is fatal: malformed marker nesting would generate code
/// that silently misbehaves on the embedded target.
#[derive(Error, Debug)]
pub enum SplitError {
    /// An end marker appeared while no region was open
    #[error("closed region '{name}' but none was open")]
    UnopenedClose {
        /// Name on the offending end marker
        name: String,
    },

    /// An end marker named a different region than the open one
    #[error("expected to close region '{expected}' but found '{found}'")]
    MismatchedClose {
        /// Name of the currently open region
        expected: String,
        /// Name on the offending end marker
        found: String,
    },

    /// A start marker appeared while another region was still open
    #[error("region '{inner}' opened inside still-open region '{outer}'")]
    NestedStart {
        /// Name of the region that was already open
        outer: String,
        /// Name on the offending start marker
        inner: String,
    },

    /// End of input reached with a region still open
    #[error("region not closed: '{name}'")]
    UnclosedRegion {
        /// Name of the unclosed region
        name: String,
    },

    /// The markup contained no marker pairs at all
    #[error("no regions found in markup input")]
    NoRegions,
}

/// Errors reading or writing the persisted translation table
#[derive(Error, Debug)]
pub enum TableError {
    /// Error reading the table file
    #[error("failed to read translation table {path}: {source}")]
    Read {
        /// Table file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error parsing the table file contents
    #[error("failed to parse translation table {path}: {source}")]
    Parse {
        /// Table file path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Error writing the table file back to disk
    #[error("failed to write translation table {path}: {source}")]
    Write {
        /// Table file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Errors assembling localized regions into generated output
#[derive(Error, Debug)]
pub enum AssembleError {
    /// There was nothing to emit
    #[error("no regions to assemble, nothing to generate")]
    NoRegions,

    /// Two regions share a name within one language block
    #[error("duplicate region name '{name}' in language '{lang}'")]
    DuplicateName {
        /// Conflicting region name
        name: String,
        /// Language block the conflict occurred in
        lang: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from region splitting
    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    /// Error from translation table persistence
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Error from output assembly
    #[error("Assemble error: {0}")]
    Assemble(#[from] AssembleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
