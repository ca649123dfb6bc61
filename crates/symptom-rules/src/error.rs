//! Rule Table Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the rule table
#[derive(Debug, Error)]
pub enum RuleError {
    /// Rule file could not be opened or read
    #[error("Failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content
    #[error("Malformed rule table: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks a required column
    #[error("Rule table is missing required column: {0}")]
    MissingColumn(&'static str),
}
