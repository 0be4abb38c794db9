/*!
 * Error types for the tgquery application.
 *
 * This module contains custom error types for parsing and querying TextGrid
 * annotation files, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while parsing or querying a TextGrid document
#[derive(Error, Debug)]
pub enum TextGridError {
    /// One of the fixed file header checkpoints is missing or invalid
    #[error("Malformed preamble at line {line}: {reason}")]
    MalformedPreamble {
        /// 1-based line number where the checkpoint failed
        line: usize,
        /// What was expected
        reason: String,
    },

    /// A tier header (`item [n]:` block) could not be read
    #[error("Malformed tier header at line {line}: {reason}")]
    MalformedTierHeader {
        /// 1-based line number
        line: usize,
        /// What was expected
        reason: String,
    },

    /// The tier class is neither `IntervalTier` nor `TextTier`
    #[error("Unrecognized tier class \"{class}\" at line {line}")]
    UnrecognizedTierClass {
        /// 1-based line number of the `class` field
        line: usize,
        /// The class text found in the file
        class: String,
    },

    /// An interval or point is missing a required field
    #[error("Malformed record {index} of tier \"{tier}\" at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number of the offending line
        line: usize,
        /// Tier the record belongs to
        tier: String,
        /// 1-based record position inside the tier
        index: usize,
        /// What was expected
        reason: String,
    },

    /// Two tiers share the same name
    #[error("Duplicate tier name: {0}")]
    DuplicateTier(String),

    /// Query references a tier that is not in the document
    #[error("Unknown tier: {0}")]
    UnknownTier(String),

    /// First/last queried on a tier with no entries
    #[error("Tier has no entries: {0}")]
    EmptyTier(String),

    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TextGridError {
    /// Whether the error comes from a query rather than from parsing
    pub fn is_query_error(&self) -> bool {
        matches!(self, Self::UnknownTier(_) | Self::EmptyTier(_))
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from TextGrid parsing or querying
    #[error("TextGrid error: {0}")]
    TextGrid(#[from] TextGridError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

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
