//! Error type for everything outside the transform itself.
//!
//! The transform reports its two recoverable conditions as warnings; these variants
//! cover reading, parsing and writing the files around it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
/// Failures raised while loading, parsing or writing stylesheets and plans.
pub enum Error {
    /// Failed to read a file.
    #[error("failed to read '{path}': {source}")]
    FileRead {
        /// File that could not be read.
        path: PathBuf,
        #[source]
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("failed to write '{path}': {source}")]
    FileWrite {
        /// File that could not be written.
        path: PathBuf,
        #[source]
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Failed to walk a directory while collecting stylesheets.
    #[error("failed to scan '{path}': {source}")]
    Walk {
        /// Root of the walk that failed.
        path: PathBuf,
        #[source]
        /// Underlying walk failure.
        source: walkdir::Error,
    },

    /// The configuration file could not be decoded.
    #[error("invalid configuration in '{path}': {message}")]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },

    /// The tree-sitter grammar could not be loaded.
    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser returned no tree.
    #[error("parser produced no syntax tree")]
    Parse,

    /// An edit plan could not be decoded or encoded.
    #[error("invalid edit plan: {0}")]
    Plan(#[from] serde_json::Error),

    /// An edit has an empty or reversed range.
    #[error("edit {char_start}..{char_end} for '{file_name}' is not a valid range")]
    InvalidEdit {
        /// File the edit targets.
        file_name: String,
        /// First char of the replaced range.
        char_start: usize,
        /// End of the replaced range (exclusive).
        char_end: usize,
    },

    /// textum could not apply a file's edits.
    #[error("failed to patch '{file_name}': {source}")]
    Patch {
        /// File being patched.
        file_name: String,
        #[source]
        /// Underlying patch failure.
        source: textum::PatchError,
    },
}
