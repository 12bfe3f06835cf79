//! Errors for response-CSV and parameter-bundle persistence.
//!
//! This module defines [`StorageError`] for everything that can go wrong at
//! the I/O boundary: file access, CSV decoding, cell validation, and bundle
//! (de)serialization. Underlying library errors are carried as rendered
//! text so the type stays `Clone`/`PartialEq` like the rest of the error
//! surface.
//!
//! ## Conventions
//! - Paths are carried verbatim so messages point at the offending file.
//! - Cell indices are **0-based record/field indices in the file** (a
//!   detected header row counts as record 0).
use std::path::PathBuf;

/// Result alias for storage operations that may produce [`StorageError`].
pub type StorageResult<T> = Result<T, StorageError>;

/// Unified error type for the persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    // ---- File I/O ----
    /// A file could not be opened or read.
    Read { path: PathBuf, text: String },

    /// A file could not be created or written.
    Write { path: PathBuf, text: String },

    // ---- Response CSV ----
    /// The CSV layer reported a decode failure (bad UTF-8, ragged rows).
    Csv { path: PathBuf, text: String },

    /// The file contains no data rows.
    EmptyCsv { path: PathBuf },

    /// A cell past the header could not be parsed as an integer.
    NonNumericCell { path: PathBuf, row: usize, col: usize, text: String },

    /// A cell parsed to an integer other than 0 or 1.
    NonBinaryCell { path: PathBuf, row: usize, col: usize, value: i64 },

    // ---- Parameter bundle ----
    /// The bundle file is not valid JSON for the expected schema.
    Bundle { path: PathBuf, text: String },

    /// The bundle decoded but its arrays are inconsistent.
    BundleShape { reason: String },

    // ---- Fallback ----
    /// Wrapper for model errors with no dedicated storage variant.
    Model { text: String },
}

impl std::error::Error for StorageError {}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- File I/O ----
            StorageError::Read { path, text } => {
                write!(f, "Failed to read {}: {text}", path.display())
            }
            StorageError::Write { path, text } => {
                write!(f, "Failed to write {}: {text}", path.display())
            }

            // ---- Response CSV ----
            StorageError::Csv { path, text } => {
                write!(f, "Malformed CSV {}: {text}", path.display())
            }
            StorageError::EmptyCsv { path } => {
                write!(f, "No response rows in {}", path.display())
            }
            StorageError::NonNumericCell { path, row, col, text } => {
                write!(
                    f,
                    "Non-numeric response {text:?} at record {row}, field {col} in {}",
                    path.display()
                )
            }
            StorageError::NonBinaryCell { path, row, col, value } => {
                write!(
                    f,
                    "Response {value} at record {row}, field {col} in {} is not 0 or 1",
                    path.display()
                )
            }

            // ---- Parameter bundle ----
            StorageError::Bundle { path, text } => {
                write!(f, "Malformed parameter bundle {}: {text}", path.display())
            }
            StorageError::BundleShape { reason } => {
                write!(f, "Inconsistent parameter bundle: {reason}")
            }

            // ---- Fallback ----
            StorageError::Model { text } => {
                write!(f, "Model error: {text}")
            }
        }
    }
}
