//! Errors for 3PL IRT models (response-data validation, parameter checks,
//! and estimation failures).
//!
//! This module defines a model error type, [`IrtError`], and a parameter error
//! type, [`ParamError`], used across the model layer and the CLI. Both
//! implement `Display`/`Error`; optimizer code converts them into
//! [`OptError`](crate::optimization::errors::OptError) so likelihood
//! implementations can use `?`.
//!
//! ## Conventions
//! - **Indices are 0-based** (row, column, and parameter indices alike).
//! - Responses must be **exactly 0 or 1**; anything else is rejected before
//!   fitting starts.
//! - Parameter blocks (`a`, `b`, `c`, `theta`) must be finite and
//!   consistently sized at all times.
//! - Optimizer failures are normalized to [`IrtError::OptimizationFailed`]
//!   with a human-readable status.

/// Crate-wide result alias for IRT operations that may produce [`IrtError`].
pub type IrtResult<T> = Result<T, IrtError>;

/// Result alias for parameter-construction/validation paths that may produce
/// [`ParamError`].
pub type ParamResult<T> = Result<T, ParamError>;

/// Unified error type for 3PL modeling.
///
/// Covers response-matrix validation, model-size and options checks,
/// estimation failures, and simulation setup. Implements `Display`/`Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum IrtError {
    // ---- Response-data validation ----
    /// Response matrix has no rows or no columns.
    EmptyResponseMatrix,

    /// A response cell is neither 0 nor 1.
    NonBinaryResponse { row: usize, col: usize, value: f64 },

    /// Response matrix shape does not match the model's (students, items).
    DataDimsMismatch { expected: (usize, usize), found: (usize, usize) },

    /// Response matrix column count does not match a frozen item set.
    ItemCountMismatch { expected: usize, actual: usize },

    // ---- Model construction / options ----
    /// Model sizes must both be at least 1.
    InvalidModelSize { n_students: usize, n_items: usize },

    /// Likelihood epsilon must be finite and > 0.
    InvalidEpsilon { value: f64, reason: &'static str },

    // ---- Estimation ----
    /// Optimizer failed; include a human-readable status/reason.
    OptimizationFailed { status: String },

    /// Model hasn't been fitted yet.
    ModelNotFitted,

    // ---- Simulation ----
    /// A sampling distribution could not be constructed.
    InvalidDistribution { what: &'static str, text: String },

    // ---- Parameter wrapper ----
    /// Wrapper for [`ParamError`] values crossing into model operations.
    InvalidParams { text: String },
}

impl std::error::Error for IrtError {}

impl std::fmt::Display for IrtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Response-data validation ----
            IrtError::EmptyResponseMatrix => {
                write!(f, "Response matrix must have at least one student and one item")
            }
            IrtError::NonBinaryResponse { row, col, value } => {
                write!(f, "Response at ({row}, {col}) is {value}; responses must be 0 or 1")
            }
            IrtError::DataDimsMismatch { expected, found } => {
                write!(f, "Response matrix shape mismatch: expected {expected:?}, found {found:?}")
            }
            IrtError::ItemCountMismatch { expected, actual } => {
                write!(f, "Item count mismatch: expected {expected}, actual {actual}")
            }

            // ---- Model construction / options ----
            IrtError::InvalidModelSize { n_students, n_items } => {
                write!(
                    f,
                    "Invalid model size ({n_students} students, {n_items} items): both must be \
                     at least 1"
                )
            }
            IrtError::InvalidEpsilon { value, reason } => {
                write!(f, "Invalid likelihood epsilon {value}: {reason}")
            }

            // ---- Estimation ----
            IrtError::OptimizationFailed { status } => {
                write!(f, "Optimization failed: {status}")
            }
            IrtError::ModelNotFitted => {
                write!(f, "Model has not been fitted yet")
            }

            // ---- Simulation ----
            IrtError::InvalidDistribution { what, text } => {
                write!(f, "Invalid {what} distribution: {text}")
            }

            // ---- Parameter wrapper ----
            IrtError::InvalidParams { text } => {
                write!(f, "Invalid parameters: {text}")
            }
        }
    }
}

impl From<ParamError> for IrtError {
    fn from(err: ParamError) -> Self {
        IrtError::InvalidParams { text: err.to_string() }
    }
}

/// Validation errors for item/ability parameter blocks.
///
/// Raised by [`ItemParams`](crate::irt::core::params::ItemParams) and
/// [`ParamSet`](crate::irt::core::params::ParamSet) constructors and by the
/// flat-vector mapping used during optimization.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// A parameter block has the wrong length.
    LengthMismatch { field: &'static str, expected: usize, actual: usize },

    /// A parameter block contains a NaN/±inf entry.
    NonFiniteParam { field: &'static str, index: usize, value: f64 },

    /// Flat parameter vector length is not `3 * n_items + n_students`.
    FlatLengthMismatch { expected: usize, actual: usize },

    /// Parameter blocks must be non-empty.
    EmptyParams,
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::LengthMismatch { field, expected, actual } => {
                write!(f, "{field} length mismatch: expected {expected}, actual {actual}")
            }
            ParamError::NonFiniteParam { field, index, value } => {
                write!(f, "Invalid {field} at index {index}: {value}, must be finite")
            }
            ParamError::FlatLengthMismatch { expected, actual } => {
                write!(f, "Flat parameter length mismatch: expected {expected}, actual {actual}")
            }
            ParamError::EmptyParams => {
                write!(f, "Parameter blocks must be non-empty")
            }
        }
    }
}
