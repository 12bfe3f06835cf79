use crate::irt::errors::{IrtError, ParamError};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Gradient ----
    /// Implies that FD should be used
    GradientNotImplemented,

    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- AdamOptions ----
    /// Learning rate needs to be positive and finite.
    InvalidLearningRate {
        value: f64,
        reason: &'static str,
    },
    /// Iteration count needs to be at least 1.
    InvalidIterations {
        iterations: usize,
        reason: &'static str,
    },
    /// Moment decay rates need to lie in [0, 1).
    InvalidDecayRate {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Denominator epsilon needs to be positive and finite.
    InvalidEpsilon {
        value: f64,
        reason: &'static str,
    },

    // ---- Iteration loop ----
    /// Loss became non-finite during fitting; carries the offending iteration.
    NonFiniteLoss {
        iteration: usize,
        value: f64,
    },
    /// Objective returned a non-finite value outside the iteration loop.
    NonFiniteValue {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- Model errors ----
    /// Flat parameter vector has the wrong length for the model.
    FlatLengthMismatch {
        expected: usize,
        actual: usize,
    },
    /// Response matrix shape does not match the model.
    DataDimsMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Response matrix column count does not match the frozen item set.
    ItemCountMismatch {
        expected: usize,
        actual: usize,
    },
    /// A parameter block contains a non-finite entry.
    NonFiniteParam {
        field: &'static str,
        index: usize,
        value: f64,
    },
    /// A parameter block has the wrong length.
    ParamLengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Parameter blocks must be non-empty.
    EmptyParams,

    // ---- Fallback ----
    /// Wrapper for model errors with no dedicated optimizer variant.
    ModelError {
        text: String,
    },
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            OptError::GradientNotImplemented => {
                write!(f, "Gradient optimization not implemented")
            }
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- AdamOptions ----
            OptError::InvalidLearningRate { value, reason } => {
                write!(f, "Invalid learning rate {value}: {reason}")
            }
            OptError::InvalidIterations { iterations, reason } => {
                write!(f, "Invalid iteration count {iterations}: {reason}")
            }
            OptError::InvalidDecayRate { name, value, reason } => {
                write!(f, "Invalid decay rate {name} = {value}: {reason}")
            }
            OptError::InvalidEpsilon { value, reason } => {
                write!(f, "Invalid epsilon {value}: {reason}")
            }

            // ---- Iteration loop ----
            OptError::NonFiniteLoss { iteration, value } => {
                write!(f, "Non-finite loss {value} at iteration {iteration}; fit aborted")
            }
            OptError::NonFiniteValue { value } => {
                write!(f, "Non-finite objective value: {value}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }

            // ---- Model errors ----
            OptError::FlatLengthMismatch { expected, actual } => {
                write!(f, "Flat parameter length mismatch: expected {expected}, actual {actual}")
            }
            OptError::DataDimsMismatch { expected, found } => {
                write!(
                    f,
                    "Response matrix shape mismatch: expected {expected:?}, found {found:?}"
                )
            }
            OptError::ItemCountMismatch { expected, actual } => {
                write!(f, "Item count mismatch: expected {expected}, actual {actual}")
            }
            OptError::NonFiniteParam { field, index, value } => {
                write!(f, "Invalid {field} at index {index}: {value}, must be finite")
            }
            OptError::ParamLengthMismatch { field, expected, actual } => {
                write!(f, "{field} length mismatch: expected {expected}, actual {actual}")
            }
            OptError::EmptyParams => {
                write!(f, "Parameter blocks must be non-empty")
            }

            // ---- Fallback ----
            OptError::ModelError { text } => {
                write!(f, "Model error: {text}")
            }
        }
    }
}

impl From<IrtError> for OptError {
    fn from(err: IrtError) -> Self {
        match err {
            IrtError::DataDimsMismatch { expected, found } => {
                OptError::DataDimsMismatch { expected, found }
            }
            IrtError::ItemCountMismatch { expected, actual } => {
                OptError::ItemCountMismatch { expected, actual }
            }
            other => OptError::ModelError { text: other.to_string() },
        }
    }
}

impl From<ParamError> for OptError {
    fn from(err: ParamError) -> Self {
        match err {
            ParamError::FlatLengthMismatch { expected, actual } => {
                OptError::FlatLengthMismatch { expected, actual }
            }
            ParamError::NonFiniteParam { field, index, value } => {
                OptError::NonFiniteParam { field, index, value }
            }
            ParamError::LengthMismatch { field, expected, actual } => {
                OptError::ParamLengthMismatch { field, expected, actual }
            }
            ParamError::EmptyParams => OptError::EmptyParams,
        }
    }
}
