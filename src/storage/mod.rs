//! File formats for calibration inputs and outputs.
//!
//! Overview
//! --------
//! Everything that crosses the process boundary lives here: response
//! matrices as CSV, fitted parameters as JSON bundles, and the scores
//! report the CLI emits. The submodules are:
//!
//! - [`errors`]: storage error types carrying paths and cell positions.
//! - [`csv`]: response-matrix reading/writing and the scores report.
//! - [`bundle`]: the JSON parameter bundle and its validations.
pub mod bundle;
pub mod csv;
pub mod errors;

pub use self::bundle::ParamBundle;
pub use self::csv::{read_responses, write_responses, write_scores};
pub use self::errors::{StorageError, StorageResult};
