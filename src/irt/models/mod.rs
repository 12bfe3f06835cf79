//! models — user-facing 3PL estimators.
//!
//! Purpose
//! -------
//! Expose the model types consumers fit directly: [`ThreePlModel`] for the
//! joint calibration of items and abilities, and [`AbilityModel`] for
//! scoring new students against an already-calibrated item block.
//!
//! Key behaviors
//! -------------
//! - Both models implement the optimizer-facing `LogLikelihood` trait and
//!   run through [`maximize`](crate::optimization::adam::maximize) with a
//!   fixed iteration budget.
//! - [`ThreePlModel::fit`] caches the optimizer outcome and the validated
//!   structured estimate; [`AbilityModel::fit`] is stateless and returns
//!   the refit parameter set.
//!
//! Testing notes
//! -------------
//! - Unit tests cover `LogLikelihood` conformance (`check` rejections),
//!   short-fit improvement, caching, and refit ordering. The integration
//!   suite owns recovery accuracy and determinism.

pub mod three_pl;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::three_pl::{AbilityModel, ThreePlModel};
