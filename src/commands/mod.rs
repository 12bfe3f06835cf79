//! Subcommand implementations for the `irt_calibrate` binary.

pub mod fit;
pub mod score;
pub mod simulate;
