//! JSON persistence for fitted parameter sets.
//!
//! Purpose
//! -------
//! Serialize a [`ParamSet`] to a JSON bundle on disk and load it back,
//! re-running the parameter validations on the way in so a hand-edited
//! bundle cannot smuggle malformed values into a model.
//!
//! Key behaviors
//! -------------
//! - The bundle holds four plain arrays (`a`, `b`, `c`, `theta`), making
//!   it easy to inspect or produce from other tooling.
//! - Values round-trip exactly: JSON numbers are written with the shortest
//!   representation that parses back to the same `f64`.
use crate::irt::core::params::{ItemParams, ParamSet};
use crate::storage::errors::{StorageError, StorageResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk form of a fitted [`ParamSet`].
///
/// Fields
/// ------
/// - `a`: per-item discriminations, length `M`.
/// - `b`: per-item difficulties, length `M`.
/// - `c`: per-item guessing rates, length `M`.
/// - `theta`: per-student abilities, length `N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamBundle {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub theta: Vec<f64>,
}

impl ParamBundle {
    /// Capture a [`ParamSet`] as a serializable bundle.
    pub fn from_params(params: &ParamSet) -> Self {
        ParamBundle {
            a: params.items.a.to_vec(),
            b: params.items.b.to_vec(),
            c: params.items.c.to_vec(),
            theta: params.theta.to_vec(),
        }
    }

    /// Rebuild the validated [`ParamSet`], rejecting bundles with
    /// mismatched lengths or non-finite values.
    ///
    /// # Errors
    /// - `StorageError::BundleShape` when the arrays fail validation.
    pub fn to_params(&self) -> StorageResult<ParamSet> {
        let items = self.items()?;
        ParamSet::new(items, Array1::from_vec(self.theta.clone()))
            .map_err(|e| StorageError::BundleShape { reason: e.to_string() })
    }

    /// Rebuild only the validated item block, for scoring fresh students
    /// against an existing calibration.
    ///
    /// # Errors
    /// - `StorageError::BundleShape` when the item arrays fail validation.
    pub fn items(&self) -> StorageResult<ItemParams> {
        ItemParams::new(
            Array1::from_vec(self.a.clone()),
            Array1::from_vec(self.b.clone()),
            Array1::from_vec(self.c.clone()),
        )
        .map_err(|e| StorageError::BundleShape { reason: e.to_string() })
    }

    /// Write the bundle as pretty-printed JSON.
    ///
    /// # Errors
    /// - `StorageError::Bundle` when serialization fails.
    /// - `StorageError::Write` when the file cannot be written.
    pub fn save(&self, path: &Path) -> StorageResult<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| StorageError::Bundle { path: path.to_owned(), text: e.to_string() })?;
        fs::write(path, text)
            .map_err(|e| StorageError::Write { path: path.to_owned(), text: e.to_string() })
    }

    /// Load a bundle from a JSON file.
    ///
    /// # Errors
    /// - `StorageError::Read` when the file cannot be read.
    /// - `StorageError::Bundle` when the contents are not a valid bundle.
    pub fn load(path: &Path) -> StorageResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| StorageError::Read { path: path.to_owned(), text: e.to_string() })?;
        serde_json::from_str(&text)
            .map_err(|e| StorageError::Bundle { path: path.to_owned(), text: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::fs;
    use tempfile::tempdir;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The exact save -> load -> to_params round-trip.
    // - Validation of malformed bundles on the way back in.
    // - Error mapping for unreadable and unparseable files.
    // -------------------------------------------------------------------------

    fn sample_params() -> ParamSet {
        let items = ItemParams::new(
            array![1.25, 0.7109375],
            array![-0.5, 1.0000001],
            array![0.2, 0.15],
        )
        .unwrap();
        ParamSet::new(items, array![0.1, -0.3, 2.25]).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify parameters survive the JSON round-trip bit for bit.
    //
    // Given
    // -----
    // - A 3-student, 2-item parameter set with non-round values.
    //
    // Expect
    // ------
    // - `to_params` after save/load equals the original exactly.
    fn save_then_load_round_trips_exactly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("estimates.json");
        let params = sample_params();

        ParamBundle::from_params(&params).save(&path).unwrap();
        let loaded = ParamBundle::load(&path).unwrap().to_params().unwrap();

        assert_eq!(loaded.items.a, params.items.a);
        assert_eq!(loaded.items.b, params.items.b);
        assert_eq!(loaded.items.c, params.items.c);
        assert_eq!(loaded.theta, params.theta);
    }

    #[test]
    // Purpose
    // -------
    // Verify a bundle with mismatched item lengths fails validation.
    //
    // Given
    // -----
    // - `b` one entry shorter than `a`.
    //
    // Expect
    // ------
    // - `BundleShape` from `to_params`.
    fn mismatched_lengths_are_rejected() {
        let bundle = ParamBundle {
            a: vec![1.0, 1.0],
            b: vec![0.0],
            c: vec![0.2, 0.2],
            theta: vec![0.0],
        };

        assert!(matches!(bundle.to_params(), Err(StorageError::BundleShape { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify a non-finite stored value fails validation.
    //
    // Given
    // -----
    // - A NaN difficulty.
    //
    // Expect
    // ------
    // - `BundleShape` from both `to_params` and `items`.
    fn non_finite_values_are_rejected() {
        let bundle = ParamBundle {
            a: vec![1.0],
            b: vec![f64::NAN],
            c: vec![0.2],
            theta: vec![0.0],
        };

        assert!(matches!(bundle.to_params(), Err(StorageError::BundleShape { .. })));
        assert!(matches!(bundle.items(), Err(StorageError::BundleShape { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify file-level failures map to the right variants.
    //
    // Given
    // -----
    // - A missing path and a file holding invalid JSON.
    //
    // Expect
    // ------
    // - `Read` for the missing file, `Bundle` for the bad contents.
    fn load_failures_map_to_read_and_bundle() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(ParamBundle::load(&missing), Err(StorageError::Read { .. })));

        let garbled = dir.path().join("garbled.json");
        fs::write(&garbled, "{\"a\": [1.0], \"b\":").unwrap();
        assert!(matches!(ParamBundle::load(&garbled), Err(StorageError::Bundle { .. })));
    }
}
