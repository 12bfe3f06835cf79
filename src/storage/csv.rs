//! Response-matrix CSV reading and writing.
//!
//! Purpose
//! -------
//! Load binary response matrices from CSV (students as rows, items as
//! columns) and write them back out, plus a small scores report writer for
//! the CLI.
//!
//! Key behaviors
//! -------------
//! - An optional header row is detected, not declared: the first record is
//!   treated as a header only when at least one of its fields fails integer
//!   parsing. A first record of integers is data and must already be 0/1.
//! - Every data cell must parse as an integer 0 or 1; the first offending
//!   cell is reported with its record and field indices.
//! - Ragged rows surface as CSV decode errors from the reader itself.
//! - Written matrices carry an `Item_1..Item_M` header row, matching what
//!   the reader detects and skips.
use crate::irt::core::data::ResponseMatrix;
use crate::irt::errors::IrtError;
use crate::storage::errors::{StorageError, StorageResult};
use ndarray::{Array1, Array2};
use std::path::Path;

/// Read a validated [`ResponseMatrix`] from a CSV file.
///
/// Parameters
/// ----------
/// - `path`: CSV file with students as rows and items as columns; all data
///   cells must parse as 0/1 integers, with an optional header row.
///
/// Returns
/// -------
/// `StorageResult<ResponseMatrix>` holding the validated matrix.
///
/// Errors
/// ------
/// - `StorageError::Read` when the file cannot be opened.
/// - `StorageError::Csv` for decode failures, including inconsistent row
///   lengths.
/// - `StorageError::NonNumericCell` when a cell past the header is not an
///   integer.
/// - `StorageError::NonBinaryCell` when a cell parses to something other
///   than 0 or 1.
/// - `StorageError::EmptyCsv` when no data rows remain after header
///   detection.
pub fn read_responses(path: &Path) -> StorageResult<ResponseMatrix> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| StorageError::Read { path: path.to_owned(), text: e.to_string() })?;

    let mut cells: Vec<f64> = Vec::new();
    let mut n_rows = 0usize;
    let mut n_cols = 0usize;

    for (row, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| StorageError::Csv { path: path.to_owned(), text: e.to_string() })?;
        let values = match parse_fields(&record) {
            Ok(values) => values,
            Err((col, text)) => {
                if row == 0 {
                    continue;
                }
                return Err(StorageError::NonNumericCell { path: path.to_owned(), row, col, text });
            }
        };
        for (col, &value) in values.iter().enumerate() {
            if value != 0 && value != 1 {
                return Err(StorageError::NonBinaryCell { path: path.to_owned(), row, col, value });
            }
        }

        if n_rows == 0 {
            n_cols = values.len();
        }
        n_rows += 1;
        cells.extend(values.iter().map(|&v| v as f64));
    }

    if n_rows == 0 {
        return Err(StorageError::EmptyCsv { path: path.to_owned() });
    }

    let responses = Array2::from_shape_vec((n_rows, n_cols), cells)
        .map_err(|e| StorageError::Csv { path: path.to_owned(), text: e.to_string() })?;
    ResponseMatrix::new(responses).map_err(|e| match e {
        IrtError::EmptyResponseMatrix => StorageError::EmptyCsv { path: path.to_owned() },
        other => StorageError::Model { text: other.to_string() },
    })
}

/// Parse every field of a record as `i64`, reporting the first failure as
/// `(field index, raw text)`.
fn parse_fields(record: &csv::StringRecord) -> Result<Vec<i64>, (usize, String)> {
    record
        .iter()
        .enumerate()
        .map(|(col, field)| field.trim().parse::<i64>().map_err(|_| (col, field.to_string())))
        .collect()
}

/// Write a response matrix as CSV with an `Item_1..Item_M` header row.
///
/// # Errors
/// - `StorageError::Write` when the file cannot be created or flushed.
/// - `StorageError::Csv` for record-level write failures.
pub fn write_responses(path: &Path, data: &ResponseMatrix) -> StorageResult<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| StorageError::Write { path: path.to_owned(), text: e.to_string() })?;
    let csv_err = |e: csv::Error| StorageError::Csv { path: path.to_owned(), text: e.to_string() };

    let header: Vec<String> = (1..=data.n_items()).map(|j| format!("Item_{j}")).collect();
    writer.write_record(&header).map_err(csv_err)?;
    for row in data.responses.rows() {
        let fields: Vec<&str> = row.iter().map(|&v| if v == 1.0 { "1" } else { "0" }).collect();
        writer.write_record(&fields).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| StorageError::Write { path: path.to_owned(), text: e.to_string() })
}

/// Write the scores report: one row per student with the expected score
/// and the 0–1000 points.
///
/// # Errors
/// - `StorageError::Write` / `StorageError::Csv` as in [`write_responses`].
pub fn write_scores(path: &Path, expected: &Array1<f64>, points: &[u32]) -> StorageResult<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| StorageError::Write { path: path.to_owned(), text: e.to_string() })?;
    let csv_err = |e: csv::Error| StorageError::Csv { path: path.to_owned(), text: e.to_string() };

    writer.write_record(["student", "expected_score", "points"]).map_err(csv_err)?;
    for (index, (&score, &pts)) in expected.iter().zip(points.iter()).enumerate() {
        writer
            .write_record([index.to_string(), score.to_string(), pts.to_string()])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|e| StorageError::Write { path: path.to_owned(), text: e.to_string() })
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
    // - The write -> read round-trip, including header emission/detection.
    // - Header sniffing on integer-only and text first rows.
    // - Cell validation errors with file-accurate indices.
    // - Empty, header-only, ragged, and missing files.
    // - The scores report layout.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify a written matrix reads back identically through the header
    // round-trip.
    //
    // Given
    // -----
    // - A 3×2 matrix written with `write_responses`.
    //
    // Expect
    // ------
    // - `read_responses` returns an equal matrix.
    fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("responses.csv");
        let data = ResponseMatrix::new(array![[1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]).unwrap();

        write_responses(&path, &data).unwrap();
        let loaded = read_responses(&path).unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    // Purpose
    // -------
    // Verify a headerless all-integer file is read entirely as data.
    //
    // Given
    // -----
    // - Two raw rows of 0/1 integers, no header.
    //
    // Expect
    // ------
    // - A 2×2 matrix including the first row.
    fn reads_headerless_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.csv");
        fs::write(&path, "1,0\n0,1\n").unwrap();

        let loaded = read_responses(&path).unwrap();

        assert_eq!(loaded.responses, array![[1.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    // Purpose
    // -------
    // Verify a text first row is skipped as a header.
    //
    // Given
    // -----
    // - `Item_1,Item_2` followed by one data row.
    //
    // Expect
    // ------
    // - A 1×2 matrix holding only the data row.
    fn skips_detected_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("with_header.csv");
        fs::write(&path, "Item_1,Item_2\n1,0\n").unwrap();

        let loaded = read_responses(&path).unwrap();

        assert_eq!(loaded.responses, array![[1.0, 0.0]]);
    }

    #[test]
    // Purpose
    // -------
    // Verify an integer first row is data and gets the binary check, not
    // header treatment.
    //
    // Given
    // -----
    // - A first record of `2,1`.
    //
    // Expect
    // ------
    // - `NonBinaryCell` at record 0, field 0, value 2.
    fn integer_first_row_is_not_a_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad_first.csv");
        fs::write(&path, "2,1\n1,0\n").unwrap();

        match read_responses(&path) {
            Err(StorageError::NonBinaryCell { row: 0, col: 0, value: 2, .. }) => {}
            other => panic!("expected NonBinaryCell at (0, 0), got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify a non-integer cell past the header reports file-accurate
    // indices.
    //
    // Given
    // -----
    // - A header, one good row, then `0,x` at record 2.
    //
    // Expect
    // ------
    // - `NonNumericCell { row: 2, col: 1, text: "x" }`.
    fn non_numeric_cell_reports_position() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad_cell.csv");
        fs::write(&path, "Item_1,Item_2\n1,0\n0,x\n").unwrap();

        match read_responses(&path) {
            Err(StorageError::NonNumericCell { row: 2, col: 1, text, .. }) => {
                assert_eq!(text, "x");
            }
            other => panic!("expected NonNumericCell at (2, 1), got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify empty and header-only files are rejected the same way.
    //
    // Given
    // -----
    // - A zero-byte file and a file holding only a header row.
    //
    // Expect
    // ------
    // - `EmptyCsv` from both.
    fn empty_and_header_only_files_are_rejected() {
        let dir = tempdir().unwrap();

        let empty = dir.path().join("empty.csv");
        fs::write(&empty, "").unwrap();
        assert!(matches!(read_responses(&empty), Err(StorageError::EmptyCsv { .. })));

        let header_only = dir.path().join("header_only.csv");
        fs::write(&header_only, "Item_1,Item_2\n").unwrap();
        assert!(matches!(read_responses(&header_only), Err(StorageError::EmptyCsv { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify inconsistent row lengths surface as CSV decode errors.
    //
    // Given
    // -----
    // - A 2-field row followed by a 3-field row.
    //
    // Expect
    // ------
    // - `StorageError::Csv`.
    fn ragged_rows_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "1,0\n0,1,1\n").unwrap();

        assert!(matches!(read_responses(&path), Err(StorageError::Csv { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify a missing file is reported as a read failure.
    //
    // Given
    // -----
    // - A path that does not exist.
    //
    // Expect
    // ------
    // - `StorageError::Read` carrying that path.
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        match read_responses(&path) {
            Err(StorageError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the scores report layout: header plus one row per student.
    //
    // Given
    // -----
    // - Two expected scores and their points.
    //
    // Expect
    // ------
    // - Three CSV lines with the student index leading each data row.
    fn write_scores_emits_one_row_per_student() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.csv");

        write_scores(&path, &array![1.5, 2.0], &[750, 1000]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "student,expected_score,points");
        assert_eq!(lines[1], "0,1.5,750");
        assert_eq!(lines[2], "1,2,1000");
        assert_eq!(lines.len(), 3);
    }
}
