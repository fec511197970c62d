//! Puzzle dataset loading and saving
//!
//! The dataset is a single JSON array of word records. Saving writes a sibling
//! temp file first and renames it over the target, so an interrupted run never
//! leaves a truncated dataset behind.

use super::DatasetError;
use crate::core::WordRecord;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Parse a dataset from JSON text
///
/// # Errors
/// Returns the JSON error if the text is not an array of record objects.
///
/// # Examples
/// ```
/// use clue_budget::dataset::parse_dataset;
///
/// let records = parse_dataset(r#"[{"word": "calm", "definitions": ["Not agitated"]}]"#).unwrap();
/// assert_eq!(records.len(), 1);
/// assert!(records[0].examples.is_empty());
/// ```
pub fn parse_dataset(text: &str) -> Result<Vec<WordRecord>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Render a dataset as indented JSON with a trailing newline
///
/// # Errors
/// Returns the JSON error if a record cannot be serialized.
pub fn to_json_string(records: &[WordRecord]) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(records)?;
    text.push('\n');
    Ok(text)
}

/// Load a dataset file
///
/// # Errors
/// Returns `DatasetError` if the file cannot be read or is not valid dataset JSON.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<WordRecord>, DatasetError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| DatasetError::io(path, &e))?;
    let records = parse_dataset(&text).map_err(|e| DatasetError::json(path, &e))?;

    info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

/// Atomically replace a dataset file
///
/// # Errors
/// Returns `DatasetError` if serialization, the temp file write, or the rename fails.
pub fn save_dataset<P: AsRef<Path>>(path: P, records: &[WordRecord]) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let text = to_json_string(records).map_err(|e| DatasetError::json(path, &e))?;

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let temp_file = NamedTempFile::new_in(parent).map_err(|e| DatasetError::io(parent, &e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| DatasetError::io(temp_file.path(), &e))?;
    }
    debug!(temp = %temp_file.path().display(), "wrote temp dataset");

    temp_file
        .persist(path)
        .map_err(|e| DatasetError::io(path, &e.error))?;

    info!(path = %path.display(), records = records.len(), "saved dataset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = include_str!("../../data/sample_puzzle.json");

    #[test]
    fn sample_dataset_parses() {
        let records = parse_dataset(SAMPLE).unwrap();
        assert!(records.len() >= 8);
        assert!(records.iter().all(|r| r.word.is_some()));
    }

    #[test]
    fn parse_rejects_non_array() {
        assert!(parse_dataset(r#"{"word": "calm"}"#).is_err());
    }

    #[test]
    fn output_is_indented_with_trailing_newline() {
        let records = vec![WordRecord::new("calm").with_definitions(["Not agitated"])];
        let text = to_json_string(&records).unwrap();

        assert!(text.starts_with("[\n  {\n    \"word\": \"calm\""));
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn non_ascii_text_is_written_verbatim() {
        let records = vec![WordRecord::new("café").with_definitions(["A small restaurant, señor"])];
        let text = to_json_string(&records).unwrap();
        assert!(text.contains("café"));
        assert!(text.contains("señor"));
    }

    #[test]
    fn save_then_load_preserves_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("puzzle.json");

        let records = parse_dataset(SAMPLE).unwrap();
        save_dataset(&path, &records).unwrap();
        let loaded = load_dataset(&path).unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("puzzle.json");
        fs::write(&path, "[]").unwrap();

        save_dataset(&path, &[WordRecord::new("calm")]).unwrap();

        let loaded = load_dataset(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        // Only the dataset itself remains in the directory
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_dataset("/nonexistent/puzzle.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/puzzle.json"));
    }

    #[test]
    fn load_malformed_json_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{\"word\": ").unwrap();

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
