//! Puzzle dataset maintenance
//!
//! Loading and atomically rewriting the dataset file, plus the repair and
//! validation passes that run over every record.

mod loader;
pub mod repair;
pub mod roots;
pub mod validate;

pub use loader::{load_dataset, parse_dataset, save_dataset, to_json_string};
pub use repair::{RepairAction, RepairOptions, RepairReport, repair_dataset, repair_record};
pub use validate::{Issue, IssueKind, ValidationReport, validate_dataset, validate_record};

use crate::core::{RecordError, WordRecord};
use std::fmt;
use std::path::Path;

/// Error type for dataset file access
#[derive(Debug)]
pub enum DatasetError {
    Io { path: String, message: String },
    Json { path: String, message: String },
}

impl DatasetError {
    pub(crate) fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn json(path: &Path, err: &serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "Cannot access {path}: {message}"),
            Self::Json { path, message } => write!(f, "Invalid dataset JSON in {path}: {message}"),
        }
    }
}

impl std::error::Error for DatasetError {}

/// A record left out of a pass because it has no usable word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub error: RecordError,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record #{}: {}", self.index, self.error)
    }
}

/// Records without a usable word, in dataset order
#[must_use]
pub fn skipped_records(records: &[WordRecord]) -> Vec<SkippedRecord> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record
                .word()
                .err()
                .map(|error| SkippedRecord { index, error })
        })
        .collect()
}
