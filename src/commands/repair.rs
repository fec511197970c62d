//! Repair command
//!
//! Loads the dataset, runs the selected repair passes and writes the file back
//! only when something changed.

use crate::dataset::{DatasetError, RepairOptions, RepairReport, load_dataset, repair_dataset, save_dataset};
use std::path::Path;
use tracing::info;

/// Result of a repair run
pub struct RepairOutcome {
    pub report: RepairReport,
    pub dry_run: bool,
    /// Whether the dataset file was rewritten
    pub written: bool,
}

/// Repair a dataset file in place
///
/// # Errors
/// Returns `DatasetError` if the dataset cannot be read or written.
pub fn run_repair(
    path: &Path,
    options: &RepairOptions,
    dry_run: bool,
) -> Result<RepairOutcome, DatasetError> {
    let mut records = load_dataset(path)?;
    let report = repair_dataset(&mut records, options);

    let written = report.is_changed() && !dry_run;
    if written {
        save_dataset(path, &records)?;
    } else {
        info!(dry_run, changed = report.is_changed(), "dataset left untouched");
    }

    Ok(RepairOutcome {
        report,
        dry_run,
        written,
    })
}
