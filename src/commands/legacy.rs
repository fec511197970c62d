//! Legacy clue count
//!
//! The count the game showed before the fixed clue budget: every type capped on
//! its own, then the sum capped at fifteen. Used only to compare reports against.

use crate::core::{ClueCounts, RecordError, WordRecord};

/// Per-type caps of the legacy count
pub const LEGACY_CAPS: ClueCounts = ClueCounts::new(4, 3, 1, 1, 4);

/// Cap on the legacy total
pub const LEGACY_MAX_TOTAL: usize = 15;

/// Legacy per-type breakdown of a record
///
/// # Errors
/// Returns `RecordError` if the record has no usable word.
pub fn legacy_counts(record: &WordRecord) -> Result<ClueCounts, RecordError> {
    Ok(record.inventory()?.min(&LEGACY_CAPS))
}

/// Legacy total for a breakdown
#[must_use]
pub fn legacy_total(counts: &ClueCounts) -> usize {
    counts.total().min(LEGACY_MAX_TOTAL)
}

/// Legacy total of a record
///
/// # Errors
/// Returns `RecordError` if the record has no usable word.
pub fn legacy_clue_count(record: &WordRecord) -> Result<usize, RecordError> {
    legacy_counts(record).map(|counts| legacy_total(&counts))
}
