//! Validate command

use crate::allocator::ClueAllocator;
use crate::core::WordRecord;
use crate::dataset::{IssueKind, ValidationReport, validate_dataset};

/// Validate the dataset, optionally keeping only some issue kinds
#[must_use]
pub fn run_validate(
    records: &[WordRecord],
    allocator: &ClueAllocator,
    only: &[IssueKind],
) -> ValidationReport {
    let report = validate_dataset(records, allocator);
    if only.is_empty() {
        return report;
    }

    let issues = report
        .issues
        .into_iter()
        .filter(|issue| only.contains(&issue.kind))
        .collect();
    ValidationReport::from_issues(report.total_records, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::AllocatorConfig;
    use crate::dataset::parse_dataset;

    #[test]
    fn filter_keeps_requested_kinds() {
        let records = parse_dataset(include_str!("../../data/sample_puzzle.json")).unwrap();
        let allocator = ClueAllocator::new(AllocatorConfig::default()).unwrap();

        let full = run_validate(&records, &allocator, &[]);
        let under = run_validate(&records, &allocator, &[IssueKind::UnderBudget]);

        assert!(full.issues.len() > under.issues.len());
        assert_eq!(under.issues.len(), 2);
        assert_eq!(under.affected_words, 2);
        assert_eq!(under.counts.len(), 1);
        assert_eq!(under.total_records, records.len());
    }
}
