//! Budget coverage command
//!
//! Finds words that cannot reach the clue budget and words the legacy count
//! already puts exactly on target.

use super::legacy::legacy_clue_count;
use crate::allocator::{Allocation, ClueAllocator};
use crate::core::WordRecord;
use crate::dataset::{SkippedRecord, skipped_records};

/// Under-budget words listed by default
pub const DEFAULT_SAMPLE: usize = 10;

/// Words listed from the exactly-at-target group
const AT_TARGET_EXAMPLES: usize = 5;

/// A word the allocator cannot bring up to the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnderBudgetWord {
    pub index: usize,
    pub word: String,
    pub allocation: Allocation,
}

/// Result of a budget scan
pub struct BudgetResult {
    pub total_records: usize,
    pub target: usize,
    /// Every under-budget word, in dataset order
    pub under_budget: Vec<UnderBudgetWord>,
    pub sample_size: usize,
    /// Words whose legacy count already equals the target
    pub at_target: usize,
    pub at_target_examples: Vec<String>,
    pub skipped: Vec<SkippedRecord>,
}

impl BudgetResult {
    /// Leading under-budget words to display
    #[must_use]
    pub fn sample(&self) -> &[UnderBudgetWord] {
        &self.under_budget[..self.under_budget.len().min(self.sample_size)]
    }
}

/// Scan the dataset for words the budget cannot be met for
#[must_use]
pub fn run_budget(records: &[WordRecord], allocator: &ClueAllocator, sample_size: usize) -> BudgetResult {
    let target = allocator.config().target_total;
    let allocations = allocator.allocate_all(records);

    let mut under_budget = Vec::new();
    let mut at_target = 0;
    let mut at_target_examples = Vec::new();

    for (index, (record, allocation)) in records.iter().zip(allocations).enumerate() {
        let Ok(allocation) = allocation else {
            continue;
        };
        if allocation.is_under_budget() {
            under_budget.push(UnderBudgetWord {
                index,
                word: record.label().to_string(),
                allocation,
            });
        }

        if legacy_clue_count(record) == Ok(target) {
            at_target += 1;
            if at_target_examples.len() < AT_TARGET_EXAMPLES {
                at_target_examples.push(record.label().to_string());
            }
        }
    }

    BudgetResult {
        total_records: records.len(),
        target,
        under_budget,
        sample_size,
        at_target,
        at_target_examples,
        skipped: skipped_records(records),
    }
}
