//! Word analysis command
//!
//! Shows how the allocator treats a single word under every strategy.

use super::legacy::legacy_clue_count;
use crate::allocator::{Allocation, ClueAllocator, Strategy};
use crate::core::{ClueCounts, WordRecord};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Uncapped inventory
    pub inventory: ClueCounts,
    pub legacy_total: usize,
    /// Allocation under the configured strategy
    pub strategy: Strategy,
    pub allocation: Allocation,
    /// Allocation under each preset
    pub presets: Vec<(Strategy, Allocation)>,
}

/// Analyze a word from the dataset
///
/// # Errors
///
/// Returns an error if:
/// - No record matches the word (case-insensitive)
/// - The matching record has no usable word
pub fn analyze_word(
    word: &str,
    records: &[WordRecord],
    allocator: &ClueAllocator,
) -> Result<AnalysisResult, String> {
    let record = records
        .iter()
        .find(|record| record.is_word(word))
        .ok_or_else(|| format!("Word '{word}' not in dataset"))?;

    let inventory = record.inventory().map_err(|e| format!("Invalid record: {e}"))?;
    let legacy_total = legacy_clue_count(record).map_err(|e| format!("Invalid record: {e}"))?;

    let presets = Strategy::PRESETS
        .iter()
        .map(|&strategy| {
            let allocation = allocator.for_strategy(strategy).allocate_inventory(&inventory);
            (strategy, allocation)
        })
        .collect();

    Ok(AnalysisResult {
        word: record.label().to_string(),
        inventory,
        legacy_total,
        strategy: allocator.config().strategy,
        allocation: allocator.allocate_inventory(&inventory),
        presets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::AllocatorConfig;
    use crate::dataset::parse_dataset;

    fn sample() -> Vec<WordRecord> {
        parse_dataset(include_str!("../../data/sample_puzzle.json")).unwrap()
    }

    fn allocator() -> ClueAllocator {
        ClueAllocator::new(AllocatorConfig::default()).unwrap()
    }

    #[test]
    fn analyze_rich_word() {
        let result = analyze_word("harbor", &sample(), &allocator()).unwrap();

        assert_eq!(result.word, "harbor");
        assert_eq!(result.inventory, ClueCounts::new(4, 3, 1, 1, 5));
        assert_eq!(result.legacy_total, 13);
        assert_eq!(result.strategy, Strategy::Balanced);
        assert_eq!(result.allocation.counts, ClueCounts::new(3, 2, 1, 1, 2));
        assert_eq!(result.presets.len(), 3);
        assert!(result.presets.iter().all(|(_, a)| a.total() == 9));
    }

    #[test]
    fn analyze_is_case_insensitive() {
        let result = analyze_word("HARBOR", &sample(), &allocator()).unwrap();
        assert_eq!(result.word, "harbor");
    }

    #[test]
    fn analyze_under_budget_word() {
        let result = analyze_word("calm", &sample(), &allocator()).unwrap();

        assert!(result.allocation.is_under_budget());
        assert_eq!(result.allocation.total(), 5);
        assert_eq!(result.allocation.shortfall(), 4);
    }

    #[test]
    fn analyze_presets_differ() {
        let result = analyze_word("harbor", &sample(), &allocator()).unwrap();
        let definition_heavy = result
            .presets
            .iter()
            .find(|(strategy, _)| *strategy == Strategy::DefinitionHeavy)
            .map(|(_, allocation)| allocation.counts)
            .unwrap();

        assert_eq!(definition_heavy, ClueCounts::new(4, 2, 1, 0, 2));
    }

    #[test]
    fn analyze_unknown_word() {
        let result = analyze_word("zzzzz", &sample(), &allocator());
        assert!(result.is_err());
    }
}
