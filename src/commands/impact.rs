//! Budget impact command
//!
//! Compares the fixed clue budget against the legacy clue count for every word,
//! once per strategy.

use super::legacy::{legacy_counts, legacy_total};
use crate::allocator::{ClueAllocator, Strategy};
use crate::core::{ClueCounts, ClueType, RecordError, WordRecord};
use crate::dataset::{SkippedRecord, skipped_records};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// Transformations shown per strategy
pub const EXAMPLE_LIMIT: usize = 5;

/// One word whose total changes under the budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    pub word: String,
    pub legacy: ClueCounts,
    pub legacy_total: usize,
    pub allocation: ClueCounts,
}

/// Impact of one strategy over the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyImpact {
    pub strategy: Strategy,
    pub losing: usize,
    pub gaining: usize,
    pub unchanged: usize,
    /// Clues removed per type, relative to the legacy breakdown
    pub cuts: ClueCounts,
    /// Clues added per type
    pub adds: ClueCounts,
    pub examples: Vec<Transformation>,
}

impl StrategyImpact {
    fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            losing: 0,
            gaining: 0,
            unchanged: 0,
            cuts: ClueCounts::ZERO,
            adds: ClueCounts::ZERO,
            examples: Vec::new(),
        }
    }

    /// Words that were allocated
    #[must_use]
    pub const fn words(&self) -> usize {
        self.losing + self.gaining + self.unchanged
    }

    /// Cut types, most cut first, omitting types never cut
    #[must_use]
    pub fn most_cut(&self) -> Vec<(ClueType, usize)> {
        ranked(&self.cuts)
    }

    /// Added types, most added first, omitting types never added
    #[must_use]
    pub fn most_added(&self) -> Vec<(ClueType, usize)> {
        ranked(&self.adds)
    }

    fn record(&mut self, word: &str, legacy: ClueCounts, allocation: ClueCounts) {
        let before = legacy_total(&legacy);
        let after = allocation.total();
        match after.cmp(&before) {
            Ordering::Less => self.losing += 1,
            Ordering::Greater => self.gaining += 1,
            Ordering::Equal => self.unchanged += 1,
        }

        for (clue, delta) in allocation.diff(&legacy) {
            if delta < 0 {
                self.cuts[clue] += delta.unsigned_abs();
            } else {
                self.adds[clue] += delta.unsigned_abs();
            }
        }

        if before != after && self.examples.len() < EXAMPLE_LIMIT {
            self.examples.push(Transformation {
                word: word.to_string(),
                legacy,
                legacy_total: before,
                allocation,
            });
        }
    }
}

fn ranked(counts: &ClueCounts) -> Vec<(ClueType, usize)> {
    let mut ranked: Vec<(ClueType, usize)> = counts.iter().filter(|&(_, n)| n > 0).collect();
    // Stable sort keeps clue-type order between ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Result of an impact run
pub struct ImpactResult {
    pub total_records: usize,
    pub strategies: Vec<StrategyImpact>,
    pub skipped: Vec<SkippedRecord>,
}

/// Measure each strategy's effect against the legacy count
///
/// The allocator's caps, target and priorities are reused for every strategy.
pub fn run_impact(
    records: &[WordRecord],
    allocator: &ClueAllocator,
    strategies: &[Strategy],
    show_progress: bool,
) -> ImpactResult {
    let progress = if show_progress {
        progress_bar((records.len() * strategies.len()) as u64)
    } else {
        ProgressBar::hidden()
    };

    let impacts = strategies
        .iter()
        .map(|&strategy| {
            progress.set_message(strategy.name());
            let impact = measure(records, &allocator.for_strategy(strategy), &progress);
            debug!(
                strategy = strategy.name(),
                losing = impact.losing,
                gaining = impact.gaining,
                "measured strategy"
            );
            impact
        })
        .collect();
    progress.finish_and_clear();

    ImpactResult {
        total_records: records.len(),
        strategies: impacts,
        skipped: skipped_records(records),
    }
}

fn measure(records: &[WordRecord], allocator: &ClueAllocator, progress: &ProgressBar) -> StrategyImpact {
    let outcomes: Vec<Result<(ClueCounts, ClueCounts), RecordError>> = records
        .par_iter()
        .map(|record| {
            let outcome = legacy_counts(record)
                .and_then(|legacy| allocator.allocate(record).map(|a| (legacy, a.counts)));
            progress.inc(1);
            outcome
        })
        .collect();

    let mut impact = StrategyImpact::new(allocator.config().strategy);
    for (record, outcome) in records.iter().zip(outcomes) {
        if let Ok((legacy, allocation)) = outcome {
            impact.record(record.label(), legacy, allocation);
        }
    }
    impact
}

fn progress_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));

    let progress = ProgressBar::new(len);
    progress.set_style(style);
    progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::AllocatorConfig;
    use crate::dataset::parse_dataset;

    fn allocator() -> ClueAllocator {
        ClueAllocator::new(AllocatorConfig::default()).unwrap()
    }

    #[test]
    fn word_above_budget_loses_clues() {
        let records = vec![
            WordRecord::new("harbor")
                .with_definitions(["a", "b", "c", "d"])
                .with_examples(["a", "b", "c"])
                .with_synonyms(["port"])
                .with_antonyms(["expose"]),
        ];
        let result = run_impact(&records, &allocator(), &[Strategy::Balanced], false);
        let impact = &result.strategies[0];

        assert_eq!((impact.losing, impact.gaining, impact.unchanged), (1, 0, 0));
        // Legacy 4,3,1,1,4 to 3,2,1,1,2
        assert_eq!(impact.cuts, ClueCounts::new(1, 1, 0, 0, 2));
        assert_eq!(impact.adds, ClueCounts::ZERO);
        assert_eq!(
            impact.most_cut(),
            vec![(ClueType::Letters, 2), (ClueType::Definitions, 1), (ClueType::Examples, 1)]
        );
        assert_eq!(impact.examples.len(), 1);
        assert_eq!(impact.examples[0].legacy_total, 13);
    }

    #[test]
    fn word_at_budget_is_unchanged() {
        // 2 + 1 + 1 + 1 + 4 = 9 under both counts
        let records = vec![
            WordRecord::new("lantern")
                .with_definitions(["a", "b"])
                .with_examples(["a"])
                .with_synonyms(["lamp"])
                .with_antonyms(["darkness"]),
        ];
        let result = run_impact(&records, &allocator(), &[Strategy::Balanced], false);
        let impact = &result.strategies[0];

        assert_eq!(impact.unchanged, 1);
        assert!(impact.examples.is_empty());
        assert!(impact.most_cut().is_empty());
        assert!(impact.most_added().is_empty());
    }

    #[test]
    fn every_strategy_is_measured() {
        let records = parse_dataset(include_str!("../../data/sample_puzzle.json")).unwrap();
        let result = run_impact(&records, &allocator(), &Strategy::PRESETS, false);

        assert_eq!(result.strategies.len(), 3);
        for impact in &result.strategies {
            assert_eq!(impact.words(), records.len());
            assert!(impact.examples.len() <= EXAMPLE_LIMIT);
        }
        assert_eq!(result.strategies[1].strategy, Strategy::DefinitionHeavy);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let records = vec![WordRecord::default(), WordRecord::new("calm")];
        let result = run_impact(&records, &allocator(), &[Strategy::Balanced], false);

        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.strategies[0].words(), 1);
    }
}
