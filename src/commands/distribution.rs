//! Clue distribution command
//!
//! Histograms of the legacy clue count and of word length across the dataset.

use super::legacy::legacy_clue_count;
use crate::core::WordRecord;
use crate::dataset::{SkippedRecord, skipped_records};
use rustc_hash::FxHashMap;

/// Result of a distribution scan
pub struct DistributionResult {
    pub total_records: usize,
    /// `(legacy clue count, words)`, ascending by count
    pub clue_counts: Vec<(usize, usize)>,
    /// `(letters in word, words)`, ascending by length
    pub word_lengths: Vec<(usize, usize)>,
    /// Words whose legacy count exceeds the target
    pub over_target: usize,
    pub target: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl DistributionResult {
    /// Words that made it into the histograms
    #[must_use]
    pub fn counted(&self) -> usize {
        self.clue_counts.iter().map(|&(_, words)| words).sum()
    }

    /// Mean legacy clue count
    #[must_use]
    pub fn average_clues(&self) -> f64 {
        let counted = self.counted();
        if counted == 0 {
            return 0.0;
        }
        let sum: usize = self.clue_counts.iter().map(|&(clues, words)| clues * words).sum();
        sum as f64 / counted as f64
    }
}

/// Build the legacy clue count and word length histograms
#[must_use]
pub fn run_distribution(records: &[WordRecord], target: usize) -> DistributionResult {
    let mut clue_counts: FxHashMap<usize, usize> = FxHashMap::default();
    let mut word_lengths: FxHashMap<usize, usize> = FxHashMap::default();

    for record in records {
        let (Ok(word), Ok(clues)) = (record.word(), legacy_clue_count(record)) else {
            continue;
        };
        *clue_counts.entry(clues).or_insert(0) += 1;
        *word_lengths.entry(word.chars().count()).or_insert(0) += 1;
    }

    let over_target: usize = clue_counts
        .iter()
        .filter(|&(&clues, _)| clues > target)
        .map(|(_, &words)| words)
        .sum();

    DistributionResult {
        total_records: records.len(),
        clue_counts: sorted(clue_counts),
        word_lengths: sorted(word_lengths),
        over_target,
        target,
        skipped: skipped_records(records),
    }
}

fn sorted(histogram: FxHashMap<usize, usize>) -> Vec<(usize, usize)> {
    let mut buckets: Vec<(usize, usize)> = histogram.into_iter().collect();
    buckets.sort_unstable();
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_dataset;

    #[test]
    fn histograms_are_sorted_and_complete() {
        let records = parse_dataset(include_str!("../../data/sample_puzzle.json")).unwrap();
        let result = run_distribution(&records, 9);

        assert_eq!(result.counted(), records.len());
        assert!(result.clue_counts.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(result.word_lengths.windows(2).all(|w| w[0].0 < w[1].0));

        let lengths: usize = result.word_lengths.iter().map(|&(_, n)| n).sum();
        assert_eq!(lengths, records.len());
    }

    #[test]
    fn counts_words_over_target() {
        let records = vec![
            // 4 + 3 + 1 + 1 + 4 = 13
            WordRecord::new("harbor")
                .with_definitions(["a", "b", "c", "d"])
                .with_examples(["a", "b", "c"])
                .with_synonyms(["port"])
                .with_antonyms(["expose"]),
            // 1 + 0 + 0 + 0 + 3 = 4
            WordRecord::new("calm").with_definitions(["a"]),
        ];
        let result = run_distribution(&records, 9);

        assert_eq!(result.clue_counts, vec![(4, 1), (13, 1)]);
        assert_eq!(result.word_lengths, vec![(4, 1), (6, 1)]);
        assert_eq!(result.over_target, 1);
        assert!((result.average_clues() - 8.5).abs() < f64::EPSILON);
    }

    #[test]
    fn skipped_records_are_excluded() {
        let records = vec![WordRecord::default(), WordRecord::new("calm")];
        let result = run_distribution(&records, 9);

        assert_eq!(result.counted(), 1);
        assert_eq!(result.skipped.len(), 1);
    }

    #[test]
    fn empty_dataset_average_is_zero() {
        let result = run_distribution(&[], 9);
        assert!(result.average_clues().abs() < f64::EPSILON);
    }
}
