//! Dataset validation
//!
//! Checks every record for content problems and for words the allocator cannot
//! bring up to the clue budget. Validation never modifies records.

use super::roots::revealing_token;
use crate::allocator::{Allocation, ClueAllocator};
use crate::core::WordRecord;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

/// Placeholder standing in for the word inside example sentences
pub const BLANK_PLACEHOLDER: &str = "[blank]";

pub const MIN_DEFINITION_CHARS: usize = 10;
pub const MAX_DEFINITION_CHARS: usize = 200;

/// Category of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingWord,
    NoDefinitions,
    NoExamples,
    DuplicateDefinition,
    CircularDefinition,
    DefinitionTooShort,
    DefinitionTooLong,
    PlaceholderCount,
    ExampleRevealsWord,
    DuplicateSynonym,
    SelfSynonym,
    SynonymAntonymOverlap,
    UnderBudget,
}

impl IssueKind {
    pub const ALL: [Self; 13] = [
        Self::MissingWord,
        Self::NoDefinitions,
        Self::NoExamples,
        Self::DuplicateDefinition,
        Self::CircularDefinition,
        Self::DefinitionTooShort,
        Self::DefinitionTooLong,
        Self::PlaceholderCount,
        Self::ExampleRevealsWord,
        Self::DuplicateSynonym,
        Self::SelfSynonym,
        Self::SynonymAntonymOverlap,
        Self::UnderBudget,
    ];

    /// Snake-case name, as serialized in JSON reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MissingWord => "missing_word",
            Self::NoDefinitions => "no_definitions",
            Self::NoExamples => "no_examples",
            Self::DuplicateDefinition => "duplicate_definition",
            Self::CircularDefinition => "circular_definition",
            Self::DefinitionTooShort => "definition_too_short",
            Self::DefinitionTooLong => "definition_too_long",
            Self::PlaceholderCount => "placeholder_count",
            Self::ExampleRevealsWord => "example_reveals_word",
            Self::DuplicateSynonym => "duplicate_synonym",
            Self::SelfSynonym => "self_synonym",
            Self::SynonymAntonymOverlap => "synonym_antonym_overlap",
            Self::UnderBudget => "under_budget",
        }
    }

    /// Parse a kind name; hyphens may stand in for underscores
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingWord => "missing or empty word",
            Self::NoDefinitions => "no definitions",
            Self::NoExamples => "no examples",
            Self::DuplicateDefinition => "duplicate definition",
            Self::CircularDefinition => "circular definition",
            Self::DefinitionTooShort => "definition too short",
            Self::DefinitionTooLong => "definition too long",
            Self::PlaceholderCount => "example without exactly one placeholder",
            Self::ExampleRevealsWord => "example contains the word",
            Self::DuplicateSynonym => "duplicate synonym",
            Self::SelfSynonym => "word listed as its own synonym",
            Self::SynonymAntonymOverlap => "synonym also listed as antonym",
            Self::UnderBudget => "under clue budget",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// One problem found in one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Position of the record in the dataset
    pub index: usize,
    pub word: String,
    pub kind: IssueKind,
    pub detail: String,
}

impl Issue {
    fn new(index: usize, word: &str, kind: IssueKind, detail: impl Into<String>) -> Self {
        Self {
            index,
            word: word.to_string(),
            kind,
            detail: detail.into(),
        }
    }
}

/// Aggregated validation result for a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub total_records: usize,
    /// Records with at least one issue
    pub affected_words: usize,
    pub counts: BTreeMap<IssueKind, usize>,
    /// Issues in dataset order
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    #[must_use]
    pub fn from_issues(total_records: usize, issues: Vec<Issue>) -> Self {
        let mut counts = BTreeMap::new();
        let mut affected = FxHashSet::default();
        for issue in &issues {
            *counts.entry(issue.kind).or_insert(0) += 1;
            affected.insert(issue.index);
        }

        Self {
            total_records,
            affected_words: affected.len(),
            counts,
            issues,
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn count(&self, kind: IssueKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }

    /// Render the report as indented JSON
    ///
    /// # Errors
    /// Returns the JSON error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Check one record
pub fn validate_record(index: usize, record: &WordRecord, allocator: &ClueAllocator) -> Vec<Issue> {
    let word = match record.word() {
        Ok(word) => word,
        Err(error) => {
            return vec![Issue::new(
                index,
                record.label(),
                IssueKind::MissingWord,
                error.to_string(),
            )];
        }
    };

    let mut issues = Vec::new();
    let mut push = |kind: IssueKind, detail: String| issues.push(Issue::new(index, word, kind, detail));

    if record.definitions.is_empty() {
        push(IssueKind::NoDefinitions, "record has no definitions".to_string());
    }
    if record.examples.is_empty() {
        push(IssueKind::NoExamples, "record has no examples".to_string());
    }

    let mut seen = FxHashSet::default();
    for definition in &record.definitions {
        if !seen.insert(definition.as_str()) {
            push(IssueKind::DuplicateDefinition, format!("\"{definition}\""));
        }
        if let Some(token) = revealing_token(word, definition) {
            push(
                IssueKind::CircularDefinition,
                format!("\"{definition}\" uses \"{token}\""),
            );
        }

        let length = definition.trim().chars().count();
        if length < MIN_DEFINITION_CHARS {
            push(
                IssueKind::DefinitionTooShort,
                format!("\"{definition}\" has {length} characters"),
            );
        } else if length > MAX_DEFINITION_CHARS {
            push(
                IssueKind::DefinitionTooLong,
                format!("definition has {length} characters"),
            );
        }
    }

    let lowered_word = word.to_lowercase();
    for example in &record.examples {
        let lowered = example.to_lowercase();
        let placeholders = lowered.matches(BLANK_PLACEHOLDER).count();
        if placeholders != 1 {
            push(
                IssueKind::PlaceholderCount,
                format!("\"{example}\" has {placeholders} placeholders"),
            );
        }
        if let Some(token) = revealing_token(word, &lowered.replace(BLANK_PLACEHOLDER, " ")) {
            push(
                IssueKind::ExampleRevealsWord,
                format!("\"{example}\" uses \"{token}\""),
            );
        }
    }

    let mut synonyms = FxHashSet::default();
    for synonym in &record.synonyms {
        let key = synonym.trim().to_lowercase();
        if key == lowered_word {
            push(IssueKind::SelfSynonym, format!("\"{synonym}\""));
        }
        if !synonyms.insert(key) {
            push(IssueKind::DuplicateSynonym, format!("\"{synonym}\""));
        }
    }
    for antonym in &record.antonyms {
        if synonyms.contains(&antonym.trim().to_lowercase()) {
            push(IssueKind::SynonymAntonymOverlap, format!("\"{antonym}\""));
        }
    }

    if let Some(allocation) = allocator.allocate(record).ok().filter(Allocation::is_under_budget) {
        push(
            IssueKind::UnderBudget,
            format!(
                "{} of {} clues reachable ({})",
                allocation.total(),
                allocation.target,
                allocation.counts
            ),
        );
    }

    issues
}

/// Check every record, keeping dataset order
pub fn validate_dataset(records: &[WordRecord], allocator: &ClueAllocator) -> ValidationReport {
    let per_record: Vec<Vec<Issue>> = records
        .par_iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record, allocator))
        .collect();

    let report = ValidationReport::from_issues(records.len(), per_record.into_iter().flatten().collect());
    info!(
        records = report.total_records,
        issues = report.issues.len(),
        affected = report.affected_words,
        "validation finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::AllocatorConfig;
    use crate::dataset::parse_dataset;

    fn allocator() -> ClueAllocator {
        ClueAllocator::new(AllocatorConfig::default()).unwrap()
    }

    fn kinds(issues: &[Issue]) -> Vec<IssueKind> {
        issues.iter().map(|issue| issue.kind).collect()
    }

    fn rich(word: &str) -> WordRecord {
        WordRecord::new(word)
            .with_definitions([
                "A sheltered stretch of water for ships",
                "A place of refuge from danger",
                "To give shelter to someone",
            ])
            .with_examples([
                "The boats returned to the [blank].",
                "The town was a safe [BLANK] for travelers.",
            ])
            .with_synonyms(["port"])
            .with_antonyms(["expose"])
    }

    #[test]
    fn clean_record_has_no_issues() {
        assert!(validate_record(0, &rich("harbor"), &allocator()).is_empty());
    }

    #[test]
    fn missing_word_short_circuits() {
        let record = WordRecord::default().with_definitions(["x"]);
        let issues = validate_record(4, &record, &allocator());

        assert_eq!(kinds(&issues), vec![IssueKind::MissingWord]);
        assert_eq!(issues[0].index, 4);
        assert_eq!(issues[0].word, "<missing word>");
    }

    #[test]
    fn empty_content_is_reported() {
        let issues = validate_record(0, &WordRecord::new("harbor"), &allocator());
        let found = kinds(&issues);

        assert!(found.contains(&IssueKind::NoDefinitions));
        assert!(found.contains(&IssueKind::NoExamples));
        assert!(found.contains(&IssueKind::UnderBudget));
    }

    #[test]
    fn definition_problems_are_reported() {
        let long = "a".repeat(MAX_DEFINITION_CHARS + 1);
        let record = rich("harbor").with_definitions([
            "A sheltered stretch of water for ships",
            "A sheltered stretch of water for ships",
            "Port",
            long.as_str(),
            "Where a harbor master works",
        ]);
        let found = kinds(&validate_record(0, &record, &allocator()));

        assert_eq!(
            found,
            vec![
                IssueKind::DuplicateDefinition,
                IssueKind::DefinitionTooShort,
                IssueKind::DefinitionTooLong,
                IssueKind::CircularDefinition,
            ]
        );
    }

    #[test]
    fn example_problems_are_reported() {
        let record = rich("harbor").with_examples([
            "No placeholder here at all.",
            "Two [blank] and [blank].",
            "The harbor was a [blank] place.",
        ]);
        let found = kinds(&validate_record(0, &record, &allocator()));

        assert_eq!(
            found,
            vec![
                IssueKind::PlaceholderCount,
                IssueKind::PlaceholderCount,
                IssueKind::ExampleRevealsWord,
            ]
        );
    }

    #[test]
    fn inflected_word_in_example_is_reported() {
        let record = rich("harbor").with_examples([
            "The harbors were full of [blank].",
            "The boats returned to the [blank].",
        ]);
        let issues = validate_record(0, &record, &allocator());

        assert_eq!(kinds(&issues), vec![IssueKind::ExampleRevealsWord]);
        assert!(issues[0].detail.contains("\"harbors\""));
    }

    #[test]
    fn related_word_problems_are_reported() {
        let record = rich("harbor")
            .with_synonyms(["port", "Port", "Harbor", "haven"])
            .with_antonyms(["haven"]);
        let found = kinds(&validate_record(0, &record, &allocator()));

        assert_eq!(
            found,
            vec![
                IssueKind::DuplicateSynonym,
                IssueKind::SelfSynonym,
                IssueKind::SynonymAntonymOverlap,
            ]
        );
    }

    #[test]
    fn sample_dataset_report() {
        let records = parse_dataset(include_str!("../../data/sample_puzzle.json")).unwrap();
        let report = validate_dataset(&records, &allocator());

        assert_eq!(report.total_records, records.len());
        assert!(!report.is_clean());

        let under: Vec<&str> = report
            .of_kind(IssueKind::UnderBudget)
            .map(|issue| issue.word.as_str())
            .collect();
        assert_eq!(under, vec!["calm", "zephyr"]);

        assert_eq!(report.count(IssueKind::DuplicateDefinition), 1);
        assert_eq!(report.count(IssueKind::DefinitionTooShort), 1);
        assert_eq!(report.count(IssueKind::NoExamples), 1);
        assert!(report.of_kind(IssueKind::CircularDefinition).any(|i| i.word == "printer"));

        // Issues stay in dataset order
        let indexes: Vec<usize> = report.issues.iter().map(|issue| issue.index).collect();
        let mut sorted = indexes.clone();
        sorted.sort_unstable();
        assert_eq!(indexes, sorted);
    }

    #[test]
    fn kind_names_match_serialization() {
        for kind in IssueKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            assert_eq!(IssueKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(IssueKind::from_name("Under-Budget"), Some(IssueKind::UnderBudget));
        assert_eq!(IssueKind::from_name("typo"), None);
    }

    #[test]
    fn report_serializes_with_snake_case_kinds() {
        let record = WordRecord::new("harbor");
        let report = ValidationReport::from_issues(1, validate_record(0, &record, &allocator()));
        let json = report.to_json().unwrap();

        assert!(json.contains("\"no_definitions\""));
        assert!(json.contains("\"under_budget\""));
        assert!(json.contains("\"affected_words\": 1"));
    }
}
