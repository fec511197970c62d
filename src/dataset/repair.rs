//! Dataset repair passes
//!
//! Each pass edits one record in place and returns what it changed. Passes never
//! reorder surviving entries.

use super::SkippedRecord;
use super::roots::revealing_token;
use crate::core::{RecordError, WordRecord};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;
use std::mem;
use tracing::{debug, info};

/// Which repair passes to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairOptions {
    pub duplicates: bool,
    pub circular: bool,
    pub related: bool,
    pub first_letter: bool,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            duplicates: true,
            circular: true,
            related: true,
            first_letter: false,
        }
    }
}

/// Synonym or antonym list of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedList {
    Synonyms,
    Antonyms,
}

impl RelatedList {
    pub const ALL: [Self; 2] = [Self::Synonyms, Self::Antonyms];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Synonyms => "synonyms",
            Self::Antonyms => "antonyms",
        }
    }

    fn entries_mut(self, record: &mut WordRecord) -> &mut Vec<String> {
        match self {
            Self::Synonyms => &mut record.synonyms,
            Self::Antonyms => &mut record.antonyms,
        }
    }
}

impl fmt::Display for RelatedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single change made (or declined) by a repair pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairAction {
    DuplicateDefinition { definition: String },
    CircularDefinition { definition: String, token: String },
    /// Every definition was circular; this one stays until someone rewrites it
    CircularKept { definition: String, token: String },
    DuplicateRelated { list: RelatedList, entry: String },
    SelfReference { list: RelatedList, entry: String },
    AntonymAlsoSynonym { entry: String },
    FirstLetter { previous: Option<String>, letter: String },
}

impl RepairAction {
    /// Whether the action modified the record
    #[must_use]
    pub const fn changes_record(&self) -> bool {
        !matches!(self, Self::CircularKept { .. })
    }

    #[must_use]
    pub const fn needs_review(&self) -> bool {
        matches!(self, Self::CircularKept { .. })
    }
}

impl fmt::Display for RepairAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDefinition { definition } => {
                write!(f, "removed duplicate definition \"{definition}\"")
            }
            Self::CircularDefinition { definition, token } => {
                write!(f, "removed circular definition \"{definition}\" (uses \"{token}\")")
            }
            Self::CircularKept { definition, token } => write!(
                f,
                "kept circular definition \"{definition}\" (uses \"{token}\"), needs manual review"
            ),
            Self::DuplicateRelated { list, entry } => {
                write!(f, "removed duplicate {list} entry \"{entry}\"")
            }
            Self::SelfReference { list, entry } => {
                write!(f, "removed the word itself from {list} (\"{entry}\")")
            }
            Self::AntonymAlsoSynonym { entry } => {
                write!(f, "removed antonym \"{entry}\" that is also a synonym")
            }
            Self::FirstLetter { previous: Some(previous), letter } => {
                write!(f, "first_letter {previous:?} -> {letter:?}")
            }
            Self::FirstLetter { previous: None, letter } => write!(f, "added first_letter {letter:?}"),
        }
    }
}

/// Changes made to one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRepair {
    pub index: usize,
    pub word: String,
    pub actions: Vec<RepairAction>,
}

/// Outcome of repairing a whole dataset
#[derive(Debug, Clone, Default)]
pub struct RepairReport {
    pub total_records: usize,
    /// Records with at least one action, in dataset order
    pub repairs: Vec<RecordRepair>,
    pub skipped: Vec<SkippedRecord>,
}

impl RepairReport {
    /// Whether any record was modified
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.actions().any(RepairAction::changes_record)
    }

    #[must_use]
    pub fn changed_records(&self) -> usize {
        self.repairs
            .iter()
            .filter(|repair| repair.actions.iter().any(RepairAction::changes_record))
            .count()
    }

    /// Number of record modifications
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.actions().filter(|action| action.changes_record()).count()
    }

    /// Records left with something a person has to fix
    pub fn needing_review(&self) -> impl Iterator<Item = &RecordRepair> {
        self.repairs
            .iter()
            .filter(|repair| repair.actions.iter().any(RepairAction::needs_review))
    }

    fn actions(&self) -> impl Iterator<Item = &RepairAction> {
        self.repairs.iter().flat_map(|repair| repair.actions.iter())
    }
}

/// Remove exact repeats from the definitions, keeping the first occurrence
pub fn remove_duplicate_definitions(record: &mut WordRecord) -> Vec<RepairAction> {
    let mut seen = FxHashSet::default();
    let mut actions = Vec::new();

    record.definitions.retain(|definition| {
        if seen.insert(definition.clone()) {
            true
        } else {
            actions.push(RepairAction::DuplicateDefinition {
                definition: definition.clone(),
            });
            false
        }
    });

    actions
}

/// Remove definitions that give the word away
///
/// A record always keeps at least one definition: when all of them are circular,
/// the first stays and is reported as `CircularKept`.
pub fn remove_circular_definitions(word: &str, record: &mut WordRecord) -> Vec<RepairAction> {
    let mut circular = Vec::new();
    for definition in mem::take(&mut record.definitions) {
        match revealing_token(word, &definition) {
            Some(token) => circular.push((definition, token)),
            None => record.definitions.push(definition),
        }
    }

    let keep_first = record.definitions.is_empty();
    let mut actions = Vec::with_capacity(circular.len());
    for (position, (definition, token)) in circular.into_iter().enumerate() {
        if keep_first && position == 0 {
            record.definitions.push(definition.clone());
            actions.push(RepairAction::CircularKept { definition, token });
        } else {
            actions.push(RepairAction::CircularDefinition { definition, token });
        }
    }

    actions
}

/// Dedupe synonym and antonym lists, drop the word itself, and drop antonyms
/// that are also synonyms
///
/// Comparisons are case-insensitive and ignore surrounding whitespace.
pub fn clean_related_words(word: &str, record: &mut WordRecord) -> Vec<RepairAction> {
    let word = word.trim().to_lowercase();
    let mut actions = Vec::new();

    for list in RelatedList::ALL {
        let mut seen = FxHashSet::default();
        list.entries_mut(record).retain(|entry| {
            let key = entry.trim().to_lowercase();
            if key == word {
                actions.push(RepairAction::SelfReference {
                    list,
                    entry: entry.clone(),
                });
                false
            } else if seen.insert(key) {
                true
            } else {
                actions.push(RepairAction::DuplicateRelated {
                    list,
                    entry: entry.clone(),
                });
                false
            }
        });
    }

    let synonyms: FxHashSet<String> = record
        .synonyms
        .iter()
        .map(|synonym| synonym.trim().to_lowercase())
        .collect();
    record.antonyms.retain(|antonym| {
        if synonyms.contains(&antonym.trim().to_lowercase()) {
            actions.push(RepairAction::AntonymAlsoSynonym {
                entry: antonym.clone(),
            });
            false
        } else {
            true
        }
    });

    actions
}

/// Set `first_letter` to the uppercased first letter of the word
pub fn restore_first_letter(word: &str, record: &mut WordRecord) -> Option<RepairAction> {
    let letter: String = word.chars().next()?.to_uppercase().collect();
    if record.first_letter.as_deref() == Some(letter.as_str()) {
        return None;
    }

    let previous = record.first_letter.replace(letter.clone());
    Some(RepairAction::FirstLetter { previous, letter })
}

/// Run the selected passes over one record
///
/// # Errors
/// Returns `RecordError` (and leaves the record untouched) if it has no usable word.
pub fn repair_record(
    record: &mut WordRecord,
    options: &RepairOptions,
) -> Result<Vec<RepairAction>, RecordError> {
    let word = record.word()?.to_string();
    let mut actions = Vec::new();

    if options.duplicates {
        actions.extend(remove_duplicate_definitions(record));
    }
    if options.circular {
        actions.extend(remove_circular_definitions(&word, record));
    }
    if options.related {
        actions.extend(clean_related_words(&word, record));
    }
    if options.first_letter {
        actions.extend(restore_first_letter(&word, record));
    }

    if !actions.is_empty() {
        debug!(word = %word, actions = actions.len(), "repaired record");
    }
    Ok(actions)
}

/// Repair every record in place
pub fn repair_dataset(records: &mut [WordRecord], options: &RepairOptions) -> RepairReport {
    let outcomes: Vec<_> = records
        .par_iter_mut()
        .enumerate()
        .map(|(index, record)| {
            let outcome = repair_record(record, options);
            (index, record.label().to_string(), outcome)
        })
        .collect();

    let mut report = RepairReport {
        total_records: records.len(),
        ..RepairReport::default()
    };
    for (index, word, outcome) in outcomes {
        match outcome {
            Ok(actions) if actions.is_empty() => {}
            Ok(actions) => report.repairs.push(RecordRepair {
                index,
                word,
                actions,
            }),
            Err(error) => report.skipped.push(SkippedRecord { index, error }),
        }
    }

    info!(
        records = report.total_records,
        changed = report.changed_records(),
        skipped = report.skipped.len(),
        "repair pass finished"
    );
    report
}
