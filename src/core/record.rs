//! Puzzle word records
//!
//! A `WordRecord` is one entry of the puzzle dataset. Every list field defaults to
//! empty when absent. A record read from JSON remembers its keys in their
//! original order, so writing it back only touches the fields that changed:
//! absent lists stay absent and unknown keys keep their place.

use super::ClueCounts;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

const WORD: &str = "word";
const FIRST_LETTER: &str = "first_letter";
const DEFINITIONS: &str = "definitions";
const EXAMPLES: &str = "examples";
const SYNONYMS: &str = "synonyms";
const ANTONYMS: &str = "antonyms";

/// One puzzle entry
#[derive(Debug, Clone, Default)]
pub struct WordRecord {
    pub word: Option<String>,
    pub first_letter: Option<String>,
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    /// Keys not modelled above
    pub extra: Map<String, Value>,
    /// Every key as read, known and unknown interleaved
    key_order: Vec<String>,
}

impl PartialEq for WordRecord {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
            && self.first_letter == other.first_letter
            && self.definitions == other.definitions
            && self.examples == other.examples
            && self.synonyms == other.synonyms
            && self.antonyms == other.antonyms
            && self.extra == other.extra
    }
}

fn field<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| format!("invalid `{key}`: {e}"))
}

impl<'de> Deserialize<'de> for WordRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(map).map_err(de::Error::custom)
    }
}

impl Serialize for WordRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl WordRecord {
    fn from_map(map: Map<String, Value>) -> Result<Self, String> {
        let mut record = Self {
            key_order: map.keys().cloned().collect(),
            ..Self::default()
        };

        for (key, value) in map {
            match key.as_str() {
                WORD => record.word = field(&key, value)?,
                FIRST_LETTER => record.first_letter = field(&key, value)?,
                DEFINITIONS => record.definitions = field(&key, value)?,
                EXAMPLES => record.examples = field(&key, value)?,
                SYNONYMS => record.synonyms = field(&key, value)?,
                ANTONYMS => record.antonyms = field(&key, value)?,
                _ => {
                    record.extra.insert(key, value);
                }
            }
        }
        Ok(record)
    }

    fn was_read(&self, key: &str) -> bool {
        self.key_order.iter().any(|k| k == key)
    }

    /// Known fields to write: set values, plus any key the record was read with
    fn known_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();

        for (key, value) in [(WORD, &self.word), (FIRST_LETTER, &self.first_letter)] {
            if value.is_some() || self.was_read(key) {
                fields.insert(key.to_string(), value.clone().map_or(Value::Null, Value::String));
            }
        }
        for (key, list) in [
            (DEFINITIONS, &self.definitions),
            (EXAMPLES, &self.examples),
            (SYNONYMS, &self.synonyms),
            (ANTONYMS, &self.antonyms),
        ] {
            if !list.is_empty() || self.was_read(key) {
                fields.insert(key.to_string(), Value::from(list.clone()));
            }
        }
        fields
    }

    /// JSON object for this record, keys in the order they were read
    ///
    /// Keys added since reading go after the original ones, known fields first.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let known = self.known_fields();
        let mut map = Map::new();

        for key in &self.key_order {
            if let Some(value) = known.get(key).or_else(|| self.extra.get(key)) {
                map.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in known.iter().chain(&self.extra) {
            if !map.contains_key(key) {
                map.insert(key.clone(), value.clone());
            }
        }
        map
    }
}

/// Error type for records that cannot be allocated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    MissingWord,
    EmptyWord,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWord => write!(f, "Record has no `word` field"),
            Self::EmptyWord => write!(f, "Record `word` must contain at least one letter"),
        }
    }
}

impl std::error::Error for RecordError {}

impl WordRecord {
    /// Create a record with only the word set
    ///
    /// # Examples
    /// ```
    /// use clue_budget::core::WordRecord;
    ///
    /// let record = WordRecord::new("harbor")
    ///     .with_definitions(["A sheltered place for ships"])
    ///     .with_synonyms(["port"]);
    /// assert_eq!(record.word().unwrap(), "harbor");
    /// assert_eq!(record.inventory().unwrap().letters, 5);
    /// ```
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_definitions<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.definitions = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_examples<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.examples = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_synonyms<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.synonyms = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_antonyms<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.antonyms = items.into_iter().map(Into::into).collect();
        self
    }

    /// The trimmed target word
    ///
    /// # Errors
    /// Returns `RecordError` if the word is absent or blank.
    pub fn word(&self) -> Result<&str, RecordError> {
        let word = self.word.as_deref().ok_or(RecordError::MissingWord)?.trim();
        if word.is_empty() {
            return Err(RecordError::EmptyWord);
        }
        Ok(word)
    }

    /// Label for reports, falling back to a placeholder for malformed records
    #[must_use]
    pub fn label(&self) -> &str {
        self.word().unwrap_or("<missing word>")
    }

    /// Letters that can still be revealed after the free first letter
    ///
    /// # Errors
    /// Returns `RecordError` if the word is absent or blank.
    pub fn letters_available(&self) -> Result<usize, RecordError> {
        Ok(self.word()?.chars().count() - 1)
    }

    /// Raw clue inventory
    ///
    /// Definitions and examples are counted individually; synonyms and antonyms
    /// collapse to a presence flag since each list is shown as a single clue.
    ///
    /// # Errors
    /// Returns `RecordError` if the word is absent or blank.
    pub fn inventory(&self) -> Result<ClueCounts, RecordError> {
        Ok(ClueCounts {
            definitions: self.definitions.len(),
            examples: self.examples.len(),
            synonyms: usize::from(!self.synonyms.is_empty()),
            antonyms: usize::from(!self.antonyms.is_empty()),
            letters: self.letters_available()?,
        })
    }

    /// Case-insensitive identity check against another word
    #[must_use]
    pub fn is_word(&self, other: &str) -> bool {
        self.word()
            .is_ok_and(|word| word.to_lowercase() == other.trim().to_lowercase())
    }
}
