//! Clue types and per-type counts
//!
//! Every word exposes up to five kinds of hint. `ClueCounts` holds one count per
//! kind and is used for inventories, caps and allocations alike, so reporting code
//! can compare them field by field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A category of hint shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClueType {
    Definitions,
    Examples,
    Synonyms,
    Antonyms,
    Letters,
}

impl ClueType {
    /// All clue types in reveal order
    pub const ALL: [Self; 5] = [
        Self::Definitions,
        Self::Examples,
        Self::Synonyms,
        Self::Antonyms,
        Self::Letters,
    ];

    /// Full lowercase name, as used in the dataset and config files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Definitions => "definitions",
            Self::Examples => "examples",
            Self::Synonyms => "synonyms",
            Self::Antonyms => "antonyms",
            Self::Letters => "letters",
        }
    }

    /// Three-letter label for compact report lines
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Definitions => "def",
            Self::Examples => "ex",
            Self::Synonyms => "syn",
            Self::Antonyms => "ant",
            Self::Letters => "let",
        }
    }
}

impl fmt::Display for ClueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One count per clue type
///
/// # Examples
/// ```
/// use clue_budget::core::{ClueCounts, ClueType};
///
/// let counts = ClueCounts::new(3, 2, 1, 1, 2);
/// assert_eq!(counts.total(), 9);
/// assert_eq!(counts[ClueType::Examples], 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ClueCounts {
    pub definitions: usize,
    pub examples: usize,
    pub synonyms: usize,
    pub antonyms: usize,
    pub letters: usize,
}

impl ClueCounts {
    /// All-zero counts
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0);

    #[must_use]
    pub const fn new(
        definitions: usize,
        examples: usize,
        synonyms: usize,
        antonyms: usize,
        letters: usize,
    ) -> Self {
        Self {
            definitions,
            examples,
            synonyms,
            antonyms,
            letters,
        }
    }

    /// Sum over all clue types
    #[must_use]
    pub const fn total(&self) -> usize {
        self.definitions + self.examples + self.synonyms + self.antonyms + self.letters
    }

    /// Per-type minimum of two count sets
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        Self::from_fn(|clue| self[clue].min(other[clue]))
    }

    /// Build counts by evaluating `f` for every clue type
    pub fn from_fn(mut f: impl FnMut(ClueType) -> usize) -> Self {
        let mut counts = Self::ZERO;
        for clue in ClueType::ALL {
            counts[clue] = f(clue);
        }
        counts
    }

    /// Iterate `(type, count)` pairs in reveal order
    pub fn iter(&self) -> impl Iterator<Item = (ClueType, usize)> + '_ {
        ClueType::ALL.into_iter().map(|clue| (clue, self[clue]))
    }

    /// Signed per-type difference `self - other`
    #[must_use]
    pub fn diff(&self, other: &Self) -> [(ClueType, isize); 5] {
        ClueType::ALL.map(|clue| (clue, self[clue] as isize - other[clue] as isize))
    }
}

impl Index<ClueType> for ClueCounts {
    type Output = usize;

    fn index(&self, clue: ClueType) -> &usize {
        match clue {
            ClueType::Definitions => &self.definitions,
            ClueType::Examples => &self.examples,
            ClueType::Synonyms => &self.synonyms,
            ClueType::Antonyms => &self.antonyms,
            ClueType::Letters => &self.letters,
        }
    }
}

impl IndexMut<ClueType> for ClueCounts {
    fn index_mut(&mut self, clue: ClueType) -> &mut usize {
        match clue {
            ClueType::Definitions => &mut self.definitions,
            ClueType::Examples => &mut self.examples,
            ClueType::Synonyms => &mut self.synonyms,
            ClueType::Antonyms => &mut self.antonyms,
            ClueType::Letters => &mut self.letters,
        }
    }
}

impl fmt::Display for ClueCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(clue, count)| format!("{}={count}", clue.short_name()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
