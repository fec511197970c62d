//! Base allocation strategies
//!
//! A strategy is the starting recipe the allocator trims or tops up toward the
//! target total. Three named presets exist; a custom recipe covers everything else.

use super::ConfigError;
use crate::core::{ClueCounts, ClueType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Starting amount for one clue type
///
/// In config files a slot is either a count or the keyword `"available"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SlotRepr", into = "SlotRepr")]
pub enum Slot {
    /// A fixed count, clipped to what the word has
    Fixed(usize),
    /// One clue if the word has any content of this type
    Available,
}

impl Slot {
    /// Starting count for a word with `available` content of this type
    #[must_use]
    pub fn resolve(self, available: usize) -> usize {
        match self {
            Self::Fixed(count) => count.min(available),
            Self::Available => usize::from(available > 0),
        }
    }

    /// Largest count this slot can ever produce
    #[must_use]
    pub const fn ceiling(self) -> usize {
        match self {
            Self::Fixed(count) => count,
            Self::Available => 1,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SlotRepr {
    Count(usize),
    Keyword(String),
}

impl TryFrom<SlotRepr> for Slot {
    type Error = String;

    fn try_from(repr: SlotRepr) -> Result<Self, Self::Error> {
        match repr {
            SlotRepr::Count(count) => Ok(Self::Fixed(count)),
            SlotRepr::Keyword(keyword) if keyword == "available" => Ok(Self::Available),
            SlotRepr::Keyword(other) => Err(format!(
                "expected a count or \"available\", got \"{other}\""
            )),
        }
    }
}

impl From<Slot> for SlotRepr {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Fixed(count) => Self::Count(count),
            Slot::Available => Self::Keyword("available".to_string()),
        }
    }
}

/// A full base allocation recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRecipe {
    pub definitions: Slot,
    pub examples: Slot,
    pub synonyms: Slot,
    pub antonyms: Slot,
    pub letters: Slot,
    /// Whether the top-up loop may switch antonyms on
    #[serde(default = "default_fill_antonyms")]
    pub fill_antonyms: bool,
}

const fn default_fill_antonyms() -> bool {
    true
}

impl BaseRecipe {
    /// Slot for a single clue type
    #[must_use]
    pub const fn slot(&self, clue: ClueType) -> Slot {
        match clue {
            ClueType::Definitions => self.definitions,
            ClueType::Examples => self.examples,
            ClueType::Synonyms => self.synonyms,
            ClueType::Antonyms => self.antonyms,
            ClueType::Letters => self.letters,
        }
    }

    /// Resolve every slot against a (capped) inventory
    #[must_use]
    pub fn resolve(&self, inventory: &ClueCounts) -> ClueCounts {
        ClueCounts::from_fn(|clue| self.slot(clue).resolve(inventory[clue]))
    }
}

/// Named or custom base allocation
///
/// # Examples
/// ```
/// use clue_budget::allocator::Strategy;
///
/// let strategy = Strategy::from_name("definition_heavy").unwrap();
/// assert!(!strategy.fills_antonyms());
/// assert!(Strategy::from_name("random").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// 3 definitions, 2 examples, synonym, antonym, 2 letters
    #[default]
    Balanced,
    /// 4 definitions, 2 examples, synonym, no antonym, 2 letters
    DefinitionHeavy,
    /// 2 definitions, 3 examples, synonym, antonym, 2 letters
    ExampleHeavy,
    /// Caller-supplied recipe
    Custom(BaseRecipe),
}

impl Strategy {
    /// The named presets, in report order
    pub const PRESETS: [Self; 3] = [Self::Balanced, Self::DefinitionHeavy, Self::ExampleHeavy];

    /// Create a strategy from its name
    ///
    /// Supported names: "balanced", "definition_heavy", "example_heavy"
    /// (hyphens are accepted in place of underscores).
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownStrategy` for any other name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "balanced" => Ok(Self::Balanced),
            "definition_heavy" => Ok(Self::DefinitionHeavy),
            "example_heavy" => Ok(Self::ExampleHeavy),
            _ => Err(ConfigError::UnknownStrategy(name.to_string())),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::DefinitionHeavy => "definition_heavy",
            Self::ExampleHeavy => "example_heavy",
            Self::Custom(_) => "custom",
        }
    }

    /// The base recipe this strategy starts from
    #[must_use]
    pub const fn recipe(&self) -> BaseRecipe {
        match self {
            Self::Balanced => BaseRecipe {
                definitions: Slot::Fixed(3),
                examples: Slot::Fixed(2),
                synonyms: Slot::Available,
                antonyms: Slot::Available,
                letters: Slot::Fixed(2),
                fill_antonyms: true,
            },
            Self::DefinitionHeavy => BaseRecipe {
                definitions: Slot::Fixed(4),
                examples: Slot::Fixed(2),
                synonyms: Slot::Available,
                antonyms: Slot::Fixed(0),
                letters: Slot::Fixed(2),
                fill_antonyms: false,
            },
            Self::ExampleHeavy => BaseRecipe {
                definitions: Slot::Fixed(2),
                examples: Slot::Fixed(3),
                synonyms: Slot::Available,
                antonyms: Slot::Available,
                letters: Slot::Fixed(2),
                fill_antonyms: true,
            },
            Self::Custom(recipe) => *recipe,
        }
    }

    /// Whether the top-up loop may add an antonym clue
    #[must_use]
    pub const fn fills_antonyms(&self) -> bool {
        self.recipe().fill_antonyms
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_presets_and_aliases() {
        assert_eq!(Strategy::from_name("balanced").unwrap(), Strategy::Balanced);
        assert_eq!(
            Strategy::from_name("definition-heavy").unwrap(),
            Strategy::DefinitionHeavy
        );
        assert_eq!(
            Strategy::from_name("Example_Heavy").unwrap(),
            Strategy::ExampleHeavy
        );
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert!(matches!(
            Strategy::from_name("adaptive"),
            Err(ConfigError::UnknownStrategy(name)) if name == "adaptive"
        ));
    }

    #[test]
    fn slot_resolution() {
        assert_eq!(Slot::Fixed(3).resolve(6), 3);
        assert_eq!(Slot::Fixed(3).resolve(1), 1);
        assert_eq!(Slot::Available.resolve(4), 1);
        assert_eq!(Slot::Available.resolve(0), 0);
    }

    #[test]
    fn balanced_recipe_resolves_to_nine_with_rich_inventory() {
        let inventory = ClueCounts::new(4, 3, 1, 1, 4);
        let base = Strategy::Balanced.recipe().resolve(&inventory);
        assert_eq!(base, ClueCounts::new(3, 2, 1, 1, 2));
    }

    #[test]
    fn definition_heavy_never_starts_with_antonyms() {
        let inventory = ClueCounts::new(4, 3, 1, 1, 4);
        let base = Strategy::DefinitionHeavy.recipe().resolve(&inventory);
        assert_eq!(base, ClueCounts::new(4, 2, 1, 0, 2));
        assert!(!Strategy::DefinitionHeavy.fills_antonyms());
    }

    #[test]
    fn recipe_parses_from_toml() {
        let recipe: BaseRecipe = toml::from_str(
            r#"
            definitions = 4
            examples = 3
            synonyms = "available"
            antonyms = "available"
            letters = 4
            "#,
        )
        .unwrap();

        assert_eq!(recipe.definitions, Slot::Fixed(4));
        assert_eq!(recipe.synonyms, Slot::Available);
        assert!(recipe.fill_antonyms);
    }

    #[test]
    fn recipe_rejects_unknown_keyword() {
        let result: Result<BaseRecipe, _> = toml::from_str(
            r#"
            definitions = "lots"
            examples = 3
            synonyms = "available"
            antonyms = "available"
            letters = 4
            "#,
        );
        assert!(result.is_err());
    }
}
