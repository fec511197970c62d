//! Allocator configuration
//!
//! The target total, per-type caps and priority orders live in one immutable
//! structure that is validated once, before any word is processed.
//!
//! # Config file
//!
//! ```toml
//! # Clues every word should expose
//! target_total = 9
//! # "balanced" (default), "definition_heavy" or "example_heavy"
//! strategy = "balanced"
//!
//! [caps]
//! definitions = 4
//! examples = 3
//! synonyms = 1
//! antonyms = 1
//! letters = 4
//!
//! # Optional custom base recipe; replaces the named strategy when present
//! # [base]
//! # definitions = 4
//! # examples = 3
//! # synonyms = "available"
//! # antonyms = "available"
//! # letters = 4
//! ```

use super::strategy::{BaseRecipe, Strategy};
use crate::core::{ClueCounts, ClueType};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Default number of clues per word
pub const DEFAULT_TARGET_TOTAL: usize = 9;

/// Default per-type maximums
pub const DEFAULT_CAPS: ClueCounts = ClueCounts::new(4, 3, 1, 1, 4);

/// One phase of the trimming order: reduce `clue` while it is above `floor`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveStep {
    pub clue: ClueType,
    pub floor: usize,
}

impl RemoveStep {
    #[must_use]
    pub const fn new(clue: ClueType, floor: usize) -> Self {
        Self { clue, floor }
    }
}

/// Error type for configurations rejected at setup time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownStrategy(String),
    ZeroTarget,
    UnreachableTarget { target: usize, best: usize },
    Read(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStrategy(name) => write!(
                f,
                "Unknown strategy '{name}'. Expected balanced, definition_heavy or example_heavy"
            ),
            Self::ZeroTarget => write!(f, "Target total must be at least 1"),
            Self::UnreachableTarget { target, best } => write!(
                f,
                "Caps allow at most {best} clues under any strategy, below the target of {target}"
            ),
            Self::Read(msg) => write!(f, "Cannot read config file: {msg}"),
            Self::Parse(msg) => write!(f, "Invalid config file: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable allocator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatorConfig {
    pub target_total: usize,
    pub caps: ClueCounts,
    pub strategy: Strategy,
    /// Types topped up, in order, while under target
    pub add_priority: Vec<ClueType>,
    /// Types trimmed, in order, while over target
    pub remove_priority: Vec<RemoveStep>,
    /// Trimmed down to zero once every floor is met
    pub last_resort: Vec<ClueType>,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            target_total: DEFAULT_TARGET_TOTAL,
            caps: DEFAULT_CAPS,
            strategy: Strategy::default(),
            add_priority: vec![
                ClueType::Definitions,
                ClueType::Examples,
                ClueType::Letters,
                ClueType::Antonyms,
            ],
            remove_priority: vec![
                RemoveStep::new(ClueType::Letters, 2),
                RemoveStep::new(ClueType::Antonyms, 0),
                RemoveStep::new(ClueType::Synonyms, 0),
                RemoveStep::new(ClueType::Examples, 2),
                RemoveStep::new(ClueType::Definitions, 2),
            ],
            last_resort: vec![ClueType::Letters, ClueType::Examples, ClueType::Definitions],
        }
    }
}

impl AllocatorConfig {
    /// Create a default config using the given strategy
    #[must_use]
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Replace the target total
    #[must_use]
    pub const fn target(mut self, target_total: usize) -> Self {
        self.target_total = target_total;
        self
    }

    /// Replace the per-type caps
    #[must_use]
    pub const fn caps(mut self, caps: ClueCounts) -> Self {
        self.caps = caps;
        self
    }

    /// Whether the top-up loop may raise `clue` under the current strategy
    #[must_use]
    pub fn may_add(&self, clue: ClueType) -> bool {
        clue != ClueType::Antonyms || self.strategy.fills_antonyms()
    }

    /// Highest total a word with unlimited content could reach under `strategy`
    #[must_use]
    pub fn ceiling_for(&self, strategy: &Strategy) -> usize {
        let recipe = strategy.recipe();
        ClueType::ALL
            .iter()
            .map(|&clue| {
                let addable = self.add_priority.contains(&clue)
                    && (clue != ClueType::Antonyms || recipe.fill_antonyms);
                if addable {
                    self.caps[clue]
                } else {
                    recipe.slot(clue).ceiling().min(self.caps[clue])
                }
            })
            .sum()
    }

    /// Reject configurations that can never produce a full allocation
    ///
    /// The target must be reachable by at least one preset, or by the
    /// configured custom recipe.
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroTarget` or `ConfigError::UnreachableTarget`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_total == 0 {
            return Err(ConfigError::ZeroTarget);
        }

        let mut candidates = Strategy::PRESETS.to_vec();
        if let Strategy::Custom(_) = self.strategy {
            candidates.push(self.strategy);
        }

        let best = candidates
            .iter()
            .map(|strategy| self.ceiling_for(strategy))
            .max()
            .unwrap_or(0);

        if best < self.target_total {
            return Err(ConfigError::UnreachableTarget {
                target: self.target_total,
                best,
            });
        }
        Ok(())
    }

    /// Parse a TOML config, filling unspecified keys with defaults
    ///
    /// # Errors
    /// Returns `ConfigError` if the TOML is malformed or names an unknown strategy.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        file.into_config()
    }

    /// Load a TOML config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }
}

/// On-disk shape of the config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    target_total: Option<usize>,
    strategy: Option<String>,
    caps: Option<CapsFile>,
    base: Option<BaseRecipe>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CapsFile {
    definitions: Option<usize>,
    examples: Option<usize>,
    synonyms: Option<usize>,
    antonyms: Option<usize>,
    letters: Option<usize>,
}

impl CapsFile {
    fn over(self, defaults: ClueCounts) -> ClueCounts {
        ClueCounts {
            definitions: self.definitions.unwrap_or(defaults.definitions),
            examples: self.examples.unwrap_or(defaults.examples),
            synonyms: self.synonyms.unwrap_or(defaults.synonyms),
            antonyms: self.antonyms.unwrap_or(defaults.antonyms),
            letters: self.letters.unwrap_or(defaults.letters),
        }
    }
}

impl ConfigFile {
    fn into_config(self) -> Result<AllocatorConfig, ConfigError> {
        let defaults = AllocatorConfig::default();

        let strategy = match (self.base, self.strategy.as_deref()) {
            (Some(recipe), _) => Strategy::Custom(recipe),
            (None, Some(name)) => Strategy::from_name(name)?,
            (None, None) => defaults.strategy,
        };

        Ok(AllocatorConfig {
            target_total: self.target_total.unwrap_or(defaults.target_total),
            caps: self
                .caps
                .map_or(defaults.caps, |caps| caps.over(defaults.caps)),
            strategy,
            ..defaults
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::Slot;

    #[test]
    fn defaults_match_nine_clue_budget() {
        let config = AllocatorConfig::default();
        assert_eq!(config.target_total, 9);
        assert_eq!(config.caps, ClueCounts::new(4, 3, 1, 1, 4));
        assert_eq!(config.strategy, Strategy::Balanced);
        assert_eq!(config.add_priority.len(), 4);
        assert_eq!(config.remove_priority[0], RemoveStep::new(ClueType::Letters, 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn ceilings_per_preset() {
        let config = AllocatorConfig::default();
        // 4 + 3 + 1 + 1 + 4
        assert_eq!(config.ceiling_for(&Strategy::Balanced), 13);
        // Antonyms never filled
        assert_eq!(config.ceiling_for(&Strategy::DefinitionHeavy), 12);
        assert_eq!(config.ceiling_for(&Strategy::ExampleHeavy), 13);
    }

    #[test]
    fn zero_target_rejected() {
        let config = AllocatorConfig::default().target(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTarget));
    }

    #[test]
    fn unreachable_caps_rejected() {
        let config = AllocatorConfig::default().caps(ClueCounts::new(2, 2, 1, 1, 2));
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnreachableTarget { target: 9, best: 8 })
        );
    }

    #[test]
    fn target_reachable_by_one_preset_is_accepted() {
        // Definition-heavy tops out at 12, the others at 13
        let config = AllocatorConfig::with_strategy(Strategy::DefinitionHeavy).target(13);
        assert!(config.validate().is_ok());

        let config = AllocatorConfig::default().target(14);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnreachableTarget { target: 14, .. })
        ));
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = AllocatorConfig::from_toml_str(
            r#"
            target_total = 8
            strategy = "example_heavy"

            [caps]
            definitions = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.target_total, 8);
        assert_eq!(config.strategy, Strategy::ExampleHeavy);
        assert_eq!(config.caps, ClueCounts::new(5, 3, 1, 1, 4));
    }

    #[test]
    fn toml_base_table_selects_custom_recipe() {
        let config = AllocatorConfig::from_toml_str(
            r#"
            [base]
            definitions = 4
            examples = 3
            synonyms = "available"
            antonyms = "available"
            letters = 4
            "#,
        )
        .unwrap();

        let Strategy::Custom(recipe) = config.strategy else {
            panic!("expected custom strategy");
        };
        assert_eq!(recipe.letters, Slot::Fixed(4));
        assert_eq!(recipe.antonyms, Slot::Available);
    }

    #[test]
    fn toml_unknown_strategy_rejected() {
        let result = AllocatorConfig::from_toml_str(r#"strategy = "greedy""#);
        assert_eq!(
            result,
            Err(ConfigError::UnknownStrategy("greedy".to_string()))
        );
    }

    #[test]
    fn toml_unknown_key_rejected() {
        let result = AllocatorConfig::from_toml_str("budget = 9");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            AllocatorConfig::from_toml_str("").unwrap(),
            AllocatorConfig::default()
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let result = AllocatorConfig::load("/nonexistent/clue_budget.toml");
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
