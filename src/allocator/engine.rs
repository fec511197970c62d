//! Clue budget allocation
//!
//! Turns a word's inventory into a per-type allocation that sums to the target
//! total whenever the word has enough content.
//!
//! # Algorithm
//! 1. Cap the raw inventory by the per-type caps
//! 2. Resolve the strategy's base recipe against the capped inventory
//! 3. While under target, raise the first type in `add_priority` with room left
//! 4. While over target, trim the first type in `remove_priority` above its floor,
//!    then fall back to `last_resort` with no floor
//!
//! Both loops stop as soon as no step applies, so a word without enough content
//! simply comes back under budget.

use super::config::{AllocatorConfig, ConfigError};
use super::strategy::Strategy;
use crate::core::{ClueCounts, ClueType, RecordError, WordRecord};
use rayon::prelude::*;
use serde::Serialize;

/// Result of allocating clues for one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Allocation {
    /// Clues to show, per type
    pub counts: ClueCounts,
    /// Inventory after per-type caps
    pub inventory: ClueCounts,
    /// Most clues the strategy could draw from this inventory
    pub reachable: usize,
    /// Target total the allocation aimed for
    pub target: usize,
}

impl Allocation {
    /// Number of clues allocated
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.counts.total()
    }

    /// Highest total this word could reach under the strategy
    ///
    /// Equal to the capped inventory total unless the strategy leaves a type
    /// out entirely (definition-heavy never uses antonyms).
    #[inline]
    #[must_use]
    pub const fn max_reachable(&self) -> usize {
        self.reachable
    }

    /// True when the word cannot supply the full target
    #[inline]
    #[must_use]
    pub const fn is_under_budget(&self) -> bool {
        self.total() < self.target
    }

    /// Clues missing from the target (zero when at target)
    #[inline]
    #[must_use]
    pub const fn shortfall(&self) -> usize {
        self.target.saturating_sub(self.total())
    }
}

/// Stateless allocator over a validated configuration
///
/// # Examples
/// ```
/// use clue_budget::allocator::{AllocatorConfig, ClueAllocator};
/// use clue_budget::core::{ClueCounts, WordRecord};
///
/// let allocator = ClueAllocator::new(AllocatorConfig::default()).unwrap();
/// let record = WordRecord::new("lantern")
///     .with_definitions(["A portable light", "A glass case for a flame", "A lighthouse top"])
///     .with_examples(["She lit the [blank] at dusk.", "The [blank] swung in the wind."])
///     .with_synonyms(["lamp"])
///     .with_antonyms(["darkness"]);
///
/// let allocation = allocator.allocate(&record).unwrap();
/// assert_eq!(allocation.counts, ClueCounts::new(3, 2, 1, 1, 2));
/// assert!(!allocation.is_under_budget());
/// ```
#[derive(Debug, Clone)]
pub struct ClueAllocator {
    config: AllocatorConfig,
}

impl ClueAllocator {
    /// Create an allocator, rejecting invalid configurations up front
    ///
    /// # Errors
    /// Returns `ConfigError` if the target is zero or unreachable under every strategy.
    pub fn new(config: AllocatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Same target, caps and priorities under another strategy
    #[must_use]
    pub fn for_strategy(&self, strategy: Strategy) -> Self {
        Self {
            config: AllocatorConfig {
                strategy,
                ..self.config.clone()
            },
        }
    }

    /// Allocate clues for one record
    ///
    /// # Errors
    /// Returns `RecordError` if the record has no usable word.
    pub fn allocate(&self, record: &WordRecord) -> Result<Allocation, RecordError> {
        let inventory = record.inventory()?;
        Ok(self.allocate_inventory(&inventory))
    }

    /// Allocate clues for a raw (uncapped) inventory
    #[must_use]
    pub fn allocate_inventory(&self, raw: &ClueCounts) -> Allocation {
        let config = &self.config;
        let inventory = raw.min(&config.caps);
        let base = config.strategy.recipe().resolve(&inventory);
        let reachable = self.reachable(&base, &inventory);
        let mut counts = base;

        while counts.total() < config.target_total {
            if !self.add_one(&mut counts, &inventory) {
                break;
            }
        }

        while counts.total() > config.target_total {
            if !self.remove_one(&mut counts) {
                break;
            }
        }

        Allocation {
            counts,
            inventory,
            reachable,
            target: config.target_total,
        }
    }

    fn reachable(&self, base: &ClueCounts, inventory: &ClueCounts) -> usize {
        ClueType::ALL
            .iter()
            .map(|&clue| {
                if self.config.add_priority.contains(&clue) && self.config.may_add(clue) {
                    inventory[clue].max(base[clue])
                } else {
                    base[clue]
                }
            })
            .sum()
    }

    /// Allocate every record in parallel, preserving input order
    #[must_use]
    pub fn allocate_all(&self, records: &[WordRecord]) -> Vec<Result<Allocation, RecordError>> {
        records.par_iter().map(|record| self.allocate(record)).collect()
    }

    fn add_one(&self, counts: &mut ClueCounts, inventory: &ClueCounts) -> bool {
        let next = self
            .config
            .add_priority
            .iter()
            .copied()
            .filter(|&clue| self.config.may_add(clue))
            .find(|&clue| counts[clue] < inventory[clue]);

        next.is_some_and(|clue| {
            counts[clue] += 1;
            true
        })
    }

    fn remove_one(&self, counts: &mut ClueCounts) -> bool {
        let config = &self.config;
        let next = config
            .remove_priority
            .iter()
            .find(|step| counts[step.clue] > step.floor)
            .map(|step| step.clue)
            .or_else(|| last_resort(&config.last_resort, counts));

        next.is_some_and(|clue| {
            counts[clue] -= 1;
            true
        })
    }
}

fn last_resort(order: &[ClueType], counts: &ClueCounts) -> Option<ClueType> {
    order.iter().copied().find(|&clue| counts[clue] > 0)
}
