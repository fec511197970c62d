//! Clue Budget
//!
//! Allocates a fixed number of clues per word of a word puzzle dataset, and
//! repairs and validates the dataset the allocation runs over.
//!
//! # Quick Start
//!
//! ```rust
//! use clue_budget::allocator::{AllocatorConfig, ClueAllocator, Strategy};
//! use clue_budget::core::{ClueCounts, WordRecord};
//!
//! let config = AllocatorConfig::with_strategy(Strategy::from_name("example_heavy").unwrap());
//! let allocator = ClueAllocator::new(config).unwrap();
//!
//! let record = WordRecord::new("harbor")
//!     .with_definitions(["A sheltered place for ships", "A place of refuge"])
//!     .with_examples(["The boats returned to the [blank].", "A safe [blank] for travelers."])
//!     .with_synonyms(["port"]);
//!
//! let allocation = allocator.allocate(&record).unwrap();
//! assert_eq!(allocation.counts, ClueCounts::new(2, 2, 1, 0, 4));
//! assert_eq!(allocation.total(), 9);
//! ```

// Core domain types
pub mod core;

// Clue budget allocation
pub mod allocator;

// Dataset loading, repair and validation
pub mod dataset;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
