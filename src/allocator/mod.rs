//! Clue budget allocation
//!
//! One configurable, pure allocation routine shared by every report and repair
//! command. Configuration is validated once; allocation itself never fails except
//! for records without a usable word.

mod config;
mod engine;
mod strategy;

pub use config::{AllocatorConfig, ConfigError, DEFAULT_CAPS, DEFAULT_TARGET_TOTAL, RemoveStep};
pub use engine::{Allocation, ClueAllocator};
pub use strategy::{BaseRecipe, Slot, Strategy};
