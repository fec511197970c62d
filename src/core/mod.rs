//! Core domain types for the clue budget
//!
//! Plain data: clue categories, per-category counts and the dataset record.
//! Nothing here performs I/O.

mod clue;
mod record;

pub use clue::{ClueCounts, ClueType};
pub use record::{RecordError, WordRecord};
