//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_budget_result, print_distribution_result, print_impact_result,
    print_repair_outcome, print_validation_report,
};
