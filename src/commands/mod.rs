//! Command implementations

pub mod analyze;
pub mod budget;
pub mod distribution;
pub mod impact;
pub mod legacy;
pub mod repair;
pub mod validate;

pub use analyze::{AnalysisResult, analyze_word};
pub use budget::{BudgetResult, DEFAULT_SAMPLE, UnderBudgetWord, run_budget};
pub use distribution::{DistributionResult, run_distribution};
pub use impact::{ImpactResult, StrategyImpact, Transformation, run_impact};
pub use legacy::{legacy_clue_count, legacy_counts, legacy_total};
pub use repair::{RepairOutcome, run_repair};
pub use validate::run_validate;
