//! Display functions for command results

use super::formatters::{create_progress_bar, format_changes, format_ranked, percentage};
use crate::commands::{
    AnalysisResult, BudgetResult, DistributionResult, ImpactResult, RepairOutcome, StrategyImpact,
};
use crate::dataset::{SkippedRecord, ValidationReport};
use colored::Colorize;

fn print_header(title: &str, subject: Option<&str>) {
    println!("\n{}", "═".repeat(60).cyan());
    match subject {
        Some(subject) => println!(
            " {} {} ",
            title.bright_cyan().bold(),
            subject.to_uppercase().bright_yellow().bold()
        ),
        None => println!(" {} ", title.bright_cyan().bold()),
    }
    println!("{}", "═".repeat(60).cyan());
}

fn print_skipped(skipped: &[SkippedRecord]) {
    if skipped.is_empty() {
        return;
    }
    println!(
        "\n{} {}",
        "⚠️  Skipped records:".yellow().bold(),
        skipped.len()
    );
    for record in skipped {
        println!("   {record}");
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    print_header("CLUE ANALYSIS:", Some(&result.word));

    println!("\n📦 {}", "Inventory:".bright_cyan().bold());
    println!("   Raw:        {}", result.inventory);
    println!("   Capped:     {}", result.allocation.inventory);
    println!("   Legacy:     {} clues", result.legacy_total);

    let allocation = &result.allocation;
    println!(
        "\n🎯 {} {}",
        "Allocation".bright_cyan().bold(),
        format!("({})", result.strategy).bright_black()
    );
    println!("   {}", allocation.counts.to_string().bright_yellow());
    println!(
        "   Total:      {} / {} (reachable {})",
        allocation.total(),
        allocation.target,
        allocation.max_reachable()
    );
    if allocation.is_under_budget() {
        println!(
            "   {}",
            format!("Under budget by {}", allocation.shortfall()).red().bold()
        );
    } else {
        println!("   {}", "At budget".green());
    }

    println!("\n📋 {}", "Presets:".bright_cyan().bold());
    for (strategy, preset) in &result.presets {
        let total = if preset.is_under_budget() {
            preset.total().to_string().red()
        } else {
            preset.total().to_string().green()
        };
        println!("   {:<17} {}  total {}", strategy.name(), preset.counts, total);
    }
}

fn print_strategy_impact(impact: &StrategyImpact, total_records: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Strategy: {}",
        impact.strategy.name().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n📊 {}", "Impact Summary:".bright_cyan().bold());
    for (label, count) in [
        ("Words losing clues: ", impact.losing),
        ("Words gaining clues:", impact.gaining),
        ("Words unchanged:    ", impact.unchanged),
    ] {
        println!(
            "   {label} {count:5} ({:5.1}%)",
            percentage(count, total_records)
        );
    }

    println!("\n   Most cut:   {}", format_ranked(&impact.most_cut()).red());
    println!("   Most added: {}", format_ranked(&impact.most_added()).green());

    if !impact.examples.is_empty() {
        println!("\n🔍 {}", "Example transformations:".bright_cyan().bold());
    }
    for example in &impact.examples {
        println!(
            "\n   '{}': {} → {} clues",
            example.word.bright_yellow(),
            example.legacy_total,
            example.allocation.total()
        );
        println!("     Current: {}", example.legacy);
        println!("     New:     {}", example.allocation);
        println!(
            "     Change:  {}",
            format_changes(&example.legacy, &example.allocation).bright_black()
        );
    }
}

/// Print the result of an impact run
pub fn print_impact_result(result: &ImpactResult) {
    print_header("CLUE BUDGET IMPACT", None);
    println!("\n   Words analyzed: {}", result.total_records);

    for impact in &result.strategies {
        print_strategy_impact(impact, result.total_records);
    }
    print_skipped(&result.skipped);
}

/// Print legacy clue count and word length histograms
pub fn print_distribution_result(result: &DistributionResult) {
    print_header("CLUE DISTRIBUTION", None);

    let counted = result.counted();
    println!("\n   Words:          {}", result.total_records);
    println!("   Average clues:  {:.2}", result.average_clues());
    println!(
        "   Over {} clues:  {}",
        result.target,
        result.over_target.to_string().yellow()
    );

    print_histogram("Legacy clue counts:", "clues", &result.clue_counts, counted);
    print_histogram("Word lengths:", "letters", &result.word_lengths, counted);
    print_skipped(&result.skipped);
}

fn print_histogram(title: &str, unit: &str, buckets: &[(usize, usize)], total: usize) {
    println!("\n📈 {}", title.bright_cyan().bold());
    let widest = buckets.iter().map(|&(_, words)| words).max().unwrap_or(0);

    for &(value, words) in buckets {
        let bar = create_progress_bar(words as f64, widest as f64, 30);
        println!(
            "   {value:3} {unit:<7} {} {words:5} ({:5.1}%)",
            bar.green(),
            percentage(words, total)
        );
    }
}

/// Print words that cannot reach the clue budget
pub fn print_budget_result(result: &BudgetResult) {
    print_header("CLUE BUDGET COVERAGE", None);

    if result.under_budget.is_empty() {
        println!(
            "\n{}",
            format!("✅ Every word can support {} clues.", result.target)
                .green()
                .bold()
        );
    } else {
        println!(
            "\n{}",
            format!(
                "❌ {} words cannot reach {} clues:",
                result.under_budget.len(),
                result.target
            )
            .red()
            .bold()
        );
        for word in result.sample() {
            println!(
                "   '{}': max {} clues ({})",
                word.word.bright_yellow(),
                word.allocation.max_reachable(),
                word.allocation.inventory
            );
        }
        let hidden = result.under_budget.len() - result.sample().len();
        if hidden > 0 {
            println!("   {}", format!("... and {hidden} more").bright_black());
        }
    }

    println!(
        "\n   Words already at exactly {} clues: {}",
        result.target, result.at_target
    );
    if !result.at_target_examples.is_empty() {
        println!("   Examples: {}", result.at_target_examples.join(", "));
    }
    print_skipped(&result.skipped);
}

/// Print a validation report
pub fn print_validation_report(report: &ValidationReport, verbose: bool) {
    print_header("DATASET VALIDATION", None);

    if report.is_clean() {
        println!(
            "\n{}",
            format!("✅ All {} records passed.", report.total_records)
                .green()
                .bold()
        );
        return;
    }

    println!(
        "\n   {} issues in {} of {} records",
        report.issues.len().to_string().red().bold(),
        report.affected_words,
        report.total_records
    );

    println!("\n📋 {}", "By kind:".bright_cyan().bold());
    for (kind, count) in &report.counts {
        println!("   {:<42} {count:5}", kind.to_string());
    }

    if verbose {
        println!("\n🔍 {}", "Issues:".bright_cyan().bold());
        for issue in &report.issues {
            println!(
                "   #{:<5} {:<16} {}: {}",
                issue.index,
                issue.word.bright_yellow(),
                issue.kind,
                issue.detail.bright_black()
            );
        }
    }
}

/// Print what a repair run changed
pub fn print_repair_outcome(outcome: &RepairOutcome, verbose: bool) {
    print_header("DATASET REPAIR", None);
    let report = &outcome.report;

    println!(
        "\n   {} changes in {} of {} records",
        report.change_count().to_string().bright_yellow().bold(),
        report.changed_records(),
        report.total_records
    );

    if verbose {
        for repair in &report.repairs {
            println!("\n   '{}':", repair.word.bright_yellow());
            for action in &repair.actions {
                println!("     - {action}");
            }
        }
    }

    let review: Vec<&str> = report.needing_review().map(|r| r.word.as_str()).collect();
    if !review.is_empty() {
        println!(
            "\n{} {}",
            "⚠️  Needs manual review:".yellow().bold(),
            review.join(", ")
        );
    }
    print_skipped(&report.skipped);

    println!();
    if outcome.written {
        println!("{}", "✅ Dataset updated.".green().bold());
    } else if outcome.dry_run && report.is_changed() {
        println!("{}", "Dry run: dataset not written.".bright_black());
    } else {
        println!("{}", "Nothing to change.".green());
    }
}
