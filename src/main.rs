//! Clue Budget - CLI
//!
//! Reports on and repairs a word puzzle dataset against a fixed per-word clue budget.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use clue_budget::{
    allocator::{AllocatorConfig, ClueAllocator, Strategy},
    commands::{
        DEFAULT_SAMPLE, analyze_word, run_budget, run_distribution, run_impact, run_repair,
        run_validate,
    },
    core::WordRecord,
    dataset::{IssueKind, RepairOptions, load_dataset},
    logging::init_tracing,
    output::{
        print_analysis_result, print_budget_result, print_distribution_result,
        print_impact_result, print_repair_outcome, print_validation_report,
    },
};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "clue_budget",
    about = "Clue budget allocation and maintenance for a word puzzle dataset",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset file (JSON array of word records)
    #[arg(short, long, global = true, default_value = "puzzle.json")]
    data: PathBuf,

    /// Strategy: balanced (default), definition_heavy, example_heavy
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Clues per word (default 9)
    #[arg(short, long, global = true)]
    target: Option<usize>,

    /// TOML file with target, strategy, caps and an optional custom base recipe
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug); also lists details in reports
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the allocation for one word under every strategy
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Compare the clue budget against the legacy clue count
    Impact {
        /// Only measure the configured strategy instead of every preset
        #[arg(long)]
        current: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Histograms of legacy clue counts and word lengths
    Distribution,

    /// List words that cannot reach the clue budget
    Budget {
        /// Number of under-budget words to list
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE)]
        sample: usize,
    },

    /// Check every record for content problems
    Validate {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Only report these issue kinds (comma separated, e.g. under_budget)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Exit with an error when any issue is found
        #[arg(long)]
        strict: bool,
    },

    /// Fix duplicate and circular definitions and related-word lists in place
    Repair {
        /// Report changes without writing the dataset
        #[arg(long)]
        dry_run: bool,

        /// Also restore missing or wrong first_letter fields
        #[arg(long)]
        first_letter: bool,

        /// Keep duplicate definitions
        #[arg(long)]
        skip_duplicates: bool,

        /// Keep circular definitions
        #[arg(long)]
        skip_circular: bool,

        /// Leave synonym and antonym lists alone
        #[arg(long)]
        skip_related: bool,
    },
}

/// Build the allocator from the config file and command-line overrides
///
/// Flags win over file values.
fn build_allocator(cli: &Cli) -> Result<ClueAllocator> {
    let mut config = match &cli.config {
        Some(path) => AllocatorConfig::load(path)?,
        None => AllocatorConfig::default(),
    };

    if let Some(name) = &cli.strategy {
        config.strategy = Strategy::from_name(name)?;
    }
    if let Some(target) = cli.target {
        config.target_total = target;
    }

    debug!(
        strategy = config.strategy.name(),
        target = config.target_total,
        caps = %config.caps,
        "allocator config"
    );
    ClueAllocator::new(config).context("Invalid allocator configuration")
}

fn load_records(path: &Path) -> Result<Vec<WordRecord>> {
    load_dataset(path).context("Failed to load dataset")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let allocator = build_allocator(&cli)?;
    let verbose = cli.verbose > 0;

    match &cli.command {
        Commands::Analyze { word } => run_analyze_command(&cli.data, word, &allocator),
        Commands::Impact {
            current,
            no_progress,
        } => run_impact_command(&cli.data, &allocator, *current, !*no_progress),
        Commands::Distribution => run_distribution_command(&cli.data, &allocator),
        Commands::Budget { sample } => run_budget_command(&cli.data, &allocator, *sample),
        Commands::Validate { json, only, strict } => {
            run_validate_command(&cli.data, &allocator, only, *json, *strict, verbose)
        }
        Commands::Repair {
            dry_run,
            first_letter,
            skip_duplicates,
            skip_circular,
            skip_related,
        } => {
            let options = RepairOptions {
                duplicates: !*skip_duplicates,
                circular: !*skip_circular,
                related: !*skip_related,
                first_letter: *first_letter,
            };
            run_repair_command(&cli.data, &options, *dry_run, verbose)
        }
    }
}

fn run_analyze_command(data: &Path, word: &str, allocator: &ClueAllocator) -> Result<()> {
    let records = load_records(data)?;
    let result = analyze_word(word, &records, allocator).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_impact_command(
    data: &Path,
    allocator: &ClueAllocator,
    current: bool,
    show_progress: bool,
) -> Result<()> {
    let records = load_records(data)?;
    let strategies = if current {
        vec![allocator.config().strategy]
    } else {
        Strategy::PRESETS.to_vec()
    };

    let result = run_impact(&records, allocator, &strategies, show_progress);
    print_impact_result(&result);
    Ok(())
}

fn run_distribution_command(data: &Path, allocator: &ClueAllocator) -> Result<()> {
    let records = load_records(data)?;
    let result = run_distribution(&records, allocator.config().target_total);
    print_distribution_result(&result);
    Ok(())
}

fn run_budget_command(data: &Path, allocator: &ClueAllocator, sample: usize) -> Result<()> {
    let records = load_records(data)?;
    let result = run_budget(&records, allocator, sample);
    print_budget_result(&result);
    Ok(())
}

fn run_validate_command(
    data: &Path,
    allocator: &ClueAllocator,
    only: &[String],
    json: bool,
    strict: bool,
    verbose: bool,
) -> Result<()> {
    let kinds = only
        .iter()
        .map(|name| {
            IssueKind::from_name(name).with_context(|| format!("Unknown issue kind '{name}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let records = load_records(data)?;
    let report = run_validate(&records, allocator, &kinds);

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_validation_report(&report, verbose);
    }

    if strict && !report.is_clean() {
        bail!("{} validation issues found", report.issues.len());
    }
    Ok(())
}

fn run_repair_command(
    data: &Path,
    options: &RepairOptions,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let outcome = run_repair(data, options, dry_run)
        .with_context(|| format!("Failed to repair {}", data.display()))?;
    print_repair_outcome(&outcome, verbose);
    Ok(())
}
