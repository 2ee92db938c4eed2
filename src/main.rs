//! Blitzplan -- troop composition and attack-order planner.
//!
//! Loads a scenario (built-in, JSON file, random, or typed in), runs the
//! exhaustive search and prints the report to stdout. Logs go to stderr.

use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blitzplan::config::ConfigError;
use blitzplan::enumerate::OrderBias;
use blitzplan::planner::{PlanError, Planner};
use blitzplan::prompt::{PromptError, Prompter};
use blitzplan::report::{write_json, write_text};
use blitzplan::scenario::{default_scenario, random_scenario, ScenarioFile};
use blitzplan::search::SearchLimits;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "blitzplan", version, about = "Find the troop mix and attack order that conquer the most territories")]
struct Cli {
    /// Scenario JSON file, or '-' for stdin.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["random", "interactive"])]
    config: Option<String>,

    /// Generate a random scenario with N territories.
    #[arg(long, value_name = "N", conflicts_with = "interactive")]
    random: Option<usize>,

    /// Seed for --random, 0 for entropy.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Highest defense for --random territories.
    #[arg(long, value_name = "D", default_value_t = 20)]
    max_defense: u32,

    /// Type the scenario in at the terminal.
    #[arg(long)]
    interactive: bool,

    /// Override the scenario budget.
    #[arg(long, value_name = "B", allow_negative_numbers = true)]
    budget: Option<i64>,

    /// Permute territories in listed order instead of weakest first.
    #[arg(long)]
    as_listed: bool,

    /// Worker threads; 1 searches on the main thread, 0 uses every core.
    #[arg(long, value_name = "N", default_value_t = 1)]
    threads: usize,

    /// Stop the search after this many milliseconds.
    #[arg(long, value_name = "MS")]
    movetime: Option<u64>,

    /// Stop the search after this many evaluations.
    #[arg(long, value_name = "N")]
    nodes: Option<u64>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Maximum entries shown per list in the text report.
    #[arg(long, value_name = "N", default_value_t = 10)]
    limit: usize,
}

/// Anything that ends the process with a failure status.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid scenario: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Picks the scenario source from the options.
fn load_scenario(cli: &Cli) -> Result<ScenarioFile, CliError> {
    let scenario = if let Some(path) = &cli.config {
        if path == "-" {
            ScenarioFile::from_reader(io::stdin().lock())?
        } else {
            ScenarioFile::from_path(path)?
        }
    } else if let Some(count) = cli.random {
        let mut rng = if cli.seed != 0 {
            SmallRng::seed_from_u64(cli.seed)
        } else {
            SmallRng::from_entropy()
        };
        random_scenario(count, cli.max_defense, &mut rng)
    } else if cli.interactive {
        let stdin = io::stdin();
        Prompter::new(stdin.lock(), io::stdout()).scenario()?
    } else {
        default_scenario()
    };
    Ok(scenario)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut scenario = load_scenario(cli)?;
    if let Some(budget) = cli.budget {
        scenario.budget = budget;
    }
    let config = scenario.validate()?;
    info!(
        budget = config.budget(),
        territories = config.board().len(),
        "scenario loaded"
    );

    let mut planner = Planner::new();
    planner.configure(config);
    planner.set_bias(if cli.as_listed {
        OrderBias::AsListed
    } else {
        OrderBias::WeakFirst
    });
    planner.set_threads(cli.threads);
    planner.set_limits(SearchLimits {
        movetime: cli.movetime.map(Duration::from_millis),
        nodes: cli.nodes,
    });

    let report = planner.run()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.json {
        write_json(&report, &mut out)?;
    } else {
        write_text(&report, &mut out, cli.limit)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blitzplan=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
