//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_tracing(&config);

    // Build registry with tag filtering
    let registry = build_registry(&config.tags)?;
    tracing::debug!(solvers = registry.len(), "registry built");

    let executor = Executor::new(registry, &config);
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Check for missing inputs before running anything
    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        for path in &missing {
            tracing::warn!(path = %path.display(), "input file not found");
        }
        return Err(CliError::MissingInputs(missing));
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }
    let mut formatter = OutputFormatter::new(config.quiet);
    let reports = executor.execute(&work_items, &mut formatter)?;
    formatter.print_summary(&reports);

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
