//! elf - command-line runner for Advent of Code solvers

mod aggregator;
mod cache;
mod cli;
mod config;
mod error;
mod executor;
mod output;

// Link the solutions crate so its solver plugins register themselves
use elf_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use elf_solver::{RegistryBuilder, SolverRegistry};
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

/// Event year assumed when none is given, e.g. for leaderboard lookups.
const DEFAULT_EVENT: u16 = 2025;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    if config.leaderboard {
        return show_leaderboard(&config);
    }

    // Fail fast on a bad --input-file rather than per solver
    if let Some(path) = &config.input_file
        && !path.is_file()
    {
        return Err(CliError::Config(format!(
            "input file not found: {}",
            path.display()
        )));
    }

    let registry = build_registry(&config.tags)?;
    let mut executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Inputs that will need a fetch; resolve the session up front so the
    // prompt happens before any solver output
    if executor.uses_cache() {
        let missing: Vec<_> = work_items
            .iter()
            .filter(|w| executor.cached_input_missing(w))
            .collect();
        if !missing.is_empty() {
            println!("Missing {} input file(s):", missing.len());
            for work in &missing {
                println!("  - {}/day{:02}", work.year, work.day);
            }

            if config.session.is_empty() {
                println!();
                let session = config::prompt_session(
                    "Session cookie required to fetch missing inputs from adventofcode.com",
                )?;
                let expected = config.user_id_provided.then_some(config.user_id);
                let user_id = config::verify_session(&session, expected)?;
                executor
                    .update_session(session, user_id)
                    .map_err(|e| CliError::Config(e.to_string()))?;
            } else {
                println!("Will fetch missing inputs using the provided session...");
            }
        }
    }

    run_executor(executor, config.quiet)
}

fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    println!("Running {} solver(s)...", work_items.len());

    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for outcome in rx {
        for ready in aggregator.add(outcome) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Shouldn't be anything left if every expected result arrived
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);

    let failures = results.iter().filter(|r| r.answer.is_err()).count();
    if failures > 0 {
        return Err(CliError::Config(format!("{} solver part(s) failed", failures)));
    }
    Ok(())
}

fn show_leaderboard(config: &Config) -> Result<(), CliError> {
    let board_id = config.board_id.ok_or_else(|| {
        CliError::Config("no leaderboard id: pass --board-id or set BOARD_ID".to_string())
    })?;
    if config.session.is_empty() {
        return Err(CliError::Config(
            "a session cookie is required to view a private leaderboard".to_string(),
        ));
    }

    let year = config.year_filter.unwrap_or(DEFAULT_EVENT);
    let client = elf_client::ElfClient::new()?;
    let board = client.get_private_leaderboard(year, board_id, &config.session)?;
    output::print_leaderboard(&board);
    Ok(())
}

fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_where(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
