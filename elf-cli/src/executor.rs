//! Parallel executor driving solvers and submissions

use crate::cache::InputCache;
use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::ExecutorError;
use chrono::{DateTime, Local, TimeDelta};
use elf_client::ElfClient;
use elf_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::time::Duration;
use zeroize::Zeroizing;

/// Submission verdict as reported by the site.
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    Correct,
    Incorrect,
    AlreadyCompleted,
    Throttled { wait_time: Option<Duration> },
    Error(String),
}

/// Result of running one part of one day.
pub struct PartOutcome {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
    pub submitted_at: Option<DateTime<Local>>,
    pub submission: Option<SubmissionOutcome>,
    pub submission_wait: Option<Duration>,
}

/// One day's worth of scheduled work.
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Where puzzle input comes from.
enum InputSource {
    /// Local cache, falling back to a site fetch on miss
    Cache { cache: InputCache, base_dir: PathBuf },
    /// A user-supplied file, e.g. the puzzle's example input
    File(PathBuf),
}

struct SharedState {
    registry: SolverRegistry,
    input: InputSource,
    client: Option<ElfClient>,
    session: Zeroizing<String>,
    submit: bool,
    auto_retry: bool,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

/// Runs solvers over a rayon thread pool and streams results to a channel.
pub struct Executor {
    shared: SharedState,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let client = if config.submit || !config.session.is_empty() {
            Some(ElfClient::new().map_err(|e| ExecutorError::Client(e.to_string()))?)
        } else {
            None
        };

        let input = match &config.input_file {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Cache {
                cache: InputCache::new(config.cache_dir.clone(), config.user_id),
                base_dir: config.cache_dir.clone(),
            },
        };

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: SharedState {
                registry,
                input,
                client,
                session: config.session.clone(),
                submit: config.submit,
                auto_retry: config.auto_retry,
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Installs a freshly verified session, creating the HTTP client and
    /// re-keying the cache if the user changed.
    pub fn update_session(
        &mut self,
        session: Zeroizing<String>,
        user_id: u64,
    ) -> Result<(), ExecutorError> {
        if self.shared.client.is_none() {
            self.shared.client =
                Some(ElfClient::new().map_err(|e| ExecutorError::Client(e.to_string()))?);
        }
        self.shared.session = session;
        if let InputSource::Cache { cache, base_dir } = &mut self.shared.input {
            *cache = InputCache::new(base_dir.clone(), user_id);
        }
        Ok(())
    }

    pub fn uses_cache(&self) -> bool {
        matches!(self.shared.input, InputSource::Cache { .. })
    }

    /// Registered solvers surviving the year/day/part filters.
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let shared = &self.shared;
        shared
            .registry
            .iter_info()
            .filter(|info| shared.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| shared.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|work| !work.parts.is_empty())
            .collect()
    }

    pub fn cached_input_missing(&self, work: &WorkItem) -> bool {
        match &self.shared.input {
            InputSource::Cache { cache, .. } => !cache.contains(work.year, work.day),
            InputSource::File(_) => false,
        }
    }

    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.shared.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // empty range on purpose
            None => 1..=max_parts,
        }
    }

    /// Runs all scheduled work, streaming results through `tx`.
    pub fn execute(&self, tx: Sender<PartOutcome>) -> Result<(), ExecutorError> {
        let work_items = self.collect_work_items();

        match self.shared.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected: Option<ExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_day(&work, &tx, &self.shared) {
                        collected = Some(ExecutorError::combine_opt(collected, e));
                    }
                }
                collected.map_or(Ok(()), Err)
            }
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let shared = &self.shared;
                self.thread_pool.install(|| {
                    work_items
                        .into_par_iter()
                        .map(|work| run_day(&work, &tx, shared).err())
                        .reduce_with(|a, b| match (a, b) {
                            (Some(a), Some(b)) => Some(ExecutorError::combine(a, b)),
                            (a, None) => a,
                            (None, b) => b,
                        })
                        .unwrap_or_default()
                        .map_or(Ok(()), Err)
                })
            }
        }
    }
}

/// Result for a part that never ran because its input or parse failed.
fn failed_outcome(year: u16, day: u8, part: u8, error: String) -> PartOutcome {
    PartOutcome {
        year,
        day,
        part,
        answer: Err(SolverError::Parse(ParseError::Other(error))),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
        submitted_at: None,
        submission: None,
        submission_wait: None,
    }
}

fn run_day(
    work: &WorkItem,
    tx: &Sender<PartOutcome>,
    shared: &SharedState,
) -> Result<(), ExecutorError> {
    let input = match fetch_input(work, shared) {
        Ok(input) => input,
        Err(e) => {
            let message = e.to_string();
            for part in work.parts.clone() {
                tx.send(failed_outcome(work.year, work.day, part, message.clone()))
                    .map_err(|_| ExecutorError::ChannelSend)?;
            }
            return Ok(());
        }
    };

    if matches!(shared.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, shared)
    } else {
        run_parts_sequential(work, &input, tx, shared)
    }
}

/// Solves one part against an already-created solver.
fn solve_one(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> PartOutcome {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.duration();
            (Ok(result.answer), duration)
        }
        Err(e) => (Err(SolverError::Solve(e)), TimeDelta::zero()),
    };
    PartOutcome {
        year,
        day,
        part,
        answer,
        parse_duration: Some(solver.parse_duration()),
        solve_duration,
        submitted_at: None,
        submission: None,
        submission_wait: None,
    }
}

/// Runs one part through parse and solve, folding failures into the outcome.
fn run_one_part(year: u16, day: u8, part: u8, input: &str, shared: &SharedState) -> PartOutcome {
    match shared.registry.create_solver(year, day, input) {
        Ok(mut solver) => solve_one(year, day, part, &mut *solver),
        Err(e) => failed_outcome(year, day, part, e.to_string()),
    }
}

/// Part-level parallelism: each part re-parses, results are re-ordered
/// before they reach the shared channel.
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<PartOutcome>,
    shared: &SharedState,
) -> Result<(), ExecutorError> {
    let (part_tx, part_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);

    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(part_tx, |ptx, part| {
            ptx.send(run_one_part(year, day, part, input, shared)).ok();
        });

    let start_part = *work.parts.start();
    let mut buffer: [Option<PartOutcome>; 2] = [None, None];
    let mut next_part = start_part;
    for outcome in part_rx {
        let slot = (outcome.part - start_part) as usize;
        if slot < buffer.len() {
            buffer[slot] = Some(outcome);
        }
        while let Some(outcome) = buffer
            .get_mut((next_part - start_part) as usize)
            .and_then(Option::take)
        {
            deliver(tx, outcome, shared)?;
            next_part += 1;
        }
    }
    Ok(())
}

/// Parts in order on one solver instance; submissions happen on the
/// current thread while the next part is already solving.
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<PartOutcome>,
    shared: &SharedState,
) -> Result<(), ExecutorError> {
    let (solve_tx, solve_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let parts = work.parts.clone();

    std::thread::scope(|scope| {
        scope.spawn(move || match shared.registry.create_solver(year, day, input) {
            Ok(mut solver) => {
                for part in parts {
                    if solve_tx.send(solve_one(year, day, part, &mut *solver)).is_err() {
                        break;
                    }
                }
            }
            Err(e) => {
                let message = e.to_string();
                for part in parts {
                    if solve_tx.send(failed_outcome(year, day, part, message.clone())).is_err() {
                        break;
                    }
                }
            }
        });

        for outcome in solve_rx {
            deliver(tx, outcome, shared)?;
        }
        Ok(())
    })
}

/// Submits if configured, then forwards the outcome.
fn deliver(
    tx: &Sender<PartOutcome>,
    mut outcome: PartOutcome,
    shared: &SharedState,
) -> Result<(), ExecutorError> {
    if shared.submit && let Ok(ref answer) = outcome.answer {
        let (verdict, wait) = submit_with_retry(
            outcome.year,
            outcome.day,
            outcome.part,
            answer,
            shared,
        );
        outcome.submitted_at = Some(Local::now());
        outcome.submission = verdict;
        outcome.submission_wait = wait;
    }
    tx.send(outcome).map_err(|_| ExecutorError::ChannelSend)
}

fn fetch_input(work: &WorkItem, shared: &SharedState) -> Result<String, ExecutorError> {
    let (year, day) = (work.year, work.day);
    let input_fetch = |source: Box<dyn std::error::Error + Send + Sync>| {
        ExecutorError::InputFetch { year, day, source }
    };

    let cache = match &shared.input {
        InputSource::File(path) => {
            return std::fs::read_to_string(path).map_err(|e| input_fetch(Box::new(e)));
        }
        InputSource::Cache { cache, .. } => cache,
    };

    if let Some(input) = cache.get(year, day).map_err(|e| input_fetch(Box::new(e)))? {
        return Ok(input);
    }

    let client = shared.client.as_ref().ok_or_else(|| {
        input_fetch(Box::new(std::io::Error::other("no session available")))
    })?;
    let input = client
        .get_input(year, day, &shared.session)
        .map_err(|e| input_fetch(Box::new(e)))?;

    // A failed cache write should not lose the fetched input
    if let Err(e) = cache.put(year, day, &input) {
        eprintln!("Warning: cache write failed for {}/{:02}: {}", year, day, e);
    }

    Ok(input)
}

/// Submits an answer, optionally sleeping through throttle windows.
fn submit_with_retry(
    year: u16,
    day: u8,
    part: u8,
    answer: &str,
    shared: &SharedState,
) -> (Option<SubmissionOutcome>, Option<Duration>) {
    let client = match &shared.client {
        Some(c) => c,
        None => return (Some(SubmissionOutcome::Error("no http client".into())), None),
    };

    let mut total_wait = Duration::ZERO;
    loop {
        match client.submit_answer(year, day, part, answer, &shared.session) {
            Ok(elf_client::SubmissionResult::Correct) => {
                return (Some(SubmissionOutcome::Correct), Some(total_wait));
            }
            Ok(elf_client::SubmissionResult::Incorrect) => {
                return (Some(SubmissionOutcome::Incorrect), Some(total_wait));
            }
            Ok(elf_client::SubmissionResult::AlreadyCompleted) => {
                return (Some(SubmissionOutcome::AlreadyCompleted), Some(total_wait));
            }
            Ok(elf_client::SubmissionResult::Throttled { wait_time }) => {
                if shared.auto_retry && let Some(wait) = wait_time {
                    std::thread::sleep(wait);
                    total_wait += wait;
                    continue;
                }
                return (
                    Some(SubmissionOutcome::Throttled { wait_time }),
                    Some(total_wait),
                );
            }
            Err(e) => {
                return (Some(SubmissionOutcome::Error(e.to_string())), Some(total_wait));
            }
        }
    }
}
