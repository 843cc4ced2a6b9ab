//! Solver instances and the type-erased runtime interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part, with solve timing.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed, ready-to-solve instance of one day's solver.
///
/// Parsing happens in [`SolverInstance::new`] and its duration is recorded so
/// the CLI can report parse and solve time separately.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    parsed: S::Parsed<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let parsed = S::parse(input)?;
        let parse_end = Utc::now();
        Ok(Self {
            year,
            day,
            parsed,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased solver handle.
///
/// The registry hands these out so the executor can drive any day's solver
/// uniformly through dynamic dispatch.
pub trait DynSolver {
    /// Solve the given part, timing the computation.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn year(&self) -> u16;
    fn day(&self) -> u8;
    fn parts(&self) -> u8;

    fn parse_start(&self) -> DateTime<Utc>;
    fn parse_end(&self) -> DateTime<Utc>;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl std::fmt::Debug for dyn DynSolver + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynSolver")
            .field("year", &self.year())
            .field("day", &self.day())
            .field("parts", &self.parts())
            .finish()
    }
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked(&mut self.parsed, part)?;
        let solve_end = Utc::now();
        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }
}
