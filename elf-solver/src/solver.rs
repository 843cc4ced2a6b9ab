//! Core solver trait

use crate::error::{ParseError, SolveError};

/// A day solver: how to parse the puzzle input and how to answer each part.
///
/// `Parsed` is a generic-associated type so a solver may either own its data
/// (`Vec<T>`, a custom struct) or borrow from the input (`&'a str`) when no
/// transformation is needed. `solve_part` takes the parsed data mutably so a
/// part may stash intermediate results for the next part.
///
/// # Example
///
/// ```
/// use elf_solver::{ParseError, SolveError, Solver};
///
/// struct Sum;
///
/// impl Solver for Sum {
///     type Parsed<'a> = Vec<i64>;
///     const PARTS: u8 = 2;
///
///     fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
///             .collect()
///     }
///
///     fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
///         let answer: i64 = match part {
///             1 => parsed.iter().sum(),
///             _ => parsed.iter().product(),
///         };
///         Ok(answer.to_string())
///     }
/// }
/// ```
pub trait Solver {
    /// Parsed puzzle input plus any intermediate results shared between parts.
    type Parsed<'a>;

    /// Number of parts this solver implements.
    const PARTS: u8;

    /// Parse the raw input text.
    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError>;

    /// Compute the answer for `part` (1-based). Callers go through
    /// [`SolverExt::solve_part_checked`], so implementations may assume
    /// `part` is within `1..=Self::PARTS`.
    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point, blanket-implemented for every [`Solver`].
pub trait SolverExt: Solver {
    fn solve_part_checked(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(parsed, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<S: Solver + ?Sized> SolverExt for S {}
