//! Solver framework for Advent of Code day puzzles.
//!
//! Each day implements [`Solver`] (how to parse its input and how to answer
//! each part) and submits itself with [`solver_plugin!`]. A
//! [`SolverRegistry`] collects the submitted days and hands out type-erased
//! [`DynSolver`] instances that record parse and solve timing.
//!
//! ```
//! use elf_solver::{ParseError, RegistryBuilder, SolveError, Solver};
//!
//! struct Sum;
//!
//! impl Solver for Sum {
//!     type Parsed<'a> = Vec<i64>;
//!     const PARTS: u8 = 1;
//!
//!     fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
//!             .collect()
//!     }
//!
//!     fn solve_part(parsed: &mut Self::Parsed<'_>, _part: u8) -> Result<String, SolveError> {
//!         Ok(parsed.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register::<Sum>(2025, 1).unwrap().build();
//! let mut solver = registry.create_solver(2025, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{RegisterableSolver, RegistryBuilder, SolverInfo, SolverPlugin, SolverRegistry};
pub use solver::{Solver, SolverExt};

// Re-exported for use by the solver_plugin! macro
pub use inventory;
