//! Advent of Code 2025 puzzle solutions.
//!
//! Each day module implements [`elf_solver::Solver`] and registers itself
//! with `solver_plugin!`; linking this crate is enough to make every day
//! visible to a `RegistryBuilder`.

pub mod util;
pub mod year2025;
