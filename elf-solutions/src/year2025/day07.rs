//! Day 7: a tachyon beam falling through a manifold of splitters.
//!
//! The beam enters at `S` on the first row and travels straight down. A
//! splitter `^` stops the beam and emits two new beams one row down, one
//! column to each side; beams leaving the grid sideways are lost. Part 1
//! counts splitters that get hit. Part 2 counts timelines: beams carry
//! multiplicity, and beams arriving at the same cell merge.

use elf_solver::{ParseError, SolveError, Solver, solver_plugin};
use std::collections::{BTreeMap, HashSet};

pub struct Day07;

solver_plugin!(Day07, year = 2025, day = 7, tags = ["grid", "simulation"]);

#[derive(Debug, Clone)]
pub struct Manifold {
    /// Splitter positions per row, below the entry row
    splitters: Vec<Vec<bool>>,
    start_col: usize,
    cols: usize,
}

impl Manifold {
    /// Runs the beam to the bottom, returning the set of splitters hit and
    /// the number of timelines that exit the grid.
    fn trace(&self) -> (HashSet<(usize, usize)>, u64) {
        let mut hit = HashSet::new();
        // Beam multiplicity per column, advanced one row at a time
        let mut beams: BTreeMap<usize, u64> = BTreeMap::new();
        beams.insert(self.start_col, 1);
        for (row, line) in self.splitters.iter().enumerate() {
            let mut next: BTreeMap<usize, u64> = BTreeMap::new();
            for (&col, &count) in &beams {
                if line[col] {
                    hit.insert((row, col));
                    if col > 0 {
                        *next.entry(col - 1).or_default() += count;
                    }
                    if col + 1 < self.cols {
                        *next.entry(col + 1).or_default() += count;
                    }
                } else {
                    *next.entry(col).or_default() += count;
                }
            }
            beams = next;
        }
        (hit, beams.values().sum())
    }
}

impl Solver for Day07 {
    type Parsed<'a> = Manifold;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        let mut lines = input.lines().filter(|line| !line.is_empty());
        let entry = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("empty manifold".into()))?;
        let start_col = entry
            .find('S')
            .ok_or_else(|| ParseError::MissingData("no beam entry point".into()))?;
        if entry.chars().any(|c| c != 'S' && c != '.') {
            return Err(ParseError::InvalidFormat("unexpected character on entry row".into()));
        }
        let cols = entry.chars().count();
        let splitters: Vec<Vec<bool>> = lines
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '^' => Ok(true),
                        '.' => Ok(false),
                        _ => Err(ParseError::InvalidFormat(format!("unexpected cell {c:?}"))),
                    })
                    .collect()
            })
            .collect::<Result<_, _>>()?;
        if splitters.iter().any(|line| line.len() != cols) {
            return Err(ParseError::InvalidFormat("ragged manifold".into()));
        }
        Ok(Manifold {
            splitters,
            start_col,
            cols,
        })
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        let (hit, timelines) = parsed.trace();
        match part {
            1 => Ok(hit.len().to_string()),
            2 => Ok(timelines.to_string()),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elf_solver::SolverExt;

    const EXAMPLE: &str = "\
..S..
..^..
.^.^.
.....
..^..
.....
";

    #[test]
    fn part1_counts_splitters_hit() {
        let mut parsed = Day07::parse(EXAMPLE).unwrap();
        assert_eq!(Day07::solve_part_checked(&mut parsed, 1).unwrap(), "4");
    }

    #[test]
    fn part2_counts_merged_timelines() {
        let mut parsed = Day07::parse(EXAMPLE).unwrap();
        assert_eq!(Day07::solve_part_checked(&mut parsed, 2).unwrap(), "6");
    }

    #[test]
    fn beams_leaving_the_grid_are_lost() {
        let mut parsed = Day07::parse("S..\n^..\n...\n").unwrap();
        // The left child beam falls off the grid
        assert_eq!(Day07::solve_part_checked(&mut parsed, 2).unwrap(), "1");
    }

    #[test]
    fn entry_row_needs_a_start() {
        assert!(Day07::parse(".....\n..^..\n").is_err());
    }
}
