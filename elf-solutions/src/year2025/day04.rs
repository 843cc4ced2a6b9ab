//! Day 4: forklift access to paper rolls.
//!
//! The grid marks paper rolls with `@`. A roll is reachable when fewer
//! than four of its eight neighbours are also rolls. Part 1 counts the
//! rolls reachable right now; part 2 keeps removing every reachable roll
//! until the grid stops changing and counts the total removed.

use elf_solver::{ParseError, SolveError, Solver, solver_plugin};

pub struct Day04;

solver_plugin!(Day04, year = 2025, day = 4, tags = ["grid", "fixpoint"]);

#[derive(Debug, Clone)]
pub struct RollGrid {
    rolls: Vec<Vec<bool>>,
}

impl RollGrid {
    fn neighbour_rolls(&self, row: usize, col: usize) -> usize {
        let rows = self.rolls.len() as isize;
        let cols = self.rolls[0].len() as isize;
        let mut count = 0;
        for dr in -1..=1isize {
            for dc in -1..=1isize {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r >= 0 && r < rows && c >= 0 && c < cols && self.rolls[r as usize][c as usize] {
                    count += 1;
                }
            }
        }
        count
    }

    fn reachable(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for (row, line) in self.rolls.iter().enumerate() {
            for (col, &roll) in line.iter().enumerate() {
                if roll && self.neighbour_rolls(row, col) < 4 {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Removes one wave of reachable rolls, returning how many went.
    fn remove_reachable(&mut self) -> usize {
        let positions = self.reachable();
        for &(row, col) in &positions {
            self.rolls[row][col] = false;
        }
        positions.len()
    }
}

impl Solver for Day04 {
    type Parsed<'a> = RollGrid;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        let rolls: Vec<Vec<bool>> = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '@' => Ok(true),
                        '.' => Ok(false),
                        _ => Err(ParseError::InvalidFormat(format!("unexpected cell {c:?}"))),
                    })
                    .collect()
            })
            .collect::<Result<_, _>>()?;
        if rolls.is_empty() {
            return Err(ParseError::MissingData("empty grid".into()));
        }
        let width = rolls[0].len();
        if rolls.iter().any(|line| line.len() != width) {
            return Err(ParseError::InvalidFormat("ragged grid".into()));
        }
        Ok(RollGrid { rolls })
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(parsed.reachable().len().to_string()),
            2 => {
                let mut grid = parsed.clone();
                let mut removed = 0usize;
                loop {
                    let wave = grid.remove_reachable();
                    if wave == 0 {
                        break;
                    }
                    removed += wave;
                }
                Ok(removed.to_string())
            }
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elf_solver::SolverExt;

    const EXAMPLE: &str = "\
@@.
@@@
.@@
";

    #[test]
    fn part1_counts_reachable_rolls() {
        let mut parsed = Day04::parse(EXAMPLE).unwrap();
        assert_eq!(Day04::solve_part_checked(&mut parsed, 1).unwrap(), "2");
    }

    #[test]
    fn part2_removes_until_fixpoint() {
        let mut parsed = Day04::parse(EXAMPLE).unwrap();
        assert_eq!(Day04::solve_part_checked(&mut parsed, 2).unwrap(), "7");
    }

    #[test]
    fn part2_leaves_part1_reusable() {
        // Part 2 works on a copy, so part 1 still sees the original grid
        let mut parsed = Day04::parse(EXAMPLE).unwrap();
        Day04::solve_part_checked(&mut parsed, 2).unwrap();
        assert_eq!(Day04::solve_part_checked(&mut parsed, 1).unwrap(), "2");
    }

    #[test]
    fn rejects_unknown_cell() {
        assert!(Day04::parse("@#.\n").is_err());
    }
}
