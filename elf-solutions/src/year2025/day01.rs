//! Day 1: a combination dial with 100 positions.
//!
//! The dial starts at 50. Each instruction rotates it left (`L`) or right
//! (`R`) by some number of clicks, wrapping at 100. Part 1 counts how many
//! rotations end with the dial pointing at 0; part 2 counts every click
//! that lands on or sweeps past 0.

use anyhow::{Context, anyhow};
use elf_solver::{ParseError, SolveError, Solver, solver_plugin};

pub struct Day01;

solver_plugin!(Day01, year = 2025, day = 1, tags = ["dial", "simulation"]);

const DIAL_POSITIONS: i64 = 100;
const DIAL_START: i64 = 50;

fn parse_rotation(line: &str) -> anyhow::Result<i64> {
    let (sign, amount) = if let Some(rest) = line.strip_prefix('R') {
        (1, rest)
    } else if let Some(rest) = line.strip_prefix('L') {
        (-1, rest)
    } else {
        return Err(anyhow!("bad rotation direction in {line:?}"));
    };
    let amount: i64 = amount
        .parse()
        .with_context(|| format!("bad rotation amount in {line:?}"))?;
    Ok(sign * amount)
}

impl Solver for Day01 {
    type Parsed<'a> = Vec<i64>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| parse_rotation(line).map_err(ParseError::other))
            .collect()
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        let mut dial = DIAL_START;
        let mut stops_at_zero = 0u64;
        let mut zero_clicks = 0u64;
        for &rotation in parsed.iter() {
            let before = dial;
            dial += rotation;
            // A leftward sweep onto or through 0 clicks once, unless the
            // dial was already sitting on 0.
            if dial <= 0 && before != 0 {
                zero_clicks += 1;
            }
            zero_clicks += (dial / DIAL_POSITIONS).unsigned_abs();
            dial = dial.rem_euclid(DIAL_POSITIONS);
            if dial == 0 {
                stops_at_zero += 1;
            }
        }
        match part {
            1 => Ok(stops_at_zero.to_string()),
            2 => Ok(zero_clicks.to_string()),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elf_solver::SolverExt;

    const EXAMPLE: &str = "R50\nL50\nR250\nL1\n";

    #[test]
    fn part1_counts_stops_at_zero() {
        let mut parsed = Day01::parse(EXAMPLE).unwrap();
        assert_eq!(Day01::solve_part_checked(&mut parsed, 1).unwrap(), "2");
    }

    #[test]
    fn part2_counts_every_zero_click() {
        let mut parsed = Day01::parse(EXAMPLE).unwrap();
        assert_eq!(Day01::solve_part_checked(&mut parsed, 2).unwrap(), "4");
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!(Day01::parse("U10\n").is_err());
    }
}
