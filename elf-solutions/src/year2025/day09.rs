//! Day 9: the biggest rectangle of red and green tiles.
//!
//! Red tiles are listed in order around a loop; consecutive red tiles are
//! connected by runs of green tiles. Part 1 finds the largest rectangle
//! with two red tiles as opposite corners, counting both corner tiles in
//! each dimension. Part 2 only allows rectangles whose strict interior
//! contains no green tile.

use anyhow::Context;
use elf_solver::{ParseError, SolveError, Solver, solver_plugin};
use itertools::Itertools;
use std::collections::HashSet;

pub struct Day09;

solver_plugin!(Day09, year = 2025, day = 9, tags = ["geometry"]);

fn parse_tile(line: &str) -> anyhow::Result<(i64, i64)> {
    let (x, y) = line
        .split_once(',')
        .with_context(|| format!("expected x,y in {line:?}"))?;
    Ok((
        x.trim().parse().with_context(|| format!("bad x in {line:?}"))?,
        y.trim().parse().with_context(|| format!("bad y in {line:?}"))?,
    ))
}

/// Inclusive tile area of the rectangle with corners `a` and `b`.
fn area(a: (i64, i64), b: (i64, i64)) -> u64 {
    ((a.0 - b.0).unsigned_abs() + 1) * ((a.1 - b.1).unsigned_abs() + 1)
}

/// Every tile on the connecting runs between consecutive red tiles,
/// including the loop-closing run.
fn green_tiles(tiles: &[(i64, i64)]) -> HashSet<(i64, i64)> {
    let mut green = HashSet::new();
    for i in 0..tiles.len() {
        let a = tiles[i];
        let b = tiles[(i + 1) % tiles.len()];
        for x in a.0.min(b.0)..=a.0.max(b.0) {
            for y in a.1.min(b.1)..=a.1.max(b.1) {
                green.insert((x, y));
            }
        }
    }
    green
}

fn largest_empty_rectangle(tiles: &[(i64, i64)]) -> Result<u64, SolveError> {
    let green = green_tiles(tiles);
    let mut rectangles: Vec<((i64, i64), (i64, i64))> = tiles
        .iter()
        .copied()
        .tuple_combinations()
        .collect();
    rectangles.sort_by_key(|&(a, b)| std::cmp::Reverse(area(a, b)));
    for (a, b) in rectangles {
        let (x_low, x_high) = (a.0.min(b.0), a.0.max(b.0));
        let (y_low, y_high) = (a.1.min(b.1), a.1.max(b.1));
        let blocked = green.iter().any(|&(x, y)| {
            x_low < x && x < x_high && y_low < y && y < y_high
        });
        if !blocked {
            return Ok(area(a, b));
        }
    }
    Err(SolveError::NoSolution("no rectangle without interior green tiles".into()))
}

impl Solver for Day09 {
    type Parsed<'a> = Vec<(i64, i64)>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        let tiles: Vec<(i64, i64)> = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| parse_tile(line).map_err(ParseError::other))
            .collect::<Result<_, _>>()?;
        if tiles.len() < 2 {
            return Err(ParseError::MissingData("need at least two red tiles".into()));
        }
        Ok(tiles)
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let best = parsed
                    .iter()
                    .copied()
                    .tuple_combinations()
                    .map(|(a, b)| area(a, b))
                    .max()
                    .ok_or_else(|| SolveError::NoSolution("no tile pairs".into()))?;
                Ok(best.to_string())
            }
            2 => Ok(largest_empty_rectangle(parsed)?.to_string()),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elf_solver::SolverExt;

    const EXAMPLE: &str = "\
7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

    #[test]
    fn part1_largest_rectangle() {
        let mut parsed = Day09::parse(EXAMPLE).unwrap();
        assert_eq!(Day09::solve_part_checked(&mut parsed, 1).unwrap(), "50");
    }

    #[test]
    fn part2_avoids_interior_green_tiles() {
        let mut parsed = Day09::parse(EXAMPLE).unwrap();
        assert_eq!(Day09::solve_part_checked(&mut parsed, 2).unwrap(), "24");
    }

    #[test]
    fn area_counts_both_corners() {
        assert_eq!(area((2, 3), (9, 5)), 24);
        assert_eq!(area((1, 1), (1, 1)), 1);
    }

    #[test]
    fn rejects_single_tile() {
        assert!(Day09::parse("1,2\n").is_err());
    }
}
