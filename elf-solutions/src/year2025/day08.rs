//! Day 8: connecting junction boxes into circuits.
//!
//! Junction boxes are points in 3-space. Candidate connections are every
//! pair, ordered by Euclidean distance. Part 1 processes the first 1000
//! connections (merges and no-ops alike) and multiplies the sizes of the
//! three largest circuits. Part 2 keeps going until everything is one
//! circuit and reports the product of the x coordinates of the final
//! merging pair.

use anyhow::Context;
use elf_solver::{ParseError, SolveError, Solver, solver_plugin};
use itertools::Itertools;

use crate::util::DisjointSet;

pub struct Day08;

solver_plugin!(Day08, year = 2025, day = 8, tags = ["union-find", "geometry"]);

const CONNECTION_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: i64,
    y: i64,
    z: i64,
}

fn parse_point(line: &str) -> anyhow::Result<Point> {
    let (x, y, z) = line
        .split(',')
        .map(|part| part.trim().parse::<i64>().with_context(|| format!("bad coordinate in {line:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?
        .into_iter()
        .collect_tuple()
        .with_context(|| format!("expected three coordinates in {line:?}"))?;
    Ok(Point { x, y, z })
}

/// Pair indices ordered by squared distance, ties in generation order.
fn sorted_pairs(points: &[Point]) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(u64, usize, usize)> = (0..points.len())
        .tuple_combinations()
        .map(|(a, b)| {
            let (pa, pb) = (points[a], points[b]);
            let dx = pa.x - pb.x;
            let dy = pa.y - pb.y;
            let dz = pa.z - pb.z;
            let dist = (dx * dx + dy * dy + dz * dz) as u64;
            (dist, a, b)
        })
        .collect();
    pairs.sort();
    pairs.into_iter().map(|(_, a, b)| (a, b)).collect()
}

/// Product of the three largest circuit sizes after processing the
/// `limit` shortest candidate connections.
fn circuit_product(points: &[Point], limit: usize) -> u64 {
    let mut circuits = DisjointSet::new(points.len());
    for &(a, b) in sorted_pairs(points).iter().take(limit) {
        circuits.union(a, b);
    }
    let mut sizes = circuits.component_sizes();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.iter().take(3).map(|&size| size as u64).product()
}

fn final_merge_product(points: &[Point]) -> Result<i64, SolveError> {
    let mut circuits = DisjointSet::new(points.len());
    let mut last_merge = None;
    for (a, b) in sorted_pairs(points) {
        if circuits.components() == 1 {
            break;
        }
        if circuits.union(a, b) {
            last_merge = Some(points[a].x * points[b].x);
        }
    }
    last_merge.ok_or_else(|| SolveError::NoSolution("fewer than two junction boxes".into()))
}

impl Solver for Day08 {
    type Parsed<'a> = Vec<Point>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| parse_point(line).map_err(ParseError::other))
            .collect()
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(circuit_product(parsed, CONNECTION_LIMIT).to_string()),
            2 => Ok(final_merge_product(parsed)?.to_string()),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elf_solver::SolverExt;

    const EXAMPLE: &str = "\
0,0,0
1,0,0
0,1,0
10,0,0
10,1,0
30,0,0
";

    #[test]
    fn limited_connections_leave_separate_circuits() {
        let points = Day08::parse(EXAMPLE).unwrap();
        // After five connections the two clusters have merged but the
        // outlier has not: sizes 5 and 1
        assert_eq!(circuit_product(&points, 5), 5);
        // Three connections in, the clusters are still apart: 3, 2, 1
        assert_eq!(circuit_product(&points, 3), 6);
    }

    #[test]
    fn part1_processes_the_first_thousand() {
        // Fifteen candidate pairs, so the limit connects everything
        let mut parsed = Day08::parse(EXAMPLE).unwrap();
        assert_eq!(Day08::solve_part_checked(&mut parsed, 1).unwrap(), "6");
    }

    #[test]
    fn part2_reports_the_final_merge() {
        let mut parsed = Day08::parse(EXAMPLE).unwrap();
        // The outlier at x=30 joins last, through the box at x=10
        assert_eq!(Day08::solve_part_checked(&mut parsed, 2).unwrap(), "300");
    }

    #[test]
    fn rejects_two_coordinates() {
        assert!(Day08::parse("1,2\n").is_err());
    }
}
