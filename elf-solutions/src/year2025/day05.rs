//! Day 5: fresh ingredient ranges.
//!
//! The input has two blank-line separated sections: inclusive ranges of
//! fresh ingredient ids, then a list of ids to check. Part 1 counts the
//! listed ids covered by at least one range. Part 2 ignores the list and
//! counts every id the ranges cover, merging overlaps.

use anyhow::Context;
use elf_solver::{ParseError, SolveError, Solver, solver_plugin};

pub struct Day05;

solver_plugin!(Day05, year = 2025, day = 5, tags = ["intervals"]);

#[derive(Debug, Clone)]
pub struct Database {
    ranges: Vec<(u64, u64)>,
    ids: Vec<u64>,
}

fn parse_sections(input: &str) -> anyhow::Result<Database> {
    let (ranges_text, ids_text) = input
        .split_once("\n\n")
        .context("expected ranges and ids separated by a blank line")?;
    let ranges = ranges_text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (low, high) = line.split_once('-').with_context(|| format!("range {line:?} is missing a dash"))?;
            Ok((
                low.trim().parse().with_context(|| format!("bad range start in {line:?}"))?,
                high.trim().parse().with_context(|| format!("bad range end in {line:?}"))?,
            ))
        })
        .collect::<anyhow::Result<_>>()?;
    let ids = ids_text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.trim().parse().with_context(|| format!("bad id {line:?}")))
        .collect::<anyhow::Result<_>>()?;
    Ok(Database { ranges, ids })
}

/// Coalesces overlapping or touching inclusive ranges.
fn merge_ranges(ranges: &[(u64, u64)]) -> Vec<(u64, u64)> {
    let mut sorted = ranges.to_vec();
    sorted.sort();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(sorted.len());
    for (low, high) in sorted {
        match merged.last_mut() {
            Some((_, end)) if low <= *end + 1 => *end = (*end).max(high),
            _ => merged.push((low, high)),
        }
    }
    merged
}

impl Solver for Day05 {
    type Parsed<'a> = Database;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        parse_sections(input).map_err(ParseError::other)
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let fresh = parsed
                    .ids
                    .iter()
                    .filter(|&&id| parsed.ranges.iter().any(|&(low, high)| low <= id && id <= high))
                    .count();
                Ok(fresh.to_string())
            }
            2 => {
                let covered: u64 = merge_ranges(&parsed.ranges)
                    .iter()
                    .map(|&(low, high)| high - low + 1)
                    .sum();
                Ok(covered.to_string())
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
3-5
10-14
12-18
16-20

1
4
11
17
21
";

    #[test]
    fn part1_counts_ids_in_ranges() {
        let mut parsed = Day05::parse(EXAMPLE).unwrap();
        assert_eq!(Day05::solve_part_checked(&mut parsed, 1).unwrap(), "3");
    }

    #[test]
    fn part2_counts_merged_coverage() {
        let mut parsed = Day05::parse(EXAMPLE).unwrap();
        assert_eq!(Day05::solve_part_checked(&mut parsed, 2).unwrap(), "14");
    }

    #[test]
    fn merge_joins_touching_ranges() {
        assert_eq!(merge_ranges(&[(1, 3), (4, 6), (10, 12)]), vec![(1, 6), (10, 12)]);
    }

    #[test]
    fn missing_blank_line_is_a_parse_error() {
        assert!(Day05::parse("3-5\n10-14\n").is_err());
    }
}
