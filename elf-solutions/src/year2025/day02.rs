//! Day 2: invalid product ids inside ranges.
//!
//! The input is a comma separated list of inclusive id ranges. Part 1 sums,
//! per range, the ids whose decimal digits are one sequence written exactly
//! twice. Part 2 sums the distinct ids across all ranges whose digits are
//! any sequence repeated two or more times.

use anyhow::Context;
use elf_solver::{ParseError, SolveError, Solver, solver_plugin};
use std::collections::BTreeSet;

pub struct Day02;

solver_plugin!(Day02, year = 2025, day = 2, tags = ["digits"]);

fn parse_range(text: &str) -> anyhow::Result<(u64, u64)> {
    let (low, high) = text
        .split_once('-')
        .with_context(|| format!("range {text:?} is missing a dash"))?;
    let low = low.trim().parse().with_context(|| format!("bad range start in {text:?}"))?;
    let high = high.trim().parse().with_context(|| format!("bad range end in {text:?}"))?;
    Ok((low, high))
}

/// True if the digits are one sequence written exactly twice, e.g. `1212`.
fn is_doubled(id: u64) -> bool {
    let digits = id.to_string();
    let len = digits.len();
    len % 2 == 0 && digits[..len / 2] == digits[len / 2..]
}

/// True if the digits are some sequence repeated two or more times.
fn is_repeated(id: u64) -> bool {
    let digits = id.to_string();
    let bytes = digits.as_bytes();
    let len = bytes.len();
    (1..len).any(|block| len % block == 0 && bytes.chunks(block).all(|chunk| chunk == &bytes[..block]))
}

impl Solver for Day02 {
    type Parsed<'a> = Vec<(u64, u64)>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| parse_range(text).map_err(ParseError::other))
            .collect()
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                // Per-range sums, so an id in two ranges counts twice
                let total: u64 = parsed
                    .iter()
                    .flat_map(|&(low, high)| (low..=high).filter(|&id| is_doubled(id)))
                    .sum();
                Ok(total.to_string())
            }
            2 => {
                let distinct: BTreeSet<u64> = parsed
                    .iter()
                    .flat_map(|&(low, high)| (low..=high).filter(|&id| is_repeated(id)))
                    .collect();
                Ok(distinct.iter().sum::<u64>().to_string())
            }
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elf_solver::SolverExt;

    #[test]
    fn doubled_ids() {
        assert!(is_doubled(11));
        assert!(is_doubled(1212));
        assert!(!is_doubled(111));
        assert!(!is_doubled(1213));
    }

    #[test]
    fn repeated_ids() {
        assert!(is_repeated(111));
        assert!(is_repeated(121212));
        assert!(is_repeated(99));
        assert!(!is_repeated(1213));
        assert!(!is_repeated(7));
    }

    #[test]
    fn part1_sums_per_range() {
        let mut parsed = Day02::parse("11-22,95-115").unwrap();
        // 11 + 22 from the first range, 99 from the second
        assert_eq!(Day02::solve_part_checked(&mut parsed, 1).unwrap(), "132");
    }

    #[test]
    fn part1_counts_overlaps_twice() {
        let mut parsed = Day02::parse("11-22,22-33").unwrap();
        assert_eq!(Day02::solve_part_checked(&mut parsed, 1).unwrap(), "88");
    }

    #[test]
    fn part2_deduplicates_across_ranges() {
        let mut parsed = Day02::parse("11-22,22-33").unwrap();
        // 11, 22, 33 each counted once
        assert_eq!(Day02::solve_part_checked(&mut parsed, 2).unwrap(), "66");
    }

    #[test]
    fn rejects_malformed_range() {
        assert!(Day02::parse("11x22").is_err());
    }
}
