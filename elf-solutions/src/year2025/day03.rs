//! Day 3: maximum joltage from battery banks.
//!
//! Each line is a bank of single-digit batteries. Turning on `k` batteries
//! reads their digits left to right as a `k` digit number, so the best
//! choice is the lexicographically largest subsequence of length `k`.
//! Part 1 turns on two batteries per bank, part 2 twelve.

use elf_solver::{ParseError, SolveError, Solver, solver_plugin};

pub struct Day03;

solver_plugin!(Day03, year = 2025, day = 3, tags = ["greedy", "digits"]);

/// Largest `k` digit number obtainable as a subsequence of `digits`.
///
/// Classic greedy: keep a stack, pop a smaller digit whenever enough input
/// remains to still fill `k` slots.
fn max_subsequence(digits: &[u8], k: usize) -> u64 {
    let mut stack: Vec<u8> = Vec::with_capacity(k);
    for (i, &digit) in digits.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if top < digit && stack.len() + (digits.len() - i) > k {
                stack.pop();
            } else {
                break;
            }
        }
        if stack.len() < k {
            stack.push(digit);
        }
    }
    stack.iter().fold(0u64, |acc, &digit| acc * 10 + u64::from(digit))
}

impl Solver for Day03 {
    type Parsed<'a> = Vec<Vec<u8>>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| {
                        c.to_digit(10)
                            .map(|d| d as u8)
                            .ok_or_else(|| ParseError::InvalidFormat(format!("non-digit {c:?} in bank")))
                    })
                    .collect()
            })
            .collect()
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        let k = match part {
            1 => 2,
            2 => 12,
            _ => return Err(SolveError::PartOutOfRange(part)),
        };
        if let Some(short) = parsed.iter().find(|bank| bank.len() < k) {
            return Err(SolveError::NoSolution(format!(
                "bank of {} batteries cannot power {k} slots",
                short.len()
            )));
        }
        let total: u64 = parsed.iter().map(|bank| max_subsequence(bank, k)).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elf_solver::SolverExt;

    const EXAMPLE: &str = "\
987654321111111
811111111111119
234234234234278
818181911112111
";

    #[test]
    fn greedy_subsequence_basics() {
        assert_eq!(max_subsequence(&[8, 1, 9], 2), 89);
        assert_eq!(max_subsequence(&[1, 9, 8], 2), 98);
        assert_eq!(max_subsequence(&[5, 5, 5], 3), 555);
    }

    #[test]
    fn part1_two_digit_banks() {
        let mut parsed = Day03::parse(EXAMPLE).unwrap();
        assert_eq!(Day03::solve_part_checked(&mut parsed, 1).unwrap(), "357");
    }

    #[test]
    fn part2_twelve_digit_banks() {
        let mut parsed = Day03::parse(EXAMPLE).unwrap();
        assert_eq!(
            Day03::solve_part_checked(&mut parsed, 2).unwrap(),
            "3121910778619"
        );
    }

    #[test]
    fn short_bank_cannot_fill_twelve_slots() {
        let mut parsed = Day03::parse("12345\n").unwrap();
        assert!(matches!(
            Day03::solve_part_checked(&mut parsed, 2),
            Err(SolveError::NoSolution(_))
        ));
    }
}
