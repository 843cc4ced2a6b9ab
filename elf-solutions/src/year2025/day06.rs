//! Day 6: a worksheet of math problems written in columns.
//!
//! Number rows sit above a final row of operators. Part 1 reads each
//! whitespace separated column as one problem: apply the column's operator
//! to its numbers. Part 2 reads the sheet the way cephalopods do: each
//! character column is one number read top to bottom, problems are
//! separated by blank character columns, and the operator sits in the
//! problem's leftmost column. Both parts sum the problem results.

use elf_solver::{ParseError, SolveError, Solver, solver_plugin};

pub struct Day06;

solver_plugin!(Day06, year = 2025, day = 6, tags = ["grid", "parsing"]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
}

impl Op {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Op::Add),
            '*' => Some(Op::Mul),
            _ => None,
        }
    }

    fn apply(self, numbers: &[u64]) -> u64 {
        match self {
            Op::Add => numbers.iter().sum(),
            Op::Mul => numbers.iter().product(),
        }
    }
}

fn solve_by_tokens(lines: &[&str]) -> Result<u64, SolveError> {
    let (ops_line, number_lines) = lines
        .split_last()
        .ok_or_else(|| SolveError::NoSolution("empty worksheet".into()))?;
    let ops: Vec<Op> = ops_line
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next().and_then(Op::from_char), chars.next()) {
                (Some(op), None) => Ok(op),
                _ => Err(SolveError::NoSolution(format!("bad operator {token:?}"))),
            }
        })
        .collect::<Result<_, _>>()?;

    let mut columns: Vec<Vec<u64>> = vec![Vec::new(); ops.len()];
    for line in number_lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != ops.len() {
            return Err(SolveError::NoSolution(format!(
                "row has {} numbers but there are {} operators",
                tokens.len(),
                ops.len()
            )));
        }
        for (column, token) in columns.iter_mut().zip(tokens) {
            let number = token
                .parse()
                .map_err(|_| SolveError::NoSolution(format!("bad number {token:?}")))?;
            column.push(number);
        }
    }
    Ok(ops.iter().zip(&columns).map(|(op, numbers)| op.apply(numbers)).sum())
}

fn solve_by_char_columns(lines: &[&str]) -> Result<u64, SolveError> {
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let rows: Vec<Vec<char>> = lines
        .iter()
        .map(|line| {
            let mut row: Vec<char> = line.chars().collect();
            row.resize(width, ' ');
            row
        })
        .collect();

    let mut total = 0u64;
    let mut numbers: Vec<u64> = Vec::new();
    let mut op: Option<Op> = None;
    for col in 0..=width {
        let column: Vec<char> = if col < width {
            rows.iter().map(|row| row[col]).collect()
        } else {
            Vec::new()
        };
        let blank = column.iter().all(|&c| c == ' ');
        if blank {
            // End of a problem
            if let Some(op) = op.take() {
                total += op.apply(&numbers);
            } else if !numbers.is_empty() {
                return Err(SolveError::NoSolution("problem without an operator".into()));
            }
            numbers.clear();
            continue;
        }
        let mut digits = String::new();
        for &c in &column {
            match c {
                '0'..='9' => digits.push(c),
                ' ' => {}
                c => match Op::from_char(c) {
                    Some(found) => op = Some(found),
                    None => {
                        return Err(SolveError::NoSolution(format!("unexpected character {c:?}")));
                    }
                },
            }
        }
        if !digits.is_empty() {
            let number = digits
                .parse()
                .map_err(|_| SolveError::NoSolution(format!("bad column number {digits:?}")))?;
            numbers.push(number);
        }
    }
    Ok(total)
}

impl Solver for Day06 {
    type Parsed<'a> = Vec<&'a str>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        // Trailing spaces are significant for the character-column reading,
        // so lines are kept verbatim.
        let lines: Vec<&str> = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("empty worksheet".into()));
        }
        Ok(lines)
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(solve_by_tokens(parsed)?.to_string()),
            2 => Ok(solve_by_char_columns(parsed)?.to_string()),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elf_solver::SolverExt;

    const EXAMPLE: &str = "\
123 328  51 64
 45 64  387 23
  6 98  215 314
*   +   *   +
";

    #[test]
    fn part1_reads_token_columns() {
        let mut parsed = Day06::parse(EXAMPLE).unwrap();
        assert_eq!(Day06::solve_part_checked(&mut parsed, 1).unwrap(), "4277556");
    }

    #[test]
    fn part2_reads_character_columns() {
        let mut parsed = Day06::parse(EXAMPLE).unwrap();
        assert_eq!(Day06::solve_part_checked(&mut parsed, 2).unwrap(), "3263827");
    }

    #[test]
    fn part1_rejects_ragged_rows() {
        let mut parsed = Day06::parse("1 2\n3\n+ *\n").unwrap();
        assert!(matches!(
            Day06::solve_part_checked(&mut parsed, 1),
            Err(SolveError::NoSolution(_))
        ));
    }
}
