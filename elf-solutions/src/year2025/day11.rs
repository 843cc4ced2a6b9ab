//! Day 11: counting paths through the toy factory's device graph.
//!
//! Each line names a device and the devices its outputs feed. Part 1
//! counts the distinct paths from `you` to `out`. Part 2 multiplies the
//! path counts of the three legs `svr` to `fft`, `fft` to `dac` and `dac`
//! to `out`.

use elf_solver::{ParseError, SolveError, Solver, solver_plugin};
use std::collections::HashMap;

use crate::util::count_walks;

pub struct Day11;

solver_plugin!(Day11, year = 2025, day = 11, tags = ["graph", "counting"]);

impl Solver for Day11 {
    type Parsed<'a> = HashMap<&'a str, Vec<&'a str>>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        let mut adjacency = HashMap::new();
        for line in input.lines().filter(|line| !line.is_empty()) {
            let (device, outputs) = line
                .split_once(':')
                .ok_or_else(|| ParseError::InvalidFormat(format!("no device name in {line:?}")))?;
            let outputs: Vec<&str> = outputs.split_whitespace().collect();
            if outputs.is_empty() {
                return Err(ParseError::MissingData(format!("device {device:?} has no outputs")));
            }
            if adjacency.insert(device.trim(), outputs).is_some() {
                return Err(ParseError::InvalidFormat(format!("device {device:?} listed twice")));
            }
        }
        if adjacency.is_empty() {
            return Err(ParseError::MissingData("empty device list".into()));
        }
        Ok(adjacency)
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(count_walks(parsed, "you", "out").to_string()),
            2 => {
                let product = count_walks(parsed, "svr", "fft")
                    * count_walks(parsed, "fft", "dac")
                    * count_walks(parsed, "dac", "out");
                Ok(product.to_string())
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
    fn part1_counts_paths_to_out() {
        let mut parsed = Day11::parse("you: aaa bbb\naaa: ccc\nbbb: ccc out\nccc: out\n").unwrap();
        assert_eq!(Day11::solve_part_checked(&mut parsed, 1).unwrap(), "3");
    }

    #[test]
    fn part2_multiplies_the_three_legs() {
        let input = "\
svr: fft aaa
aaa: fft
fft: dac bbb
bbb: dac
dac: out ccc
ccc: out
";
        let mut parsed = Day11::parse(input).unwrap();
        // Two paths per leg
        assert_eq!(Day11::solve_part_checked(&mut parsed, 2).unwrap(), "8");
    }

    #[test]
    fn absent_start_means_no_paths() {
        let mut parsed = Day11::parse("aaa: out\n").unwrap();
        assert_eq!(Day11::solve_part_checked(&mut parsed, 1).unwrap(), "0");
    }

    #[test]
    fn rejects_line_without_colon() {
        assert!(Day11::parse("you aaa bbb\n").is_err());
    }
}
