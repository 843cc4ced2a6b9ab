//! Day 10: factory machines with toggle buttons and joltage counters.
//!
//! Each line describes one machine: a target light pattern in `[..]`,
//! buttons in `(..)` listing the indices they affect, and target joltages
//! in `{..}`. Part 1 finds the fewest button presses to reach the light
//! pattern, where each press toggles its lights. Part 2 finds the fewest
//! presses so that every counter reaches its target joltage exactly, each
//! press adding one to every counter the button lists.
//!
//! Part 2 works on parities: the buttons pressed an odd number of times
//! must reproduce the target's parity vector, and what remains after
//! those single presses is an even target solved recursively at half
//! scale.

use anyhow::{Context, anyhow, ensure};
use elf_solver::{ParseError, SolveError, Solver, solver_plugin};
use std::collections::{HashMap, HashSet, VecDeque};

pub struct Day10;

solver_plugin!(Day10, year = 2025, day = 10, tags = ["bfs", "search"]);

#[derive(Debug, Clone)]
pub struct Machine {
    /// Target light pattern, bit `i` set when light `i` must be on
    lights: u32,
    light_count: usize,
    /// Index lists, one per button
    buttons: Vec<Vec<usize>>,
    joltage: Vec<u64>,
}

fn parse_machine(line: &str) -> anyhow::Result<Machine> {
    let mut lights = 0u32;
    let mut light_count = 0;
    let mut buttons = Vec::new();
    let mut joltage = Vec::new();
    for token in line.split_whitespace() {
        if let Some(pattern) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            light_count = pattern.chars().count();
            ensure!(light_count <= 32, "more than 32 lights");
            for (i, c) in pattern.chars().enumerate() {
                match c {
                    '#' => lights |= 1 << i,
                    '.' => {}
                    _ => return Err(anyhow!("unexpected light {c:?} in {token:?}")),
                }
            }
        } else if let Some(list) = token.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
            let indices = list
                .split(',')
                .map(|i| i.trim().parse::<usize>().with_context(|| format!("bad index in {token:?}")))
                .collect::<anyhow::Result<Vec<_>>>()?;
            buttons.push(indices);
        } else if let Some(list) = token.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
            joltage = list
                .split(',')
                .map(|j| j.trim().parse::<u64>().with_context(|| format!("bad joltage in {token:?}")))
                .collect::<anyhow::Result<Vec<_>>>()?;
        } else {
            return Err(anyhow!("unexpected token {token:?}"));
        }
    }
    ensure!(light_count > 0, "machine has no light pattern");
    ensure!(!buttons.is_empty(), "machine has no buttons");
    ensure!(!joltage.is_empty(), "machine has no joltage targets");
    ensure!(joltage.len() <= 32, "more than 32 joltage counters");
    let limit = light_count.max(joltage.len());
    for button in &buttons {
        for &index in button {
            ensure!(index < limit, "button index {index} out of range");
        }
    }
    Ok(Machine {
        lights,
        light_count,
        buttons,
        joltage,
    })
}

/// Fewest presses to toggle the lights from all-off to the target.
fn fewest_light_presses(machine: &Machine) -> Result<u64, SolveError> {
    let masks: Vec<u32> = machine
        .buttons
        .iter()
        .map(|button| {
            button
                .iter()
                .filter(|&&i| i < machine.light_count)
                .fold(0u32, |mask, &i| mask | 1 << i)
        })
        .collect();
    let mut seen = HashSet::from([0u32]);
    let mut queue = VecDeque::from([(0u32, 0u64)]);
    while let Some((state, presses)) = queue.pop_front() {
        if state == machine.lights {
            return Ok(presses);
        }
        for &mask in &masks {
            let next = state ^ mask;
            if seen.insert(next) {
                queue.push_back((next, presses + 1));
            }
        }
    }
    Err(SolveError::NoSolution("light pattern is unreachable".into()))
}

/// Per-subset press counts and parity masks for every subset of buttons.
struct SubsetTable {
    counts: Vec<Vec<u64>>,
    parity: Vec<u32>,
}

impl SubsetTable {
    fn build(buttons: &[Vec<usize>], counters: usize) -> Self {
        let n = buttons.len();
        let mut counts = vec![vec![0u64; counters]; 1 << n];
        let mut parity = vec![0u32; 1 << n];
        for subset in 1usize..(1 << n) {
            let low = subset.trailing_zeros() as usize;
            let rest = subset & (subset - 1);
            counts[subset] = counts[rest].clone();
            for &i in &buttons[low] {
                if i < counters {
                    counts[subset][i] += 1;
                }
            }
            parity[subset] = counts[subset]
                .iter()
                .enumerate()
                .fold(0u32, |mask, (i, &c)| mask | (((c & 1) as u32) << i));
        }
        Self { counts, parity }
    }
}

/// Fewest presses to drive every counter to its target, or `None` when the
/// targets cannot be hit.
fn fewest_counter_presses(machine: &Machine) -> Option<u64> {
    let counters = machine.joltage.len();
    let table = SubsetTable::build(&machine.buttons, counters);
    let mut memo: HashMap<Vec<u64>, Option<u64>> = HashMap::new();
    presses_for(&machine.joltage, &table, &mut memo)
}

fn presses_for(
    target: &[u64],
    table: &SubsetTable,
    memo: &mut HashMap<Vec<u64>, Option<u64>>,
) -> Option<u64> {
    if target.iter().all(|&t| t == 0) {
        return Some(0);
    }
    if let Some(&cached) = memo.get(target) {
        return cached;
    }
    let parity_mask = target
        .iter()
        .enumerate()
        .fold(0u32, |mask, (i, &t)| mask | (((t & 1) as u32) << i));
    let mut best: Option<u64> = None;
    for subset in 0..table.parity.len() {
        if table.parity[subset] != parity_mask {
            continue;
        }
        let counts = &table.counts[subset];
        if target.iter().zip(counts).any(|(&t, &c)| c > t) {
            continue;
        }
        // Remaining demand is even everywhere, so solve it at half scale
        let half: Vec<u64> = target.iter().zip(counts).map(|(&t, &c)| (t - c) / 2).collect();
        if let Some(sub) = presses_for(&half, table, memo) {
            let cost = subset.count_ones() as u64 + 2 * sub;
            best = Some(best.map_or(cost, |b| b.min(cost)));
        }
    }
    memo.insert(target.to_vec(), best);
    best
}

impl Solver for Day10 {
    type Parsed<'a> = Vec<Machine>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| parse_machine(line).map_err(ParseError::other))
            .collect()
    }

    fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let mut total = 0u64;
                for machine in parsed.iter() {
                    total += fewest_light_presses(machine)?;
                }
                Ok(total.to_string())
            }
            2 => {
                let mut total = 0u64;
                for machine in parsed.iter() {
                    total += fewest_counter_presses(machine).ok_or_else(|| {
                        SolveError::NoSolution("joltage targets are unreachable".into())
                    })?;
                }
                Ok(total.to_string())
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
[##] (0) (1) (0,1) {2,3}
[.##] (0,1) (1,2) (0,2) {1,3,2}
";

    #[test]
    fn part1_fewest_toggle_presses() {
        let mut parsed = Day10::parse(EXAMPLE).unwrap();
        assert_eq!(Day10::solve_part_checked(&mut parsed, 1).unwrap(), "2");
    }

    #[test]
    fn part2_fewest_counter_presses() {
        let mut parsed = Day10::parse(EXAMPLE).unwrap();
        assert_eq!(Day10::solve_part_checked(&mut parsed, 2).unwrap(), "6");
    }

    #[test]
    fn unreachable_lights_are_reported() {
        // The three buttons only ever toggle an even number of lights
        let mut parsed = Day10::parse("[#..] (0,1) (1,2) (0,2) {1,1,1}\n").unwrap();
        assert!(matches!(
            Day10::solve_part_checked(&mut parsed, 1),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn counters_already_at_target_need_no_presses() {
        let mut parsed = Day10::parse("[#] (0) {0}\n").unwrap();
        assert_eq!(Day10::solve_part_checked(&mut parsed, 2).unwrap(), "0");
    }

    #[test]
    fn rejects_garbage_tokens() {
        assert!(Day10::parse("[#] (0) {1} extra\n").is_err());
    }
}
