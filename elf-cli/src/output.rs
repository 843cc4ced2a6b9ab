//! Terminal output for solver results and leaderboards

use crate::executor::{PartOutcome, SubmissionOutcome};
use chrono::TimeDelta;
use elf_client::Leaderboard;

/// Formats per-part lines and the final summary.
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    pub fn print_result(&self, outcome: &PartOutcome) {
        if self.quiet {
            match &outcome.answer {
                Ok(answer) => println!("{}", answer),
                Err(e) => eprintln!("Error: {}", e),
            }
            return;
        }

        let prefix = format!("{}/{:02} Part {}", outcome.year, outcome.day, outcome.part);
        match &outcome.answer {
            Ok(answer) => {
                let parse_timing = outcome
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                let submission_info = match &outcome.submission {
                    Some(verdict) => {
                        let at = outcome
                            .submitted_at
                            .map(|t| t.format("%H:%M:%S").to_string())
                            .unwrap_or_default();
                        format!(", submitted {}: {}", at, format_verdict(verdict))
                    }
                    None => String::new(),
                };
                println!(
                    "{}: {} ({}solve: {}{})",
                    prefix,
                    answer,
                    parse_timing,
                    format_duration(outcome.solve_duration),
                    submission_info
                );
            }
            Err(e) => eprintln!("{}: Error - {}", prefix, e),
        }
    }

    /// Totals across all results, plus wall-clock time to show the benefit
    /// of running days in parallel.
    pub fn print_summary(&self, outcomes: &[PartOutcome]) {
        if self.quiet {
            return;
        }

        let successes = outcomes.iter().filter(|r| r.answer.is_ok()).count();
        let failures = outcomes.len() - successes;

        let total_parse: TimeDelta = outcomes
            .iter()
            .filter(|r| r.answer.is_ok())
            .filter_map(|r| r.parse_duration)
            .sum();
        let total_solve: TimeDelta = outcomes
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let elapsed = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Solvers: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse));
        println!("Total solve time: {}", format_duration(total_solve));
        println!("Elapsed wall-clock time: {}", format_std_duration(elapsed));
        if !elapsed.is_zero() {
            let compute = total_parse + total_solve;
            let compute_secs = compute.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            println!("Speedup factor: {:.2}x", compute_secs / elapsed.as_secs_f64());
        }
    }
}

/// Renders a private leaderboard the way the site ranks it.
pub fn print_leaderboard(board: &Leaderboard) {
    println!("Private leaderboard {} ({})", board.owner_id, board.event);
    for (rank, member) in board.standings().iter().enumerate() {
        println!(
            "{:>3}) {:>5} pts {:>3}* {}",
            rank + 1,
            member.local_score,
            member.stars,
            member.display_name()
        );
    }
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

fn format_verdict(verdict: &SubmissionOutcome) -> String {
    match verdict {
        SubmissionOutcome::Correct => "✓ Correct".to_string(),
        SubmissionOutcome::Incorrect => "✗ Incorrect".to_string(),
        SubmissionOutcome::AlreadyCompleted => "⏭ Already completed".to_string(),
        SubmissionOutcome::Throttled { wait_time } => match wait_time {
            Some(d) => format!(
                "⏳ Throttled (wait {})",
                format_std_duration(*d)
            ),
            None => "⏳ Throttled".to_string(),
        },
        SubmissionOutcome::Error(msg) => format!("⚠ Error: {}", msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_pick_sensible_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(750)), "750µs");
        assert_eq!(format_duration(TimeDelta::milliseconds(12)), "12.00ms");
        assert_eq!(format_duration(TimeDelta::seconds(3)), "3.00s");
    }

    #[test]
    fn negative_duration_keeps_sign() {
        assert_eq!(format_duration(TimeDelta::milliseconds(-12)), "-12.00ms");
    }
}
