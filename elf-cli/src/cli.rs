//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every solver sequentially in order
    Sequential,
    /// Parallelize across days; parts run sequentially within a day (default)
    #[default]
    Day,
    /// Parallelize across every day/part combination
    Part,
}

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "elf", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Cache directory for puzzle inputs
    #[arg(long, default_value = "~/.cache/elf")]
    pub cache_dir: PathBuf,

    /// Run against a local input file instead of the cached or fetched
    /// puzzle input; requires --day
    #[arg(long, requires = "day")]
    pub input_file: Option<PathBuf>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Submit answers to Advent of Code
    #[arg(long)]
    pub submit: bool,

    /// Auto-retry throttled submissions after the reported wait time
    #[arg(long)]
    pub auto_retry: bool,

    /// User ID for cache organization and verification
    #[arg(long)]
    pub user_id: Option<u64>,

    /// Show the private leaderboard instead of running solvers
    #[arg(long)]
    pub leaderboard: bool,

    /// Private leaderboard id (falls back to the BOARD_ID environment
    /// variable)
    #[arg(long)]
    pub board_id: Option<u64>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_file_requires_day() {
        assert!(Args::try_parse_from(["elf", "--input-file", "test.txt"]).is_err());
        assert!(Args::try_parse_from(["elf", "--day", "3", "--input-file", "test.txt"]).is_ok());
    }

    #[test]
    fn day_out_of_range_rejected() {
        assert!(Args::try_parse_from(["elf", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["elf", "--part", "3"]).is_err());
    }

    #[test]
    fn tags_split_on_commas() {
        let args = Args::try_parse_from(["elf", "--tags", "grid,bfs"]).unwrap();
        assert_eq!(args.tags, vec!["grid", "bfs"]);
    }
}
