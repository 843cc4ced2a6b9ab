//! Client library for the Advent of Code website.
//!
//! Covers the four interactions a solver run needs: verifying a session
//! cookie, fetching puzzle input, submitting an answer, and reading a
//! private leaderboard. The API is blocking and synchronous; TLS goes
//! through rustls.
//!
//! ```no_run
//! use elf_client::{ElfClient, SubmissionResult};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ElfClient::new()?;
//! let session = "session_cookie";
//!
//! let input = client.get_input(2025, 1, session)?;
//! match client.submit_answer(2025, 1, 1, "1105", session)? {
//!     SubmissionResult::Correct => println!("correct"),
//!     SubmissionResult::Incorrect => println!("wrong answer"),
//!     SubmissionResult::AlreadyCompleted => println!("already solved"),
//!     SubmissionResult::Throttled { wait_time } => println!("throttled: {:?}", wait_time),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod leaderboard;
mod parser;

pub use client::{ElfClient, ElfClientBuilder, SessionInfo, SubmissionResult};
pub use error::ElfError;
pub use leaderboard::{Leaderboard, Member};
