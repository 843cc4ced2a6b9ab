//! Runtime configuration resolved from CLI args and the environment

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Resolved runtime configuration.
pub struct Config {
    pub year_filter: Option<u16>,
    pub day_filter: Option<u8>,
    pub part_filter: Option<u8>,
    pub tags: Vec<String>,
    pub cache_dir: PathBuf,
    /// Local input file overriding cache and fetch
    pub input_file: Option<PathBuf>,
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub submit: bool,
    pub user_id: u64,
    /// Whether the user id came from the user rather than the session
    pub user_id_provided: bool,
    /// Session cookie, zeroized on drop; empty when not resolved
    pub session: Zeroizing<String>,
    pub auto_retry: bool,
    pub leaderboard: bool,
    /// Private leaderboard id, from --board-id or the BOARD_ID env var
    pub board_id: Option<u64>,
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let cache_dir = expand_tilde(&args.cache_dir);
        let thread_count = args.threads.unwrap_or_else(num_cpus);
        let board_id = match args.board_id {
            Some(id) => Some(id),
            None => board_id_from_env()?,
        };

        // Running from a local file needs no account at all, unless the
        // answers are being submitted anyway.
        let offline = args.input_file.is_some() && !args.submit && !args.leaderboard;
        let user_id_provided = args.user_id.is_some();
        let (session, user_id) = if offline {
            (Zeroizing::new(String::new()), args.user_id.unwrap_or(0))
        } else {
            resolve_session_and_user_id(args.user_id, args.submit || args.leaderboard)?
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            cache_dir,
            input_file: args.input_file,
            thread_count,
            parallelize_by: args.parallelize_by,
            submit: args.submit,
            user_id,
            user_id_provided,
            session,
            auto_retry: args.auto_retry,
            leaderboard: args.leaderboard,
            board_id,
            quiet: args.quiet,
        })
    }
}

fn board_id_from_env() -> Result<Option<u64>, CliError> {
    match std::env::var("BOARD_ID") {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CliError::Config(format!("BOARD_ID is not a number: {value:?}"))),
        Err(_) => Ok(None),
    }
}

/// Expand a leading ~ to the home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn prompt_user_id() -> Result<u64, CliError> {
    use std::io::Write;
    println!("No user ID provided. Enter your AoC user ID (found in your profile URL).");
    print!("User ID: ");
    std::io::stdout().flush().ok();

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::Config(format!("failed to read user ID: {}", e)))?;

    input
        .trim()
        .parse()
        .map_err(|_| CliError::Config("invalid user ID: must be a number".to_string()))
}

/// Prompt for a session cookie without echoing it.
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    println!("{}", reason);
    let session = rpassword::prompt_password("Enter AoC session cookie: ")
        .map_err(|e| CliError::Config(format!("failed to read session: {}", e)))?;
    if session.is_empty() {
        return Err(CliError::Config("session cookie is required".to_string()));
    }
    Ok(Zeroizing::new(session))
}

/// Verify a session against the site, optionally checking the user id.
pub fn verify_session(session: &str, expected_user_id: Option<u64>) -> Result<u64, CliError> {
    let client = elf_client::ElfClient::new()?;
    let info = client.verify_session(session)?;
    let actual = info
        .user_id
        .ok_or_else(|| CliError::Config("invalid session: could not fetch user ID".to_string()))?;

    if let Some(expected) = expected_user_id
        && actual != expected
    {
        return Err(CliError::UserIdMismatch { expected, actual });
    }
    Ok(actual)
}

/// Resolve the session cookie and user id from the AOC_SESSION env var,
/// CLI args, and interactive prompts.
fn resolve_session_and_user_id(
    provided_user_id: Option<u64>,
    session_required: bool,
) -> Result<(Zeroizing<String>, u64), CliError> {
    let env_session = std::env::var("AOC_SESSION").ok();

    let (user_id, user_supplied) = match (provided_user_id, &env_session) {
        (Some(uid), _) => (Some(uid), true),
        (None, Some(_)) => (None, false),
        (None, None) => (Some(prompt_user_id()?), true),
    };

    let session = match env_session {
        Some(s) => Zeroizing::new(s),
        None if session_required => {
            prompt_session("Session cookie required to talk to adventofcode.com")?
        }
        None => Zeroizing::new(String::new()),
    };

    let user_id = if !session.is_empty() {
        let expected = if user_supplied { user_id } else { None };
        verify_session(&session, expected)?
    } else {
        // No session, so a user id was provided or prompted above
        user_id.ok_or_else(|| CliError::Config("user ID unresolved".to_string()))?
    };

    Ok((session, user_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion_leaves_absolute_paths_alone() {
        let path = PathBuf::from("/var/cache/elf");
        assert_eq!(expand_tilde(&path), path);
    }

    #[test]
    fn tilde_expansion_resolves_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/.cache/elf")), home.join(".cache/elf"));
        }
    }
}
