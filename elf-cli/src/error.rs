//! Error types for the CLI

use thiserror::Error;

/// Top-level CLI error.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("http client error: {0}")]
    Http(#[from] elf_client::ElfError),

    #[error("solver error: {0}")]
    Solver(#[from] elf_solver::SolverError),

    #[error("registration error: {0}")]
    Registration(#[from] elf_solver::RegistrationError),

    #[error("user id mismatch: expected {expected}, got {actual}")]
    UserIdMismatch { expected: u64, actual: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Executor(#[from] ExecutorError),
}

/// Errors surfaced by the parallel executor.
#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("input fetch failed for {year}/{day}: {source}")]
    InputFetch {
        year: u16,
        day: u8,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("http client setup failed: {0}")]
    Client(String),

    #[error("result channel closed early")]
    ChannelSend,

    #[error("thread pool creation failed: {0}")]
    ThreadPool(String),

    #[error("multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ExecutorError>),
}

impl ExecutorError {
    /// Folds two errors into one, flattening nested `Multiple` variants.
    pub fn combine(first: ExecutorError, second: ExecutorError) -> ExecutorError {
        let errors = match (first, second) {
            (ExecutorError::Multiple(mut left), ExecutorError::Multiple(right)) => {
                left.extend(right);
                left
            }
            (first, ExecutorError::Multiple(right)) => {
                let mut combined = vec![first];
                combined.extend(right);
                combined
            }
            (ExecutorError::Multiple(mut left), second) => {
                left.push(second);
                left
            }
            (first, second) => vec![first, second],
        };
        ExecutorError::Multiple(errors)
    }

    pub fn combine_opt(existing: Option<ExecutorError>, new: ExecutorError) -> ExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Input cache errors.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache directory creation failed: {0}")]
    DirCreation(String),
}
