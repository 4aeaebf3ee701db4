//! Errors raised outside the core algorithms.
//!
//! Parsing, selection and partitioning are total and never fail. What can
//! fail is everything around them: reading input, loading configuration and
//! validating user-supplied options.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("no entries to pick from, add some entries first")]
    NoEntries,

    #[error("entries cannot be blank")]
    BlankEntry,

    #[error("cannot draw {requested} times, the limit is {max}")]
    TooManyDraws { requested: i64, max: usize },

    #[error("cannot make {requested} teams from {entries} entries")]
    TooManyTeams { requested: i64, entries: usize },

    #[error("unknown team mode '{0}' (expected 'count' or 'size')")]
    UnknownMode(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PickerError>;
