//! Error types for the looplens core library

use thiserror::Error;

use crate::speed::Speed;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("line index {0} is outside the program (expected -1..={max})", max = crate::program::PROGRAM.len())]
    LineOutOfRange(i64),

    /// Only `reset` may move the program back to its start
    #[error("cannot move back to the start of the program without a reset")]
    LineRewound,

    /// Loop counters stay at zero until the program leaves its start line
    #[error("{0} must stay 0 before the program starts")]
    NotStarted(&'static str),

    #[error("iteration cannot move backward from {current} to {requested}")]
    IterationRegressed { current: u32, requested: u32 },

    #[error("execution speed {0}ms is outside {min}..={max}ms", min = Speed::MIN_MS, max = Speed::MAX_MS)]
    SpeedOutOfRange(u64),

    #[error("unknown display language '{0}' (expected 'en' or 'ko')")]
    UnknownLanguage(String),

    #[error("unknown variable '{0}' (expected 'Sum' or 'i')")]
    UnknownVariable(String),

    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("auto-run needs a tokio runtime")]
    NoRuntime,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to render configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
