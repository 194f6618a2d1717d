use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// No source table could be found; nothing can be matched in this session.
    #[error("reference database unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("table '{table}' has no column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("worker error: {0}")]
    Worker(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("regex error: {0}")]
    Regex(#[from] onig::Error),

    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
