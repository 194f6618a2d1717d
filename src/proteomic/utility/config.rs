use std::env;
use std::str::FromStr;

use log::LevelFilter;

use crate::proteomic::error::MatchError;

pub const DATABASE_DIR_ENV: &str = "PEPTIDE_DATABASE_DIR";
pub const THREAD_COUNT_ENV: &str = "PEPTIDE_FINDER_THREADS";
pub const LOG_LEVEL_ENV: &str = "PEPTIDE_FINDER_LOG_LEVEL";
pub const LOG_FILE_ENV: &str = "PEPTIDE_FINDER_LOG_FILE";
pub const VISIT_FILE_ENV: &str = "PEPTIDE_FINDER_VISIT_FILE";

pub const DEFAULT_DATABASE_DIR: &str = "./database";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Loads variables from `.env` if there is one. A missing file is fine, the defaults apply.
pub fn load_env_file() {
    dotenv::dotenv().ok();
}

/// Command line value first, then the environment variable. Empty values count as unset.
pub fn resolve(cli_value: Option<&str>, env_key: &str) -> Option<String> {
    if let Some(value) = cli_value {
        return Some(value.to_owned());
    }
    return match env::var(env_key) {
        Ok(ref value) if !value.trim().is_empty() => Some(value.trim().to_owned()),
        _ => None
    }
}

pub fn resolve_thread_count(value: Option<String>) -> Result<usize, MatchError> {
    return match value {
        Some(number_string) => match number_string.parse::<usize>() {
            Ok(count) if count > 0 => Ok(count),
            _ => Err(MatchError::InvalidArgument(format!("thread count must be a positive integer, got '{}'", number_string)))
        },
        None => Ok(num_cpus::get())
    }
}

pub fn resolve_log_level(value: Option<String>) -> Result<LevelFilter, MatchError> {
    return match value {
        Some(level) => match LevelFilter::from_str(&level) {
            Ok(level_filter) => Ok(level_filter),
            Err(_) => Err(MatchError::InvalidArgument(format!("unknown log level '{}'", level)))
        },
        None => Ok(DEFAULT_LOG_LEVEL)
    }
}
