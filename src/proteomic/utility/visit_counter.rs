use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

use crate::proteomic::error::MatchError;

/// Counts tool runs across sessions.
///
/// The count is read once with `load` at session start and only written back by `persist`,
/// nothing is shared through global state.
#[derive(Debug)]
pub struct VisitCounter {
    file_path: PathBuf,
    count: u64
}

impl VisitCounter {
    /// A missing file starts the count at zero.
    pub fn load(file_path: &Path) -> Result<VisitCounter, MatchError> {
        let count: u64 = match fs::read_to_string(file_path) {
            Ok(content) => match content.trim().parse::<u64>() {
                Ok(count) => count,
                Err(_) => {
                    warn!("visit file '{}' does not contain a number, restarting at 0", file_path.display());
                    0
                }
            },
            Err(ref err) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => return Err(MatchError::Io(err))
        };
        return Ok(VisitCounter {
            file_path: file_path.to_owned(),
            count: count
        });
    }

    pub fn record_visit(&mut self) -> u64 {
        self.count += 1;
        return self.count;
    }

    pub fn get_count(&self) -> u64 {
        return self.count;
    }

    pub fn persist(&self) -> Result<(), MatchError> {
        fs::write(&self.file_path, format!("{}\n", self.count))?;
        return Ok(());
    }
}
