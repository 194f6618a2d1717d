use std::fs::{File, OpenOptions};
use std::io::prelude::*;
use std::io::LineWriter;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

use crate::proteomic::error::MatchError;

/// `log` backend: every line goes to stderr and, if a path is given, is appended to the log file.
pub struct SimpleLogger {
    level: LevelFilter,
    log_file_path: Option<String>,
    log_file: Option<Mutex<LineWriter<File>>>
}

impl SimpleLogger {
    pub fn new(level: LevelFilter, log_file_path: Option<&str>) -> Result<SimpleLogger, MatchError> {
        let log_file = match log_file_path {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Some(Mutex::new(LineWriter::new(file)))
            },
            None => None
        };
        return Ok(SimpleLogger {
            level: level,
            log_file_path: log_file_path.map(|path| path.to_owned()),
            log_file: log_file
        });
    }

    /// Installs the logger process wide, can only be done once.
    pub fn init(self) -> Result<(), MatchError> {
        let level = self.get_level();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        return Ok(());
    }

    pub fn get_level(&self) -> LevelFilter {
        return self.level;
    }

    pub fn format_line(record: &Record) -> String {
        return format!("{} {} [{}] {}\n", time::now().rfc3339(), record.level(), record.target(), record.args());
    }
}

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        return metadata.level() <= self.level;
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = SimpleLogger::format_line(record);
        eprint!("{}", line);
        if let Some(ref log_file) = self.log_file {
            match log_file.lock() {
                Ok(mut log_file) => match log_file.write_all(line.as_bytes()) {
                    Ok(_) => (),
                    Err(err) => eprintln!("SimpleLogger [{}] ERROR: {:?}", self.log_file_path.as_ref().map_or("", |path| path.as_str()), err)
                },
                Err(_) => eprintln!("SimpleLogger: tried to lock a poisoned mutex for 'log_file'")
            }
        }
    }

    fn flush(&self) {
        if let Some(ref log_file) = self.log_file {
            if let Ok(mut log_file) = log_file.lock() {
                if let Err(err) = log_file.flush() {
                    eprintln!("SimpleLogger [{}] ERROR: {:?}", self.log_file_path.as_ref().map_or("", |path| path.as_str()), err);
                }
            }
        }
    }
}
