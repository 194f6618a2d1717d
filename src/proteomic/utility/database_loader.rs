use std::fs;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::proteomic::error::MatchError;
use crate::proteomic::models::database::{Database, SourceTable};
use crate::proteomic::models::peptide_record::PeptideRecord;

pub const SEQUENCE_COLUMN: &str = "sequence";
pub const ID_COLUMN: &str = "PepLab ID";
pub const LENGTH_COLUMN: &str = "length";
pub const ACTIVITY_COLUMN: &str = "activity";

/// Reads every `*.csv` table in `directory` (ordered by file name) into one database.
pub fn load_directory(directory: &Path) -> Result<Database, MatchError> {
    let table_paths = find_tables(directory)?;
    if table_paths.is_empty() {
        return Err(MatchError::DatabaseUnavailable(format!("no CSV table found in '{}'", directory.display())));
    }
    let mut tables: Vec<SourceTable> = Vec::with_capacity(table_paths.len());
    for path in table_paths.iter() {
        let table = read_table(path)?;
        debug!("read {} peptides from '{}'", table.len(), path.display());
        tables.push(table);
    }
    let database = Database::load(tables)?;
    info!("loaded {} peptides from {} tables in '{}'", database.len(), database.get_source_count(), directory.display());
    return Ok(database);
}

pub fn find_tables(directory: &Path) -> Result<Vec<PathBuf>, MatchError> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) => return Err(MatchError::DatabaseUnavailable(format!("cannot read database directory '{}': {}", directory.display(), err)))
    };
    let mut table_paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_csv = match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) => extension.eq_ignore_ascii_case("csv"),
            None => false
        };
        if is_csv && path.is_file() {
            table_paths.push(path);
        }
    }
    table_paths.sort();
    return Ok(table_paths);
}

pub fn read_table(path: &Path) -> Result<SourceTable, MatchError> {
    let name = match path.file_name() {
        Some(file_name) => file_name.to_string_lossy().into_owned(),
        None => path.display().to_string()
    };
    let file = File::open(path)?;
    return read_table_from_reader(&name, file);
}

/// Header names are trimmed, cells are taken as they are apart from surrounding whitespace.
pub fn read_table_from_reader<R: io::Read>(name: &str, reader: R) -> Result<SourceTable, MatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let sequence_idx = column_index(&headers, name, SEQUENCE_COLUMN)?;
    let id_idx = column_index(&headers, name, ID_COLUMN)?;
    let length_idx = column_index(&headers, name, LENGTH_COLUMN)?;
    let activity_idx = column_index(&headers, name, ACTIVITY_COLUMN)?;

    let mut records: Vec<PeptideRecord> = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row?;
        // header is line 1
        let line = idx + 2;
        let sequence = field(&row, sequence_idx);
        if sequence.is_empty() {
            warn!("{}:{}: row without sequence skipped", name, line);
            continue;
        }
        let length = parse_length(field(&row, length_idx), sequence, name, line);
        records.push(PeptideRecord::new(sequence, field(&row, id_idx), length, field(&row, activity_idx), name));
    }
    return Ok(SourceTable::new(name, records));
}

fn column_index(headers: &csv::StringRecord, table: &str, column: &str) -> Result<usize, MatchError> {
    return match headers.iter().position(|header| header == column) {
        Some(idx) => Ok(idx),
        None => Err(MatchError::MissingColumn { table: table.to_owned(), column: column.to_owned() })
    }
}

fn field<'a>(row: &'a csv::StringRecord, idx: usize) -> &'a str {
    return row.get(idx).unwrap_or("").trim();
}

// the stored length is trusted, the sequence length is only used if there is no usable value
fn parse_length(raw: &str, sequence: &str, table: &str, line: usize) -> usize {
    let stored: Option<usize> = match raw.parse::<usize>() {
        Ok(length) => Some(length),
        // spreadsheet exports sometimes write integers as "12.0"
        Err(_) => match raw.parse::<f64>() {
            Ok(length) if length >= 0.0 && length.fract() == 0.0 => Some(length as usize),
            _ => None
        }
    };
    let sequence_length = sequence.chars().count();
    return match stored {
        Some(length) => {
            if length != sequence_length {
                warn!("{}:{}: stored length {} differs from length {} of '{}', keeping stored value", table, line, length, sequence_length, sequence);
            }
            length
        },
        None => {
            warn!("{}:{}: cannot read length '{}', using sequence length {}", table, line, raw, sequence_length);
            sequence_length
        }
    }
}
