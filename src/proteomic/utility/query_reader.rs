use std::fs::File;
use std::io;
use std::path::Path;

use log::debug;

use crate::proteomic::error::MatchError;
use crate::proteomic::utility::amino_acid;

pub const PEPTIDE_COLUMN: &str = "Peptide";

pub fn read_queries(path: &Path) -> Result<Vec<String>, MatchError> {
    let name = match path.file_name() {
        Some(file_name) => file_name.to_string_lossy().into_owned(),
        None => path.display().to_string()
    };
    let file = File::open(path)?;
    return read_queries_from_reader(&name, file);
}

/// Raw query strings in file order.
///
/// Uses the `Peptide` column (header compared case-insensitively) if the first row contains it.
/// A file without that header is only read as a header-less list when its first cell is an
/// upper-case amino acid sequence, any other first row is an unknown header and fails with
/// `MissingColumn`. Blank cells are skipped.
pub fn read_queries_from_reader<R: io::Read>(name: &str, reader: R) -> Result<Vec<String>, MatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for row in csv_reader.records() {
        rows.push(row?);
    }
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let (column, skip) = match rows[0].iter().position(|header| header.trim().eq_ignore_ascii_case(PEPTIDE_COLUMN)) {
        Some(column) => (column, 1),
        None => {
            let first_cell = rows[0].get(0).unwrap_or("").trim();
            if !is_plain_sequence(first_cell) {
                return Err(MatchError::MissingColumn { table: name.to_owned(), column: PEPTIDE_COLUMN.to_owned() });
            }
            debug!("{}: no '{}' header, reading the first column of every row", name, PEPTIDE_COLUMN);
            (0, 0)
        }
    };
    let queries: Vec<String> = rows.iter()
        .skip(skip)
        .filter_map(|row| row.get(column))
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.to_owned())
        .collect();
    return Ok(queries);
}

// header names like 'peptide' or 'Sequence' consist of amino acid letters too, so only
// upper-case sequences are taken as data
fn is_plain_sequence(cell: &str) -> bool {
    return !cell.is_empty() && cell.chars().all(|character| character.is_ascii_uppercase() && amino_acid::is_standard(character));
}
