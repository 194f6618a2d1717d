use std::fs::File;
use std::io;

use crate::proteomic::error::MatchError;
use crate::proteomic::models::match_result::MatchRow;
use crate::proteomic::models::protein_occurrence::ProteinOccurrence;

pub const DEFAULT_ABSENT_MARKER: &str = "N/A";
pub const MATCH_TABLE_HEADER: [&str; 5] = ["sequence", "matched_sequence", "PepLab ID", "length", "Activity"];
pub const LOCATION_TABLE_HEADER: [&str; 4] = ["Peptide", "Start", "End", "Context"];

/// File at `path` or stdout.
pub fn open_output(path: Option<&str>) -> Result<Box<dyn io::Write>, MatchError> {
    return match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout()))
    }
}

pub fn write_match_rows<W: io::Write>(writer: W, rows: &[MatchRow], absent_marker: &str) -> Result<(), MatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&MATCH_TABLE_HEADER)?;
    for row in rows {
        csv_writer.write_record(&[
            row.get_sequence(),
            row.get_matched_sequence().render(absent_marker),
            row.get_peplab_id().render(absent_marker),
            row.get_length().render(absent_marker),
            row.get_activity().render(absent_marker)
        ])?;
    }
    csv_writer.flush()?;
    return Ok(());
}

pub fn write_occurrences<W: io::Write>(writer: W, occurrences: &[&ProteinOccurrence]) -> Result<(), MatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&LOCATION_TABLE_HEADER)?;
    for occurrence in occurrences {
        csv_writer.write_record(&[
            occurrence.get_peptide().to_owned(),
            occurrence.get_start().to_string(),
            occurrence.get_end().to_string(),
            occurrence.get_context().to_owned()
        ])?;
    }
    csv_writer.flush()?;
    return Ok(());
}
