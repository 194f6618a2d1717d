pub mod matching;
pub mod localization;
#[cfg(test)]
mod tests;

use clap::{App, AppSettings, Arg, SubCommand};
use log::warn;

use crate::proteomic::models::query_peptide::QueryBatch;

pub fn build_cli<'a, 'b>() -> App<'a, 'b> {
    return App::new("peptide_finder")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds peptides in a database of functional peptides and locates them in a protein")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("LOG_LEVEL")
            .long("log-level")
            .takes_value(true)
            .help("error, warn, info, debug or trace (env: PEPTIDE_FINDER_LOG_LEVEL)"))
        .arg(Arg::with_name("LOG_FILE")
            .long("log-file")
            .takes_value(true)
            .help("Appends log messages to this file (env: PEPTIDE_FINDER_LOG_FILE)"))
        .arg(Arg::with_name("VISIT_FILE")
            .long("visit-file")
            .takes_value(true)
            .help("Counts runs in this file (env: PEPTIDE_FINDER_VISIT_FILE)"))
        .subcommand(SubCommand::with_name("match")
            .about("Matches query peptides against the peptide database")
            .arg(Arg::with_name("QUERY_FILE")
                .short("q")
                .long("queries")
                .takes_value(true)
                .required(true)
                .help("CSV file with a 'Peptide' column or a plain list of peptides"))
            .arg(Arg::with_name("DATABASE_DIR")
                .short("d")
                .long("database")
                .takes_value(true)
                .help("Directory with the database CSV tables (env: PEPTIDE_DATABASE_DIR, default: ./database)"))
            .arg(Arg::with_name("MATCH_MODE")
                .short("m")
                .long("mode")
                .takes_value(true)
                .possible_values(&["exact", "fragment"])
                .default_value("exact")
                .help("exact: query equals database peptide, fragment: database peptide is part of the query"))
            .arg(protein_file_arg())
            .arg(protein_sequence_arg())
            .arg(Arg::with_name("OUTPUT_FILE")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("CSV file for the match table (default: stdout)"))
            .arg(Arg::with_name("LOCATIONS_OUTPUT_FILE")
                .long("locations-output")
                .takes_value(true)
                .help("CSV file for the protein positions (default: stdout)"))
            .arg(Arg::with_name("THREAD_COUNT")
                .short("t")
                .long("threads")
                .takes_value(true)
                .help("Number of matching threads (env: PEPTIDE_FINDER_THREADS, default: number of CPUs)"))
            .arg(Arg::with_name("ABSENT_MARKER")
                .long("absent-marker")
                .takes_value(true)
                .default_value("N/A")
                .help("Written to the fields of queries without match")))
        .subcommand(SubCommand::with_name("locate")
            .about("Locates peptides in a protein")
            .arg(Arg::with_name("PEPTIDE_FILE")
                .short("q")
                .long("peptides")
                .takes_value(true)
                .required(true)
                .help("CSV file with a 'Peptide' column or a plain list of peptides"))
            .arg(protein_file_arg())
            .arg(protein_sequence_arg())
            .arg(Arg::with_name("OUTPUT_FILE")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("CSV file for the protein positions (default: stdout)")));
}

fn protein_file_arg<'a, 'b>() -> Arg<'a, 'b> {
    return Arg::with_name("PROTEIN_FILE")
        .short("p")
        .long("protein")
        .takes_value(true)
        .conflicts_with("PROTEIN_SEQUENCE")
        .help("FASTA file with the protein, only the first entry is used");
}

fn protein_sequence_arg<'a, 'b>() -> Arg<'a, 'b> {
    return Arg::with_name("PROTEIN_SEQUENCE")
        .long("protein-sequence")
        .takes_value(true)
        .help("Protein sequence, anything but amino acid letters is ignored");
}

fn report_rejected(batch: &QueryBatch) {
    for rejected in batch.get_rejected() {
        warn!("row {}: '{}' contains no amino acid, skipped", rejected.get_row(), rejected.get_raw());
    }
}
