use std::fs;
use std::sync::Arc;

use crate::proteomic::error::MatchError;
use crate::proteomic::models::database::{Database, SourceTable};
use crate::proteomic::models::match_mode::MatchMode;
use crate::proteomic::models::peptide_record::PeptideRecord;
use crate::proteomic::models::query_peptide::QueryPeptide;
use crate::proteomic::tasks::build_cli;
use crate::proteomic::tasks::localization::ProteinSource;
use crate::proteomic::tasks::matching::{match_batch, match_task, MatchingArguments};

const ACE_TABLE: &str = "sequence,PepLab ID,length,activity\nGPV,PL-0001,3,ACE inhibitory\nVPP,PL-0002,3,ACE inhibitory\n";
const ANTIOXIDANT_TABLE: &str = "sequence ,PepLab ID, length,activity \nLKPNM,PL-0100,5,antioxidant\nGPV,PL-0101,3,antioxidant\n";

fn arguments_from(cli: Vec<&str>) -> Result<MatchingArguments, MatchError> {
    let cli_args = build_cli().get_matches_from_safe(cli).unwrap();
    return MatchingArguments::from_cli_args(cli_args.subcommand_matches("match").unwrap());
}

#[test]
fn test_from_cli_args() {
    let arguments = arguments_from(vec![
        "peptide_finder", "match", "-q", "queries.csv", "-d", "peptides", "-m", "fragment", "-t", "3",
        "--protein-sequence", "MKTLL", "-o", "matches.csv"
    ]).unwrap();
    assert_eq!(arguments.get_query_file(), "queries.csv");
    assert_eq!(arguments.get_database_dir(), "peptides");
    assert_eq!(arguments.get_mode(), MatchMode::Fragment);
    assert_eq!(arguments.get_thread_count(), 3);
    assert_eq!(arguments.get_protein_source(), Some(&ProteinSource::Sequence("MKTLL".to_owned())));
    assert_eq!(arguments.get_output_file(), Some("matches.csv"));
    assert_eq!(arguments.get_locations_output_file(), None);
    assert_eq!(arguments.get_absent_marker(), "N/A");
}

#[test]
fn test_defaults() {
    let arguments = arguments_from(vec!["peptide_finder", "match", "-q", "queries.csv", "-d", "peptides", "-t", "1"]).unwrap();
    assert_eq!(arguments.get_mode(), MatchMode::Exact);
    assert_eq!(arguments.get_protein_source(), None);
    assert_eq!(arguments.get_output_file(), None);
}

#[test]
fn test_invalid_thread_count() {
    match arguments_from(vec!["peptide_finder", "match", "-q", "queries.csv", "-d", "peptides", "-t", "0"]) {
        Err(MatchError::InvalidArgument(_)) => (),
        Err(err) => panic!("expected InvalidArgument, got {:?}", err),
        Ok(_) => panic!("thread count 0 was accepted")
    }
}

#[test]
fn test_match_batch_keeps_query_order() {
    let table = SourceTable::new("ace.csv", vec![
        PeptideRecord::new("GPV", "PL-0001", 3, "ACE inhibitory", "ace.csv"),
        PeptideRecord::new("VPP", "PL-0002", 3, "ACE inhibitory", "ace.csv")
    ]);
    let database = Arc::new(Database::load(vec![table]).unwrap());
    let sequences = vec!["GPV", "WWW", "VPP", "GPV", "IPP"];
    let queries: Vec<QueryPeptide> = (0..200)
        .map(|idx| QueryPeptide::new(idx + 1, sequences[idx % sequences.len()]))
        .collect();
    let sequential = match_batch(&queries, database.clone(), MatchMode::Exact, 1).unwrap();
    let parallel = match_batch(&queries, database.clone(), MatchMode::Exact, 4).unwrap();
    assert_eq!(parallel.len(), 200);
    assert_eq!(sequential, parallel);
    let returned: Vec<&str> = parallel.iter().map(|row| row.get_sequence()).collect();
    let expected: Vec<&str> = queries.iter().map(|query| query.get_sequence()).collect();
    assert_eq!(returned, expected);
    assert!(parallel[0].is_match());
    assert!(!parallel[1].is_match());
}

#[test]
fn test_match_batch_without_queries() {
    let database = Arc::new(Database::load(vec![SourceTable::new("empty.csv", Vec::new())]).unwrap());
    assert!(match_batch(&[], database, MatchMode::Fragment, 4).unwrap().is_empty());
}

#[test]
fn test_match_task() {
    let directory = tempfile::tempdir().unwrap();
    let database_dir = directory.path().join("database");
    fs::create_dir(&database_dir).unwrap();
    fs::write(database_dir.join("ace.csv"), ACE_TABLE).unwrap();
    fs::write(database_dir.join("antioxidant.csv"), ANTIOXIDANT_TABLE).unwrap();
    let query_file = directory.path().join("queries.csv");
    fs::write(&query_file, "Peptide\ngpv\n123\nLKPNMA\nWWW\n").unwrap();
    let output_file = directory.path().join("matches.csv");
    let locations_file = directory.path().join("locations.csv");

    let arguments = arguments_from(vec![
        "peptide_finder", "match",
        "-q", query_file.to_str().unwrap(),
        "-d", database_dir.to_str().unwrap(),
        "-m", "fragment",
        "-t", "2",
        "--protein-sequence", "MGPVLKPNMAGPV",
        "-o", output_file.to_str().unwrap(),
        "--locations-output", locations_file.to_str().unwrap()
    ]).unwrap();
    let summary = match_task(&arguments).unwrap();
    assert_eq!(summary.get_query_count(), 3);
    assert_eq!(summary.get_rejected_count(), 1);
    assert_eq!(summary.get_matched_count(), 2);
    assert_eq!(summary.get_occurrence_count(), Some(3));

    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "sequence,matched_sequence,PepLab ID,length,Activity\n\
         GPV,GPV; GPV,PL-0001; PL-0101,3; 3,ACE inhibitory; antioxidant\n\
         LKPNMA,LKPNM,PL-0100,5,antioxidant\n\
         WWW,N/A,N/A,N/A,N/A\n"
    );
    assert_eq!(
        fs::read_to_string(&locations_file).unwrap(),
        "Peptide,Start,End,Context\n\
         GPV,2,4,M[GPV]LKPNM\n\
         GPV,11,13,KPNMA[GPV]\n\
         LKPNMA,5,10,MGPV[LKPNMA]GPV\n"
    );
}

#[test]
fn test_match_task_without_database() {
    let directory = tempfile::tempdir().unwrap();
    let query_file = directory.path().join("queries.csv");
    fs::write(&query_file, "Peptide\nGPV\n").unwrap();
    let output_file = directory.path().join("matches.csv");
    let arguments = arguments_from(vec![
        "peptide_finder", "match",
        "-q", query_file.to_str().unwrap(),
        "-d", directory.path().join("missing").to_str().unwrap(),
        "-t", "1",
        "-o", output_file.to_str().unwrap()
    ]).unwrap();
    match match_task(&arguments) {
        Err(MatchError::DatabaseUnavailable(_)) => (),
        other => panic!("expected DatabaseUnavailable, got {:?}", other)
    }
    assert!(!output_file.exists());
}
