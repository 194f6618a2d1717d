use crate::proteomic::models::match_result::{FieldValue, MatchResult, MatchRow};
use crate::proteomic::models::peptide_record::PeptideRecord;

pub const JOIN_SEPARATOR: &str = "; ";

/// Folds all matches of one query into a single row.
pub fn aggregate(match_result: &MatchResult) -> MatchRow {
    return aggregate_records(match_result.get_query(), match_result.get_matches());
}

pub fn aggregate_records(query: &str, matches: &[&PeptideRecord]) -> MatchRow {
    if matches.is_empty() {
        return MatchRow::no_match(query);
    }
    return MatchRow::new(
        query,
        join_field(matches, |record| record.get_sequence().to_owned()),
        join_field(matches, |record| record.get_id().to_owned()),
        join_field(matches, |record| record.get_length().to_string()),
        join_field(matches, |record| record.get_activity().to_owned())
    );
}

fn join_field<F>(matches: &[&PeptideRecord], field: F) -> FieldValue where F: Fn(&PeptideRecord) -> String {
    let values: Vec<String> = matches.iter().map(|record| field(record)).collect();
    return FieldValue::Joined(values.join(JOIN_SEPARATOR));
}
