use log::debug;

use crate::proteomic::models::database::Database;
use crate::proteomic::models::match_mode::MatchMode;
use crate::proteomic::models::match_result::MatchResult;
use crate::proteomic::models::peptide_record::PeptideRecord;

/// Returns the records matching `query` in database storage order.
///
/// * `Exact`: record sequence equals the query
/// * `Fragment`: record sequence is a contiguous substring of the query (not the other way round)
///
/// An empty query never matches.
pub fn find_matches<'a>(query: &str, database: &'a Database, mode: MatchMode) -> Vec<&'a PeptideRecord> {
    if query.is_empty() {
        return Vec::new();
    }
    return match mode {
        MatchMode::Exact => database.positions_of(query).iter()
            .filter_map(|position| database.get(*position))
            .collect(),
        MatchMode::Fragment => database.get_records().iter()
            .filter(|record| !record.get_sequence().is_empty() && query.contains(record.get_sequence()))
            .collect()
    }
}

pub fn match_query<'a>(query: &str, database: &'a Database, mode: MatchMode) -> MatchResult<'a> {
    let result = MatchResult::new(query, find_matches(query, database, mode), mode);
    if result.has_matches() {
        debug!("{} ({}): {}", query, mode, result.origins());
    }
    return result;
}
