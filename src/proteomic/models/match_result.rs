use crate::proteomic::models::match_mode::MatchMode;
use crate::proteomic::models::peptide_record::PeptideRecord;

/// All database records found for one query.
#[derive(Debug)]
pub struct MatchResult<'a> {
    query: String,
    matches: Vec<&'a PeptideRecord>,
    mode: MatchMode
}

impl<'a> MatchResult<'a> {
    pub fn new(query: &str, matches: Vec<&'a PeptideRecord>, mode: MatchMode) -> MatchResult<'a> {
        return MatchResult {
            query: query.to_owned(),
            matches: matches,
            mode: mode
        }
    }

    pub fn get_query(&self) -> &str {
        return self.query.as_str();
    }

    pub fn get_matches(&self) -> &Vec<&'a PeptideRecord> {
        return &self.matches;
    }

    pub fn get_mode(&self) -> MatchMode {
        return self.mode;
    }

    pub fn has_matches(&self) -> bool {
        return !self.matches.is_empty();
    }

    /// `PepLab ID (table)` of every match, for diagnostics.
    pub fn origins(&self) -> String {
        return self.matches.iter()
            .map(|record| format!("{} ({})", record.get_id(), record.get_source()))
            .collect::<Vec<String>>()
            .join(", ");
    }
}

/// Cell of an aggregated row.
/// `Absent` means "no match", which is not the same as a matched record with an empty field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Absent,
    Joined(String)
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        return *self == FieldValue::Absent;
    }

    pub fn render<'b>(&'b self, absent_marker: &'b str) -> &'b str {
        return match self {
            FieldValue::Absent => absent_marker,
            FieldValue::Joined(value) => value.as_str()
        }
    }
}

/// One output row per query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    sequence: String,
    matched_sequence: FieldValue,
    peplab_id: FieldValue,
    length: FieldValue,
    activity: FieldValue
}

impl MatchRow {
    pub fn new(sequence: &str, matched_sequence: FieldValue, peplab_id: FieldValue, length: FieldValue, activity: FieldValue) -> MatchRow {
        return MatchRow {
            sequence: sequence.to_owned(),
            matched_sequence: matched_sequence,
            peplab_id: peplab_id,
            length: length,
            activity: activity
        }
    }

    pub fn no_match(sequence: &str) -> MatchRow {
        return MatchRow::new(sequence, FieldValue::Absent, FieldValue::Absent, FieldValue::Absent, FieldValue::Absent);
    }

    pub fn get_sequence(&self) -> &str {
        return self.sequence.as_str();
    }

    pub fn get_matched_sequence(&self) -> &FieldValue {
        return &self.matched_sequence;
    }

    pub fn get_peplab_id(&self) -> &FieldValue {
        return &self.peplab_id;
    }

    pub fn get_length(&self) -> &FieldValue {
        return &self.length;
    }

    pub fn get_activity(&self) -> &FieldValue {
        return &self.activity;
    }

    pub fn is_match(&self) -> bool {
        return !self.matched_sequence.is_absent();
    }
}
