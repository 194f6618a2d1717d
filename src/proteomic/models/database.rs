use std::collections::HashMap;

use crate::proteomic::error::MatchError;
use crate::proteomic::models::peptide_record::PeptideRecord;

/// One table of the reference database as handed over by the loader.
#[derive(Debug, Clone)]
pub struct SourceTable {
    name: String,
    records: Vec<PeptideRecord>
}

impl SourceTable {
    pub fn new(name: &str, records: Vec<PeptideRecord>) -> SourceTable {
        return SourceTable {
            name: name.to_owned(),
            records: records
        }
    }

    pub fn get_name(&self) -> &str {
        return self.name.as_str();
    }

    pub fn get_records(&self) -> &Vec<PeptideRecord> {
        return &self.records;
    }

    pub fn len(&self) -> usize {
        return self.records.len();
    }
}

/// Immutable snapshot of all source tables, concatenated in the given order.
/// Duplicates are kept and stored sequences are not normalized.
#[derive(Debug)]
pub struct Database {
    records: Vec<PeptideRecord>,
    // sequence => positions in `records`, ascending
    exact_index: HashMap<String, Vec<usize>>,
    source_count: usize
}

impl Database {
    pub fn load(source_tables: Vec<SourceTable>) -> Result<Database, MatchError> {
        if source_tables.is_empty() {
            return Err(MatchError::DatabaseUnavailable("no source tables given".to_owned()));
        }
        let source_count = source_tables.len();
        let mut records: Vec<PeptideRecord> = Vec::with_capacity(source_tables.iter().map(|table| table.len()).sum());
        for table in source_tables {
            records.extend(table.records);
        }
        let mut exact_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            exact_index.entry(record.get_sequence().to_owned()).or_insert_with(Vec::new).push(position);
        }
        return Ok(Database {
            records: records,
            exact_index: exact_index,
            source_count: source_count
        });
    }

    pub fn get_records(&self) -> &Vec<PeptideRecord> {
        return &self.records;
    }

    pub fn get(&self, position: usize) -> Option<&PeptideRecord> {
        return self.records.get(position);
    }

    /// Positions of all records with exactly this sequence, in storage order.
    pub fn positions_of(&self, sequence: &str) -> &[usize] {
        return match self.exact_index.get(sequence) {
            Some(positions) => positions.as_slice(),
            None => &[]
        }
    }

    pub fn get_source_count(&self) -> usize {
        return self.source_count;
    }

    pub fn len(&self) -> usize {
        return self.records.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.records.is_empty();
    }
}
