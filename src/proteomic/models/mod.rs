pub mod match_mode;
pub mod peptide_record;
pub mod query_peptide;
pub mod database;
pub mod match_result;
pub mod protein;
pub mod protein_occurrence;
