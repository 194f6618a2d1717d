pub mod amino_acid;
pub mod normalizer;
pub mod matcher;
pub mod aggregator;
pub mod protein_locator;
pub mod database_loader;
pub mod query_reader;
pub mod fasta_reader;
pub mod result_writer;
pub mod config;
pub mod logger;
pub mod visit_counter;
#[cfg(test)]
mod tests;
