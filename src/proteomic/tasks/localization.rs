use std::path::Path;

use log::{info, warn};

use crate::proteomic::error::MatchError;
use crate::proteomic::models::protein::Protein;
use crate::proteomic::models::protein_occurrence::ProteinLocalization;
use crate::proteomic::tasks::report_rejected;
use crate::proteomic::utility::{fasta_reader, normalizer, protein_locator, query_reader, result_writer};

#[derive(Debug, Clone, PartialEq)]
pub enum ProteinSource {
    File(String),
    Sequence(String)
}

impl ProteinSource {
    pub fn from_cli_args(cli_args: &clap::ArgMatches) -> Option<ProteinSource> {
        if let Some(protein_file) = cli_args.value_of("PROTEIN_FILE") {
            return Some(ProteinSource::File(protein_file.to_owned()));
        }
        return cli_args.value_of("PROTEIN_SEQUENCE").map(|sequence| ProteinSource::Sequence(sequence.to_owned()));
    }

    /// `None` if the FASTA file has no entry.
    pub fn load(&self) -> Result<Option<Protein>, MatchError> {
        return match self {
            ProteinSource::File(protein_file) => fasta_reader::read_protein(Path::new(protein_file)),
            ProteinSource::Sequence(sequence) => Ok(Some(Protein::from_sequence(sequence)))
        }
    }
}

/// Locates the peptides in the protein, `NoProteinSupplied` if there is none or it is empty.
pub fn localize<S: AsRef<str>>(peptides: &[S], protein: Option<&Protein>) -> ProteinLocalization {
    return match protein {
        Some(protein) => {
            info!("locating {} peptides in {}", peptides.len(), protein.to_string());
            protein_locator::locate_all(peptides, protein.get_aa_sequence())
        },
        None => ProteinLocalization::NoProteinSupplied
    }
}

pub struct LocalizationArguments {
    peptide_file: String,
    protein_source: ProteinSource,
    output_file: Option<String>
}

impl LocalizationArguments {
    pub fn get_peptide_file(&self) -> &str {
        return self.peptide_file.as_str();
    }

    pub fn get_protein_source(&self) -> &ProteinSource {
        return &self.protein_source;
    }

    pub fn get_output_file(&self) -> Option<&str> {
        return self.output_file.as_ref().map(|path| path.as_str());
    }

    pub fn from_cli_args(cli_args: &clap::ArgMatches) -> Result<Self, MatchError> {
        let peptide_file: &str = match cli_args.value_of("PEPTIDE_FILE") {
            Some(file) => file,
            None => return Err(MatchError::InvalidArgument("no peptide file specified".to_owned()))
        };
        let protein_source = match ProteinSource::from_cli_args(cli_args) {
            Some(protein_source) => protein_source,
            None => return Err(MatchError::InvalidArgument("locate needs --protein or --protein-sequence".to_owned()))
        };
        return Ok(Self {
            peptide_file: peptide_file.to_owned(),
            protein_source: protein_source,
            output_file: cli_args.value_of("OUTPUT_FILE").map(|path| path.to_owned())
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalizationSummary {
    peptide_count: usize,
    rejected_count: usize,
    protein_supplied: bool,
    found_count: usize,
    occurrence_count: usize
}

impl LocalizationSummary {
    pub fn get_peptide_count(&self) -> usize {
        return self.peptide_count;
    }

    pub fn get_rejected_count(&self) -> usize {
        return self.rejected_count;
    }

    pub fn is_protein_supplied(&self) -> bool {
        return self.protein_supplied;
    }

    pub fn get_found_count(&self) -> usize {
        return self.found_count;
    }

    pub fn get_occurrence_count(&self) -> usize {
        return self.occurrence_count;
    }

    pub fn to_string(&self) -> String {
        if !self.protein_supplied {
            return format!("{} peptides, {} skipped, no protein sequence supplied", self.peptide_count, self.rejected_count);
        }
        return format!("{} peptides, {} skipped, {} found with {} occurrences", self.peptide_count, self.rejected_count, self.found_count, self.occurrence_count);
    }
}

pub fn locate_task(localization_arguments: &LocalizationArguments) -> Result<LocalizationSummary, MatchError> {
    let start_time: f64 = time::precise_time_s();
    let raw_peptides = query_reader::read_queries(Path::new(localization_arguments.get_peptide_file()))?;
    let batch = normalizer::normalize_all(&raw_peptides);
    report_rejected(&batch);
    let protein = localization_arguments.get_protein_source().load()?;
    let localization = localize(&batch.accepted_sequences(), protein.as_ref());

    let output = result_writer::open_output(localization_arguments.get_output_file())?;
    let occurrences = localization.occurrences();
    result_writer::write_occurrences(output, &occurrences)?;

    let found_count = match localization {
        ProteinLocalization::Located(ref localizations) => localizations.iter().filter(|localization| localization.is_found()).count(),
        ProteinLocalization::NoProteinSupplied => {
            warn!("protein sequence is empty, nothing to locate");
            0
        }
    };
    let summary = LocalizationSummary {
        peptide_count: batch.get_accepted().len(),
        rejected_count: batch.get_rejected().len(),
        protein_supplied: localization.is_protein_supplied(),
        found_count: found_count,
        occurrence_count: occurrences.len()
    };
    info!("localization finished in {:.3} s", time::precise_time_s() - start_time);
    return Ok(summary);
}
