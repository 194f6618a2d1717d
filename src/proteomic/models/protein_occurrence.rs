/*
 * position of a peptide in a protein, 1-based and inclusive
 */
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinOccurrence {
    peptide: String,
    start: usize,
    end: usize,
    context: String
}

impl ProteinOccurrence {
    pub fn new(peptide: &str, start: usize, end: usize, context: &str) -> ProteinOccurrence {
        return ProteinOccurrence {
            peptide: peptide.to_owned(),
            start: start,
            end: end,
            context: context.to_owned()
        }
    }

    pub fn get_peptide(&self) -> &str {
        return self.peptide.as_str();
    }

    pub fn get_start(&self) -> usize {
        return self.start;
    }

    pub fn get_end(&self) -> usize {
        return self.end;
    }

    pub fn get_context(&self) -> &str {
        return self.context.as_str();
    }
}

/// All occurrences of one peptide, empty if the protein does not contain it.
#[derive(Debug, Clone, PartialEq)]
pub struct PeptideLocalization {
    peptide: String,
    occurrences: Vec<ProteinOccurrence>
}

impl PeptideLocalization {
    pub fn new(peptide: &str, occurrences: Vec<ProteinOccurrence>) -> PeptideLocalization {
        return PeptideLocalization {
            peptide: peptide.to_owned(),
            occurrences: occurrences
        }
    }

    pub fn get_peptide(&self) -> &str {
        return self.peptide.as_str();
    }

    pub fn get_occurrences(&self) -> &Vec<ProteinOccurrence> {
        return &self.occurrences;
    }

    pub fn is_found(&self) -> bool {
        return !self.occurrences.is_empty();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProteinLocalization {
    /// protein was empty after normalization, nothing was searched
    NoProteinSupplied,
    Located(Vec<PeptideLocalization>)
}

impl ProteinLocalization {
    pub fn is_protein_supplied(&self) -> bool {
        return match self {
            ProteinLocalization::NoProteinSupplied => false,
            ProteinLocalization::Located(_) => true
        }
    }

    /// Occurrences of all peptides, in peptide order.
    pub fn occurrences(&self) -> Vec<&ProteinOccurrence> {
        return match self {
            ProteinLocalization::NoProteinSupplied => Vec::new(),
            ProteinLocalization::Located(localizations) => localizations.iter()
                .flat_map(|localization| localization.get_occurrences().iter())
                .collect()
        }
    }
}
