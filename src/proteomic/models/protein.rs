use crate::proteomic::error::MatchError;
use crate::proteomic::utility::normalizer;

// UniProt accession, see https://www.uniprot.org/help/accession_numbers
const ACCESSION_PATTERN: &str = r"[OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9]([A-Z][A-Z0-9]{2}[0-9]){1,2}";

/// Protein in which peptides are located. The residues are stored normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Protein {
    header: String,
    accession: String,
    aa_sequence: String
}

impl Protein {
    pub fn new(header: &str, raw_sequence: &str) -> Result<Protein, MatchError> {
        return Ok(Protein {
            header: header.trim().to_owned(),
            accession: Protein::extract_accession_from_header(header)?,
            aa_sequence: normalizer::normalize(raw_sequence)
        });
    }

    /// Protein without FASTA header, e.g. pasted on the command line.
    pub fn from_sequence(raw_sequence: &str) -> Protein {
        return Protein {
            header: String::new(),
            accession: String::new(),
            aa_sequence: normalizer::normalize(raw_sequence)
        }
    }

    /// Returns an empty string if the header contains no accession.
    pub fn extract_accession_from_header(header: &str) -> Result<String, MatchError> {
        let accession_regex = onig::Regex::new(ACCESSION_PATTERN)?;
        return match accession_regex.find(header) {
            Some((beg, end)) => Ok(header[beg..end].to_owned()),
            None => Ok(String::new())
        }
    }

    pub fn get_header(&self) -> &str {
        return self.header.as_str();
    }

    pub fn get_accession(&self) -> &str {
        return self.accession.as_str();
    }

    pub fn get_aa_sequence(&self) -> &str {
        return self.aa_sequence.as_str();
    }

    pub fn is_empty(&self) -> bool {
        return self.aa_sequence.is_empty();
    }

    pub fn to_string(&self) -> String {
        if self.accession.is_empty() {
            return format!("unnamed protein\n\tlen => {}", self.aa_sequence.len());
        }
        return format!("{}\n\tlen => {}", self.accession, self.aa_sequence.len());
    }
}
