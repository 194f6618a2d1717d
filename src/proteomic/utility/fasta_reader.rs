use std::fs;
use std::path::Path;

use log::warn;

use crate::proteomic::error::MatchError;
use crate::proteomic::models::protein::Protein;

/// Parses FASTA text. Sequence lines before the first header form a protein without header,
/// so a plain sequence is accepted as well.
pub fn parse_fasta(text: &str) -> Result<Vec<Protein>, MatchError> {
    let mut proteins: Vec<Protein> = Vec::new();
    // (header, aa_sequence) of the entry being read
    let mut current: Option<(String, String)> = None;
    for line in text.lines() {
        // trim
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('>') {
            if let Some((header, aa_sequence)) = current.take() {
                proteins.push(Protein::new(&header, &aa_sequence)?);
            }
            current = Some((line.to_owned(), String::new()));
        } else {
            if current.is_none() {
                current = Some((String::new(), String::new()));
            }
            if let Some((_, ref mut aa_sequence)) = current {
                aa_sequence.push_str(line);
            }
        }
    }
    // process last protein
    if let Some((header, aa_sequence)) = current {
        proteins.push(Protein::new(&header, &aa_sequence)?);
    }
    return Ok(proteins);
}

/// First protein of a FASTA file, `None` if the file has no entry.
pub fn read_protein(path: &Path) -> Result<Option<Protein>, MatchError> {
    let text = fs::read_to_string(path)?;
    let mut proteins = parse_fasta(&text)?;
    if proteins.is_empty() {
        return Ok(None);
    }
    let protein_count = proteins.len();
    let protein = proteins.remove(0);
    if protein_count > 1 {
        warn!("'{}' contains {} proteins, only the first one is used: {}", path.display(), protein_count, protein.get_header());
    }
    return Ok(Some(protein));
}
