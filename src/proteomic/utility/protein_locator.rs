use crate::proteomic::models::protein_occurrence::{PeptideLocalization, ProteinLocalization, ProteinOccurrence};
use crate::proteomic::utility::normalizer;

/// Residues shown on each side of an occurrence.
pub const CONTEXT_FLANK: usize = 5;

const MATCH_OPEN: &str = "[";
const MATCH_CLOSE: &str = "]";

/// Every occurrence of `peptide` in `protein` as 1-based, inclusive (start, end).
///
/// The next search begins one residue after the start of the previous hit,
/// so overlapping occurrences are reported: "AA" in "AAAA" yields (1, 2), (2, 3), (3, 4).
/// Positions count residues, so both sequences are expected to be normalized.
pub fn locate(peptide: &str, protein: &str) -> Vec<(usize, usize)> {
    let mut positions: Vec<(usize, usize)> = Vec::new();
    let step = match peptide.chars().next() {
        Some(first) => first.len_utf8(),
        None => return positions
    };
    let mut search_from: usize = 0;
    while search_from < protein.len() {
        match protein[search_from..].find(peptide) {
            Some(offset) => {
                let begin = search_from + offset;
                positions.push((begin + 1, begin + peptide.len()));
                search_from = begin + step;
            },
            None => break
        }
    }
    return positions;
}

/// Up to `CONTEXT_FLANK` residues before and after the 1-based span (start, end),
/// clipped at the protein ends, with the span itself in brackets.
pub fn context(protein: &str, start: usize, end: usize) -> String {
    let begin = start.saturating_sub(1);
    let left = begin.saturating_sub(CONTEXT_FLANK);
    let right = protein.len().min(end + CONTEXT_FLANK);
    let before = protein.get(left..begin).unwrap_or("");
    let span = protein.get(begin..end.min(protein.len())).unwrap_or("");
    let after = protein.get(end.min(protein.len())..right).unwrap_or("");
    return format!("{}{}{}{}{}", before, MATCH_OPEN, span, MATCH_CLOSE, after);
}

pub fn locate_occurrences(peptide: &str, protein: &str) -> Vec<ProteinOccurrence> {
    return locate(peptide, protein).into_iter()
        .map(|(start, end)| ProteinOccurrence::new(peptide, start, end, &context(protein, start, end)))
        .collect();
}

/// Locates every peptide in the protein, both are normalized first.
///
/// Returns `NoProteinSupplied` if nothing is left of the protein, so callers can tell
/// a missing protein apart from a peptide which is not part of it.
/// Peptides which are empty after normalization are skipped.
pub fn locate_all<S: AsRef<str>>(peptides: &[S], raw_protein: &str) -> ProteinLocalization {
    let protein = normalizer::normalize(raw_protein);
    if protein.is_empty() {
        return ProteinLocalization::NoProteinSupplied;
    }
    let mut localizations: Vec<PeptideLocalization> = Vec::new();
    for raw_peptide in peptides {
        let peptide = normalizer::normalize(raw_peptide.as_ref());
        if peptide.is_empty() {
            continue;
        }
        let occurrences = locate_occurrences(&peptide, &protein);
        localizations.push(PeptideLocalization::new(&peptide, occurrences));
    }
    return ProteinLocalization::Located(localizations);
}
