use crate::proteomic::models::query_peptide::{QueryBatch, QueryPeptide, RejectedInput};
use crate::proteomic::utility::amino_acid;

/// Keeps the standard amino acid letters of `raw` (upper-cased) and silently drops everything else.
/// Never fails, an empty result means there was no sequence.
pub fn normalize(raw: &str) -> String {
    return raw.chars()
        .filter_map(amino_acid::get)
        .map(|residue| residue.get_one_letter_code())
        .collect();
}

/// Normalizes a list of raw inputs, keeping their order.
/// Inputs without any amino acid are collected as rejected instead of aborting the batch.
pub fn normalize_all<S: AsRef<str>>(raws: &[S]) -> QueryBatch {
    let mut batch = QueryBatch::new();
    for (idx, raw) in raws.iter().enumerate() {
        let row = idx + 1;
        let sequence = normalize(raw.as_ref());
        if sequence.is_empty() {
            batch.reject(RejectedInput::new(row, raw.as_ref()));
        } else {
            batch.accept(QueryPeptide::new(row, &sequence));
        }
    }
    return batch;
}
