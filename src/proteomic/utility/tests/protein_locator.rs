use crate::proteomic::models::protein_occurrence::ProteinLocalization;
use crate::proteomic::utility::protein_locator::{context, locate, locate_all, locate_occurrences};

const PROTEIN: &str = "ACDEFGHIKLMNPQRSTVWY";

#[test]
fn test_overlapping_occurrences() {
    assert_eq!(locate("AA", "AAAA"), vec![(1, 2), (2, 3), (3, 4)]);
    assert_eq!(locate("ABA", "ABABA"), vec![(1, 3), (3, 5)]);
}

#[test]
fn test_absent_peptide() {
    assert!(locate("XYZ", "AAAA").is_empty());
    assert!(locate("AAAAA", "AAAA").is_empty());
}

#[test]
fn test_empty_inputs() {
    assert!(locate("", "AAAA").is_empty());
    assert!(locate("AA", "").is_empty());
}

#[test]
fn test_context_clipped_at_start() {
    let occurrences = locate_occurrences("MK", "MKTLL");
    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].get_start(), 1);
    assert_eq!(occurrences[0].get_end(), 2);
    assert_eq!(occurrences[0].get_context(), "[MK]TLL");
}

#[test]
fn test_context_five_residues_each_side() {
    assert_eq!(locate("KLM", PROTEIN), vec![(9, 11)]);
    assert_eq!(context(PROTEIN, 9, 11), "EFGHI[KLM]NPQRS");
}

#[test]
fn test_context_clipped_at_end() {
    assert_eq!(locate("VWY", PROTEIN), vec![(18, 20)]);
    assert_eq!(context(PROTEIN, 18, 20), "PQRST[VWY]");
}

#[test]
fn test_locate_all_without_protein() {
    assert_eq!(locate_all(&["MK"], "123 --"), ProteinLocalization::NoProteinSupplied);
    assert_eq!(locate_all(&["MK"], ""), ProteinLocalization::NoProteinSupplied);
}

#[test]
fn test_locate_all() {
    let localization = locate_all(&["mk", "123", "WW", "L"], "mk tll");
    assert!(localization.is_protein_supplied());
    match localization {
        ProteinLocalization::Located(ref localizations) => {
            let peptides: Vec<&str> = localizations.iter().map(|localization| localization.get_peptide()).collect();
            assert_eq!(peptides, vec!["MK", "WW", "L"]);
            assert!(localizations[0].is_found());
            assert!(!localizations[1].is_found());
            assert_eq!(localizations[2].get_occurrences().len(), 2);
        },
        ProteinLocalization::NoProteinSupplied => panic!("protein was supplied")
    }
    let contexts: Vec<&str> = localization.occurrences().iter().map(|occurrence| occurrence.get_context()).collect();
    assert_eq!(contexts, vec!["[MK]TLL", "MKT[L]L", "MKTL[L]"]);
}
