mod protein_locator;
mod config;

use crate::proteomic::models::database::{Database, SourceTable};
use crate::proteomic::models::peptide_record::PeptideRecord;

// two tables, GPV is in both
pub fn ace_database() -> Database {
    let ace = SourceTable::new("ace.csv", vec![
        PeptideRecord::new("GPV", "PL-0001", 3, "ACE inhibitory", "ace.csv"),
        PeptideRecord::new("VPP", "PL-0002", 3, "ACE inhibitory", "ace.csv")
    ]);
    let antioxidant = SourceTable::new("antioxidant.csv", vec![
        PeptideRecord::new("GPV", "PL-0100", 3, "antioxidant", "antioxidant.csv"),
        PeptideRecord::new("LKPNM", "PL-0200", 5, "antioxidant", "antioxidant.csv")
    ]);
    return Database::load(vec![ace, antioxidant]).unwrap();
}
