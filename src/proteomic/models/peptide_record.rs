/*
 * one row of the functional peptide database
 */
#[derive(Debug, Clone, PartialEq)]
pub struct PeptideRecord {
    sequence: String,
    id: String,         // 'PepLab ID' column
    length: usize,      // taken as stored, see database_loader
    activity: String,
    source: String      // name of the table the record was read from
}

impl PeptideRecord {
    pub fn new(sequence: &str, id: &str, length: usize, activity: &str, source: &str) -> PeptideRecord {
        return PeptideRecord {
            sequence: sequence.to_owned(),
            id: id.to_owned(),
            length: length,
            activity: activity.to_owned(),
            source: source.to_owned()
        }
    }

    pub fn get_sequence(&self) -> &str {
        return self.sequence.as_str();
    }

    pub fn get_id(&self) -> &str {
        return self.id.as_str();
    }

    pub fn get_length(&self) -> usize {
        return self.length;
    }

    pub fn get_activity(&self) -> &str {
        return self.activity.as_str();
    }

    pub fn get_source(&self) -> &str {
        return self.source.as_str();
    }
}
