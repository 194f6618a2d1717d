/// A user submitted sequence after normalization.
/// `row` is the 1-based position in the submitted list, so duplicates stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPeptide {
    row: usize,
    sequence: String
}

impl QueryPeptide {
    pub fn new(row: usize, sequence: &str) -> QueryPeptide {
        return QueryPeptide {
            row: row,
            sequence: sequence.to_owned()
        }
    }

    pub fn get_row(&self) -> usize {
        return self.row;
    }

    pub fn get_sequence(&self) -> &str {
        return self.sequence.as_str();
    }
}

/// Raw input which did not contain a single amino acid letter.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedInput {
    row: usize,
    raw: String
}

impl RejectedInput {
    pub fn new(row: usize, raw: &str) -> RejectedInput {
        return RejectedInput {
            row: row,
            raw: raw.to_owned()
        }
    }

    pub fn get_row(&self) -> usize {
        return self.row;
    }

    pub fn get_raw(&self) -> &str {
        return self.raw.as_str();
    }
}

/// Result of normalizing a list of raw inputs.
#[derive(Debug, Default)]
pub struct QueryBatch {
    accepted: Vec<QueryPeptide>,
    rejected: Vec<RejectedInput>
}

impl QueryBatch {
    pub fn new() -> QueryBatch {
        return QueryBatch::default();
    }

    pub fn accept(&mut self, query: QueryPeptide) {
        self.accepted.push(query);
    }

    pub fn reject(&mut self, input: RejectedInput) {
        self.rejected.push(input);
    }

    pub fn get_accepted(&self) -> &Vec<QueryPeptide> {
        return &self.accepted;
    }

    pub fn get_rejected(&self) -> &Vec<RejectedInput> {
        return &self.rejected;
    }

    pub fn accepted_sequences(&self) -> Vec<String> {
        return self.accepted.iter().map(|query| query.get_sequence().to_owned()).collect();
    }
}
