use serde::Serialize;

use super::MatchRecord;

/// One row of the flat results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRow {
    /// Continuous row number, starting at zero.
    pub index: usize,
    #[serde(flatten)]
    pub record: MatchRecord,
}

/// The flat, ordered table handed to persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultsTable {
    pub rows: Vec<MatchRow>,
}

impl ResultsTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
