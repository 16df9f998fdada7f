use std::io::Write;

use chrono::NaiveDate;
use itertools::Itertools;
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::{MatchRow, ResultsTable, TournamentTable};

/// Column order of the exported table.
pub const COLUMNS: [&str; 14] = [
    "index",
    "tournament",
    "local_team",
    "visitor_team",
    "local_score",
    "visitor_score",
    "local_scorers",
    "visitor_scorers",
    "local_scorers_minutes",
    "visitor_scorers_minutes",
    "local_red_cards",
    "visitor_red_cards",
    "end_match",
    "day",
];

/// Date format of the `day` column in CSV output.
pub const DAY_FORMAT: &str = "%d-%m-%Y";

/// Flatten per-tournament records into one table, tournament by tournament,
/// numbering rows continuously from zero.
pub fn build_table(tournaments: &[TournamentTable]) -> ResultsTable {
    let rows = tournaments
        .iter()
        .flat_map(|t| t.matches.iter().cloned())
        .enumerate()
        .map(|(index, record)| MatchRow { index, record })
        .collect_vec();
    ResultsTable { rows }
}

impl ResultsTable {
    /// The day shared by the rows, if the table has any.
    pub fn day(&self) -> Option<NaiveDate> {
        self.rows.first().map(|row| row.record.day)
    }

    /// Name of the dated output file, e.g. `matches_2024-10-05.csv`.
    pub fn file_name(day: NaiveDate, format: OutputFormat) -> String {
        format!("matches_{}.{}", day.format("%Y-%m-%d"), format.extension())
    }

    pub fn write(&self, writer: impl Write, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Csv => self.write_csv(writer),
            OutputFormat::Json => self.write_json(writer),
        }
    }

    /// Write the table as CSV. Goal lists are JSON arrays inside one cell and
    /// a missing score is an empty cell.
    pub fn write_csv(&self, writer: impl Write) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(COLUMNS)?;
        for row in &self.rows {
            let r = &row.record;
            csv.write_record([
                row.index.to_string(),
                r.tournament.clone(),
                r.local_team.clone(),
                r.visitor_team.clone(),
                r.local_score.clone().unwrap_or_default(),
                r.visitor_score.clone().unwrap_or_default(),
                serde_json::to_string(&r.local_scorers)?,
                serde_json::to_string(&r.visitor_scorers)?,
                serde_json::to_string(&r.local_scorers_minutes)?,
                serde_json::to_string(&r.visitor_scorers_minutes)?,
                r.local_red_cards.to_string(),
                r.visitor_red_cards.to_string(),
                r.end_match_status.clone(),
                r.day.format(DAY_FORMAT).to_string(),
            ])?;
        }
        csv.flush()?;
        debug!(rows = self.rows.len(), "wrote csv table");
        Ok(())
    }

    pub fn write_json(&self, writer: impl Write) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        debug!(rows = self.rows.len(), "wrote json table");
        Ok(())
    }
}
