use chrono::NaiveDate;
use serde::Serialize;

/// The normalized result of one fixture.
///
/// `local_scorers[i]` and `local_scorers_minutes[i]` describe the same goal
/// when the page renders a minute for every scorer (likewise for visitor).
/// Scores are `None` when the page shows no scoreboard for the fixture,
/// which is distinct from a `"0"` score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub tournament: String,
    pub local_team: String,
    pub visitor_team: String,
    pub local_score: Option<String>,
    pub visitor_score: Option<String>,
    pub local_scorers: Vec<String>,
    pub visitor_scorers: Vec<String>,
    pub local_scorers_minutes: Vec<String>,
    pub visitor_scorers_minutes: Vec<String>,
    pub local_red_cards: u32,
    pub visitor_red_cards: u32,
    #[serde(rename = "end_match")]
    pub end_match_status: String,
    pub day: NaiveDate,
}

/// All fixtures of one tournament block, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentTable {
    pub tournament: String,
    pub day: NaiveDate,
    pub matches: Vec<MatchRecord>,
}
