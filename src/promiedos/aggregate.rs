use ::scraper::ElementRef;
use chrono::NaiveDate;
use itertools::izip;
use tracing::debug;

use crate::error::{PromiedosError, Result};
use crate::model::{MatchRecord, Side, TournamentTable};
use crate::promiedos::fields::{self, GoalLists, Scoreboard};

/// Everything extracted for one side of a tournament block.
///
/// Only `teams` has one entry per fixture. The other lists are rendered
/// only when applicable and are matched to fixtures by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SideFields {
    pub(crate) teams: Vec<String>,
    pub(crate) scores: Vec<String>,
    pub(crate) scorers: GoalLists,
    pub(crate) scorers_minutes: GoalLists,
    pub(crate) red_cards: Vec<u32>,
}

impl SideFields {
    fn extract(block: &ElementRef, side: Side, scoreboard: &Scoreboard) -> Result<Self> {
        let extracted = Self {
            teams: fields::team_names(block, side)?,
            scores: scoreboard.side(side).to_vec(),
            scorers: fields::scorers(block, side)?,
            scorers_minutes: fields::scorer_minutes(block, side)?,
            red_cards: fields::red_cards(block, side)?,
        };
        debug!(
            %side,
            teams = extracted.teams.len(),
            scores = extracted.scores.len(),
            goals = !extracted.scorers.is_empty(),
            red_cards = extracted.red_cards.len(),
            "extracted side fields"
        );
        Ok(extracted)
    }

    fn red_cards_at(&self, position: usize) -> u32 {
        self.red_cards.get(position).copied().unwrap_or(0)
    }
}

/// Raw extractor output for one tournament block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BlockFields {
    pub(crate) tournament: String,
    pub(crate) local: SideFields,
    pub(crate) visitor: SideFields,
    pub(crate) statuses: Vec<String>,
}

impl BlockFields {
    pub(crate) fn extract(block: &ElementRef) -> Result<Self> {
        let tournament = fields::tournament_name(block)?;
        let scoreboard = fields::scores(block)?;
        Ok(Self {
            tournament,
            local: SideFields::extract(block, Side::Local, &scoreboard)?,
            visitor: SideFields::extract(block, Side::Visitor, &scoreboard)?,
            statuses: fields::statuses(block)?,
        })
    }

    /// Number of fixtures in the block, taken from the team lists.
    fn match_count(&self) -> Result<usize> {
        let count = self.local.teams.len();
        if self.visitor.teams.len() != count || self.statuses.len() != count {
            return Err(PromiedosError::BlockShape {
                tournament: self.tournament.clone(),
                local_teams: count,
                visitor_teams: self.visitor.teams.len(),
                statuses: self.statuses.len(),
            });
        }
        Ok(count)
    }

    /// The score pair at `position`, or `None` for both sides when either
    /// side has no scoreboard entry there.
    fn scores_at(&self, position: usize) -> (Option<String>, Option<String>) {
        match (
            self.local.scores.get(position),
            self.visitor.scores.get(position),
        ) {
            (Some(local), Some(visitor)) => (Some(local.clone()), Some(visitor.clone())),
            _ => (None, None),
        }
    }
}

/// Fold one block's extractor output into a record per fixture.
///
/// Missing scores stay `None`, missing goal lists become empty and missing
/// red-card counts become zero.
pub(crate) fn aggregate(fields: BlockFields, day: NaiveDate) -> Result<TournamentTable> {
    let count = fields.match_count()?;
    if fields.local.scores.len() > count || fields.visitor.scores.len() > count {
        debug!(
            tournament = %fields.tournament,
            count,
            local_scores = fields.local.scores.len(),
            visitor_scores = fields.visitor.scores.len(),
            "more scores than fixtures in block"
        );
    }

    let matches = izip!(&fields.local.teams, &fields.visitor.teams, &fields.statuses)
        .enumerate()
        .map(|(i, (local_team, visitor_team, status))| {
            let (local_score, visitor_score) = fields.scores_at(i);
            MatchRecord {
                tournament: fields.tournament.clone(),
                local_team: local_team.clone(),
                visitor_team: visitor_team.clone(),
                local_score,
                visitor_score,
                local_scorers: fields.local.scorers.get(i).to_vec(),
                visitor_scorers: fields.visitor.scorers.get(i).to_vec(),
                local_scorers_minutes: fields.local.scorers_minutes.get(i).to_vec(),
                visitor_scorers_minutes: fields.visitor.scorers_minutes.get(i).to_vec(),
                local_red_cards: fields.local.red_cards_at(i),
                visitor_red_cards: fields.visitor.red_cards_at(i),
                end_match_status: status.clone(),
                day,
            }
        })
        .collect();

    Ok(TournamentTable {
        tournament: fields.tournament.clone(),
        day,
        matches,
    })
}
