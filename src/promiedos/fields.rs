//! Field extractors for a single tournament block.
//!
//! Every extractor reads one field for all fixtures of a block, in document
//! order. An element that is missing from the markup is left out of the
//! returned list; extractors never insert placeholders.

use ::scraper::{ElementRef, Selector};
use itertools::Itertools;

use crate::error::{PromiedosError, Result};
use crate::model::Side;
use crate::promiedos::{element_text, select_text};

const TOURNAMENT_NAME_SELECTOR: &str = "a.event-header_left__q8kgh";
const SCORE_SELECTOR: &str = "span.scores_scoreseventresult__X_Y_1";
const PENALTY_SELECTOR: &str = "span.penalties_score__rF_Gk";
const RESULT_BLOCK_SELECTOR: &str = "div.result_block__8wTEO";
const GOAL_SELECTOR: &str = "span.gols_block__uW5yg";
const SCORER_NAME_SELECTOR: &str = "p";
const SCORER_MINUTE_SELECTOR: &str = "span.green";
const RED_CARD_SELECTOR: &str = "span.red_ball__NEoJ3.red_visible__8MS3_";
const STATUS_SELECTOR: &str = "div.time_status___8fRm";

fn team_block_selector(side: Side) -> &'static str {
    match side {
        Side::Local => "div.team_block__BYWWw.team_left__S_a4n",
        Side::Visitor => "div.team_block__BYWWw.team_right__ePX7C",
    }
}

fn goals_selector(side: Side) -> &'static str {
    match side {
        Side::Local => "div.gols_itemLeft__qNNDP",
        Side::Visitor => "div.gols_itemRight__VSB2J",
    }
}

fn red_cards_selector(side: Side) -> &'static str {
    match side {
        Side::Local => "div.red_gol__kGbip.mr-75",
        Side::Visitor => "div.red_gol__kGbip.ml-75",
    }
}

/// Per-fixture goal data (scorer names or minutes) for one side of a block.
///
/// A block in which no fixture has any goal for this side is stored as an
/// empty outer list, never as a list of empty lists. Lookups past the end
/// yield an empty slice, so both shapes read the same to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct GoalLists(Vec<Vec<String>>);

impl GoalLists {
    pub(crate) fn new(per_match: Vec<Vec<String>>) -> Self {
        if per_match.iter().all(Vec::is_empty) {
            Self::default()
        } else {
            Self(per_match)
        }
    }

    /// Goal entries of the fixture at `position`.
    pub(crate) fn get(&self, position: usize) -> &[String] {
        self.0.get(position).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Scoreboard numbers of a block, split by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Scoreboard {
    pub(crate) local: Vec<String>,
    pub(crate) visitor: Vec<String>,
}

impl Scoreboard {
    pub(crate) fn side(&self, side: Side) -> &[String] {
        match side {
            Side::Local => &self.local,
            Side::Visitor => &self.visitor,
        }
    }
}

pub(crate) fn tournament_name(block: &ElementRef) -> Result<String> {
    let selector = Selector::parse(TOURNAMENT_NAME_SELECTOR)?;
    select_text(block, &selector).ok_or(PromiedosError::ElementNotFound {
        context: "tournament name (a.event-header_left__q8kgh)",
    })
}

/// One team name per fixture for `side`.
pub(crate) fn team_names(block: &ElementRef, side: Side) -> Result<Vec<String>> {
    let team_selector = Selector::parse(team_block_selector(side))?;
    let name_selector = Selector::parse("span")?;
    Ok(block
        .select(&team_selector)
        .filter_map(|team| select_text(&team, &name_selector))
        .collect_vec())
}

/// Scoreboard numbers for the whole block.
///
/// The page renders scores as one flat run alternating local and visitor.
/// When the first result block of the tournament shows a penalty shootout,
/// the first penalty value is appended to every local score and the second
/// to every visitor score.
pub(crate) fn scores(block: &ElementRef) -> Result<Scoreboard> {
    let score_selector = Selector::parse(SCORE_SELECTOR)?;
    let numbers = block
        .select(&score_selector)
        .map(|e| element_text(&e))
        .collect_vec();
    if numbers.is_empty() {
        return Ok(Scoreboard::default());
    }

    let mut scoreboard = Scoreboard::default();
    for pair in numbers.chunks(2) {
        scoreboard.local.push(pair[0].clone());
        if let Some(visitor) = pair.get(1) {
            scoreboard.visitor.push(visitor.clone());
        }
    }

    if let Some((local_penalty, visitor_penalty)) = penalties(block)? {
        append_penalty(&mut scoreboard.local, &local_penalty);
        append_penalty(&mut scoreboard.visitor, &visitor_penalty);
    }
    Ok(scoreboard)
}

fn penalties(block: &ElementRef) -> Result<Option<(String, String)>> {
    let result_selector = Selector::parse(RESULT_BLOCK_SELECTOR)?;
    let penalty_selector = Selector::parse(PENALTY_SELECTOR)?;
    let Some(result_block) = block.select(&result_selector).next() else {
        return Ok(None);
    };
    if result_block.select(&penalty_selector).next().is_none() {
        return Ok(None);
    }

    let mut values = block.select(&penalty_selector).map(|e| element_text(&e));
    let local = values.next();
    let visitor = values.next();
    match (local, visitor) {
        (Some(local), Some(visitor)) => Ok(Some((local, visitor))),
        _ => Err(PromiedosError::ElementNotFound {
            context: "visitor penalty score (span.penalties_score__rF_Gk)",
        }),
    }
}

fn append_penalty(scores: &mut [String], penalty: &str) {
    for score in scores.iter_mut() {
        score.push(' ');
        score.push_str(penalty);
    }
}

/// Scorer names per fixture for `side`, with `;` separators stripped.
pub(crate) fn scorers(block: &ElementRef, side: Side) -> Result<GoalLists> {
    let name_selector = Selector::parse(SCORER_NAME_SELECTOR)?;
    goal_entries(block, side, |goal| {
        select_text(goal, &name_selector).map(|name| name.replace(';', "").trim().to_string())
    })
}

/// Scorer minutes per fixture for `side`, with the `'` suffix stripped.
///
/// A goal without a highlighted minute is skipped, so the minute list of a
/// fixture may be shorter than its scorer list.
pub(crate) fn scorer_minutes(block: &ElementRef, side: Side) -> Result<GoalLists> {
    let minute_selector = Selector::parse(SCORER_MINUTE_SELECTOR)?;
    goal_entries(block, side, |goal| {
        select_text(goal, &minute_selector)
            .map(|minute| minute.replace('\'', "").trim().to_string())
            .filter(|minute| !minute.is_empty())
    })
}

fn goal_entries<F>(block: &ElementRef, side: Side, entry: F) -> Result<GoalLists>
where
    F: Fn(&ElementRef) -> Option<String>,
{
    let goals_selector = Selector::parse(goals_selector(side))?;
    let goal_selector = Selector::parse(GOAL_SELECTOR)?;
    let per_match = block
        .select(&goals_selector)
        .map(|goals| goals.select(&goal_selector).filter_map(|g| entry(&g)).collect_vec())
        .collect_vec();
    Ok(GoalLists::new(per_match))
}

/// Visible red cards per rendered red-card container for `side`.
///
/// Fixtures without a container contribute nothing, so the list can be
/// shorter than the number of fixtures.
pub(crate) fn red_cards(block: &ElementRef, side: Side) -> Result<Vec<u32>> {
    let container_selector = Selector::parse(red_cards_selector(side))?;
    let card_selector = Selector::parse(RED_CARD_SELECTOR)?;
    Ok(block
        .select(&container_selector)
        .map(|container| container.select(&card_selector).count() as u32)
        .collect_vec())
}

/// Status text per fixture, verbatim apart from surrounding whitespace.
pub(crate) fn statuses(block: &ElementRef) -> Result<Vec<String>> {
    let selector = Selector::parse(STATUS_SELECTOR)?;
    Ok(block.select(&selector).map(|e| element_text(&e)).collect_vec())
}
