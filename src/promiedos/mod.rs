pub(crate) mod aggregate;
pub(crate) mod fields;

pub use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use chrono::NaiveDate;
use itertools::Itertools;
use tracing::{debug, warn};

use crate::error::{PromiedosError, Result};
use crate::model::{ResultsTable, TournamentTable};
use crate::table::build_table;

use self::aggregate::{aggregate, BlockFields};

/// Class present on every team block once the results page has rendered.
pub const TEAM_BLOCK_MARKER: &str = "team_block__BYWWw";

const TOURNAMENT_BLOCK_SELECTOR: &str = "div.match-info_itemevent__jJv13";

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| PromiedosError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PromiedosError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| PromiedosError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })?;

    if !body.contains(TEAM_BLOCK_MARKER) {
        warn!(url, "page has no team blocks, it may not be rendered");
    }

    Ok(Html::parse_document(&body))
}

/// Extract trimmed text content from the first element matching `selector`
/// inside `element`. Returns `None` if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(|e| element_text(&e))
}

/// All text below `element`, concatenated, with each whitespace run
/// collapsed to one space and the ends trimmed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().split_whitespace().join(" ")
}

/// Parse a rendered results page into the flat table for `day`.
pub fn parse_results(html: &str, day: NaiveDate) -> ResultsTable {
    let document = Html::parse_document(html);
    let tournaments = parse_tournaments(&document, day);
    build_table(&tournaments)
}

/// Run every tournament block of `document` through extraction and
/// aggregation. A block that fails is logged and skipped.
pub fn parse_tournaments(document: &Html, day: NaiveDate) -> Vec<TournamentTable> {
    let selector = match Selector::parse(TOURNAMENT_BLOCK_SELECTOR) {
        Ok(selector) => selector,
        Err(e) => {
            warn!(error = %e, "invalid tournament block selector");
            return vec![];
        }
    };

    let mut tournaments = vec![];
    for (position, block) in document.select(&selector).enumerate() {
        match parse_tournament(&block, day) {
            Ok(table) => {
                debug!(
                    tournament = %table.tournament,
                    matches = table.matches.len(),
                    "parsed tournament block"
                );
                tournaments.push(table);
            }
            Err(e) => warn!(position, error = %e, "skipping unparsable tournament block"),
        }
    }
    debug!(count = tournaments.len(), %day, "parsed results page");
    tournaments
}

fn parse_tournament(block: &ElementRef, day: NaiveDate) -> Result<TournamentTable> {
    let fields = BlockFields::extract(block)?;
    aggregate(fields, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 5).unwrap()
    }

    const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<div class="match-info_itemevent__jJv13">
  <div class="event-header"><a class="event-header_left__q8kgh" href="/league/liga">Liga Profesional</a></div>
  <div class="match">
    <div class="team_block__BYWWw team_left__S_a4n"><img/><span>River Plate</span></div>
    <div class="result_block__8wTEO">
      <span class="scores_scoreseventresult__X_Y_1">2</span>
      <span class="scores_scoreseventresult__X_Y_1">1</span>
    </div>
    <div class="team_block__BYWWw team_right__ePX7C"><span>Boca Juniors</span></div>
    <div class="time_status___8fRm">Finalizado</div>
    <div class="red_gol__kGbip mr-75"></div>
    <div class="red_gol__kGbip ml-75"><span class="red_ball__NEoJ3 red_visible__8MS3_"></span></div>
    <div class="gols_itemLeft__qNNDP">
      <span class="gols_block__uW5yg"><p>Borja;</p><span class="green">12'</span></span>
      <span class="gols_block__uW5yg"><p>Colidio;</p><span class="green">80'</span></span>
    </div>
    <div class="gols_itemRight__VSB2J">
      <span class="gols_block__uW5yg"><p>Cavani;</p><span class="green">45'</span></span>
    </div>
  </div>
  <div class="match">
    <div class="team_block__BYWWw team_left__S_a4n"><span>Racing</span></div>
    <div class="result_block__8wTEO">
      <span class="scores_scoreseventresult__X_Y_1">0</span>
      <span class="scores_scoreseventresult__X_Y_1">0</span>
    </div>
    <div class="team_block__BYWWw team_right__ePX7C"><span>Independiente</span></div>
    <div class="time_status___8fRm">Finalizado</div>
    <div class="gols_itemLeft__qNNDP"></div>
    <div class="gols_itemRight__VSB2J"></div>
  </div>
</div>
<div class="match-info_itemevent__jJv13">
  <div class="event-header"><span>header without a tournament link</span></div>
  <div class="team_block__BYWWw team_left__S_a4n"><span>Lost</span></div>
  <div class="team_block__BYWWw team_right__ePX7C"><span>Block</span></div>
  <div class="time_status___8fRm">Finalizado</div>
</div>
<div class="match-info_itemevent__jJv13">
  <div class="event-header"><a class="event-header_left__q8kgh">Copa Argentina</a></div>
  <div class="match">
    <div class="team_block__BYWWw team_left__S_a4n"><span>Talleres</span></div>
    <div class="result_block__8wTEO">
      <span class="scores_scoreseventresult__X_Y_1">1</span>
      <span class="scores_scoreseventresult__X_Y_1">1</span>
      <span class="penalties_score__rF_Gk">4</span>
      <span class="penalties_score__rF_Gk">3</span>
    </div>
    <div class="team_block__BYWWw team_right__ePX7C"><span>Belgrano</span></div>
    <div class="time_status___8fRm">Final</div>
  </div>
</div>
</body></html>"#;

    #[test]
    fn test_parse_tournaments_skips_broken_block() {
        let document = Html::parse_document(PAGE);
        let tournaments = parse_tournaments(&document, day());

        let names: Vec<_> = tournaments.iter().map(|t| t.tournament.as_str()).collect();
        assert_eq!(names, vec!["Liga Profesional", "Copa Argentina"]);
        assert!(tournaments.iter().all(|t| t.day == day()));
    }

    #[test]
    fn test_parse_results_end_to_end() {
        let table = parse_results(PAGE, day());
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.rows.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );

        let first = &table.rows[0].record;
        assert_eq!(first.local_team, "River Plate");
        assert_eq!(first.visitor_team, "Boca Juniors");
        assert_eq!(first.local_score.as_deref(), Some("2"));
        assert_eq!(first.visitor_score.as_deref(), Some("1"));
        assert_eq!(first.local_scorers, vec!["Borja", "Colidio"]);
        assert_eq!(first.local_scorers_minutes, vec!["12", "80"]);
        assert_eq!(first.visitor_scorers, vec!["Cavani"]);
        assert_eq!(first.visitor_scorers_minutes, vec!["45"]);
        assert_eq!(first.local_red_cards, 0);
        assert_eq!(first.visitor_red_cards, 1);
        assert_eq!(first.end_match_status, "Finalizado");

        let second = &table.rows[1].record;
        assert_eq!(second.local_score.as_deref(), Some("0"));
        assert_eq!(second.visitor_score.as_deref(), Some("0"));
        assert!(second.local_scorers.is_empty());
        assert!(second.visitor_scorers_minutes.is_empty());
        assert_eq!(second.local_red_cards, 0);
        assert_eq!(second.visitor_red_cards, 0);

        let cup = &table.rows[2].record;
        assert_eq!(cup.tournament, "Copa Argentina");
        assert_eq!(cup.local_score.as_deref(), Some("1 4"));
        assert_eq!(cup.visitor_score.as_deref(), Some("1 3"));
        assert_eq!(cup.end_match_status, "Final");
    }

    #[test]
    fn test_parse_results_empty_page() {
        let table = parse_results("<html><body><p>sin partidos</p></body></html>", day());
        assert!(table.is_empty());
    }

    #[test]
    fn test_element_text_trims_and_joins() {
        let fragment = Html::parse_fragment("<div> <b>Entretiempo</b>\n\t</div>");
        let selector = Selector::parse("div").unwrap();
        let root = fragment.root_element();
        assert_eq!(select_text(&root, &selector).as_deref(), Some("Entretiempo"));
    }

    #[test]
    fn test_element_text_keeps_inner_word_breaks() {
        let fragment =
            Html::parse_fragment("<div>Final\n Pen.</div><p>Fin\tal</p><span>Entre  tiempo</span>");
        let root = fragment.root_element();
        let text = |css: &str| select_text(&root, &Selector::parse(css).unwrap());
        assert_eq!(text("div").as_deref(), Some("Final Pen."));
        assert_eq!(text("p").as_deref(), Some("Fin al"));
        assert_eq!(text("span").as_deref(), Some("Entre tiempo"));
    }
}
