use std::fs::File;

use chrono::NaiveDate;
use promiedos_scraper::{parse_results, OutputFormat, RunConfig};

const PAGE: &str = r#"<html><body>
<div class="match-info_itemevent__jJv13">
  <a class="event-header_left__q8kgh">Premier League</a>
  <div class="team_block__BYWWw team_left__S_a4n"><span>Arsenal</span></div>
  <div class="result_block__8wTEO">
    <span class="scores_scoreseventresult__X_Y_1">3</span>
    <span class="scores_scoreseventresult__X_Y_1">0</span>
  </div>
  <div class="team_block__BYWWw team_right__ePX7C"><span>Chelsea</span></div>
  <div class="time_status___8fRm">Finalizado</div>
  <div class="gols_itemLeft__qNNDP">
    <span class="gols_block__uW5yg"><p>Saka;</p><span class="green">7'</span></span>
    <span class="gols_block__uW5yg"><p>Saka;</p><span class="green">33'</span></span>
    <span class="gols_block__uW5yg"><p>Havertz;</p></span>
  </div>
  <div class="team_block__BYWWw team_left__S_a4n"><span>Liverpool</span></div>
  <div class="team_block__BYWWw team_right__ePX7C"><span>Everton</span></div>
  <div class="time_status___8fRm">Postergado</div>
</div>
</body></html>"#;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 5).unwrap()
}

#[test]
fn csv_export_round_trips_through_a_reader() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        day: day(),
        output_dir: dir.path().to_path_buf(),
        format: OutputFormat::Csv,
        ..Default::default()
    };

    let table = parse_results(PAGE, config.day);
    let path = config.output_path();
    table.write(File::create(&path).unwrap(), config.format).unwrap();
    assert!(path.ends_with("matches_2024-10-05.csv"));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 14);
    assert_eq!(&headers[13], "day");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);

    assert_eq!(&rows[0][2], "Arsenal");
    assert_eq!(&rows[0][4], "3");
    assert_eq!(&rows[0][6], r#"["Saka","Saka","Havertz"]"#);
    // Havertz has no minute on the page, so only two minutes come through.
    assert_eq!(&rows[0][8], r#"["7","33"]"#);

    assert_eq!(&rows[1][0], "1");
    assert_eq!(&rows[1][2], "Liverpool");
    assert_eq!(&rows[1][4], "");
    assert_eq!(&rows[1][5], "");
    assert_eq!(&rows[1][6], "[]");
    assert_eq!(&rows[1][10], "0");
    assert_eq!(&rows[1][12], "Postergado");
    assert_eq!(&rows[1][13], "05-10-2024");
}

#[test]
fn json_export_writes_one_object_per_match() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        day: day(),
        output_dir: dir.path().to_path_buf(),
        format: OutputFormat::Json,
        ..Default::default()
    };

    let table = parse_results(PAGE, config.day);
    let path = config.output_path();
    table.write(File::create(&path).unwrap(), config.format).unwrap();

    let value: serde_json::Value =
        serde_json::from_reader(File::open(&path).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["visitor_team"], "Chelsea");
    assert!(rows[1]["local_score"].is_null());
    assert_eq!(rows[1]["visitor_red_cards"], 0);
}
