use chrono::{TimeZone, Utc};

use premierleague_lambda_rust::error::LeagueError;
use premierleague_lambda_rust::fpl::{DEFAULT_BASE_URL, PremierLeagueApi, Snapshot};

fn load_sample() -> Snapshot {
    let bootstrap = std::fs::read_to_string("tests/sample_bootstrap.json").expect("failed to read sample_bootstrap.json");
    let fixtures = std::fs::read_to_string("tests/sample_fixtures.json").expect("failed to read sample_fixtures.json");
    Snapshot::from_json(&bootstrap, &fixtures).expect("from_json failed")
}

#[test]
fn parses_sample_documents() {
    let snapshot = load_sample();

    assert_eq!(snapshot.teams.len(), 4);
    assert_eq!(snapshot.fixtures.len(), 6);
    assert_eq!(snapshot.players.len(), 8);

    let unscheduled = &snapshot.fixtures[5];
    assert_eq!(unscheduled.kickoff_time, None);
    assert_eq!(unscheduled.score(), None);
    assert_eq!(snapshot.fixtures[0].score(), Some((2, 0)));
}

#[test]
fn builds_table_from_sample() {
    // Arrange
    let snapshot = load_sample();
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();

    // Act
    let league = snapshot.into_league(now).expect("league failed");
    let table = league.table();

    // Assert: Liverpool edge Chelsea on goals scored after level points and difference.
    let order: Vec<&str> = table.iter().map(|t| t.short_name.as_str()).collect();
    assert_eq!(order, vec!["LIV", "CHE", "ARS", "BUR"]);
    let liverpool = table[0];
    // The provider's own played/points values are discarded.
    assert_eq!((liverpool.played, liverpool.points), (2, 4));
    assert_eq!((liverpool.goals_for, liverpool.goals_against), (4, 2));
    assert!(table.iter().all(|t| t.played == 2), "table was: {:?}", table);
}

#[test]
fn sample_leaders() {
    let players = load_sample().players;

    assert_eq!(players.top_scorers_board().players, vec!["Mohamed Salah", "Cole Palmer"]);
    assert_eq!(players.top_assisters_board().players, vec!["Mohamed Salah", "Bukayo Saka"]);
    let keepers = players.top_keepers_board();
    assert_eq!(keepers.count, 5);
    assert_eq!(keepers.players, vec!["David Raya", "Robert Sanchez"]);
}

#[test]
fn malformed_documents_report_what_failed() {
    let err = Snapshot::from_json("{\"teams\": []}", "[]").expect_err("elements missing");
    assert!(matches!(err, LeagueError::Decode { what: "bootstrap-static document", .. }), "error was: {}", err);

    let err = Snapshot::from_json("{\"teams\": [], \"elements\": []}", "{}").expect_err("fixtures not a list");
    assert!(err.to_string().starts_with("failed to decode fixtures list"), "error was: {}", err);
}

#[test]
fn client_normalises_base_url() {
    let api = PremierLeagueApi::new("https://example.invalid/api/");
    assert_eq!(api.base_url(), "https://example.invalid/api");
    assert_eq!(PremierLeagueApi::new(DEFAULT_BASE_URL).base_url(), DEFAULT_BASE_URL);
    // Avoid network: don't call fetch_snapshot here
}
