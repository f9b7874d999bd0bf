use chrono::{TimeZone, Utc};

use premierleague_lambda_rust::error::LeagueError;
use premierleague_lambda_rust::leaders::Players;
use premierleague_lambda_rust::model::fixture::Fixture;
use premierleague_lambda_rust::model::player::{ElementType, Player};
use premierleague_lambda_rust::model::team::Team;
use premierleague_lambda_rust::prediction::Prediction;
use premierleague_lambda_rust::standings::League;

fn player(id: u32, name: &str, position: ElementType, goals: u32, assists: u32, clean_sheets: u32) -> Player {
    let (first, second) = name.split_once(' ').unwrap();
    Player {
        id,
        first_name: first.to_string(),
        second_name: second.to_string(),
        goals_scored: goals,
        assists,
        clean_sheets,
        element_type: position,
    }
}

fn result(id: u32, home: u32, home_score: u32, away: u32, away_score: u32) -> Fixture {
    Fixture {
        id,
        team_h: home,
        team_h_score: Some(home_score),
        team_a: away,
        team_a_score: Some(away_score),
        minutes: 90,
        kickoff_time: Some(Utc.with_ymd_and_hms(2026, 9, 1, 19, 45, 0).unwrap()),
        finished: true,
    }
}

// Final order: 5, 7, 3, 9.
fn league() -> League {
    let teams = vec![
        Team::new(3, "Chelsea", "CHE"),
        Team::new(5, "Everton", "EVE"),
        Team::new(7, "Liverpool", "LIV"),
        Team::new(9, "Wolves", "WOL"),
    ];
    let fixtures = vec![result(1, 5, 3, 7, 0), result(2, 7, 3, 3, 1), result(3, 3, 1, 9, 0)];
    let players = Players::new(vec![
        player(10, "Dominic Calvert-Lewin", ElementType::Attacker, 9, 2, 0),
        player(11, "Mohamed Salah", ElementType::Midfielder, 9, 7, 0),
        player(12, "Cole Palmer", ElementType::Midfielder, 4, 7, 0),
        player(13, "Jordan Pickford", ElementType::Keeper, 0, 0, 6),
        player(14, "Jose Sa", ElementType::Keeper, 0, 0, 2),
    ]);
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    League::new(teams, fixtures, players, now).expect("league should aggregate")
}

fn team(league: &League, id: u32) -> Team {
    league.team_with_id(id).cloned().expect("team should exist")
}

fn pick(league: &League, id: u32) -> Player {
    league.players().with_id(id).cloned().expect("player should exist")
}

#[test]
fn counts_teams_in_matching_positions() {
    let league = league();
    let order: Vec<u32> = league.table().iter().map(|t| t.id).collect();
    assert_eq!(order, vec![5, 7, 3, 9]);

    // Positions 1 and 2 swapped.
    let table = vec![team(&league, 5), team(&league, 3), team(&league, 7), team(&league, 9)];
    let prediction = Prediction::new(table, pick(&league, 10), pick(&league, 12), pick(&league, 14)).unwrap();

    let report = prediction.score(&league);

    assert!(matches!(report.teams_in_correct_position, Ok(2)), "report was: {:?}", report);
}

#[test]
fn identity_not_stats_decides_a_match() {
    let league = league();
    // Fresh snapshots carry zeroed stats but the same ids.
    let table = vec![
        Team::new(5, "Everton", "EVE"),
        Team::new(7, "Liverpool", "LIV"),
        Team::new(3, "Chelsea", "CHE"),
        Team::new(9, "Wolves", "WOL"),
    ];
    let prediction = Prediction::new(table, pick(&league, 10), pick(&league, 11), pick(&league, 13)).unwrap();

    let report = prediction.score(&league);

    assert!(matches!(report.teams_in_correct_position, Ok(4)), "report was: {:?}", report);
    assert!(matches!(report.is_top_scorer_correct, Ok(true)));
    assert!(matches!(report.is_top_assister_correct, Ok(true)));
    assert!(matches!(report.is_top_keeper_correct, Ok(true)));
}

#[test]
fn any_joint_leader_counts_and_others_do_not() {
    let league = league();
    let table = league.table().into_iter().cloned().collect::<Vec<_>>();

    let joint = Prediction::new(table.clone(), pick(&league, 11), pick(&league, 12), pick(&league, 14)).unwrap();
    assert!(joint.is_top_scorer_correct(&league).unwrap());
    assert!(joint.is_top_assister_correct(&league).unwrap());
    assert!(!joint.is_top_keeper_correct(&league).unwrap());

    let wrong = Prediction::new(table, pick(&league, 12), pick(&league, 10), pick(&league, 13)).unwrap();
    assert!(!wrong.is_top_scorer_correct(&league).unwrap());
    assert!(!wrong.is_top_assister_correct(&league).unwrap());
    assert!(wrong.is_top_keeper_correct(&league).unwrap());
}

#[test]
fn duplicate_team_is_rejected() {
    let league = league();
    let table = vec![team(&league, 5), team(&league, 7), team(&league, 5), team(&league, 9)];

    let err = Prediction::new(table, pick(&league, 10), pick(&league, 11), pick(&league, 13)).unwrap_err();

    assert!(matches!(err, LeagueError::DuplicateTeam { team_id: 5 }), "error was: {}", err);
}

#[test]
fn unknown_predicted_team_spoils_only_the_table_fact() {
    let league = league();
    let mut table: Vec<Team> = league.table().into_iter().cloned().collect();
    table[3] = Team::new(20, "Sunderland", "SUN");
    let prediction = Prediction::new(table, pick(&league, 10), pick(&league, 11), pick(&league, 13)).unwrap();

    let report = prediction.score(&league);

    assert!(matches!(report.teams_in_correct_position, Err(LeagueError::UnknownPredictedTeam { team_id: 20 })));
    assert!(matches!(report.is_top_scorer_correct, Ok(true)));
    assert!(matches!(report.is_top_assister_correct, Ok(true)));
    assert!(matches!(report.is_top_keeper_correct, Ok(true)));
}

#[test]
fn unknown_keeper_pick_leaves_other_facts_reported() {
    let league = league();
    let table: Vec<Team> = league.table().into_iter().cloned().collect();
    let stranger = player(99, "Nick Pope", ElementType::Keeper, 0, 0, 20);
    let prediction = Prediction::new(table, pick(&league, 10), pick(&league, 11), stranger).unwrap();

    let report = prediction.score(&league);

    assert!(matches!(report.teams_in_correct_position, Ok(4)), "report was: {:?}", report);
    assert!(matches!(report.is_top_scorer_correct, Ok(true)));
    assert!(matches!(report.is_top_assister_correct, Ok(true)));
    assert!(matches!(report.is_top_keeper_correct, Err(LeagueError::UnknownPredictedPlayer { player_id: 99 })));
}
