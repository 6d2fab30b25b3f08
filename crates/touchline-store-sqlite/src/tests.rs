//! Integration tests for `SqliteStore` against an in-memory database.

use touchline_core::{
  matches::NewMatch,
  player::NewPlayer,
  store::StatStore,
  team::NewTeam,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory().await.expect("in-memory store")
}

fn player(fbref_id: &str, name: &str) -> NewPlayer {
  NewPlayer {
    fbref_id:     Some(fbref_id.into()),
    name:         name.into(),
    position:     "MF".into(),
    age:          Some(24),
    team:         Some("Arsenal".into()),
    league:       Some("9".into()),
    minutes:      Some(1234),
    games_played: Some(14),
    ..Default::default()
  }
}

fn team(fbref_id: &str, name: &str) -> NewTeam {
  NewTeam {
    fbref_id: Some(fbref_id.into()),
    name:     name.into(),
    league:   Some("9".into()),
    ..Default::default()
  }
}

// ─── Players ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_players() {
  let s = store().await;

  let count = s
    .add_players(vec![player("aaa", "One"), player("bbb", "Two")])
    .await
    .unwrap();
  assert_eq!(count, 2);

  let players = s.list_players().await.unwrap();
  assert_eq!(players.len(), 2);
  assert_eq!(players[0].fbref_id, "aaa");
  assert_eq!(players[0].minutes, 1234);
  assert_eq!(players[0].games_played, 14);
}

#[tokio::test]
async fn missing_fbref_id_defaults_to_name_slug() {
  let s = store().await;

  let mut p = player("x", "Declan Rice");
  p.fbref_id = None;
  s.add_players(vec![p]).await.unwrap();

  let fetched = s.get_player("player_declan_rice").await.unwrap();
  assert!(fetched.is_some());
}

#[tokio::test]
async fn missing_overall_defaults_to_seventy() {
  let s = store().await;
  s.add_players(vec![player("aaa", "One")]).await.unwrap();

  let fetched = s.get_player("aaa").await.unwrap().unwrap();
  assert_eq!(fetched.overall, 70);
}

#[tokio::test]
async fn get_player_missing_returns_none() {
  let s = store().await;
  assert!(s.get_player("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_id_across_batches_is_rejected() {
  let s = store().await;
  s.add_players(vec![player("aaa", "One")]).await.unwrap();

  let err = s.add_players(vec![player("aaa", "One again")]).await.unwrap_err();
  assert!(matches!(err, Error::DuplicatePlayer(ref id) if id == "aaa"));

  // The first insert is untouched.
  assert_eq!(s.list_players().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_id_within_a_batch_stores_nothing() {
  let s = store().await;

  let err = s
    .add_players(vec![player("aaa", "One"), player("bbb", "Two"), player("aaa", "Dup")])
    .await
    .unwrap_err();
  assert!(matches!(err, Error::DuplicatePlayer(ref id) if id == "aaa"));

  // Atomic batch: the earlier valid records are rolled back too.
  assert!(s.list_players().await.unwrap().is_empty());
}

#[tokio::test]
async fn failing_batch_does_not_disturb_existing_rows() {
  let s = store().await;
  s.add_players(vec![player("aaa", "One")]).await.unwrap();

  let err = s
    .add_players(vec![player("bbb", "Two"), player("aaa", "Dup")])
    .await
    .unwrap_err();
  assert!(matches!(err, Error::DuplicatePlayer(_)));

  let players = s.list_players().await.unwrap();
  assert_eq!(players.len(), 1);
  assert_eq!(players[0].fbref_id, "aaa");
}

// ─── Teams ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_teams() {
  let s = store().await;

  let count = s
    .add_teams(vec![team("18bb7c10", "Arsenal"), team("b8fd03ef", "Manchester City")])
    .await
    .unwrap();
  assert_eq!(count, 2);

  let teams = s.list_teams().await.unwrap();
  assert_eq!(teams.len(), 2);
  assert_eq!(teams[0].name, "Arsenal");
}

#[tokio::test]
async fn duplicate_team_id_is_rejected() {
  let s = store().await;
  s.add_teams(vec![team("18bb7c10", "Arsenal")]).await.unwrap();

  let err = s.add_teams(vec![team("18bb7c10", "Arsenal")]).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateTeam(_)));
}

#[tokio::test]
async fn get_team_by_fbref_id() {
  let s = store().await;
  s.add_teams(vec![team("18bb7c10", "Arsenal")]).await.unwrap();

  let fetched = s.get_team("18bb7c10").await.unwrap().unwrap();
  assert_eq!(fetched.name, "Arsenal");
  assert!(s.get_team("missing").await.unwrap().is_none());
}

// ─── Matches ─────────────────────────────────────────────────────────────────

fn unplayed_match(home: i64, away: i64) -> NewMatch {
  NewMatch {
    date:          None,
    season:        Some("2023-2024".into()),
    home_team_id:  home,
    away_team_id:  away,
    home_score:    None,
    away_score:    None,
    home_xg:       None,
    away_xg:       None,
    prob_home_win: 0.45,
    prob_draw:     0.30,
    prob_away_win: 0.25,
  }
}

#[tokio::test]
async fn record_and_list_matches() {
  let s = store().await;
  s.add_teams(vec![team("h", "Home"), team("a", "Away")]).await.unwrap();
  let teams = s.list_teams().await.unwrap();

  let recorded = s.record_match(unplayed_match(teams[0].id, teams[1].id)).await.unwrap();
  assert!(recorded.id > 0);

  let matches = s.list_matches().await.unwrap();
  assert_eq!(matches.len(), 1);
  assert_eq!(matches[0].prob_home_win, 0.45);
  assert_eq!(matches[0].home_score, None);
  assert_eq!(matches[0].prediction_correct(), None);
}

#[tokio::test]
async fn played_match_roundtrips_scores_and_accuracy() {
  let s = store().await;
  s.add_teams(vec![team("h", "Home"), team("a", "Away")]).await.unwrap();
  let teams = s.list_teams().await.unwrap();

  let mut input = unplayed_match(teams[0].id, teams[1].id);
  input.home_score = Some(2);
  input.away_score = Some(0);
  s.record_match(input).await.unwrap();

  let matches = s.list_matches().await.unwrap();
  assert_eq!(matches[0].prediction_correct(), Some(true));
}
