//! [`SqliteStore`] — the SQLite implementation of [`StatStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use touchline_core::{
  matches::{Match, NewMatch},
  player::{NewPlayer, Player},
  store::StatStore,
  team::{NewTeam, Team},
};

use crate::{
  Error, Result,
  encode::{MATCH_COLUMNS, PLAYER_COLUMNS, RawMatch, RawPlayer, TEAM_COLUMNS, encode_dt, team_from_row},
  schema::SCHEMA,
};

/// The outcome of a batch insert as reported from inside the connection
/// closure: either the stored count, or the offending record's id plus the
/// underlying failure.
type BatchOutcome = std::result::Result<usize, (String, rusqlite::Error)>;

fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(f, _) if f.code == rusqlite::ErrorCode::ConstraintViolation
  )
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Touchline stat store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── StatStore impl ──────────────────────────────────────────────────────────

impl StatStore for SqliteStore {
  type Error = Error;

  // ── Players ───────────────────────────────────────────────────────────────

  async fn add_players(&self, players: Vec<NewPlayer>) -> Result<usize> {
    let now_str = encode_dt(Utc::now());

    let outcome: BatchOutcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO players (
               fbref_id, name, position, age, nationality, team, league,
               minutes, games_played, starts, goals, assists,
               cards_yellow, cards_red, xg, xa,
               progressive_passes, progressive_carries, tackles, interceptions,
               overall, potential, last_updated
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                       ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23)",
          )?;

          for p in &players {
            let fbref_id = p.fbref_id_or_slug();
            let result = stmt.execute(rusqlite::params![
              fbref_id,
              p.name,
              p.position,
              p.age,
              p.nationality,
              p.team,
              p.league,
              p.minutes.unwrap_or(0),
              p.games_played.unwrap_or(0),
              p.starts,
              p.goals,
              p.assists,
              p.cards_yellow,
              p.cards_red,
              p.xg,
              p.xa,
              p.progressive_passes,
              p.progressive_carries,
              p.tackles,
              p.interceptions,
              p.overall.unwrap_or(70),
              p.potential,
              now_str,
            ]);
            if let Err(e) = result {
              // Dropping the transaction rolls the batch back.
              return Ok(Err((fbref_id, e)));
            }
          }
        }
        tx.commit()?;
        Ok(Ok(players.len()))
      })
      .await?;

    match outcome {
      Ok(count) => Ok(count),
      Err((fbref_id, e)) if is_unique_violation(&e) => Err(Error::DuplicatePlayer(fbref_id)),
      Err((fbref_id, e)) => Err(Error::Ingest { fbref_id, source: e }),
    }
  }

  async fn list_players(&self) -> Result<Vec<Player>> {
    let raws: Vec<RawPlayer> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY id"))?;
        let rows = stmt
          .query_map([], |row| RawPlayer::from_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPlayer::into_player).collect()
  }

  async fn get_player(&self, fbref_id: &str) -> Result<Option<Player>> {
    let id = fbref_id.to_string();

    let raw: Option<RawPlayer> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PLAYER_COLUMNS} FROM players WHERE fbref_id = ?1"),
              rusqlite::params![id],
              |row| RawPlayer::from_row(row),
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPlayer::into_player).transpose()
  }

  // ── Teams ─────────────────────────────────────────────────────────────────

  async fn add_teams(&self, teams: Vec<NewTeam>) -> Result<usize> {
    let outcome: BatchOutcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO teams (
               fbref_id, name, league, country, matches_played, wins, draws,
               losses, goals_for, goals_against, xg, xga, possession
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
          )?;

          for t in &teams {
            let fbref_id = t.fbref_id_or_slug();
            let result = stmt.execute(rusqlite::params![
              fbref_id,
              t.name,
              t.league,
              t.country,
              t.matches_played,
              t.wins,
              t.draws,
              t.losses,
              t.goals_for,
              t.goals_against,
              t.xg,
              t.xga,
              t.possession,
            ]);
            if let Err(e) = result {
              return Ok(Err((fbref_id, e)));
            }
          }
        }
        tx.commit()?;
        Ok(Ok(teams.len()))
      })
      .await?;

    match outcome {
      Ok(count) => Ok(count),
      Err((fbref_id, e)) if is_unique_violation(&e) => Err(Error::DuplicateTeam(fbref_id)),
      Err((fbref_id, e)) => Err(Error::Ingest { fbref_id, source: e }),
    }
  }

  async fn list_teams(&self) -> Result<Vec<Team>> {
    let teams = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT {TEAM_COLUMNS} FROM teams ORDER BY id"))?;
        let rows = stmt
          .query_map([], |row| team_from_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(teams)
  }

  async fn get_team(&self, fbref_id: &str) -> Result<Option<Team>> {
    let id = fbref_id.to_string();

    let team = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {TEAM_COLUMNS} FROM teams WHERE fbref_id = ?1"),
              rusqlite::params![id],
              |row| team_from_row(row),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(team)
  }

  // ── Matches ───────────────────────────────────────────────────────────────

  async fn record_match(&self, input: NewMatch) -> Result<Match> {
    let record   = input.clone();
    let date_str = input.date.map(encode_dt);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO matches (
             date, season, home_team_id, away_team_id, home_score, away_score,
             home_xg, away_xg, prob_home_win, prob_draw, prob_away_win
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
          rusqlite::params![
            date_str,
            input.season,
            input.home_team_id,
            input.away_team_id,
            input.home_score,
            input.away_score,
            input.home_xg,
            input.away_xg,
            input.prob_home_win,
            input.prob_draw,
            input.prob_away_win,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Match {
      id,
      date:          record.date,
      season:        record.season,
      home_team_id:  record.home_team_id,
      away_team_id:  record.away_team_id,
      home_score:    record.home_score,
      away_score:    record.away_score,
      home_xg:       record.home_xg,
      away_xg:       record.away_xg,
      prob_home_win: record.prob_home_win,
      prob_draw:     record.prob_draw,
      prob_away_win: record.prob_away_win,
    })
  }

  async fn list_matches(&self) -> Result<Vec<Match>> {
    let raws: Vec<RawMatch> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT {MATCH_COLUMNS} FROM matches ORDER BY id"))?;
        let rows = stmt
          .query_map([], |row| RawMatch::from_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawMatch::into_match).collect()
  }
}
