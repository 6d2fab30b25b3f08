//! Decoding helpers between SQLite rows and the domain types.
//!
//! Timestamps are stored as RFC 3339 strings; counting stats as INTEGER
//! columns; advanced metrics as REAL.

use chrono::{DateTime, Utc};
use touchline_core::{matches::Match, player::Player, team::Team};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Players ─────────────────────────────────────────────────────────────────

/// A `players` row as read from SQLite, before date decoding.
pub struct RawPlayer {
  pub id:                  i64,
  pub fbref_id:            String,
  pub name:                String,
  pub position:            String,
  pub age:                 Option<u32>,
  pub nationality:         Option<String>,
  pub team:                Option<String>,
  pub league:              Option<String>,
  pub minutes:             u32,
  pub games_played:        u32,
  pub starts:              Option<u32>,
  pub goals:               Option<u32>,
  pub assists:             Option<u32>,
  pub cards_yellow:        Option<u32>,
  pub cards_red:           Option<u32>,
  pub xg:                  Option<f64>,
  pub xa:                  Option<f64>,
  pub progressive_passes:  Option<u32>,
  pub progressive_carries: Option<u32>,
  pub tackles:             Option<u32>,
  pub interceptions:       Option<u32>,
  pub overall:             u32,
  pub potential:           Option<u32>,
  pub last_updated:        String,
}

/// Column list matching [`RawPlayer::from_row`], for SELECT statements.
pub const PLAYER_COLUMNS: &str = "id, fbref_id, name, position, age, nationality, team, league, \
   minutes, games_played, starts, goals, assists, cards_yellow, cards_red, \
   xg, xa, progressive_passes, progressive_carries, tackles, interceptions, \
   overall, potential, last_updated";

impl RawPlayer {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                  row.get(0)?,
      fbref_id:            row.get(1)?,
      name:                row.get(2)?,
      position:            row.get(3)?,
      age:                 row.get(4)?,
      nationality:         row.get(5)?,
      team:                row.get(6)?,
      league:              row.get(7)?,
      minutes:             row.get(8)?,
      games_played:        row.get(9)?,
      starts:              row.get(10)?,
      goals:               row.get(11)?,
      assists:             row.get(12)?,
      cards_yellow:        row.get(13)?,
      cards_red:           row.get(14)?,
      xg:                  row.get(15)?,
      xa:                  row.get(16)?,
      progressive_passes:  row.get(17)?,
      progressive_carries: row.get(18)?,
      tackles:             row.get(19)?,
      interceptions:       row.get(20)?,
      overall:             row.get(21)?,
      potential:           row.get(22)?,
      last_updated:        row.get(23)?,
    })
  }

  pub fn into_player(self) -> Result<Player> {
    Ok(Player {
      id:                  self.id,
      fbref_id:            self.fbref_id,
      name:                self.name,
      position:            self.position,
      age:                 self.age,
      nationality:         self.nationality,
      team:                self.team,
      league:              self.league,
      minutes:             self.minutes,
      games_played:        self.games_played,
      starts:              self.starts,
      goals:               self.goals,
      assists:             self.assists,
      cards_yellow:        self.cards_yellow,
      cards_red:           self.cards_red,
      xg:                  self.xg,
      xa:                  self.xa,
      progressive_passes:  self.progressive_passes,
      progressive_carries: self.progressive_carries,
      tackles:             self.tackles,
      interceptions:       self.interceptions,
      overall:             self.overall,
      potential:           self.potential,
      last_updated:        decode_dt(&self.last_updated)?,
    })
  }
}

// ─── Teams ───────────────────────────────────────────────────────────────────

/// Column list matching [`team_from_row`], for SELECT statements.
pub const TEAM_COLUMNS: &str = "id, fbref_id, name, league, country, matches_played, wins, draws, \
   losses, goals_for, goals_against, xg, xga, possession";

/// Teams carry no encoded fields, so rows map straight to the domain type.
pub fn team_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Team> {
  Ok(Team {
    id:             row.get(0)?,
    fbref_id:       row.get(1)?,
    name:           row.get(2)?,
    league:         row.get(3)?,
    country:        row.get(4)?,
    matches_played: row.get(5)?,
    wins:           row.get(6)?,
    draws:          row.get(7)?,
    losses:         row.get(8)?,
    goals_for:      row.get(9)?,
    goals_against:  row.get(10)?,
    xg:             row.get(11)?,
    xga:            row.get(12)?,
    possession:     row.get(13)?,
  })
}

// ─── Matches ─────────────────────────────────────────────────────────────────

/// A `matches` row as read from SQLite, before date decoding.
pub struct RawMatch {
  pub id:            i64,
  pub date:          Option<String>,
  pub season:        Option<String>,
  pub home_team_id:  i64,
  pub away_team_id:  i64,
  pub home_score:    Option<u32>,
  pub away_score:    Option<u32>,
  pub home_xg:       Option<f64>,
  pub away_xg:       Option<f64>,
  pub prob_home_win: f64,
  pub prob_draw:     f64,
  pub prob_away_win: f64,
}

/// Column list matching [`RawMatch::from_row`], for SELECT statements.
pub const MATCH_COLUMNS: &str = "id, date, season, home_team_id, away_team_id, home_score, \
   away_score, home_xg, away_xg, prob_home_win, prob_draw, prob_away_win";

impl RawMatch {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      date:          row.get(1)?,
      season:        row.get(2)?,
      home_team_id:  row.get(3)?,
      away_team_id:  row.get(4)?,
      home_score:    row.get(5)?,
      away_score:    row.get(6)?,
      home_xg:       row.get(7)?,
      away_xg:       row.get(8)?,
      prob_home_win: row.get(9)?,
      prob_draw:     row.get(10)?,
      prob_away_win: row.get(11)?,
    })
  }

  pub fn into_match(self) -> Result<Match> {
    Ok(Match {
      id:            self.id,
      date:          self.date.as_deref().map(decode_dt).transpose()?,
      season:        self.season,
      home_team_id:  self.home_team_id,
      away_team_id:  self.away_team_id,
      home_score:    self.home_score,
      away_score:    self.away_score,
      home_xg:       self.home_xg,
      away_xg:       self.away_xg,
      prob_home_win: self.prob_home_win,
      prob_draw:     self.prob_draw,
      prob_away_win: self.prob_away_win,
    })
  }
}
