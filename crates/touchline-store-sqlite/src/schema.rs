//! SQL schema for the Touchline SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Players are created only by bulk insert during ingestion.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS players (
    id                  INTEGER PRIMARY KEY,
    fbref_id            TEXT NOT NULL UNIQUE,
    name                TEXT NOT NULL,
    position            TEXT NOT NULL,
    age                 INTEGER,
    nationality         TEXT,
    team                TEXT,
    league              TEXT,
    minutes             INTEGER NOT NULL DEFAULT 0,
    games_played        INTEGER NOT NULL DEFAULT 0,
    starts              INTEGER,
    goals               INTEGER,
    assists             INTEGER,
    cards_yellow        INTEGER,
    cards_red           INTEGER,
    xg                  REAL,
    xa                  REAL,
    progressive_passes  INTEGER,
    progressive_carries INTEGER,
    tackles             INTEGER,
    interceptions       INTEGER,
    overall             INTEGER NOT NULL DEFAULT 70,
    potential           INTEGER,
    last_updated        TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS teams (
    id             INTEGER PRIMARY KEY,
    fbref_id       TEXT NOT NULL UNIQUE,
    name           TEXT NOT NULL,
    league         TEXT,
    country        TEXT,
    matches_played INTEGER,
    wins           INTEGER,
    draws          INTEGER,
    losses         INTEGER,
    goals_for      INTEGER,
    goals_against  INTEGER,
    xg             REAL,
    xga            REAL,
    possession     REAL
);

-- Scores stay NULL until the fixture is played.
CREATE TABLE IF NOT EXISTS matches (
    id            INTEGER PRIMARY KEY,
    date          TEXT,
    season        TEXT,
    home_team_id  INTEGER NOT NULL REFERENCES teams(id),
    away_team_id  INTEGER NOT NULL REFERENCES teams(id),
    home_score    INTEGER,
    away_score    INTEGER,
    home_xg       REAL,
    away_xg       REAL,
    prob_home_win REAL NOT NULL,
    prob_draw     REAL NOT NULL,
    prob_away_win REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS players_team_idx   ON players(team);
CREATE INDEX IF NOT EXISTS players_league_idx ON players(league);

PRAGMA user_version = 1;
";
