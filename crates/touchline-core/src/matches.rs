//! Match — a fixture between two stored teams, with prediction probabilities
//! and (once played) actual scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three possible results of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
  Home,
  Draw,
  Away,
}

/// A persisted match record. Scores stay `None` until the fixture is played.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
  pub id:            i64,
  pub date:          Option<DateTime<Utc>>,
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

/// Input for recording a match alongside its prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMatch {
  pub date:          Option<DateTime<Utc>>,
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

impl Match {
  /// The outcome with the highest predicted probability. Ties resolve in
  /// home, draw, away order.
  pub fn predicted_outcome(&self) -> Outcome {
    let mut best = (Outcome::Home, self.prob_home_win);
    if self.prob_draw > best.1 {
      best = (Outcome::Draw, self.prob_draw);
    }
    if self.prob_away_win > best.1 {
      best = (Outcome::Away, self.prob_away_win);
    }
    best.0
  }

  /// The actual outcome, or `None` while either score is missing.
  pub fn actual_outcome(&self) -> Option<Outcome> {
    let (home, away) = (self.home_score?, self.away_score?);
    Some(if home > away {
      Outcome::Home
    } else if home < away {
      Outcome::Away
    } else {
      Outcome::Draw
    })
  }

  /// Whether the argmax prediction matched the result; `None` while unplayed.
  pub fn prediction_correct(&self) -> Option<bool> {
    Some(self.predicted_outcome() == self.actual_outcome()?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fixture(probs: (f64, f64, f64), scores: Option<(u32, u32)>) -> Match {
    Match {
      id:            1,
      date:          None,
      season:        None,
      home_team_id:  1,
      away_team_id:  2,
      home_score:    scores.map(|s| s.0),
      away_score:    scores.map(|s| s.1),
      home_xg:       None,
      away_xg:       None,
      prob_home_win: probs.0,
      prob_draw:     probs.1,
      prob_away_win: probs.2,
    }
  }

  #[test]
  fn argmax_picks_most_probable_outcome() {
    assert_eq!(fixture((0.5, 0.3, 0.2), None).predicted_outcome(), Outcome::Home);
    assert_eq!(fixture((0.2, 0.5, 0.3), None).predicted_outcome(), Outcome::Draw);
    assert_eq!(fixture((0.2, 0.3, 0.5), None).predicted_outcome(), Outcome::Away);
  }

  #[test]
  fn argmax_ties_resolve_home_first() {
    assert_eq!(fixture((0.4, 0.4, 0.2), None).predicted_outcome(), Outcome::Home);
    assert_eq!(fixture((0.3, 0.35, 0.35), None).predicted_outcome(), Outcome::Draw);
  }

  #[test]
  fn accuracy_is_none_until_played() {
    assert_eq!(fixture((0.5, 0.3, 0.2), None).prediction_correct(), None);
  }

  #[test]
  fn accuracy_compares_argmax_to_result() {
    assert_eq!(fixture((0.5, 0.3, 0.2), Some((2, 0))).prediction_correct(), Some(true));
    assert_eq!(fixture((0.5, 0.3, 0.2), Some((0, 2))).prediction_correct(), Some(false));
    assert_eq!(fixture((0.2, 0.5, 0.3), Some((1, 1))).prediction_correct(), Some(true));
  }
}
