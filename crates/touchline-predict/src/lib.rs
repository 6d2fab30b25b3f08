//! Placeholder match-outcome predictor.
//!
//! A [`MatchPredictor`] is constructed explicitly and passed to whoever
//! needs one — there is no process-wide shared instance. Prediction is
//! total: with no model loaded, or whenever inference produces a
//! non-finite value, the result is a fixed fallback distribution tagged
//! [`PredictionSource::Fallback`] rather than an error.

use serde::{Deserialize, Serialize};

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Per-team feature set. Missing JSON fields take the neutral defaults
/// below, so a sparse request body still predicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamForm {
  /// Synthetic 0-100 team quality score.
  pub rating:         f64,
  /// Recent-results form, 0-1.
  pub form:           f64,
  /// Goals scored per match.
  pub goals_scored:   f64,
  /// Goals conceded per match.
  pub goals_conceded: f64,
  /// Expected goals per match.
  pub xg:             f64,
}

impl Default for TeamForm {
  fn default() -> Self {
    Self { rating: 75.0, form: 0.5, goals_scored: 1.5, goals_conceded: 1.2, xg: 1.8 }
  }
}

/// Optional fixture context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchContext {
  /// Days since the home side's last match.
  pub days_rest: f64,
}

impl Default for MatchContext {
  fn default() -> Self {
    Self { days_rest: 7.0 }
  }
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// How a prediction was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionSource {
  Trained,
  Fallback,
}

/// A probability triple over the three outcomes, plus a confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
  pub home_win:   f64,
  pub draw:       f64,
  pub away_win:   f64,
  pub confidence: f64,
  pub source:     PredictionSource,
}

impl Prediction {
  /// The fixed degraded-mode distribution.
  pub fn fallback() -> Self {
    Self {
      home_win:   0.45,
      draw:       0.30,
      away_win:   0.25,
      confidence: 0.65,
      source:     PredictionSource::Fallback,
    }
  }
}

// ─── Model ───────────────────────────────────────────────────────────────────

/// Linear feature weights for the trained path. Each weight multiplies the
/// home-minus-away difference of the corresponding feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelWeights {
  pub rating:    f64,
  pub form:      f64,
  pub attack:    f64,
  pub defence:   f64,
  pub xg:        f64,
  pub rest:      f64,
  /// Constant edge for playing at home.
  pub home_edge: f64,
  /// Base score of the draw outcome; eroded as the edge grows.
  pub draw_bias: f64,
}

impl Default for ModelWeights {
  fn default() -> Self {
    Self {
      rating:    0.05,
      form:      1.2,
      attack:    0.4,
      defence:   0.4,
      xg:        0.5,
      rest:      0.1,
      home_edge: 0.3,
      draw_bias: 0.2,
    }
  }
}

/// The predictor itself: an optional set of trained weights.
#[derive(Debug, Clone, Default)]
pub struct MatchPredictor {
  model: Option<ModelWeights>,
}

impl MatchPredictor {
  /// A predictor with no model; every prediction is the fallback triple.
  pub fn untrained() -> Self {
    Self { model: None }
  }

  /// A predictor carrying trained weights.
  pub fn with_model(model: ModelWeights) -> Self {
    Self { model: Some(model) }
  }

  pub fn is_trained(&self) -> bool {
    self.model.is_some()
  }

  /// Predict the outcome distribution for home vs away.
  ///
  /// Never fails: an untrained predictor, or weights that produce a
  /// non-finite score, yield [`Prediction::fallback`].
  pub fn predict(&self, home: &TeamForm, away: &TeamForm, context: &MatchContext) -> Prediction {
    let Some(w) = &self.model else {
      return Prediction::fallback();
    };

    let edge = w.rating * (home.rating - away.rating)
      + w.form * (home.form - away.form)
      + w.attack * (home.goals_scored - away.goals_scored)
      + w.defence * (away.goals_conceded - home.goals_conceded)
      + w.xg * (home.xg - away.xg)
      + w.rest * (context.days_rest - 7.0) / 7.0
      + w.home_edge;

    let scores = [edge, w.draw_bias - edge.abs(), -edge];
    match softmax(scores) {
      Some([home_win, draw, away_win]) => {
        let confidence = home_win.max(draw).max(away_win);
        Prediction { home_win, draw, away_win, confidence, source: PredictionSource::Trained }
      }
      None => Prediction::fallback(),
    }
  }
}

/// Numerically-stable softmax; `None` if any input or output is non-finite.
fn softmax(scores: [f64; 3]) -> Option<[f64; 3]> {
  if scores.iter().any(|s| !s.is_finite()) {
    return None;
  }
  let max = scores.iter().cloned().fold(f64::MIN, f64::max);
  let exps = scores.map(|s| (s - max).exp());
  let sum: f64 = exps.iter().sum();
  if !sum.is_finite() || sum == 0.0 {
    return None;
  }
  Some(exps.map(|e| e / sum))
}

// ─── Form ────────────────────────────────────────────────────────────────────

/// A single past result, from the scoring team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
  Win,
  Draw,
  Loss,
}

/// Form over the last five results: win counts 1, draw 0.5, normalized to
/// 0-1. An empty history is neutral (0.5).
pub fn form_from_results(results: &[MatchResult]) -> f64 {
  if results.is_empty() {
    return 0.5;
  }
  let recent = &results[results.len().saturating_sub(5)..];
  let score: f64 = recent
    .iter()
    .map(|r| match r {
      MatchResult::Win => 1.0,
      MatchResult::Draw => 0.5,
      MatchResult::Loss => 0.0,
    })
    .sum();
  (score / 5.0).min(1.0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn untrained_predictor_returns_fixed_fallback() {
    let p = MatchPredictor::untrained();
    let out = p.predict(&TeamForm::default(), &TeamForm::default(), &MatchContext::default());
    assert_eq!(out.home_win, 0.45);
    assert_eq!(out.draw, 0.30);
    assert_eq!(out.away_win, 0.25);
    assert_eq!(out.confidence, 0.65);
    assert_eq!(out.source, PredictionSource::Fallback);
  }

  #[test]
  fn trained_probabilities_sum_to_one() {
    let p = MatchPredictor::with_model(ModelWeights::default());
    let home = TeamForm { rating: 82.0, form: 0.7, goals_scored: 2.1, goals_conceded: 0.9, xg: 2.3 };
    let away = TeamForm { rating: 78.0, form: 0.4, goals_scored: 1.5, goals_conceded: 1.8, xg: 1.6 };
    let out = p.predict(&home, &away, &MatchContext { days_rest: 4.0 });

    assert_eq!(out.source, PredictionSource::Trained);
    let sum = out.home_win + out.draw + out.away_win;
    assert!((sum - 1.0).abs() < 1e-9, "probabilities sum to {sum}");
    assert!(out.home_win > out.away_win, "stronger home side should be favored");
    assert_eq!(out.confidence, out.home_win.max(out.draw).max(out.away_win));
  }

  #[test]
  fn non_finite_features_degrade_to_fallback() {
    let p = MatchPredictor::with_model(ModelWeights::default());
    let home = TeamForm { rating: f64::NAN, ..TeamForm::default() };
    let out = p.predict(&home, &TeamForm::default(), &MatchContext::default());
    assert_eq!(out.source, PredictionSource::Fallback);
    assert_eq!(out.home_win, 0.45);
  }

  #[test]
  fn sparse_json_body_takes_neutral_defaults() {
    let form: TeamForm = serde_json::from_str("{\"rating\": 82}").unwrap();
    assert_eq!(form.rating, 82.0);
    assert_eq!(form.form, 0.5);
    assert_eq!(form.xg, 1.8);
  }

  #[test]
  fn form_is_neutral_for_empty_history() {
    assert_eq!(form_from_results(&[]), 0.5);
  }

  #[test]
  fn form_counts_wins_and_draws() {
    use MatchResult::*;
    assert_eq!(form_from_results(&[Win, Win, Win, Win, Win]), 1.0);
    assert_eq!(form_from_results(&[Win, Draw, Loss]), 0.3);
  }

  #[test]
  fn form_only_counts_last_five() {
    use MatchResult::*;
    let history = [Loss, Loss, Loss, Win, Win, Win, Win, Win];
    assert_eq!(form_from_results(&history), 1.0);
  }
}
