//! Stat normalizer — fills missing counting stats and derives games played.
//!
//! All functions are total over well-formed input; malformed numeric text
//! surfaces as [`Error::Validation`] naming the field and the offending
//! value. The parsing helpers are shared with the table extractor.

use crate::{Error, Result, player::NewPlayer};

/// A full match is 90 minutes; games played is the rounded quotient
/// (half away from zero).
pub fn games_from_minutes(minutes: u32) -> u32 {
  (f64::from(minutes) / 90.0).round() as u32
}

/// Fill `minutes` with 0 when absent, then derive `games_played`.
pub fn normalize(player: &mut NewPlayer) {
  let minutes = player.minutes.unwrap_or(0);
  player.minutes = Some(minutes);
  player.games_played = Some(games_from_minutes(minutes));
}

/// Parse a counting stat cell: blank is 0, thousands separators stripped.
pub fn parse_count(field: &'static str, text: &str) -> Result<u32> {
  let cleaned = text.trim().replace(',', "");
  if cleaned.is_empty() {
    return Ok(0);
  }
  cleaned.parse().map_err(|_| Error::Validation { field, value: text.to_string() })
}

/// Parse an age cell: the integer prefix before the first `-`. Blank is
/// `None` (the age column is nullable).
pub fn parse_age(field: &'static str, text: &str) -> Result<Option<u32>> {
  let prefix = text.trim().split('-').next().unwrap_or_default().trim();
  if prefix.is_empty() {
    return Ok(None);
  }
  prefix
    .parse()
    .map(Some)
    .map_err(|_| Error::Validation { field, value: text.to_string() })
}

/// Parse an advanced metric cell: blank is 0.0.
pub fn parse_metric(field: &'static str, text: &str) -> Result<f64> {
  let cleaned = text.trim();
  if cleaned.is_empty() {
    return Ok(0.0);
  }
  cleaned.parse().map_err(|_| Error::Validation { field, value: text.to_string() })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn games_played_is_rounded_minutes_over_ninety() {
    assert_eq!(games_from_minutes(0), 0);
    assert_eq!(games_from_minutes(44), 0);
    assert_eq!(games_from_minutes(45), 1); // half rounds away from zero
    assert_eq!(games_from_minutes(90), 1);
    assert_eq!(games_from_minutes(1234), 14);
    assert_eq!(games_from_minutes(3420), 38);
  }

  #[test]
  fn normalize_defaults_missing_minutes_to_zero() {
    let mut p = NewPlayer { name: "A".into(), ..Default::default() };
    normalize(&mut p);
    assert_eq!(p.minutes, Some(0));
    assert_eq!(p.games_played, Some(0));
  }

  #[test]
  fn normalize_derives_games_played() {
    let mut p = NewPlayer { name: "A".into(), minutes: Some(1234), ..Default::default() };
    normalize(&mut p);
    assert_eq!(p.games_played, Some(14));
  }

  #[test]
  fn count_strips_thousands_separators() {
    assert_eq!(parse_count("minutes", "1,234").unwrap(), 1234);
    assert_eq!(parse_count("minutes", " 90 ").unwrap(), 90);
  }

  #[test]
  fn count_blank_is_zero() {
    assert_eq!(parse_count("minutes", "").unwrap(), 0);
    assert_eq!(parse_count("minutes", "   ").unwrap(), 0);
  }

  #[test]
  fn count_garbage_is_a_validation_error() {
    let err = parse_count("minutes", "9O").unwrap_err();
    assert!(matches!(err, Error::Validation { field: "minutes", .. }));
  }

  #[test]
  fn age_takes_integer_prefix() {
    assert_eq!(parse_age("age", "27-171").unwrap(), Some(27));
    assert_eq!(parse_age("age", "19").unwrap(), Some(19));
    assert_eq!(parse_age("age", "").unwrap(), None);
    assert!(parse_age("age", "abc-12").is_err());
  }

  #[test]
  fn metric_blank_is_zero() {
    assert_eq!(parse_metric("xg", "").unwrap(), 0.0);
    assert_eq!(parse_metric("xg", "7.3").unwrap(), 7.3);
    assert!(parse_metric("xg", "n/a").is_err());
  }
}
