//! HTML fetcher — HTTP GET against a fixed base host with a per-session
//! randomized User-Agent and an explicit request timeout.

use std::time::Duration;

use rand::seq::SliceRandom as _;

use crate::{Error, Result};

/// Browser User-Agent pool; one entry is chosen per fetcher construction.
const USER_AGENTS: &[&str] = &[
  "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
  "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
  "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36",
  "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
];

/// Scraper configuration knobs.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
  pub base_url:   String,
  /// Fixed delay between successive squad-page fetches. Blunt politeness,
  /// not adaptive backpressure.
  pub delay:      Duration,
  /// Per-request timeout.
  pub timeout:    Duration,
  /// Cap on squads visited per league; `None` visits all of them.
  pub team_limit: Option<usize>,
  /// Season segment of the league results table identifier.
  pub season:     String,
}

impl Default for ScrapeConfig {
  fn default() -> Self {
    Self {
      base_url:   "https://fbref.com".to_string(),
      delay:      Duration::from_secs(5),
      timeout:    Duration::from_secs(20),
      team_limit: None,
      season:     "2023-2024".to_string(),
    }
  }
}

/// Issues GETs against the configured base host and returns raw markup.
pub struct PageFetcher {
  client:   reqwest::Client,
  base_url: String,
}

impl PageFetcher {
  pub fn new(config: &ScrapeConfig) -> Result<Self> {
    let ua = USER_AGENTS
      .choose(&mut rand::thread_rng())
      .copied()
      .unwrap_or(USER_AGENTS[0]);

    let client = reqwest::Client::builder()
      .user_agent(ua)
      .timeout(config.timeout)
      .build()
      .map_err(|e| Error::Fetch { url: config.base_url.clone(), source: e })?;

    Ok(Self { client, base_url: config.base_url.clone() })
  }

  /// GET `path` relative to the base host and return the response body.
  pub async fn get(&self, path: &str) -> Result<String> {
    let url = format!("{}{}", self.base_url, path);

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .map_err(|e| Error::Fetch { url: url.clone(), source: e })?;

    let status = response.status();
    if !status.is_success() {
      return Err(Error::Status { url, status });
    }

    response.text().await.map_err(|e| Error::Fetch { url, source: e })
  }
}
