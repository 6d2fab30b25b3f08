//! FBref scraping frontend for Touchline.
//!
//! [`fetch::PageFetcher`] issues the HTTP GETs, [`extract`] locates known
//! stats tables in the markup and yields their rows, and
//! [`league::LeagueScraper`] drives the whole pipeline for one league,
//! implementing [`touchline_core::source::LeagueSource`].

pub mod error;
pub mod extract;
pub mod fetch;
pub mod league;

pub use error::{Error, Result};
pub use fetch::{PageFetcher, ScrapeConfig};
pub use league::LeagueScraper;
