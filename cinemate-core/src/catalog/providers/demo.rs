//! Demo catalog provider for development and testing.
//!
//! Returns a deterministic catalog anchored to a reference instant, so the
//! same upcoming/past split is produced no matter when it runs. Covers the
//! interesting shapes: past movies, date-less movies, fully-aired series,
//! mixed past/future episode schedules, and multi-season series.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::CatalogProvider;
use crate::catalog::errors::CatalogError;
use crate::catalog::types::{EpisodeRecord, MediaId, MovieRecord, SeasonRecord, SeriesRecord};

/// In-memory catalog with data dated relative to a reference instant.
#[derive(Debug, Clone)]
pub struct DemoCatalogProvider {
    reference: DateTime<Utc>,
}

impl DemoCatalogProvider {
    /// Demo catalog anchored to the current instant.
    pub fn new() -> Self {
        Self::anchored(Utc::now())
    }

    /// Demo catalog anchored to an explicit instant, for deterministic tests.
    pub fn anchored(reference: DateTime<Utc>) -> Self {
        Self { reference }
    }

    fn in_days(&self, days: i64) -> Option<DateTime<Utc>> {
        Some(self.reference + Duration::days(days))
    }

    fn movie(
        &self,
        id: i64,
        title: &str,
        genre: Option<&str>,
        release_date: Option<DateTime<Utc>>,
        duration: Option<u32>,
    ) -> MovieRecord {
        MovieRecord {
            id: MediaId::from(id),
            title: title.to_string(),
            genre: genre.map(str::to_string),
            release_date,
            duration,
            release_year: release_date.map(|d| {
                use chrono::Datelike;
                d.year() as u16
            }),
            poster_url: Some(format!(
                "https://img.cinemate.example/posters/{}.jpg",
                title.to_lowercase().replace(' ', "-")
            )),
        }
    }

    fn episode(&self, number: u32, days_from_reference: i64) -> EpisodeRecord {
        EpisodeRecord {
            episode_number: number,
            release_date: self.in_days(days_from_reference),
            title: None,
            poster_url: None,
        }
    }
}

impl Default for DemoCatalogProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for DemoCatalogProvider {
    async fn fetch_movies(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        Ok(vec![
            self.movie(
                101,
                "Dark Horizon",
                Some("Action, Sci-Fi"),
                self.in_days(6),
                Some(131),
            ),
            self.movie(102, "Glass River", Some("Drama"), self.in_days(1), Some(104)),
            self.movie(
                103,
                "Paper Lanterns",
                Some("Animation, Family"),
                self.in_days(12),
                Some(96),
            ),
            self.movie(
                104,
                "The Last Reel",
                Some("Documentary"),
                self.in_days(40),
                Some(88),
            ),
            // Already released; excluded from the upcoming working set.
            self.movie(
                105,
                "Midnight Cartel",
                Some("Crime, Action"),
                self.in_days(-3),
                Some(118),
            ),
            // No release date announced yet.
            self.movie(106, "Untitled Project", None, None, None),
        ])
    }

    async fn fetch_series(&self) -> Result<Vec<SeriesRecord>, CatalogError> {
        Ok(vec![
            SeriesRecord {
                id: MediaId::from(201),
                title: "Echoes".to_string(),
                genre: Some("Drama, Mystery".to_string()),
                poster_url: Some("https://img.cinemate.example/posters/echoes.jpg".to_string()),
            },
            SeriesRecord {
                id: MediaId::from(202),
                title: "Orbital".to_string(),
                genre: Some("Sci-Fi".to_string()),
                poster_url: None,
            },
            SeriesRecord {
                id: MediaId::from(203),
                title: "Stand-up Nights".to_string(),
                genre: Some("Comedy".to_string()),
                poster_url: None,
            },
            SeriesRecord {
                id: MediaId::from(204),
                title: "Northlight".to_string(),
                genre: Some("Crime, Thriller".to_string()),
                poster_url: None,
            },
        ])
    }

    async fn fetch_seasons(&self, series_id: &MediaId) -> Result<Vec<SeasonRecord>, CatalogError> {
        let seasons = match series_id.as_str() {
            // Mid-season: one aired episode, two still to come.
            "201" => vec![SeasonRecord {
                season_number: 1,
                episodes: vec![
                    self.episode(1, -7),
                    self.episode(2, 2),
                    self.episode(3, 9),
                ],
            }],
            // First season fully aired, second season starts later.
            "202" => vec![
                SeasonRecord {
                    season_number: 1,
                    episodes: vec![self.episode(1, -30), self.episode(2, -23)],
                },
                SeasonRecord {
                    season_number: 2,
                    episodes: vec![self.episode(1, 20), self.episode(2, 27)],
                },
            ],
            // Everything aired; drops out of the upcoming working set.
            "203" => vec![SeasonRecord {
                season_number: 1,
                episodes: vec![self.episode(1, -60), self.episode(2, -53)],
            }],
            "204" => vec![SeasonRecord {
                season_number: 1,
                episodes: vec![self.episode(1, 15)],
            }],
            _ => Vec::new(),
        };

        Ok(seasons)
    }
}
