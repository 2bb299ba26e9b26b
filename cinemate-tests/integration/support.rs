//! Shared test fixtures: a scriptable catalog provider.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use cinemate_core::catalog::{
    CatalogError, CatalogProvider, EpisodeRecord, MediaId, MovieRecord, SeasonRecord,
    SeriesRecord,
};

/// In-memory provider with injectable failures, built relative to a
/// reference instant.
#[derive(Debug, Default)]
pub struct ScriptedCatalog {
    pub movies: Vec<MovieRecord>,
    pub series: Vec<SeriesRecord>,
    pub seasons: HashMap<MediaId, Vec<SeasonRecord>>,
    pub fail_movies: bool,
    pub fail_series: bool,
    pub failing_seasons: HashSet<MediaId>,
}

impl ScriptedCatalog {
    pub fn with_movie(mut self, id: i64, title: &str, genre: &str, days_ahead: i64, reference: DateTime<Utc>) -> Self {
        self.movies.push(MovieRecord {
            id: MediaId::from(id),
            title: title.to_string(),
            genre: Some(genre.to_string()),
            release_date: Some(reference + Duration::days(days_ahead)),
            duration: None,
            release_year: None,
            poster_url: None,
        });
        self
    }

    pub fn with_series(
        mut self,
        id: i64,
        title: &str,
        genre: &str,
        episode_days: &[i64],
        reference: DateTime<Utc>,
    ) -> Self {
        self.series.push(SeriesRecord {
            id: MediaId::from(id),
            title: title.to_string(),
            genre: Some(genre.to_string()),
            poster_url: None,
        });
        self.seasons.insert(
            MediaId::from(id),
            vec![SeasonRecord {
                season_number: 1,
                episodes: episode_days
                    .iter()
                    .enumerate()
                    .map(|(i, days)| EpisodeRecord {
                        episode_number: (i + 1) as u32,
                        release_date: Some(reference + Duration::days(*days)),
                        title: None,
                        poster_url: None,
                    })
                    .collect(),
            }],
        );
        self
    }
}

#[async_trait]
impl CatalogProvider for ScriptedCatalog {
    async fn fetch_movies(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        if self.fail_movies {
            return Err(CatalogError::Status {
                url: "scripted://api/movies".to_string(),
                status: 503,
            });
        }
        Ok(self.movies.clone())
    }

    async fn fetch_series(&self) -> Result<Vec<SeriesRecord>, CatalogError> {
        if self.fail_series {
            return Err(CatalogError::Status {
                url: "scripted://api/series".to_string(),
                status: 503,
            });
        }
        Ok(self.series.clone())
    }

    async fn fetch_seasons(&self, series_id: &MediaId) -> Result<Vec<SeasonRecord>, CatalogError> {
        if self.failing_seasons.contains(series_id) {
            return Err(CatalogError::Request {
                url: format!("scripted://api/series/{series_id}/seasons"),
                reason: "connection reset".to_string(),
            });
        }
        Ok(self.seasons.get(series_id).cloned().unwrap_or_default())
    }
}
