//! Mock catalog provider for unit tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use super::CatalogProvider;
use crate::catalog::errors::CatalogError;
use crate::catalog::types::{MediaId, MovieRecord, SeasonRecord, SeriesRecord};

/// Programmable in-memory provider with injectable failures.
#[derive(Debug, Default)]
pub struct MockCatalogProvider {
    pub movies: Vec<MovieRecord>,
    pub series: Vec<SeriesRecord>,
    pub seasons: HashMap<MediaId, Vec<SeasonRecord>>,
    pub fail_movies: bool,
    pub fail_series: bool,
    pub failing_seasons: HashSet<MediaId>,
}

#[async_trait]
impl CatalogProvider for MockCatalogProvider {
    async fn fetch_movies(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        if self.fail_movies {
            return Err(CatalogError::Status {
                url: "mock://api/movies".to_string(),
                status: 500,
            });
        }
        Ok(self.movies.clone())
    }

    async fn fetch_series(&self) -> Result<Vec<SeriesRecord>, CatalogError> {
        if self.fail_series {
            return Err(CatalogError::Status {
                url: "mock://api/series".to_string(),
                status: 500,
            });
        }
        Ok(self.series.clone())
    }

    async fn fetch_seasons(&self, series_id: &MediaId) -> Result<Vec<SeasonRecord>, CatalogError> {
        if self.failing_seasons.contains(series_id) {
            return Err(CatalogError::Request {
                url: format!("mock://api/series/{series_id}/seasons"),
                reason: "connection reset".to_string(),
            });
        }
        Ok(self.seasons.get(series_id).cloned().unwrap_or_default())
    }
}
