//! Snapshot assembly: concurrent catalog fetching with per-series degradation.
//!
//! Movies and series are fetched concurrently and either failure is fatal to
//! the cycle. Season fetches fan out concurrently across all series; a
//! failure there degrades that one series to an empty season list instead of
//! failing the snapshot.

use futures::future;
use tracing::{debug, warn};

use super::errors::CatalogError;
use super::providers::CatalogProvider;
use super::types::{CatalogSnapshot, SeriesWithSeasons};

/// Fetch one complete catalog snapshot.
///
/// # Errors
/// - `CatalogError` - The top-level movies or series fetch failed
pub async fn fetch_snapshot(
    provider: &dyn CatalogProvider,
) -> Result<CatalogSnapshot, CatalogError> {
    let (movies, series) = tokio::try_join!(provider.fetch_movies(), provider.fetch_series())?;
    debug!(
        movies = movies.len(),
        series = series.len(),
        "top-level catalog fetch complete"
    );

    let season_results =
        future::join_all(series.iter().map(|s| provider.fetch_seasons(&s.id))).await;

    let series = series
        .into_iter()
        .zip(season_results)
        .map(|(series, seasons)| match seasons {
            Ok(seasons) => SeriesWithSeasons { series, seasons },
            Err(error) => {
                warn!(
                    series_id = %series.id,
                    %error,
                    "season fetch failed, substituting empty season list"
                );
                SeriesWithSeasons {
                    series,
                    seasons: Vec::new(),
                }
            }
        })
        .collect();

    Ok(CatalogSnapshot { movies, series })
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use chrono::Utc;

    use super::*;
    use crate::catalog::providers::MockCatalogProvider;
    use crate::catalog::types::{
        EpisodeRecord, MediaId, MovieRecord, SeasonRecord, SeriesRecord,
    };

    fn movie(id: i64, title: &str) -> MovieRecord {
        MovieRecord {
            id: MediaId::from(id),
            title: title.to_string(),
            genre: None,
            release_date: Some(Utc::now()),
            duration: None,
            release_year: None,
            poster_url: None,
        }
    }

    fn series(id: i64, title: &str) -> SeriesRecord {
        SeriesRecord {
            id: MediaId::from(id),
            title: title.to_string(),
            genre: None,
            poster_url: None,
        }
    }

    fn one_season() -> Vec<SeasonRecord> {
        vec![SeasonRecord {
            season_number: 1,
            episodes: vec![EpisodeRecord {
                episode_number: 1,
                release_date: Some(Utc::now()),
                title: None,
                poster_url: None,
            }],
        }]
    }

    #[tokio::test]
    async fn test_snapshot_combines_movies_and_series() {
        let provider = MockCatalogProvider {
            movies: vec![movie(1, "A")],
            series: vec![series(10, "S")],
            seasons: HashMap::from([(MediaId::from(10), one_season())]),
            ..Default::default()
        };

        let snapshot = fetch_snapshot(&provider).await.unwrap();

        assert_eq!(snapshot.movies.len(), 1);
        assert_eq!(snapshot.series.len(), 1);
        assert_eq!(snapshot.series[0].seasons.len(), 1);
    }

    #[tokio::test]
    async fn test_movies_failure_is_fatal() {
        let provider = MockCatalogProvider {
            fail_movies: true,
            series: vec![series(10, "S")],
            ..Default::default()
        };

        let result = fetch_snapshot(&provider).await;
        assert!(matches!(result, Err(CatalogError::Status { .. })));
    }

    #[tokio::test]
    async fn test_series_failure_is_fatal() {
        let provider = MockCatalogProvider {
            fail_series: true,
            movies: vec![movie(1, "A")],
            ..Default::default()
        };

        assert!(fetch_snapshot(&provider).await.is_err());
    }

    #[tokio::test]
    async fn test_season_failure_degrades_single_series() {
        let provider = MockCatalogProvider {
            series: vec![series(10, "Healthy"), series(11, "Broken")],
            seasons: HashMap::from([
                (MediaId::from(10), one_season()),
                (MediaId::from(11), one_season()),
            ]),
            failing_seasons: HashSet::from([MediaId::from(11)]),
            ..Default::default()
        };

        let snapshot = fetch_snapshot(&provider).await.unwrap();

        assert_eq!(snapshot.series.len(), 2);
        assert_eq!(snapshot.series[0].seasons.len(), 1);
        assert!(snapshot.series[1].seasons.is_empty());
    }
}
