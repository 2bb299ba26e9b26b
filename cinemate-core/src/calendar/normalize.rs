//! Normalization of raw catalog records into the upcoming working set.
//!
//! Pure and total over well-formed input: records with absent dates are
//! excluded from date-based computation, never an error.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::types::{NormalizedCatalog, UpcomingMovie, UpcomingSeries};
use crate::catalog::types::{MovieRecord, SeriesWithSeasons};

/// Build the normalized upcoming working set from one raw snapshot.
///
/// Two distinct reference times are applied on purpose: movies are kept when
/// `release_date >= today` (midnight at the start of the reference day),
/// while episodes count as future only when `release_date > now` (the exact
/// reference instant). This asymmetry mirrors the catalog product's observed
/// behavior and is pinned by tests; unifying it is a deliberate change, not
/// a cleanup.
pub fn normalize(
    movies: &[MovieRecord],
    series: &[SeriesWithSeasons],
    today: DateTime<Utc>,
    now: DateTime<Utc>,
) -> NormalizedCatalog {
    let mut upcoming_movies: Vec<UpcomingMovie> = movies
        .iter()
        .filter_map(|movie| {
            let release_date = movie.release_date.filter(|date| *date >= today)?;
            Some(UpcomingMovie {
                id: movie.id.clone(),
                title: movie.title.clone(),
                genres: split_genres(movie.genre.as_deref()),
                genre: movie.genre.clone(),
                poster_url: movie.poster_url.clone(),
                release_date,
                duration: movie.duration,
                release_year: movie.release_year,
            })
        })
        .collect();
    upcoming_movies.sort_by_key(|movie| movie.release_date);

    let mut upcoming_series: Vec<UpcomingSeries> = series
        .iter()
        .filter_map(|entry| {
            let (next_episode_date, upcoming_episode_count) = next_episode(entry, now)?;
            Some(UpcomingSeries {
                id: entry.series.id.clone(),
                title: entry.series.title.clone(),
                genres: split_genres(entry.series.genre.as_deref()),
                genre: entry.series.genre.clone(),
                poster_url: entry.series.poster_url.clone(),
                next_episode_date,
                season_count: entry.seasons.len(),
                upcoming_episode_count,
            })
        })
        .collect();
    upcoming_series.sort_by_key(|series| series.next_episode_date);

    let mut genres = BTreeSet::new();
    for movie in &upcoming_movies {
        genres.extend(movie.genres.iter().cloned());
    }
    for series in &upcoming_series {
        genres.extend(series.genres.iter().cloned());
    }

    NormalizedCatalog {
        movies: upcoming_movies,
        series: upcoming_series,
        genres,
    }
}

/// Earliest strictly-future episode date across all seasons, with the count
/// of future episodes. `None` when nothing is still to air; such a series
/// drops out of the working set entirely.
fn next_episode(
    entry: &SeriesWithSeasons,
    now: DateTime<Utc>,
) -> Option<(DateTime<Utc>, usize)> {
    let mut next: Option<DateTime<Utc>> = None;
    let mut count = 0usize;

    for season in &entry.seasons {
        for episode in &season.episodes {
            if let Some(date) = episode.release_date.filter(|date| *date > now) {
                count += 1;
                // Strict comparison: first occurrence wins on equal dates.
                if next.map_or(true, |best| date < best) {
                    next = Some(date);
                }
            }
        }
    }

    next.map(|date| (date, count))
}

/// Split a comma-separated genre string into trimmed, non-empty entries.
pub(crate) fn split_genres(raw: Option<&str>) -> Vec<String> {
    raw.map(|genres| {
        genres
            .split(',')
            .map(str::trim)
            .filter(|genre| !genre.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
