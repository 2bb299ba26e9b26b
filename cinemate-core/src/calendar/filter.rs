//! Filter engine for the upcoming working set.
//!
//! Predicates combine with AND semantics; genre membership is OR within the
//! selected set. Each pass recomputes from the untouched base collections,
//! so filtering is idempotent and never destructive.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::types::{ContentTypeFilter, FilterState, UpcomingMovie, UpcomingSeries};

/// Apply the active filters to both collections independently.
///
/// The only coupling between the two pipelines is the content-type
/// short-circuit: `Movies` empties the series result, `Series` empties the
/// movies result.
pub fn apply_filters(
    movies: &[UpcomingMovie],
    series: &[UpcomingSeries],
    filters: &FilterState,
) -> (Vec<UpcomingMovie>, Vec<UpcomingSeries>) {
    let query = filters.search_query.to_lowercase();

    let movies_out = if filters.content_type == ContentTypeFilter::Series {
        Vec::new()
    } else {
        movies
            .iter()
            .filter(|movie| {
                retain(
                    &movie.title,
                    movie.genre.as_deref(),
                    &movie.genres,
                    movie.release_date,
                    filters,
                    &query,
                )
            })
            .cloned()
            .collect()
    };

    let series_out = if filters.content_type == ContentTypeFilter::Movies {
        Vec::new()
    } else {
        series
            .iter()
            .filter(|entry| {
                retain(
                    &entry.title,
                    entry.genre.as_deref(),
                    &entry.genres,
                    entry.next_episode_date,
                    filters,
                    &query,
                )
            })
            .cloned()
            .collect()
    };

    (movies_out, series_out)
}

fn retain(
    title: &str,
    genre_raw: Option<&str>,
    genres: &[String],
    effective_date: DateTime<Utc>,
    filters: &FilterState,
    query: &str,
) -> bool {
    matches_search(title, genre_raw, genres, query)
        && matches_genres(genres, &filters.selected_genres)
        && filters.date_range.contains(effective_date)
}

/// Case-insensitive substring match against title, the raw genre string, or
/// any individual genre entry. An empty query matches everything.
fn matches_search(title: &str, genre_raw: Option<&str>, genres: &[String], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    title.to_lowercase().contains(query)
        || genre_raw.is_some_and(|raw| raw.to_lowercase().contains(query))
        || genres.iter().any(|genre| genre.to_lowercase().contains(query))
}

/// An empty selection is a no-op; otherwise any shared genre retains the item.
fn matches_genres(genres: &[String], selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || genres.iter().any(|genre| selected.contains(genre))
}
