//! Data types for the release calendar pipeline.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::catalog::types::MediaId;

/// Content classification of a normalized item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentType {
    Movie,
    Series,
}

/// Content-type filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ContentTypeFilter {
    /// Movies and series
    #[default]
    All,
    /// Movies only
    Movies,
    /// Series only
    Series,
}

/// Inclusive calendar-day range for filtering by effective date.
///
/// `start` is interpreted as start-of-day, `end` as end-of-day
/// (23:59:59.999), both in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Whether an instant falls within the range.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            if instant < start_of_day(start) {
                return false;
            }
        }
        if let Some(end) = self.end {
            if instant > end_of_day(end) {
                return false;
            }
        }
        true
    }
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))
}

fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    let last_instant = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&day.and_time(last_instant))
}

/// User-selected filter predicates, combined with AND semantics.
///
/// The default value is the no-op filter: everything passes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub content_type: ContentTypeFilter,
    /// Genre membership is OR within this set; empty means no genre filter
    pub selected_genres: BTreeSet<String>,
    pub date_range: DateRange,
    /// Case-insensitive substring match; empty means no text filter
    pub search_query: String,
}

/// Movie in the upcoming working set.
///
/// `release_date` is guaranteed present and on-or-after the reference day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingMovie {
    pub id: MediaId,
    pub title: String,
    /// Raw comma-separated genre string as served by the catalog
    pub genre: Option<String>,
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
    pub release_date: DateTime<Utc>,
    pub duration: Option<u32>,
    pub release_year: Option<u16>,
}

/// Series in the upcoming working set.
///
/// `next_episode_date` is guaranteed strictly in the future relative to the
/// reference instant the set was normalized against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingSeries {
    pub id: MediaId,
    pub title: String,
    pub genre: Option<String>,
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
    pub next_episode_date: DateTime<Utc>,
    pub season_count: usize,
    /// Number of episodes still to air across all seasons
    pub upcoming_episode_count: usize,
}

/// Normalized base collections for one fetch cycle.
///
/// Held read-only between refreshes; filter passes derive from it without
/// mutating it.
#[derive(Debug, Clone, Default)]
pub struct NormalizedCatalog {
    /// Upcoming movies, ascending by release date
    pub movies: Vec<UpcomingMovie>,
    /// Upcoming series, ascending by next episode date
    pub series: Vec<UpcomingSeries>,
    /// Distinct genres across both collections, for filter UI population
    pub genres: BTreeSet<String>,
}

/// One item of the merged timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEntry {
    pub content_type: ContentType,
    pub id: MediaId,
    pub title: String,
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
    /// Release date for movies, next episode date for series. Entries
    /// without one are excluded from grouping.
    pub effective_date: Option<DateTime<Utc>>,
}

impl CalendarEntry {
    pub fn from_movie(movie: &UpcomingMovie) -> Self {
        Self {
            content_type: ContentType::Movie,
            id: movie.id.clone(),
            title: movie.title.clone(),
            genres: movie.genres.clone(),
            poster_url: movie.poster_url.clone(),
            effective_date: Some(movie.release_date),
        }
    }

    pub fn from_series(series: &UpcomingSeries) -> Self {
        Self {
            content_type: ContentType::Series,
            id: series.id.clone(),
            title: series.title.clone(),
            genres: series.genres.clone(),
            poster_url: series.poster_url.clone(),
            effective_date: Some(series.next_episode_date),
        }
    }
}

/// Calendar-month bucket of the merged timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    /// Human month label, e.g. "August 2025"
    pub label: String,
    pub entries: Vec<CalendarEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_open_range_contains_everything() {
        let range = DateRange::default();
        assert!(range.contains(instant(1970, 1, 1, 0)));
        assert!(range.contains(instant(2099, 12, 31, 23)));
    }

    #[test]
    fn test_range_start_is_start_of_day() {
        let range = DateRange {
            start: Some(day(2025, 8, 10)),
            end: None,
        };

        assert!(!range.contains(instant(2025, 8, 9, 23)));
        assert!(range.contains(Utc.with_ymd_and_hms(2025, 8, 10, 0, 0, 0).unwrap()));
        assert!(range.contains(instant(2025, 8, 10, 9)));
    }

    #[test]
    fn test_range_end_is_end_of_day() {
        let range = DateRange {
            start: None,
            end: Some(day(2025, 8, 10)),
        };

        assert!(range.contains(
            Utc.with_ymd_and_hms(2025, 8, 10, 23, 59, 59).unwrap()
        ));
        assert!(!range.contains(instant(2025, 8, 11, 0)));
    }

    #[test]
    fn test_default_filter_state_is_noop_shape() {
        let filters = FilterState::default();
        assert_eq!(filters.content_type, ContentTypeFilter::All);
        assert!(filters.selected_genres.is_empty());
        assert!(filters.search_query.is_empty());
        assert_eq!(filters.date_range, DateRange::default());
    }
}
