//! Release calendar service: fetch lifecycle and view state.
//!
//! Owns the normalized base collections and the filtered/grouped view.
//! The base is replaced wholesale per successful refresh; the view is
//! recomputed synchronously on every filter change. Refreshes carry a
//! generation ticket so a result that arrives after a newer refresh began
//! is discarded instead of clobbering state.

use chrono::{DateTime, Local, LocalResult, NaiveTime, Utc};
use tracing::{debug, error, info};

use super::filter::apply_filters;
use super::group::combine_and_group;
use super::normalize::normalize;
use super::types::{FilterState, MonthGroup, NormalizedCatalog};
use crate::catalog::errors::CatalogError;
use crate::catalog::fetch::fetch_snapshot;
use crate::catalog::providers::CatalogProvider;
use crate::catalog::types::CatalogSnapshot;

/// Lifecycle state of the calendar view.
///
/// `Loading -> {Error | Ready}`; filter changes self-transition within
/// `Ready` without passing through `Loading` again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarState {
    /// A refresh is in flight; nothing is displayable yet.
    Loading,
    /// The last refresh failed; no partial results are available.
    Error { message: String },
    /// Base collections are populated and the view reflects the filters.
    Ready,
}

impl CalendarState {
    pub fn is_ready(&self) -> bool {
        matches!(self, CalendarState::Ready)
    }
}

/// Token tying an in-flight fetch to the refresh that started it.
#[derive(Debug, Clone, Copy)]
#[must_use = "apply the ticket with apply_refresh or the fetch result is lost"]
pub struct RefreshTicket {
    generation: u64,
}

/// The release calendar: provider + state machine + derived view.
#[derive(Debug)]
pub struct ReleaseCalendar {
    provider: Box<dyn CatalogProvider>,
    state: CalendarState,
    base: NormalizedCatalog,
    filters: FilterState,
    view: Vec<MonthGroup>,
    generation: u64,
}

impl ReleaseCalendar {
    /// Create a calendar in the initial `Loading` state.
    pub fn new(provider: Box<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            state: CalendarState::Loading,
            base: NormalizedCatalog::default(),
            filters: FilterState::default(),
            view: Vec::new(),
            generation: 0,
        }
    }

    /// Run a full refresh cycle against the current wall clock.
    pub async fn refresh(&mut self) -> &CalendarState {
        self.refresh_at(Utc::now()).await
    }

    /// Run a full refresh cycle against an explicit reference instant.
    pub async fn refresh_at(&mut self, now: DateTime<Utc>) -> &CalendarState {
        let ticket = self.begin_refresh();
        let result = fetch_snapshot(self.provider.as_ref()).await;
        self.apply_refresh(ticket, result, now);
        &self.state
    }

    /// Start a refresh: bump the generation and enter `Loading`.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.state = CalendarState::Loading;
        debug!(generation = self.generation, "calendar refresh started");
        RefreshTicket {
            generation: self.generation,
        }
    }

    /// Apply a completed fetch to state.
    ///
    /// Returns `false` when the ticket is stale (a newer refresh began while
    /// this fetch was in flight); stale results are discarded untouched.
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<CatalogSnapshot, CatalogError>,
        now: DateTime<Utc>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale refresh result"
            );
            return false;
        }

        match result {
            Ok(snapshot) => {
                let today = local_midnight(now);
                self.base = normalize(&snapshot.movies, &snapshot.series, today, now);
                self.recompute_view();
                self.state = CalendarState::Ready;
                info!(
                    movies = self.base.movies.len(),
                    series = self.base.series.len(),
                    genres = self.base.genres.len(),
                    "release calendar refreshed"
                );
            }
            Err(catalog_error) => {
                error!(%catalog_error, "release calendar refresh failed");
                self.base = NormalizedCatalog::default();
                self.view.clear();
                self.state = CalendarState::Error {
                    message: catalog_error.to_string(),
                };
            }
        }

        true
    }

    /// Replace the active filters and, when `Ready`, recompute the view.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        if self.state.is_ready() {
            self.recompute_view();
        }
    }

    /// Restore the no-op filter state.
    pub fn reset_filters(&mut self) {
        self.set_filters(FilterState::default());
    }

    fn recompute_view(&mut self) {
        let (movies, series) = apply_filters(&self.base.movies, &self.base.series, &self.filters);
        self.view = combine_and_group(&movies, &series);
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    /// The filtered, month-grouped timeline. Empty is a valid `Ready` state.
    pub fn view(&self) -> &[MonthGroup] {
        &self.view
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Distinct genres of the current base, for filter UI population.
    pub fn available_genres(&self) -> impl Iterator<Item = &str> {
        self.base.genres.iter().map(String::as_str)
    }
}

/// Midnight at the start of the current local day, expressed in UTC.
///
/// Falls back to the instant itself in the pathological case of a local
/// midnight skipped by a DST transition.
fn local_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    let local_day = now.with_timezone(&Local).date_naive();
    match local_day.and_time(NaiveTime::MIN).and_local_timezone(Local) {
        LocalResult::Single(midnight) | LocalResult::Ambiguous(midnight, _) => {
            midnight.with_timezone(&Utc)
        }
        LocalResult::None => now,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::TimeZone;

    use super::*;
    use crate::calendar::types::{ContentType, ContentTypeFilter};
    use crate::catalog::providers::{DemoCatalogProvider, MockCatalogProvider};

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 6, 12, 0, 0).unwrap()
    }

    fn demo_calendar() -> ReleaseCalendar {
        ReleaseCalendar::new(Box::new(DemoCatalogProvider::anchored(reference())))
    }

    #[test]
    fn test_initial_state_is_loading() {
        let calendar = demo_calendar();
        assert_eq!(calendar.state(), &CalendarState::Loading);
        assert!(calendar.view().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_reaches_ready_with_grouped_view() {
        let mut calendar = demo_calendar();
        calendar.refresh_at(reference()).await;

        assert!(calendar.state().is_ready());
        assert!(!calendar.view().is_empty());

        let total: usize = calendar.view().iter().map(|g| g.entries.len()).sum();
        // 4 upcoming movies + 3 series with future episodes in the demo data.
        assert_eq!(total, 7);

        let genres: Vec<&str> = calendar.available_genres().collect();
        assert!(genres.contains(&"Sci-Fi"));
        assert!(!genres.contains(&"Comedy")); // fully-aired series dropped
    }

    #[tokio::test]
    async fn test_fetch_failure_enters_error_state() {
        let provider = MockCatalogProvider {
            fail_movies: true,
            ..Default::default()
        };
        let mut calendar = ReleaseCalendar::new(Box::new(provider));
        calendar.refresh_at(reference()).await;

        assert!(matches!(calendar.state(), CalendarState::Error { .. }));
        assert!(calendar.view().is_empty());
        assert_eq!(calendar.available_genres().count(), 0);
    }

    #[tokio::test]
    async fn test_stale_refresh_result_discarded() {
        let mut calendar = demo_calendar();
        let provider = DemoCatalogProvider::anchored(reference());
        let snapshot = fetch_snapshot(&provider).await.unwrap();

        let first = calendar.begin_refresh();
        let second = calendar.begin_refresh();

        assert!(!calendar.apply_refresh(first, Ok(snapshot.clone()), reference()));
        assert_eq!(calendar.state(), &CalendarState::Loading);

        assert!(calendar.apply_refresh(second, Ok(snapshot), reference()));
        assert!(calendar.state().is_ready());
    }

    #[tokio::test]
    async fn test_content_type_filter_removes_series_entries() {
        let mut calendar = demo_calendar();
        calendar.refresh_at(reference()).await;

        calendar.set_filters(FilterState {
            content_type: ContentTypeFilter::Movies,
            ..FilterState::default()
        });

        assert!(calendar.state().is_ready());
        assert!(!calendar.view().is_empty());
        for group in calendar.view() {
            for entry in &group.entries {
                assert_eq!(entry.content_type, ContentType::Movie);
            }
        }
    }

    #[tokio::test]
    async fn test_empty_result_is_ready_not_error() {
        let mut calendar = demo_calendar();
        calendar.refresh_at(reference()).await;

        calendar.set_filters(FilterState {
            search_query: "no such title anywhere".to_string(),
            ..FilterState::default()
        });

        assert!(calendar.state().is_ready());
        assert!(calendar.view().is_empty());

        calendar.reset_filters();
        assert!(!calendar.view().is_empty());
    }

    #[tokio::test]
    async fn test_filter_change_in_error_state_keeps_error() {
        let provider = MockCatalogProvider {
            fail_series: true,
            ..Default::default()
        };
        let mut calendar = ReleaseCalendar::new(Box::new(provider));
        calendar.refresh_at(reference()).await;

        calendar.set_filters(FilterState {
            selected_genres: BTreeSet::from(["Drama".to_string()]),
            ..FilterState::default()
        });

        assert!(matches!(calendar.state(), CalendarState::Error { .. }));
        assert!(calendar.view().is_empty());
    }

    #[test]
    fn test_local_midnight_precedes_now() {
        let now = Utc::now();
        let midnight = local_midnight(now);

        assert!(midnight <= now);
        assert_eq!(
            midnight.with_timezone(&Local).time(),
            NaiveTime::MIN
        );
    }
}
