//! Service lifecycle tests: error states, partial degradation, stale fetches.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use cinemate_core::calendar::{CalendarState, ReleaseCalendar};
use cinemate_core::catalog::{MediaId, fetch_snapshot};

use crate::support::ScriptedCatalog;

fn reference() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 6, 12, 0, 0).unwrap()
}

fn healthy_catalog() -> ScriptedCatalog {
    let reference = reference();
    ScriptedCatalog::default()
        .with_movie(1, "Dark Horizon", "Action, Sci-Fi", 6, reference)
        .with_movie(2, "Glass River", "Drama", 1, reference)
        .with_series(10, "Echoes", "Drama, Mystery", &[-7, 2, 9], reference)
        .with_series(11, "Northlight", "Crime, Thriller", &[15], reference)
}

#[tokio::test]
async fn top_level_fetch_failure_is_fatal_and_renders_nothing() {
    let provider = ScriptedCatalog {
        fail_movies: true,
        ..healthy_catalog()
    };

    let mut calendar = ReleaseCalendar::new(Box::new(provider));
    calendar.refresh_at(reference()).await;

    match calendar.state() {
        CalendarState::Error { message } => {
            assert!(message.contains("503"));
        }
        other => panic!("expected error state, got {other:?}"),
    }
    assert!(calendar.view().is_empty());
    assert_eq!(calendar.available_genres().count(), 0);
}

#[tokio::test]
async fn season_fetch_failure_degrades_only_that_series() {
    let provider = ScriptedCatalog {
        failing_seasons: HashSet::from([MediaId::from(10)]),
        ..healthy_catalog()
    };

    let mut calendar = ReleaseCalendar::new(Box::new(provider));
    calendar.refresh_at(reference()).await;

    assert!(calendar.state().is_ready());

    let titles: Vec<&str> = calendar
        .view()
        .iter()
        .flat_map(|g| g.entries.iter().map(|e| e.title.as_str()))
        .collect();

    // "Echoes" lost its seasons and therefore has no known future episode;
    // everything else is unaffected.
    assert!(!titles.contains(&"Echoes"));
    assert!(titles.contains(&"Northlight"));
    assert!(titles.contains(&"Dark Horizon"));
    assert!(titles.contains(&"Glass River"));
}

#[tokio::test]
async fn stale_fetch_result_does_not_clobber_newer_refresh() {
    let mut calendar = ReleaseCalendar::new(Box::new(healthy_catalog()));

    let stale_snapshot = fetch_snapshot(&healthy_catalog()).await.unwrap();
    let fresh_snapshot = stale_snapshot.clone();

    let stale_ticket = calendar.begin_refresh();
    let fresh_ticket = calendar.begin_refresh();

    assert!(!calendar.apply_refresh(stale_ticket, Ok(stale_snapshot), reference()));
    assert_eq!(calendar.state(), &CalendarState::Loading);
    assert!(calendar.view().is_empty());

    assert!(calendar.apply_refresh(fresh_ticket, Ok(fresh_snapshot), reference()));
    assert!(calendar.state().is_ready());
    assert!(!calendar.view().is_empty());
}

#[tokio::test]
async fn refresh_replaces_base_wholesale() {
    let reference = reference();
    let mut calendar = ReleaseCalendar::new(Box::new(healthy_catalog()));
    calendar.refresh_at(reference).await;
    let first_total: usize = calendar.view().iter().map(|g| g.entries.len()).sum();
    assert_eq!(first_total, 4);

    // A second refresh against the same provider lands on identical state,
    // not an accumulation of both cycles.
    calendar.refresh_at(reference).await;
    let second_total: usize = calendar.view().iter().map(|g| g.entries.len()).sum();
    assert_eq!(second_total, first_total);
}
