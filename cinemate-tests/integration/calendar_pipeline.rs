//! End-to-end pipeline tests: demo catalog through the release calendar.

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use cinemate_core::calendar::{ContentType, ContentTypeFilter, FilterState, ReleaseCalendar};
use cinemate_core::catalog::DemoCatalogProvider;

fn reference() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 6, 12, 0, 0).unwrap()
}

async fn ready_calendar() -> ReleaseCalendar {
    let mut calendar =
        ReleaseCalendar::new(Box::new(DemoCatalogProvider::anchored(reference())));
    calendar.refresh_at(reference()).await;
    assert!(calendar.state().is_ready());
    calendar
}

#[tokio::test]
async fn full_pipeline_produces_chronological_month_groups() {
    let calendar = ready_calendar().await;
    let view = calendar.view();

    assert!(!view.is_empty());

    // Within each group the entries are ascending by effective date, and
    // the first entries of successive groups are ascending too.
    let mut previous_group_head = None;
    for group in view {
        assert!(!group.entries.is_empty());
        for pair in group.entries.windows(2) {
            assert!(pair[0].effective_date <= pair[1].effective_date);
        }
        let head = group.entries[0].effective_date;
        if let Some(previous) = previous_group_head {
            assert!(previous <= head);
        }
        previous_group_head = Some(head);
    }
}

#[tokio::test]
async fn grouping_preserves_filtered_item_count() {
    let calendar = ready_calendar().await;

    let total: usize = calendar.view().iter().map(|g| g.entries.len()).sum();
    // Demo data: 4 upcoming movies, 3 series with future episodes.
    assert_eq!(total, 7);
}

#[tokio::test]
async fn past_and_dateless_demo_items_never_surface() {
    let calendar = ready_calendar().await;

    for group in calendar.view() {
        for entry in &group.entries {
            assert_ne!(entry.title, "Midnight Cartel"); // already released
            assert_ne!(entry.title, "Untitled Project"); // no date announced
            assert_ne!(entry.title, "Stand-up Nights"); // fully aired
        }
    }
}

#[tokio::test]
async fn content_type_movies_yields_zero_series_entries() {
    let mut calendar = ready_calendar().await;

    calendar.set_filters(FilterState {
        content_type: ContentTypeFilter::Movies,
        ..FilterState::default()
    });

    assert!(!calendar.view().is_empty());
    for group in calendar.view() {
        for entry in &group.entries {
            assert_eq!(entry.content_type, ContentType::Movie);
        }
    }
}

#[tokio::test]
async fn search_matches_through_genre_string() {
    let mut calendar = ready_calendar().await;

    calendar.set_filters(FilterState {
        search_query: "Thriller".to_string(),
        ..FilterState::default()
    });

    let titles: Vec<&str> = calendar
        .view()
        .iter()
        .flat_map(|g| g.entries.iter().map(|e| e.title.as_str()))
        .collect();

    // "Northlight" carries "Crime, Thriller" in its genre string; the title
    // itself does not contain the query.
    assert_eq!(titles, vec!["Northlight"]);
}

#[tokio::test]
async fn genre_filter_is_or_within_selection() {
    let mut calendar = ready_calendar().await;

    calendar.set_filters(FilterState {
        selected_genres: BTreeSet::from(["Drama".to_string(), "Comedy".to_string()]),
        ..FilterState::default()
    });

    let titles: Vec<&str> = calendar
        .view()
        .iter()
        .flat_map(|g| g.entries.iter().map(|e| e.title.as_str()))
        .collect();

    // Glass River (Drama) and Echoes (Drama, Mystery); nothing upcoming is
    // a Comedy in the demo catalog.
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Glass River"));
    assert!(titles.contains(&"Echoes"));
}

#[tokio::test]
async fn filter_round_trip_restores_full_view() {
    let mut calendar = ready_calendar().await;
    let full: usize = calendar.view().iter().map(|g| g.entries.len()).sum();

    calendar.set_filters(FilterState {
        search_query: "nothing matches this".to_string(),
        ..FilterState::default()
    });
    assert!(calendar.view().is_empty());

    calendar.reset_filters();
    let restored: usize = calendar.view().iter().map(|g| g.entries.len()).sum();
    assert_eq!(restored, full);
}
