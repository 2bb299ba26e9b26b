//! Merged timeline assembly and month bucketing.

use chrono::{DateTime, Utc};

use super::types::{CalendarEntry, MonthGroup, UpcomingMovie, UpcomingSeries};

/// Human month+year label used as the bucket key, e.g. "August 2025".
pub fn month_label(date: DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}

/// Merge both filtered collections into one chronological timeline and
/// bucket it by calendar month.
///
/// Bucket order follows the sorted entry sequence, so labels emerge in
/// ascending chronological order without a separate key sort. Entries
/// without an effective date are silently excluded; upstream filtering
/// should make that impossible, but grouping does not assume it.
pub fn combine_and_group(
    movies: &[UpcomingMovie],
    series: &[UpcomingSeries],
) -> Vec<MonthGroup> {
    let mut entries: Vec<CalendarEntry> = movies
        .iter()
        .map(CalendarEntry::from_movie)
        .chain(series.iter().map(CalendarEntry::from_series))
        .collect();
    entries.sort_by_key(|entry| entry.effective_date);

    group_entries(entries)
}

/// Bucket a pre-sorted entry sequence by month label.
pub fn group_entries(entries: Vec<CalendarEntry>) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();

    for entry in entries {
        let Some(date) = entry.effective_date else {
            continue;
        };
        let label = month_label(date);
        match groups.last_mut() {
            Some(group) if group.label == label => group.entries.push(entry),
            _ => groups.push(MonthGroup {
                label,
                entries: vec![entry],
            }),
        }
    }

    groups
}
