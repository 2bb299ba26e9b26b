//! Wire-level data types for the catalog REST API.
//!
//! Records mirror the JSON shapes served by the catalog backend. Optional
//! fields are tolerated as absent or null; timestamps are accepted as
//! ISO-8601 strings or epoch milliseconds.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque catalog identifier.
///
/// The backend serializes ids as either JSON strings or numbers depending
/// on the entity; both forms deserialize to the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MediaId(String);

impl MediaId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the textual form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MediaId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for MediaId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for MediaId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(i64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(MediaId(n.to_string())),
            Repr::Text(s) => Ok(MediaId(s)),
        }
    }
}

/// Explicitly injected API credentials.
///
/// Handed to the HTTP provider at construction time; never read from
/// ambient global state.
#[derive(Debug, Clone, Default)]
pub struct ApiSession {
    token: Option<String>,
}

impl ApiSession {
    /// Session without credentials, for catalogs that allow anonymous reads.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Session carrying a bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Bearer token to attach to requests, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Movie record as served by `GET /api/movies`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: MediaId,
    pub title: String,
    /// Comma-separated genre string, e.g. "Action, Sci-Fi"
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "flexible_date::deserialize")]
    pub release_date: Option<DateTime<Utc>>,
    /// Runtime in minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub release_year: Option<u16>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Series record as served by `GET /api/series` (base fields only).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRecord {
    pub id: MediaId,
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Season with nested episodes, from `GET /api/series/{id}/seasons`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRecord {
    pub season_number: u32,
    #[serde(default)]
    pub episodes: Vec<EpisodeRecord>,
}

/// Single episode within a season.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRecord {
    pub episode_number: u32,
    #[serde(default, deserialize_with = "flexible_date::deserialize")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Series joined with its fetched seasons.
///
/// A series whose season fetch failed carries an empty season list.
#[derive(Debug, Clone)]
pub struct SeriesWithSeasons {
    pub series: SeriesRecord,
    pub seasons: Vec<SeasonRecord>,
}

/// One complete fetch cycle's worth of raw catalog data.
///
/// Replaced wholesale on every successful refresh; never patched in place.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub movies: Vec<MovieRecord>,
    pub series: Vec<SeriesWithSeasons>,
}

/// Tolerant timestamp deserialization.
///
/// The backend emits dates as RFC 3339 strings, bare `YYYY-MM-DD` dates, or
/// epoch milliseconds depending on the entity. Unparseable values map to
/// `None` so a malformed date excludes one item from date-based computation
/// instead of failing the whole response.
pub(crate) mod flexible_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Float(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        Ok(raw.and_then(parse))
    }

    fn parse(raw: Raw) -> Option<DateTime<Utc>> {
        match raw {
            Raw::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
            Raw::Float(ms) => Utc.timestamp_millis_opt(ms as i64).single(),
            Raw::Text(s) => parse_text(s.trim()),
        }
    }

    fn parse_text(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Utc.from_utc_datetime(&dt));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
        }
        None
    }
}
