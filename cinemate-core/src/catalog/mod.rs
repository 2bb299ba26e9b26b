//! Catalog API access: wire types, providers, and snapshot fetching.

pub mod errors;
pub mod fetch;
pub mod providers;
pub mod types;

pub use errors::CatalogError;
pub use fetch::fetch_snapshot;
pub use providers::{CatalogProvider, DemoCatalogProvider, HttpCatalogProvider};
pub use types::{
    ApiSession, CatalogSnapshot, EpisodeRecord, MediaId, MovieRecord, SeasonRecord, SeriesRecord,
    SeriesWithSeasons,
};
