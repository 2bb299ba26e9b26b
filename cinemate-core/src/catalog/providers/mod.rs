//! Provider implementations for catalog fetching.

use async_trait::async_trait;

use crate::catalog::errors::CatalogError;
use crate::catalog::types::{MediaId, MovieRecord, SeasonRecord, SeriesRecord};

pub mod demo;
pub mod http;
#[cfg(test)]
pub mod mock;

pub use demo::DemoCatalogProvider;
pub use http::HttpCatalogProvider;
#[cfg(test)]
pub use mock::MockCatalogProvider;

/// Trait for catalog data providers.
///
/// Implementations retrieve raw catalog records through different backends
/// (the remote REST API, deterministic demo data, mock providers for testing).
#[async_trait]
pub trait CatalogProvider: Send + Sync + std::fmt::Debug {
    /// Fetch all movies.
    ///
    /// # Errors
    /// - `CatalogError::Request` - Network connectivity issues
    /// - `CatalogError::Status` - Catalog answered with a non-success status
    /// - `CatalogError::Decode` - Response body was not the expected shape
    async fn fetch_movies(&self) -> Result<Vec<MovieRecord>, CatalogError>;

    /// Fetch all series (base fields only, no seasons).
    ///
    /// # Errors
    /// - `CatalogError::Request` - Network connectivity issues
    /// - `CatalogError::Status` - Catalog answered with a non-success status
    /// - `CatalogError::Decode` - Response body was not the expected shape
    async fn fetch_series(&self) -> Result<Vec<SeriesRecord>, CatalogError>;

    /// Fetch the seasons (with nested episodes) of one series.
    ///
    /// # Errors
    /// - `CatalogError::Request` - Network connectivity issues
    /// - `CatalogError::Status` - Catalog answered with a non-success status
    /// - `CatalogError::Decode` - Response body was not the expected shape
    async fn fetch_seasons(&self, series_id: &MediaId) -> Result<Vec<SeasonRecord>, CatalogError>;
}
