//! CineMate Core - Upcoming-release aggregation and calendar grouping
//!
//! This crate provides the building blocks for CineMate's release calendar:
//! catalog API access, normalization of movies and series into one upcoming
//! working set, multi-predicate filtering, month-bucketed grouping, and the
//! calendar service that ties the stages together.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use calendar::{CalendarState, FilterState, MonthGroup, ReleaseCalendar};
pub use catalog::{ApiSession, CatalogError, CatalogProvider, DemoCatalogProvider, HttpCatalogProvider};
pub use config::CineMateConfig;

/// Core errors that can bubble up from any CineMate subsystem.
#[derive(Debug, thiserror::Error)]
pub enum CineMateError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Calendar refresh failed: {message}")]
    Refresh { message: String },

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CineMateError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            CineMateError::Catalog(e) => match e {
                CatalogError::Request { .. } => {
                    "Could not reach the catalog service".to_string()
                }
                CatalogError::Status { status, .. } => {
                    format!("Catalog service rejected the request (HTTP {status})")
                }
                CatalogError::Decode { .. } => {
                    "Catalog service returned unreadable data".to_string()
                }
                CatalogError::InvalidBaseUrl { url, .. } => {
                    format!("'{url}' is not a valid catalog URL")
                }
            },
            CineMateError::Refresh { message } => {
                format!("Could not load the release calendar: {message}")
            }
            CineMateError::Configuration { reason } => {
                format!("Configuration error: {reason}")
            }
            CineMateError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CineMateError::Configuration { .. }
                | CineMateError::Catalog(CatalogError::InvalidBaseUrl { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, CineMateError>;
