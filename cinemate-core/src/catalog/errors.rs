//! Error types for catalog fetching.

use thiserror::Error;

/// Errors that can occur while fetching from the catalog API.
///
/// A top-level movies or series fetch failing with any of these is fatal to
/// the refresh cycle; a per-series season fetch failing is recovered locally
/// by the caller.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network-level failure issuing a request.
    #[error("Request to {url} failed: {reason}")]
    Request {
        /// The URL that was requested
        url: String,
        /// The reason for the failure
        reason: String,
    },

    /// The catalog answered with a non-success HTTP status.
    #[error("Catalog returned HTTP {status} for {url}")]
    Status {
        /// The URL that was requested
        url: String,
        /// The HTTP status code received
        status: u16,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Failed to decode response from {url}: {reason}")]
    Decode {
        /// The URL whose response failed to decode
        url: String,
        /// The reason for the decode failure
        reason: String,
    },

    /// The configured base URL is not a valid URL.
    #[error("Invalid catalog base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The offending base URL
        url: String,
        /// The reason it was rejected
        reason: String,
    },
}
