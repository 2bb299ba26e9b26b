//! Centralized configuration for CineMate.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

/// Central configuration for all CineMate components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct CineMateConfig {
    pub catalog: CatalogConfig,
    pub calendar: CalendarConfig,
}

/// Catalog API client configuration.
///
/// Controls the remote endpoint, HTTP timeouts, and identification used
/// when fetching movies and series from the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog REST API
    pub base_url: String,
    /// HTTP request timeout for catalog calls
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(30),
            user_agent: "cinemate/0.1.0",
        }
    }
}

/// Release calendar behavior configuration.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Whether to use the deterministic demo catalog instead of the remote API
    pub use_demo_catalog: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            use_demo_catalog: false,
        }
    }
}

impl CineMateConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("CINEMATE_API_URL") {
            config.catalog.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("CINEMATE_HTTP_TIMEOUT") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.catalog.request_timeout = Duration::from_secs(seconds);
            }
        }

        if let Ok(demo) = std::env::var("CINEMATE_DEMO_CATALOG") {
            config.calendar.use_demo_catalog = demo.parse().unwrap_or(false);
        }

        config
    }

    /// Creates a configuration optimized for testing.
    pub fn for_testing() -> Self {
        Self {
            calendar: CalendarConfig {
                use_demo_catalog: true,
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = CineMateConfig::default();

        assert_eq!(config.catalog.base_url, "http://localhost:8080");
        assert_eq!(config.catalog.request_timeout, Duration::from_secs(30));
        assert_eq!(config.catalog.user_agent, "cinemate/0.1.0");
        assert!(!config.calendar.use_demo_catalog);
    }

    #[test]
    fn test_testing_preset() {
        let config = CineMateConfig::for_testing();
        assert!(config.calendar.use_demo_catalog);
        assert_eq!(config.catalog.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("CINEMATE_API_URL", "https://catalog.example.net");
            std::env::set_var("CINEMATE_HTTP_TIMEOUT", "60");
            std::env::set_var("CINEMATE_DEMO_CATALOG", "true");
        }

        let config = CineMateConfig::from_env();

        assert_eq!(config.catalog.base_url, "https://catalog.example.net");
        assert_eq!(config.catalog.request_timeout, Duration::from_secs(60));
        assert!(config.calendar.use_demo_catalog);

        // Cleanup
        unsafe {
            std::env::remove_var("CINEMATE_API_URL");
            std::env::remove_var("CINEMATE_HTTP_TIMEOUT");
            std::env::remove_var("CINEMATE_DEMO_CATALOG");
        }
    }
}
