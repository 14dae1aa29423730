//! Build-time client configuration.
//!
//! The API base address is fixed once when the transport is constructed and
//! applies to every request issued through it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Static configuration shared by the transport and the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_base_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl PortalConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `PORTAL_API_BASE_URL`: default `http://127.0.0.1:8000/api`
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("PORTAL_API_BASE_URL"))
    }

    fn with_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url }
    }
}
