use serde::{Deserialize, Serialize};

use crate::domain::a003_recommendation::aggregate::DEFAULT_TOP_N;
use crate::shared::pagination::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_CATALOG_BASE: &str = "http://localhost:3000";
pub const DEFAULT_SEND_ENDPOINT: &str = "/api/send";

/// Settings of the browser app, injected into the client and the views.
///
/// Addresses may be overridden when the frontend is built:
/// `CATALOG_API_BASE=https://reco.example trunk build --release`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base address of the recommendation service
    pub api_base: String,
    /// Public address of this app, used in emailed catalog links
    pub catalog_base: String,
    /// Endpoint of our own backend that sends the subscription email
    pub send_endpoint: String,
    pub top_n: usize,
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            catalog_base: DEFAULT_CATALOG_BASE.to_string(),
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_string(),
            top_n: DEFAULT_TOP_N,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    /// Defaults with the compile-time overrides applied
    pub fn from_build_env() -> Self {
        Self::with_overrides(option_env!("CATALOG_API_BASE"), option_env!("CATALOG_LINK_BASE"))
    }

    pub fn with_overrides(api_base: Option<&str>, catalog_base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|s| !s.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(base) = catalog_base.map(str::trim).filter(|s| !s.is_empty()) {
            config.catalog_base = base.trim_end_matches('/').to_string();
        }
        config
    }
}
