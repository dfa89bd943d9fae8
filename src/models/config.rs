use serde::Deserialize;

use crate::domain::types::ProductSort;

/// Configuration options for the catalog service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// Path to the SQLite catalog database.
    pub database_url: String,
    /// Open a read-write handle for listing endpoints. When disabled every
    /// endpoint runs on the read-only handle.
    #[serde(default = "default_privileged_access")]
    pub privileged_access: bool,
    /// Default ordering of product listings.
    #[serde(default)]
    pub product_sort: ProductSort,
    /// Origins allowed to call the API from a browser.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_privileged_access() -> bool {
    true
}
