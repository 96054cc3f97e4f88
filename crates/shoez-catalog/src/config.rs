//! # Catalog Configuration
//!
//! The `[catalog]` section of `storefront.toml`:
//!
//! ```toml
//! [catalog]
//! endpoint = "https://template-03-api.vercel.app/api/products"
//! timeout_secs = 10
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Products endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://template-03-api.vercel.app/api/products";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL answering GET with a JSON array of products.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    /// Checks the section and returns the parsed endpoint.
    pub fn validate(&self) -> CatalogResult<Url> {
        if self.timeout_secs == 0 {
            return Err(CatalogError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        let url = Url::parse(&self.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidEndpoint(format!(
                "endpoint must use http or https, got: {}",
                self.endpoint
            )));
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
