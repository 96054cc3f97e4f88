//! # Catalog Error Types

use thiserror::Error;

/// Remote catalog errors.
///
/// Only configuration errors reach callers of
/// [`ProductCatalog`](crate::ProductCatalog); fetch errors are logged there
/// and turned into an empty product list.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Endpoint is not an absolute http(s) URL.
    #[error("Invalid catalog endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration value out of range.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// The HTTP client could not be built.
    #[error("HTTP client setup failed: {0}")]
    ClientBuild(String),

    /// The endpoint answered with a non-2xx status.
    #[error("Catalog responded with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Transport, timeout or decode failure.
    #[error("Catalog fetch failed: {0}")]
    RemoteFetchFailure(String),
}

impl CatalogError {
    /// Whether this came from talking to the endpoint (as opposed to setup).
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            CatalogError::UnexpectedStatus { .. } | CatalogError::RemoteFetchFailure(_)
        )
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::RemoteFetchFailure(format!("timed out: {err}"))
        } else {
            CatalogError::RemoteFetchFailure(err.to_string())
        }
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidEndpoint(err.to_string())
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
