//! # Product Sources
//!
//! Where the product list comes from. The storefront talks to
//! [`ProductSource`]; production uses [`HttpProductSource`], tests use
//! [`StaticProductSource`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shoez_core::CatalogProduct;
use tracing::{debug, warn};
use url::Url;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

/// Longest slice of an error body kept for logs.
const BODY_PREVIEW_CHARS: usize = 160;

/// A supplier of the full product list.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> CatalogResult<Vec<CatalogProduct>>;
}

// =============================================================================
// HTTP
// =============================================================================

/// GETs the product list from one endpoint.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    endpoint: Url,
}

impl HttpProductSource {
    /// Source with a whole-request timeout.
    pub fn new(endpoint: Url, timeout: Duration) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::ClientBuild(e.to_string()))?;
        Ok(HttpProductSource { client, endpoint })
    }

    /// Source for a validated `[catalog]` section.
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        let endpoint = config.validate()?;
        Self::new(endpoint, config.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<CatalogProduct>> {
        debug!(endpoint = %self.endpoint, "Fetching product list");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        parse_products(&body)
    }
}

/// Decodes a product list body.
///
/// A well-formed JSON body that is not an array holds no products. Records
/// are decoded one by one; a record that cannot be read is skipped.
pub(crate) fn parse_products(body: &[u8]) -> CatalogResult<Vec<CatalogProduct>> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| CatalogError::RemoteFetchFailure(format!("invalid JSON payload: {e}")))?;

    let serde_json::Value::Array(records) = value else {
        warn!("Product list is not a JSON array, treating as empty");
        return Ok(Vec::new());
    };

    let total = records.len();
    let products: Vec<CatalogProduct> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable product record");
                None
            }
        })
        .collect();

    if products.len() < total {
        debug!(kept = products.len(), total, "Product list partially decoded");
    }

    Ok(products)
}

fn status_error(status: StatusCode, body: &[u8]) -> CatalogError {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview: String = compact.chars().take(BODY_PREVIEW_CHARS).collect();

    CatalogError::UnexpectedStatus {
        status: status.as_u16(),
        body: preview,
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// Serves a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticProductSource {
    products: Vec<CatalogProduct>,
}

impl StaticProductSource {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        StaticProductSource { products }
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<CatalogProduct>> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    //! One-shot HTTP responder on a loopback port.

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single response, returning the URL to request.
    pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/api/products")
    }
}

#[cfg(test)]
mod tests {
    use super::test_server::serve_once;
    use super::*;
    use shoez_core::CatalogProductId;

    fn source(url: &str) -> HttpProductSource {
        HttpProductSource::new(Url::parse(url).unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetches_product_array() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":1,"productName":"Air Runner","price":4500,"image":"/a.png","category":"sneakers"},
                {"id":2,"productName":"Beach Flip","image":"/b.png","category":"sandals"}]"#,
        )
        .await;

        let products = source(&url).fetch_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].product_name, "Air Runner");
        assert_eq!(products[1].category, "sandals");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let url = serve_once("503 Service Unavailable", r#"{"error":"down"}"#).await;

        let err = source(&url).fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::UnexpectedStatus { status: 503, .. }));
        assert!(err.is_fetch_error());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(&format!("http://{addr}/api/products"))
            .fetch_products()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::RemoteFetchFailure(_)));
    }

    #[test]
    fn test_parse_products() {
        assert!(parse_products(b"{\"products\":[]}").unwrap().is_empty());
        assert!(parse_products(b"[]").unwrap().is_empty());
        assert!(matches!(
            parse_products(b"<html>"),
            Err(CatalogError::RemoteFetchFailure(_))
        ));
    }

    #[test]
    fn test_parse_products_keeps_mixed_type_records() {
        let body = br#"[
            {"id":1,"productName":"Air Runner","price":4500,"image":"/a.png","category":"sneakers"},
            {"id":"p-2","productName":null,"price":"19.99","image":"/b.png","category":"sandals"},
            "not a record",
            null,
            {"productName":"Trail Boot","category":"boots"}
        ]"#;

        let products = parse_products(body).unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].product_name, "Air Runner");
        assert_eq!(products[1].id, Some(CatalogProductId::Text("p-2".into())));
        assert_eq!(products[1].product_name, "");
        assert_eq!(products[1].category, "sandals");
        assert_eq!(products[2].product_name, "Trail Boot");
    }

    #[test]
    fn test_status_error_preview() {
        let err = status_error(StatusCode::NOT_FOUND, b"  not\n  found ");
        assert!(matches!(
            err,
            CatalogError::UnexpectedStatus { status: 404, ref body } if body == "not found"
        ));
    }
}
