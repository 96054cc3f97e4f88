//! # Product Catalog
//!
//! Search and related-products over a [`ProductSource`].
//!
//! ## Failure Handling
//! ```text
//! cached? ──yes──────────────────────────────► filter ──► results
//!   │no
//! fetch ──► Ok(list) ──► cache ───────────────► filter ──► results
//!   │
//!   ├──► UnexpectedStatus       ──► error! log ──► []
//!   └──► RemoteFetchFailure     ──► error! log ──► []
//! ```
//!
//! The first successful fetch is kept for the life of the catalog (clones
//! share it) until [`ProductCatalog::invalidate`]. A failed fetch is not
//! cached, so the next query tries again; nothing is retried within a call.

use std::sync::{Arc, RwLock};

use shoez_core::search::{related_products, search_products};
use shoez_core::CatalogProduct;
use tracing::{debug, error};

use crate::source::ProductSource;

#[derive(Clone)]
pub struct ProductCatalog {
    source: Arc<dyn ProductSource>,
    cache: Arc<RwLock<Option<Arc<Vec<CatalogProduct>>>>>,
}

impl ProductCatalog {
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        ProductCatalog {
            source,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Drops the cached list; the next query fetches again.
    pub fn invalidate(&self) {
        let mut cache = self.cache.write().unwrap_or_else(|p| p.into_inner());
        if cache.take().is_some() {
            debug!("Product list cache cleared");
        }
    }

    fn cached(&self) -> Option<Arc<Vec<CatalogProduct>>> {
        self.cache
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    /// The full list, or nothing if the fetch failed.
    pub async fn all_products(&self) -> Vec<CatalogProduct> {
        Vec::clone(&*self.load().await)
    }

    async fn load(&self) -> Arc<Vec<CatalogProduct>> {
        if let Some(products) = self.cached() {
            return products;
        }

        match self.source.fetch_products().await {
            Ok(products) => {
                debug!(count = products.len(), "Product list fetched");
                let products = Arc::new(products);
                *self.cache.write().unwrap_or_else(|p| p.into_inner()) = Some(products.clone());
                products
            }
            Err(e) => {
                error!(error = %e, "Error fetching products");
                Arc::new(Vec::new())
            }
        }
    }

    /// Navbar search. A blank query returns nothing without fetching.
    pub async fn search(&self, query: &str) -> Vec<CatalogProduct> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let products = self.load().await;
        let results = search_products(&products, query);
        debug!(query = %query, matches = results.len(), "Product search");
        results
    }

    /// Products sharing `category`.
    pub async fn related(&self, category: &str) -> Vec<CatalogProduct> {
        let products = self.load().await;
        related_products(&products, category)
    }
}

impl std::fmt::Debug for ProductCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCatalog").finish_non_exhaustive()
    }
}
