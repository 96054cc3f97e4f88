//! # Catalog State

use shoez_catalog::ProductCatalog;

/// The remote product catalog. The list is fetched once and shared.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: ProductCatalog,
}

impl CatalogState {
    pub fn new(catalog: ProductCatalog) -> Self {
        CatalogState { catalog }
    }

    pub fn inner(&self) -> &ProductCatalog {
        &self.catalog
    }
}
