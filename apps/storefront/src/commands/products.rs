//! # Product Commands
//!
//! Navbar search and the related-products strip. Both filter the product
//! list fetched on first use; a failed fetch shows up as no results.

use shoez_core::CatalogProduct;
use tracing::debug;

use crate::state::CatalogState;

pub async fn search_products(catalog: &CatalogState, query: &str) -> Vec<CatalogProduct> {
    debug!(query = %query, "search_products command");
    catalog.inner().search(query).await
}

/// Products in `category`, for the product page.
pub async fn related_products(catalog: &CatalogState, category: &str) -> Vec<CatalogProduct> {
    debug!(category = %category, "related_products command");
    catalog.inner().related(category).await
}

/// Forgets the fetched list so the next query loads it again.
pub fn refresh_products(catalog: &CatalogState) {
    debug!("refresh_products command");
    catalog.inner().invalidate();
}
