//! # Storefront Commands
//!
//! Everything the UI shell can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── cart.rs      ◄─── Product-page cart writes
//! ├── checkout.rs  ◄─── Mount, vouchers, proceed to payment
//! ├── products.rs  ◄─── Navbar search, related products
//! ├── rating.rs    ◄─── Review stars
//! ├── language.rs  ◄─── Language switcher, lookups
//! ├── admin.rs     ◄─── Dashboard forms, bulk import, stock chart
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI shell                                                               │
//! │     │  apply_voucher({ code: "DISCOUNT10" })                            │
//! │     ▼                                                                   │
//! │  pub fn apply_voucher(                                                  │
//! │      checkout: &CheckoutState,   ◄── only the state it needs           │
//! │      code: &str,                                                        │
//! │  ) -> ApiResult<CheckoutView>                                           │
//! │     │                                                                   │
//! │     ▼  (serde, camelCase)                                               │
//! │  UI shell receives CheckoutView or { code, message }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod language;
pub mod products;
pub mod rating;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use shoez_catalog::{ProductCatalog, StaticProductSource};
    use shoez_core::CatalogProduct;
    use shoez_db::{Database, DbConfig};

    use crate::state::{CatalogState, DbState};

    pub async fn db_state() -> DbState {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        DbState::new(db)
    }

    pub fn catalog_product(name: &str, category: &str) -> CatalogProduct {
        CatalogProduct {
            id: None,
            product_name: name.to_string(),
            description: None,
            price: None,
            image: format!("/img/{}.png", name.to_lowercase().replace(' ', "-")),
            category: category.to_string(),
        }
    }

    pub fn catalog_state(products: Vec<CatalogProduct>) -> CatalogState {
        CatalogState::new(ProductCatalog::new(Arc::new(StaticProductSource::new(
            products,
        ))))
    }
}
