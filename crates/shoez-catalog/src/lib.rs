//! # shoez-catalog: Remote Product Catalog
//!
//! Fetches the storefront's product list over HTTP and answers navbar search
//! and related-products queries from it.
//!
//! ## Module Organization
//!
//! - [`config`] - `[catalog]` configuration section
//! - [`source`] - `ProductSource` trait, HTTP and static implementations
//! - [`catalog`] - `ProductCatalog`, search and related products
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shoez_catalog::{CatalogConfig, HttpProductSource, ProductCatalog};
//!
//! let source = HttpProductSource::from_config(&CatalogConfig::default())?;
//! let catalog = ProductCatalog::new(Arc::new(source));
//! let hits = catalog.search("runner").await;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod source;

pub use catalog::ProductCatalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use source::{HttpProductSource, ProductSource, StaticProductSource};
