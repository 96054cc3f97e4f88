//! # Admin State
//!
//! Dashboard records. Kept in memory only; a restart starts from an empty
//! catalog.

use std::sync::Mutex;

use shoez_core::admin::AdminCatalog;

#[derive(Debug, Default)]
pub struct AdminState {
    catalog: Mutex<AdminCatalog>,
}

impl AdminState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AdminCatalog) -> R,
    {
        let catalog = self.catalog.lock().unwrap_or_else(|p| p.into_inner());
        f(&catalog)
    }

    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AdminCatalog) -> R,
    {
        let mut catalog = self.catalog.lock().unwrap_or_else(|p| p.into_inner());
        f(&mut catalog)
    }
}
