//! # SQLite Cart Repository
//!
//! `CartRepository` over one local storage key, by default `"cart"`.
//! The stored text uses the layout in [`shoez_core::cart`], so a cart written
//! by another client of the same storage decodes the same way.

use async_trait::async_trait;
use shoez_core::cart::{decode_cart, encode_cart, CartRepository};
use shoez_core::{CartLineItem, CoreResult, CART_STORAGE_KEY};
use tracing::info;

use crate::error::DbResult;
use crate::repository::local_storage::LocalStorageRepository;

#[derive(Debug, Clone)]
pub struct SqliteCartRepository {
    storage: LocalStorageRepository,
    key: String,
}

impl SqliteCartRepository {
    pub fn new(storage: LocalStorageRepository) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    /// Repository over a non-default key.
    pub fn with_key(storage: LocalStorageRepository, key: impl Into<String>) -> Self {
        SqliteCartRepository {
            storage,
            key: key.into(),
        }
    }

    /// Stored text, undecoded.
    pub async fn raw(&self) -> DbResult<Option<String>> {
        self.storage.get(&self.key).await
    }

    /// Overwrites the stored text as-is.
    pub async fn write_raw(&self, raw: &str) -> DbResult<()> {
        self.storage.set(&self.key, raw).await
    }

    /// Empties the cart by removing its key.
    pub async fn clear(&self) -> DbResult<()> {
        self.storage.remove(&self.key).await?;
        info!(key = %self.key, "Cart cleared");
        Ok(())
    }
}

#[async_trait]
impl CartRepository for SqliteCartRepository {
    async fn load(&self) -> CoreResult<Vec<CartLineItem>> {
        match self.raw().await? {
            Some(raw) => decode_cart(&raw),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, items: &[CartLineItem]) -> CoreResult<()> {
        let encoded = encode_cart(items)?;
        self.write_raw(&encoded).await?;
        info!(key = %self.key, items = items.len(), "Cart saved");
        Ok(())
    }
}
