//! # Database State
//!
//! Wraps the local storage [`Database`]. The pool is thread-safe, so commands
//! query it concurrently without extra locking.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn clear_cart(db: &DbState) -> ApiResult<CartResponse> {
//!     db.inner().carts().clear().await?;
//!     Ok(CartResponse::default())
//! }
//! ```

use shoez_db::Database;

#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    pub fn inner(&self) -> &Database {
        &self.db
    }
}
