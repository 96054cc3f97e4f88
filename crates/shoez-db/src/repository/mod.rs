//! # Repository Module
//!
//! Repositories over the `local_storage` table.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CheckoutSession::mount(&db.carts())                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SqliteCartRepository  ── encode/decode via shoez_core::cart            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LocalStorageRepository  ── get / set / remove by key                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  local_storage(key, value, updated_at)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`LocalStorageRepository`](local_storage::LocalStorageRepository) - raw key/value access
//! - [`SqliteCartRepository`](cart::SqliteCartRepository) - the persisted cart

pub mod cart;
pub mod local_storage;
