//! # shoez-db: Local Storage for the Shoezshop Storefront
//!
//! SQLite-backed key/value storage that plays the part of the browser's
//! local storage. The cart lives under the key `"cart"`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shoezshop Data Flow                                 │
//! │                                                                         │
//! │  Storefront command (mount_checkout, add_to_cart)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     shoez-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐  ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories    │  │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ LocalStorage     │  │  (embedded)  │  │   │
//! │  │   │  SqlitePool   │    │ SqliteCart       │  │ 001_local_   │  │   │
//! │  │   └───────────────┘    └──────────────────┘  │  storage.sql │  │   │
//! │  │                                              └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (path from StorefrontConfig)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shoez_core::cart::CartRepository;
//! use shoez_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("shoez.db")).await?;
//! let items = db.carts().load().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::cart::SqliteCartRepository;
pub use repository::local_storage::LocalStorageRepository;
