//! # State Module
//!
//! One focused state type per concern; each command borrows only what it
//! needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ ConfigState  │ │   DbState    │ │ CatalogState │ │LanguageState │   │
//! │  │ read-only    │ │ SQLite pool  │ │ ProductSource│ │ RwLock<      │   │
//! │  │              │ │              │ │              │ │  Translator> │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐    │
//! │  │  CheckoutState   │ │   RatingState    │ │     AdminState       │    │
//! │  │  Mutex<Option<   │ │  Mutex<Review    │ │  Mutex<AdminCatalog> │    │
//! │  │  CheckoutSession>│ │   Ratings>       │ │                      │    │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘    │
//! │                                                                         │
//! │  Locks are never held across an `.await`.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod admin;
mod catalog;
mod checkout;
mod config;
mod db;
mod language;
mod rating;

pub use admin::AdminState;
pub use catalog::CatalogState;
pub use checkout::CheckoutState;
pub use config::ConfigState;
pub use db::DbState;
pub use language::LanguageState;
pub use rating::RatingState;
