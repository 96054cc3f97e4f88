//! # shoez-core: Pure Storefront Logic for Shoezshop
//!
//! This crate is the **heart** of the storefront. It contains the cart,
//! voucher, checkout, rating, translation and admin logic as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shoezshop Storefront Architecture                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI (browser)                      │   │
//! │  │   Navbar ──► Product Page ──► Checkout ──► Reviews ──► Admin    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    mount_checkout, apply_voucher, rate, search_products, ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shoez-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐ ┌────────┐  │   │
//! │  │   │  money  │ │  cart   │ │ voucher  │ │checkout│ │ rating │  │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └────────┘ └────────┘  │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────────────────┐ │   │
//! │  │   │  i18n   │ │  admin  │ │  search  │ │ validation / error │ │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └────────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          shoez-db (local storage) / shoez-catalog (HTTP)        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (line items, vouchers, catalog products)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`cart`] - Persisted cart layout and the `CartRepository` seam
//! - [`voucher`] - Static voucher tables and resolution
//! - [`checkout`] - Checkout session state machine
//! - [`rating`] - Star rating widget state
//! - [`i18n`] - Explicit translator object
//! - [`admin`] - Admin dashboard catalog and forms
//! - [`search`] - Product search and related-product filters
//!
//! ## Example Usage
//!
//! ```rust
//! use shoez_core::checkout::CheckoutSession;
//! use shoez_core::voucher::VoucherBook;
//! use shoez_core::{CartLineItem, Money};
//!
//! let items = vec![CartLineItem::new("Shoe A", "/shoe-a.png", Money::from_cents(5000), 2)];
//! let mut session = CheckoutSession::new(items);
//! assert_eq!(session.running_total().cents(), 10000);
//!
//! session.apply_voucher(&VoucherBook::standard(), "DISCOUNT10").unwrap();
//! assert_eq!(session.running_total().cents(), 9000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod i18n;
pub mod money;
pub mod rating;
pub mod search;
pub mod types;
pub mod validation;
pub mod voucher;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shoez_core::Money` instead of
// `use shoez_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Local storage key holding the persisted cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// Maximum quantity of a single item in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest star a review can give.
pub const MAX_RATING: u8 = 5;
