//! # Cart Store
//!
//! The persisted cart layout and the `CartRepository` seam.
//!
//! ## Persisted Layout
//! ```text
//! key "cart" ──► [
//!                  { "name": "Shoe A", "price": 50, "image": "/a.png", "quantity": 2 },
//!                  { "name": "Sandal", "price": 19.99, "image": "/s.png" }
//!                ]                                          quantity → 1
//! ```
//!
//! - No schema version.
//! - Entries are not validated one by one; if the collection as a whole fails
//!   to decode, the whole cart reads as empty.
//!
//! ## Who Writes, Who Reads
//! ```text
//! ┌──────────────────┐  save()   ┌──────────────────┐  load()  ┌──────────────┐
//! │  Product pages   │ ────────► │  CartRepository  │ ───────► │   Checkout   │
//! │  (add_to_cart)   │           │ (SQLite / fake)  │          │ (read only)  │
//! └──────────────────┘           └──────────────────┘          └──────────────┘
//! ```

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::CartLineItem;
use crate::validation::{validate_price, validate_quantity};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Persisted Entry
// =============================================================================

/// One entry exactly as stored in local storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedCartEntry {
    name: String,
    price: serde_json::Number,
    #[serde(default)]
    image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quantity: Option<i64>,
}

impl PersistedCartEntry {
    fn into_line_item(self) -> CoreResult<CartLineItem> {
        let unit_price = Money::from_json_number(&self.price).ok_or_else(|| {
            CoreError::MalformedPersistedCart(format!("unrepresentable price for {}", self.name))
        })?;

        Ok(CartLineItem::new(
            self.name,
            self.image,
            unit_price,
            self.quantity.unwrap_or(1),
        ))
    }

    fn from_line_item(item: &CartLineItem) -> Self {
        let cents = item.unit_price.cents();
        let price = if cents % 100 == 0 {
            serde_json::Number::from(cents / 100)
        } else {
            serde_json::Number::from_f64(cents as f64 / 100.0)
                .unwrap_or_else(|| serde_json::Number::from(item.unit_price.dollars()))
        };

        PersistedCartEntry {
            name: item.name.clone(),
            price,
            image: item.image_ref.clone(),
            quantity: Some(item.quantity),
        }
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Decodes the persisted cart text.
///
/// `null` and blank text decode to an empty cart; anything else that is not
/// an array of entries fails with `MalformedPersistedCart`. So does a cart
/// whose line totals or subtotal do not fit in an `i64` of cents.
///
/// ## Example
/// ```rust
/// use shoez_core::cart::decode_cart;
///
/// let items = decode_cart(r#"[{"name":"Shoe A","price":50,"image":"/a.png","quantity":2}]"#).unwrap();
/// assert_eq!(items[0].line_total().cents(), 10000);
///
/// assert!(decode_cart("not json").is_err());
/// ```
pub fn decode_cart(raw: &str) -> CoreResult<Vec<CartLineItem>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "null" {
        return Ok(Vec::new());
    }

    let entries: Vec<PersistedCartEntry> = serde_json::from_str(raw)
        .map_err(|e| CoreError::MalformedPersistedCart(e.to_string()))?;

    let items = entries
        .into_iter()
        .map(PersistedCartEntry::into_line_item)
        .collect::<CoreResult<Vec<_>>>()?;

    checked_subtotal(&items)?;
    Ok(items)
}

/// Encodes line items into the persisted layout.
pub fn encode_cart(items: &[CartLineItem]) -> CoreResult<String> {
    let entries: Vec<PersistedCartEntry> =
        items.iter().map(PersistedCartEntry::from_line_item).collect();
    serde_json::to_string(&entries).map_err(|e| CoreError::CartStorage(e.to_string()))
}

// =============================================================================
// Cart Math
// =============================================================================

/// Σ(unit_price × max(quantity, 1)) over all items, pinned at the `i64` bounds.
pub fn cart_subtotal(items: &[CartLineItem]) -> Money {
    items.iter().map(CartLineItem::line_total).sum()
}

/// Like [`cart_subtotal`], but fails with `MalformedPersistedCart` on overflow.
pub fn checked_subtotal(items: &[CartLineItem]) -> CoreResult<Money> {
    items.iter().try_fold(Money::zero(), |acc, item| {
        item.checked_line_total()
            .and_then(|line| acc.checked_add(line))
            .ok_or_else(|| {
                CoreError::MalformedPersistedCart(format!("cart total out of range at {}", item.name))
            })
    })
}

/// Adds an item to a cart, merging with an existing entry of the same name.
///
/// ## Behavior
/// - Same name already present: quantities add up (max 999)
/// - Otherwise: appended at the end
pub fn add_line_item(items: &mut Vec<CartLineItem>, item: CartLineItem) -> CoreResult<()> {
    validate_quantity(item.quantity)?;
    validate_price(item.unit_price)?;

    if item.checked_line_total().is_none() {
        return Err(price_out_of_range().into());
    }

    if let Some(existing) = items.iter_mut().find(|i| i.name == item.name) {
        let new_qty = existing.quantity + item.quantity;
        validate_quantity(new_qty)?;
        if existing.unit_price.checked_mul(new_qty).is_none() {
            return Err(price_out_of_range().into());
        }
        debug!(name = %item.name, quantity = new_qty, max = MAX_ITEM_QUANTITY, "Merged cart line");
        existing.quantity = new_qty;
        return Ok(());
    }

    debug!(name = %item.name, quantity = item.quantity, "Appended cart line");
    items.push(item);
    Ok(())
}

fn price_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "price".to_string(),
        min: 0,
        max: i64::MAX / MAX_ITEM_QUANTITY,
    }
}

// =============================================================================
// Repository Seam
// =============================================================================

/// Source of truth for the shopper's cart.
///
/// ## Contract
/// - `load` returns an empty list when nothing is stored
/// - `load` fails with `MalformedPersistedCart` when stored content is garbage
/// - `save` replaces the whole collection
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Reads the persisted cart.
    async fn load(&self) -> CoreResult<Vec<CartLineItem>>;

    /// Replaces the persisted cart.
    async fn save(&self, items: &[CartLineItem]) -> CoreResult<()>;
}

/// Cart repository kept in memory, holding the raw persisted text.
///
/// Used by tests and previews in place of real storage. Keeping the raw text
/// (instead of decoded items) lets tests seed malformed content.
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    raw: Mutex<Option<String>>,
}

impl InMemoryCartRepository {
    /// Creates an empty repository (no key stored).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose storage already holds `raw`.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        InMemoryCartRepository {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// Returns the currently stored text, if any.
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|raw| raw.clone())
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn load(&self) -> CoreResult<Vec<CartLineItem>> {
        let raw = self
            .raw
            .lock()
            .map_err(|e| CoreError::CartStorage(e.to_string()))?
            .clone();

        match raw {
            Some(raw) => decode_cart(&raw),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, items: &[CartLineItem]) -> CoreResult<()> {
        let encoded = encode_cart(items)?;
        *self
            .raw
            .lock()
            .map_err(|e| CoreError::CartStorage(e.to_string()))? = Some(encoded);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
