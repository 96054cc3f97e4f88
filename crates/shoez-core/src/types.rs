//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────┐   ┌─────────────────┐     │
//! │  │  CartLineItem   │   │ VoucherDefinition │   │ CatalogProduct  │     │
//! │  │  ─────────────  │   │  ───────────────  │   │  ─────────────  │     │
//! │  │  name           │   │  code             │   │  productName    │     │
//! │  │  image_ref      │   │  kind             │   │  category       │     │
//! │  │  unit_price     │   │  value            │   │  image          │     │
//! │  │  quantity       │   └───────────────────┘   └─────────────────┘     │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Admin records: Product, Discount, Coupon (in-memory only)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Cart Line Item
// =============================================================================

/// One product entry in the shopper's cart.
///
/// Written by product pages into persistent storage and read once when the
/// checkout mounts. The checkout never mutates line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    /// Display name, also the identity used when merging quantities.
    pub name: String,

    /// Image URL or path shown next to the item.
    pub image_ref: String,

    /// Price of one unit, never negative.
    pub unit_price: Money,

    /// Units in the cart, at least 1.
    pub quantity: i64,
}

impl CartLineItem {
    /// Creates a line item. A quantity below 1 is stored as 1.
    pub fn new(
        name: impl Into<String>,
        image_ref: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        CartLineItem {
            name: name.into(),
            image_ref: image_ref.into(),
            unit_price,
            quantity: quantity.max(1),
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity.max(1))
    }

    /// Line total, `None` when price × quantity leaves the `i64` range.
    #[inline]
    pub fn checked_line_total(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity.max(1))
    }
}

// =============================================================================
// Vouchers
// =============================================================================

/// How a voucher reduces the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VoucherKind {
    /// Whole-percent discount on the running total.
    Percentage,
    /// Fixed amount (gift coupon) subtracted from the running total.
    FixedAmount,
}

/// The amount a voucher is worth, tied to its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum VoucherValue {
    /// Whole percent, e.g. `10` for 10%.
    Percentage(u32),
    /// Money subtracted as-is.
    FixedAmount(Money),
}

/// A redeemable voucher code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VoucherDefinition {
    /// Case-sensitive code, unique within its table.
    pub code: String,

    /// Amount and kind of the reduction.
    pub value: VoucherValue,
}

impl VoucherDefinition {
    /// A percentage-discount voucher.
    pub fn percentage(code: impl Into<String>, percent: u32) -> Self {
        VoucherDefinition {
            code: code.into(),
            value: VoucherValue::Percentage(percent),
        }
    }

    /// A fixed-amount gift coupon.
    pub fn fixed_amount(code: impl Into<String>, amount: Money) -> Self {
        VoucherDefinition {
            code: code.into(),
            value: VoucherValue::FixedAmount(amount),
        }
    }

    /// Returns the voucher kind.
    pub fn kind(&self) -> VoucherKind {
        match self.value {
            VoucherValue::Percentage(_) => VoucherKind::Percentage,
            VoucherValue::FixedAmount(_) => VoucherKind::FixedAmount,
        }
    }

    /// The reduction this voucher takes off `total`.
    ///
    /// Percentage: `total × value / 100`. Fixed: `value`, even when it
    /// exceeds `total`.
    pub fn discount_for(&self, total: Money) -> Money {
        match self.value {
            VoucherValue::Percentage(percent) => total.percentage_of(percent.saturating_mul(100)),
            VoucherValue::FixedAmount(amount) => amount,
        }
    }
}

// =============================================================================
// Remote Catalog Product
// =============================================================================

/// A product record as served by the remote catalog.
///
/// Only `productName`, `category` and `image` are relied on; everything else
/// is optional because the endpoint does not version its schema. Fields read
/// leniently: `null` becomes empty, numbers in text fields become text, and a
/// field of an unusable type is dropped instead of failing the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogProduct {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<CatalogProductId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub product_name: String,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,

    /// Price in the catalog's own major unit (PKR on the demo endpoint).
    #[serde(default, deserialize_with = "lenient::number")]
    #[ts(type = "number | null")]
    pub price: Option<serde_json::Number>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
}

/// Catalog ids arrive as numbers or as strings depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum CatalogProductId {
    Number(i64),
    Text(String),
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::CatalogProductId;

    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<CatalogProductId>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => match n.as_i64() {
                Some(id) => Some(CatalogProductId::Number(id)),
                None => Some(CatalogProductId::Text(n.to_string())),
            },
            Value::String(s) if !s.is_empty() => Some(CatalogProductId::Text(s)),
            _ => None,
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(optional_text(d)?.unwrap_or_default())
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    /// Numbers pass through; numeric text such as `"59.99"` is parsed.
    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<serde_json::Number>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => Some(n),
            Value::String(s) => serde_json::from_str(s.trim()).ok(),
            _ => None,
        })
    }
}

// =============================================================================
// Admin Records
// =============================================================================

/// A product created from the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    pub price: Money,
    pub stock: i64,
}

/// A store-wide percentage discount created from the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Discount {
    pub id: String,
    /// Whole percent, 0-100.
    pub percent: u32,
}

/// A coupon created from the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Coupon {
    pub id: String,
    pub code: String,
    /// Whole percent shown as "{value}% off".
    pub discount_value: u32,
    #[ts(as = "String")]
    pub expiry_date: NaiveDate,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartLineItem::new("Shoe A", "/a.png", Money::from_cents(5000), 2);
        assert_eq!(item.line_total().cents(), 10000);
    }

    #[test]
    fn test_line_item_quantity_floor() {
        let item = CartLineItem::new("Shoe A", "/a.png", Money::from_cents(5000), 0);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.line_total().cents(), 5000);
    }

    #[test]
    fn test_voucher_kind() {
        assert_eq!(
            VoucherDefinition::percentage("DISCOUNT10", 10).kind(),
            VoucherKind::Percentage
        );
        assert_eq!(
            VoucherDefinition::fixed_amount("GIFT100", Money::from_cents(10000)).kind(),
            VoucherKind::FixedAmount
        );
    }

    #[test]
    fn test_discount_for() {
        let total = Money::from_cents(3000);
        let pct = VoucherDefinition::percentage("DISCOUNT20", 20);
        assert_eq!(pct.discount_for(total).cents(), 600);

        let gift = VoucherDefinition::fixed_amount("GIFT100", Money::from_cents(10000));
        assert_eq!(gift.discount_for(total).cents(), 10000);
    }

    #[test]
    fn test_catalog_product_tolerates_missing_fields() {
        let product: CatalogProduct =
            serde_json::from_str(r#"{"productName":"Runner","category":"sneakers"}"#).unwrap();
        assert_eq!(product.product_name, "Runner");
        assert_eq!(product.image, "");
        assert!(product.id.is_none());
    }

    #[test]
    fn test_catalog_product_tolerates_nulls_and_mixed_types() {
        let product: CatalogProduct = serde_json::from_str(
            r#"{"id":"p-2","productName":null,"description":null,
                "price":"59.99","image":null,"category":7}"#,
        )
        .unwrap();
        assert_eq!(product.id, Some(CatalogProductId::Text("p-2".into())));
        assert_eq!(product.product_name, "");
        assert!(product.description.is_none());
        assert_eq!(product.price.unwrap().as_f64(), Some(59.99));
        assert_eq!(product.image, "");
        assert_eq!(product.category, "7");

        let product: CatalogProduct =
            serde_json::from_str(r#"{"id":1,"productName":"Air Runner","price":[1]}"#).unwrap();
        assert_eq!(product.id, Some(CatalogProductId::Number(1)));
        assert!(product.price.is_none());
    }
}
