//! # Admin Catalog
//!
//! The admin dashboard's products, discounts and coupons, held in memory.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductForm { name: "", price: "49.90", stock: "" }                    │
//! │       │                                                                 │
//! │       ▼  submit_product()                                               │
//! │  every field checked ──► errors? ──yes──► FormErrors [Name is required, │
//! │       │                                   Stock is required]            │
//! │       no                                  form keeps its contents       │
//! │       ▼                                                                 │
//! │  Product appended (UUID id) ──► form reset to empty                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is persisted; a restart starts from an empty catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Coupon, Discount, Product};
use crate::validation::{
    parse_count_field, parse_date_field, parse_money_field, parse_percent_field,
    validate_product_name, require, ValidationResult,
};

/// Highest stock a product may carry.
pub const MAX_STOCK: i64 = 1_000_000;

/// Dataset label of the stock chart.
pub const STOCK_CHART_LABEL: &str = "Product Stock";

// =============================================================================
// Form Errors
// =============================================================================

/// Every invalid field of one submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct FormErrors {
    pub errors: Vec<ValidationError>,
}

impl FormErrors {
    /// Messages in field order, as shown under the inputs.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// First error reported against `field`.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }
}

/// Collects field errors while a form is checked.
#[derive(Default)]
struct FieldCheck {
    errors: Vec<ValidationError>,
}

impl FieldCheck {
    fn check<T>(&mut self, result: ValidationResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, FormErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(FormErrors {
                errors: self.errors,
            }),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Product form, fields as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    fn parse(&self) -> Result<(String, Money, i64), FormErrors> {
        let mut check = FieldCheck::default();
        let name = check.check(validate_product_name("Name", &self.name));
        let price = check.check(parse_money_field("Price", &self.price));
        let stock = check.check(parse_count_field("Stock", &self.stock, 0, MAX_STOCK));

        let parsed = match (name, price, stock) {
            (Some(name), Some(price), Some(stock)) => Some((name, price, stock)),
            _ => None,
        };
        check.finish(parsed)
    }
}

/// Discount form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct DiscountForm {
    pub discount: String,
}

impl DiscountForm {
    fn parse(&self) -> Result<u32, FormErrors> {
        let mut check = FieldCheck::default();
        let percent = check.check(parse_percent_field("Discount", &self.discount));
        check.finish(percent)
    }
}

/// Coupon form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CouponForm {
    pub code: String,
    pub discount_value: String,
    pub expiry_date: String,
}

impl CouponForm {
    fn parse(&self) -> Result<(String, u32, chrono::NaiveDate), FormErrors> {
        let mut check = FieldCheck::default();
        let code = check.check(require("Coupon code", &self.code).map(str::to_string));
        let value = check.check(parse_percent_field("Discount value", &self.discount_value));
        let expiry = check.check(parse_date_field("Expiry date", &self.expiry_date));

        let parsed = match (code, value, expiry) {
            (Some(code), Some(value), Some(expiry)) => Some((code, value, expiry)),
            _ => None,
        };
        check.finish(parsed)
    }
}

// =============================================================================
// Bulk Import
// =============================================================================

/// One already-parsed row of a product spreadsheet.
pub type ProductRow = ProductForm;

/// A row that did not make it into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RejectedRow {
    /// 1-based position in the uploaded sheet.
    #[ts(type = "number")]
    pub row: usize,
    pub errors: Vec<String>,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImportReport {
    #[ts(type = "number")]
    pub accepted: usize,
    pub rejected: Vec<RejectedRow>,
}

// =============================================================================
// Chart
// =============================================================================

/// Bar chart input: one label and one value per product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StockChart {
    pub labels: Vec<String>,
    pub dataset_label: String,
    pub data: Vec<i64>,
}

// =============================================================================
// Catalog
// =============================================================================

/// The dashboard's records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdminCatalog {
    pub products: Vec<Product>,
    pub discounts: Vec<Discount>,
    pub coupons: Vec<Coupon>,
}

impl AdminCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product from the form, then clears the form.
    pub fn submit_product(&mut self, form: &mut ProductForm) -> Result<Product, FormErrors> {
        let (name, price, stock) = form.parse()?;
        let product = self.push_product(name, price, stock);
        *form = ProductForm::default();
        Ok(product)
    }

    /// Adds a discount from the form, then clears the form.
    pub fn submit_discount(&mut self, form: &mut DiscountForm) -> Result<Discount, FormErrors> {
        let percent = form.parse()?;
        let discount = Discount {
            id: Uuid::new_v4().to_string(),
            percent,
        };
        info!(id = %discount.id, percent, "Discount added");
        self.discounts.push(discount.clone());
        *form = DiscountForm::default();
        Ok(discount)
    }

    /// Adds a coupon from the form, then clears the form.
    pub fn submit_coupon(&mut self, form: &mut CouponForm) -> Result<Coupon, FormErrors> {
        let (code, discount_value, expiry_date) = form.parse()?;
        let coupon = Coupon {
            id: Uuid::new_v4().to_string(),
            code,
            discount_value,
            expiry_date,
        };
        info!(id = %coupon.id, code = %coupon.code, "Coupon added");
        self.coupons.push(coupon.clone());
        *form = CouponForm::default();
        Ok(coupon)
    }

    /// Imports product rows; each row stands or falls on its own.
    pub fn import_products(&mut self, rows: &[ProductRow]) -> ImportReport {
        let mut report = ImportReport::default();

        for (index, row) in rows.iter().enumerate() {
            match row.parse() {
                Ok((name, price, stock)) => {
                    self.push_product(name, price, stock);
                    report.accepted += 1;
                }
                Err(e) => {
                    debug!(row = index + 1, errors = %e, "Import row rejected");
                    report.rejected.push(RejectedRow {
                        row: index + 1,
                        errors: e.messages(),
                    });
                }
            }
        }

        info!(
            accepted = report.accepted,
            rejected = report.rejected.len(),
            "Product import finished"
        );
        report
    }

    /// Names as labels, stock as values.
    pub fn stock_chart(&self) -> StockChart {
        StockChart {
            labels: self.products.iter().map(|p| p.name.clone()).collect(),
            dataset_label: STOCK_CHART_LABEL.to_string(),
            data: self.products.iter().map(|p| p.stock).collect(),
        }
    }

    pub fn product_lines(&self) -> Vec<String> {
        self.products.iter().map(product_line).collect()
    }

    pub fn discount_lines(&self) -> Vec<String> {
        self.discounts.iter().map(discount_line).collect()
    }

    pub fn coupon_lines(&self) -> Vec<String> {
        self.coupons.iter().map(coupon_line).collect()
    }

    fn push_product(&mut self, name: String, price: Money, stock: i64) -> Product {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            stock,
        };
        info!(id = %product.id, name = %product.name, price = %product.price, stock, "Product added");
        self.products.push(product.clone());
        product
    }
}

/// "Trail Runner - $49.90"
pub fn product_line(product: &Product) -> String {
    format!("{} - {}", product.name, product.price)
}

/// "15% off"
pub fn discount_line(discount: &Discount) -> String {
    format!("{}% off", discount.percent)
}

/// "SUMMER - 15% off"
pub fn coupon_line(coupon: &Coupon) -> String {
    format!("{} - {}% off", coupon.code, coupon.discount_value)
}

// =============================================================================
// Unit Tests
// =============================================================================
