//! # Admin Dashboard Commands
//!
//! ## Form Submission
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_product({ name: "", price: "abc", stock: "5" })                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  every field checked ──► errors? ──yes──► form kept, all errors listed  │
//! │                              │                                          │
//! │                              no                                         │
//! │                              ▼                                          │
//! │                 record appended, form reset to empty                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Form failures are an ordinary outcome here, not an `ApiError`: the page
//! needs the kept form and the per-field messages to redraw.

use serde::Serialize;
use shoez_core::admin::{
    AdminCatalog, CouponForm, DiscountForm, FormErrors, ImportReport, ProductForm, ProductRow,
    StockChart,
};
use shoez_core::{Coupon, Discount, Product};
use tracing::{debug, info};

use crate::state::AdminState;

/// One message under one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Result of submitting a dashboard form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse<F, R> {
    /// The form to redraw: empty after success, as typed after failure.
    pub form: F,
    pub record: Option<R>,
    pub errors: Vec<FieldError>,
}

impl<F, R> FormResponse<F, R> {
    pub fn is_accepted(&self) -> bool {
        self.record.is_some()
    }

    fn from_result(form: F, result: Result<R, FormErrors>) -> Self {
        match result {
            Ok(record) => FormResponse {
                form,
                record: Some(record),
                errors: Vec::new(),
            },
            Err(e) => FormResponse {
                form,
                record: None,
                errors: e
                    .errors
                    .iter()
                    .map(|err| FieldError {
                        field: err.field().to_string(),
                        message: err.to_string(),
                    })
                    .collect(),
            },
        }
    }
}

/// Dashboard listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub catalog: AdminCatalog,
    pub product_lines: Vec<String>,
    pub discount_lines: Vec<String>,
    pub coupon_lines: Vec<String>,
}

pub fn submit_product(admin: &AdminState, mut form: ProductForm) -> FormResponse<ProductForm, Product> {
    debug!("submit_product command");
    let result = admin.with_catalog_mut(|c| c.submit_product(&mut form));
    if let Ok(product) = &result {
        info!(id = %product.id, name = %product.name, "Product added");
    }
    FormResponse::from_result(form, result)
}

pub fn submit_discount(
    admin: &AdminState,
    mut form: DiscountForm,
) -> FormResponse<DiscountForm, Discount> {
    debug!("submit_discount command");
    let result = admin.with_catalog_mut(|c| c.submit_discount(&mut form));
    if let Ok(discount) = &result {
        info!(id = %discount.id, percent = discount.percent, "Discount added");
    }
    FormResponse::from_result(form, result)
}

pub fn submit_coupon(admin: &AdminState, mut form: CouponForm) -> FormResponse<CouponForm, Coupon> {
    debug!("submit_coupon command");
    let result = admin.with_catalog_mut(|c| c.submit_coupon(&mut form));
    if let Ok(coupon) = &result {
        info!(id = %coupon.id, code = %coupon.code, "Coupon added");
    }
    FormResponse::from_result(form, result)
}

/// Bulk import of already-parsed spreadsheet rows.
pub fn import_products(admin: &AdminState, rows: Vec<ProductRow>) -> ImportReport {
    debug!(rows = rows.len(), "import_products command");
    let report = admin.with_catalog_mut(|c| c.import_products(&rows));
    info!(
        accepted = report.accepted,
        rejected = report.rejected.len(),
        "Product import finished"
    );
    report
}

pub fn get_admin_catalog(admin: &AdminState) -> AdminOverview {
    admin.with_catalog(|c| AdminOverview {
        catalog: c.clone(),
        product_lines: c.product_lines(),
        discount_lines: c.discount_lines(),
        coupon_lines: c.coupon_lines(),
    })
}

pub fn get_stock_chart(admin: &AdminState) -> StockChart {
    admin.with_catalog(AdminCatalog::stock_chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_form(name: &str, price: &str, stock: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
        }
    }

    #[test]
    fn test_product_form_success_resets() {
        let admin = AdminState::new();
        let response = submit_product(&admin, product_form("Air Runner", "45.00", "12"));

        assert!(response.is_accepted());
        assert_eq!(response.form, ProductForm::default());
        assert!(response.errors.is_empty());

        let overview = get_admin_catalog(&admin);
        assert_eq!(overview.catalog.products.len(), 1);
        assert_eq!(overview.product_lines, vec!["Air Runner - $45.00".to_string()]);
    }

    #[test]
    fn test_product_form_failure_keeps_input() {
        let admin = AdminState::new();
        let form = product_form("", "abc", "5");
        let response = submit_product(&admin, form.clone());

        assert!(!response.is_accepted());
        assert_eq!(response.form, form);
        assert_eq!(response.errors.len(), 2);
        assert_eq!(response.errors[0].field, "Name");
        assert_eq!(response.errors[0].message, "Name is required");
        assert_eq!(response.errors[1].field, "Price");
        assert!(get_admin_catalog(&admin).catalog.products.is_empty());
    }

    #[test]
    fn test_discount_and_coupon() {
        let admin = AdminState::new();

        let response = submit_discount(
            &admin,
            DiscountForm {
                discount: "15".to_string(),
            },
        );
        assert!(response.is_accepted());

        let response = submit_coupon(
            &admin,
            CouponForm {
                code: "SUMMER".to_string(),
                discount_value: "25".to_string(),
                expiry_date: "2026-13-01".to_string(),
            },
        );
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].field, "Expiry date");

        let response = submit_coupon(
            &admin,
            CouponForm {
                expiry_date: "2026-12-31".to_string(),
                ..response.form
            },
        );
        assert!(response.is_accepted());

        let overview = get_admin_catalog(&admin);
        assert_eq!(overview.discount_lines, vec!["15% off".to_string()]);
        assert_eq!(overview.coupon_lines, vec!["SUMMER - 25% off".to_string()]);
    }

    #[test]
    fn test_import_and_chart() {
        let admin = AdminState::new();
        let report = import_products(
            &admin,
            vec![
                product_form("Air Runner", "45", "12"),
                product_form("", "10", "1"),
                product_form("Beach Flip", "12.50", "40"),
            ],
        );

        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].row, 2);

        let chart = get_stock_chart(&admin);
        assert_eq!(chart.labels, vec!["Air Runner", "Beach Flip"]);
        assert_eq!(chart.data, vec![12, 40]);
        assert_eq!(chart.dataset_label, "Product Stock");
    }

    #[test]
    fn test_form_response_wire_format() {
        let admin = AdminState::new();
        let response = submit_product(&admin, product_form("", "", ""));
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["record"].is_null());
        assert_eq!(json["errors"][0]["field"], "Name");
        assert_eq!(json["form"]["name"], "");
    }
}
