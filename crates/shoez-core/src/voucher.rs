//! # Voucher Resolver
//!
//! Matches a shopper-entered code against two static tables and derives the
//! adjusted total.
//!
//! ## Resolution Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apply("DISCOUNT10", $100.00)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Percentage table   DISCOUNT10 → 10%   DISCOUNT20 → 20%              │
//! │       │   hit: total − total × value / 100             → $90.00         │
//! │       ▼                                                                 │
//! │  2. Gift table         GIFT100 → $100.00                                │
//! │       │   hit: total − value  (no floor at zero)                        │
//! │       ▼                                                                 │
//! │  3. No match ──► InvalidVoucherCode, total unchanged                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Codes are matched exactly, case included. Resolution is pure and never
//! touches session state; the lockout after a successful application lives
//! in [`crate::checkout`].

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{VoucherDefinition, VoucherKind};

/// Result of a successful voucher application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VoucherOutcome {
    pub voucher: VoucherDefinition,
    pub previous_total: Money,
    pub discount: Money,
    pub new_total: Money,
}

/// The two voucher tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoucherBook {
    percentage: Vec<VoucherDefinition>,
    fixed: Vec<VoucherDefinition>,
}

impl VoucherBook {
    /// The storefront's built-in tables.
    ///
    /// | Code | Kind | Value |
    /// |------|------|-------|
    /// | `DISCOUNT10` | percentage | 10% |
    /// | `DISCOUNT20` | percentage | 20% |
    /// | `GIFT100` | fixed amount | $100.00 |
    pub fn standard() -> Self {
        VoucherBook {
            percentage: vec![
                VoucherDefinition::percentage("DISCOUNT10", 10),
                VoucherDefinition::percentage("DISCOUNT20", 20),
            ],
            fixed: vec![VoucherDefinition::fixed_amount(
                "GIFT100",
                Money::from_major_minor(100, 0),
            )],
        }
    }

    /// Builds a book from custom tables.
    ///
    /// ## Errors
    /// - A definition placed in the wrong table
    /// - A code repeated within one table
    pub fn new(
        percentage: Vec<VoucherDefinition>,
        fixed: Vec<VoucherDefinition>,
    ) -> Result<Self, ValidationError> {
        check_table(&percentage, VoucherKind::Percentage)?;
        check_table(&fixed, VoucherKind::FixedAmount)?;
        Ok(VoucherBook { percentage, fixed })
    }

    /// Percentage-discount definitions.
    pub fn percentage_vouchers(&self) -> &[VoucherDefinition] {
        &self.percentage
    }

    /// Fixed-amount gift coupon definitions.
    pub fn fixed_vouchers(&self) -> &[VoucherDefinition] {
        &self.fixed
    }

    /// Finds the definition for `code`, percentage table first.
    pub fn resolve(&self, code: &str) -> Option<&VoucherDefinition> {
        self.percentage
            .iter()
            .find(|v| v.code == code)
            .or_else(|| self.fixed.iter().find(|v| v.code == code))
    }

    /// Applies `code` to `current_total`.
    ///
    /// ## Example
    /// ```rust
    /// use shoez_core::voucher::VoucherBook;
    /// use shoez_core::Money;
    ///
    /// let book = VoucherBook::standard();
    /// let outcome = book.apply("GIFT100", Money::from_cents(3000)).unwrap();
    /// assert_eq!(outcome.new_total.cents(), -7000); // not floored
    /// ```
    pub fn apply(&self, code: &str, current_total: Money) -> CoreResult<VoucherOutcome> {
        let voucher = self
            .resolve(code)
            .ok_or_else(|| CoreError::InvalidVoucherCode(code.to_string()))?;

        let discount = voucher.discount_for(current_total);
        let new_total = current_total
            .checked_sub(discount)
            .ok_or_else(|| CoreError::TotalOutOfRange {
                code: voucher.code.clone(),
            })?;

        debug!(
            code = %voucher.code,
            kind = ?voucher.kind(),
            previous = %current_total,
            discount = %discount,
            new_total = %new_total,
            "Voucher resolved"
        );

        Ok(VoucherOutcome {
            voucher: voucher.clone(),
            previous_total: current_total,
            discount,
            new_total,
        })
    }
}

impl Default for VoucherBook {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_table(table: &[VoucherDefinition], kind: VoucherKind) -> Result<(), ValidationError> {
    for (index, voucher) in table.iter().enumerate() {
        if voucher.kind() != kind {
            return Err(ValidationError::InvalidFormat {
                field: "voucher".to_string(),
                reason: format!("{} is not a {:?} voucher", voucher.code, kind),
            });
        }
        if table[..index].iter().any(|v| v.code == voucher.code) {
            return Err(ValidationError::InvalidFormat {
                field: "voucher".to_string(),
                reason: format!("duplicate code {}", voucher.code),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
