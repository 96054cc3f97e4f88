//! # Checkout Session
//!
//! One checkout view instance, from mount to unmount.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   mount ──► ┌─────────────┐  valid code   ┌──────────────────┐          │
//! │             │  NoVoucher  │ ────────────► │  VoucherApplied  │          │
//! │             └─────────────┘               │    (terminal)    │          │
//! │               │        ▲                  └──────────────────┘          │
//! │  invalid code │        │ error_message set     │ any further code       │
//! │               └────────┘ (retryable)           ▼                        │
//! │                                         VoucherAlreadyApplied           │
//! │                                         (no state change)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one voucher per session
//! - `running_total` never increases after mount
//! - Nothing here is persisted; dropping the session drops the discount

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{cart_subtotal, CartRepository};
use crate::error::{CoreError, CoreResult};
use crate::i18n::{TranslationKey, Translator};
use crate::money::Money;
use crate::types::{CartLineItem, VoucherDefinition};
use crate::voucher::{VoucherBook, VoucherOutcome};

// =============================================================================
// Session State
// =============================================================================

/// Where the session is in the voucher state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VoucherState {
    /// No voucher yet; the input accepts codes.
    NoVoucher,
    /// A voucher was applied; the input is disabled for the session.
    VoucherApplied,
}

/// Shopper-facing messages the session emits.
///
/// Built from a [`Translator`] so the checkout renders in the current
/// language; defaults to English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutMessages {
    pub invalid_voucher: String,
    pub voucher_applied: String,
}

impl CheckoutMessages {
    /// Looks the messages up in `translator`.
    pub fn from_translator(translator: &Translator) -> Self {
        CheckoutMessages {
            invalid_voucher: translator.translate(TranslationKey::InvalidVoucher).to_string(),
            voucher_applied: translator.translate(TranslationKey::VoucherApplied).to_string(),
        }
    }
}

impl Default for CheckoutMessages {
    fn default() -> Self {
        CheckoutMessages::from_translator(&Translator::default())
    }
}

/// In-memory checkout session.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    id: String,
    mounted_at: DateTime<Utc>,
    line_items: Vec<CartLineItem>,
    running_total: Money,
    applied_voucher: Option<VoucherDefinition>,
    error_message: Option<String>,
    messages: CheckoutMessages,
}

impl CheckoutSession {
    /// Creates a session over `line_items`, total = Σ(unit_price × quantity).
    pub fn new(line_items: Vec<CartLineItem>) -> Self {
        let running_total = cart_subtotal(&line_items);
        CheckoutSession {
            id: Uuid::new_v4().to_string(),
            mounted_at: Utc::now(),
            line_items,
            running_total,
            applied_voucher: None,
            error_message: None,
            messages: CheckoutMessages::default(),
        }
    }

    /// Mounts a session from the persisted cart.
    ///
    /// Absent, malformed or unreadable storage yields an empty cart; the
    /// failure is logged and never reaches the shopper.
    pub async fn mount<R>(repo: &R) -> Self
    where
        R: CartRepository + ?Sized,
    {
        let items = match repo.load().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Persisted cart unreadable, starting with empty cart");
                Vec::new()
            }
        };

        let session = CheckoutSession::new(items);
        info!(
            session_id = %session.id,
            items = session.line_items.len(),
            total = %session.running_total,
            "Checkout mounted"
        );
        session
    }

    /// Replaces the shopper-facing messages (e.g. after a language change).
    pub fn with_messages(mut self, messages: CheckoutMessages) -> Self {
        self.set_messages(messages);
        self
    }

    /// Swaps the messages of a live session. An error already shown keeps
    /// its text until the next attempt.
    pub fn set_messages(&mut self, messages: CheckoutMessages) {
        self.messages = messages;
    }

    /// Session identifier (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the session was mounted.
    pub fn mounted_at(&self) -> DateTime<Utc> {
        self.mounted_at
    }

    /// Items as loaded at mount.
    pub fn line_items(&self) -> &[CartLineItem] {
        &self.line_items
    }

    /// Current total after any voucher.
    pub fn running_total(&self) -> Money {
        self.running_total
    }

    /// The voucher applied in this session, if any.
    pub fn applied_voucher(&self) -> Option<&VoucherDefinition> {
        self.applied_voucher.as_ref()
    }

    /// Message from the last failed attempt, cleared on the next attempt.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Confirmation shown once a voucher is applied.
    pub fn success_message(&self) -> Option<&str> {
        self.applied_voucher
            .as_ref()
            .map(|_| self.messages.voucher_applied.as_str())
    }

    /// Current state machine state.
    pub fn state(&self) -> VoucherState {
        if self.applied_voucher.is_some() {
            VoucherState::VoucherApplied
        } else {
            VoucherState::NoVoucher
        }
    }

    /// Whether the voucher input and button accept input.
    pub fn voucher_input_enabled(&self) -> bool {
        self.state() == VoucherState::NoVoucher
    }

    /// Applies a voucher code to the running total.
    ///
    /// ## Behavior
    /// - Already applied: `VoucherAlreadyApplied`, nothing changes
    /// - Unknown code: `InvalidVoucherCode`, error message set, total kept
    /// - Valid code: total reduced once, session locked
    pub fn apply_voucher(&mut self, book: &VoucherBook, code: &str) -> CoreResult<VoucherOutcome> {
        if let Some(applied) = &self.applied_voucher {
            return Err(CoreError::VoucherAlreadyApplied {
                applied: applied.code.clone(),
            });
        }

        self.error_message = None;

        match book.apply(code, self.running_total) {
            Ok(outcome) => {
                info!(
                    session_id = %self.id,
                    code = %outcome.voucher.code,
                    new_total = %outcome.new_total,
                    "Voucher applied"
                );
                self.running_total = outcome.new_total;
                self.applied_voucher = Some(outcome.voucher.clone());
                Ok(outcome)
            }
            Err(e) => {
                info!(session_id = %self.id, code = %code, "Voucher rejected");
                self.error_message = Some(self.messages.invalid_voucher.clone());
                Err(e)
            }
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> CheckoutView {
        CheckoutView {
            session_id: self.id.clone(),
            lines: self.line_items.iter().map(LineView::from).collect(),
            running_total: self.running_total,
            state: self.state(),
            applied_voucher: self.applied_voucher.clone(),
            error_message: self.error_message.clone(),
            success_message: self.success_message().map(str::to_string),
            voucher_input_enabled: self.voucher_input_enabled(),
        }
    }

    /// The "proceed to payment" action.
    ///
    /// A placeholder: it only reports what would be charged.
    pub fn proceed_to_payment(&self) -> PaymentSummary {
        info!(
            session_id = %self.id,
            amount_due = %self.running_total,
            "Proceeding to payment"
        );
        PaymentSummary {
            session_id: self.id.clone(),
            amount_due: self.running_total,
            voucher_code: self.applied_voucher.as_ref().map(|v| v.code.clone()),
        }
    }
}

// =============================================================================
// Render DTOs
// =============================================================================

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineView {
    pub name: String,
    pub image_ref: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

impl From<&CartLineItem> for LineView {
    fn from(item: &CartLineItem) -> Self {
        LineView {
            name: item.name.clone(),
            image_ref: item.image_ref.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

/// Everything the checkout page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutView {
    pub session_id: String,
    pub lines: Vec<LineView>,
    pub running_total: Money,
    pub state: VoucherState,
    pub applied_voucher: Option<VoucherDefinition>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub voucher_input_enabled: bool,
}

/// What "proceed to payment" hands on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentSummary {
    pub session_id: String,
    pub amount_due: Money,
    pub voucher_code: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::InMemoryCartRepository;
    use crate::i18n::Language;

    fn shoe_cart() -> Vec<CartLineItem> {
        vec![CartLineItem::new("Shoe A", "/shoe-a.png", Money::from_cents(5000), 2)]
    }

    #[test]
    fn test_discount10_scenario() {
        let mut session = CheckoutSession::new(shoe_cart());
        assert_eq!(session.running_total().cents(), 10000);

        session
            .apply_voucher(&VoucherBook::standard(), "DISCOUNT10")
            .unwrap();
        assert_eq!(session.running_total().cents(), 9000);
        assert_eq!(session.state(), VoucherState::VoucherApplied);
        assert!(!session.voucher_input_enabled());
        assert_eq!(session.success_message(), Some("Voucher applied successfully!"));
    }

    #[test]
    fn test_gift100_scenario() {
        let mut session = CheckoutSession::new(shoe_cart());
        session.apply_voucher(&VoucherBook::standard(), "GIFT100").unwrap();
        assert_eq!(session.running_total().cents(), 0);
    }

    #[test]
    fn test_gift_exceeding_total_goes_negative() {
        let items = vec![CartLineItem::new("Sock", "/sock.png", Money::from_cents(3000), 1)];
        let mut session = CheckoutSession::new(items);
        session.apply_voucher(&VoucherBook::standard(), "GIFT100").unwrap();
        assert_eq!(session.running_total().cents(), -7000);
        assert_eq!(session.proceed_to_payment().amount_due.cents(), -7000);
    }

    #[test]
    fn test_badcode_scenario_is_retryable() {
        let book = VoucherBook::standard();
        let mut session = CheckoutSession::new(shoe_cart());

        let err = session.apply_voucher(&book, "BADCODE").unwrap_err();
        assert!(matches!(err, CoreError::InvalidVoucherCode(_)));
        assert_eq!(session.running_total().cents(), 10000);
        assert_eq!(
            session.error_message(),
            Some("Invalid voucher code. Please try again.")
        );
        assert_eq!(session.state(), VoucherState::NoVoucher);
        assert!(session.voucher_input_enabled());

        session.apply_voucher(&book, "DISCOUNT20").unwrap();
        assert_eq!(session.running_total().cents(), 8000);
        assert!(session.error_message().is_none());
    }

    #[test]
    fn test_second_voucher_rejected() {
        let book = VoucherBook::standard();
        let mut session = CheckoutSession::new(shoe_cart());
        session.apply_voucher(&book, "DISCOUNT10").unwrap();

        for code in ["DISCOUNT10", "GIFT100", "BADCODE"] {
            let err = session.apply_voucher(&book, code).unwrap_err();
            assert!(matches!(err, CoreError::VoucherAlreadyApplied { .. }));
        }
        assert_eq!(session.running_total().cents(), 9000);
        assert!(session.error_message().is_none());
        assert_eq!(session.applied_voucher().unwrap().code, "DISCOUNT10");
    }

    #[test]
    fn test_total_never_increases() {
        let book = VoucherBook::standard();
        let mut session = CheckoutSession::new(shoe_cart());
        let mut last = session.running_total();
        for code in ["nope", "GIFT100", "DISCOUNT20", "x"] {
            let _ = session.apply_voucher(&book, code);
            assert!(session.running_total() <= last);
            last = session.running_total();
        }
    }

    #[test]
    fn test_view_lines() {
        let session = CheckoutSession::new(shoe_cart());
        let view = session.view();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].line_total.cents(), 10000);
        assert!(view.voucher_input_enabled);
        assert!(view.success_message.is_none());
    }

    #[test]
    fn test_localized_messages() {
        let messages = CheckoutMessages::from_translator(&Translator::new(Language::Es));
        let mut session = CheckoutSession::new(shoe_cart()).with_messages(messages.clone());
        let _ = session.apply_voucher(&VoucherBook::standard(), "BADCODE");
        assert_eq!(session.error_message(), Some(messages.invalid_voucher.as_str()));
    }

    #[tokio::test]
    async fn test_mount_from_repository() {
        let repo = InMemoryCartRepository::with_raw(
            r#"[{"name":"Shoe A","price":50,"image":"/shoe-a.png","quantity":2}]"#,
        );
        let session = CheckoutSession::mount(&repo).await;
        assert_eq!(session.running_total().cents(), 10000);
    }

    #[tokio::test]
    async fn test_mount_empty_and_malformed_storage() {
        let session = CheckoutSession::mount(&InMemoryCartRepository::new()).await;
        assert!(session.running_total().is_zero());

        let session = CheckoutSession::mount(&InMemoryCartRepository::with_raw("[{]")).await;
        assert!(session.running_total().is_zero());
        assert!(session.line_items().is_empty());
    }

    #[tokio::test]
    async fn test_mount_with_out_of_range_cart_starts_empty() {
        let repo = InMemoryCartRepository::with_raw(
            r#"[{"name":"Shoe","price":100000,"image":"","quantity":9000000000000}]"#,
        );
        let session = CheckoutSession::mount(&repo).await;
        assert!(session.line_items().is_empty());
        assert!(session.running_total().is_zero());
        assert_eq!(session.state(), VoucherState::NoVoucher);
    }

    #[test]
    fn test_gift_voucher_near_range_floor_keeps_total() {
        let floor = Money::from_cents(i64::MIN + 5);
        let items = vec![CartLineItem::new("Refund", "", floor, 1)];
        let mut session = CheckoutSession::new(items);

        let err = session
            .apply_voucher(&VoucherBook::standard(), "GIFT100")
            .unwrap_err();
        assert!(matches!(err, CoreError::TotalOutOfRange { .. }));
        assert_eq!(session.running_total(), floor);
        assert!(session.applied_voucher().is_none());
        assert!(session.voucher_input_enabled());
    }
}
