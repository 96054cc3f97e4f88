//! # Checkout Commands
//!
//! ## Checkout Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  mount_checkout ──► read cart ──► CheckoutSession (NoVoucher)           │
//! │                                          │                              │
//! │            apply_voucher("BADCODE") ─────┤ error shown, still open      │
//! │                                          │                              │
//! │            apply_voucher("DISCOUNT10") ──┤                              │
//! │                                          ▼                              │
//! │                               VoucherApplied (input disabled)           │
//! │                                          │                              │
//! │            apply_voucher(any) ───────────┤ VOUCHER_ALREADY_APPLIED      │
//! │                                          │                              │
//! │            proceed_to_payment ───────────┤ PaymentSummary               │
//! │                                          ▼                              │
//! │  unmount_checkout ──► session dropped (voucher forgotten)               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shoez_core::checkout::{CheckoutMessages, CheckoutSession, CheckoutView, PaymentSummary};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::{CheckoutState, DbState, LanguageState};

fn no_checkout() -> ApiError {
    ApiError::not_found("Checkout", "no checkout mounted")
}

/// Mounts a fresh checkout from the persisted cart.
///
/// Replaces any session already mounted. An unreadable cart mounts empty.
pub async fn mount_checkout(
    db: &DbState,
    language: &LanguageState,
    checkout: &CheckoutState,
) -> ApiResult<CheckoutView> {
    debug!("mount_checkout command");

    let repo = db.inner().carts();
    let session = CheckoutSession::mount(&repo)
        .await
        .with_messages(CheckoutMessages::from_translator(&language.translator()));

    let view = session.view();
    checkout.mount(session);
    Ok(view)
}

/// The mounted checkout as it should render now.
pub fn get_checkout(checkout: &CheckoutState) -> ApiResult<CheckoutView> {
    checkout.with_session(CheckoutSession::view).ok_or_else(no_checkout)
}

/// Applies a voucher code.
///
/// ## Returns
/// - Valid code: the updated view, success message set
/// - Unknown code: `INVALID_VOUCHER`; the session keeps the error message
///   for the next `get_checkout`, and the input stays enabled
/// - Any code after a success: `VOUCHER_ALREADY_APPLIED`
pub fn apply_voucher(checkout: &CheckoutState, code: &str) -> ApiResult<CheckoutView> {
    debug!(code = %code, "apply_voucher command");

    checkout
        .with_session_mut(|session, vouchers| -> ApiResult<CheckoutView> {
            session.apply_voucher(vouchers, code)?;
            Ok(session.view())
        })
        .ok_or_else(no_checkout)?
}

/// Hands the final amount on to payment.
pub fn proceed_to_payment(checkout: &CheckoutState) -> ApiResult<PaymentSummary> {
    debug!("proceed_to_payment command");
    checkout
        .with_session(CheckoutSession::proceed_to_payment)
        .ok_or_else(no_checkout)
}

/// Leaves the checkout page. Returns whether a session was mounted.
pub fn unmount_checkout(checkout: &CheckoutState) -> bool {
    let session = checkout.unmount();
    if let Some(session) = &session {
        debug!(session_id = %session.id(), "Checkout unmounted");
    }
    session.is_some()
}
