//! # Checkout State
//!
//! The mounted checkout page, if any.
//!
//! ```text
//! None ──mount──► Some(session) ──apply_voucher──► Some(session')
//!   ▲                  │
//!   └────unmount───────┘   (a remount reads the cart again and drops
//!                           any applied voucher)
//! ```

use std::sync::Mutex;

use shoez_core::checkout::CheckoutSession;
use shoez_core::voucher::VoucherBook;

#[derive(Debug, Default)]
pub struct CheckoutState {
    session: Mutex<Option<CheckoutSession>>,
    vouchers: VoucherBook,
}

impl CheckoutState {
    pub fn new(vouchers: VoucherBook) -> Self {
        CheckoutState {
            session: Mutex::new(None),
            vouchers,
        }
    }

    pub fn vouchers(&self) -> &VoucherBook {
        &self.vouchers
    }

    /// Replaces the mounted session.
    pub fn mount(&self, session: CheckoutSession) {
        *self.session.lock().unwrap_or_else(|p| p.into_inner()) = Some(session);
    }

    /// Drops the mounted session, returning it.
    pub fn unmount(&self) -> Option<CheckoutSession> {
        self.session.lock().unwrap_or_else(|p| p.into_inner()).take()
    }

    /// Runs `f` on the mounted session; `None` when nothing is mounted.
    pub fn with_session<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&CheckoutSession) -> R,
    {
        let session = self.session.lock().unwrap_or_else(|p| p.into_inner());
        session.as_ref().map(f)
    }

    pub fn with_session_mut<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut CheckoutSession, &VoucherBook) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(|p| p.into_inner());
        session.as_mut().map(|s| f(s, &self.vouchers))
    }
}
