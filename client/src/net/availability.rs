//! Debounced email/username availability checks for the signup form.
//!
//! Each keystroke supersedes the previous check: the page cancels the old
//! token, hands a fresh one to a new task, and only the task whose token is
//! still live when the response lands may report a result. Failures degrade
//! to "no feedback" rather than surfacing form errors mid-typing.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::net::auth::AuthGateway;
use crate::net::http::HttpTransport;
use crate::net::types::{EmailAvailability, UsernameAvailability};

/// Debounce interval between the last keystroke and the network call.
pub const DEBOUNCE_MS: u32 = 400;

/// Cooperative cancellation handle. Cloning shares the flag; cancelling any
/// clone cancels them all.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

async fn debounce_delay() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(DEBOUNCE_MS).await;
}

/// Debounced email check. Returns `None` when cancelled, superseded, or on
/// any failure; the caller only ever sees results that are still current.
pub async fn debounced_email_check<T: HttpTransport>(
    gateway: &AuthGateway<T>,
    email: String,
    cancel: CancelToken,
) -> Option<EmailAvailability> {
    debounce_delay().await;
    if cancel.is_cancelled() {
        return None;
    }
    let result = gateway.check_email_availability(&email).await.ok()?;
    if cancel.is_cancelled() {
        return None;
    }
    Some(result)
}

/// Debounced username check with the same cancellation contract.
pub async fn debounced_username_check<T: HttpTransport>(
    gateway: &AuthGateway<T>,
    username: String,
    cancel: CancelToken,
) -> Option<UsernameAvailability> {
    debounce_delay().await;
    if cancel.is_cancelled() {
        return None;
    }
    let result = gateway.check_username_availability(&username).await.ok()?;
    if cancel.is_cancelled() {
        return None;
    }
    Some(result)
}
