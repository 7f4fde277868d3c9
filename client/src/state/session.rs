//! Session lifecycle controller.
//!
//! STATE MACHINE
//! =============
//! Anonymous -> token-present-unvalidated -> validated, with a transient
//! refresh leg: on mount the controller hydrates from the cached snapshot
//! for instant UI, then validates the token in the background; an invalid
//! token gets one refresh + re-validate before the session is torn down.
//!
//! The controller is an injected value, provided via Leptos context at the
//! application root and constructed per-test in unit tests, never a
//! module-level global. A watcher callback mirrors every mutation into the
//! UI's `RwSignal<Session>`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::auth::AuthGateway;
use crate::net::error::ApiError;
use crate::net::http::{ClientTransport, HttpTransport};
use crate::net::types::{SignupRequest, User, UserPatch};
use crate::state::store::SessionStore;

/// Reactive session snapshot consumed by pages and guards.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for Session {
    /// A session starts loading: guards must not redirect before the
    /// startup hydration has run.
    fn default() -> Self {
        Self { user: None, is_loading: true, error: None }
    }
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Controller type used by the application at runtime.
pub type AppSessionController = SessionController<ClientTransport>;

/// Owns the session state and drives every transition through the gateway.
pub struct SessionController<T: HttpTransport> {
    gateway: AuthGateway<T>,
    session: RefCell<Session>,
    watcher: RefCell<Option<Rc<dyn Fn(&Session)>>>,
}

impl<T: HttpTransport> SessionController<T> {
    #[must_use]
    pub fn new(gateway: AuthGateway<T>) -> Self {
        Self {
            gateway,
            session: RefCell::new(Session::default()),
            watcher: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn gateway(&self) -> &AuthGateway<T> {
        &self.gateway
    }

    #[must_use]
    pub fn api(&self) -> &crate::net::api::ApiClient<T> {
        self.gateway.client()
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        self.gateway.store()
    }

    /// Current session snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Register the callback invoked after every session mutation.
    pub fn set_watcher(&self, watcher: impl Fn(&Session) + 'static) {
        *self.watcher.borrow_mut() = Some(Rc::new(watcher));
        // Sync the observer with the current state immediately.
        let session = self.snapshot();
        if let Some(w) = self.watcher.borrow().as_ref() {
            w(&session);
        }
    }

    fn update(&self, mutate: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.session.borrow_mut();
            mutate(&mut session);
            session.clone()
        };
        let watcher = self.watcher.borrow().clone();
        if let Some(w) = watcher {
            w(&snapshot);
        }
    }

    /// Startup hydration, run once on mount.
    ///
    /// 1. No stored token: unauthenticated, done.
    /// 2. Token + cached snapshot: show the cached user immediately
    ///    (`is_loading` drops before any network completes).
    /// 3. Validate in the background; invalid tokens get one refresh and
    ///    re-validate. Any failure in that chain tears the session down.
    pub async fn initialize(&self) {
        let Some(token) = self.store().token() else {
            self.update(|s| {
                s.user = None;
                s.is_loading = false;
            });
            return;
        };

        if let Some(cached) = self.store().cached_user() {
            self.update(|s| {
                s.user = Some(cached);
                s.is_loading = false;
            });
        }

        match self.validate_or_refresh(&token).await {
            Ok(Some(user)) => self.update(|s| {
                s.user = Some(user);
                s.is_loading = false;
            }),
            Ok(None) | Err(_) => {
                self.store().clear_all();
                self.update(|s| {
                    s.user = None;
                    s.is_loading = false;
                });
            }
        }
    }

    async fn validate_or_refresh(&self, token: &str) -> Result<Option<User>, ApiError> {
        if let Some(user) = self.gateway.validate_token(token).await? {
            return Ok(Some(user));
        }
        let fresh = self.gateway.refresh_access_token().await?;
        self.gateway.validate_token(&fresh).await
    }

    /// Register a new account; returns the registration id for the verify
    /// step. Records a display message and re-raises on failure.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] after recording it in `Session.error`.
    pub async fn signup(&self, data: &SignupRequest) -> Result<String, ApiError> {
        self.update(|s| {
            s.error = None;
            s.is_loading = true;
        });
        let result = self.gateway.signup(data).await;
        self.finish(result.as_ref().err());
        result
    }

    /// Verify the email code; on success the session becomes authenticated.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] after recording it in `Session.error`.
    pub async fn verify_email(&self, code: &str, reg_id: &str) -> Result<(), ApiError> {
        self.update(|s| {
            s.error = None;
            s.is_loading = true;
        });
        let result = self.gateway.verify_email(code, reg_id).await;
        if let Ok(auth) = &result {
            let user = auth.user_data.clone();
            self.update(|s| s.user = Some(user));
        }
        self.finish(result.as_ref().err());
        result.map(|_| ())
    }

    /// Log in; on success the session becomes authenticated.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] after recording it in `Session.error`.
    pub async fn login(&self, email_username: &str, password: &str) -> Result<(), ApiError> {
        self.update(|s| {
            s.error = None;
            s.is_loading = true;
        });
        let result = self.gateway.login(email_username, password).await;
        if let Ok(auth) = &result {
            let user = auth.user_data.clone();
            self.update(|s| s.user = Some(user));
        }
        self.finish(result.as_ref().err());
        result.map(|_| ())
    }

    /// Local logout: clears all persisted auth state and the in-memory user.
    /// Safe to call repeatedly.
    pub fn logout(&self) {
        self.update(|s| s.is_loading = true);
        self.gateway.logout();
        self.update(|s| {
            s.user = None;
            s.is_loading = false;
        });
    }

    pub fn clear_error(&self) {
        self.update(|s| s.error = None);
    }

    /// Shallow-merge a profile update into the current user and re-persist
    /// the snapshot. No-op while unauthenticated.
    pub fn update_user(&self, patch: UserPatch) {
        let merged = {
            let session = self.session.borrow();
            let Some(user) = session.user.as_ref() else { return };
            let mut merged = user.clone();
            merged.merge(patch);
            merged
        };
        self.store().persist_user(&merged);
        self.update(|s| s.user = Some(merged));
    }

    /// Record the failure message (if any) and always drop the loading flag.
    fn finish(&self, error: Option<&ApiError>) {
        let message = error.map(ToString::to_string);
        self.update(|s| {
            if let Some(message) = message {
                s.error = Some(message);
            }
            s.is_loading = false;
        });
    }
}
