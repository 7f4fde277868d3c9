//! Typed auth operations over [`ApiClient`].
//!
//! Each operation has a defined side effect on the session store: login and
//! verify-email persist the token (storage + cookie) and the user snapshot,
//! logout clears everything locally, validate refreshes the snapshot on
//! success. Signup and the availability checks are side-effect free.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::json;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::HttpTransport;
use crate::net::types::{
    ApiEnvelope, AuthSuccess, BasicResponse, EmailAvailability, SignupData, SignupRequest,
    User, UsernameAvailability, ValidateTokenData,
};
use crate::state::store::SessionStore;

/// Auth operations bound to one API client.
#[derive(Clone)]
pub struct AuthGateway<T: HttpTransport> {
    client: ApiClient<T>,
}

impl<T: HttpTransport> AuthGateway<T> {
    #[must_use]
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        self.client.store()
    }

    /// Register a new account. Returns the registration id used for email
    /// verification. No token side effect; the account is unverified.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`]; field errors carry per-field validation.
    pub async fn signup(&self, data: &SignupRequest) -> Result<String, ApiError> {
        let envelope: ApiEnvelope<SignupData> = self
            .client
            .post(
                "/api/v1/auth/signup",
                Some(json!({
                    "email": data.email,
                    "firstname": data.firstname,
                    "lastname": data.lastname,
                    "password": data.password,
                })),
                &[],
            )
            .await?;
        Ok(envelope.data.reg_id)
    }

    /// Verify the email code. On success the token and user snapshot are
    /// persisted before returning.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn verify_email(&self, code: &str, reg_id: &str) -> Result<AuthSuccess, ApiError> {
        let envelope: ApiEnvelope<AuthSuccess> = self
            .client
            .post(
                "/api/v1/auth/verify-email",
                Some(json!({ "code": code, "reg_id": reg_id })),
                &[],
            )
            .await?;
        self.persist_auth(&envelope.data);
        Ok(envelope.data)
    }

    /// Log in with email-or-username and password. Same persistence side
    /// effect as [`Self::verify_email`].
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn login(&self, email_username: &str, password: &str) -> Result<AuthSuccess, ApiError> {
        let envelope: ApiEnvelope<AuthSuccess> = self
            .client
            .post(
                "/api/v1/auth/login",
                Some(json!({ "email_username": email_username, "password": password })),
                &[],
            )
            .await?;
        self.persist_auth(&envelope.data);
        Ok(envelope.data)
    }

    /// Local-only logout: clears token, cookie, and snapshot. No backend
    /// revocation endpoint exists, so this never touches the network and
    /// cannot fail. Idempotent.
    pub fn logout(&self) {
        self.store().clear_all();
    }

    /// Ask the backend to re-send the verification code for a registration.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn resend_code(&self, reg_id: &str) -> Result<(), ApiError> {
        let _: BasicResponse = self
            .client
            .post("/api/v1/auth/resend-code", Some(json!({ "reg_id": reg_id })), &[])
            .await?;
        Ok(())
    }

    /// Validate `token` as a bearer credential.
    ///
    /// Returns `Ok(Some(user))` with a refreshed snapshot when valid,
    /// `Ok(None)` when the server explicitly reports the token invalid
    /// (including a 401 from the validate endpoint itself).
    ///
    /// # Errors
    ///
    /// Transport and unexpected HTTP failures propagate, distinct from
    /// "explicitly invalid".
    pub async fn validate_token(&self, token: &str) -> Result<Option<User>, ApiError> {
        let bearer = format!("Bearer {token}");
        let result: Result<ApiEnvelope<ValidateTokenData>, ApiError> = self
            .client
            .post("/api/v1/auth/validate-token", None, &[("Authorization", &bearer)])
            .await;

        match result {
            Ok(envelope) => match envelope.data {
                ValidateTokenData { valid: true, user_data: Some(user), .. } => {
                    self.store().persist_user(&user);
                    Ok(Some(user))
                }
                _ => Ok(None),
            },
            Err(ApiError::Http { status: 401, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Refresh the access token using the stored one as credential. The new
    /// token is persisted (storage + cookie) before returning.
    ///
    /// # Errors
    ///
    /// Fails if the server rejects the refresh.
    pub async fn refresh_access_token(&self) -> Result<String, ApiError> {
        self.client.refresh_token().await
    }

    /// Pure read: whether `email` is free to register.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn check_email_availability(&self, email: &str) -> Result<EmailAvailability, ApiError> {
        let envelope: ApiEnvelope<EmailAvailability> = self
            .client
            .post("/api/v1/auth/check-email", Some(json!({ "email": email })), &[])
            .await?;
        Ok(envelope.data)
    }

    /// Pure read: whether `username` is free to claim.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn check_username_availability(
        &self,
        username: &str,
    ) -> Result<UsernameAvailability, ApiError> {
        let envelope: ApiEnvelope<UsernameAvailability> = self
            .client
            .post("/api/v1/auth/check-username", Some(json!({ "username": username })), &[])
            .await?;
        Ok(envelope.data)
    }

    fn persist_auth(&self, auth: &AuthSuccess) {
        self.store().persist_token(&auth.access_token);
        self.store().persist_user(&auth.user_data);
    }
}
