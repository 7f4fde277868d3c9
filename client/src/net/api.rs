//! Generic request wrapper over the REST backend.
//!
//! RESPONSIBILITIES
//! ================
//! - Build absolute URLs from the configured base (fail fast when unset).
//! - Header policy: always `Accept: application/json`; `Content-Type` only
//!   when a body is present and none was given; stored bearer auto-merged
//!   unless the caller supplies its own `Authorization`.
//! - Map non-2xx responses to typed errors with status, message, and the
//!   optional field-error map.
//! - On a 401 from a non-auth endpoint while a token is held: one silent
//!   token refresh, then one retry. The retry bound is an explicit loop
//!   flag, so no amount of server 401s can recurse.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::net::http::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
use crate::net::types::{ApiEnvelope, ErrorBody, RefreshTokenData};
use crate::state::store::SessionStore;

/// Hard per-request timeout, enforced by the transport.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Endpoints under this prefix never trigger the auto-refresh path.
pub const AUTH_PREFIX: &str = "/api/v1/auth/";

const REFRESH_ENDPOINT: &str = "/api/v1/auth/refresh-token";

/// HTTP client bound to one backend base URL and one [`SessionStore`].
#[derive(Clone)]
pub struct ApiClient<T: HttpTransport> {
    base_url: Option<String>,
    transport: T,
    store: SessionStore,
}

impl<T: HttpTransport> ApiClient<T> {
    #[must_use]
    pub fn new(base_url: Option<String>, transport: T, store: SessionStore) -> Self {
        Self { base_url, transport, store }
    }

    /// Base URL from the build-time `EVENTSPHERE_API_URL` setting. A missing
    /// value surfaces as [`ApiError::Config`] on the first request.
    #[must_use]
    pub fn from_build_env(transport: T, store: SessionStore) -> Self {
        Self::new(option_env!("EVENTSPHERE_API_URL").map(str::to_owned), transport, store)
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Issue a request and deserialize the JSON payload.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the failure taxonomy. At most one automatic
    /// refresh-and-retry cycle happens per call.
    pub async fn request<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let base = self.base_url.as_deref().ok_or(ApiError::Config)?;
        let url = format!("{base}{endpoint}");
        let caller_sets_auth = headers.iter().any(|(k, _)| k.eq_ignore_ascii_case("Authorization"));
        let caller_sets_content_type =
            headers.iter().any(|(k, _)| k.eq_ignore_ascii_case("Content-Type"));

        let mut retried = false;
        loop {
            let mut request_headers: Vec<(String, String)> =
                vec![("Accept".to_owned(), "application/json".to_owned())];
            for (name, value) in headers {
                request_headers.push(((*name).to_owned(), (*value).to_owned()));
            }
            if body.is_some() && !caller_sets_content_type {
                request_headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
            }
            if !caller_sets_auth {
                if let Some(header) = self.store.auth_header() {
                    request_headers.push(header);
                }
            }

            let response = self
                .transport
                .execute(HttpRequest {
                    method,
                    url: url.clone(),
                    headers: request_headers,
                    body: body.clone(),
                })
                .await
                .map_err(|e| match e {
                    TransportError::Timeout => ApiError::Timeout,
                    TransportError::Network(message) => ApiError::Network(message),
                })?;

            if response.is_success() {
                return serde_json::from_str::<R>(&response.body).map_err(|_| ApiError::Http {
                    status: response.status,
                    message: "Invalid response format".to_owned(),
                    errors: None,
                });
            }

            let error = http_error(&response);

            let refresh_eligible = response.status == 401
                && !retried
                && !endpoint.contains(AUTH_PREFIX)
                && self.store.token().is_some();
            if refresh_eligible {
                retried = true;
                // Boxed to break the request -> refresh -> request cycle.
                let refresh: std::pin::Pin<
                    Box<dyn Future<Output = Result<String, ApiError>> + '_>,
                > = Box::pin(self.refresh_token());
                match refresh.await {
                    Ok(_) => continue,
                    Err(_) => {
                        // Refresh rejected: the session is over. Clear every
                        // persisted representation, then raise the original
                        // error so the guard redirects on next evaluation.
                        self.store.clear_all();
                        return Err(error);
                    }
                }
            }

            return Err(error);
        }
    }

    /// Exchange the stored token for a fresh one and persist it (durable
    /// storage and cookie together).
    ///
    /// # Errors
    ///
    /// Fails if no token is stored or the server rejects the refresh.
    pub async fn refresh_token(&self) -> Result<String, ApiError> {
        let envelope: ApiEnvelope<RefreshTokenData> =
            self.request(REFRESH_ENDPOINT, Method::Post, None, &[]).await?;
        self.store.persist_token(&envelope.data.access_token);
        Ok(envelope.data.access_token)
    }

    /// `GET` helper.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(endpoint, Method::Get, None, &[]).await
    }

    /// `POST` helper with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<serde_json::Value>,
        headers: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        self.request(endpoint, Method::Post, body.map(|b| b.to_string()), headers).await
    }

    /// `PUT` helper with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        self.request(endpoint, Method::Put, body.map(|b| b.to_string()), &[]).await
    }

    /// `DELETE` helper.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(endpoint, Method::Delete, None, &[]).await
    }
}

fn http_error(response: &HttpResponse) -> ApiError {
    let fallback = || format!("HTTP {}: {}", response.status, response.status_text);
    match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(parsed) => ApiError::Http {
            status: response.status,
            message: parsed.message.unwrap_or_else(fallback),
            errors: parsed.errors,
        },
        Err(_) => ApiError::Http {
            status: response.status,
            message: if response.body.trim().is_empty() { fallback() } else { response.body.clone() },
            errors: None,
        },
    }
}
