//! API error taxonomy.
//!
//! Every failure out of the request wrapper is one of these variants, so
//! calling code can route field-level errors to forms and everything else
//! to a notification without string matching.

use std::collections::HashMap;

/// Typed error raised by [`crate::net::api::ApiClient`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// API base URL was never configured. Fatal, not retried.
    #[error("API URL not configured")]
    Config,
    /// The request exceeded the fixed timeout.
    #[error("Request timeout - please try again")]
    Timeout,
    /// Non-2xx HTTP response.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// Field-level validation errors, routed to per-field form feedback.
        errors: Option<HashMap<String, Vec<String>>>,
    },
    /// No HTTP response was received at all.
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    /// HTTP status associated with the error. Network failures are status 0,
    /// matching the "no response received" convention.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Config => 500,
            Self::Timeout => 408,
            Self::Http { status, .. } => *status,
            Self::Network(_) => 0,
        }
    }

    /// Field-level error map, if the server provided one.
    #[must_use]
    pub fn field_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            Self::Http { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }
}
