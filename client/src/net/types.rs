//! Wire types for the EventSphere REST backend.
//!
//! Field names mirror the backend JSON exactly; everything the UI merely
//! displays is kept optional-with-default so a lagging backend deploy cannot
//! break deserialization of the whole envelope.

#[cfg(test)]
#[path = "types_test.rs"]
pub(crate) mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Standard response envelope: `{ data, message, status, status_code }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_code: u16,
}

/// Responses that carry no `data` payload (e.g. resend-code).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BasicResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_code: u16,
}

/// Error body shape for non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserWallet {
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
}

/// Profile returned by the backend. Treated as an opaque value object; the
/// only client-side mutation path is [`User::merge`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_picture: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub date_joined: String,
    #[serde(default)]
    pub referral_link: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub wallet: UserWallet,
}

impl User {
    /// Shallow-merge a partial profile update, field by field.
    pub fn merge(&mut self, patch: UserPatch) {
        if let Some(firstname) = patch.firstname {
            self.firstname = firstname;
        }
        if let Some(lastname) = patch.lastname {
            self.lastname = lastname;
        }
        if let Some(username) = patch.username {
            self.username = Some(username);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(profile_picture) = patch.profile_picture {
            self.profile_picture = profile_picture;
        }
        if let Some(country) = patch.country {
            self.country = Some(country);
        }
        if let Some(state) = patch.state {
            self.state = Some(state);
        }
        if let Some(gender) = patch.gender {
            self.gender = Some(gender);
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Partial profile update applied via `SessionController::update_user`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub gender: Option<String>,
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SignupData {
    pub reg_id: String,
}

/// Payload of a successful login or email verification.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSuccess {
    pub access_token: String,
    pub user_data: User,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ValidateTokenData {
    pub valid: bool,
    #[serde(default, rename = "type")]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user_data: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RefreshTokenData {
    pub access_token: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmailAvailability {
    pub available: bool,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UsernameAvailability {
    pub available: bool,
    pub username: String,
}

// =============================================================================
// EVENTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub organizer_id: String,
    #[serde(default)]
    pub organizer_name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub available_slots: u32,
    #[serde(default)]
    pub booked_slots: u32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Only present for authenticated requests.
    #[serde(default)]
    pub is_registered: Option<bool>,
    #[serde(default)]
    pub registration_status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EventCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EventRegistration {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub status: String,
    #[serde(default)]
    pub registered_at: String,
    pub event: Event,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EventPage {
    pub events: Vec<Event>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<EventCategory>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegistrationConfirmation {
    pub registration_id: String,
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegistrationPage {
    pub registrations: Vec<EventRegistration>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegistrationDetails {
    pub registration: EventRegistration,
}
