use super::*;

pub(crate) fn sample_user() -> User {
    serde_json::from_value(serde_json::json!({
        "id": 7,
        "email": "ada@example.edu",
        "firstname": "Ada",
        "lastname": "Lovelace",
        "username": "ada",
        "profile_picture": "https://cdn.example/ada.png",
        "roles": ["student"],
        "wallet": { "balance": 12.5, "currency_code": "USD" }
    }))
    .expect("sample user")
}

#[test]
fn user_deserializes_with_missing_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "email": "a@b.c",
        "firstname": "A",
        "lastname": "B"
    }))
    .expect("minimal user");
    assert!(user.username.is_none());
    assert!(user.roles.is_empty());
    assert_eq!(user.wallet, UserWallet::default());
}

#[test]
fn envelope_tolerates_missing_metadata() {
    let env: ApiEnvelope<SignupData> =
        serde_json::from_str(r#"{"data":{"reg_id":"r-1"}}"#).expect("envelope");
    assert_eq!(env.data.reg_id, "r-1");
    assert_eq!(env.status_code, 0);
}

#[test]
fn validate_token_data_renames_type_field() {
    let data: ValidateTokenData = serde_json::from_value(serde_json::json!({
        "valid": true,
        "type": "access",
        "expires_at": 1_700_000_000,
        "user_data": serde_json::to_value(sample_user()).unwrap()
    }))
    .expect("validate data");
    assert_eq!(data.token_type.as_deref(), Some("access"));
    assert!(data.user_data.is_some());
}

#[test]
fn merge_applies_only_present_fields() {
    let mut user = sample_user();
    user.merge(UserPatch {
        phone: Some("+15550100".to_owned()),
        country: Some("NG".to_owned()),
        ..UserPatch::default()
    });
    assert_eq!(user.phone.as_deref(), Some("+15550100"));
    assert_eq!(user.country.as_deref(), Some("NG"));
    // Untouched fields survive.
    assert_eq!(user.firstname, "Ada");
    assert_eq!(user.username.as_deref(), Some("ada"));
}

#[test]
fn display_name_joins_names() {
    assert_eq!(sample_user().display_name(), "Ada Lovelace");
}

#[test]
fn event_deserializes_with_defaults() {
    let event: Event = serde_json::from_value(serde_json::json!({
        "id": "ev-1",
        "title": "Orientation"
    }))
    .expect("event");
    assert_eq!(event.capacity, 0);
    assert!(event.is_registered.is_none());
    assert!(event.gallery_images.is_empty());
}
