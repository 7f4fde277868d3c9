use std::rc::Rc;

use super::*;
use crate::net::types::types_test::sample_user;

fn store_with_backend() -> (SessionStore, Rc<MemoryStorage>) {
    let backend = Rc::new(MemoryStorage::default());
    (SessionStore::new(backend.clone()), backend)
}

#[test]
fn token_absent_by_default() {
    let (store, _) = store_with_backend();
    assert!(store.token().is_none());
    assert!(store.auth_header().is_none());
}

#[test]
fn persist_token_sets_storage_and_cookie_together() {
    let (store, backend) = store_with_backend();
    store.persist_token("tok-1");
    assert_eq!(store.token().as_deref(), Some("tok-1"));
    assert_eq!(backend.cookie_value().as_deref(), Some("tok-1"));
}

#[test]
fn auth_header_formats_bearer() {
    let (store, _) = store_with_backend();
    store.persist_token("abc");
    let (name, value) = store.auth_header().expect("header");
    assert_eq!(name, "Authorization");
    assert_eq!(value, "Bearer abc");
}

#[test]
fn empty_token_treated_as_absent() {
    let (store, _) = store_with_backend();
    store.persist_token("");
    assert!(store.token().is_none());
}

#[test]
fn user_snapshot_round_trips() {
    let (store, _) = store_with_backend();
    let user = sample_user();
    store.persist_user(&user);
    assert_eq!(store.cached_user(), Some(user));
}

#[test]
fn corrupt_snapshot_reads_as_absent() {
    let (store, backend) = store_with_backend();
    backend.set_item(USER_KEY, "{not json");
    assert!(store.cached_user().is_none());
}

#[test]
fn clear_all_removes_every_representation() {
    let (store, backend) = store_with_backend();
    store.persist_token("tok");
    store.persist_user(&sample_user());
    store.clear_all();
    assert!(store.token().is_none());
    assert!(store.cached_user().is_none());
    assert!(backend.cookie_value().is_none());
}

#[test]
fn clear_all_is_idempotent() {
    let (store, _) = store_with_backend();
    store.clear_all();
    store.clear_all();
    assert!(store.token().is_none());
}
