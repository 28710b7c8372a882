use std::fs;

use investpro_core::models::User;
use investpro_core::session::{FileSession, MemorySession, SessionBackend, SessionStore, SESSION_KEY};
use tempfile::TempDir;

#[test]
fn test_login_fabricates_user_from_email() {
    let mut store = SessionStore::new(MemorySession::new());

    let user = store.login("jane.doe@example.com", "ignored").unwrap();

    assert_eq!(user.name, "jane.doe");
    assert_eq!(user.email, "jane.doe@example.com");
    assert!(user.id.starts_with("user_"));
    assert!(user.phone.is_none());
    assert!(store.user().is_some());
}

#[test]
fn test_login_without_at_sign_uses_whole_input() {
    // The store does no validation; the presentation layer owns that
    let user = User::from_email("not-an-email");
    assert_eq!(user.name, "not-an-email");
}

#[test]
fn test_signup_stores_profile_details() {
    let mut store = SessionStore::new(MemorySession::new());

    let user = store
        .signup("Jane Doe", "jane@example.com", "ignored", Some("555-0100".to_string()))
        .unwrap();

    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.phone.as_deref(), Some("555-0100"));
}

#[test]
fn test_session_survives_restart_via_file_slot() {
    let dir = TempDir::new().unwrap();

    let mut store = SessionStore::new(FileSession::new(dir.path()));
    let original = store.login("jane@example.com", "pw").unwrap().clone();

    // Cold start: a fresh store over the same directory sees the session
    let mut restarted = SessionStore::new(FileSession::new(dir.path()));
    let restored = restarted.restore().unwrap().cloned();

    assert_eq!(restored, Some(original));
}

#[test]
fn test_logout_clears_slot_and_session() {
    let dir = TempDir::new().unwrap();

    let mut store = SessionStore::new(FileSession::new(dir.path()));
    store.login("jane@example.com", "pw").unwrap();
    store.logout().unwrap();

    assert!(store.user().is_none());
    assert!(!dir.path().join(format!("{SESSION_KEY}.json")).exists());

    let mut restarted = SessionStore::new(FileSession::new(dir.path()));
    assert!(restarted.restore().unwrap().is_none());
}

#[test]
fn test_logout_without_slot_is_fine() {
    let dir = TempDir::new().unwrap();
    let mut store = SessionStore::new(FileSession::new(dir.path()));

    store.logout().unwrap();
    assert!(store.user().is_none());
}

#[test]
fn test_restore_with_empty_slot() {
    let dir = TempDir::new().unwrap();
    let mut store = SessionStore::new(FileSession::new(dir.path()));

    assert!(store.restore().unwrap().is_none());
}

#[test]
fn test_corrupt_slot_treated_as_no_session() {
    let dir = TempDir::new().unwrap();
    let backend = FileSession::new(dir.path());
    fs::write(backend.path(), "{not valid json").unwrap();

    assert!(backend.load().unwrap().is_none());
}

#[test]
fn test_relogin_replaces_user() {
    let mut store = SessionStore::new(MemorySession::new());

    store.login("first@example.com", "pw").unwrap();
    let second = store.login("second@example.com", "pw").unwrap().clone();

    assert_eq!(store.user(), Some(&second));
    assert_eq!(store.user().unwrap().name, "second");
}

#[test]
fn test_file_slot_contents_are_user_json() {
    let dir = TempDir::new().unwrap();
    let mut store = SessionStore::new(FileSession::new(dir.path()));
    store.login("jane@example.com", "pw").unwrap();

    let raw = fs::read_to_string(dir.path().join(format!("{SESSION_KEY}.json"))).unwrap();
    let parsed: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.email, "jane@example.com");
}
