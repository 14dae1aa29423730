use super::*;

fn session_with(token: Option<&str>, role: Option<&str>) -> Session {
    let store = MemoryStore::new();
    if let Some(token) = token {
        store.set(TOKEN_KEY, token);
    }
    if let Some(role) = role {
        store.set(ROLE_KEY, role);
    }
    Session::new(store)
}

// =============================================================
// Token reads
// =============================================================

#[test]
fn empty_session_has_no_token() {
    let session = Session::in_memory();
    assert!(session.token().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn stored_token_is_returned() {
    let session = session_with(Some("abc123"), None);
    assert_eq!(session.token().as_deref(), Some("abc123"));
    assert_eq!(session.bearer_token().as_deref(), Some("abc123"));
    assert!(session.is_authenticated());
}

#[test]
fn empty_token_is_authenticated_but_not_a_bearer() {
    let session = session_with(Some(""), None);
    assert!(session.is_authenticated());
    assert!(session.bearer_token().is_none());
}

#[test]
fn reads_are_not_cached() {
    let session = Session::in_memory();
    assert!(!session.is_authenticated());
    session.store_credentials("t1", None);
    assert!(session.is_authenticated());
    session.clear();
    assert!(!session.is_authenticated());
}

#[test]
fn clones_share_the_same_store() {
    let session = Session::in_memory();
    let other = session.clone();
    session.store_credentials("shared", Some("CA"));
    assert_eq!(other.token().as_deref(), Some("shared"));
    assert_eq!(other.role().as_deref(), Some("CA"));
}

// =============================================================
// Role and credential writes
// =============================================================

#[test]
fn store_credentials_without_role_removes_stale_role() {
    let session = session_with(Some("old"), Some("CA"));
    session.store_credentials("new", None);
    assert_eq!(session.token().as_deref(), Some("new"));
    assert!(session.role().is_none());
}

#[test]
fn clear_removes_token_and_role() {
    let session = session_with(Some("t"), Some("admin"));
    session.clear();
    assert!(session.token().is_none());
    assert!(session.role().is_none());
}

#[test]
fn debug_output_does_not_leak_token() {
    let session = session_with(Some("super-secret"), None);
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("authenticated: true"));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_empty_in_non_csr_tests() {
    let session = Session::browser();
    session.store_credentials("ignored", Some("CA"));
    assert!(session.token().is_none());
    assert!(session.role().is_none());
}
