use shell::storage::MemoryStore;

use super::*;

#[test]
fn session_default_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.is_signed_in());
    assert_eq!(state.display_name(), "OPERATOR");
}

#[test]
fn session_display_name_uses_callsign() {
    let state = SessionState { callsign: Some("ATLAS-7".to_owned()) };
    assert!(state.is_signed_in());
    assert_eq!(state.display_name(), "ATLAS-7");
}

#[test]
fn sign_in_sets_callsign_and_writes_flag() {
    let memory = Arc::new(MemoryStore::new());
    let store = SessionStore::new(memory.clone());
    let mut state = SessionState::default();

    store.sign_in(&mut state, "ATLAS-7".to_owned()).unwrap();

    assert!(state.is_signed_in());
    assert_eq!(memory.get(SESSION_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn sign_in_keeps_callsign_when_flag_write_fails() {
    let store = SessionStore::new(Arc::new(MemoryStore::with_quota(2)));
    let mut state = SessionState::default();

    let err = store.sign_in(&mut state, "ATLAS-7".to_owned()).unwrap_err();

    assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    assert_eq!(state.display_name(), "ATLAS-7");
}
