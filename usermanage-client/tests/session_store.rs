use usermanage_client::session::{SessionStorage, SessionStore};
use usermanage_client::Session;

fn storage_in(dir: &tempfile::TempDir) -> SessionStorage {
    SessionStorage::with_path(dir.path().join("session.json"))
}

#[test]
fn session_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let store = SessionStore::with_storage(storage_in(&dir));
    store.set_session("persisted-token".into(), false, true);

    let reopened = SessionStore::with_storage(storage_in(&dir));
    let session = reopened.current();
    assert_eq!(session.token.as_deref(), Some("persisted-token"));
    assert!(!session.is_superuser);
    assert!(session.is_staff);
}

#[test]
fn clearing_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = SessionStore::with_storage(SessionStorage::with_path(path.clone()));
    store.set_session("tok".into(), true, false);
    assert!(path.exists());

    store.clear_session();
    assert!(!path.exists());

    let reopened = SessionStore::with_storage(SessionStorage::with_path(path));
    assert_eq!(reopened.current(), Session::anonymous());
}

#[test]
fn values_are_stored_as_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = SessionStore::with_storage(SessionStorage::with_path(path.clone()));
    store.set_session("tok".into(), true, false);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["token"], "tok");
    assert_eq!(raw["is_superuser"], "true");
    assert_eq!(raw["is_staff"], "false");
}

#[test]
fn unreadable_state_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let store = SessionStore::with_storage(SessionStorage::with_path(path));
    assert_eq!(store.current(), Session::anonymous());
}

#[test]
fn missing_file_loads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    assert!(storage.load().unwrap().is_none());
    // Clearing an absent session is not an error.
    storage.clear().unwrap();
}
