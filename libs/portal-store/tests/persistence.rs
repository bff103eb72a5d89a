//! Durability behaviour of the file-backed store across reopen.

use portal_store::{FileStore, KvStore, KvStoreExt};

#[test]
fn reopen_sees_prior_writes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portal.json");

    {
        let store = FileStore::open(&path);
        store.set_json("users", &vec!["Raven".to_string(), "Lord".to_string()]);
        store.set_raw("note", "free text, not JSON".to_string());
    }

    let reopened = FileStore::open(&path);
    assert_eq!(
        reopened.get_json::<Vec<String>>("users"),
        Some(vec!["Raven".to_string(), "Lord".to_string()])
    );
    assert_eq!(
        reopened.get_raw("note").as_deref(),
        Some("free text, not JSON")
    );
}

#[test]
fn remove_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portal.json");

    {
        let store = FileStore::open(&path);
        store.set_raw("session", "x".to_string());
        store.remove("session");
    }

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get_raw("session"), None);
}

#[test]
fn last_writer_wins_between_handles() {
    // Two handles on the same path behave like two tabs over one profile:
    // no conflict detection, the later flush is what persists.
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portal.json");

    let first = FileStore::open(&path);
    let second = FileStore::open(&path);
    first.set_raw("winner", "first".to_string());
    second.set_raw("winner", "second".to_string());

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get_raw("winner").as_deref(), Some("second"));
}
