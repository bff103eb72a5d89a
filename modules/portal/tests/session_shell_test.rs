//! Session shell behaviour across "reloads": a reload is modelled by
//! reopening a file-backed store at the same path and building a fresh
//! shell over it.

mod common;

use std::sync::Arc;

use portal::config::PortalConfig;
use portal::domain::auth::{Credentials, Registration};
use portal::domain::profile::ProfileService;
use portal::infra::images::DataUrlReader;
use portal::shell::{SessionShell, Tab};
use portal_store::{FileStore, KvStore};

fn store_at(path: &std::path::Path) -> Arc<dyn KvStore> {
    Arc::new(FileStore::open(path))
}

#[test]
fn member_session_survives_a_reload() {
    common::init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portal.json");

    {
        let mut shell = SessionShell::open(store_at(&path), PortalConfig::default());
        assert!(!shell.is_authenticated());
        shell
            .register(&Registration {
                name: "Raven".into(),
                password: "wolf1".into(),
            })
            .expect("register");
        assert_eq!(shell.active_tab(), Tab::Home);
    }

    let reloaded = SessionShell::open(store_at(&path), PortalConfig::default());
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.current_user().expect("user").name, "Raven");
}

#[test]
fn guest_session_never_survives_a_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portal.json");

    {
        let mut shell = SessionShell::open(store_at(&path), PortalConfig::default());
        shell
            .login(&Credentials {
                name: "ГОСТЬ".into(),
                ..Credentials::default()
            })
            .expect("guest login");
        assert!(shell.is_authenticated());
    }

    let reloaded = SessionShell::open(store_at(&path), PortalConfig::default());
    assert!(!reloaded.is_authenticated());
}

#[test]
fn sign_out_clears_the_persisted_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portal.json");

    {
        let mut shell = SessionShell::open(store_at(&path), PortalConfig::default());
        shell
            .login(&Credentials {
                code: "RMP_DEP_KOCHERGA_555_Y".into(),
                ..Credentials::default()
            })
            .expect("code login");
        shell.sign_out();
        assert!(!shell.is_authenticated());
    }

    let reloaded = SessionShell::open(store_at(&path), PortalConfig::default());
    assert!(!reloaded.is_authenticated());
}

#[test]
fn settings_avatar_change_writes_back_into_the_shell() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portal.json");
    let store = store_at(&path);

    let mut shell = SessionShell::open(store.clone(), PortalConfig::default());
    shell
        .register(&Registration {
            name: "Raven".into(),
            password: "wolf1".into(),
        })
        .expect("register");
    shell.set_active_tab(Tab::Settings);

    let image = dir.path().join("face.png");
    std::fs::write(&image, b"pixels").expect("write image");
    let profile = ProfileService::new(store, Arc::new(DataUrlReader));
    let current = shell.current_user().expect("user").clone();
    let updated = profile.change_avatar(&current, &image).expect("avatar");
    shell.apply_profile_update(updated.clone());

    assert_eq!(shell.current_user().expect("user").avatar, updated.avatar);

    // The merged avatar also survives the next reload.
    let reloaded = SessionShell::open(store_at(&path), PortalConfig::default());
    assert_eq!(reloaded.current_user().expect("user").avatar, updated.avatar);
}
