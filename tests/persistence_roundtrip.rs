use eframe_playground::state::LoadOutcome;
use eframe_playground::{Language, PersistenceBridge, Session, Theme};

fn populated_session(bridge: &PersistenceBridge) -> Session {
    let mut session = Session::new(bridge.clone());
    let html = session.create_file("index", Language::Html);
    session.update(html, "<p>Hi</p>");
    let css = session.create_file("style", Language::Css);
    session.update(css, "p{color:red}");
    session.create_file("tool", Language::from_tag("fortran"));
    session.set_theme(Theme::Solarized);
    session
}

#[test]
fn test_save_then_load_restores_equal_state() {
    let bridge = PersistenceBridge::in_memory("roundtrip");
    let session = populated_session(&bridge);
    session.save().unwrap();

    let mut restored = Session::new(bridge.clone());
    assert_eq!(restored.load().unwrap(), LoadOutcome::Restored { files: 3 });
    assert_eq!(restored.store().list(), session.store().list());
    assert_eq!(restored.theme(), Theme::Solarized);
    assert_eq!(restored.store().active_id(), Some(session.store().list()[0].id));
}

#[test]
fn test_write_through_without_explicit_save() {
    let bridge = PersistenceBridge::in_memory("write_through");
    let session = populated_session(&bridge);

    let saved = bridge.load().unwrap().unwrap();
    assert_eq!(saved.files, session.store().list());
    assert_eq!(saved.theme, Theme::Solarized);
}

#[test]
fn test_load_with_nothing_saved_keeps_state() {
    let bridge = PersistenceBridge::in_memory("empty");
    let mut session = Session::new(bridge);
    session.create_file("index", Language::Html);
    session.bridge().clear().unwrap();
    let before = session.store().clone();

    assert_eq!(session.load().unwrap(), LoadOutcome::NothingSaved);
    assert_eq!(session.store(), &before);
}

#[test]
fn test_restored_empty_list_gets_default_file_on_startup() {
    let bridge = PersistenceBridge::in_memory("empty_list");
    bridge.write_raw(r#"{"files": [], "theme": "light"}"#).unwrap();

    let mut session = Session::new(bridge);
    assert_eq!(session.initialize().unwrap(), LoadOutcome::Restored { files: 0 });
    assert_eq!(session.theme(), Theme::Light);
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().list()[0].name, "index.html");
}

#[test]
fn test_new_ids_do_not_collide_with_restored_ones() {
    let bridge = PersistenceBridge::in_memory("ids");
    bridge
        .write_raw(
            r#"{"files": [{"id": 99999999999999, "name": "a.html", "language": "html", "content": ""}]}"#,
        )
        .unwrap();

    let mut session = Session::new(bridge);
    session.load().unwrap();
    let fresh = session.create_file("b", Language::Html);
    assert!(fresh.0 > 99999999999999);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_directory_backend_roundtrip() {
    use eframe_playground::state::DirectoryStore;

    let dir = std::env::temp_dir().join(format!("eframe_playground_persist_{}", std::process::id()));
    let bridge = PersistenceBridge::new(DirectoryStore::new(&dir), "amazingEditorData");
    let session = populated_session(&bridge);

    let reopened = PersistenceBridge::new(DirectoryStore::new(&dir), "amazingEditorData");
    let mut restored = Session::new(reopened);
    restored.load().unwrap();
    assert_eq!(restored.store().list(), session.store().list());
    assert!(dir.join("amazingEditorData.json").exists());

    let _ = std::fs::remove_dir_all(&dir);
}
