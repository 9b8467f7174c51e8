mod common;

use common::temp_config;
use rstaffdesk::config::{Config, PAGE_SIZE_CHOICES};
use rstaffdesk::core::session::{FileSessionStore, MemorySessionStore, SessionStore};
use rstaffdesk::errors::AppError;
use rstaffdesk::models::Session;
use std::fs;
use std::time::Duration;

fn session() -> Session {
    Session {
        token: "secret-token".into(),
        organization: "acme".into(),
        email: Some("ana@example.com".into()),
        role: None,
    }
}

#[test]
fn test_memory_session_lifecycle() {
    let store = MemorySessionStore::new();
    assert_eq!(store.get().unwrap(), None);

    store.set(session()).unwrap();
    assert_eq!(store.get().unwrap(), Some(session()));

    store.clear().unwrap();
    assert_eq!(store.get().unwrap(), None);

    let preset = MemorySessionStore::with_session(session());
    assert_eq!(preset.get().unwrap().map(|s| s.organization), Some("acme".into()));
}

#[test]
fn test_file_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.yaml");

    FileSessionStore::new(&path).set(session()).unwrap();
    assert!(path.exists());

    let reopened = FileSessionStore::new(&path);
    assert_eq!(reopened.get().unwrap(), Some(session()));

    reopened.clear().unwrap();
    assert!(!path.exists());
    assert_eq!(reopened.get().unwrap(), None);
    // Clearing twice is fine.
    reopened.clear().unwrap();
}

#[test]
fn test_empty_session_file_means_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.yaml");
    fs::write(&path, "  \n").unwrap();

    assert_eq!(FileSessionStore::new(&path).get().unwrap(), None);
}

#[test]
fn test_session_debug_hides_token() {
    let shown = format!("{:?}", session());
    assert!(!shown.contains("secret-token"));
    assert!(shown.contains("acme"));
}

#[test]
fn test_missing_config_gives_defaults() {
    let (_dir, path) = temp_config();
    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.page_size, 10);
    assert!(PAGE_SIZE_CHOICES.contains(&cfg.page_size));
    assert!(cfg.keep_previous_data);
    assert_eq!(cfg.sweep_interval(), Duration::from_secs(600));
}

#[test]
fn test_partial_config_fills_defaults() {
    let (_dir, path) = temp_config();
    fs::write(&path, "page_size: 20\nfetch_timeout_secs: 5\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.page_size, 20);
    assert_eq!(cfg.fetch_timeout(), Duration::from_secs(5));
    assert_eq!(cfg.api_base_url, Config::default().api_base_url);
}

#[test]
fn test_invalid_config_is_rejected() {
    let (_dir, path) = temp_config();

    fs::write(&path, "page_size: 0\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));

    fs::write(&path, "page_size: [not, a, number]\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
}

#[test]
fn test_config_save_and_reload() {
    let (dir, _) = temp_config();
    let path = dir.path().join("sub").join("rstaffdesk.conf");

    let cfg = Config {
        api_base_url: "http://localhost:8000/".into(),
        page_size: 50,
        keep_previous_data: false,
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), cfg);
}

#[test]
fn test_export_dir_expands_home() {
    let cfg = Config {
        export_dir: "~/reports".into(),
        ..Config::default()
    };
    if let Some(home) = dirs::home_dir() {
        assert_eq!(cfg.export_path(), home.join("reports"));
    }

    let cfg = Config {
        export_dir: "/tmp/reports".into(),
        ..Config::default()
    };
    assert_eq!(cfg.export_path(), std::path::PathBuf::from("/tmp/reports"));
}
