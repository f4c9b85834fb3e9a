use std::path::PathBuf;

use mindself_cli::config::{MindselfConfig, load_config, migrate, save_config};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, MindselfConfig::default());
    assert_eq!(config.history_retention, 20);
    assert_eq!(config.config_version, 1);
}

#[test]
fn v0_config_gains_history_retention() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "time_zone": "Europe/Berlin" }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.history_retention, 20);
    assert_eq!(config.time_zone.as_deref(), Some("Europe/Berlin"));
}

#[test]
fn migration_keeps_an_existing_retention() {
    let json = serde_json::json!({ "history_retention": 5 });
    let migrated = migrate(json, 0).unwrap();
    assert_eq!(migrated["history_retention"], 5);
    assert_eq!(migrated["config_version"], 1);
}

#[test]
fn newer_config_is_rejected() {
    let json = serde_json::json!({ "config_version": 9, "history_retention": 20 });
    let err = migrate(json, 9).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(serde_json::json!([1, 2]), 0).is_err());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = MindselfConfig {
        config_version: 0,
        data_dir: Some(PathBuf::from("/tmp/mindself-data")),
        history_retention: 7,
        time_zone: Some("Asia/Shanghai".to_string()),
    };

    save_config(&path, &config).unwrap();
    assert!(!dir.path().join("nested").join("config.json.tmp").exists());

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.history_retention, 7);
    assert_eq!(loaded.data_dir, config.data_dir);
    assert_eq!(loaded.time_zone, config.time_zone);
}

#[test]
fn explicit_data_dir_wins() {
    let config = MindselfConfig {
        data_dir: Some(PathBuf::from("/srv/mindself")),
        ..MindselfConfig::default()
    };
    assert_eq!(
        config.resolved_data_dir().unwrap(),
        PathBuf::from("/srv/mindself")
    );
}
