use orgchart::config::*;
use orgchart::errors::OrgChartError;
use tempfile::TempDir;

#[test]
fn test_default_config_uses_roster_headers() {
    let config = ChartConfig::default();
    assert_eq!(config.version, 1);
    assert_eq!(config.columns.role, "תפקיד");
    assert_eq!(config.columns.id, "ת.ז");
    assert_eq!(config.board_marker, "דירקטור");
    assert!(config.strip_quotes);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = load_config(&default_config_path(dir.path())).unwrap();
    assert_eq!(loaded, ChartConfig::default());
}

#[test]
fn test_save_and_load_json_config() {
    let dir = TempDir::new().unwrap();
    let path = default_config_path(dir.path());
    let config = ChartConfig {
        board_marker: "Board".to_string(),
        ..ChartConfig::default()
    };
    save_config(&path, &config).unwrap();
    assert!(path.ends_with(CONFIG_FILENAME));
    assert!(!path.with_extension("tmp").exists(), "temp file must be renamed");

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_save_and_load_toml_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("orgchart.toml");
    let mut config = ChartConfig::default();
    config.columns.id = "Employee ID".to_string();
    config.strip_quotes = false;

    save_config(&path, &config).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[columns]"), "expected a TOML table, got:\n{contents}");

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orgchart.json");
    std::fs::write(&path, r#"{ "columns": { "id": "EmpNo" } }"#).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.columns.id, "EmpNo");
    assert_eq!(loaded.columns.role, "תפקיד");
    assert_eq!(loaded.board_marker, "דירקטור");
}

#[test]
fn test_invalid_json_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orgchart.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, OrgChartError::Config { .. }), "got {err:?}");
}

#[test]
fn test_validate_rejects_empty_marker_and_columns() {
    let config = ChartConfig {
        board_marker: String::new(),
        ..ChartConfig::default()
    };
    assert!(matches!(config.validate(), Err(OrgChartError::Config { .. })));

    let mut config = ChartConfig::default();
    config.columns.manager = "  ".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("manager"), "got: {err}");
}

#[test]
fn test_load_rejects_invalid_saved_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orgchart.json");
    std::fs::write(&path, r#"{ "board_marker": "" }"#).unwrap();
    assert!(load_config(&path).is_err());
}
