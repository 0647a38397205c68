use std::fs;
use std::path::PathBuf;

use critvar_cli::config::{FileConfig, Overrides, Settings, load_file_config};
use tempfile::TempDir;

#[test]
fn explicit_config_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("critvar.toml");
    fs::write(&path, "threshold = 0.8\nvariables_file = \"catalogo.json\"\n").unwrap();

    let config = load_file_config(Some(path.as_path())).unwrap();
    let settings = Settings::resolve(config, Overrides::default()).unwrap();
    assert_eq!(settings.threshold.value(), 0.8);
    assert_eq!(settings.variables_file, PathBuf::from("catalogo.json"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_file_config(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(err.to_string().contains("read config file"), "{err}");
}

#[test]
fn invalid_threshold_in_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("critvar.toml");
    fs::write(&path, "threshold = 2.0\n").unwrap();
    let err = load_file_config(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("parse config file"), "{err}");
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("critvar.toml");
    fs::write(&path, "").unwrap();
    assert_eq!(load_file_config(Some(path.as_path())).unwrap(), FileConfig::default());
}
