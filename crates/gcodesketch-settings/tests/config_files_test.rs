// Config File Tests
// Round trips through JSON and TOML files and the fallbacks around them.

use gcodesketch_core::Error;
use gcodesketch_interpreter::Interpreter;
use gcodesketch_settings::Config;
use tempfile::TempDir;

fn custom_config() -> Config {
    let mut config = Config::new();
    config.interpreter.arc_segments = 48;
    config.interpreter.undo_depth = 3;
    config.project.line_separator = "|".to_string();
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");

    let config = custom_config();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let config = custom_config();
    config.save_to_file(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"arc_segments\": 48"));
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("gcodesketch").join("config.toml");
    Config::new().save_to_file(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.yaml");
    assert!(matches!(
        Config::new().save_to_file(&path),
        Err(Error::Config { .. })
    ));

    std::fs::write(&path, "interpreter: {}").unwrap();
    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[interpreter]\narc_segments = 0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Arc segments"));
}

#[test]
fn test_malformed_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(Error::Config { .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(Config::load_from_file(&path), Err(Error::Io(_))));
}

#[test]
fn test_save_into_file_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("config.toml");
    assert!(matches!(Config::new().save_to_file(&path), Err(Error::Io(_))));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
}

#[test]
fn test_options_drive_interpreter() {
    let mut config = Config::new();
    config.interpreter.arc_segments = 8;
    config.interpreter.undo_depth = 1;

    let mut interp = Interpreter::with_options(config.to_options());
    interp.apply_line("G2 X10 Y0 Z0 R6").unwrap();
    assert_eq!(interp.cut_polyline().len(), 9);

    interp.apply_line("G1 X10 Y5 Z0").unwrap();
    assert!(interp.undo());
    assert!(!interp.undo());
}
