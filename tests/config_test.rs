//! Configuration file handling

use body_face_tracker::{Error, config::Config};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("body-face-tracker-{}-{name}", std::process::id()))
}

#[test]
fn test_config_file_round_trip() {
    let path = temp_path("round-trip.yaml");
    let mut config = Config::default();
    config.orientation.quantization_step = 2.5;
    config.binding.release_after_missing_frames = Some(12);
    config.report.joints = true;

    config.to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_file_is_rejected() {
    let path = temp_path("invalid.yaml");
    std::fs::write(&path, "orientation:\n  quantization_step: -1.0\n").unwrap();
    let result = Config::from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_malformed_yaml_is_reported() {
    let path = temp_path("malformed.yaml");
    std::fs::write(&path, "orientation: [not, a, map\n").unwrap();
    let result = Config::from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(Error::Yaml(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Config::from_file(temp_path("does-not-exist.yaml"));
    assert!(matches!(result, Err(Error::Io(_))));
}
