//! Layouts loaded from `mdkey_configuration.toml` drive the codec.

use std::fs;

use mdkey::config::{load_config, ConfigError};
use mdkey::prelude::*;
use tempfile::tempdir;

#[test]
fn test_configured_layout_encodes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mdkey_configuration.toml");
    fs::write(
        &path,
        r#"
[layout]
dimensions = 2
bits_per_dimension = 12
labels = ["lat", "lon"]

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = load_config(Some(&path), None).unwrap();
    let layout = config.layout.to_layout().unwrap();
    assert_eq!(layout.key_len(), 3);
    assert_eq!(config.layout.label(1), "lon");

    let key = layout.encode(&[0xFFF, 0]).unwrap();
    assert_eq!(key.as_bytes(), &[0xAA, 0xAA, 0xAA]);
    assert_eq!(layout.decode(key.as_bytes()).unwrap(), vec![0xFFF, 0]);

    let err = layout.encode(&[0x1000, 0]).unwrap_err();
    assert!(matches!(err, MortonError::CoordinateOutOfRange { dimension: 0, .. }));
}

#[test]
fn test_invalid_layout_rejected_at_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mdkey_configuration.toml");
    fs::write(&path, "[layout]\nbits_per_dimension = 128\n").unwrap();

    let err = load_config(Some(&path), None).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}
