//! Tests for BannerError type

use super::*;

#[test]
fn test_unknown_style_display() {
    let error = BannerError::UnknownStyle("neon".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Unknown style"));
    assert!(msg.contains("neon"));
}

#[test]
fn test_invalid_color_display() {
    let error = BannerError::InvalidColor {
        style: "deploy".to_string(),
        value: "blurple".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("blurple"));
    assert!(msg.contains("deploy"));
}

#[test]
fn test_config_read_display_includes_path() {
    let error = BannerError::ConfigRead {
        path: PathBuf::from("/tmp/missing.toml"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let msg = error.to_string();
    assert!(msg.contains("/tmp/missing.toml"));
    assert!(msg.contains("denied"));
}

#[test]
fn test_config_parse_from_toml_error() {
    let toml_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
    let error = BannerError::from(toml_err);
    assert!(matches!(error, BannerError::ConfigParse(_)));
    assert!(error.to_string().starts_with("Invalid config file"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = BannerError::from(io_err);
    assert!(matches!(err, BannerError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = BannerError::UnknownStyle("x".to_string());
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("UnknownStyle"));
}
