use std::path::PathBuf;

use super::*;

#[test]
fn config_error_display() {
    let err = RtLintError::Config("bad value".to_string());
    assert_eq!(err.to_string(), "Configuration error: bad value");
}

#[test]
fn file_read_error_display_includes_path() {
    let err = RtLintError::FileRead {
        path: PathBuf::from("src/core/ray.h"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("src/core/ray.h"));
}

#[test]
fn unknown_family_display() {
    let err = RtLintError::UnknownFamily("bogus".to_string());
    assert_eq!(err.to_string(), "Unknown rule family: bogus");
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: RtLintError = io.into();
    assert!(matches!(err, RtLintError::Io(_)));
}
