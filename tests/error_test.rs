use std::io;
use std::path::PathBuf;

use sprout::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::InvalidTemplate {
        name: "rust".to_string(),
        available: vec!["javascript".to_string(), "typescript".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "Invalid template name 'rust' (available: javascript, typescript)."
    );

    let err = Error::InvalidTemplate { name: "rust".to_string(), available: vec![] };
    assert_eq!(err.to_string(), "Invalid template name 'rust' (available: none).");

    let err = Error::CopyFailed {
        path: PathBuf::from("a.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to copy 'a.txt': denied.");
}

#[test]
fn test_git_init_failed_message_is_fixed() {
    let cause = Error::IoError(io::Error::new(io::ErrorKind::Other, "disk full"));
    let err = Error::GitInitFailed { source: Box::new(cause) };
    assert_eq!(err.to_string(), "Failed to initialize Git.");
    assert!(std::error::Error::source(&err).is_some());
}
