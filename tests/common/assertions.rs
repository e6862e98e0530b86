//! Custom assertion macros
//!
//! Assertions that print the whole response body on failure, which is
//! usually the only useful clue when a status code is wrong.

/// Assert a `TestResponse` status, dumping the body when it differs
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "unexpected status, body: {}",
            $response.body
        );
    };
}

/// Assert a JSON error body: status code, and optionally the offending field
#[macro_export]
macro_rules! assert_error_body {
    ($response:expr, $status:expr) => {
        $crate::assert_status!($response, $status);
        assert_eq!($response.body["status"], $status.as_u16());
        assert!($response.body["error"].is_string(), "missing error message");
    };
    ($response:expr, $status:expr, $field:expr) => {
        $crate::assert_error_body!($response, $status);
        assert_eq!($response.body["field"], $field);
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
