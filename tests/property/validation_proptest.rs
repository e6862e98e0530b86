//! Property-based tests for request validation

use lenswatch::shared::validation::{normalize_email, require_password, MAX_PASSWORD_BYTES, MIN_PASSWORD_BYTES};
use lenswatch::shared::{CreateCameraRequest, LocationRequest, Validate};
use proptest::prelude::*;
use uuid::Uuid;

fn camera(stream_url: String) -> CreateCameraRequest {
    CreateCameraRequest {
        location_id: Uuid::nil(),
        name: "Front door".to_string(),
        stream_url,
        enabled: true,
    }
}

proptest! {
    #[test]
    fn test_password_length_bounds(password in "[ -~]{0,100}") {
        let ok = require_password("password", &password).is_ok();
        let in_range = (MIN_PASSWORD_BYTES..=MAX_PASSWORD_BYTES).contains(&password.len());
        prop_assert_eq!(ok, in_range);
    }

    #[test]
    fn test_location_name_bounds(name in "[a-zA-Z0-9 ]{0,150}") {
        let request = LocationRequest { name: name.clone(), address: None };
        let trimmed = name.trim().chars().count();
        prop_assert_eq!(request.validate().is_ok(), (1..=100).contains(&trimmed));
    }

    #[test]
    fn test_supported_stream_urls_pass(
        scheme in prop::sample::select(vec!["rtsp", "rtsps", "http", "https"]),
        host in "[a-z][a-z0-9]{0,15}(\\.[a-z]{2,5})?",
        port in 1u16..,
        path in "[a-zA-Z0-9/_]{0,30}",
    ) {
        let url = format!("{}://{}:{}/{}", scheme, host, port, path);
        prop_assert!(camera(url).validate().is_ok());
    }

    #[test]
    fn test_other_schemes_fail(
        scheme in "(ftp|file|ws|rtmp|udp)",
        host in "[a-z]{1,15}",
    ) {
        let url = format!("{}://{}/stream", scheme, host);
        let error = camera(url).validate().unwrap_err();
        prop_assert_eq!(error.field(), Some("stream_url"));
    }

    #[test]
    fn test_normalize_email_is_idempotent(email in "[ ]{0,3}[A-Za-z0-9._]{1,20}@[A-Za-z]{1,10}\\.[A-Za-z]{2,4}[ ]{0,3}") {
        let once = normalize_email(&email);
        prop_assert_eq!(normalize_email(&once), once.clone());
        prop_assert_eq!(once.clone(), once.to_lowercase());
        prop_assert_eq!(once.trim(), once.as_str());
    }
}
