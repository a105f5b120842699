//! Assertions for the `{status_code, message, is_error}` response envelope.
//!
//! Works on raw response parts so both unit and integration tests can use it
//! without depending on backend types.

use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's envelope
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct EnvelopeLike {
    pub status_code: u16,
    pub message: String,
    pub is_error: bool,
}

/// Assert the response carries a JSON content type.
pub fn assert_json_content_type(headers: &HeaderMap) {
    let content_type = headers
        .get(CONTENT_TYPE)
        .expect("content-type header should be present")
        .to_str()
        .expect("content-type header should be valid UTF-8");
    assert!(
        content_type.starts_with("application/json"),
        "expected application/json, got {content_type}"
    );
}

/// Parse an envelope body, panicking with the raw body on failure.
pub fn parse_envelope(body_bytes: &[u8]) -> EnvelopeLike {
    let body_str =
        std::str::from_utf8(body_bytes).expect("Response body should be valid UTF-8");
    serde_json::from_str(body_str)
        .unwrap_or_else(|e| panic!("Response body should be an envelope ({e}): {body_str}"))
}

/// Assert an error envelope.
///
/// Checks the HTTP status, that `status_code` mirrors it, `is_error == true`,
/// the exact message and a JSON content type. Returns the parsed envelope.
pub fn assert_error_envelope(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) -> EnvelopeLike {
    assert_envelope(status, headers, body_bytes, expected_status, true, Some(expected_message))
}

/// Assert a confirmation envelope (`is_error == false`).
///
/// The message is only compared when `expected_message` is given; auth
/// responses carry a token that the caller checks itself.
pub fn assert_confirmation_envelope(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_message: Option<&str>,
) -> EnvelopeLike {
    assert_envelope(status, headers, body_bytes, expected_status, false, expected_message)
}

fn assert_envelope(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_is_error: bool,
    expected_message: Option<&str>,
) -> EnvelopeLike {
    assert_eq!(status, expected_status);
    assert_json_content_type(headers);

    let envelope = parse_envelope(body_bytes);
    assert_eq!(envelope.status_code, expected_status.as_u16());
    assert_eq!(envelope.is_error, expected_is_error);
    if let Some(expected) = expected_message {
        assert_eq!(envelope.message, expected);
    }
    envelope
}

#[cfg(test)]
mod tests {
    use actix_web::http::header::HeaderValue;

    use super::*;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn accepts_matching_error_envelope() {
        let body = br#"{"status_code":404,"message":"gone","is_error":true}"#;
        let env = assert_error_envelope(
            StatusCode::NOT_FOUND,
            &json_headers(),
            body,
            StatusCode::NOT_FOUND,
            "gone",
        );
        assert_eq!(env.message, "gone");
    }

    #[test]
    #[should_panic]
    fn rejects_mismatched_status_code_field() {
        let body = br#"{"status_code":500,"message":"gone","is_error":true}"#;
        assert_error_envelope(
            StatusCode::NOT_FOUND,
            &json_headers(),
            body,
            StatusCode::NOT_FOUND,
            "gone",
        );
    }
}
