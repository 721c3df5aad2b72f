//! Problem Details test helpers for backend testing
//!
//! Assertions over the stable error contract (RFC 7807 bodies plus the
//! `x-trace-id` header) without depending on backend types.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's ProblemDetails body.
#[derive(Debug, Deserialize)]
struct ProblemDetailsLike {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that response parts conform to the stable error contract:
/// the HTTP status matches, the body is a Problem Details document with the
/// expected `code`, and the `x-trace-id` header matches the body's trace_id.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(status, expected_status, "unexpected HTTP status");

    let body: ProblemDetailsLike = serde_json::from_slice(body_bytes)
        .unwrap_or_else(|e| panic!("response body is not a Problem Details document: {e}"));

    assert_eq!(body.code, expected_code, "unexpected error code");
    assert_eq!(body.status, expected_status.as_u16());
    assert!(
        body.type_.ends_with(expected_code),
        "type URI {} should end with the code {}",
        body.type_,
        expected_code
    );
    assert!(!body.title.is_empty(), "title must not be empty");

    if let Some(fragment) = expected_detail_contains {
        assert!(
            body.detail.contains(fragment),
            "detail {:?} should contain {:?}",
            body.detail,
            fragment
        );
    }

    let header_trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header missing")
        .to_str()
        .expect("x-trace-id header is not valid UTF-8");
    assert_eq!(
        header_trace_id, body.trace_id,
        "x-trace-id header and body trace_id should match"
    );
}
