use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn api_url_prefixes_the_configured_base() {
    assert_eq!(api_url("/auth/login"), format!("{}/auth/login", api_base()));
}

#[test]
fn default_base_is_api() {
    // Holds unless BUILDER_API_URL was baked in at compile time.
    if option_env!("BUILDER_API_URL").is_none() {
        assert_eq!(api_base(), "/api");
        assert_eq!(api_url("/pdf/generate"), "/api/pdf/generate");
    }
}

#[test]
fn pdf_endpoint_formats_expected_paths() {
    assert_eq!(pdf_endpoint("abc", "status"), "/pdf/abc/status");
    assert_eq!(pdf_endpoint("abc", "download"), "/pdf/abc/download");
    assert_eq!(pdf_endpoint("abc", "share"), "/pdf/abc/share");
    assert_eq!(pdf_endpoint("abc", "shares"), "/pdf/abc/shares");
    assert_eq!(pdf_endpoint("abc", "unshare"), "/pdf/abc/unshare");
    assert_eq!(pdf_endpoint("abc", "view"), "/pdf/abc/view");
}

// =============================================================
// Request bodies and headers
// =============================================================

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok-123"), "Bearer tok-123");
}

#[test]
fn share_body_carries_expires_in_days() {
    assert_eq!(share_body(7), serde_json::json!({ "expiresInDays": 7 }));
}

#[test]
fn unshare_body_carries_share_id() {
    assert_eq!(unshare_body("s1"), serde_json::json!({ "shareId": "s1" }));
}

// =============================================================
// Error normalization
// =============================================================

#[test]
fn api_error_displays_the_backend_message() {
    let err = ApiError::Api { status: 400, message: "Title is required".to_owned() };
    assert_eq!(err.to_string(), "Title is required");
}

#[test]
fn network_error_display_includes_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn unavailable_display_names_the_server_context() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn only_status_401_counts_as_unauthorized() {
    let unauthorized = ApiError::Api { status: 401, message: "expired".to_owned() };
    assert!(unauthorized.is_unauthorized());

    let forbidden = ApiError::Api { status: 403, message: "nope".to_owned() };
    assert!(!forbidden.is_unauthorized());
    assert!(!ApiError::Network("dns".to_owned()).is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}

#[test]
fn fallback_message_is_generic() {
    assert_eq!(FALLBACK_ERROR_MESSAGE, "Request failed");
}
