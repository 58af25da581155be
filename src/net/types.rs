//! Wire-schema DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads exactly (camelCase field
//! names pinned with serde renames) so the durable localStorage slots and
//! the HTTP bodies stay byte-compatible with what the server emits.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Success envelope wrapping every backend response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The operation payload.
    pub data: T,
}

/// Error body returned by the backend on non-success statuses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description, surfaced verbatim in toasts.
    #[serde(default)]
    pub message: Option<String>,
}

/// An authenticated account as the backend represents it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier, absent for accounts created before ids were issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
}

/// Login/signup response payload; persisted wholesale as the durable
/// session slot so the bearer token survives reloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    /// The authenticated user.
    pub user: User,
    /// Bearer token attached to every authenticated request.
    pub token: String,
}

/// `GET /auth/me` response payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The revalidated user behind the presented token.
    pub user: User,
}

/// `POST /auth/login` request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /auth/signup` request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A generated document record.
///
/// Server-backed records carry `pdf_id`/`status`/`file_url`; locally built
/// records (offline variant) carry only the form fields plus a client id
/// and timestamp. Exactly one record at a time lives in the durable
/// pending-document slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfDocument {
    /// Client-side record identifier (UUID string).
    pub id: String,
    /// Backend document identifier, present once the server has a record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_id: Option<String>,
    /// Document title.
    pub title: String,
    /// Author name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// ISO-8601 creation timestamp.
    pub generated_at: String,
    /// Server-side generation status (e.g. `"ready"`), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Direct file URL, if the server has published one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// File size in bytes, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// `POST /pdf/generate` request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratePdfRequest {
    pub title: String,
    pub name: String,
    pub email: String,
    pub description: String,
    pub notes: String,
    /// Whether the backend should author the document content itself.
    #[serde(rename = "useLLM")]
    pub use_llm: bool,
}

/// `GET /pdf/:id/status` response payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PdfStatus {
    pub status: String,
}

/// `GET /pdf/:id/view` and `GET /pdf/:id/download` response payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileUrl {
    /// Signed, time-limited URL for the document file.
    pub url: String,
}

/// A backend-issued share link granting unauthenticated access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    /// Share identifier, used for revocation.
    pub share_id: String,
    /// Public URL for the shared document.
    pub url: String,
    /// ISO-8601 expiry timestamp, if the link is time-limited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}
