//! REST API client for the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side: stubs
//! returning [`ApiError::Unavailable`] since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation is one request with no retry, timeout, or cancellation.
//! Non-success statuses become [`ApiError::Api`] carrying the backend's
//! `message` field (or a generic fallback); callers translate failures into
//! toasts and route them through the session store's 401 check.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AuthSession, Credentials, FileUrl, GeneratePdfRequest, PdfDocument, PdfStatus, ShareLink,
    SignupPayload, User,
};
#[cfg(feature = "hydrate")]
use super::types::{CurrentUser, Envelope};

/// API failure normalized from transport and backend errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Backend `message` field, or the generic fallback.
        message: String,
    },
    /// The request never produced a response (DNS, connection, JSON shape).
    #[error("network error: {0}")]
    Network(String),
    /// The call was made outside a browser context.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True when the backend rejected the bearer token; any such failure
    /// must invalidate the local session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

#[cfg(any(test, feature = "hydrate"))]
const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Base URL for the backend, baked in at compile time.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("BUILDER_API_URL").unwrap_or("/api")
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn pdf_endpoint(pdf_id: &str, action: &str) -> String {
    format!("/pdf/{pdf_id}/{action}")
}

#[cfg(any(test, feature = "hydrate"))]
fn share_body(expires_in_days: u32) -> serde_json::Value {
    serde_json::json!({ "expiresInDays": expires_in_days })
}

#[cfg(any(test, feature = "hydrate"))]
fn unshare_body(share_id: &str) -> serde_json::Value {
    serde_json::json!({ "shareId": share_id })
}

/// Bearer token from the durable session slot, if a session exists.
#[cfg(feature = "hydrate")]
fn stored_token() -> Option<String> {
    crate::util::storage::load_json::<AuthSession>(crate::state::auth::SESSION_KEY)
        .map(|session| session.token)
}

/// Issue a request, attaching the bearer token when present, and decode the
/// success envelope or normalize the failure.
#[cfg(feature = "hydrate")]
async fn send_json<T: serde::de::DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    let builder = match stored_token() {
        Some(token) => builder.header("Authorization", &bearer_header(&token)),
        None => builder,
    };
    let request = match body {
        Some(value) => builder.json(value).map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let message = resp
            .json::<super::types::ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned());
        return Err(ApiError::Api { status: resp.status(), message });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    send_json(gloo_net::http::Request::post(&api_url(path)), Some(body)).await
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send_json(gloo_net::http::Request::get(&api_url(path)), None).await
}

/// Create an account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure.
pub async fn signup(payload: &SignupPayload) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: Envelope<AuthSession> = post_json("/auth/signup", &body).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Authenticate via `POST /auth/login`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure; invalid credentials
/// surface as [`ApiError::Api`] with the backend's message.
pub async fn login(credentials: &Credentials) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body =
            serde_json::to_value(credentials).map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: Envelope<AuthSession> = post_json("/auth/login", &body).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Revalidate the stored token via `GET /auth/me`.
///
/// # Errors
///
/// A 401 here means the durable session went stale and must be cleared.
pub async fn me() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: Envelope<CurrentUser> = get_json("/auth/me").await?;
        Ok(envelope.data.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Generate a document via `POST /pdf/generate`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure.
pub async fn generate_pdf(request: &GeneratePdfRequest) -> Result<PdfDocument, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: Envelope<PdfDocument> = post_json("/pdf/generate", &body).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch generation status via `GET /pdf/:id/status`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure.
pub async fn pdf_status(pdf_id: &str) -> Result<PdfStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: Envelope<PdfStatus> = get_json(&pdf_endpoint(pdf_id, "status")).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pdf_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a signed view URL via `GET /pdf/:id/view`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure.
pub async fn view_url(pdf_id: &str) -> Result<FileUrl, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: Envelope<FileUrl> = get_json(&pdf_endpoint(pdf_id, "view")).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pdf_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a signed download URL via `GET /pdf/:id/download`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure.
pub async fn download_url(pdf_id: &str) -> Result<FileUrl, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: Envelope<FileUrl> = get_json(&pdf_endpoint(pdf_id, "download")).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pdf_id;
        Err(ApiError::Unavailable)
    }
}

/// List the caller's documents via `GET /pdf/my/list`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure.
pub async fn list_my_pdfs() -> Result<Vec<PdfDocument>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: Envelope<Vec<PdfDocument>> = get_json("/pdf/my/list").await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Delete a document via `DELETE /pdf/:id`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure.
pub async fn delete_pdf(pdf_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/pdf/{pdf_id}"));
        let _: serde_json::Value = send_json(gloo_net::http::Request::delete(&url), None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pdf_id;
        Err(ApiError::Unavailable)
    }
}

/// Create a time-limited share link via `POST /pdf/:id/share`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure.
pub async fn create_share_link(pdf_id: &str, expires_in_days: u32) -> Result<ShareLink, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: Envelope<ShareLink> =
            post_json(&pdf_endpoint(pdf_id, "share"), &share_body(expires_in_days)).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (pdf_id, expires_in_days);
        Err(ApiError::Unavailable)
    }
}

/// List a document's share links via `GET /pdf/:id/shares`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure.
pub async fn share_links(pdf_id: &str) -> Result<Vec<ShareLink>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: Envelope<Vec<ShareLink>> = get_json(&pdf_endpoint(pdf_id, "shares")).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pdf_id;
        Err(ApiError::Unavailable)
    }
}

/// Revoke a share link via `POST /pdf/:id/unshare`.
///
/// # Errors
///
/// Returns the normalized backend or transport failure.
pub async fn revoke_share_link(pdf_id: &str, share_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: serde_json::Value =
            post_json(&pdf_endpoint(pdf_id, "unshare"), &unshare_body(share_id)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (pdf_id, share_id);
        Err(ApiError::Unavailable)
    }
}
