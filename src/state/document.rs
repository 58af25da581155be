//! Pending-document handoff between the generator and download pages.
//!
//! DESIGN
//! ======
//! At most one pending document exists at a time: a single durable slot,
//! written by the generator, read by the download page, overwritten by the
//! next generation and cleared by logout. The record is client-local; for
//! server-backed documents the backend's own record is the source of truth
//! once generation succeeds.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use crate::net::types::PdfDocument;
use crate::util::storage;

/// Durable localStorage key for the pending-document slot.
pub const PENDING_DOC_KEY: &str = "builder_current_pdf";

/// The generator form fields, prior to any record being built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    pub title: String,
    pub name: String,
    pub email: String,
    pub description: String,
    pub notes: String,
}

/// Write `doc` to the pending slot, replacing any previous record.
pub fn store_pending(doc: &PdfDocument) {
    storage::save_json(PENDING_DOC_KEY, doc);
}

/// Read the pending slot, if a record exists.
pub fn load_pending() -> Option<PdfDocument> {
    storage::load_json(PENDING_DOC_KEY)
}

/// Clear the pending slot. Idempotent.
pub fn clear_pending() {
    storage::remove(PENDING_DOC_KEY);
}

/// Construct the offline-variant record from a draft.
///
/// Empty optional fields are omitted rather than stored as empty strings,
/// so the stored record round-trips without noise.
pub fn build_local_document(draft: &DocumentDraft, id: String, generated_at: String) -> PdfDocument {
    let non_empty = |value: &str| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    };
    PdfDocument {
        id,
        pdf_id: None,
        title: draft.title.trim().to_owned(),
        name: draft.name.trim().to_owned(),
        email: non_empty(&draft.email),
        description: non_empty(&draft.description),
        notes: non_empty(&draft.notes),
        generated_at,
        status: None,
        file_url: None,
        size: None,
    }
}

/// Offline-variant record with a fresh id and the current timestamp.
#[cfg(feature = "hydrate")]
pub fn local_document(draft: &DocumentDraft) -> PdfDocument {
    let generated_at = js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default();
    build_local_document(draft, uuid::Uuid::new_v4().to_string(), generated_at)
}
