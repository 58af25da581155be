use super::*;

fn full_draft() -> DocumentDraft {
    DocumentDraft {
        title: "  Quarterly Report  ".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        description: "Numbers for Q3".to_owned(),
        notes: "Draft only".to_owned(),
    }
}

// =============================================================
// build_local_document
// =============================================================

#[test]
fn local_record_carries_trimmed_form_fields() {
    let doc = build_local_document(&full_draft(), "doc-1".to_owned(), "2026-08-30T10:00:00Z".to_owned());
    assert_eq!(doc.id, "doc-1");
    assert_eq!(doc.title, "Quarterly Report");
    assert_eq!(doc.name, "Ada");
    assert_eq!(doc.email.as_deref(), Some("ada@example.com"));
    assert_eq!(doc.description.as_deref(), Some("Numbers for Q3"));
    assert_eq!(doc.notes.as_deref(), Some("Draft only"));
    assert_eq!(doc.generated_at, "2026-08-30T10:00:00Z");
}

#[test]
fn local_record_has_no_server_fields() {
    let doc = build_local_document(&full_draft(), "doc-1".to_owned(), "t".to_owned());
    assert_eq!(doc.pdf_id, None);
    assert_eq!(doc.status, None);
    assert_eq!(doc.file_url, None);
    assert_eq!(doc.size, None);
}

#[test]
fn empty_optional_fields_are_omitted_not_empty_strings() {
    let draft = DocumentDraft {
        title: "T".to_owned(),
        name: "N".to_owned(),
        email: "   ".to_owned(),
        description: String::new(),
        notes: String::new(),
    };
    let doc = build_local_document(&draft, "doc-1".to_owned(), "t".to_owned());
    assert_eq!(doc.email, None);
    assert_eq!(doc.description, None);
    assert_eq!(doc.notes, None);
}

// =============================================================
// Round-trip law for the durable slot
// =============================================================

#[test]
fn pending_record_round_trips_through_json_identically() {
    let doc = build_local_document(&full_draft(), "doc-1".to_owned(), "2026-08-30T10:00:00Z".to_owned());
    let raw = serde_json::to_string(&doc).expect("serialize");
    let back: crate::net::types::PdfDocument = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, doc);
}

#[test]
fn pending_slot_key_is_stable() {
    assert_eq!(PENDING_DOC_KEY, "builder_current_pdf");
}
