use super::*;

// =============================================================
// Wire field names
// =============================================================

#[test]
fn pdf_document_serializes_camel_case_fields() {
    let doc = PdfDocument {
        id: "d1".to_owned(),
        pdf_id: Some("srv-9".to_owned()),
        title: "T".to_owned(),
        name: "N".to_owned(),
        email: None,
        description: None,
        notes: None,
        generated_at: "2026-08-30T10:00:00Z".to_owned(),
        status: Some("ready".to_owned()),
        file_url: Some("https://cdn/doc.pdf".to_owned()),
        size: Some(1024),
    };
    let value = serde_json::to_value(&doc).expect("serialize");
    assert_eq!(value["pdfId"], "srv-9");
    assert_eq!(value["generatedAt"], "2026-08-30T10:00:00Z");
    assert_eq!(value["fileUrl"], "https://cdn/doc.pdf");
    assert!(value.get("pdf_id").is_none());
}

#[test]
fn pdf_document_omits_absent_optionals() {
    let doc = PdfDocument {
        id: "d1".to_owned(),
        pdf_id: None,
        title: "T".to_owned(),
        name: "N".to_owned(),
        email: None,
        description: None,
        notes: None,
        generated_at: "t".to_owned(),
        status: None,
        file_url: None,
        size: None,
    };
    let value = serde_json::to_value(&doc).expect("serialize");
    for key in ["pdfId", "email", "description", "notes", "status", "fileUrl", "size"] {
        assert!(value.get(key).is_none(), "{key} should be omitted");
    }
}

#[test]
fn generate_request_serializes_use_llm_flag() {
    let request = GeneratePdfRequest {
        title: "T".to_owned(),
        name: "N".to_owned(),
        email: String::new(),
        description: String::new(),
        notes: String::new(),
        use_llm: true,
    };
    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value["useLLM"], true);
    assert!(value.get("use_llm").is_none());
}

#[test]
fn share_link_decodes_camel_case_payload() {
    let raw = r#"{"shareId":"s1","url":"https://builder.app/share/abc","expiresAt":"2026-09-06T00:00:00Z"}"#;
    let link: ShareLink = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(link.share_id, "s1");
    assert_eq!(link.url, "https://builder.app/share/abc");
    assert_eq!(link.expires_at.as_deref(), Some("2026-09-06T00:00:00Z"));
}

// =============================================================
// Envelope and error body
// =============================================================

#[test]
fn envelope_decodes_nested_session_payload() {
    let raw = r#"{"data":{"user":{"id":"u1","name":"Ada","email":"ada@example.com"},"token":"tok"}}"#;
    let envelope: Envelope<AuthSession> = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(envelope.data.token, "tok");
    assert_eq!(envelope.data.user.name, "Ada");
}

#[test]
fn current_user_decodes_without_id() {
    let raw = r#"{"data":{"user":{"name":"Ada","email":"ada@example.com"}}}"#;
    let envelope: Envelope<CurrentUser> = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(envelope.data.user.id, None);
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":null}"#).expect("deserialize");
    assert_eq!(body.message, None);
    let body: ErrorBody = serde_json::from_str(r#"{"message":"No token provided"}"#).expect("deserialize");
    assert_eq!(body.message.as_deref(), Some("No token provided"));
}
