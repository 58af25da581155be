use super::*;

fn draft(title: &str, name: &str) -> DocumentDraft {
    DocumentDraft {
        title: title.to_owned(),
        name: name.to_owned(),
        ..DocumentDraft::default()
    }
}

// =============================================================
// validate_draft
// =============================================================

#[test]
fn title_and_name_are_required() {
    assert!(validate_draft(&draft("T", "N")).is_ok());
    assert_eq!(validate_draft(&draft("", "N")), Err("Please fill in all required fields"));
    assert_eq!(validate_draft(&draft("T", "")), Err("Please fill in all required fields"));
    assert_eq!(validate_draft(&draft("", "")), Err("Please fill in all required fields"));
}

#[test]
fn whitespace_only_required_fields_do_not_pass() {
    assert!(validate_draft(&draft("   ", "N")).is_err());
    assert!(validate_draft(&draft("T", "\t")).is_err());
}

// =============================================================
// generate_plan
// =============================================================

#[test]
fn plain_generation_is_local_regardless_of_session() {
    assert_eq!(generate_plan(false, false), GeneratePlan::Local);
    assert_eq!(generate_plan(false, true), GeneratePlan::Local);
}

#[test]
fn ai_assisted_generation_requires_a_session() {
    assert_eq!(generate_plan(true, true), GeneratePlan::Remote);
    assert_eq!(generate_plan(true, false), GeneratePlan::NeedsLogin);
}

// =============================================================
// generate_request
// =============================================================

#[test]
fn request_trims_all_fields_and_forwards_the_flag() {
    let draft = DocumentDraft {
        title: " T ".to_owned(),
        name: " N ".to_owned(),
        email: " e@x.co ".to_owned(),
        description: " d ".to_owned(),
        notes: " n ".to_owned(),
    };
    let request = generate_request(&draft, true);
    assert_eq!(request.title, "T");
    assert_eq!(request.name, "N");
    assert_eq!(request.email, "e@x.co");
    assert_eq!(request.description, "d");
    assert_eq!(request.notes, "n");
    assert!(request.use_llm);
}

#[test]
fn empty_optional_fields_stay_empty_strings_on_the_wire() {
    let request = generate_request(&draft("T", "N"), false);
    assert_eq!(request.email, "");
    assert_eq!(request.description, "");
    assert_eq!(request.notes, "");
    assert!(!request.use_llm);
}
