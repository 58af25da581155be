use super::*;

// =============================================================
// display_date
// =============================================================

#[test]
fn display_date_takes_the_date_portion() {
    assert_eq!(display_date("2026-08-30T10:15:00Z"), "2026-08-30");
}

#[test]
fn display_date_passes_through_non_iso_input() {
    assert_eq!(display_date("2026-08-30"), "2026-08-30");
    assert_eq!(display_date(""), "");
}

// =============================================================
// share_action — the copy-vs-create branch
// =============================================================

#[test]
fn existing_link_is_copied_not_recreated() {
    assert_eq!(
        share_action("https://builder.app/share/abc", Some("srv-1")),
        ShareAction::CopyExisting
    );
    // Even a link for a record that has since lost its server id.
    assert_eq!(share_action("https://builder.app/share/abc", None), ShareAction::CopyExisting);
}

#[test]
fn empty_link_with_server_record_creates_one() {
    assert_eq!(share_action("", Some("srv-1")), ShareAction::CreateRemote);
}

#[test]
fn empty_link_without_server_record_is_unavailable() {
    assert_eq!(share_action("", None), ShareAction::Unavailable);
}

#[test]
fn share_expiry_is_one_week() {
    assert_eq!(SHARE_EXPIRES_DAYS, 7);
}
