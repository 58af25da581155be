use super::*;
use crate::net::types::User;

fn authenticated_state() -> AuthState {
    let mut state = AuthState::default();
    state.apply_session(User {
        id: None,
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
    });
    state
}

// =============================================================
// Page names
// =============================================================

#[test]
fn from_name_maps_known_pages() {
    assert_eq!(Page::from_name("home"), Page::Home);
    assert_eq!(Page::from_name("generator"), Page::Generator);
    assert_eq!(Page::from_name("login"), Page::Login);
    assert_eq!(Page::from_name("signup"), Page::Signup);
    assert_eq!(Page::from_name("download"), Page::Download);
}

#[test]
fn from_name_falls_back_to_home_for_unrecognized_names() {
    assert_eq!(Page::from_name("settings"), Page::Home);
    assert_eq!(Page::from_name(""), Page::Home);
    assert_eq!(Page::from_name("Download"), Page::Home);
}

#[test]
fn name_round_trips_through_from_name() {
    for page in [Page::Home, Page::Generator, Page::Login, Page::Signup, Page::Download] {
        assert_eq!(Page::from_name(page.name()), page);
    }
}

#[test]
fn default_page_is_home() {
    assert_eq!(RouterState::default().page, Page::Home);
}

// =============================================================
// Route guard
// =============================================================

#[test]
fn resolve_passes_public_pages_through() {
    let anonymous = AuthState::default();
    for page in [Page::Home, Page::Generator, Page::Download] {
        assert_eq!(resolve(page, &anonymous), page);
        assert_eq!(resolve(page, &authenticated_state()), page);
    }
}

#[test]
fn resolve_allows_auth_pages_while_anonymous() {
    let anonymous = AuthState::default();
    assert_eq!(resolve(Page::Login, &anonymous), Page::Login);
    assert_eq!(resolve(Page::Signup, &anonymous), Page::Signup);
}

#[test]
fn resolve_redirects_auth_pages_to_home_once_authenticated() {
    let auth = authenticated_state();
    assert_eq!(resolve(Page::Login, &auth), Page::Home);
    assert_eq!(resolve(Page::Signup, &auth), Page::Home);
}

#[test]
fn resolve_treats_restoring_phase_as_anonymous() {
    let restoring = AuthState::default();
    assert!(restoring.is_restoring());
    assert_eq!(resolve(Page::Login, &restoring), Page::Login);
}

#[test]
fn anonymous_only_covers_exactly_login_and_signup() {
    assert!(Page::Login.anonymous_only());
    assert!(Page::Signup.anonymous_only());
    assert!(!Page::Home.anonymous_only());
    assert!(!Page::Generator.anonymous_only());
    assert!(!Page::Download.anonymous_only());
}
