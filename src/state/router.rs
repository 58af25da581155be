//! In-memory navigation state: the single current-page slot.
//!
//! DESIGN
//! ======
//! Navigation is one enumerated page name with no history stack, deep
//! linking, or URL synchronization. Route guarding is centralized here in
//! [`resolve`], consulted by the shell dispatcher, instead of being
//! re-implemented ad hoc inside each page.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use leptos::prelude::{RwSignal, Update};

use crate::state::auth::AuthState;

/// The pages the shell can display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Generator,
    Login,
    Signup,
    Download,
}

impl Page {
    /// Map a page name to a page, falling back to the home view for
    /// unrecognized names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "generator" => Self::Generator,
            "login" => Self::Login,
            "signup" => Self::Signup,
            "download" => Self::Download,
            _ => Self::Home,
        }
    }

    /// Canonical page name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Generator => "generator",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Download => "download",
        }
    }

    /// True for pages that only make sense while logged out.
    pub fn anonymous_only(self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }
}

/// Navigation state. `page` is read-only to consumers; mutation goes
/// through [`navigate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    pub page: Page,
}

/// Route guard consulted by the shell dispatcher.
///
/// Authenticated users requesting an anonymous-only page (login, signup)
/// are dispatched to home. The restoring phase counts as anonymous: when a
/// stored snapshot exists, the optimistic restore flips the phase before
/// the first dispatch.
pub fn resolve(requested: Page, auth: &AuthState) -> Page {
    if requested.anonymous_only() && auth.is_authenticated() {
        return Page::Home;
    }
    requested
}

/// Set the current page and reset the window scroll position.
pub fn navigate(router: RwSignal<RouterState>, page: Page) {
    router.update(|state| state.page = page);
    scroll_to_origin();
}

fn scroll_to_origin() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
