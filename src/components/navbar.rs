//! Top navigation bar with brand, page links, and the auth section.

use leptos::prelude::*;

use crate::state::auth::{self, AuthState};
use crate::state::router::{self, Page, RouterState};
use crate::state::toast::{Severity, ToastState, show_toast};

/// Fixed navigation bar.
///
/// Shows Home/Generator links always, plus either the user's name and a
/// Logout action or Login/Signup buttons. A disclosure toggle collapses the
/// links on narrow screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let nav = expect_context::<RwSignal<RouterState>>();

    let menu_open = RwSignal::new(false);

    let go = move |page: Page| {
        router::navigate(nav, page);
        menu_open.set(false);
    };

    let on_logout = move |_| {
        auth::logout(auth);
        show_toast(toasts, "Logged out successfully", Severity::Success);
        go(Page::Home);
    };

    let user_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <button class="navbar__brand" on:click=move |_| go(Page::Home)>
                    <span class="navbar__logo">"B"</span>
                    <span class="navbar__title">"Builder"</span>
                </button>

                <button
                    class="navbar__toggle"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>

                <div class=move || {
                    if menu_open.get() { "navbar__links navbar__links--open" } else { "navbar__links" }
                }>
                    <button class="navbar__link" on:click=move |_| go(Page::Home)>
                        "Home"
                    </button>
                    <button class="navbar__link" on:click=move |_| go(Page::Generator)>
                        "Generator"
                    </button>

                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=move || {
                            view! {
                                <button class="navbar__link" on:click=move |_| go(Page::Login)>
                                    "Login"
                                </button>
                                <button
                                    class="navbar__link navbar__link--primary"
                                    on:click=move |_| go(Page::Signup)
                                >
                                    "Sign Up"
                                </button>
                            }
                        }
                    >
                        <span class="navbar__user">{user_name}</span>
                        <button class="navbar__link" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
