//! Login page with email/password form and field-level validation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::field::TextField;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::state::router::{self, Page, RouterState};
use crate::state::toast::{Severity, ToastState, show_toast};

/// Coarse shape check: something before the `@`, a dotted domain after it.
pub(crate) fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Validate the login form. Errors are surfaced before any network call.
pub(crate) fn validate_login_input(
    email: &str,
    password: &str,
) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if !looks_like_email(email) {
        return Err("Email is invalid");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let nav = expect_context::<RwSignal<RouterState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |_| {
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                show_toast(toasts, message, Severity::Error);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::state::auth::login(auth, &credentials).await {
                Ok(_) => {
                    show_toast(toasts, "Logged in successfully!", Severity::Success);
                    router::navigate(nav, Page::Home);
                }
                Err(err) => show_toast(toasts, err.to_string(), Severity::Error),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, credentials);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"Welcome Back"</h1>
                <p class="auth-page__subtitle">"Login to your account"</p>

                <TextField
                    label="Email Address"
                    placeholder="your@email.com"
                    input_type="email"
                    value=email
                />
                <TextField
                    label="Password"
                    placeholder="Enter your password"
                    input_type="password"
                    value=password
                />

                <button
                    class="btn btn--primary auth-page__submit"
                    disabled=move || busy.get()
                    on:click=on_submit
                >
                    "Login to Account"
                </button>

                <p class="auth-page__switch">
                    "Don't have an account? "
                    <button
                        class="auth-page__switch-link"
                        on:click=move |_| router::navigate(nav, Page::Signup)
                    >
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}
