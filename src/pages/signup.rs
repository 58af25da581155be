//! Signup page; same contract as login with a different endpoint.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::field::TextField;
use crate::net::types::SignupPayload;
use crate::pages::login::looks_like_email;
use crate::state::auth::AuthState;
use crate::state::router::{self, Page, RouterState};
use crate::state::toast::{Severity, ToastState, show_toast};

/// Validate the signup form, including password confirmation.
pub(crate) fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<SignupPayload, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
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
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(SignupPayload {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let nav = expect_context::<RwSignal<RouterState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |_| {
        if busy.get() {
            return;
        }
        let payload = match validate_signup_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                show_toast(toasts, message, Severity::Error);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::state::auth::signup(auth, &payload).await {
                Ok(_) => {
                    show_toast(toasts, "Account created successfully!", Severity::Success);
                    router::navigate(nav, Page::Home);
                }
                Err(err) => show_toast(toasts, err.to_string(), Severity::Error),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, payload);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"Create Account"</h1>
                <p class="auth-page__subtitle">"Sign up to download and share your documents"</p>

                <TextField label="Your Name" placeholder="Enter your full name" value=name/>
                <TextField
                    label="Email Address"
                    placeholder="your@email.com"
                    input_type="email"
                    value=email
                />
                <TextField
                    label="Password"
                    placeholder="At least 6 characters"
                    input_type="password"
                    value=password
                />
                <TextField
                    label="Confirm Password"
                    placeholder="Repeat your password"
                    input_type="password"
                    value=confirm
                />

                <button
                    class="btn btn--primary auth-page__submit"
                    disabled=move || busy.get()
                    on:click=on_submit
                >
                    "Create Account"
                </button>

                <p class="auth-page__switch">
                    "Already have an account? "
                    <button
                        class="auth-page__switch-link"
                        on:click=move |_| router::navigate(nav, Page::Login)
                    >
                        "Login"
                    </button>
                </p>
            </div>
        </div>
    }
}
