//! Download page: pending-document summary, download, and share actions.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use leptos::prelude::*;

use crate::net::types::PdfDocument;
use crate::state::auth::AuthState;
use crate::state::document;
use crate::state::router::{self, Page, RouterState};
use crate::state::toast::{Severity, ToastState, show_toast};
use crate::util::clipboard;

/// Share links expire after a week.
pub(crate) const SHARE_EXPIRES_DAYS: u32 = 7;

/// Date portion of an ISO-8601 timestamp, for display.
pub(crate) fn display_date(generated_at: &str) -> &str {
    generated_at.split('T').next().unwrap_or(generated_at)
}

/// The copy-vs-create branch for the share action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ShareAction {
    /// A link is already displayed; copy it.
    CopyExisting,
    /// No link yet, but the backend has a record; create one.
    CreateRemote,
    /// Locally built record; the backend has nothing to share.
    Unavailable,
}

pub(crate) fn share_action(existing_link: &str, pdf_id: Option<&str>) -> ShareAction {
    if !existing_link.is_empty() {
        return ShareAction::CopyExisting;
    }
    if pdf_id.is_some() {
        return ShareAction::CreateRemote;
    }
    ShareAction::Unavailable
}

#[component]
pub fn DownloadPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let nav = expect_context::<RwSignal<RouterState>>();

    let doc = RwSignal::new(None::<PdfDocument>);
    let share_link = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Read the pending slot on mount. An empty slot is recoverable: report
    // it and send the user back to the generator.
    Effect::new(move || {
        if doc.with_untracked(Option::is_some) {
            return;
        }
        match document::load_pending() {
            Some(pending) => doc.set(Some(pending)),
            None => {
                show_toast(toasts, "No PDF found. Please generate one first.", Severity::Error);
                router::navigate(nav, Page::Generator);
            }
        }
    });

    // Action-level auth guard: download and share both need a session.
    let require_session = move |message: &'static str| {
        if auth.get().is_authenticated() {
            return true;
        }
        show_toast(toasts, message, Severity::Error);
        router::navigate(nav, Page::Login);
        false
    };

    let on_download = move |_| {
        if busy.get() || !require_session("Please login to download your PDF") {
            return;
        }
        let Some(current) = doc.get() else {
            return;
        };
        match current.pdf_id {
            // Locally built record: nothing server-side to fetch.
            None => show_toast(toasts, "PDF downloaded successfully!", Severity::Success),
            Some(pdf_id) => {
                busy.set(true);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::download_url(&pdf_id).await {
                        Ok(file) => {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href(&file.url);
                            }
                            show_toast(toasts, "PDF downloaded successfully!", Severity::Success);
                        }
                        Err(err) => {
                            if crate::state::auth::invalidate_if_unauthorized(auth, &err) {
                                show_toast(toasts, "Session expired, please login again", Severity::Error);
                                router::navigate(nav, Page::Login);
                            } else {
                                show_toast(toasts, err.to_string(), Severity::Error);
                            }
                        }
                    }
                    busy.set(false);
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = pdf_id;
                    busy.set(false);
                }
            }
        }
    };

    let on_share = move |_| {
        if busy.get() || !require_session("Please login to share your PDF") {
            return;
        }
        let Some(current) = doc.get() else {
            return;
        };
        match share_action(&share_link.get(), current.pdf_id.as_deref()) {
            ShareAction::CopyExisting => {
                clipboard::copy_text(&share_link.get());
                show_toast(toasts, "Share link copied to clipboard!", Severity::Success);
            }
            ShareAction::Unavailable => {
                show_toast(
                    toasts,
                    "This document was generated locally and cannot be shared yet",
                    Severity::Warning,
                );
            }
            ShareAction::CreateRemote => {
                busy.set(true);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let pdf_id = current.pdf_id.unwrap_or_default();
                    match crate::net::api::create_share_link(&pdf_id, SHARE_EXPIRES_DAYS).await {
                        Ok(link) => {
                            clipboard::copy_text(&link.url);
                            share_link.set(link.url);
                            show_toast(toasts, "Share link copied to clipboard!", Severity::Success);
                        }
                        Err(err) => {
                            if crate::state::auth::invalidate_if_unauthorized(auth, &err) {
                                show_toast(toasts, "Session expired, please login again", Severity::Error);
                                router::navigate(nav, Page::Login);
                            } else {
                                show_toast(toasts, err.to_string(), Severity::Error);
                            }
                        }
                    }
                    busy.set(false);
                });
                #[cfg(not(feature = "hydrate"))]
                busy.set(false);
            }
        }
    };

    let download_label = move || {
        if auth.get().is_authenticated() { "Download PDF" } else { "Login to Download" }
    };

    view! {
        <div class="download-page">
            <Show
                when=move || doc.get().is_some()
                fallback=|| view! { <p class="download-page__loading">"Loading..."</p> }
            >
                <header class="download-page__header">
                    <h1>"All Set"</h1>
                    <p class="download-page__subtitle">"Your document is ready to download"</p>
                </header>

                <div class="preview-card">
                    <div class="preview-card__title">
                        {move || doc.get().map(|d| d.title).unwrap_or_default()}
                    </div>
                    <div class="preview-card__author">
                        {move || {
                            doc.get().map(|d| format!("Created by {}", d.name)).unwrap_or_default()
                        }}
                    </div>
                    <div class="preview-card__meta">
                        {move || {
                            doc.get()
                                .map(|d| display_date(&d.generated_at).to_owned())
                                .unwrap_or_default()
                        }}
                    </div>
                </div>

                <div class="download-page__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=on_download
                    >
                        {download_label}
                    </button>
                    <button class="btn" disabled=move || busy.get() on:click=on_share>
                        "Copy Share Link"
                    </button>
                </div>

                <Show when=move || !auth.get().is_authenticated()>
                    <div class="download-page__login-prompt">
                        <h3>"Login Required"</h3>
                        <p>"Create a free account to download your PDF document"</p>
                        <button
                            class="download-page__login-link"
                            on:click=move |_| router::navigate(nav, Page::Login)
                        >
                            "Login Now →"
                        </button>
                    </div>
                </Show>

                <Show when=move || !share_link.get().is_empty()>
                    <div class="download-page__share">
                        <label class="field__label">"Shareable Link"</label>
                        <input
                            class="field__input"
                            type="text"
                            readonly
                            prop:value=move || share_link.get()
                        />
                        <p class="download-page__share-hint">
                            "Anyone with this link can view your PDF"
                        </p>
                    </div>
                </Show>

                <button
                    class="download-page__back"
                    on:click=move |_| router::navigate(nav, Page::Generator)
                >
                    "← Generate Another PDF"
                </button>
            </Show>
        </div>
    }
}
