//! Generator page: the document form, validation, and the generate action.

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use leptos::prelude::*;

use crate::components::field::{TextArea, TextField};
use crate::net::types::GeneratePdfRequest;
use crate::state::auth::AuthState;
use crate::state::document::{self, DocumentDraft};
use crate::state::router::{self, Page, RouterState};
use crate::state::toast::{Severity, ToastState, show_toast};

/// Required fields: title and author name. Checked locally before any
/// record is built or network call is made.
pub(crate) fn validate_draft(draft: &DocumentDraft) -> Result<(), &'static str> {
    if draft.title.trim().is_empty() || draft.name.trim().is_empty() {
        return Err("Please fill in all required fields");
    }
    Ok(())
}

/// How a valid draft is turned into a pending document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GeneratePlan {
    /// Build the record locally, no backend involved.
    Local,
    /// Delegate authorship to the backend (`useLLM` forwarded).
    Remote,
    /// AI-assisted generation needs a session first.
    NeedsLogin,
}

pub(crate) fn generate_plan(ai_assisted: bool, authenticated: bool) -> GeneratePlan {
    match (ai_assisted, authenticated) {
        (false, _) => GeneratePlan::Local,
        (true, true) => GeneratePlan::Remote,
        (true, false) => GeneratePlan::NeedsLogin,
    }
}

/// Wire request for `POST /pdf/generate`, trimming the form fields.
pub(crate) fn generate_request(draft: &DocumentDraft, use_llm: bool) -> GeneratePdfRequest {
    GeneratePdfRequest {
        title: draft.title.trim().to_owned(),
        name: draft.name.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        description: draft.description.trim().to_owned(),
        notes: draft.notes.trim().to_owned(),
        use_llm,
    }
}

#[component]
pub fn GeneratorPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let nav = expect_context::<RwSignal<RouterState>>();

    let title = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let ai_assisted = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let current_draft = move || DocumentDraft {
        title: title.get(),
        name: name.get(),
        email: email.get(),
        description: description.get(),
        notes: notes.get(),
    };

    let on_generate = move |_| {
        if busy.get() {
            return;
        }
        let draft = current_draft();
        if let Err(message) = validate_draft(&draft) {
            show_toast(toasts, message, Severity::Error);
            return;
        }

        match generate_plan(ai_assisted.get(), auth.get().is_authenticated()) {
            GeneratePlan::NeedsLogin => {
                show_toast(toasts, "Please login to use AI-assisted generation", Severity::Error);
                router::navigate(nav, Page::Login);
            }
            GeneratePlan::Local => {
                #[cfg(feature = "hydrate")]
                document::store_pending(&document::local_document(&draft));
                #[cfg(not(feature = "hydrate"))]
                let _ = &draft;
                show_toast(toasts, "PDF generated successfully!", Severity::Success);
                router::navigate(nav, Page::Download);
            }
            GeneratePlan::Remote => {
                busy.set(true);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::generate_pdf(&generate_request(&draft, true)).await {
                        Ok(doc) => {
                            document::store_pending(&doc);
                            show_toast(toasts, "PDF generated successfully!", Severity::Success);
                            router::navigate(nav, Page::Download);
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
                    let _ = &draft;
                    busy.set(false);
                }
            }
        }
    };

    let has_preview = move || !title.get().is_empty() || !name.get().is_empty();

    view! {
        <div class="generator-page">
            <header class="generator-page__header">
                <h1>"Generate PDF"</h1>
                <p class="generator-page__subtitle">
                    "Fill in your details to create a professional document"
                </p>
            </header>

            <div class="generator-page__form">
                <TextField label="Document Title *" placeholder="Enter document title" value=title/>
                <TextField label="Your Name *" placeholder="Enter your full name" value=name/>
                <TextField
                    label="Email Address"
                    placeholder="your@email.com"
                    input_type="email"
                    value=email
                />
                <TextArea
                    label="Description"
                    placeholder="Enter a detailed description..."
                    value=description
                />
                <TextArea
                    label="Additional Notes"
                    placeholder="Any additional information..."
                    rows=2
                    value=notes
                />

                <label class="generator-page__ai">
                    <input
                        type="checkbox"
                        prop:checked=move || ai_assisted.get()
                        on:change=move |_| ai_assisted.update(|on| *on = !*on)
                    />
                    "Let AI author the document content"
                </label>
            </div>

            <Show when=has_preview>
                <section class="generator-page__preview">
                    <h3>"Preview"</h3>
                    <div class="preview-card">
                        <Show when=move || !title.get().is_empty()>
                            <div class="preview-card__title">{move || title.get()}</div>
                        </Show>
                        <Show when=move || !name.get().is_empty()>
                            <div class="preview-card__author">{move || format!("By {}", name.get())}</div>
                        </Show>
                        <Show when=move || !email.get().is_empty()>
                            <div class="preview-card__meta">{move || email.get()}</div>
                        </Show>
                        <Show when=move || !description.get().is_empty()>
                            <div class="preview-card__body">{move || description.get()}</div>
                        </Show>
                        <Show when=move || !notes.get().is_empty()>
                            <div class="preview-card__notes">{move || notes.get()}</div>
                        </Show>
                    </div>
                </section>
            </Show>

            <button
                class="btn btn--primary generator-page__submit"
                disabled=move || busy.get()
                on:click=on_generate
            >
                "Generate PDF Document"
            </button>
        </div>
    }
}
