//! Bottom-anchored stack rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders every queued toast with its severity class and a close button.
/// Auto-dismissal is scheduled by the queue itself; the close button is the
/// manual path through the same `dismiss`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.severity.css_class()>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
