//! Labeled form controls shared by the login, signup, and generator pages.

use leptos::prelude::*;

/// Single-line labeled text input bound to a string signal.
#[component]
pub fn TextField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    /// HTML input type (`"text"`, `"email"`, `"password"`).
    #[prop(default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label">{label}</label>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Multi-line labeled text input bound to a string signal.
#[component]
pub fn TextArea(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    let rows = rows.to_string();
    view! {
        <div class="field">
            <label class="field__label">{label}</label>
            <textarea
                class="field__input field__input--area"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
