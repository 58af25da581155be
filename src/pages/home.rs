//! Landing page with the product pitch and the generator call-to-action.

use leptos::prelude::*;

use crate::state::router::{self, Page, RouterState};

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = expect_context::<RwSignal<RouterState>>();

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Build professional PDFs in seconds"</h1>
                <p class="home-page__subtitle">
                    "Fill in a short form, let the generator do the layout, and share the result with a link."
                </p>
                <button
                    class="btn btn--primary home-page__cta"
                    on:click=move |_| router::navigate(nav, Page::Generator)
                >
                    "Start Generating"
                </button>
            </section>

            <section class="home-page__features">
                <div class="home-page__feature">
                    <h3>"Simple form"</h3>
                    <p>"Title, author, and optional details. No layout tools to learn."</p>
                </div>
                <div class="home-page__feature">
                    <h3>"AI-assisted content"</h3>
                    <p>"Let the generator author the body text from your description."</p>
                </div>
                <div class="home-page__feature">
                    <h3>"Share anywhere"</h3>
                    <p>"Time-limited links let anyone view your document without an account."</p>
                </div>
            </section>
        </div>
    }
}
