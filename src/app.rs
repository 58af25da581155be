//! Root application component with state providers and page dispatch.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::download::DownloadPage;
use crate::pages::generator::GeneratorPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignupPage;
use crate::state::auth::{self, AuthState};
use crate::state::router::{self, Page, RouterState};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the three shared stores (auth, toasts, navigation), restores
/// the session once on the client, and dispatches the guarded current page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth_state = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let nav = RwSignal::new(RouterState::default());

    provide_context(auth_state);
    provide_context(toasts);
    provide_context(nav);

    // Boot-time restore: effects only run on the client, so the server
    // renders the restoring state and the browser resolves it.
    Effect::new(move || {
        if auth_state.with_untracked(AuthState::is_restoring) {
            auth::restore_session(auth_state);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/builder-client.css"/>
        <Title text="Builder"/>

        <div class="app">
            <Navbar/>
            <main class="app__main">
                {move || {
                    let page = router::resolve(nav.get().page, &auth_state.get());
                    match page {
                        Page::Home => view! { <HomePage/> }.into_any(),
                        Page::Generator => view! { <GeneratorPage/> }.into_any(),
                        Page::Login => view! { <LoginPage/> }.into_any(),
                        Page::Signup => view! { <SignupPage/> }.into_any(),
                        Page::Download => view! { <DownloadPage/> }.into_any(),
                    }
                }}
            </main>
            <ToastHost/>
        </div>
    }
}
