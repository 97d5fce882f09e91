pub mod analytics;
pub mod components;
pub mod config;
pub mod content;
pub mod haptics;
pub mod join;
pub mod menu;
pub mod pages;

use components::App;
use config::{load_config, SiteConfig};
use join::Handoff;
use leptos::*;
use leptos_router::*;
use pages::NotFoundPage;
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="card error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The page could not be displayed. Try reloading it."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reload"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Provides the site configuration and mail handoff, then routes.
#[component]
fn RootInner() -> impl IntoView {
    // Read once; nothing changes it afterwards
    let config: SiteConfig = load_config();
    provide_context(config);
    provide_context(Handoff::browser());

    view! {
        <Router>
            <Routes>
                <Route path="/" view=App/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
