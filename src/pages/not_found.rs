use leptos::*;
use leptos_router::A;

/// Anything other than `/`. The site has a single page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="container">
            <section class="card not-found">
                <h1>"404"</h1>
                <p class="lead">"There is nothing planted here yet."</p>
                <A href="/" class="btn btn-primary">"Back to Agri-Build"</A>
            </section>
        </main>
    }
}
