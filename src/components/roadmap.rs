use crate::content::ROADMAP;
use leptos::*;

#[component]
pub fn Roadmap() -> impl IntoView {
    view! {
        <section class="card">
            <h3>"Roadmap & Next Steps"</h3>
            <ol class="roadmap">
                {ROADMAP
                    .iter()
                    .map(|m| view! {
                        <li><strong>{m.phase} ":"</strong> " " {m.detail}</li>
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
