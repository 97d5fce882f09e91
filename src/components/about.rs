use leptos::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="card">
            <h2>"Our Vision & Mission"</h2>
            <p class="lead">
                "We connect people, farms, and builders via a transparent digital platform that "
                "ensures investments transform into food and homes. Our mission is to create "
                "scalable community prosperity through measurable, auditable progress."
            </p>
        </section>
    }
}
