use crate::content::STEPS;
use leptos::*;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how" class="card">
            <h3>"How it works"</h3>
            <div class="steps">
                {STEPS
                    .iter()
                    .map(|step| view! {
                        <div class="step">
                            <div class="step-icon">{step.icon}</div>
                            <div class="step-title">{step.title}</div>
                            <div class="step-desc">{step.desc}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
