use crate::content::StatValue;
use leptos::*;

/// A labelled figure, shown as given.
#[component]
pub fn Stat(title: &'static str, #[prop(into)] value: StatValue) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{value.to_string()}</div>
            <div class="stat-title">{title}</div>
        </div>
    }
}
