use crate::components::MobileMenu;
use leptos::*;

/// In-page sections reachable from the navigation, as `(anchor, label)`.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#how", "How it works"),
    ("#transparency", "Transparency"),
    ("#join", "Join"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <div class="brand">
                    <div class="brand-mark">"AB"</div>
                    <div>
                        <div class="brand-name">"Agri-Build Initiative"</div>
                        <div class="brand-tagline">"Plant \u{2022} Grow \u{2022} Build"</div>
                    </div>
                </div>
                // Inline links on wide screens, the menu button on narrow ones (see style.css)
                <nav class="nav-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href class="nav-link">{label}</a> })
                        .collect_view()}
                </nav>
                <div class="nav-mobile">
                    <MobileMenu/>
                </div>
            </div>
        </header>
    }
}
