use crate::content::{copyright_notice, current_year};
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    // Read once, when the footer renders
    let year = current_year();

    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div class="copyright">{copyright_notice(year)}</div>
                <div class="footer-links">
                    <a href="#">"Privacy"</a>
                    <a href="#">"Contact"</a>
                </div>
            </div>
        </footer>
    }
}
