use crate::components::{About, Footer, Header, Hero, HowItWorks, JoinForm, Roadmap, Transparency};
use leptos::*;

/// The landing page: header, sections in reading order, footer.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="container">
                <Hero/>
                <About/>
                <HowItWorks/>
                <Transparency/>
                <Roadmap/>
                <JoinForm/>
            </main>
            <Footer/>
        </div>
    }
}
