use leptos::*;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1501004318641-b39e6451bec6?q=80&w=800&auto=format&fit=crop&ixlib=rb-4.0.3&s=placeholder";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="card hero">
            <div class="hero-inner">
                <div class="hero-text">
                    <h1>"Plant. Grow. Build. Together."</h1>
                    <p class="lead">
                        "A transparent ecosystem that turns agricultural investment into real "
                        "community infrastructure \u{2014} tracked live on our platform."
                    </p>
                    <div class="hero-actions">
                        <a href="#join" class="btn btn-primary">"Join the movement"</a>
                        <a href="#how" class="btn btn-secondary">"How it works"</a>
                    </div>
                    <p class="note">"Share, invest, or volunteer \u{2014} everyone is an investor in progress."</p>
                </div>

                <div class="hero-media">
                    <img src=HERO_IMAGE alt="farm placeholder"/>
                    <div class="hero-caption">
                        <div class="caption-title">"Pilot Farm: Sunrise Valley"</div>
                        <div class="note">
                            "Status: Planting phase \u{2014} 24 investors \u{2022} Estimated harvest: 3 months"
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
