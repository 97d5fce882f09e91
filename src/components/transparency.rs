use crate::components::Stat;
use leptos::*;

#[component]
pub fn Transparency() -> impl IntoView {
    view! {
        <section id="transparency" class="card">
            <h3>"Transparency & Accountability"</h3>
            <p class="lead">
                "Everything is visible: investments, expenses, harvest yields, and building "
                "milestones. We encourage independent audits and community oversight."
            </p>

            <div class="stats">
                <Stat title="Verified Projects" value="12"/>
                <Stat title="Active Investors" value="324"/>
                <Stat title="Funds Tracked" value="\u{20A6}3.1M"/>
            </div>

            <div class="dashboard">
                <div class="dashboard-title">"Public Dashboard (prototype)"</div>
                <div class="dashboard-placeholder">"[ Live graphs & blockchain ledger \u{2014} coming soon ]"</div>
            </div>
        </section>
    }
}
