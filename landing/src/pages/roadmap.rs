// Roadmap page - quarterly timeline and future plans
use crate::sections::{CommunityCallout, FutureVision, Timeline};
use leptos::prelude::*;

#[component]
pub fn RoadmapPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Product Roadmap"</h1>
                <p class="page-description">
                    "Our vision for the future of code analysis. "
                    "See what's coming next and help shape the direction of Insight."
                </p>
            </div>
        </section>
        <Timeline />
        <FutureVision />
        <CommunityCallout />
    }
}
