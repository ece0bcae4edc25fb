// Home page - hero, about, highlights, install teaser, roadmap teaser
use crate::sections::{About, Hero, Highlights, InstallSection, RoadmapPreview};
use leptos::prelude::*;

#[component]
pub fn HomePage(on_get_started: Callback<()>) -> impl IntoView {
    view! {
        <Hero on_get_started=on_get_started />
        <About />
        <Highlights />
        <InstallSection />
        <RoadmapPreview />
    }
}
