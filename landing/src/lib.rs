// Insight landing page - Leptos 0.8 edition
// Developed by XplnHUB (c)2025

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod onboarding;
pub mod pages;
pub mod routes;
pub mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use onboarding::OnboardingModal;
use pages::{FeaturesPage, HomePage, ImplementationPage, NotFoundPage, RoadmapPage};
use sections::{Backdrop, Footer, Header};

/// Boots logging and mounts the app on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();

    let config = config::site();
    logging::init(config);
    if let Err(err) = config::load_embedded() {
        tracing::warn!(%err, "site.toml rejected, using built-in defaults");
    }
    logging::print_banner(config);
    tracing::info!(version = %config.version, "mounting landing page");

    leptos::mount::mount_to_body(App);
}

#[component]
pub fn App() -> impl IntoView {
    // the only owner of onboarding visibility; everything else gets callbacks
    let (onboarding_open, set_onboarding_open) = signal(false);
    let open_onboarding = Callback::new(move |_| set_onboarding_open.set(true));
    let close_onboarding = Callback::new(move |_| set_onboarding_open.set(false));

    view! {
        <Router>
            <Backdrop />
            <Header />
            <main class="content">
                <Routes fallback=NotFoundPage>
                    <Route
                        path=path!("/")
                        view=move || view! { <HomePage on_get_started=open_onboarding /> }
                    />
                    <Route path=path!("/features") view=FeaturesPage />
                    <Route path=path!("/implementation") view=ImplementationPage />
                    <Route path=path!("/roadmap") view=RoadmapPage />
                </Routes>
            </main>
            <Footer on_get_started=open_onboarding />
            <OnboardingModal open=onboarding_open on_close=close_onboarding />
        </Router>
    }
}
