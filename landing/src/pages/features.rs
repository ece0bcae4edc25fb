// Features page - main features, capabilities, languages, use cases
use crate::sections::{Capabilities, Features, LanguageGrid, LanguageModal, UseCases};
use leptos::prelude::*;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let (reference_open, set_reference_open) = signal(false);

    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Powerful Features"</h1>
                <p class="page-description">
                    "Advanced code analysis capabilities powered by cutting-edge AI technology"
                </p>
            </div>
        </section>
        <Features />
        <Capabilities />
        <LanguageGrid on_open_reference=Callback::new(move |_| set_reference_open.set(true)) />
        <UseCases />
        <LanguageModal
            open=reference_open
            on_close=Callback::new(move |_| set_reference_open.set(false))
        />
    }
}
