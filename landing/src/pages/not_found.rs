// Fallback for unknown paths
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    tracing::info!(path = %pathname.get_untracked(), "no route matched");

    view! {
        <section class="page-header not-found">
            <div class="container">
                <h1 class="page-title">"404"</h1>
                <p class="page-description">
                    "Nothing lives at "<code>{move || pathname.get()}</code>"."
                </p>
                <a href="/" class="neon-button">"Back to Home"</a>
            </div>
        </section>
    }
}
