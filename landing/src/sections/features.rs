use leptos::prelude::*;

use super::icons::{ICON_CHECK, Icon};
use crate::catalog::{EXTRA_CAPABILITIES, Feature, LANGUAGE_GRID, MAIN_FEATURES, USE_CASES};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="feature-rows">
                    {MAIN_FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureRow feature=feature flipped={index % 2 == 1} /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature pitch next to its capability list; odd rows swap sides.
#[component]
fn FeatureRow(feature: &'static Feature, flipped: bool) -> impl IntoView {
    let class = if flipped { "feature-row flipped" } else { "feature-row" };
    view! {
        <div class=class>
            <article class="feature-card">
                <div class="feature-icon">
                    <Icon path=feature.icon size="32" />
                </div>
                <h2 class="feature-title">{feature.title}</h2>
                <p class="feature-description">{feature.description}</p>
            </article>
            <article class="feature-card muted">
                <h3 class="capability-heading">"Key Capabilities:"</h3>
                <ul class="check-list">
                    {feature
                        .details
                        .iter()
                        .map(|detail| view! {
                            <li>
                                <Icon path=ICON_CHECK size="18" class="accent-green" />
                                <span>{*detail}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </article>
        </div>
    }
}

#[component]
pub fn Capabilities() -> impl IntoView {
    view! {
        <section class="capabilities">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Additional Capabilities"</h2>
                    <p class="section-description">
                        "Even more features to enhance your code analysis workflow"
                    </p>
                </div>
                <div class="features-grid four">
                    {EXTRA_CAPABILITIES
                        .iter()
                        .map(|item| view! {
                            <article class="feature-card compact">
                                <div class="feature-icon small">
                                    <Icon path=item.icon size="24" />
                                </div>
                                <h3 class="feature-title">{item.title}</h3>
                                <p class="feature-description">{item.description}</p>
                            </article>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Language tiles plus the button that opens the full reference.
#[component]
pub fn LanguageGrid(on_open_reference: Callback<()>) -> impl IntoView {
    view! {
        <section class="languages">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Supports 30+ Languages"</h2>
                    <p class="section-description">"Comprehensive support for modern development stacks"</p>
                </div>
                <div class="language-tiles">
                    {LANGUAGE_GRID
                        .iter()
                        .map(|name| view! { <div class="feature-card language-tile">{*name}</div> })
                        .collect_view()}
                </div>
                <div class="section-actions">
                    <button class="neon-button" on:click=move |_| on_open_reference.run(())>
                        "View All Supported Languages & File Types"
                    </button>
                    <p class="section-note">
                        "Click to see detailed file extensions and how each language is evaluated"
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn UseCases() -> impl IntoView {
    view! {
        <section class="use-cases">
            <div class="container">
                <h2 class="section-title">"Perfect For"</h2>
                <div class="features-grid three">
                    {USE_CASES
                        .iter()
                        .map(|case| view! {
                            <article class="feature-card">
                                <h3 class=format!("accent-{}", case.accent)>{case.title}</h3>
                                <p>{case.description}</p>
                            </article>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
