use leptos::prelude::*;

use super::icons::{ICON_CARET_RIGHT, ICON_CHECK, ICON_GRAPH, ICON_LIGHTNING, Icon};
use crate::catalog::{FUTURE_VISION, Quarter, ROADMAP, Status, roadmap_preview};
use crate::config::site;

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <section class="timeline">
            <div class="container narrow">
                <div class="timeline-line"></div>
                {ROADMAP.iter().map(|quarter| view! { <QuarterBlock quarter=quarter /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn QuarterBlock(quarter: &'static Quarter) -> impl IntoView {
    let status = quarter.status;
    view! {
        <div class="timeline-period">
            <div class="timeline-marker">
                <div class=format!("timeline-dot {}", status.css_class())>
                    <Icon path=quarter.icon size="24" />
                </div>
                <div>
                    <h2 class="timeline-quarter">{quarter.label}</h2>
                    <span class=format!("status-badge {}", status.css_class())>{status.badge()}</span>
                </div>
            </div>
            <div class="timeline-items">
                {quarter
                    .items
                    .iter()
                    .map(|item| view! {
                        <article class="feature-card roadmap-item">
                            <div class="roadmap-item-header">
                                <h3>{item.title}</h3>
                                <Icon path=ICON_GRAPH size="24" class="accent-cyan" />
                            </div>
                            <p class="roadmap-description">{item.description}</p>
                            <h4 class="roadmap-features-heading">"Key Features:"</h4>
                            <ul class="roadmap-features">
                                {item
                                    .features
                                    .iter()
                                    .map(|feature| view! {
                                        <li>
                                            <Icon path=ICON_CHECK size="16" class="accent-cyan" />
                                            <span>{*feature}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </article>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn FutureVision() -> impl IntoView {
    view! {
        <section class="future-vision">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Future Vision"</h2>
                    <p class="section-description">
                        "Beyond our current roadmap, we're exploring these exciting possibilities"
                    </p>
                </div>
                <div class="features-grid three">
                    {FUTURE_VISION
                        .iter()
                        .map(|item| view! {
                            <article class="feature-card centered">
                                <div class="feature-icon">
                                    <Icon path=item.icon size="32" />
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

#[component]
pub fn CommunityCallout() -> impl IntoView {
    let config = site();
    view! {
        <section class="community">
            <div class="container narrow">
                <div class="feature-card centered">
                    <h2>"Help Shape Our Roadmap"</h2>
                    <p>
                        "We value your feedback! Have ideas for features or improvements? "
                        "Join our community and let us know what you'd like to see next."
                    </p>
                    <div class="section-actions">
                        <a
                            href=config.discussions_url()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="neon-button"
                        >
                            <Icon path=ICON_GRAPH size="20" />
                            "Join Discussions"
                        </a>
                        <a
                            href=config.new_issue_url()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="neon-button-outline"
                        >
                            <Icon path=ICON_LIGHTNING size="20" />
                            "Request a Feature"
                        </a>
                    </div>
                </div>
                <div class="status-legend">
                    {Status::ALL
                        .iter()
                        .map(|status| view! {
                            <div class="legend-entry">
                                <span class=format!("legend-dot {}", status.css_class())></span>
                                <span>{status.label()}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Home page teaser: the next few headline items.
#[component]
pub fn RoadmapPreview() -> impl IntoView {
    const ACCENTS: [&str; 3] = ["accent-cyan", "accent-purple", "accent-pink"];

    view! {
        <section class="roadmap-preview">
            <div class="container narrow">
                <div class="section-header">
                    <h2 class="section-title">"What's Coming Next"</h2>
                    <p class="section-description">"Exciting features on our roadmap"</p>
                </div>
                <div class="features-grid three">
                    {roadmap_preview(ACCENTS.len())
                        .into_iter()
                        .zip(ACCENTS)
                        .map(|(item, accent)| view! {
                            <article class="feature-card">
                                <h3 class=accent>{item.title}</h3>
                                <p class="roadmap-when">
                                    {format!("{} - {}", item.status.label(), item.quarter)}
                                </p>
                            </article>
                        })
                        .collect_view()}
                </div>
                <div class="section-actions">
                    <a href="/roadmap" class="neon-button-subtle">
                        "View Full Roadmap"
                        <Icon path=ICON_CARET_RIGHT size="16" />
                    </a>
                </div>
            </div>
        </section>
    }
}
