use leptos::prelude::*;

use super::icons::{ICON_CARET_RIGHT, ICON_PLAY, ICON_TERMINAL, Icon};
use crate::catalog::{HOME_HIGHLIGHTS, KEY_POINTS};
use crate::config::site;

#[component]
pub fn Hero(on_get_started: Callback<()>) -> impl IntoView {
    let config = site();
    let badge_text = format!("{} · Python CLI", config.version);
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {badge_text}
                    </div>
                    <h1 class="hero-title">
                        <span class="hero-title-accent">"Analyze Your Codebases"</span>
                        <br />
                        "with AI-Powered Insights"
                    </h1>
                    <p class="hero-description">
                        {format!("{} is a Python CLI tool that generates detailed reports combining ", config.product_name)}
                        "static code analysis with AI explanations."
                    </p>
                    <div class="hero-actions">
                        <button class="neon-button" on:click=move |_| on_get_started.run(())>
                            <Icon path=ICON_PLAY size="20" />
                            "Get Started"
                            <Icon path=ICON_CARET_RIGHT size="16" />
                        </button>
                        <a
                            href=config.repository_url.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="neon-button-outline"
                        >
                            <Icon path=ICON_TERMINAL size="20" />
                            "View on GitHub"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about band">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"About Insight"</h2>
                    <p class="section-description">
                        "A next-generation code analysis tool that bridges the gap between traditional "
                        "static analysis and AI-powered insights"
                    </p>
                </div>
                <div class="about-grid">
                    <div class="about-column">
                        <div class="feature-card">
                            <h3 class="accent-cyan">"What is Insight?"</h3>
                            <p>
                                "Insight is a powerful Python CLI tool designed to help developers understand "
                                "their codebases better. It combines traditional static code analysis with "
                                "cutting-edge AI technology to provide comprehensive, actionable insights about "
                                "your code structure, quality, and complexity."
                            </p>
                        </div>
                        <div class="feature-card">
                            <h3 class="accent-purple">"Why Insight?"</h3>
                            <p>
                                "Whether you're onboarding to a new project, conducting code reviews, or "
                                "maintaining legacy systems, Insight provides the clarity you need. Get instant "
                                "reports with metrics, visualizations, and AI-powered explanations that help you "
                                "make informed decisions about your code."
                            </p>
                        </div>
                    </div>
                    <div class="feature-card">
                        <h3 class="accent-pink">"Key Highlights"</h3>
                        <ul class="check-list">
                            {KEY_POINTS
                                .iter()
                                .map(|point| view! {
                                    <li>
                                        <Icon path=ICON_CARET_RIGHT size="16" class="accent-cyan" />
                                        <span>{*point}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section class="highlights">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Feature Highlights"</h2>
                    <p class="section-description">
                        "Discover what makes Insight the ultimate code analysis tool"
                    </p>
                    <a href="/features" class="neon-button-subtle">
                        "Explore All Features"
                        <Icon path=ICON_CARET_RIGHT size="16" />
                    </a>
                </div>
                <div class="features-grid four">
                    {HOME_HIGHLIGHTS
                        .iter()
                        .map(|item| view! {
                            <div class="feature-card">
                                <div class="feature-icon">
                                    <Icon path=item.icon size="32" />
                                </div>
                                <h3 class="feature-title">{item.title}</h3>
                                <p class="feature-description">{item.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
