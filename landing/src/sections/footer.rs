use leptos::prelude::*;

use super::icons::{ICON_CARET_RIGHT, ICON_TERMINAL, Icon};
use crate::config::site;
use crate::routes::NAV_LINKS;

#[component]
pub fn Footer(on_get_started: Callback<()>) -> impl IntoView {
    let config = site();
    let resources = [
        ("GitHub", config.repository_url.clone()),
        ("Documentation", config.docs_url()),
        ("Issues", config.issues_url()),
        ("Discussions", config.discussions_url()),
    ];

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <Icon path=ICON_TERMINAL size="32" />
                        <span class="footer-title">{config.product_name.as_str()}</span>
                    </div>
                    <p class="footer-blurb">
                        "AI-powered code analysis tool that helps developers understand their codebases better. "
                        "Combining static analysis with intelligent insights."
                    </p>
                    <button class="neon-button" on:click=move |_| on_get_started.run(())>
                        <Icon path=ICON_TERMINAL size="20" />
                        "Get Started"
                        <Icon path=ICON_CARET_RIGHT size="16" />
                    </button>
                </div>

                <div class="footer-column">
                    <h3 class="footer-heading">"Quick Links"</h3>
                    <ul class="footer-links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! {
                                <li><a href=link.path class="footer-link">{link.label}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-column">
                    <h3 class="footer-heading">"Resources"</h3>
                    <ul class="footer-links">
                        {resources
                            .into_iter()
                            .map(|(label, href)| view! {
                                <li>
                                    <a href=href target="_blank" rel="noopener noreferrer" class="footer-link">
                                        {label}
                                    </a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <p class="footer-copyright">"© 2025 XplnHUB ~ CodeMaverick-143. Built with ❤️ for developers."</p>
        </footer>
    }
}
