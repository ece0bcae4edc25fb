use leptos::prelude::*;

use super::icons::{ICON_CARET_RIGHT, Icon};
use super::terminal::{CommandLine, OutputLine, TerminalCard};
use crate::clipboard::CopyFeedback;
use crate::config::site;

/// Home page install teaser: install, run, done.
#[component]
pub fn InstallSection() -> impl IntoView {
    let config = site();
    let feedback = CopyFeedback::new();

    view! {
        <section id="install" class="install-section band">
            <div class="container narrow">
                <div class="section-header">
                    <h2 class="section-title">"Quick Installation"</h2>
                    <p class="section-description">"Get started with Insight in seconds"</p>
                </div>
                <TerminalCard>
                    <CommandLine
                        command=config.install_command()
                        feedback=feedback
                        copy_key="home-install"
                    />
                    <CommandLine
                        command=format!("{} .", config.cli_binary)
                        feedback=feedback
                        copy_key="home-run"
                    />
                    <OutputLine text="✓ Analysis complete! Report saved to insight_report.md" />
                </TerminalCard>
                <div class="section-actions">
                    <a href="/implementation" class="neon-button-outline">
                        "View Full Implementation Guide"
                        <Icon path=ICON_CARET_RIGHT size="16" />
                    </a>
                </div>
            </div>
        </section>
    }
}
