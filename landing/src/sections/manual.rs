//! Implementation guide: install, virtual environment, API key, usage,
//! advanced configuration and troubleshooting.
//!
//! The page owns one [`CopyFeedback`] and one platform selection and hands
//! them to every block, so copy keys are unique per page.

use leptos::prelude::*;

use super::icons::{
    ICON_CARET_RIGHT, ICON_DOWNLOAD, ICON_KEY, ICON_PLAY, ICON_TERMINAL, ICON_WARNING_CIRCLE, Icon,
};
use super::terminal::{ApiKeyLines, CommandLine, OutputLine, PlatformSelector, TerminalCard};
use crate::catalog::{PREREQUISITES, advanced_configuration, troubleshooting, usage_examples};
use crate::clipboard::CopyFeedback;
use crate::config::site;
use crate::onboarding::{CREATE_VENV, Platform, activation_command, api_key_commands};

/// Value used in the guide's API key examples.
const SAMPLE_API_KEY: &str = "your-api-key-here";

#[component]
fn GuideHeading(icon: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <h2 class="manual-title">
            <Icon path=icon size="32" class="manual-title-icon" />
            {title}
        </h2>
    }
}

#[component]
pub fn QuickStart(feedback: CopyFeedback) -> impl IntoView {
    let config = site();
    view! {
        <div class="manual-section">
            <GuideHeading icon=ICON_TERMINAL title="Quick Start" />
            <TerminalCard>
                <CommandLine
                    command=config.install_command()
                    feedback=feedback
                    copy_key="quickstart-install"
                />
                <CommandLine
                    command=format!("{} .", config.cli_binary)
                    feedback=feedback
                    copy_key="quickstart-run"
                />
                <OutputLine text="✓ Analysis complete! Report saved to insight_report.md" />
            </TerminalCard>
        </div>
    }
}

#[component]
pub fn InstallSteps(feedback: CopyFeedback) -> impl IntoView {
    let config = site();
    view! {
        <div class="manual-section">
            <GuideHeading icon=ICON_DOWNLOAD title="Installation Steps" />
            <div class="install-steps">
                <div class="feature-card step">
                    <span class="step-num">"1"</span>
                    <div class="step-content">
                        <h3>"Prerequisites"</h3>
                        <p>"Before you begin, ensure you have the following installed:"</p>
                        <ul class="check-list">
                            {PREREQUISITES
                                .iter()
                                .map(|item| view! {
                                    <li>
                                        <Icon path=ICON_CARET_RIGHT size="16" class="accent-cyan" />
                                        <span>{*item}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
                <div class="feature-card step">
                    <span class="step-num">"2"</span>
                    <div class="step-content">
                        <h3>"Installation"</h3>
                        <p>"Install Insight CLI using pip:"</p>
                        <TerminalCard>
                            <CommandLine
                                command=config.install_command()
                                feedback=feedback
                                copy_key="install"
                            />
                        </TerminalCard>
                    </div>
                </div>
                <div class="feature-card step">
                    <span class="step-num">"3"</span>
                    <div class="step-content">
                        <h3>"Verify Installation"</h3>
                        <p>"Check if Insight CLI is installed correctly:"</p>
                        <TerminalCard>
                            <CommandLine
                                command=format!("{} --version", config.cli_binary)
                                feedback=feedback
                                copy_key="version"
                            />
                        </TerminalCard>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn VirtualEnvGuide(platform: RwSignal<Platform>, feedback: CopyFeedback) -> impl IntoView {
    view! {
        <div class="manual-section">
            <GuideHeading icon=ICON_PLAY title="Virtual Environment (Recommended)" />
            <div class="feature-card">
                <div class="callout warning">
                    <Icon path=ICON_WARNING_CIRCLE size="24" />
                    <div>
                        <h4>"Best Practice"</h4>
                        <p>
                            "Using a virtual environment keeps your system Python clean and prevents "
                            "dependency conflicts."
                        </p>
                    </div>
                </div>

                <PlatformSelector
                    selected=platform
                    on_select=Callback::new(move |choice: Platform| platform.set(choice))
                />

                <h4 class="manual-subtitle">"1. Create Virtual Environment"</h4>
                <TerminalCard>
                    <CommandLine
                        command=CREATE_VENV.to_string()
                        feedback=feedback
                        copy_key="venv-create"
                    />
                </TerminalCard>

                <h4 class="manual-subtitle">"2. Activate Virtual Environment"</h4>
                <TerminalCard>
                    <CommandLine
                        command=Signal::derive(move || activation_command(platform.get()).to_string())
                        feedback=feedback
                        copy_key="venv-activate"
                    />
                </TerminalCard>

                <h4 class="manual-subtitle">"3. Install Insight CLI"</h4>
                <TerminalCard>
                    <CommandLine
                        command=site().install_command()
                        venv=true
                        feedback=feedback
                        copy_key="venv-install"
                    />
                </TerminalCard>
            </div>
        </div>
    }
}

#[component]
pub fn ApiKeyGuide(platform: RwSignal<Platform>, feedback: CopyFeedback) -> impl IntoView {
    view! {
        <div class="manual-section">
            <GuideHeading icon=ICON_KEY title="API Key Configuration" />
            <div class="feature-card">
                <p>"To use AI-powered features, you need to configure your Google API key:"</p>
                <TerminalCard>
                    <ApiKeyLines
                        lines=Signal::derive(move || api_key_commands(SAMPLE_API_KEY, platform.get()))
                        feedback=feedback
                        copy_key="api-key"
                    />
                </TerminalCard>
                <div class="callout info">
                    <p>
                        <strong>"Tip:"</strong>
                        " Add this to your shell profile (~/.bashrc, ~/.zshrc, or ~/.bash_profile) to "
                        "make it persistent across sessions."
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn UsageExamples(feedback: CopyFeedback) -> impl IntoView {
    view! {
        <div class="manual-section">
            <h2 class="manual-title">"Usage Examples"</h2>
            <div class="features-grid two">
                {usage_examples(&site().cli_binary)
                    .into_iter()
                    .map(|example| view! {
                        <div class="feature-card">
                            <h3>{example.title}</h3>
                            <p class="feature-description">{example.description}</p>
                            <TerminalCard>
                                <CommandLine
                                    command=example.command
                                    feedback=feedback
                                    copy_key=example.key
                                />
                            </TerminalCard>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn AdvancedConfiguration() -> impl IntoView {
    let config = site();
    view! {
        <div class="manual-section">
            <h2 class="manual-title">"Advanced Configuration"</h2>
            {advanced_configuration(&config.cli_package, &config.cli_binary)
                .into_iter()
                .map(|snippet| view! {
                    <div class="feature-card">
                        <h3>{snippet.title}</h3>
                        <p>{snippet.description}</p>
                        <TerminalCard>
                            <pre class="snippet"><code>{snippet.body}</code></pre>
                        </TerminalCard>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Troubleshooting() -> impl IntoView {
    view! {
        <div class="manual-section">
            <h2 class="manual-title">"Troubleshooting"</h2>
            {troubleshooting(&site().cli_package)
                .into_iter()
                .map(|fix| view! {
                    <div class="feature-card">
                        <h3>{fix.problem}</h3>
                        <p>{fix.hint}</p>
                        <TerminalCard>
                            <CommandLine command=fix.command />
                        </TerminalCard>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
