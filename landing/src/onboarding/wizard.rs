// Onboarding walkthrough modal
use leptos::prelude::*;

use super::commands::{
    self, API_KEY_PLACEHOLDER, CREATE_VENV, activation_command, api_key_lines, run_command,
};
use super::state::{Platform, WizardState, progress_label};
use super::steps::{OVERVIEW, STEPS, StepId, index_of};
use crate::clipboard::{CopyButton, CopyFeedback};
use crate::config::site;
use crate::sections::ModalShell;
use crate::sections::icons::{ICON_CARET_LEFT, ICON_CARET_RIGHT, ICON_CHECK, ICON_TERMINAL, ICON_X, Icon};
use crate::sections::terminal::{
    ApiKeyLines, CommandLine, OutputLine, PlatformSelector, TerminalCard,
};

/// Step-by-step setup guide. Visibility belongs to the caller; the wizard's
/// own state lives inside the dialog body, so closing discards it and the
/// next open starts again from the first step.
#[component]
pub fn OnboardingModal(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <ModalShell
            open=open
            on_close=on_close
            overlay_class="onboarding-overlay"
            dialog_class="onboarding-modal"
            label="Insight CLI setup"
        >
            <Wizard on_close=on_close />
        </ModalShell>
    }
}

#[component]
fn Wizard(on_close: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(WizardState::new(STEPS.len()));
    let feedback = CopyFeedback::new();
    // body re-renders on step change only, not on every keystroke in a draft field
    let current = Memo::new(move |_| state.with(WizardState::current));
    let is_last = Memo::new(move |_| state.with(WizardState::is_last));
    let step = move || STEPS[current.get()];

    tracing::debug!(steps = STEPS.len(), "onboarding opened");

    view! {
        <div class="onboarding-background">
            <div class="cyber-grid-modal"></div>
        </div>

        <div class="onboarding-header">
            <div class="onboarding-heading">
                <div class="step-icon">
                    {move || view! { <Icon path=step().icon size="32" /> }}
                </div>
                <div>
                    <h2 class="step-title">{move || step().title}</h2>
                    <p class="step-counter">
                        {move || {
                            format!(
                                "Step {} of {}",
                                current.get() + 1,
                                state.with(WizardState::step_count),
                            )
                        }}
                    </p>
                </div>
            </div>
            <button class="close-button" aria-label="Close" on:click=move |_| on_close.run(())>
                <Icon path=ICON_X size="24" />
            </button>
        </div>

        <ProgressTrack state=state />

        <div class="onboarding-content">
            <div class="step-content">
                {move || step_body(step().id, state, feedback)}
            </div>
        </div>

        <div class="onboarding-footer">
            <button
                class="nav-button prev"
                disabled=move || current.get() == 0
                on:click=move |_| {
                    state.update(|s| {
                        s.retreat();
                    });
                }
            >
                <Icon path=ICON_CARET_LEFT size="16" />
                "Previous"
            </button>

            {move || {
                if is_last.get() {
                    view! {
                        <a
                            href=site().repository_url.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="neon-button"
                        >
                            <Icon path=ICON_TERMINAL size="16" />
                            "View on GitHub"
                        </a>
                    }
                        .into_any()
                } else {
                    view! {
                        <button
                            class="nav-button next"
                            on:click=move |_| {
                                state.update(|s| {
                                    s.advance();
                                });
                            }
                        >
                            "Next"
                            <Icon path=ICON_CARET_RIGHT size="16" />
                        </button>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ProgressTrack(state: RwSignal<WizardState>) -> impl IntoView {
    let percent = Memo::new(move |_| state.with(WizardState::progress_percent));

    view! {
        <div class="progress-container">
            <div class="progress-track">
                <div
                    class="progress-bar-fill"
                    style:width=move || format!("{}%", percent.get())
                ></div>
            </div>
            <span class="progress-label">{move || progress_label(percent.get())}</span>
            <div class="progress-steps">
                {(0..STEPS.len())
                    .map(|index| {
                        let class = move || {
                            state.with(|s| {
                                let mut class = String::from("progress-step");
                                if s.is_reached(index) {
                                    class.push_str(" active");
                                }
                                if s.is_complete(index) {
                                    class.push_str(" completed");
                                }
                                class
                            })
                        };
                        let done = move || state.with(|s| s.is_complete(index));
                        view! {
                            <div class=class>
                                <Show when=done fallback=move || (index + 1).to_string()>
                                    <Icon path=ICON_CHECK size="12" />
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Callback that marks `id` complete, used by a step's primary action.
fn complete(state: RwSignal<WizardState>, id: StepId) -> Callback<()> {
    Callback::new(move |_| {
        if let Some(index) = index_of(id) {
            state.update(|s| {
                s.mark_complete(index);
            });
        }
    })
}

fn step_body(id: StepId, state: RwSignal<WizardState>, feedback: CopyFeedback) -> AnyView {
    let config = site();
    match id {
        StepId::Welcome => view! {
            <div class="welcome-step">
                <h2 class="welcome-title">"Let's Get You Started"</h2>
                <p class="step-lead">
                    "We'll guide you through setting up Insight CLI in just a few simple steps. "
                    "Get ready to analyze your codebase with AI-powered insights!"
                </p>
                <div class="onboarding-overview">
                    {OVERVIEW
                        .iter()
                        .enumerate()
                        .map(|(i, label)| view! {
                            <div class="onboarding-step-preview">
                                <span class="preview-number">{i + 1}</span>
                                <span class="preview-label">{*label}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),

        StepId::Clone => {
            let project_ready = complete(state, StepId::Clone);
            view! {
            <p class="step-lead">
                "First, let's get your project ready for analysis. "
                "Clone your repository or navigate to your existing project."
            </p>
            <TerminalCard>
                <CommandLine
                    command=config.clone_command()
                    feedback=feedback
                    copy_key="clone"
                />
                <CommandLine command=config.cd_command() feedback=feedback copy_key="cd" />
            </TerminalCard>
            <div class="step-actions">
                <button
                    class="neon-button-small"
                    on:click=move |_| project_ready.run(())
                >
                    <Icon path=ICON_CHECK size="16" />
                    "Project Ready"
                </button>
            </div>
            }
            .into_any()
        }

        StepId::CreateEnv => view! {
            <p class="step-lead">
                "Let's create an isolated Python environment for Insight CLI to keep your system clean."
            </p>
            <TerminalCard>
                <CommandLine
                    command=CREATE_VENV.to_string()
                    feedback=feedback
                    copy_key="venv-create"
                    on_copy=Some(complete(state, StepId::CreateEnv))
                />
                <OutputLine text="✓ Virtual environment created successfully!" tone="success" />
            </TerminalCard>
        }
        .into_any(),

        StepId::ActivateEnv => view! {
            <p class="step-lead">
                "Now let's activate your virtual environment. Choose your operating system:"
            </p>
            <PlatformSelector
                selected=Signal::derive(move || state.with(WizardState::platform))
                on_select=Callback::new(move |platform: Platform| state.update(|s| s.set_platform(platform)))
            />
            <TerminalCard>
                <CommandLine
                    command=Signal::derive(move || {
                        activation_command(state.with(WizardState::platform)).to_string()
                    })
                    feedback=feedback
                    copy_key="activate"
                    on_copy=Some(complete(state, StepId::ActivateEnv))
                />
                <div class="terminal-line">
                    <span class="terminal-venv">"(venv)"</span>
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-output muted">"Environment activated!"</span>
                </div>
            </TerminalCard>
        }
        .into_any(),

        StepId::Install => view! {
            <p class="step-lead">
                "Time to install Insight CLI! This will give you access to powerful code analysis tools."
            </p>
            <TerminalCard>
                <CommandLine
                    command=config.install_command()
                    venv=true
                    feedback=feedback
                    copy_key="install"
                    on_copy=Some(complete(state, StepId::Install))
                />
                <OutputLine
                    text=format!("✓ Successfully installed {}", config.cli_package)
                    tone="success"
                />
            </TerminalCard>
        }
        .into_any(),

        StepId::ApiKey => view! {
            <p class="step-lead">"Configure your Google API key for AI-powered analysis features."</p>
            <label class="field">
                <span class="field-label">"Google API Key"</span>
                <input
                    type="password"
                    class="api-input"
                    placeholder="Enter your Google API key..."
                    autocomplete="off"
                    prop:value=move || state.with(|s| s.api_key_draft().to_owned())
                    on:input=move |ev| {
                        let draft = event_target_value(&ev);
                        state.update(|s| s.set_api_key_draft(draft));
                    }
                />
            </label>
            <TerminalCard>
                <ApiKeyLines
                    lines=Signal::derive(move || state.with(api_key_lines))
                    venv=true
                    feedback=feedback
                    copy_key="export"
                    on_copy=Some(complete(state, StepId::ApiKey))
                />
            </TerminalCard>
            <p class="api-tooltip">
                "Tip: Add this to your shell profile (~/.bashrc, ~/.zshrc) for persistence. "
                {format!("Leave the field empty to copy the \"{API_KEY_PLACEHOLDER}\" placeholder.")}
            </p>
        }
        .into_any(),

        StepId::Run => {
            let binary = config.cli_binary.as_str();
            view! {
                <p class="step-lead">
                    "You're all set! Now let's analyze your codebase with Insight CLI."
                </p>
                <label class="field">
                    <span class="field-label">"Project Path"</span>
                    <input
                        type="text"
                        class="api-input"
                        placeholder="./my-project"
                        prop:value=move || state.with(|s| s.project_path_draft().to_owned())
                        on:input=move |ev| {
                            let draft = event_target_value(&ev);
                            state.update(|s| s.set_project_path_draft(draft));
                        }
                    />
                </label>
                <TerminalCard>
                    <CommandLine
                        command=Signal::derive(move || {
                            state.with(|s| run_command(binary, s.project_path_draft()))
                        })
                        venv=true
                        feedback=feedback
                        copy_key="run"
                        on_copy=Some(complete(state, StepId::Run))
                    />
                    <OutputLine text="Analyzing codebase..." />
                    <OutputLine
                        text="✓ Analysis complete! Report saved to insight_report.md"
                        tone="success"
                    />
                </TerminalCard>
            }
            .into_any()
        }

        StepId::Help => view! {
            <p class="step-lead">
                "Here are some useful commands and options to get the most out of Insight CLI:"
            </p>
            <div class="commands-grid">
                {commands::option_hints(&config.cli_binary)
                    .into_iter()
                    .enumerate()
                    .map(|(i, hint)| view! {
                        <div class="command-card">
                            <div class="command-card-row">
                                <code>{hint.command.clone()}</code>
                                <CopyButton
                                    feedback=feedback
                                    text=hint.command
                                    copy_key=format!("cmd-{i}")
                                    small=true
                                />
                            </div>
                            <p class="command-desc">{hint.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="success-message">
                <h3>"You're Ready to Go!"</h3>
                <p>"Start analyzing your codebase and discover insights you never knew existed."</p>
            </div>
        }
        .into_any(),
    }
}
