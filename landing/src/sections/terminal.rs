use leptos::prelude::*;

use crate::clipboard::{CopyButton, CopyFeedback};
use crate::onboarding::Platform;

/// Fake terminal window used to present shell commands.
#[component]
pub fn TerminalCard(
    #[prop(default = "Terminal")] title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="terminal-card">
            <div class="terminal-header">
                <div class="terminal-dots">
                    <span class="terminal-dot red"></span>
                    <span class="terminal-dot yellow"></span>
                    <span class="terminal-dot green"></span>
                </div>
                <span class="terminal-title">{title}</span>
            </div>
            <div class="terminal-content">{children()}</div>
        </div>
    }
}

/// `$ command` line, optionally inside the venv and with a copy button.
#[component]
pub fn CommandLine(
    #[prop(into)] command: Signal<String>,
    /// Prefix the prompt with `(venv)`
    #[prop(optional)]
    venv: bool,
    /// Copy support; omit for display-only lines
    #[prop(optional)]
    feedback: Option<CopyFeedback>,
    #[prop(optional, into)] copy_key: String,
    #[prop(optional_no_strip)] on_copy: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="terminal-line">
            {venv.then(|| view! { <span class="terminal-venv">"(venv)"</span> })}
            <span class="terminal-prompt">"$"</span>
            <span class="terminal-command">{move || command.get()}</span>
            {feedback.map(|feedback| view! {
                <CopyButton feedback=feedback text=command copy_key=copy_key on_copy=on_copy />
            })}
        </div>
    }
}

/// Copyable `export` line followed by the Windows `set` variant when present.
#[component]
pub fn ApiKeyLines(
    /// Output of `api_key_commands`, first line first.
    #[prop(into)]
    lines: Signal<Vec<String>>,
    feedback: CopyFeedback,
    #[prop(into)] copy_key: String,
    #[prop(optional)] venv: bool,
    #[prop(optional_no_strip)] on_copy: Option<Callback<()>>,
) -> impl IntoView {
    let primary =
        Signal::derive(move || lines.with(|lines| lines.first().cloned().unwrap_or_default()));

    view! {
        <CommandLine command=primary venv=venv feedback=feedback copy_key=copy_key on_copy=on_copy />
        {move || {
            lines.with(|lines| {
                lines
                    .iter()
                    .skip(1)
                    .map(|line| view! {
                        <div class="terminal-line">
                            <span class="terminal-output muted">"Windows:"</span>
                            <span class="terminal-command">{line.clone()}</span>
                        </div>
                    })
                    .collect_view()
            })
        }}
    }
}

/// Simulated program output under a command.
#[component]
pub fn OutputLine(
    #[prop(into)] text: String,
    /// success | info | muted
    #[prop(default = "info")]
    tone: &'static str,
) -> impl IntoView {
    view! { <div class=format!("terminal-output {tone}")>{text}</div> }
}

/// Two-way OS toggle; the caller owns the selection.
#[component]
pub fn PlatformSelector(
    #[prop(into)] selected: Signal<Platform>,
    on_select: Callback<Platform>,
) -> impl IntoView {
    let option = move |platform: Platform| {
        view! {
            <button
                class=move || {
                    if selected.get() == platform { "os-button active" } else { "os-button" }
                }
                on:click=move |_| on_select.run(platform)
            >
                {platform.label()}
            </button>
        }
    };

    view! {
        <div class="os-selector">
            {option(Platform::Unix)}
            {option(Platform::Windows)}
        </div>
    }
}
