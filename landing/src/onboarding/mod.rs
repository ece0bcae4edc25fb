// Onboarding walkthrough: state machine, step registry and the modal view
// Developed by XplnHUB (c)2025

mod commands;
mod state;
mod steps;
mod wizard;

pub use commands::{
    API_KEY_ENV, API_KEY_PLACEHOLDER, CREATE_VENV, CommandHint, activation_command,
    api_key_commands, api_key_lines, export_api_key_command, option_hints, run_command,
    set_api_key_command,
};
pub use state::{
    DEFAULT_PROJECT_PATH, Platform, WizardState, progress_label, progress_percent,
};
pub use steps::{OVERVIEW, STEPS, StepId, WizardStep, index_of};
pub use wizard::OnboardingModal;
