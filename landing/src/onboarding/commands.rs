//! Shell commands shown (and copied) by the walkthrough and the
//! implementation guide. Everything here is display text: nothing is run.

use super::state::{Platform, WizardState};

/// Shown in place of an empty API key draft.
pub const API_KEY_PLACEHOLDER: &str = "your-api-key";

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

pub const CREATE_VENV: &str = "python3 -m venv venv";

const UNIX_ACTIVATE: &str = "source venv/bin/activate";
const WINDOWS_ACTIVATE: &str = r"venv\Scripts\activate";

/// A copyable CLI invocation with a one-line explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHint {
    pub command: String,
    pub description: &'static str,
}

pub fn activation_command(platform: Platform) -> &'static str {
    match platform {
        Platform::Unix => UNIX_ACTIVATE,
        Platform::Windows => WINDOWS_ACTIVATE,
    }
}

/// The draft is used verbatim; only an empty one falls back.
fn api_key_or_placeholder(draft: &str) -> &str {
    if draft.is_empty() {
        API_KEY_PLACEHOLDER
    } else {
        draft
    }
}

/// `export GOOGLE_API_KEY="..."` with the draft, or the placeholder when empty.
pub fn export_api_key_command(draft: &str) -> String {
    format!(r#"export {API_KEY_ENV}="{}""#, api_key_or_placeholder(draft))
}

/// cmd.exe flavour of [`export_api_key_command`].
pub fn set_api_key_command(draft: &str) -> String {
    format!("set {API_KEY_ENV}={}", api_key_or_placeholder(draft))
}

/// `<binary> <path>`; a blank path analyzes the current directory.
pub fn run_command(binary: &str, project_path: &str) -> String {
    let path = project_path.trim();
    let path = if path.is_empty() { "." } else { path };
    format!("{binary} {path}")
}

/// API-key lines for `draft` on `platform`, in display order.
/// Windows users get the `set` variant after the `export` line.
pub fn api_key_commands(draft: &str, platform: Platform) -> Vec<String> {
    let mut lines = vec![export_api_key_command(draft)];
    if platform == Platform::Windows {
        lines.push(set_api_key_command(draft));
    }
    lines
}

/// The API-key lines visible in the walkthrough for the current state.
pub fn api_key_lines(state: &WizardState) -> Vec<String> {
    api_key_commands(state.api_key_draft(), state.platform())
}

/// Quick reference shown on the last wizard step.
pub fn option_hints(binary: &str) -> Vec<CommandHint> {
    vec![
        CommandHint {
            command: format!("{binary} --help"),
            description: "Show all available options",
        },
        CommandHint {
            command: format!("{binary} --output custom.md"),
            description: "Specify output filename",
        },
        CommandHint {
            command: format!(r#"{binary} --exclude "*.test.js""#),
            description: "Exclude specific files",
        },
        CommandHint {
            command: format!("{binary} --verbose"),
            description: "Enable detailed logging",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn activation_follows_platform() {
        assert_eq!(activation_command(Platform::Unix), "source venv/bin/activate");
        assert_eq!(activation_command(Platform::Windows), r"venv\Scripts\activate");
    }

    #[test]
    fn export_uses_placeholder_for_empty_draft() {
        assert_eq!(
            export_api_key_command(""),
            r#"export GOOGLE_API_KEY="your-api-key""#
        );
    }

    #[test]
    fn typed_key_is_copied_verbatim() {
        assert_eq!(
            export_api_key_command("abc "),
            r#"export GOOGLE_API_KEY="abc ""#
        );
        assert_eq!(set_api_key_command(" abc"), "set GOOGLE_API_KEY= abc");
    }

    #[test]
    fn set_command_has_no_quotes() {
        assert_eq!(set_api_key_command("k-1"), "set GOOGLE_API_KEY=k-1");
    }

    #[test]
    fn run_command_defaults_to_current_dir() {
        assert_eq!(run_command("insight-cli-sarang", ""), "insight-cli-sarang .");
        assert_eq!(
            run_command("insight-cli-sarang", " ./my-project "),
            "insight-cli-sarang ./my-project"
        );
    }

    #[test]
    fn windows_adds_set_line() {
        let mut state = WizardState::new(8);
        assert_eq!(api_key_lines(&state).len(), 1);

        state.set_platform(Platform::Windows);
        state.set_api_key_draft("XYZ123");
        assert_eq!(
            api_key_lines(&state),
            vec![
                r#"export GOOGLE_API_KEY="XYZ123""#.to_string(),
                "set GOOGLE_API_KEY=XYZ123".to_string(),
            ]
        );
    }

    #[test]
    fn guide_sample_key_follows_platform() {
        assert_eq!(api_key_commands("your-api-key-here", Platform::Unix).len(), 1);
        assert_eq!(
            api_key_commands("your-api-key-here", Platform::Windows)[1],
            "set GOOGLE_API_KEY=your-api-key-here"
        );
    }

    #[test]
    fn option_hints_use_binary_name() {
        let hints = option_hints("insight");
        assert_eq!(hints.len(), 4);
        assert!(hints.iter().all(|h| h.command.starts_with("insight --")));
    }
}
