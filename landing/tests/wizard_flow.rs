use insight_landing::catalog::roadmap_preview;
use insight_landing::clipboard::{ACK_WINDOW_MS, CopyAcks};
use insight_landing::config::{SiteConfig, load_embedded};
use insight_landing::onboarding::{
    API_KEY_PLACEHOLDER, Platform, STEPS, StepId, WizardState, activation_command, api_key_lines,
    export_api_key_command, index_of, progress_label, run_command,
};
use insight_landing::routes::{NAV_LINKS, is_link_active};
use insight_landing::sections::is_backdrop_click;
use pretty_assertions::assert_eq;

fn fresh() -> WizardState {
    WizardState::new(STEPS.len())
}

fn advanced(times: usize) -> WizardState {
    let mut state = fresh();
    for _ in 0..times {
        state.advance();
    }
    state
}

#[test]
fn registry_has_eight_steps_from_welcome_to_help() {
    assert_eq!(STEPS.len(), 8);
    assert_eq!(STEPS[0].id, StepId::Welcome);
    assert_eq!(STEPS[STEPS.len() - 1].id, StepId::Help);
}

#[test]
fn advancing_stops_on_the_last_step() {
    let n = STEPS.len();
    for i in 0..n {
        assert_eq!(advanced(i).current(), i);
    }
    assert_eq!(advanced(n).current(), n - 1);
    assert_eq!(advanced(n + 5).current(), n - 1);
    assert!(advanced(n).is_last());
}

#[test]
fn retreat_on_first_step_changes_nothing() {
    let mut state = fresh();
    let before = state.clone();
    assert!(!state.retreat());
    assert_eq!(state, before);
}

#[test]
fn completing_a_step_twice_is_a_no_op() {
    let mut state = fresh();
    for k in 0..STEPS.len() {
        assert!(state.mark_complete(k));
        let once = state.clone();
        assert!(!state.mark_complete(k));
        assert_eq!(state, once);
    }
    assert!((0..STEPS.len()).all(|k| state.is_complete(k)));
    assert!(!state.mark_complete(STEPS.len()));
}

#[test]
fn progress_runs_from_one_eighth_to_full() {
    assert_eq!(fresh().progress_percent(), 12.5);
    assert_eq!(progress_label(fresh().progress_percent()), "13%");
    assert_eq!(advanced(STEPS.len() - 1).progress_percent(), 100.0);
    assert_eq!(progress_label(100.0), "100%");
}

#[test]
fn platform_picks_exactly_one_activation_command() {
    let unix = activation_command(Platform::Unix);
    let windows = activation_command(Platform::Windows);
    assert_ne!(unix, windows);
    assert!(unix.contains("venv/bin/activate"));
    assert!(windows.contains(r"venv\Scripts\activate"));
    assert!(!windows.contains("source"));
}

#[test]
fn api_key_draft_replaces_placeholder() {
    let mut state = fresh();
    let lines = api_key_lines(&state);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(API_KEY_PLACEHOLDER));

    state.set_api_key_draft("XYZ123");
    let line = export_api_key_command(state.api_key_draft());
    assert!(line.contains("XYZ123"));
    assert!(!line.contains(API_KEY_PLACEHOLDER));

    state.set_platform(Platform::Windows);
    assert_eq!(
        api_key_lines(&state),
        vec![
            r#"export GOOGLE_API_KEY="XYZ123""#.to_string(),
            "set GOOGLE_API_KEY=XYZ123".to_string(),
        ]
    );
}

#[test]
fn whitespace_in_a_typed_key_is_kept() {
    let mut state = fresh();
    state.set_api_key_draft("XYZ123 ");
    assert_eq!(api_key_lines(&state), vec![r#"export GOOGLE_API_KEY="XYZ123 ""#.to_string()]);
}

#[test]
fn run_command_tracks_the_project_path() {
    let mut state = fresh();
    let binary = &SiteConfig::default().cli_binary;
    assert_eq!(
        run_command(binary, state.project_path_draft()),
        "insight-cli-sarang ./my-project"
    );
    state.set_project_path_draft("");
    assert_eq!(run_command(binary, state.project_path_draft()), "insight-cli-sarang .");
}

#[test]
fn project_ready_marks_the_clone_step() {
    let mut state = fresh();
    let clone = index_of(StepId::Clone).expect("clone step registered");
    state.mark_complete(clone);
    assert!(state.is_complete(clone));
    // completion does not move the cursor
    assert_eq!(state.current(), 0);
}

#[test]
fn only_direct_overlay_clicks_close() {
    #[derive(PartialEq)]
    struct Node(&'static str);

    assert!(is_backdrop_click(Some(Node("overlay")), Some(Node("overlay"))));
    assert!(!is_backdrop_click(Some(Node("next-button")), Some(Node("overlay"))));
}

#[test]
fn copy_acknowledgment_lasts_the_window() {
    let mut acks = CopyAcks::default();
    let t = 50_000;
    acks.acknowledge("install", t);
    acks.acknowledge("other", t + 1_000);
    assert!(acks.is_acknowledged("install"));

    acks.expire(t + ACK_WINDOW_MS);
    assert!(!acks.is_acknowledged("install"));
    assert!(acks.is_acknowledged("other"));
}

#[test]
fn nav_links_highlight_one_entry_per_page() {
    for link in NAV_LINKS {
        let active: Vec<_> = NAV_LINKS
            .iter()
            .filter(|other| is_link_active(link.path, other.path))
            .map(|other| other.path)
            .collect();
        assert_eq!(active, vec![link.path]);
    }
}

#[test]
fn embedded_config_parses() {
    let config = load_embedded().expect("site.toml is valid");
    assert_eq!(config.cli_binary, "insight-cli-sarang");
    assert_eq!(config.install_command(), "pip install insight-cli-sarang");
}

#[test]
fn roadmap_preview_skips_shipped_work() {
    assert!(roadmap_preview(10).iter().all(|item| item.title != ".insightignore Support"));
}
