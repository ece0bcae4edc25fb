//! Onboarding wizard state machine.
//!
//! Pure data: the view layer wraps a [`WizardState`] in a signal and renders
//! from it, so every transition here is testable without a browser.

use std::collections::BTreeSet;

/// Default shown in the project-path field.
pub const DEFAULT_PROJECT_PATH: &str = "./my-project";

/// Target shell family for the commands shown in the wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS / Linux
    #[default]
    Unix,
    Windows,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Unix => "macOS / Linux",
            Platform::Windows => "Windows",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    current: usize,
    step_count: usize,
    completed: BTreeSet<usize>,
    platform: Platform,
    api_key_draft: String,
    project_path_draft: String,
}

impl WizardState {
    /// Fresh state positioned on the first step. A wizard always has at
    /// least one step, so `step_count` is clamped to 1.
    pub fn new(step_count: usize) -> Self {
        Self {
            current: 0,
            step_count: step_count.max(1),
            completed: BTreeSet::new(),
            platform: Platform::default(),
            api_key_draft: String::new(),
            project_path_draft: DEFAULT_PROJECT_PATH.to_owned(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.step_count
    }

    /// Moves to the next step. Returns `false` (and does nothing) on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Moves to the previous step. Returns `false` (and does nothing) on the first one.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Records `index` as completed. Any valid step may be marked, visited
    /// or not; out-of-range indices are ignored. Returns whether the set grew.
    pub fn mark_complete(&mut self, index: usize) -> bool {
        if index >= self.step_count {
            return false;
        }
        self.completed.insert(index)
    }

    pub fn is_complete(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Steps up to and including the current one render as reached.
    pub fn is_reached(&self, index: usize) -> bool {
        index <= self.current
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn api_key_draft(&self) -> &str {
        &self.api_key_draft
    }

    pub fn set_api_key_draft(&mut self, draft: impl Into<String>) {
        self.api_key_draft = draft.into();
    }

    pub fn project_path_draft(&self) -> &str {
        &self.project_path_draft
    }

    pub fn set_project_path_draft(&mut self, draft: impl Into<String>) {
        self.project_path_draft = draft.into();
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current, self.step_count)
    }
}

/// `(current + 1) / total * 100`. Zero when there are no steps.
pub fn progress_percent(current: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (current + 1) as f64 / total as f64 * 100.0
}

/// Progress label, rounded to the nearest whole percent (12.5 -> "13%").
pub fn progress_label(percent: f64) -> String {
    format!("{}%", percent.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_first_step_with_defaults() {
        let state = WizardState::new(8);
        assert_eq!(state.current(), 0);
        assert!(state.is_first());
        assert!(!state.is_last());
        assert_eq!(state.platform(), Platform::Unix);
        assert_eq!(state.api_key_draft(), "");
        assert_eq!(state.project_path_draft(), "./my-project");
        assert!((0..8).all(|index| !state.is_complete(index)));
    }

    #[test]
    fn advance_clamps_at_last_step() {
        let mut state = WizardState::new(3);
        assert!(state.advance());
        assert!(state.advance());
        assert!(state.is_last());
        assert!(!state.advance());
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn retreat_clamps_at_first_step() {
        let mut state = WizardState::new(3);
        assert!(!state.retreat());
        assert_eq!(state.current(), 0);

        state.advance();
        assert!(state.retreat());
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn mark_complete_does_not_move_cursor() {
        let mut state = WizardState::new(8);
        assert!(state.mark_complete(5));
        assert_eq!(state.current(), 0);
        assert!(state.is_complete(5));
        assert!(!state.is_reached(5));
    }

    #[test]
    fn mark_complete_ignores_out_of_range() {
        let mut state = WizardState::new(4);
        assert!(!state.mark_complete(4));
        assert!(!state.is_complete(4));
        assert!((0..4).all(|index| !state.is_complete(index)));
    }

    #[test]
    fn zero_steps_is_clamped_to_one() {
        let mut state = WizardState::new(0);
        assert_eq!(state.step_count(), 1);
        assert!(state.is_first() && state.is_last());
        assert!(!state.advance());
        assert_eq!(state.progress_percent(), 100.0);
    }

    #[test]
    fn progress_label_rounds_to_nearest() {
        assert_eq!(progress_label(12.5), "13%");
        assert_eq!(progress_label(37.5), "38%");
        assert_eq!(progress_label(100.0), "100%");
        assert_eq!(progress_label(33.333), "33%");
    }

    #[test]
    fn progress_with_no_steps_is_zero() {
        assert_eq!(progress_percent(0, 0), 0.0);
    }

    #[test]
    fn draft_setters_replace_values() {
        let mut state = WizardState::new(8);
        state.set_api_key_draft("abc");
        state.set_project_path_draft("~/code/app");
        state.set_platform(Platform::Windows);
        assert_eq!(state.api_key_draft(), "abc");
        assert_eq!(state.project_path_draft(), "~/code/app");
        assert_eq!(state.platform().label(), "Windows");
    }
}
