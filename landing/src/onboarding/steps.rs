//! Ordered registry of walkthrough steps. Order is navigation order.

use crate::sections::icons::{
    ICON_DOWNLOAD, ICON_FOLDER, ICON_KEY, ICON_LIGHTNING, ICON_PLAY, ICON_ROBOT,
    ICON_SQUARES_FOUR, ICON_TERMINAL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Welcome,
    Clone,
    CreateEnv,
    ActivateEnv,
    Install,
    ApiKey,
    Run,
    Help,
}

impl StepId {
    pub fn slug(self) -> &'static str {
        match self {
            StepId::Welcome => "welcome",
            StepId::Clone => "clone",
            StepId::CreateEnv => "create-env",
            StepId::ActivateEnv => "activate-env",
            StepId::Install => "install",
            StepId::ApiKey => "api-key",
            StepId::Run => "run",
            StepId::Help => "help",
        }
    }
}

/// Static metadata for one step; its body is rendered from `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStep {
    pub id: StepId,
    pub title: &'static str,
    pub icon: &'static str,
}

pub static STEPS: &[WizardStep] = &[
    WizardStep {
        id: StepId::Welcome,
        title: "Welcome to Insight CLI",
        icon: ICON_ROBOT,
    },
    WizardStep {
        id: StepId::Clone,
        title: "Clone Your Project",
        icon: ICON_FOLDER,
    },
    WizardStep {
        id: StepId::CreateEnv,
        title: "Create Virtual Environment",
        icon: ICON_LIGHTNING,
    },
    WizardStep {
        id: StepId::ActivateEnv,
        title: "Activate Virtual Environment",
        icon: ICON_TERMINAL,
    },
    WizardStep {
        id: StepId::Install,
        title: "Install Insight CLI",
        icon: ICON_DOWNLOAD,
    },
    WizardStep {
        id: StepId::ApiKey,
        title: "Set Google API Key",
        icon: ICON_KEY,
    },
    WizardStep {
        id: StepId::Run,
        title: "Run Insight CLI",
        icon: ICON_PLAY,
    },
    WizardStep {
        id: StepId::Help,
        title: "Commands & Options",
        icon: ICON_SQUARES_FOUR,
    },
];

/// Position of `id` in [`STEPS`].
pub fn index_of(id: StepId) -> Option<usize> {
    STEPS.iter().position(|step| step.id == id)
}

/// Labels for the overview chips on the welcome step.
pub const OVERVIEW: [&str; 4] = ["Clone", "Setup", "Configure", "Analyze"];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn registry_order_is_fixed() {
        let slugs: Vec<_> = STEPS.iter().map(|s| s.id.slug()).collect();
        assert_eq!(
            slugs,
            vec![
                "welcome",
                "clone",
                "create-env",
                "activate-env",
                "install",
                "api-key",
                "run",
                "help"
            ]
        );
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = STEPS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), STEPS.len());
    }

    #[test]
    fn index_of_matches_position() {
        assert_eq!(index_of(StepId::Welcome), Some(0));
        assert_eq!(index_of(StepId::Clone), Some(1));
        assert_eq!(index_of(StepId::Help), Some(STEPS.len() - 1));
    }
}
