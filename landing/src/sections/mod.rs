// Landing page sections
// Developed by XplnHUB (c)2025

mod features;
mod footer;
mod header;
mod hero;
pub mod icons;
mod install;
mod language_modal;
mod manual;
mod modal;
mod roadmap;
pub mod terminal;

pub use features::{Capabilities, Features, LanguageGrid, UseCases};
pub use footer::Footer;
pub use header::{Backdrop, Header};
pub use hero::{About, Hero, Highlights};
pub use install::InstallSection;
pub use language_modal::LanguageModal;
pub use manual::{
    AdvancedConfiguration, ApiKeyGuide, InstallSteps, QuickStart, Troubleshooting, UsageExamples,
    VirtualEnvGuide,
};
pub use modal::{ModalShell, is_backdrop_click};
pub use roadmap::{CommunityCallout, FutureVision, RoadmapPreview, Timeline};
