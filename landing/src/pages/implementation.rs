// Implementation page - install and usage guide
use crate::clipboard::CopyFeedback;
use crate::onboarding::Platform;
use crate::sections::{
    AdvancedConfiguration, ApiKeyGuide, InstallSteps, QuickStart, Troubleshooting, UsageExamples,
    VirtualEnvGuide,
};
use leptos::prelude::*;

#[component]
pub fn ImplementationPage() -> impl IntoView {
    let platform = RwSignal::new(Platform::default());
    let feedback = CopyFeedback::new();

    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Implementation Guide"</h1>
                <p class="page-description">
                    "Complete guide to installing, configuring, and using Insight CLI"
                </p>
            </div>
        </section>
        <section class="manual">
            <div class="container narrow">
                <QuickStart feedback=feedback />
                <InstallSteps feedback=feedback />
                <VirtualEnvGuide platform=platform feedback=feedback />
                <ApiKeyGuide platform=platform feedback=feedback />
                <UsageExamples feedback=feedback />
                <AdvancedConfiguration />
                <Troubleshooting />
            </div>
        </section>
    }
}
