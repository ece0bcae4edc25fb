use leptos::prelude::*;

use super::icons::{ICON_X, Icon};
use super::modal::ModalShell;
use crate::catalog::{ANALYSIS_STAGES, LANGUAGE_CATEGORIES};

/// Per-language extension and evaluation reference.
#[component]
pub fn LanguageModal(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <ModalShell
            open=open
            on_close=on_close
            dialog_class="modal-dialog language-modal"
            label="Supported languages and file types"
        >
            <div class="modal-header">
                <div>
                    <h2 class="modal-title">"Supported Languages & File Types"</h2>
                    <p class="modal-subtitle">"Comprehensive analysis across 30+ file formats"</p>
                </div>
                <button class="close-button" aria-label="Close" on:click=move |_| on_close.run(())>
                    <Icon path=ICON_X size="24" />
                </button>
            </div>

            <div class="modal-body">
                {LANGUAGE_CATEGORIES
                    .iter()
                    .map(|category| view! {
                        <div class="feature-card language-category">
                            <div class="language-category-header">
                                <div class=format!("category-icon accent-{}", category.accent)>
                                    <Icon path=category.icon size="24" />
                                </div>
                                <h3>{category.name}</h3>
                            </div>
                            <div class="language-grid">
                                {category
                                    .languages
                                    .iter()
                                    .map(|language| view! {
                                        <div class="language-entry">
                                            <div class="language-entry-header">
                                                <h4>{language.name}</h4>
                                                <div class="extension-list">
                                                    {language
                                                        .extensions
                                                        .iter()
                                                        .map(|ext| view! { <span class="extension-badge">{*ext}</span> })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                            <p class="language-evaluation">{language.evaluation}</p>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })
                    .collect_view()}

                <div class="analysis-info">
                    <h4>"How Analysis Works"</h4>
                    <ul>
                        {ANALYSIS_STAGES
                            .iter()
                            .map(|(stage, detail)| view! {
                                <li>
                                    <strong>{*stage}":"</strong>
                                    " "
                                    {*detail}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </ModalShell>
    }
}
