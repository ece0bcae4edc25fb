//! Overlay dialog shell shared by the onboarding walkthrough and the
//! language reference.
//!
//! The caller owns visibility: pass the open flag in and a close callback
//! down. Clicking the backdrop closes, clicks that bubble up from the dialog
//! content do not. Escape closes too, the dialog takes focus on open and
//! Tab cycles through the dialog's controls without leaving it.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), \
                         select, textarea, [tabindex]:not([tabindex='-1'])";

/// True when a click landed on the element that owns the handler itself,
/// not on one of its descendants.
pub fn is_backdrop_click<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> bool {
    match (target, current_target) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Where Tab should land instead of its default target, if anywhere.
///
/// `active` is the position of the focused element among the dialog's
/// `focusable` controls (`None` when focus sits on the dialog itself or
/// outside it). Only the two edges wrap; everything else is left to the
/// browser.
fn tab_wrap_target(focusable: usize, active: Option<usize>, backwards: bool) -> Option<usize> {
    let last = focusable.checked_sub(1)?;
    match (active, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(index), false) if index == last => Some(0),
        _ => None,
    }
}

fn trap_tab(dialog: &web_sys::HtmlElement, ev: &web_sys::KeyboardEvent) {
    let Ok(nodes) = dialog.query_selector_all(FOCUSABLE) else {
        return;
    };
    let focusable: Vec<web_sys::HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect();
    if focusable.is_empty() {
        ev.prevent_default();
        return;
    }

    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element());
    let active_index = active.and_then(|active| {
        focusable.iter().position(|candidate| {
            let candidate: &web_sys::Element = candidate;
            *candidate == active
        })
    });

    if let Some(target) = tab_wrap_target(focusable.len(), active_index, ev.shift_key()) {
        ev.prevent_default();
        if let Err(err) = focusable[target].focus() {
            tracing::debug!(error = ?err, "could not move focus inside dialog");
        }
    }
}

#[component]
pub fn ModalShell(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    /// Class for the full-screen backdrop
    #[prop(default = "modal-overlay")]
    overlay_class: &'static str,
    /// Class for the dialog box
    #[prop(default = "modal-dialog")]
    dialog_class: &'static str,
    /// Accessible name for the dialog
    #[prop(default = "Dialog")]
    label: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_ref = NodeRef::<html::Div>::new();

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => on_close.run(()),
            "Tab" => {
                if let Some(dialog) = dialog_ref.get_untracked() {
                    trap_tab(&dialog, &ev);
                }
            }
            _ => {}
        }
    });
    on_cleanup(move || keydown.remove());

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        if let Some(dialog) = dialog_ref.get() {
            if let Err(err) = dialog.focus() {
                tracing::debug!(error = ?err, "could not focus dialog");
            }
        }
    });

    view! {
        <Show when=move || open.get()>
            <div
                class=overlay_class
                on:click=move |ev: ev::MouseEvent| {
                    if is_backdrop_click(ev.target(), ev.current_target()) {
                        on_close.run(());
                    }
                }
            >
                <div
                    class=dialog_class
                    role="dialog"
                    aria-modal="true"
                    aria-label=label
                    tabindex="-1"
                    node_ref=dialog_ref
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_on_overlay_itself_closes() {
        assert!(is_backdrop_click(Some("overlay"), Some("overlay")));
    }

    #[test]
    fn click_bubbled_from_content_does_not_close() {
        assert!(!is_backdrop_click(Some("step-content"), Some("overlay")));
        assert!(!is_backdrop_click(Some("copy-button"), Some("overlay")));
    }

    #[test]
    fn tab_wraps_at_the_edges() {
        assert_eq!(tab_wrap_target(3, Some(2), false), Some(0));
        assert_eq!(tab_wrap_target(3, Some(0), true), Some(2));
    }

    #[test]
    fn tab_inside_the_dialog_is_left_alone() {
        assert_eq!(tab_wrap_target(3, Some(0), false), None);
        assert_eq!(tab_wrap_target(3, Some(1), true), None);
    }

    #[test]
    fn focus_outside_the_controls_enters_at_an_edge() {
        assert_eq!(tab_wrap_target(3, None, false), Some(0));
        assert_eq!(tab_wrap_target(3, None, true), Some(2));
        assert_eq!(tab_wrap_target(0, None, false), None);
    }

    #[test]
    fn missing_targets_never_close() {
        assert!(!is_backdrop_click(None, Some(1)));
        assert!(!is_backdrop_click(Some(1), None));
        assert!(!is_backdrop_click::<u8>(None, None));
    }
}
