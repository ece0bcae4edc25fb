//! Clipboard copy with transient "copied" feedback.
//!
//! Each copy action is identified by a key. A successful write marks the key
//! acknowledged for [`ACK_WINDOW_MS`]; repeating the copy before the window
//! ends cancels the pending timer and starts a fresh one. Failed writes are
//! logged and otherwise invisible: the acknowledgment just never shows up.

use std::collections::HashMap;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::sections::icons::{ICON_CHECK, ICON_COPY, Icon};

/// How long a key stays acknowledged after a successful copy.
pub const ACK_WINDOW_MS: u64 = 2_000;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No window, no `navigator.clipboard` (insecure context, old browser).
    #[error("clipboard API is unavailable")]
    Unavailable,
    /// `writeText` rejected, usually a permission denial.
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Timer table behind the "copied" indicators: key -> expiry timestamp (ms).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyAcks {
    expires_at: HashMap<String, u64>,
}

impl CopyAcks {
    /// Marks `key` acknowledged at `now_ms` and returns its new deadline.
    /// Re-acknowledging an active key pushes its deadline out.
    pub fn acknowledge(&mut self, key: &str, now_ms: u64) -> u64 {
        let deadline = now_ms.saturating_add(ACK_WINDOW_MS);
        self.expires_at.insert(key.to_owned(), deadline);
        deadline
    }

    pub fn is_acknowledged(&self, key: &str) -> bool {
        self.expires_at.contains_key(key)
    }

    /// Drops every entry whose deadline is at or before `now_ms`.
    /// Returns how many were dropped.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.expires_at.len();
        self.expires_at.retain(|_, deadline| *deadline > now_ms);
        before - self.expires_at.len()
    }
}

/// Writes `text` to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let navigator = window.navigator();

    // `navigator.clipboard` is undefined outside secure contexts
    let api = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if api.is_undefined() || api.is_null() {
        return Err(ClipboardError::Unavailable);
    }

    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(describe_js_error(&err)))
}

fn describe_js_error(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|msg| msg.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Logs the outcome of a write and runs `on_success` only when it landed.
/// Returns whether it did.
fn settle_copy(result: Result<(), ClipboardError>, key: &str, on_success: impl FnOnce()) -> bool {
    match result {
        Ok(()) => {
            tracing::debug!(key = %key, "copied to clipboard");
            on_success();
            true
        }
        Err(err) => {
            tracing::warn!(key = %key, %err, "failed to copy text");
            false
        }
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Per-component copy state: acknowledgments plus one pending timer per key.
///
/// Timers still pending when the owning component unmounts are cleared.
#[derive(Clone, Copy)]
pub struct CopyFeedback {
    acks: RwSignal<CopyAcks>,
    timers: StoredValue<HashMap<String, TimeoutHandle>>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        let timers: StoredValue<HashMap<String, TimeoutHandle>> = StoredValue::new(HashMap::new());
        on_cleanup(move || {
            timers.try_update_value(|pending| {
                for (_, handle) in pending.drain() {
                    handle.clear();
                }
            });
        });

        Self {
            acks: RwSignal::new(CopyAcks::default()),
            timers,
        }
    }

    /// Reactive: true while `key` is inside its acknowledgment window.
    pub fn is_copied(&self, key: &str) -> bool {
        self.acks.with(|acks| acks.is_acknowledged(key))
    }

    /// Best-effort copy. Never fails from the caller's point of view;
    /// `on_success` runs only once the write has landed.
    pub fn copy(
        &self,
        text: impl Into<String>,
        key: impl Into<String>,
        on_success: Option<Callback<()>>,
    ) {
        let (text, key) = (text.into(), key.into());
        let this = *self;
        spawn_local(async move {
            let result = write_text(&text).await;
            settle_copy(result, &key, || {
                this.acknowledge(key.clone());
                if let Some(on_success) = on_success {
                    on_success.run(());
                }
            });
        });
    }

    fn acknowledge(self, key: String) {
        let Some(deadline) = self
            .acks
            .try_update(|acks| acks.acknowledge(&key, now_ms()))
        else {
            return;
        };

        let acks = self.acks;
        let scheduled = set_timeout_with_handle(
            move || {
                acks.try_update(|acks| acks.expire(deadline));
            },
            Duration::from_millis(ACK_WINDOW_MS),
        );

        match scheduled {
            Ok(handle) => {
                self.timers.try_update_value(|pending| {
                    if let Some(previous) = pending.insert(key, handle) {
                        previous.clear();
                    }
                });
            }
            Err(err) => {
                tracing::warn!(key = %key, error = ?err, "could not schedule copy reset");
            }
        }
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}

/// Icon button that copies `text` and flips to a check mark while acknowledged.
#[component]
pub fn CopyButton(
    feedback: CopyFeedback,
    /// Text written to the clipboard (read at click time).
    #[prop(into)]
    text: Signal<String>,
    /// Acknowledgment key; buttons sharing a key share their indicator.
    #[prop(into)]
    copy_key: String,
    /// Render the compact variant used inside command cards.
    #[prop(optional)]
    small: bool,
    /// Runs after a successful copy, e.g. to mark a wizard step complete.
    #[prop(optional_no_strip)]
    on_copy: Option<Callback<()>>,
) -> impl IntoView {
    let indicator_key = copy_key.clone();
    let size = if small { "12" } else { "16" };
    let class = if small { "copy-button-small" } else { "copy-button" };

    view! {
        <button
            class=class
            title="Copy to clipboard"
            on:click=move |_| {
                feedback.copy(text.get_untracked(), copy_key.clone(), on_copy);
            }
        >
            {move || {
                if feedback.is_copied(&indicator_key) {
                    view! { <Icon path=ICON_CHECK size=size class="copied" /> }.into_any()
                } else {
                    view! { <Icon path=ICON_COPY size=size /> }.into_any()
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn acknowledgment_expires_after_window() {
        let mut acks = CopyAcks::default();
        let deadline = acks.acknowledge("k", 10_000);
        assert_eq!(deadline, 12_000);
        assert!(acks.is_acknowledged("k"));

        assert_eq!(acks.expire(11_999), 0);
        assert!(acks.is_acknowledged("k"));

        assert_eq!(acks.expire(12_000), 1);
        assert!(!acks.is_acknowledged("k"));
    }

    #[test]
    fn expiry_leaves_other_keys_alone() {
        let mut acks = CopyAcks::default();
        acks.acknowledge("k", 0);
        acks.acknowledge("other", 1_500);

        acks.expire(ACK_WINDOW_MS);

        assert!(!acks.is_acknowledged("k"));
        assert!(acks.is_acknowledged("other"));
        assert_eq!(acks.expire(ACK_WINDOW_MS), 0);
    }

    #[test]
    fn repeat_copy_restarts_the_window() {
        let mut acks = CopyAcks::default();
        let first = acks.acknowledge("install", 0);
        acks.acknowledge("install", 1_500);

        // the first timer firing must not clear the refreshed entry
        acks.expire(first);
        assert!(acks.is_acknowledged("install"));

        assert_eq!(acks.expire(3_500), 1);
        assert!(!acks.is_acknowledged("install"));
    }

    #[test]
    fn unknown_keys_are_not_acknowledged() {
        let acks = CopyAcks::default();
        assert!(!acks.is_acknowledged("never-copied"));
        assert_eq!(acks, CopyAcks::default());
    }

    #[test]
    fn rejected_write_skips_follow_up() {
        let mut ran = false;
        let landed = settle_copy(
            Err(ClipboardError::Rejected("NotAllowedError".into())),
            "export",
            || ran = true,
        );
        assert!(!landed);
        assert!(!ran);

        assert!(!settle_copy(Err(ClipboardError::Unavailable), "export", || ran = true));
        assert!(!ran);
    }

    #[test]
    fn successful_write_runs_follow_up() {
        let mut ran = false;
        assert!(settle_copy(Ok(()), "export", || ran = true));
        assert!(ran);
    }

    #[test]
    fn clipboard_errors_read_well() {
        assert_eq!(
            ClipboardError::Unavailable.to_string(),
            "clipboard API is unavailable"
        );
        assert_eq!(
            ClipboardError::Rejected("NotAllowedError".into()).to_string(),
            "clipboard write rejected: NotAllowedError"
        );
    }
}
