use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::icons::{ICON_LIST, ICON_TERMINAL, ICON_X, Icon};
use crate::config::site;
use crate::routes::{NAV_LINKS, is_link_active};

/// Radius of the cursor glow, used to center it on the pointer.
const GLOW_RADIUS: i32 = 200;

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;

    // any navigation closes the mobile menu
    Effect::new(move |_| {
        pathname.track();
        set_menu_open.set(false);
    });

    let link_class = move |path: &'static str| {
        move || {
            if pathname.with(|current| is_link_active(current, path)) {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a href=link.path class=link_class(link.path)>
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <Icon path=ICON_TERMINAL size="32" class="nav-logo" />
                    <span class="nav-title">{site().product_name.as_str()}</span>
                    <span class="nav-version">{site().version.as_str()}</span>
                </a>

                <nav class="nav-links">{links}</nav>

                <div class="nav-actions">
                    <a
                        href=site().repository_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-cta"
                    >
                        "GitHub"
                    </a>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon path=ICON_X size="24" /> }.into_any()
                        } else {
                            view! { <Icon path=ICON_LIST size="24" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <nav class="nav-drawer-inner">
                        {links}
                        <a
                            href=site().repository_url.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="nav-link"
                        >
                            "GitHub"
                        </a>
                    </nav>
                </div>
            </Show>
        </header>
    }
}

/// Fixed background layers plus a soft glow that trails the pointer.
#[component]
pub fn Backdrop() -> impl IntoView {
    let (pointer, set_pointer) = signal((0, 0));

    let handle = window_event_listener(ev::mousemove, move |ev| {
        set_pointer.set((ev.client_x(), ev.client_y()));
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-gradient"></div>
            <div class="cyber-grid"></div>
            <div class="particles"></div>
            <div
                class="mouse-glow"
                style:left=move || format!("{}px", pointer.get().0 - GLOW_RADIUS)
                style:top=move || format!("{}px", pointer.get().1 - GLOW_RADIUS)
            ></div>
        </div>
    }
}
