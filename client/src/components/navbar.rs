//! Fixed top navigation: brand, section links, theme toggle, mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `UiState`. The menu closes on any nav-link click and on
//! any document click that lands outside both the menu and its toggle.

use leptos::prelude::*;

use crate::content::{NAV_ITEMS, PROFILE};
use crate::state::ui::UiState;
use crate::util::dom::set_scroll_locked;
use crate::util::scroll::nav_href;
use crate::util::theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_ref = NodeRef::<leptos::html::Ul>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    // Page scroll is locked exactly while the menu is open.
    let menu_open = Memo::new(move |_| ui.with(|s| s.menu_open));
    Effect::new(move || {
        set_scroll_locked(menu_open.get());
    });

    // Stored theme is read once, after hydration.
    Effect::new(move || {
        let stored = theme::read_preference();
        theme::apply(stored);
        ui.update(|s| s.theme = stored);
    });

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::click, move |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                return;
            };
            let inside_menu = menu_ref
                .get_untracked()
                .is_some_and(|menu| menu.contains(Some(&target)));
            let inside_toggle = toggle_ref
                .get_untracked()
                .is_some_and(|toggle| toggle.contains(Some(&target)));
            if !inside_menu && !inside_toggle && menu_open.get_untracked() {
                ui.update(UiState::close_menu);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_toggle_menu = move |_| ui.update(UiState::toggle_menu);
    let on_toggle_theme = move |_| {
        ui.update(|s| s.theme = theme::toggle(s.theme));
    };

    let navbar_class = move || {
        if ui.with(|s| s.scrolled) { "navbar scrolled" } else { "navbar" }
    };
    let open_class = move |base: &'static str| {
        move || {
            if menu_open.get() { format!("{base} active") } else { base.to_owned() }
        }
    };

    view! {
        <nav class=navbar_class id="navbar">
            <div class="nav-container">
                <a href=nav_href("home") class="nav-logo">{PROFILE.name}</a>
                <ul class=open_class("nav-menu") id="navMenu" node_ref=menu_ref>
                    {NAV_ITEMS
                        .iter()
                        .map(|(id, label)| {
                            let id = *id;
                            let link_class = move || {
                                if ui.with(|s| s.is_active(id)) { "nav-link active" } else { "nav-link" }
                            };
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=nav_href(id)
                                        class=link_class
                                        on:click=move |_| ui.update(UiState::close_menu)
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <button
                        class="theme-toggle"
                        id="themeToggle"
                        aria-label="Toggle theme"
                        on:click=on_toggle_theme
                    >
                        <i class=move || ui.with(|s| s.theme.icon_class())></i>
                    </button>
                    <button
                        class=open_class("menu-toggle")
                        id="menuToggle"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=on_toggle_menu
                        node_ref=toggle_ref
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
