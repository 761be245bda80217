//! Site navigation — active-link highlighting, hybrid panel links, and the
//! mobile menu toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use folio_domain::nav::{NavItem, is_active, page_name};

use crate::components::ThemeToggle;
use crate::data;
use crate::panel::use_panels;

/// Viewport width below which the outside-click listener collapses the
/// mobile menu.
const MOBILE_BREAKPOINT: f64 = 860.0;

/// Top navigation bar.
///
/// Exactly the links whose href names the current page carry the `active`
/// class; the comparison re-derives from the reactive location, so browser
/// back/forward recomputes it. Hybrid links with a panel target switch
/// in-page panels instead of navigating.
#[component]
pub fn Nav() -> impl IntoView {
    let pathname = use_location().pathname;
    let current_page = Memo::new(move |_| page_name(&pathname.get()));

    // Manual override for hybrid panel links; cleared when the path changes.
    let (panel_active, set_panel_active) = signal(None::<usize>);
    Effect::new(move |prev: Option<String>| {
        let path = pathname.get();
        if prev.is_some_and(|previous| previous != path) {
            set_panel_active.set(None);
        }
        path
    });

    let (expanded, set_expanded) = signal(false);
    let nav_ref = NodeRef::<leptos::html::Nav>::new();

    // Collapse the mobile menu when a click lands outside the nav in a
    // narrow viewport.
    let outside_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
        move |ev: web_sys::MouseEvent| {
            if viewport_width() >= MOBILE_BREAKPOINT {
                return;
            }
            let inside = nav_ref.get_untracked().is_some_and(|nav| {
                ev.target()
                    .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                    .is_some_and(|node| nav.contains(Some(&node)))
            });
            if !inside {
                set_expanded.set(false);
            }
        },
    );
    if let Some(window) = web_sys::window() {
        if let Err(err) = window
            .add_event_listener_with_callback("click", outside_click.as_ref().unchecked_ref())
        {
            leptos::logging::warn!("failed to attach menu listener: {err:?}");
        }
    }
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "click",
                outside_click.as_ref().unchecked_ref(),
            );
        }
    });

    view! {
        <nav node_ref=nav_ref>
            <button
                class="nav-toggle"
                aria-label="Toggle navigation"
                aria-controls="nav-links"
                aria-expanded=move || if expanded.get() { "true" } else { "false" }
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                "\u{2630}"
            </button>
            <ul id="nav-links" class="nav-links" class:open=move || expanded.get()>
                {data::nav_items()
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        view! {
                            <NavLink index item current_page panel_active set_panel_active/>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <ThemeToggle/>
        </nav>
    }
}

/// A single navigation link.
///
/// Enter activates the link the same way a click does.
#[component]
fn NavLink(
    /// Position within the nav, used for the hybrid-link active override.
    index: usize,
    /// The entry to render.
    item: NavItem,
    /// Name of the page the location currently points at.
    current_page: Memo<String>,
    /// Index of the hybrid link marked active by the last panel switch.
    panel_active: ReadSignal<Option<usize>>,
    /// Setter for the hybrid-link active override.
    set_panel_active: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let NavItem { label, href, panel } = item;

    let active = move || {
        panel_active.get().map_or_else(
            || is_active(&current_page.get(), href),
            |selected| selected == index,
        )
    };

    let panels = use_panels();
    let activate = move || {
        if let Some(target) = panel {
            set_panel_active.set(Some(index));
            set_location_hash(target);
            panels.switch(target);
        } else {
            set_panel_active.set(None);
        }
    };
    let activate_on_key = activate.clone();

    view! {
        <li>
            <a
                href=href
                class:active=active
                aria-current=move || if active() { Some("page") } else { None }
                on:click=move |ev: web_sys::MouseEvent| {
                    if panel.is_some() {
                        ev.prevent_default();
                    }
                    activate();
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        if panel.is_some() {
                            ev.prevent_default();
                        }
                        activate_on_key();
                    }
                }
            >
                {label}
            </a>
        </li>
    }
}

/// Set the URL fragment without navigating away; failures are swallowed.
fn set_location_hash(target: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_hash(target) {
            leptos::logging::warn!("failed to set fragment: {err:?}");
        }
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}
