//! CSR entry point for the folio site.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

mod components;
pub mod data;
mod pages;
pub mod panel;
pub mod storage;

use components::{Footer, Nav};
use pages::{Contact, Home, NotFound, Projects, Resume};
use panel::PanelSwitcher;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    scrub_malformed_fragment();
    provide_context(PanelSwitcher::default());

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("projects") view=Projects/>
                    <Route path=path!("resume") view=Resume/>
                    <Route path=path!("contact") view=Contact/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Drop the literal malformed anchors (`#`, `#undefined`) from the
/// displayed URL without reloading.
fn scrub_malformed_fragment() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let Ok(hash) = location.hash() else {
        return;
    };
    if !folio_domain::nav::is_malformed_fragment(&hash) {
        return;
    }
    let clean = format!(
        "{}{}",
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default()
    );
    let Ok(history) = window.history() else {
        return;
    };
    if let Err(err) =
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&clean))
    {
        leptos::logging::warn!("failed to scrub malformed fragment: {err:?}");
    }
}
