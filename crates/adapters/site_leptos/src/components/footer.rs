//! Footer — year stamp and the local visit counter.

use folio_app::services::VisitService;
use leptos::prelude::*;

use crate::storage::LocalStorage;

/// Shown instead of a number when the visit counter cannot reach storage.
const VISITS_PLACEHOLDER: &str = "\u{2014}";

/// Site footer with the current year and the visitor counter.
///
/// The counter increments once per mount; storage failures degrade to the
/// placeholder without surfacing an error.
#[component]
pub fn Footer() -> impl IntoView {
    let year = folio_domain::time::current_year();
    let visits = match VisitService::new(LocalStorage).record() {
        Ok(count) => count.to_string(),
        Err(err) => {
            leptos::logging::warn!("visit counter unavailable: {err}");
            VISITS_PLACEHOLDER.to_string()
        }
    };

    view! {
        <footer>
            <p>
                "\u{00A9} " {year} " \u{00B7} "
                <span class="visit-count">{visits}</span>
                " visits"
            </p>
        </footer>
    }
}
