use leptos::prelude::*;

use crate::components::ProjectGrid;
use crate::data;

/// Projects page with the filterable, searchable card grid.
#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <div>
            <h1>"Projects"</h1>
            <ProjectGrid projects=data::projects()/>
        </div>
    }
}
