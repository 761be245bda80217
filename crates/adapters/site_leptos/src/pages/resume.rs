use leptos::prelude::*;

use crate::components::ResumePanel;

/// Resume page with the upload preview and link opener.
#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <div>
            <h1>"Resume"</h1>
            <ResumePanel/>
        </div>
    }
}
