use leptos::prelude::*;

use crate::components::ContactForm;

/// Contact page with the demo form.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div>
            <h1>"Contact"</h1>
            <ContactForm/>
        </div>
    }
}
