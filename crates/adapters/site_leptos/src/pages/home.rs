//! Home page — intro panel and the animated skills panel.

use leptos::prelude::*;

use crate::components::SkillBars;
use crate::data;
use crate::panel::use_panels;

/// Landing page.
///
/// Registers the panel-switch callback so hybrid nav links can reveal the
/// skills panel without navigating; the registration is cleared on unmount.
#[component]
pub fn Home() -> impl IntoView {
    let (active_panel, set_active_panel) = signal("about");

    let panels = use_panels();
    let registration = panels.clone();
    panels.register(move |target| {
        if target == "skills" {
            set_active_panel.set("skills");
        } else {
            set_active_panel.set("about");
        }
    });
    on_cleanup(move || registration.clear());

    view! {
        <div>
            <section
                id="about"
                class="panel"
                class:panel-hidden=move || active_panel.get() != "about"
            >
                <h1>"Hi, I'm J\u{e9}r\u{e9}mie"</h1>
                <p>
                    "I build small, reliable systems in Rust: storage, automation, and the occasional web thing."
                </p>
            </section>
            <section
                id="skills"
                class="panel"
                class:panel-hidden=move || active_panel.get() != "skills"
            >
                <h2>"Skills"</h2>
                <SkillBars skills=data::skills()/>
            </section>
        </div>
    }
}
