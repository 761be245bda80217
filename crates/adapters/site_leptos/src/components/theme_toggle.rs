//! Dark/light theme toggle button, persisted through the preference store.

use folio_app::services::ThemeService;
use folio_domain::theme::Theme;
use leptos::prelude::*;

use crate::storage::LocalStorage;

/// Apply the theme by toggling the `dark-mode` class on `<body>`.
fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let result = if theme.is_dark() {
        body.class_list().add_1("dark-mode")
    } else {
        body.class_list().remove_1("dark-mode")
    };
    if let Err(err) = result {
        leptos::logging::warn!("failed to apply theme class: {err:?}");
    }
}

/// A toggle button that switches between light and dark themes.
///
/// Reads the initial theme from the preference store and applies it on
/// mount. Each click flips the body class, persists best-effort, and
/// updates the glyph: sun while dark is active, moon otherwise.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let service = ThemeService::new(LocalStorage);
    let initial = service.current();
    apply_theme(initial);

    let (theme, set_theme) = signal(initial);

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        apply_theme(next);
        service.set(next);
        set_theme.set(next);
    };

    let label = move || {
        if theme.get().is_dark() {
            "\u{2600}"
        } else {
            "\u{263E}"
        }
    };

    view! {
        <button class="theme-toggle" on:click=toggle title="Toggle theme">
            {label}
        </button>
    }
}
