//! Resume upload preview and external link opener.

use folio_domain::resume::validate_resume;
use leptos::prelude::*;
use web_sys::Url;

/// Shown when a selected file is not a PDF.
const NOT_PDF_MESSAGE: &str = "Please choose a PDF file.";

/// Resume upload with a local, revocable preview link, plus an opener for
/// a hosted copy.
///
/// The object URL of a previous selection is revoked when a new file
/// replaces it and when the component unmounts.
#[component]
pub fn ResumePanel() -> impl IntoView {
    let (preview, set_preview) = signal(None::<(String, String)>);
    let (notice, set_notice) = signal(None::<&'static str>);
    let file_input = NodeRef::<leptos::html::Input>::new();
    let url_input = NodeRef::<leptos::html::Input>::new();

    let replace_preview = move |next: Option<(String, String)>| {
        preview.with_untracked(|current| {
            if let Some((_, old_url)) = current {
                if let Err(err) = Url::revoke_object_url(old_url) {
                    leptos::logging::warn!("failed to revoke resume URL: {err:?}");
                }
            }
        });
        set_preview.set(next);
    };

    let on_select = move |_| {
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            set_notice.set(None);
            replace_preview(None);
            return;
        };
        if validate_resume(&file.type_()).is_err() {
            set_notice.set(Some(NOT_PDF_MESSAGE));
            replace_preview(None);
            return;
        }
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                set_notice.set(None);
                replace_preview(Some((file.name(), url)));
            }
            Err(err) => {
                leptos::logging::warn!("failed to create resume URL: {err:?}");
                set_notice.set(Some("Preview unavailable."));
                replace_preview(None);
            }
        }
    };

    on_cleanup(move || replace_preview(None));

    view! {
        <div class="resume-upload">
            <label for="resume-file">"Upload a resume (PDF)"</label>
            <input
                id="resume-file"
                type="file"
                accept="application/pdf"
                node_ref=file_input
                on:change=on_select
            />
            {move || notice.get().map(|text| view! { <p class="field-error">{text}</p> })}
            {move || {
                preview
                    .get()
                    .map(|(name, url)| {
                        view! {
                            <p class="resume-info">
                                {name} " \u{00B7} "
                                <a href=url target="_blank" rel="noopener noreferrer">
                                    "Open"
                                </a>
                            </p>
                        }
                    })
            }}
        </div>
        <div class="link-opener">
            <label for="resume-url">"Open a hosted copy"</label>
            <input
                id="resume-url"
                type="url"
                placeholder="https://\u{2026}"
                node_ref=url_input
            />
            <button on:click=move |_| open_url_field(url_input)>"Open link"</button>
        </div>
    }
}

/// Open the typed URL in a new browsing context with no opener access.
/// An empty field is a no-op.
fn open_url_field(input: NodeRef<leptos::html::Input>) {
    let Some(url) = input.get_untracked().map(|element| element.value()) else {
        return;
    };
    let url = url.trim();
    if url.is_empty() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target_and_features(url, "_blank", "noopener") {
        leptos::logging::warn!("failed to open link: {err:?}");
    }
}
