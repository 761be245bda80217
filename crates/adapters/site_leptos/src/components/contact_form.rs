//! Demo contact form. Validates locally and never transmits anything.

use folio_domain::contact::ContactMessage;
use leptos::prelude::*;

/// Shown when a required field is missing or the email is malformed.
const ERROR_MESSAGE: &str = "Please fill in every field with a valid email address.";
/// Shown on success; the demo form has no submission endpoint.
const SUCCESS_MESSAGE: &str = "Looks good! This demo form does not send anything.";

/// Contact form with local validation only.
///
/// Submit is always suppressed: an invalid draft shows the fixed error
/// message and leaves the fields untouched, a valid one shows the fixed
/// success message and clears every field.
#[component]
pub fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (feedback, set_feedback) = signal(None::<Result<&'static str, &'static str>>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match draft.validate() {
            Err(_) => set_feedback.set(Some(Err(ERROR_MESSAGE))),
            Ok(()) => {
                set_feedback.set(Some(Ok(SUCCESS_MESSAGE)));
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
            }
        }
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <label for="contact-name">"Name"</label>
            <input
                id="contact-name"
                required=true
                prop:value=name
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <label for="contact-email">"Email"</label>
            <input
                id="contact-email"
                type="email"
                required=true
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <label for="contact-message">"Message"</label>
            <textarea
                id="contact-message"
                required=true
                prop:value=message
                on:input=move |ev| set_message.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">"Send"</button>
            {move || {
                feedback
                    .get()
                    .map(|result| {
                        let (class, text) = match result {
                            Ok(text) => ("form-success", text),
                            Err(text) => ("form-error", text),
                        };
                        view! { <p class=class>{text}</p> }
                    })
            }}
        </form>
    }
}
