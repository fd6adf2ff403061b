//! Contact Form Component
//!
//! Validates on submit: every required field must be non-empty after
//! trimming. Acceptance resets the form; rejection marks exactly the blank
//! fields with the error border and restores the neutral border on fields
//! fixed since the last attempt. Nothing is sent anywhere.

use dioxus::prelude::*;
use showreel_core::forms::{CONTACT_ACCEPTED_MSG, CONTACT_REJECTED_MSG};
use showreel_core::{ContactField, ContactForm as ContactFormState, SubmitOutcome};

use crate::theme::colors::{ERROR_BORDER, NEUTRAL_BORDER};

/// Contact form with required-field validation
#[component]
pub fn ContactForm() -> Element {
    let mut form = use_signal(ContactFormState::new);
    let mut outcome: Signal<Option<SubmitOutcome>> = use_signal(|| None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit();
        match &result {
            SubmitOutcome::Accepted => tracing::info!("contact message accepted"),
            SubmitOutcome::Rejected { missing } => {
                tracing::warn!(missing = missing.len(), "contact message rejected")
            }
        }
        outcome.set(Some(result));
    };

    let border = |marked: bool| if marked { ERROR_BORDER } else { NEUTRAL_BORDER };
    let name_border = border(form.read().is_marked(ContactField::Name));
    let email_border = border(form.read().is_marked(ContactField::Email));
    let message_border = border(form.read().is_marked(ContactField::Message));

    let name_value = form.read().value(ContactField::Name).to_string();
    let email_value = form.read().value(ContactField::Email).to_string();
    let message_value = form.read().value(ContactField::Message).to_string();

    rsx! {
        form { class: "contact-form", onsubmit: on_submit,
            div { class: "form-group",
                label { class: "form-label", r#for: "contact-name", "Name" }
                input {
                    id: "contact-name",
                    class: "form-input",
                    r#type: "text",
                    required: true,
                    style: "border-color: {name_border};",
                    value: "{name_value}",
                    oninput: move |e| form.write().set(ContactField::Name, e.value()),
                }
            }

            div { class: "form-group",
                label { class: "form-label", r#for: "contact-email", "Email" }
                input {
                    id: "contact-email",
                    class: "form-input",
                    r#type: "email",
                    required: true,
                    style: "border-color: {email_border};",
                    value: "{email_value}",
                    oninput: move |e| form.write().set(ContactField::Email, e.value()),
                }
            }

            div { class: "form-group",
                label { class: "form-label", r#for: "contact-message", "Message" }
                textarea {
                    id: "contact-message",
                    class: "form-input form-textarea",
                    required: true,
                    style: "border-color: {message_border};",
                    value: "{message_value}",
                    oninput: move |e| form.write().set(ContactField::Message, e.value()),
                }
            }

            button { class: "btn-submit", r#type: "submit", "Send Message" }

            match outcome() {
                Some(SubmitOutcome::Accepted) => rsx! {
                    p { class: "form-ack form-ack--success", role: "status", "{CONTACT_ACCEPTED_MSG}" }
                },
                Some(SubmitOutcome::Rejected { .. }) => rsx! {
                    p { class: "form-ack form-ack--error", role: "alert", "{CONTACT_REJECTED_MSG}" }
                },
                None => rsx! {},
            }
        }
    }
}
