use std::time::Duration;

use dioxus::prelude::*;
use store::NewContact;

use crate::status::{revert_after, sleep, FormStatus, StatusCell};
use crate::{make_store, use_site_config};

/// "Get a free consultation" card in the hero section.
///
/// Submitting stores a contact submission after the configured delay, clears
/// the inputs and shows "Sent!" until the status reverts.
#[component]
pub fn ContactForm() -> Element {
    let config = use_site_config();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut status = use_signal(StatusCell::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status.peek().status().is_busy() {
            return;
        }

        let draft = match NewContact::new(full_name(), email(), mobile(), city()) {
            Ok(draft) => draft,
            Err(e) => {
                let shown = status.write().set(FormStatus::Failed(e.to_string()));
                revert_after(status, shown, config.peek().forms.success_reset_secs);
                return;
            }
        };

        status.write().set(FormStatus::Submitting);
        spawn(async move {
            let config = config();
            sleep(Duration::from_millis(u64::from(config.forms.contact_delay_ms))).await;

            let shown = match make_store(&config).add_contact(draft).await {
                Ok(contact) => {
                    tracing::info!("contact {} received", contact.id);
                    full_name.set(String::new());
                    email.set(String::new());
                    mobile.set(String::new());
                    city.set(String::new());
                    status.write().set(FormStatus::Success)
                }
                Err(e) => {
                    tracing::error!("failed to store contact: {e}");
                    status.write().set(FormStatus::Failed(e.to_string()))
                }
            };
            revert_after(status, shown, config.forms.success_reset_secs);
        });
    };

    let current = status.read().status().clone();

    rsx! {
        div {
            class: "contact-card",
            id: "contact",
            h3 { "Get a Free Consultation" }
            form {
                class: "contact-form",
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "Full Name",
                    required: true,
                    value: full_name(),
                    oninput: move |evt| full_name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Enter Email Address",
                    required: true,
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "tel",
                    placeholder: "Mobile Number",
                    required: true,
                    value: mobile(),
                    oninput: move |evt| mobile.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Area, City",
                    required: true,
                    value: city(),
                    oninput: move |evt| city.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn-accent",
                    disabled: current.is_busy(),
                    "{current.contact_label()}"
                }
                if let Some(message) = current.error() {
                    p { class: "form-error", "{message}" }
                }
            }
        }
    }
}
