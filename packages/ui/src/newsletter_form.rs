use dioxus::prelude::*;
use store::NewSubscriber;

use crate::navbar::SECTIONS;
use crate::status::{revert_after, FormStatus, StatusCell};
use crate::{make_store, use_site_config};

/// Newsletter bar above the footer.
#[component]
pub fn NewsletterBar() -> Element {
    let config = use_site_config();
    let mut email = use_signal(String::new);
    let mut status = use_signal(StatusCell::default);

    let handle_subscribe = move |evt: FormEvent| {
        evt.prevent_default();
        if status.peek().status().is_busy() {
            return;
        }

        let draft = match subscriber_draft(&email()) {
            Ok(draft) => draft,
            Err(failed) => {
                let shown = status.write().set(failed);
                revert_after(status, shown, config.peek().forms.success_reset_secs);
                return;
            }
        };

        status.write().set(FormStatus::Submitting);
        spawn(async move {
            let config = config();
            let shown = match make_store(&config).add_subscriber(draft).await {
                Ok(sub) => {
                    tracing::info!("subscriber {} added", sub.id);
                    email.set(String::new());
                    status.write().set(FormStatus::Success)
                }
                Err(e) => {
                    tracing::error!("failed to store subscriber: {e}");
                    status.write().set(FormStatus::Failed(e.to_string()))
                }
            };
            revert_after(status, shown, config.forms.success_reset_secs);
        });
    };

    let current = status.read().status().clone();

    rsx! {
        section {
            class: "newsletter",
            div {
                class: "newsletter-inner",
                div {
                    class: "newsletter-links",
                    a { href: "#", "Home" }
                    for (href, label) in SECTIONS {
                        a { key: "{href}", href: href, "{label}" }
                    }
                }
                form {
                    class: "newsletter-form",
                    onsubmit: handle_subscribe,
                    span { "Subscribe Us" }
                    input {
                        r#type: "email",
                        placeholder: "Enter Email Address",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn-light",
                        disabled: current.is_busy(),
                        "{current.subscribe_label()}"
                    }
                }
                if let Some(message) = current.error() {
                    p { class: "form-error", "{message}" }
                }
            }
        }
    }
}

/// A draft for `email`, or the status to show when it is blank.
fn subscriber_draft(email: &str) -> Result<NewSubscriber, FormStatus> {
    NewSubscriber::new(email).map_err(|e| FormStatus::Failed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_email_reports_failure() {
        let status = subscriber_draft("   ").unwrap_err();
        assert_eq!(status.error(), Some("missing required field `email`"));
        assert_eq!(status.subscribe_label(), "Subscribe");

        assert!(subscriber_draft(" a@b.com ").is_ok());
    }
}
