use dioxus::prelude::*;
use store::{Client, Project};

use crate::icons::{FaArrowRight, FaQuoteLeft, FaTrash};
use crate::Icon;

/// A project tile. Shows a delete button when `on_delete` is given.
#[component]
pub fn ProjectCard(
    project: Project,
    #[props(default)] on_delete: Option<EventHandler<Project>>,
) -> Element {
    let target = project.clone();

    rsx! {
        div {
            class: "card project-card",
            div {
                class: "card-image",
                img { src: "{project.image_url}", alt: "{project.name}" }
                if let Some(on_delete) = on_delete {
                    button {
                        class: "card-delete",
                        title: "Delete project",
                        onclick: move |_| on_delete.call(target.clone()),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                } else {
                    span { class: "card-badge", "NEW" }
                }
            }
            div {
                class: "card-body",
                h4 { "{project.name}" }
                p { "{project.description}" }
                if on_delete.is_none() {
                    button {
                        class: "card-link",
                        "Read More"
                        Icon { icon: FaArrowRight, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

/// A client testimonial. Shows a delete button when `on_delete` is given.
#[component]
pub fn TestimonialCard(
    client: Client,
    #[props(default)] on_delete: Option<EventHandler<Client>>,
) -> Element {
    let target = client.clone();

    rsx! {
        div {
            class: "card testimonial-card",
            if let Some(on_delete) = on_delete {
                button {
                    class: "card-delete",
                    title: "Delete client",
                    onclick: move |_| on_delete.call(target.clone()),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
            span { class: "testimonial-quote", Icon { icon: FaQuoteLeft, width: 20, height: 20 } }
            p { class: "testimonial-text", "\"{client.description}\"" }
            div {
                class: "testimonial-author",
                img { src: "{client.image_url}", alt: "{client.name}" }
                div {
                    h4 { "{client.name}" }
                    span { "{client.designation}" }
                }
            }
        }
    }
}
