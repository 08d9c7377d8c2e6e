use dioxus::prelude::*;

use store::{Client, Project};

use crate::icons::{FaArrowTrendUp, FaHouse, FaPenRuler};
use crate::{
    make_store, use_site_config, ContactForm, Footer, Icon, Navbar, NewsletterBar, ProjectCard,
    TestimonialCard,
};

/// Public landing page.
///
/// Projects and testimonials are read from the content store once on mount.
#[component]
pub fn LandingView() -> Element {
    let config = use_site_config();
    let mut projects = use_signal(Vec::<Project>::new);
    let mut clients = use_signal(Vec::<Client>::new);

    let _loader = use_resource(move || async move {
        let store = make_store(&config());
        match store.projects().await {
            Ok(list) => projects.set(list),
            Err(e) => tracing::error!("failed to load projects: {e}"),
        }
        match store.clients().await {
            Ok(list) => clients.set(list),
            Err(e) => tracing::error!("failed to load clients: {e}"),
        }
    });

    rsx! {
        div {
            class: "page",
            Navbar {}

            section {
                class: "hero",
                div {
                    class: "hero-inner",
                    div {
                        class: "hero-text",
                        h1 {
                            "Consultation,"
                            br {}
                            span { class: "accent", "Design," }
                            br {}
                            "& Marketing"
                        }
                        p {
                            "Expert solutions for your real estate needs. We help you build, design, and sell with confidence."
                        }
                    }
                    ContactForm {}
                }
            }

            section {
                class: "services",
                id: "services",
                h2 { class: "eyebrow", "Not Your Average Realtor" }
                h3 { "Why Choose Us?" }
                div {
                    class: "services-grid",
                    ServiceItem {
                        title: "Potential ROI",
                        text: "Maximize your investment with our data-driven market analysis and strategic planning.",
                        Icon { icon: FaHouse, width: 32, height: 32 }
                    }
                    ServiceItem {
                        title: "Design",
                        text: "Award-winning architectural designs that blend functionality with modern aesthetics.",
                        Icon { icon: FaPenRuler, width: 32, height: 32 }
                    }
                    ServiceItem {
                        title: "Marketing",
                        text: "Comprehensive digital and traditional marketing campaigns to reach the right buyers.",
                        Icon { icon: FaArrowTrendUp, width: 32, height: 32 }
                    }
                }
            }

            section {
                class: "about",
                h3 { "About Us" }
                p {
                    "Fifteen years of experience in real estate, excellent customer service and a commitment to work hard, listen and follow through."
                }
                img {
                    src: "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?auto=format&fit=crop&w=1000&q=80",
                    alt: "Team",
                }
            }

            section {
                class: "projects",
                id: "projects",
                h2 { "Our Projects" }
                p { class: "section-lead", "We know what buyers are looking for and suggest projects that will bring clients top dollar for the sale of their homes." }
                div {
                    class: "card-grid",
                    for project in projects() {
                        ProjectCard { key: "{project.id}", project: project.clone() }
                    }
                }
                if projects().is_empty() {
                    p { class: "empty-state", "No projects added yet. Visit Admin Panel to add projects." }
                }
            }

            section {
                class: "testimonials",
                id: "testimonials",
                h2 { "Happy Clients" }
                div {
                    class: "card-grid",
                    for client in clients() {
                        TestimonialCard { key: "{client.id}", client: client.clone() }
                    }
                }
                if clients().is_empty() {
                    p { class: "empty-state", "No clients added yet." }
                }
            }

            NewsletterBar {}
            Footer {}
        }
    }
}

#[component]
fn ServiceItem(title: String, text: String, children: Element) -> Element {
    rsx! {
        div {
            class: "service-item",
            div { class: "service-icon", {children} }
            h4 { "{title}" }
            p { "{text}" }
        }
    }
}
