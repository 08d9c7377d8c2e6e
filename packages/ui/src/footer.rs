use dioxus::prelude::*;

use crate::brands::{FaFacebook, FaInstagram, FaLinkedin, FaTwitter};
use crate::navbar::SECTIONS;
use crate::{use_site_config, Icon};

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let brand = config().brand();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-grid",
                div {
                    class: "footer-about",
                    h3 {
                        span { class: "logo-badge", "{brand.initial()}" }
                        "{brand.site_name()}"
                    }
                    p {
                        "Providing top-tier real estate consultation, design, and marketing services to help you find or build your dream space."
                    }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        li { Link { to: "/", "Home" } }
                        for (href, label) in SECTIONS {
                            li { key: "{href}", a { href: href, "{label}" } }
                        }
                    }
                }
                div {
                    h4 { "Connect" }
                    div {
                        class: "footer-social",
                        a { href: "#", Icon { icon: FaFacebook, width: 20, height: 20 } }
                        a { href: "#", Icon { icon: FaTwitter, width: 20, height: 20 } }
                        a { href: "#", Icon { icon: FaLinkedin, width: 20, height: 20 } }
                        a { href: "#", Icon { icon: FaInstagram, width: 20, height: 20 } }
                    }
                }
            }
            div {
                class: "footer-bottom",
                p { "© 2024 {brand.site_name()}. All rights reserved." }
            }
        }
    }
}
