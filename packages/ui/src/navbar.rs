use dioxus::prelude::*;

use crate::icons::{FaBars, FaXmark};
use crate::{use_site_config, Icon};

/// Section anchors on the landing page, in navbar order.
pub const SECTIONS: [(&str, &str); 4] = [
    ("#services", "Services"),
    ("#projects", "Projects"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[component]
pub fn Logo() -> Element {
    let config = use_site_config();
    let brand = config().brand();

    rsx! {
        Link {
            to: "/",
            class: "logo",
            span { class: "logo-badge", "{brand.initial()}" }
            "{brand.site_name()}"
        }
    }
}

/// Sticky top navigation with a collapsible mobile menu.
#[component]
pub fn Navbar() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                Logo {}
                div {
                    class: "navbar-links",
                    Link { to: "/", "Home" }
                    for (href, label) in SECTIONS {
                        a { key: "{href}", href: href, "{label}" }
                    }
                    Link { to: "/admin", class: "navbar-admin", "Admin Panel" }
                }
                button {
                    class: "navbar-toggle",
                    onclick: move |_| open.toggle(),
                    if open() {
                        Icon { icon: FaXmark, width: 24, height: 24 }
                    } else {
                        Icon { icon: FaBars, width: 24, height: 24 }
                    }
                }
            }

            if open() {
                div {
                    class: "navbar-mobile",
                    Link { to: "/", "Home" }
                    a { href: "#projects", "Projects" }
                    a { href: "#contact", "Contact" }
                    Link { to: "/admin", class: "navbar-admin", "Admin Panel" }
                }
            }
        }
    }
}
