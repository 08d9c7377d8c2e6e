use dioxus::prelude::*;

use store::SiteConfig;
use ui::SiteProvider;
use views::{Admin, Landing};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/admin")]
    Admin {},
}

/// Baked into the bundle; the browser has no config directory to read from.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = SiteConfig::from_toml_or_default(SITE_TOML);
    tracing::info!(
        "starting {} with namespace {}",
        config.brand().site_name(),
        config.namespace()
    );

    rsx! {
        document::Title { "{config.brand().site_name()}" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        SiteProvider {
            config,
            Router::<Route> {}
        }
    }
}
