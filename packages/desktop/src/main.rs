use dioxus::prelude::*;

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

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = ui::load_site_config();
    tracing::info!(
        "starting {} with data in {}",
        config.brand().site_name(),
        ui::data_dir().display()
    );

    rsx! {
        document::Title { "{config.brand().site_name()}" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ui::SiteProvider {
            config,
            Router::<Route> {}
        }
    }
}
