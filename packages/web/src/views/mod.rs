use dioxus::prelude::*;

#[component]
pub fn Landing() -> Element {
    rsx! { ui::views::LandingView {} }
}

#[component]
pub fn Admin() -> Element {
    rsx! { ui::views::AdminView {} }
}
