use dioxus::prelude::*;

use crate::icons::{FaArrowLeft, FaEnvelope, FaMessage, FaTableColumns, FaUsers};
use crate::{use_site_config, Icon};

/// The sections of the admin panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Projects,
    Clients,
    Contacts,
    Subscribers,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Projects,
        AdminTab::Clients,
        AdminTab::Contacts,
        AdminTab::Subscribers,
    ];

    /// Label in the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Projects => "Projects",
            AdminTab::Clients => "Clients",
            AdminTab::Contacts => "Inquiries",
            AdminTab::Subscribers => "Newsletter",
        }
    }

    /// Page heading.
    pub fn title(self) -> String {
        format!("{} Management", self.label())
    }
}

#[component]
fn TabIcon(tab: AdminTab) -> Element {
    match tab {
        AdminTab::Projects => rsx! { Icon { icon: FaTableColumns, width: 18, height: 18 } },
        AdminTab::Clients => rsx! { Icon { icon: FaUsers, width: 18, height: 18 } },
        AdminTab::Contacts => rsx! { Icon { icon: FaMessage, width: 18, height: 18 } },
        AdminTab::Subscribers => rsx! { Icon { icon: FaEnvelope, width: 18, height: 18 } },
    }
}

/// Left-hand navigation of the admin panel.
#[component]
pub fn AdminSidebar(active: AdminTab, on_select: EventHandler<AdminTab>) -> Element {
    let config = use_site_config();
    let brand = config().brand();

    rsx! {
        aside {
            class: "admin-sidebar",
            div {
                class: "admin-sidebar-header",
                span { class: "logo-badge", "{brand.initial()}" }
                span { class: "admin-sidebar-title", "{brand.admin_title()}" }
            }
            nav {
                class: "admin-sidebar-nav",
                for tab in AdminTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if tab == active { "admin-tab active" } else { "admin-tab" },
                        onclick: move |_| on_select.call(tab),
                        TabIcon { tab }
                        "{tab.label()}"
                    }
                }
            }
            div {
                class: "admin-sidebar-footer",
                Link {
                    to: "/",
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    "Back to Website"
                }
            }
        }
    }
}

/// Compact tab switcher shown instead of the sidebar on narrow screens.
#[component]
pub fn AdminMobileHeader(active: AdminTab, on_select: EventHandler<AdminTab>) -> Element {
    let config = use_site_config();

    rsx! {
        div {
            class: "admin-mobile-header",
            h1 { "{config().brand().admin_title()}" }
            div {
                for tab in AdminTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if tab == active { "active" } else { "" },
                        onclick: move |_| on_select.call(tab),
                        "{tab.label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_titles() {
        assert_eq!(AdminTab::default(), AdminTab::Projects);
        assert_eq!(AdminTab::Projects.title(), "Projects Management");
        assert_eq!(AdminTab::Contacts.title(), "Inquiries Management");
        assert_eq!(AdminTab::Subscribers.label(), "Newsletter");
    }
}
