//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brands {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

mod site;
#[cfg(not(target_arch = "wasm32"))]
pub use site::{data_dir, load_site_config};
pub use site::{make_store, use_site_config, SiteProvider, SiteSignal, APP_DIR};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub mod status;
pub use status::{FormStatus, StatusCell};

mod navbar;
pub use navbar::{Logo, Navbar};

mod footer;
pub use footer::Footer;

mod cards;
pub use cards::{ProjectCard, TestimonialCard};

mod contact_form;
pub use contact_form::ContactForm;

mod newsletter_form;
pub use newsletter_form::NewsletterBar;

mod admin_sidebar;
pub use admin_sidebar::{AdminMobileHeader, AdminSidebar, AdminTab};

mod admin_forms;
pub use admin_forms::{ClientForm, ProjectForm};
