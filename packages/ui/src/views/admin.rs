use dioxus::prelude::*;

use store::{Client, Project, Snapshot};

use crate::{
    make_store, use_site_config, AdminMobileHeader, AdminSidebar, AdminTab, ClientForm,
    ProjectCard, ProjectForm, TestimonialCard,
};

use super::ConfirmDialog;

/// A delete waiting for confirmation.
#[derive(Clone, Debug, PartialEq)]
enum PendingDelete {
    Project(Project),
    Client(Client),
}

impl PendingDelete {
    fn message(&self) -> String {
        match self {
            PendingDelete::Project(p) => format!("Project \"{}\" will be removed.", p.name),
            PendingDelete::Client(c) => format!("Testimonial from {} will be removed.", c.name),
        }
    }
}

/// Admin panel.
///
/// Every collection is reloaded on mount, on each tab change and after each
/// add or delete. Add failures are shown by the form itself; load and delete
/// failures are logged and shown in a dismissible banner.
#[component]
pub fn AdminView() -> Element {
    let config = use_site_config();
    let mut tab = use_signal(AdminTab::default);
    let mut content = use_signal(Snapshot::default);
    let mut pending = use_signal(|| Option::<PendingDelete>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let reload = move || {
        spawn(async move {
            match make_store(&config()).snapshot().await {
                Ok(snapshot) => content.set(snapshot),
                Err(e) => {
                    tracing::error!("failed to load content: {e}");
                    notice.set(Some(format!("Could not load content: {e}")));
                }
            }
        });
    };

    use_effect(move || {
        let _ = tab();
        reload();
    });

    let handle_project_created = move |project: Project| {
        tracing::info!("project {} added", project.id);
        reload();
    };

    let handle_client_created = move |client: Client| {
        tracing::info!("client {} added", client.id);
        reload();
    };

    let handle_confirm_delete = move |_| {
        let Some(target) = pending.write().take() else {
            return;
        };
        spawn(async move {
            let store = make_store(&config());
            let result = match &target {
                PendingDelete::Project(p) => store.delete_project(&p.id).await,
                PendingDelete::Client(c) => store.delete_client(&c.id).await,
            };
            if let Err(e) = result {
                tracing::error!("delete failed: {e}");
                notice.set(Some(format!("Could not delete: {e}")));
            }
            reload();
        });
    };

    let active = tab();
    let snapshot = content();

    rsx! {
        div {
            class: "admin-layout",
            AdminSidebar { active, on_select: move |t| tab.set(t) }

            main {
                class: "admin-main",
                AdminMobileHeader { active, on_select: move |t| tab.set(t) }

                div {
                    class: "admin-content",
                    header {
                        class: "admin-header",
                        h2 { "{active.title()}" }
                        p { "Manage your website content and view user interactions." }
                    }

                    if let Some(message) = notice() {
                        div {
                            class: "notice",
                            span { "{message}" }
                            button { onclick: move |_| notice.set(None), "Dismiss" }
                        }
                    }

                    match active {
                        AdminTab::Projects => rsx! {
                            ProjectForm { on_created: handle_project_created }
                            div {
                                class: "card-grid",
                                for project in snapshot.projects {
                                    ProjectCard {
                                        key: "{project.id}",
                                        project: project.clone(),
                                        on_delete: move |p| pending.set(Some(PendingDelete::Project(p))),
                                    }
                                }
                            }
                        },
                        AdminTab::Clients => rsx! {
                            ClientForm { on_created: handle_client_created }
                            div {
                                class: "card-grid",
                                for client in snapshot.clients {
                                    TestimonialCard {
                                        key: "{client.id}",
                                        client: client.clone(),
                                        on_delete: move |c| pending.set(Some(PendingDelete::Client(c))),
                                    }
                                }
                            }
                        },
                        AdminTab::Contacts => rsx! {
                            div {
                                class: "panel",
                                if snapshot.contacts.is_empty() {
                                    p { class: "empty-state", "No inquiries yet." }
                                } else {
                                    table {
                                        class: "data-table",
                                        thead {
                                            tr {
                                                th { "Date" }
                                                th { "Full Name" }
                                                th { "Email" }
                                                th { "Mobile" }
                                                th { "City" }
                                            }
                                        }
                                        tbody {
                                            for contact in snapshot.contacts {
                                                tr {
                                                    key: "{contact.id}",
                                                    td { {display_timestamp(&contact.timestamp)} }
                                                    td { "{contact.full_name}" }
                                                    td { "{contact.email}" }
                                                    td { "{contact.mobile}" }
                                                    td { "{contact.city}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        AdminTab::Subscribers => rsx! {
                            div {
                                class: "panel",
                                if snapshot.subscribers.is_empty() {
                                    p { class: "empty-state", "No subscribers yet." }
                                } else {
                                    ul {
                                        class: "subscriber-list",
                                        for sub in snapshot.subscribers {
                                            li {
                                                key: "{sub.id}",
                                                span { class: "subscriber-email", "{sub.email}" }
                                                span { class: "subscriber-date", "Subscribed on " {display_timestamp(&sub.timestamp)} }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }

            if let Some(target) = pending() {
                ConfirmDialog {
                    message: target.message(),
                    on_confirm: handle_confirm_delete,
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}

/// `"2024-05-01T09:30:00Z"` → `"2024-05-01 09:30:00"`. Other formats pass through.
fn display_timestamp(ts: &str) -> String {
    match ts.strip_suffix('Z') {
        Some(rest) if rest.len() == 19 && rest.as_bytes()[10] == b'T' => rest.replacen('T', " ", 1),
        _ => ts.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_timestamp() {
        assert_eq!(display_timestamp("2024-05-01T09:30:00Z"), "2024-05-01 09:30:00");
        assert_eq!(display_timestamp("5/1/2024, 9:30:00 AM"), "5/1/2024, 9:30:00 AM");
    }

    #[test]
    fn test_pending_delete_message() {
        let pending = PendingDelete::Client(Client {
            id: "1".to_string(),
            name: "Marcus Chen".to_string(),
            designation: "Architect".to_string(),
            description: "Great".to_string(),
            image_url: String::new(),
        });
        assert_eq!(pending.message(), "Testimonial from Marcus Chen will be removed.");
    }
}
