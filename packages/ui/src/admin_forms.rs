use dioxus::prelude::*;
use store::{
    Client, Clock, ContentStore, KeyValueStore, NewClient, NewProject, Project, Record,
    Result as StoreResult,
};

use crate::icons::FaPlus;
use crate::{make_store, use_site_config, Icon};

/// The text inputs of an add form.
trait FormFields: Clone + Default {
    type Record: Record;

    fn draft(&self) -> StoreResult<<Self::Record as Record>::Draft>;
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ProjectFields {
    name: String,
    image_url: String,
    description: String,
}

impl FormFields for ProjectFields {
    type Record = Project;

    fn draft(&self) -> StoreResult<NewProject> {
        NewProject::new(&self.name, &self.description, &self.image_url)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ClientFields {
    name: String,
    designation: String,
    image_url: String,
    description: String,
}

impl FormFields for ClientFields {
    type Record = Client;

    fn draft(&self) -> StoreResult<NewClient> {
        NewClient::new(
            &self.name,
            &self.designation,
            &self.description,
            &self.image_url,
        )
    }
}

/// Validate and store `fields`.
///
/// Returns the fields the form shows next: cleared once the record is stored,
/// untouched when validation or the write failed.
async fn submit<F, S, C>(store: &ContentStore<S, C>, fields: F) -> (F, StoreResult<F::Record>)
where
    F: FormFields,
    S: KeyValueStore,
    C: Clock,
{
    let draft = match fields.draft() {
        Ok(draft) => draft,
        Err(e) => return (fields, Err(e)),
    };
    match store.add::<F::Record>(draft).await {
        Ok(record) => (F::default(), Ok(record)),
        Err(e) => (fields, Err(e)),
    }
}

/// Inline form for adding a project.
///
/// The inputs are kept until the store has accepted the project, so a failed
/// write can be retried without retyping.
#[component]
pub fn ProjectForm(on_created: EventHandler<Project>) -> Element {
    let config = use_site_config();
    let mut fields = use_signal(ProjectFields::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            let (next, result) = submit(&make_store(&config()), fields()).await;
            fields.set(next);
            match result {
                Ok(project) => {
                    error.set(None);
                    on_created.call(project);
                }
                Err(e) => {
                    tracing::error!("failed to add project: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "panel",
            h3 {
                class: "panel-title",
                Icon { icon: FaPlus, width: 16, height: 16 }
                "Add New Project"
            }
            form {
                class: "admin-form",
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { r#for: "project-name", "Project Name" }
                    input {
                        id: "project-name",
                        r#type: "text",
                        required: true,
                        value: fields.read().name.clone(),
                        oninput: move |evt| fields.write().name = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "project-image", "Image URL" }
                    input {
                        id: "project-image",
                        r#type: "text",
                        placeholder: "https://...",
                        value: fields.read().image_url.clone(),
                        oninput: move |evt| fields.write().image_url = evt.value(),
                    }
                    p { class: "form-hint", "Leave empty for random placeholder" }
                }
                div {
                    class: "form-field wide",
                    label { r#for: "project-description", "Description" }
                    textarea {
                        id: "project-description",
                        rows: "3",
                        required: true,
                        value: fields.read().description.clone(),
                        oninput: move |evt| fields.write().description = evt.value(),
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error wide", "{message}" }
                }
                div {
                    class: "form-actions wide",
                    button {
                        r#type: "submit",
                        class: "btn-accent",
                        disabled: saving(),
                        "Add Project"
                    }
                }
            }
        }
    }
}

/// Inline form for adding a client testimonial.
#[component]
pub fn ClientForm(on_created: EventHandler<Client>) -> Element {
    let config = use_site_config();
    let mut fields = use_signal(ClientFields::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            let (next, result) = submit(&make_store(&config()), fields()).await;
            fields.set(next);
            match result {
                Ok(client) => {
                    error.set(None);
                    on_created.call(client);
                }
                Err(e) => {
                    tracing::error!("failed to add client: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "panel",
            h3 {
                class: "panel-title",
                Icon { icon: FaPlus, width: 16, height: 16 }
                "Add New Client"
            }
            form {
                class: "admin-form",
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { r#for: "client-name", "Client Name" }
                    input {
                        id: "client-name",
                        r#type: "text",
                        required: true,
                        value: fields.read().name.clone(),
                        oninput: move |evt| fields.write().name = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "client-designation", "Designation" }
                    input {
                        id: "client-designation",
                        r#type: "text",
                        placeholder: "e.g. CEO, Web Developer",
                        required: true,
                        value: fields.read().designation.clone(),
                        oninput: move |evt| fields.write().designation = evt.value(),
                    }
                }
                div {
                    class: "form-field wide",
                    label { r#for: "client-image", "Image URL" }
                    input {
                        id: "client-image",
                        r#type: "text",
                        placeholder: "https://...",
                        value: fields.read().image_url.clone(),
                        oninput: move |evt| fields.write().image_url = evt.value(),
                    }
                    p { class: "form-hint", "Leave empty for random placeholder" }
                }
                div {
                    class: "form-field wide",
                    label { r#for: "client-description", "Testimonial" }
                    textarea {
                        id: "client-description",
                        rows: "3",
                        required: true,
                        value: fields.read().description.clone(),
                        oninput: move |evt| fields.write().description = evt.value(),
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error wide", "{message}" }
                }
                div {
                    class: "form-actions wide",
                    button {
                        r#type: "submit",
                        class: "btn-accent",
                        disabled: saving(),
                        "Add Client"
                    }
                }
            }
        }
    }
}
