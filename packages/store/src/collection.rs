//! Collections: which key a record type lives under and how a draft becomes a record.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clock::Stamp;
use crate::models::{
    Client, ContactSubmission, NewClient, NewContact, NewProject, NewSubscriber, Project,
    Subscriber,
};
use crate::seed::Seed;

/// One of the four stored collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Clients,
    Contacts,
    Subscribers,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Projects,
        Collection::Clients,
        Collection::Contacts,
        Collection::Subscribers,
    ];

    /// Key suffix appended to the namespace.
    pub fn suffix(self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Clients => "clients",
            Collection::Contacts => "contacts",
            Collection::Subscribers => "subs",
        }
    }

    /// Full storage key: `"<namespace>_<suffix>"`.
    pub fn key(self, namespace: &str) -> String {
        format!("{namespace}_{}", self.suffix())
    }
}

/// A record type stored as a JSON array under one [`Collection`] key.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const COLLECTION: Collection;

    /// Validated input the store turns into a record.
    type Draft;

    fn id(&self) -> &str;

    /// Content stored the first time the collection is read and found absent.
    fn seed(seed: &Seed) -> Vec<Self>;

    fn from_draft(draft: Self::Draft, stamp: &Stamp) -> Self;
}

/// Marker for records the admin panel may delete.
pub trait Deletable: Record {}

impl Record for Project {
    const COLLECTION: Collection = Collection::Projects;
    type Draft = NewProject;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed(seed: &Seed) -> Vec<Self> {
        seed.projects.clone()
    }

    fn from_draft(draft: NewProject, stamp: &Stamp) -> Self {
        Self {
            id: stamp.id(),
            name: draft.name,
            description: draft.description,
            image_url: draft
                .image_url
                .unwrap_or_else(|| stamp.placeholder_image(400, 300)),
        }
    }
}

impl Deletable for Project {}

impl Record for Client {
    const COLLECTION: Collection = Collection::Clients;
    type Draft = NewClient;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed(seed: &Seed) -> Vec<Self> {
        seed.clients.clone()
    }

    fn from_draft(draft: NewClient, stamp: &Stamp) -> Self {
        Self {
            id: stamp.id(),
            name: draft.name,
            designation: draft.designation,
            description: draft.description,
            image_url: draft
                .image_url
                .unwrap_or_else(|| stamp.placeholder_image(100, 100)),
        }
    }
}

impl Deletable for Client {}

impl Record for ContactSubmission {
    const COLLECTION: Collection = Collection::Contacts;
    type Draft = NewContact;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed(_seed: &Seed) -> Vec<Self> {
        Vec::new()
    }

    fn from_draft(draft: NewContact, stamp: &Stamp) -> Self {
        Self {
            id: stamp.id(),
            full_name: draft.full_name,
            email: draft.email,
            mobile: draft.mobile,
            city: draft.city,
            timestamp: stamp.timestamp(),
        }
    }
}

impl Record for Subscriber {
    const COLLECTION: Collection = Collection::Subscribers;
    type Draft = NewSubscriber;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed(_seed: &Seed) -> Vec<Self> {
        Vec::new()
    }

    fn from_draft(draft: NewSubscriber, stamp: &Stamp) -> Self {
        Self {
            id: stamp.id(),
            email: draft.email,
            timestamp: stamp.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        let keys: Vec<String> = Collection::ALL.iter().map(|c| c.key("zenith")).collect();
        assert_eq!(
            keys,
            ["zenith_projects", "zenith_clients", "zenith_contacts", "zenith_subs"]
        );
    }
}
