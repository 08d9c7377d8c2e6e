//! # ContentStore: collections of records over a key-value backend
//!
//! [`ContentStore`] keeps each record type as one JSON array under a namespaced
//! key (see [`Collection::key`]). All reads and writes go through the
//! [`KeyValueStore`] trait, so the same logic runs against browser
//! `localStorage`, the filesystem, an in-memory map, or a future network API.
//!
//! ## Operations
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`get_all`](ContentStore::get_all) | Decodes the stored array. An absent, blank or corrupt value is replaced by the seed, which is written back and returned. |
//! | [`add`](ContentStore::add) | Assigns a fresh id, prepends the record (newest first), persists, returns it. |
//! | [`delete`](ContentStore::delete) | Removes the record with the given id and persists. Unknown ids are a no-op. Only [`Deletable`] records. |
//! | [`snapshot`](ContentStore::snapshot) | All four collections at once. |
//!
//! Typed wrappers (`projects`, `add_project`, `delete_project`, ...) exist for
//! each collection.
//!
//! ## Failure policy
//!
//! Writes made by `add` and `delete` propagate [`StoreError`]. The read path
//! degrades instead: a corrupt value is logged and replaced by the seed, and a
//! seed that cannot be written back is still returned. Only an unreadable
//! backend makes `get_all` fail.
//!
//! ## Ids
//!
//! A new id is the current clock reading in milliseconds, rendered as a decimal
//! string. If that id is already taken in the collection the value is bumped
//! by one until it is unique.

use std::future::Future;

use crate::clock::{Clock, Stamp, SystemClock};
use crate::collection::{Collection, Deletable, Record};
use crate::config::SiteConfig;
use crate::error::{Result, StoreError};
use crate::models::{
    Client, ContactSubmission, NewClient, NewContact, NewProject, NewSubscriber, Project,
    Subscriber,
};
use crate::seed::Seed;

/// Async string key-value storage.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>>>;
    fn write(&self, key: &str, value: String) -> impl Future<Output = Result<()>>;
}

/// Every collection, as loaded by [`ContentStore::snapshot`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    pub contacts: Vec<ContactSubmission>,
    pub subscribers: Vec<Subscriber>,
}

/// Record collections stored under one namespace.
#[derive(Clone, Debug)]
pub struct ContentStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    namespace: String,
    seed: Seed,
}

impl<S: KeyValueStore> ContentStore<S> {
    pub fn new(storage: S, config: &SiteConfig) -> Self {
        Self::with_clock(storage, config, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ContentStore<S, C> {
    pub fn with_clock(storage: S, config: &SiteConfig, clock: C) -> Self {
        Self {
            storage,
            clock,
            namespace: config.namespace().to_string(),
            seed: config.brand().seed(),
        }
    }

    /// Replace the brand's default content.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    fn key(&self, collection: Collection) -> String {
        collection.key(&self.namespace)
    }

    // -- Generic operations --

    pub async fn get_all<T: Record>(&self) -> Result<Vec<T>> {
        let key = self.key(T::COLLECTION);
        match self.storage.read(&key).await? {
            Some(raw) if !raw.trim().is_empty() => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(records) => return Ok(records),
                Err(e) => tracing::warn!("corrupt value under `{key}` ({e}); restoring seed"),
            },
            _ => tracing::debug!("seeding `{key}`"),
        }

        let seed = T::seed(&self.seed);
        if let Err(e) = self.persist(&key, &seed).await {
            tracing::warn!("could not store seed for `{key}`: {e}");
        }
        Ok(seed)
    }

    pub async fn add<T: Record>(&self, draft: T::Draft) -> Result<T> {
        let key = self.key(T::COLLECTION);
        let mut records = self.get_all::<T>().await?;

        let stamp = self.next_stamp(&records);
        let record = T::from_draft(draft, &stamp);
        records.insert(0, record.clone());

        self.persist(&key, &records).await?;
        tracing::debug!("added {} to `{key}`", record.id());
        Ok(record)
    }

    pub async fn delete<T: Deletable>(&self, id: &str) -> Result<()> {
        let key = self.key(T::COLLECTION);
        let mut records = self.get_all::<T>().await?;

        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            tracing::debug!("delete of unknown id {id} in `{key}` ignored");
            return Ok(());
        }

        self.persist(&key, &records).await?;
        tracing::debug!("deleted {id} from `{key}`");
        Ok(())
    }

    pub async fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            projects: self.projects().await?,
            clients: self.clients().await?,
            contacts: self.contacts().await?,
            subscribers: self.subscribers().await?,
        })
    }

    // -- Projects --

    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.get_all().await
    }

    pub async fn add_project(&self, draft: NewProject) -> Result<Project> {
        self.add::<Project>(draft).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<()> {
        self.delete::<Project>(id).await
    }

    // -- Clients --

    pub async fn clients(&self) -> Result<Vec<Client>> {
        self.get_all().await
    }

    pub async fn add_client(&self, draft: NewClient) -> Result<Client> {
        self.add::<Client>(draft).await
    }

    pub async fn delete_client(&self, id: &str) -> Result<()> {
        self.delete::<Client>(id).await
    }

    // -- Contacts --

    pub async fn contacts(&self) -> Result<Vec<ContactSubmission>> {
        self.get_all().await
    }

    pub async fn add_contact(&self, draft: NewContact) -> Result<ContactSubmission> {
        self.add::<ContactSubmission>(draft).await
    }

    // -- Subscribers --

    pub async fn subscribers(&self) -> Result<Vec<Subscriber>> {
        self.get_all().await
    }

    pub async fn add_subscriber(&self, draft: NewSubscriber) -> Result<Subscriber> {
        self.add::<Subscriber>(draft).await
    }

    // -- Internal helpers --

    fn next_stamp<T: Record>(&self, existing: &[T]) -> Stamp {
        let mut millis = self.clock.now_millis();
        while existing.iter().any(|r| r.id() == millis.to_string()) {
            millis += 1;
        }
        Stamp::new(millis)
    }

    async fn persist<T: Record>(&self, key: &str, records: &[T]) -> Result<()> {
        let json = serde_json::to_string(records).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.storage.write(key, json).await
    }
}
