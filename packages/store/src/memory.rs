use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::content::KeyValueStore;
use crate::error::{Result, StoreError};

/// In-memory KeyValueStore for testing and as a last-resort fallback.
///
/// Clones share the same map. [`set_read_only`](MemoryStore::set_read_only)
/// makes every write fail, which stands in for a full or locked medium.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
    read_only: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// The raw value under `key`, bypassing the store.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    /// Put a raw value under `key`, bypassing the read-only switch.
    pub fn insert_raw(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn write(&self, key: &str, value: String) -> Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::SiteConfig;
    use crate::content::ContentStore;
    use crate::models::{NewClient, NewContact, NewProject, NewSubscriber, Project};
    use crate::seed::{Brand, Seed};

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} description"),
            image_url: format!("https://img/{id}.jpg"),
        }
    }

    fn content(storage: MemoryStore, clock: ManualClock) -> ContentStore<MemoryStore, ManualClock> {
        ContentStore::with_clock(storage, &SiteConfig::default(), clock).with_seed(Seed {
            projects: vec![project("1", "A"), project("2", "B")],
            clients: Vec::new(),
        })
    }

    #[tokio::test]
    async fn test_first_read_returns_and_persists_seed() {
        let storage = MemoryStore::new();
        let store = content(storage.clone(), ManualClock::at(1_000));

        assert!(storage.raw("zenith_projects").is_none());

        let first = store.projects().await.unwrap();
        assert_eq!(first, vec![project("1", "A"), project("2", "B")]);
        assert!(storage.raw("zenith_projects").is_some());

        // Second read comes from storage and is equal
        assert_eq!(store.projects().await.unwrap(), first);

        // Contacts and subscribers seed to empty
        assert!(store.contacts().await.unwrap().is_empty());
        assert!(store.subscribers().await.unwrap().is_empty());
        assert_eq!(storage.raw("zenith_subs").as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_add_prepends_with_fresh_id() {
        let store = content(MemoryStore::new(), ManualClock::at(1_700_000_000_000));

        let c = store
            .add_project(NewProject::new("C", "Brand new", "https://img/c.jpg").unwrap())
            .await
            .unwrap();
        assert_eq!(c.id, "1700000000000");

        let projects = store.projects().await.unwrap();
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert_eq!(projects[0], c);
        assert_ne!(c.id, "1");
        assert_ne!(c.id, "2");
    }

    #[tokio::test]
    async fn test_add_bumps_id_within_same_millisecond() {
        let store = content(MemoryStore::new(), ManualClock::at(2));

        // The clock reads "2", which the seed already uses
        let c = store
            .add_project(NewProject::new("C", "d", "").unwrap())
            .await
            .unwrap();
        assert_eq!(c.id, "3");

        let d = store
            .add_project(NewProject::new("D", "d", "").unwrap())
            .await
            .unwrap();
        assert_eq!(d.id, "4");

        let projects = store.projects().await.unwrap();
        let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_image_gets_placeholder() {
        let store = content(MemoryStore::new(), ManualClock::at(42));

        let project = store
            .add_project(NewProject::new("Lot", "Empty lot", "").unwrap())
            .await
            .unwrap();
        assert_eq!(project.image_url, "https://picsum.photos/400/300?random=42");

        let client = store
            .add_client(NewClient::new("Ana", "Investor", "Great", " ").unwrap())
            .await
            .unwrap();
        assert_eq!(client.image_url, "https://picsum.photos/100/100?random=42");
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = content(MemoryStore::new(), ManualClock::at(1_000));

        let before = store.projects().await.unwrap();
        store.delete_project("1").await.unwrap();

        let after = store.projects().await.unwrap();
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|p| p.id != "1"));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let storage = MemoryStore::new();
        let store = content(storage.clone(), ManualClock::at(1_000));

        let before = store.projects().await.unwrap();
        let raw_before = storage.raw("zenith_projects");

        // Nothing is written, so even a read-only medium does not fail
        storage.set_read_only(true);
        store.delete_project("does-not-exist").await.unwrap();

        assert_eq!(store.projects().await.unwrap(), before);
        assert_eq!(storage.raw("zenith_projects"), raw_before);
    }

    #[tokio::test]
    async fn test_add_contact_stamps_id_and_timestamp() {
        let store = content(MemoryStore::new(), ManualClock::at(1_714_555_800_000));

        let contact = store
            .add_contact(NewContact::new("Jane Doe", "jane@x.com", "555-0100", "Springfield").unwrap())
            .await
            .unwrap();
        assert_eq!(contact.id, "1714555800000");
        assert_eq!(contact.timestamp, "2024-05-01T09:30:00Z");
        assert_eq!(contact.full_name, "Jane Doe");
        assert_eq!(contact.city, "Springfield");

        let contacts = store.contacts().await.unwrap();
        assert_eq!(contacts.first(), Some(&contact));
    }

    #[tokio::test]
    async fn test_duplicate_subscriber_emails_are_kept() {
        let store = content(MemoryStore::new(), ManualClock::at(5_000));

        let first = store
            .add_subscriber(NewSubscriber::new("a@b.com").unwrap())
            .await
            .unwrap();
        let second = store
            .add_subscriber(NewSubscriber::new("a@b.com").unwrap())
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        let subs = store.subscribers().await.unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0], second);
        assert_eq!(subs[1], first);
    }

    #[tokio::test]
    async fn test_corrupt_value_falls_back_to_seed() {
        let storage = MemoryStore::new();
        storage.insert_raw("zenith_projects", "{not json");
        let store = content(storage.clone(), ManualClock::at(1_000));

        let projects = store.projects().await.unwrap();
        assert_eq!(projects.len(), 2);

        // The corrupt value was overwritten with the seed
        let raw = storage.raw("zenith_projects").unwrap();
        let stored: Vec<Project> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, projects);
    }

    #[tokio::test]
    async fn test_write_failure_propagates_from_add() {
        let storage = MemoryStore::new();
        let store = content(storage.clone(), ManualClock::at(1_000));
        store.projects().await.unwrap();

        storage.set_read_only(true);
        let err = store
            .add_project(NewProject::new("C", "d", "").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));

        let err = store.delete_project("1").await.unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));

        // Nothing changed
        assert_eq!(store.projects().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_read_only_medium_still_serves_seed() {
        let storage = MemoryStore::new();
        storage.set_read_only(true);
        let store = content(storage.clone(), ManualClock::at(1_000));

        assert_eq!(store.projects().await.unwrap().len(), 2);
        assert!(storage.raw("zenith_projects").is_none());
    }

    #[tokio::test]
    async fn test_namespaces_are_isolated() {
        let storage = MemoryStore::new();
        let zenith = ContentStore::with_clock(
            storage.clone(),
            &SiteConfig::new(Brand::Zenith),
            ManualClock::at(9),
        );
        let pixel = ContentStore::with_clock(
            storage.clone(),
            &SiteConfig::new(Brand::Pixel),
            ManualClock::at(9),
        );

        zenith
            .add_subscriber(NewSubscriber::new("z@zenith.com").unwrap())
            .await
            .unwrap();

        assert_eq!(zenith.subscribers().await.unwrap().len(), 1);
        assert!(pixel.subscribers().await.unwrap().is_empty());
        assert_eq!(pixel.projects().await.unwrap()[0].name, "Consultation");
        assert_eq!(zenith.projects().await.unwrap()[0].name, "Skyline Heights");
    }

    #[tokio::test]
    async fn test_snapshot_loads_every_collection() {
        let clock = ManualClock::at(100);
        let store = content(MemoryStore::new(), clock.clone());

        store
            .add_contact(NewContact::new("Jane Doe", "jane@x.com", "555-0100", "Springfield").unwrap())
            .await
            .unwrap();
        clock.advance(1);
        store
            .add_subscriber(NewSubscriber::new("a@b.com").unwrap())
            .await
            .unwrap();

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.projects.len(), 2);
        assert!(snapshot.clients.is_empty());
        assert_eq!(snapshot.contacts.len(), 1);
        assert_eq!(snapshot.subscribers[0].id, "101");
    }
}
