//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in its
//! own JSON file. It is used by the desktop app so content survives restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── zenith_projects.json
//! ├── zenith_clients.json
//! ├── zenith_contacts.json
//! └── zenith_subs.json
//! ```
//!
//! Characters outside `[A-Za-z0-9_-]` in a key are replaced by `_` so a
//! namespace can never escape the base directory.
//!
//! Writes go to `<name>.json.tmp` first and are renamed over the target, so a
//! crash mid-write leaves the previous file intact.
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/realty-site/` |
//! | Linux | `~/.local/share/realty-site/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\realty-site\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::content::KeyValueStore;
use crate::error::{Result, StoreError};

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.item_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Unavailable(format!("reading `{key}`: {e}"))),
        }
    }

    async fn write(&self, key: &str, value: String) -> Result<()> {
        let failed = |e: std::io::Error| StoreError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        };
        std::fs::create_dir_all(&self.base).map_err(failed)?;
        let path = self.item_path(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(failed)?;
        std::fs::rename(&tmp, &path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            failed(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentStore;
    use crate::models::{NewContact, NewProject, Project};
    use crate::seed::Brand;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("realty_store_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = temp_dir("roundtrip");

        let store = ContentStore::new(FileStore::new(dir.clone()), &SiteConfig::default());
        let added = store
            .add_project(NewProject::new("Harbor View", "Waterfront flats", "").unwrap())
            .await
            .unwrap();
        assert!(dir.join("zenith_projects.json").exists());

        // Re-open from same directory
        let reopened = ContentStore::new(FileStore::new(dir.clone()), &SiteConfig::default());
        let projects = reopened.projects().await.unwrap();
        assert_eq!(projects.len(), 5);
        assert_eq!(projects[0], added);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_write_replaces_file_without_leftovers() {
        let dir = temp_dir("replace");
        let store = FileStore::new(dir.clone());

        store.write("zenith_contacts", "[1]".to_string()).await.unwrap();
        store.write("zenith_contacts", "[1,2]".to_string()).await.unwrap();

        assert_eq!(
            store.read("zenith_contacts").await.unwrap().as_deref(),
            Some("[1,2]")
        );
        assert!(!dir.join("zenith_contacts.json.tmp").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_interrupted_write_keeps_previous_contents() {
        let dir = temp_dir("interrupted");
        let store = ContentStore::new(FileStore::new(dir.clone()), &SiteConfig::default());
        let jane = store
            .add_contact(NewContact::new("Jane Doe", "jane@x.com", "555-0100", "Springfield").unwrap())
            .await
            .unwrap();

        // A crash after the temp file was written but before the rename
        std::fs::write(dir.join("zenith_contacts.json.tmp"), "[{\"id\":\"17").unwrap();

        let contacts = store.contacts().await.unwrap();
        assert_eq!(contacts, vec![jane]);

        // The next write replaces the stale temp file
        store
            .add_contact(NewContact::new("John Roe", "john@x.com", "555-0101", "Shelbyville").unwrap())
            .await
            .unwrap();
        assert_eq!(store.contacts().await.unwrap().len(), 2);
        assert!(!dir.join("zenith_contacts.json.tmp").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_truncated_file_falls_back_to_seed() {
        let dir = temp_dir("truncated");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("zenith_projects.json"), "[{\"id\":\"1\",\"na").unwrap();

        let store = ContentStore::new(FileStore::new(dir.clone()), &SiteConfig::default());
        let projects = store.projects().await.unwrap();
        assert_eq!(projects, Brand::Zenith.seed().projects);

        let raw = std::fs::read_to_string(dir.join("zenith_projects.json")).unwrap();
        let stored: Vec<Project> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, projects);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_absent() {
        let dir = temp_dir("absent");
        let store = FileStore::new(dir.clone());
        assert_eq!(store.read("zenith_subs").await.unwrap(), None);
    }

    #[test]
    fn test_keys_cannot_escape_base() {
        let store = FileStore::new(PathBuf::from("/data"));
        assert_eq!(
            store.item_path("../etc/passwd"),
            PathBuf::from("/data/___etc_passwd.json")
        );
        assert_eq!(
            store.item_path("pixel_subs"),
            PathBuf::from("/data/pixel_subs.json")
        );
    }
}
