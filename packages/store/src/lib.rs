pub mod clock;
pub mod collection;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod seed;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use clock::{Clock, ManualClock, Stamp, SystemClock};
pub use collection::{Collection, Deletable, Record};
pub use config::SiteConfig;
pub use content::{ContentStore, KeyValueStore, Snapshot};
pub use error::{Result, StoreError};
pub use models::{
    Client, ContactSubmission, NewClient, NewContact, NewProject, NewSubscriber, Project,
    Subscriber,
};
pub use seed::{Brand, Seed};
