//! # Browser `localStorage` store: web persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. Each collection key maps to one `localStorage` item whose
//! value is the JSON array written by [`crate::ContentStore`]. Data is scoped to
//! the page's origin and survives reloads.
//!
//! ## Error handling
//!
//! `localStorage` is looked up on every call because it can be missing
//! (non-browser host) or blocked (privacy settings). That surfaces as
//! [`StoreError::Unavailable`]. A rejected `setItem`, typically a quota error,
//! surfaces as [`StoreError::WriteFailed`] with the JavaScript error text.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::content::KeyValueStore;
use crate::error::{Result, StoreError};

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_message(&e)))
    }

    async fn write(&self, key: &str, value: String) -> Result<()> {
        self.storage()?
            .set_item(key, &value)
            .map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                reason: js_message(&e),
            })
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
