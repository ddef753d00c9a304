//! Storage Backends
//!
//! Key/value persistence behind a small trait. The browser build uses
//! `window.localStorage`; `MemoryStorage` stands in when that is missing
//! and in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::error::{StorageError, StorageResult};

/// String key/value store
pub trait Storage {
    /// Read the value stored under `key`, `None` if absent
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(inner)) => Ok(Self { inner }),
            _ => Err(StorageError::Unavailable),
        }
    }
}

fn js_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl Storage for BrowserStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: js_message(e),
        })
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_message(e),
        })
    }
}

/// In-memory storage. Clones share the same map, so a second store built
/// from a clone sees what the first one wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
