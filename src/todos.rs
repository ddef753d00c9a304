//! Todo Store
//!
//! Owns the authoritative item list. Every mutation builds a new list,
//! writes it through to storage and notifies subscribers.

use crate::error::StorageError;
use crate::models::{Item, ItemId};
use crate::storage::Storage;

/// Source of creation timestamps in milliseconds
pub type Clock = Box<dyn Fn() -> u64>;

/// Change listener, called with the new list after every mutation
pub type Listener = Box<dyn Fn(&[Item])>;

fn system_clock() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

pub struct TodoStore {
    storage: Box<dyn Storage>,
    key: String,
    items: Vec<Item>,
    clock: Clock,
    last_id: ItemId,
    listeners: Vec<Listener>,
}

impl TodoStore {
    /// Load the list persisted under `key`. Missing or unreadable data
    /// starts an empty list.
    pub fn open(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        Self::with_clock(storage, key, Box::new(system_clock))
    }

    pub fn with_clock(storage: Box<dyn Storage>, key: impl Into<String>, clock: Clock) -> Self {
        let key = key.into();
        let items = load_items(storage.as_ref(), &key);
        let last_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        log::debug!(target: "store", "loaded {} items from {}", items.len(), key);

        Self {
            storage,
            key,
            items,
            clock,
            last_id,
            listeners: Vec::new(),
        }
    }

    pub fn get_all(&self) -> &[Item] {
        &self.items
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl Fn(&[Item]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Append a new item. Returns its id, or `None` when the title is blank.
    pub fn add(&mut self, title: &str) -> Option<ItemId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let id = self.next_id();
        let mut items = self.items.clone();
        items.push(Item::new(id, title));
        log::debug!(target: "store", "add #{}", id);
        self.commit(items);
        Some(id)
    }

    /// Replace the title of an item. A blank title deletes it.
    pub fn edit(&mut self, id: ItemId, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            self.delete(id);
            return;
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Item { title: title.to_string(), ..item.clone() }
                } else {
                    item.clone()
                }
            })
            .collect();
        log::debug!(target: "store", "edit #{}", id);
        self.commit(items);
    }

    pub fn delete(&mut self, id: ItemId) {
        let items = self.items.iter().filter(|item| item.id != id).cloned().collect();
        log::debug!(target: "store", "delete #{}", id);
        self.commit(items);
    }

    pub fn toggle(&mut self, id: ItemId) {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Item { completed: !item.completed, ..item.clone() }
                } else {
                    item.clone()
                }
            })
            .collect();
        log::debug!(target: "store", "toggle #{}", id);
        self.commit(items);
    }

    pub fn toggle_all(&mut self, completed: bool) {
        let items = self
            .items
            .iter()
            .map(|item| Item { completed, ..item.clone() })
            .collect();
        log::debug!(target: "store", "toggle all -> {}", completed);
        self.commit(items);
    }

    pub fn clear_completed(&mut self) {
        let items = self.items.iter().filter(|item| !item.completed).cloned().collect();
        log::debug!(target: "store", "clear completed");
        self.commit(items);
    }

    /// Timestamp-derived, but never reuses or goes below a previous id.
    /// Once the id space is exhausted the smallest free id is taken.
    fn next_id(&mut self) -> ItemId {
        match self.last_id.checked_add(1) {
            Some(floor) => {
                let id = (self.clock)().max(floor);
                self.last_id = id;
                id
            }
            None => (0..=ItemId::MAX)
                .find(|candidate| !self.items.iter().any(|item| item.id == *candidate))
                .unwrap_or(0),
        }
    }

    fn commit(&mut self, items: Vec<Item>) {
        self.items = items;
        self.persist();
        for listener in &self.listeners {
            listener(&self.items);
        }
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.items)
            .map_err(StorageError::from)
            .and_then(|json| self.storage.write(&self.key, &json));
        if let Err(e) = result {
            log::error!(target: "store", "failed to persist {} items: {}", self.items.len(), e);
        }
    }
}

fn load_items(storage: &dyn Storage, key: &str) -> Vec<Item> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!(target: "store", "could not read {}: {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Option<Vec<Item>>>(&raw) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            log::warn!(target: "store", "ignoring malformed data under {}: {}", key, e);
            Vec::new()
        }
    }
}
