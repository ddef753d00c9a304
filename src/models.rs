//! Frontend Models
//!
//! Todo items and the list filter derived from the URL fragment.

use serde::{Deserialize, Serialize};

/// Item identifier (milliseconds since the epoch at creation)
pub type ItemId = u64;

/// A single todo entry, persisted as `{id, title, completed}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Which subset of the list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Filters in the order their links are shown
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Parse a location fragment (`#/active`, `#/completed`, ...).
    /// Anything unrecognized maps to `All`.
    pub fn from_hash(hash: &str) -> Self {
        match hash.strip_prefix("#/").unwrap_or(hash) {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// Fragment written by the filter link
    pub fn href(&self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// The link for this filter is highlighted when its fragment matches the current filter's
    pub fn is_selected(&self, current: Filter) -> bool {
        self.href() == current.href()
    }

    /// Whether an item is visible under this filter
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}
