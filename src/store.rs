//! Global UI State Store
//!
//! Mirrors the latest render pass in a Leptos reactive_stores store so
//! the page chrome binds to individual fields.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Filter;
use crate::render::ViewModel;

/// Page state outside the list itself, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Main section and footer are shown
    pub has_items: bool,
    /// Number of items not completed
    pub remaining: usize,
    /// "item left" / "items left"
    pub remaining_label: String,
    /// Clear-completed button is shown
    pub has_completed: bool,
    /// Select-all checkbox state
    pub all_completed: bool,
    /// Active filter link
    pub filter: Filter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy a render pass into the store, touching only fields that changed
pub fn store_apply_view(store: &AppStore, view: &ViewModel) {
    if store.has_items().get_untracked() != view.has_items {
        store.has_items().set(view.has_items);
    }
    if store.remaining().get_untracked() != view.remaining {
        store.remaining().set(view.remaining);
    }
    if store.remaining_label().get_untracked() != view.remaining_label() {
        store.remaining_label().set(view.remaining_label().to_string());
    }
    if store.has_completed().get_untracked() != view.has_completed {
        store.has_completed().set(view.has_completed);
    }
    if store.all_completed().get_untracked() != view.all_completed {
        store.all_completed().set(view.all_completed);
    }
    if store.filter().get_untracked() != view.filter {
        store.filter().set(view.filter);
    }
}
