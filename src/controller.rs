//! Coordinator
//!
//! Turns user interactions and navigation changes into store calls and
//! render requests. The Leptos layer forwards DOM events here.

use std::rc::Rc;

use crate::models::{Filter, ItemId};
use crate::render::{render, ViewModel};
use crate::todos::TodoStore;

/// Render request hook
pub type RenderHook = Rc<dyn Fn()>;

/// Keys with a meaning inside the edit field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Confirm,
    Cancel,
    Other,
}

impl EditKey {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => EditKey::Confirm,
            "Escape" | "Esc" => EditKey::Cancel,
            _ => EditKey::Other,
        }
    }
}

pub struct Controller {
    store: TodoStore,
    filter: Filter,
    editing: Option<ItemId>,
    on_render: RenderHook,
}

impl Controller {
    /// Wire the store's change notification to `on_render`.
    /// `hash` is the location fragment at startup.
    pub fn new(mut store: TodoStore, hash: &str, on_render: RenderHook) -> Self {
        let hook = on_render.clone();
        store.subscribe(move |_| hook());

        Self {
            store,
            filter: Filter::from_hash(hash),
            editing: None,
            on_render,
        }
    }

    #[cfg(test)]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    #[cfg(test)]
    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    #[cfg(test)]
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Full re-derivation of the page from the current state
    pub fn view(&self) -> ViewModel {
        render(self.store.get_all(), self.filter, self.editing)
    }

    /// New-item input committed. Returns true when the input should be cleared.
    pub fn submit_new(&mut self, text: &str) -> bool {
        self.store.add(text).is_some()
    }

    pub fn destroy(&mut self, id: ItemId) {
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.store.delete(id);
    }

    pub fn toggle(&mut self, id: ItemId) {
        self.store.toggle(id);
    }

    /// Put a single row into edit mode
    pub fn begin_edit(&mut self, id: ItemId) {
        if !self.store.get_all().iter().any(|item| item.id == id) {
            return;
        }
        log::debug!(target: "controller", "editing #{}", id);
        self.editing = Some(id);
        self.request_render();
    }

    /// Key released inside the edit field. Returns true when the field
    /// should be blurred so the focus-loss handler commits it.
    pub fn edit_key(&mut self, id: ItemId, key: EditKey) -> bool {
        if self.editing != Some(id) {
            return false;
        }
        match key {
            EditKey::Confirm => true,
            EditKey::Cancel => {
                self.cancel_edit();
                false
            }
            EditKey::Other => false,
        }
    }

    /// Edit field lost focus: save the text, or delete the item when it is blank
    pub fn commit_edit(&mut self, id: ItemId, text: &str) {
        if self.editing != Some(id) {
            return;
        }
        self.editing = None;

        let text = text.trim();
        if text.is_empty() {
            self.store.delete(id);
        } else {
            self.store.edit(id, text);
        }
    }

    pub fn cancel_edit(&mut self) {
        if self.editing.take().is_some() {
            self.request_render();
        }
    }

    pub fn toggle_all(&mut self, completed: bool) {
        self.store.toggle_all(completed);
    }

    pub fn clear_completed(&mut self) {
        self.store.clear_completed();
    }

    /// Location fragment changed
    pub fn navigate(&mut self, hash: &str) {
        self.filter = Filter::from_hash(hash);
        log::debug!(target: "controller", "filter -> {:?}", self.filter);
        self.request_render();
    }

    fn request_render(&self) {
        (self.on_render)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, Storage};
    use std::cell::Cell;

    struct Harness {
        controller: Controller,
        renders: Rc<Cell<u32>>,
        storage: MemoryStorage,
    }

    fn setup(hash: &str) -> Harness {
        let storage = MemoryStorage::new();
        let store = TodoStore::with_clock(Box::new(storage.clone()), "todos-test", Box::new(|| 1));
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        let controller = Controller::new(store, hash, Rc::new(move || counter.set(counter.get() + 1)));
        Harness { controller, renders, storage }
    }

    fn first_id(h: &Harness) -> ItemId {
        h.controller.store().get_all()[0].id
    }

    #[test]
    fn test_add_scenario() {
        let mut h = setup("");

        assert!(h.controller.submit_new("buy milk"));
        assert_eq!(h.renders.get(), 1);

        let vm = h.controller.view();
        assert_eq!(vm.visible.len(), 1);
        assert!(!vm.visible[0].completed);
        assert_eq!(vm.remaining, 1);
        assert!(!vm.has_completed);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut h = setup("");
        assert!(!h.controller.submit_new("   "));
        assert_eq!(h.renders.get(), 0);
        assert!(h.controller.store().get_all().is_empty());
    }

    #[test]
    fn test_toggle_scenario() {
        let mut h = setup("");
        h.controller.submit_new("buy milk");
        let id = first_id(&h);

        h.controller.toggle(id);

        let vm = h.controller.view();
        assert!(vm.visible[0].completed);
        assert_eq!(vm.remaining, 0);
        assert!(vm.all_completed);
        assert!(vm.has_completed);
    }

    #[test]
    fn test_edit_commit() {
        let mut h = setup("");
        h.controller.submit_new("buy milk");
        let id = first_id(&h);

        h.controller.begin_edit(id);
        assert_eq!(h.controller.editing(), Some(id));
        assert!(h.controller.view().list_html.contains("editing"));

        assert!(h.controller.edit_key(id, EditKey::from_key("Enter")));
        h.controller.commit_edit(id, "  buy oat milk ");

        assert_eq!(h.controller.editing(), None);
        assert_eq!(h.controller.store().get_all()[0].title, "buy oat milk");
    }

    #[test]
    fn test_edit_commit_blank_removes_item() {
        let mut h = setup("");
        h.controller.submit_new("buy milk");
        h.controller.submit_new("walk dog");
        let id = first_id(&h);

        h.controller.begin_edit(id);
        h.controller.commit_edit(id, "   ");

        assert_eq!(h.controller.store().get_all().len(), 1);
        assert_eq!(h.controller.store().get_all()[0].title, "walk dog");
    }

    #[test]
    fn test_edit_cancel_discards_text() {
        let mut h = setup("");
        h.controller.submit_new("buy milk");
        let id = first_id(&h);
        h.controller.begin_edit(id);
        let renders = h.renders.get();

        assert!(!h.controller.edit_key(id, EditKey::from_key("Escape")));
        assert_eq!(h.controller.editing(), None);
        assert_eq!(h.renders.get(), renders + 1);

        // the field losing focus after cancel does not save anything
        h.controller.commit_edit(id, "changed");
        assert_eq!(h.controller.store().get_all()[0].title, "buy milk");
    }

    #[test]
    fn test_begin_edit_unknown_id_ignored() {
        let mut h = setup("");
        h.controller.begin_edit(99);
        assert_eq!(h.controller.editing(), None);
        assert_eq!(h.renders.get(), 0);
    }

    #[test]
    fn test_only_one_row_in_edit_mode() {
        let mut h = setup("");
        h.controller.submit_new("a");
        h.controller.submit_new("b");
        let ids: Vec<ItemId> = h.controller.store().get_all().iter().map(|i| i.id).collect();

        h.controller.begin_edit(ids[0]);
        h.controller.begin_edit(ids[1]);

        assert_eq!(h.controller.view().list_html.matches("editing").count(), 1);
        // stale focus loss from the first row is ignored
        h.controller.commit_edit(ids[0], "");
        assert_eq!(h.controller.store().get_all().len(), 2);
    }

    #[test]
    fn test_destroy_and_clear_completed() {
        let mut h = setup("");
        h.controller.submit_new("a");
        h.controller.submit_new("b");
        h.controller.submit_new("c");
        let ids: Vec<ItemId> = h.controller.store().get_all().iter().map(|i| i.id).collect();

        h.controller.destroy(ids[0]);
        h.controller.toggle(ids[1]);
        h.controller.clear_completed();

        let titles: Vec<String> = h.controller.store().get_all().iter().map(|i| i.title.clone()).collect();
        assert_eq!(titles, vec!["c".to_string()]);
    }

    #[test]
    fn test_toggle_all() {
        let mut h = setup("");
        h.controller.submit_new("a");
        h.controller.submit_new("b");

        h.controller.toggle_all(true);
        assert!(h.controller.view().all_completed);

        h.controller.toggle_all(false);
        assert_eq!(h.controller.view().remaining, 2);
    }

    #[test]
    fn test_navigation_filters_view() {
        let mut h = setup("#/completed");
        assert_eq!(h.controller.filter(), Filter::Completed);

        h.controller.submit_new("done");
        h.controller.submit_new("todo");
        let id = first_id(&h);
        h.controller.toggle(id);

        let vm = h.controller.view();
        assert_eq!(vm.visible.len(), 1);
        assert_eq!(vm.visible[0].title, "done");

        let renders = h.renders.get();
        h.controller.navigate("#/bogus");
        assert_eq!(h.controller.filter(), Filter::All);
        assert_eq!(h.renders.get(), renders + 1);
        assert_eq!(h.controller.view().visible.len(), 2);
    }

    #[test]
    fn test_changes_reach_storage() {
        let mut h = setup("");
        h.controller.submit_new("persist me");

        let raw = h.storage.read("todos-test").unwrap().unwrap();
        assert!(raw.contains("persist me"));
    }
}
