//! Todo App
//!
//! Builds storage, store and controller, then lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Footer, NewTodoInput, ToggleAll, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::Controller;
use crate::storage::{BrowserStorage, MemoryStorage, Storage};
use crate::store::{AppState, AppStateStoreFields};
use crate::todos::TodoStore;

fn open_storage() -> Box<dyn Storage> {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!(target: "app", "{}, changes will not survive a reload", e);
            Box::new(MemoryStorage::new())
        }
    }
}

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (render_tick, set_render_tick) = signal(0u32);
    let store = Store::new(AppState::default());
    provide_context(store);

    let todos = TodoStore::open(open_storage(), config.storage_key);
    log::info!(target: "app", "loaded {} items", todos.get_all().len());
    let controller = Controller::new(
        todos,
        &current_hash(),
        Rc::new(move || set_render_tick.update(|t| *t += 1)),
    );
    let ctx = AppContext::new(controller, render_tick);
    provide_context(ctx);

    // Filter navigation
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        let hash = current_hash();
        ctx.dispatch(|c| c.navigate(&hash));
    });

    let display = move || if store.has_items().get() { "block" } else { "none" };

    view! {
        <section class="todoapp">
            <header class="header">
                <h1>"todos"</h1>
                <NewTodoInput />
            </header>

            <section class="main" style:display=display>
                <ToggleAll />
                <TodoList />
            </section>

            <Footer />
        </section>

        <footer class="info">
            <p>"Double-click to edit a todo"</p>
        </footer>
    }
}
