//! Application Context
//!
//! Shared handle to the controller, provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::controller::Controller;
use crate::render::ViewModel;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Controller, LocalStorage>,
    /// Bumped on every render request
    pub render_tick: ReadSignal<u32>,
}

impl AppContext {
    pub fn new(controller: Controller, render_tick: ReadSignal<u32>) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            render_tick,
        }
    }

    /// Run a controller operation
    pub fn dispatch(&self, f: impl FnOnce(&mut Controller)) {
        self.controller.update_value(f);
    }

    /// Run a controller operation and keep its result
    pub fn dispatch_with<T>(&self, f: impl FnOnce(&mut Controller) -> T) -> Option<T> {
        self.controller.try_update_value(f)
    }

    /// Current render pass
    pub fn view(&self) -> ViewModel {
        self.controller.with_value(|c| c.view())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
