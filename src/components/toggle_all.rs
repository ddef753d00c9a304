//! Toggle All Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Select-all checkbox; checked only when every item is completed
#[component]
pub fn ToggleAll() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <input
            id="toggle-all"
            class="toggle-all"
            type="checkbox"
            prop:checked=move || store.all_completed().get()
            on:change=move |ev| {
                let checked = event_target_checked(&ev);
                ctx.dispatch(|c| c.toggle_all(checked));
            }
        />
        <label for="toggle-all">"Mark all as complete"</label>
    }
}
