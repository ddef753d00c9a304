//! Footer Component
//!
//! Remaining counter, filter links and the clear-completed button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let footer_display = move || if store.has_items().get() { "block" } else { "none" };
    let clear_display = move || if store.has_completed().get() { "block" } else { "none" };

    view! {
        <footer class="footer" style:display=footer_display>
            <span class="todo-count">
                <strong>{move || store.remaining().get()}</strong>
                " "
                {move || store.remaining_label().get()}
            </span>

            <ul class="filters">
                {Filter::ALL.into_iter().map(move |filter| {
                    let is_selected = move || filter.is_selected(store.filter().get());
                    view! {
                        <li>
                            <a href=filter.href() class:selected=is_selected>
                                {filter.label()}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <button
                class="clear-completed"
                style:display=clear_display
                on:click=move |_| ctx.dispatch(|c| c.clear_completed())
            >
                "Clear completed"
            </button>
        </footer>
    }
}
