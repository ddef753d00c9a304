//! New Todo Input Component
//!
//! Header input; commits on `change` (Enter or losing focus).

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NewTodoInput() -> impl IntoView {
    let ctx = use_app_context();

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let text = input.value();
        if ctx.dispatch_with(|c| c.submit_new(&text)).unwrap_or(false) {
            input.set_value("");
        }
    };

    view! {
        <input
            class="new-todo"
            placeholder="What needs to be done?"
            autofocus=true
            on:change=on_change
        />
    }
}
