//! Todo List Component
//!
//! The list body is the renderer's markup, written into the `<ul>` on
//! every render request. Row interactions are handled by delegation on
//! the container and routed to the controller by `data-id`.

use leptos::html::Ul;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::context::use_app_context;
use crate::controller::EditKey;
use crate::models::ItemId;
use crate::store::{store_apply_view, use_app_store};

/// Event target and the id of the row containing it
fn row_target(ev: &web_sys::Event) -> Option<(Element, ItemId)> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let row = target.closest("li").ok()??;
    let id = row.get_attribute("data-id")?.parse().ok()?;
    Some((target, id))
}

fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Focus the edit field of a row with the cursor after the last character
fn focus_editor(list: &Element, id: ItemId) {
    let selector = format!(r#"li[data-id="{}"] .edit"#, id);
    let Some(input) = list
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let _ = input.focus();
    let end = input.value().encode_utf16().count() as u32;
    let _ = input.set_selection_range(end, end);
}

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let list_ref = NodeRef::<Ul>::new();

    // Full re-render from the controller on every request
    Effect::new(move |_| {
        ctx.render_tick.track();
        let Some(list) = list_ref.get() else { return };

        let view = ctx.view();
        list.set_inner_html(&view.list_html);
        if let Some(id) = view.editing {
            focus_editor(&list, id);
        }
        store_apply_view(&store, &view);
        log::debug!(target: "render", "{} rows, {} remaining", view.visible.len(), view.remaining);
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some((target, id)) = row_target(&ev) else { return };
        if has_class(&target, "destroy") {
            ctx.dispatch(|c| c.destroy(id));
        } else if has_class(&target, "toggle") {
            ctx.dispatch(|c| c.toggle(id));
        }
    };

    let on_dblclick = move |ev: web_sys::MouseEvent| {
        let Some((target, id)) = row_target(&ev) else { return };
        if target.tag_name() == "LABEL" {
            ctx.dispatch(|c| c.begin_edit(id));
        }
    };

    let on_keyup = move |ev: web_sys::KeyboardEvent| {
        let Some((target, id)) = row_target(&ev) else { return };
        if !has_class(&target, "edit") {
            return;
        }
        let key = EditKey::from_key(&ev.key());
        if ctx.dispatch_with(|c| c.edit_key(id, key)).unwrap_or(false) {
            // focusout commits
            if let Ok(input) = target.dyn_into::<HtmlElement>() {
                let _ = input.blur();
            }
        }
    };

    let on_focusout = move |ev: web_sys::FocusEvent| {
        let Some((target, id)) = row_target(&ev) else { return };
        if !has_class(&target, "edit") {
            return;
        }
        let Ok(input) = target.dyn_into::<HtmlInputElement>() else { return };
        let text = input.value();
        ctx.dispatch(|c| c.commit_edit(id, &text));
    };

    view! {
        <ul
            class="todo-list"
            node_ref=list_ref
            on:click=on_click
            on:dblclick=on_dblclick
            on:keyup=on_keyup
            on:focusout=on_focusout
        />
    }
}
