//! List Renderer
//!
//! Pure derivation of everything the page shows from (items, filter,
//! row being edited). Called again in full after every change.

use std::fmt::Write;

use crate::models::{Filter, Item, ItemId};

/// Everything the document needs for one render pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewModel {
    /// Items visible under the active filter, in list order
    pub visible: Vec<Item>,
    /// Markup for the `.todo-list` container
    pub list_html: String,
    pub has_items: bool,
    pub remaining: usize,
    pub has_completed: bool,
    /// State of the select-all control
    pub all_completed: bool,
    pub filter: Filter,
    pub editing: Option<ItemId>,
}

impl ViewModel {
    /// Counter text after the number, e.g. "items left"
    pub fn remaining_label(&self) -> &'static str {
        if self.remaining == 1 { "item left" } else { "items left" }
    }
}

/// Escape user text before it goes into markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn filter_items(items: &[Item], filter: Filter) -> Vec<Item> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Markup for a single row
pub fn row_html(item: &Item, editing: bool) -> String {
    let mut classes = Vec::new();
    if item.completed {
        classes.push("completed");
    }
    if editing {
        classes.push("editing");
    }
    let title = escape_html(&item.title);

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<li data-id="{}" class="{}"><div class="view"><input class="toggle" type="checkbox"{}><label>{}</label><button class="destroy"></button></div><input class="edit" value="{}"></li>"#,
        item.id,
        classes.join(" "),
        if item.completed { " checked" } else { "" },
        title,
        title,
    );
    html
}

pub fn render(items: &[Item], filter: Filter, editing: Option<ItemId>) -> ViewModel {
    let visible = filter_items(items, filter);
    let list_html = visible
        .iter()
        .map(|item| row_html(item, editing == Some(item.id)))
        .collect();

    let has_items = !items.is_empty();
    let remaining = items.iter().filter(|item| !item.completed).count();
    let completed = items.len() - remaining;

    ViewModel {
        visible,
        list_html,
        has_items,
        remaining,
        has_completed: completed > 0,
        all_completed: has_items && remaining == 0,
        filter,
        editing,
    }
}
