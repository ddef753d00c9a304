//! UI Components
//!
//! Leptos components for the page regions.

mod footer;
mod new_todo_input;
mod todo_list;
mod toggle_all;

pub use footer::Footer;
pub use new_todo_input::NewTodoInput;
pub use todo_list::TodoList;
pub use toggle_all::ToggleAll;
