//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod filter_bar;
mod summary_bar;
mod todo_list;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use filter_bar::FilterBar;
pub use summary_bar::SummaryBar;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
