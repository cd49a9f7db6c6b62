//! UI Components
//!
//! Thin Leptos views; behavior lives in the controllers.

mod home;
mod invite_modal;
mod memo_panel;
mod name_modal;
mod new_todo_form;
mod todo_item;
mod todo_list;

pub use home::Home;
pub use invite_modal::InviteModal;
pub use memo_panel::MemoPanel;
pub use name_modal::NameModal;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoListPage;
