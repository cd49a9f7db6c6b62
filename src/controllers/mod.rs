//! View State Controllers
//!
//! Per-screen state holders: they call the resource operations, hold the
//! signals the components render from, and decide how each outcome surfaces
//! (local state, reload, navigation, or an alert).

mod home;
mod todo_list;

pub use home::HomeController;
pub use todo_list::TodoListController;

use crate::api::Backend;
use crate::shell::BrowserShell;

/// The detail controller as instantiated by the UI.
pub type ListController = TodoListController<Backend, BrowserShell>;
