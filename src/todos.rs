//! Todo List Projections
//!
//! Pure helpers deriving display views from the todo collection. Order always
//! follows the backend's, the client never re-sorts.

use crate::models::{Todo, TodoUserStatus};

/// Todos still open, in backend order.
pub fn active_todos(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|t| !t.is_completed).cloned().collect()
}

/// Todos marked completed, in backend order.
pub fn completed_todos(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|t| t.is_completed).cloned().collect()
}

/// Status row for one collaborator, if the backend sent one.
pub fn user_status<'a>(todo: &'a Todo, user_id: &str) -> Option<&'a TodoUserStatus> {
    todo.user_statuses.iter().find(|s| s.user_id == user_id)
}

/// Checkbox state for one collaborator; missing rows count as unchecked.
pub fn is_checked_by(todo: &Todo, user_id: &str) -> bool {
    user_status(todo, user_id).map(|s| s.is_checked).unwrap_or(false)
}
