//! Frontend Models
//!
//! Data structures matching the backend entities (camelCase on the wire).

use serde::{Deserialize, Serialize};

/// Collaborator on a shared list (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub list_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Display name with the placeholder used until a name is set.
    pub fn display_label(&self) -> &str {
        if self.display_name.is_empty() {
            "名前未設定"
        } else {
            &self.display_name
        }
    }
}

/// ToDo entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub list_id: String,
    pub title: String,
    pub priority: Priority,
    pub due_date: Option<String>,
    pub is_completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// One row per collaborator; the backend may omit the field entirely.
    #[serde(default)]
    pub user_statuses: Vec<TodoUserStatus>,
}

/// Per-user checkbox state for a todo (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUserStatus {
    pub todo_id: u32,
    pub user_id: String,
    pub is_checked: bool,
    #[serde(default)]
    pub checked_at: Option<String>,
}

/// Todo priority, `"high" | "medium" | "low"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Wire / form value.
    pub fn value(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a form value, falling back to the backend default.
    pub fn from_value(value: &str) -> Self {
        match value {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    /// Label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "高",
            Priority::Medium => "中",
            Priority::Low => "低",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_decodes_backend_json() {
        let json = r#"{
            "id": 1,
            "listId": "test-list",
            "title": "Test Todo 1",
            "priority": "high",
            "dueDate": "2025-06-10",
            "isCompleted": false,
            "userStatuses": [
                { "todoId": 1, "userId": "user1", "isChecked": true },
                { "todoId": 1, "userId": "user2", "isChecked": false }
            ]
        }"#;

        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.due_date.as_deref(), Some("2025-06-10"));
        assert!(!todo.is_completed);
        assert_eq!(todo.user_statuses.len(), 2);
        assert!(todo.user_statuses[0].is_checked);
    }

    #[test]
    fn todo_tolerates_omitted_statuses() {
        let json = r#"{
            "id": 2,
            "listId": "test-list",
            "title": "Bare",
            "priority": "low",
            "dueDate": null,
            "isCompleted": true
        }"#;

        let todo: Todo = serde_json::from_str(json).unwrap();
        assert!(todo.user_statuses.is_empty());
        assert!(todo.due_date.is_none());
    }

    #[test]
    fn priority_form_values_round_trip() {
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(Priority::from_value(priority.value()), priority);
        }
        assert_eq!(Priority::from_value("unknown"), Priority::Medium);
    }

    #[test]
    fn display_label_falls_back_to_placeholder() {
        let user = User {
            id: "user1".to_string(),
            display_name: String::new(),
            list_id: None,
            created_at: None,
        };
        assert_eq!(user.display_label(), "名前未設定");
    }
}
