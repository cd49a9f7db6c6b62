//! List Detail Controller
//!
//! State holder for the per-list screen: hydrates everything from the backend
//! after any mutation, partitions todos for display, and drives the invite and
//! rename dialogs. Responses are only applied while the route key they were
//! issued under is still the current one, so late arrivals after teardown or a
//! route change fall on the floor instead of clobbering a newer screen.

use leptos::prelude::*;

use crate::api::{CreateTodoRequest, ListsApi};
use crate::config;
use crate::models::{Priority, Todo, User};
use crate::shell::UiShell;
use crate::todos;

const NOT_FOUND: &str = "指定されたリストまたはユーザーが見つかりません";
const TODO_CREATE_FAILED: &str = "ToDoの作成に失敗しました";
const STATUS_UPDATE_FAILED: &str = "ステータスの更新に失敗しました";
const MEMO_SAVED: &str = "メモを保存しました";
const MEMO_SAVE_FAILED: &str = "メモの保存に失敗しました";
const NAME_UPDATED: &str = "表示名を更新しました";
const NAME_UPDATE_FAILED: &str = "表示名の更新に失敗しました";
const INVITE_FAILED: &str = "招待URLの生成に失敗しました";

/// Route parameters this controller instance is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteKey {
    list_id: String,
    user_id: String,
}

#[derive(Clone)]
pub struct TodoListController<A, S> {
    api: A,
    shell: S,
    current: RwSignal<Option<RouteKey>>,

    // Server state, wholesale-replaced on every load.
    pub users: RwSignal<Vec<User>>,
    pub todos: RwSignal<Vec<Todo>>,
    pub memo: RwSignal<String>,

    // Form state.
    pub memo_draft: RwSignal<String>,
    pub todo_title: RwSignal<String>,
    pub todo_priority: RwSignal<Priority>,
    pub todo_due_date: RwSignal<String>,

    // Dialog state.
    pub show_invite_modal: RwSignal<bool>,
    pub invite_url: RwSignal<String>,
    pub show_name_modal: RwSignal<bool>,
    pub new_display_name: RwSignal<String>,
}

impl<A: ListsApi, S: UiShell> TodoListController<A, S> {
    pub fn new(api: A, shell: S) -> Self {
        Self {
            api,
            shell,
            current: RwSignal::new(None),
            users: RwSignal::new(Vec::new()),
            todos: RwSignal::new(Vec::new()),
            memo: RwSignal::new(String::new()),
            memo_draft: RwSignal::new(String::new()),
            todo_title: RwSignal::new(String::new()),
            todo_priority: RwSignal::new(Priority::default()),
            todo_due_date: RwSignal::new(String::new()),
            show_invite_modal: RwSignal::new(false),
            invite_url: RwSignal::new(String::new()),
            show_name_modal: RwSignal::new(false),
            new_display_name: RwSignal::new(String::new()),
        }
    }

    /// Bind to the route parameters and run the initial load.
    pub async fn activate(&self, list_id: String, user_id: String) {
        self.current.set(Some(RouteKey { list_id, user_id }));
        self.load_data().await;
    }

    /// Detach from the route; in-flight responses are ignored from here on.
    pub fn teardown(&self) {
        self.current.set(None);
    }

    fn route_key(&self) -> Option<RouteKey> {
        self.current.get_untracked()
    }

    fn is_current(&self, key: &RouteKey) -> bool {
        self.current.get_untracked().as_ref() == Some(key)
    }

    /// Fetch users, todos and memo in one go and replace local state.
    pub async fn load_data(&self) {
        let Some(key) = self.route_key() else { return };
        let result = self.api.get_list_data(&key.list_id, &key.user_id).await;
        if !self.is_current(&key) {
            return;
        }
        match result {
            Ok(data) => {
                self.users.set(data.users);
                self.todos.set(data.todos);
                self.memo.set(data.memo.clone());
                self.memo_draft.set(data.memo);
            }
            Err(err) if err.is_not_found() => {
                self.shell.alert(NOT_FOUND);
                self.shell.navigate("/");
            }
            Err(err) => self.shell.alert(&err.to_string()),
        }
    }

    // ========================
    // Derived Views
    // ========================

    pub fn active_todos(&self) -> Vec<Todo> {
        todos::active_todos(&self.todos.get())
    }

    pub fn completed_todos(&self) -> Vec<Todo> {
        todos::completed_todos(&self.todos.get())
    }

    /// The user this screen is viewed as, once loaded.
    pub fn current_user(&self) -> Option<User> {
        let key = self.route_key()?;
        self.users
            .get_untracked()
            .into_iter()
            .find(|user| user.id == key.user_id)
    }

    // ========================
    // Mutations
    // ========================

    /// Create a todo from the form. An empty title is a no-op, not an error.
    /// On success the form resets and the full state is reloaded so the
    /// backend-populated status rows show up.
    pub async fn create_todo(&self) {
        let Some(key) = self.route_key() else { return };
        let title = self.todo_title.get_untracked();
        if title.trim().is_empty() {
            return;
        }
        let due_date = self.todo_due_date.get_untracked();
        let request = CreateTodoRequest {
            title,
            priority: self.todo_priority.get_untracked(),
            due_date: if due_date.is_empty() { None } else { Some(due_date) },
        };

        let result = self.api.create_todo(&key.list_id, &request).await;
        if !self.is_current(&key) {
            return;
        }
        match result {
            Ok(_) => {
                self.todo_title.set(String::new());
                self.todo_due_date.set(String::new());
                self.load_data().await;
            }
            Err(_) => self.shell.alert(TODO_CREATE_FAILED),
        }
    }

    /// Set one collaborator's checkbox to `checked`, then reload; timestamps
    /// and the todo's aggregate completion are the backend's call.
    pub async fn update_todo_status(&self, todo_id: u32, user_id: &str, checked: bool) {
        let Some(key) = self.route_key() else { return };
        let result = self
            .api
            .update_todo_user_status(todo_id, user_id, checked)
            .await;
        if !self.is_current(&key) {
            return;
        }
        match result {
            Ok(_) => self.load_data().await,
            Err(_) => self.shell.alert(STATUS_UPDATE_FAILED),
        }
    }

    /// Save the edited memo text.
    pub async fn save_memo(&self) {
        let Some(key) = self.route_key() else { return };
        let memo = self.memo_draft.get_untracked();
        let result = self.api.update_list_memo(&key.list_id, &memo).await;
        if !self.is_current(&key) {
            return;
        }
        match result {
            Ok(_) => {
                self.shell.alert(MEMO_SAVED);
                self.load_data().await;
            }
            Err(_) => self.shell.alert(MEMO_SAVE_FAILED),
        }
    }

    // ========================
    // Invite Flow
    // ========================

    pub fn open_invite_modal(&self) {
        self.invite_url.set(String::new());
        self.show_invite_modal.set(true);
    }

    pub fn close_invite_modal(&self) {
        self.show_invite_modal.set(false);
    }

    /// Ask the backend for a guest slot and compose the shareable URL from the
    /// configured client origin and the returned relative path.
    pub async fn generate_invite(&self) {
        let Some(key) = self.route_key() else { return };
        let result = self.api.invite_user(&key.list_id).await;
        if !self.is_current(&key) {
            return;
        }
        match result {
            Ok(invite) => self
                .invite_url
                .set(config::invite_link(config::client_origin(), &invite.url)),
            Err(_) => self.shell.alert(INVITE_FAILED),
        }
    }

    // ========================
    // Rename Flow
    // ========================

    /// Open the rename dialog seeded with the current display name.
    pub fn open_name_modal(&self) {
        let name = self
            .current_user()
            .map(|user| user.display_name)
            .unwrap_or_default();
        self.new_display_name.set(name);
        self.show_name_modal.set(true);
    }

    pub fn close_name_modal(&self) {
        self.show_name_modal.set(false);
    }

    pub async fn update_user_name(&self) {
        let Some(key) = self.route_key() else { return };
        let name = self.new_display_name.get_untracked();
        let result = self
            .api
            .update_user_name(&key.list_id, &key.user_id, &name)
            .await;
        if !self.is_current(&key) {
            return;
        }
        match result {
            Ok(_) => {
                self.shell.alert(NAME_UPDATED);
                self.show_name_modal.set(false);
                self.load_data().await;
            }
            Err(_) => self.shell.alert(NAME_UPDATE_FAILED),
        }
    }
}
