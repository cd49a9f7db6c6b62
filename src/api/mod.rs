//! Backend Resource Operations
//!
//! One typed async call per backend capability. No retries, no caching, no
//! client-side validation; state handling is the controllers' job.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ApiError;
use crate::models::{Priority, Todo, User};

mod client;

pub use client::ApiClient;

// ========================
// Request / Response Shapes
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListResponse {
    pub list_id: String,
    pub user_id: String,
}

/// The single "hydrate everything" payload the detail view relies on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListData {
    pub users: Vec<User>,
    pub todos: Vec<Todo>,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub title: String,
    pub priority: Priority,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteUserResponse {
    pub user_id: String,
    /// Relative path of the invite, e.g. `/{listId}/{userId}`.
    pub url: String,
}

#[derive(Serialize)]
struct UpdateStatusRequest {
    checked: bool,
}

#[derive(Serialize)]
struct UpdateMemoRequest<'a> {
    memo: &'a str,
}

#[derive(Serialize)]
struct UpdateNameRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckedResponse {
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemoResponse {
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NameResponse {
    pub name: String,
}

// ========================
// Operations
// ========================

/// Everything the backend can do for this frontend. The trait is the seam
/// controllers are tested through.
#[async_trait(?Send)]
pub trait ListsApi {
    async fn create_list(&self) -> Result<CreateListResponse, ApiError>;

    async fn get_list_data(&self, list_id: &str, user_id: &str) -> Result<ListData, ApiError>;

    async fn create_todo(
        &self,
        list_id: &str,
        todo: &CreateTodoRequest,
    ) -> Result<Todo, ApiError>;

    async fn update_todo_user_status(
        &self,
        todo_id: u32,
        user_id: &str,
        checked: bool,
    ) -> Result<CheckedResponse, ApiError>;

    async fn update_list_memo(&self, list_id: &str, memo: &str) -> Result<MemoResponse, ApiError>;

    async fn invite_user(&self, list_id: &str) -> Result<InviteUserResponse, ApiError>;

    async fn update_user_name(
        &self,
        list_id: &str,
        user_id: &str,
        name: &str,
    ) -> Result<NameResponse, ApiError>;
}

/// Live backend implementation over the HTTP transport.
#[derive(Clone)]
pub struct Backend {
    client: ApiClient,
}

impl Backend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Backend at the configured base URL.
    pub fn from_env() -> Self {
        Self::new(ApiClient::new(config::api_base_url()))
    }
}

#[async_trait(?Send)]
impl ListsApi for Backend {
    async fn create_list(&self) -> Result<CreateListResponse, ApiError> {
        self.client.post("/lists").await
    }

    async fn get_list_data(&self, list_id: &str, user_id: &str) -> Result<ListData, ApiError> {
        self.client
            .get(&format!("/lists/{list_id}/users/{user_id}"))
            .await
    }

    async fn create_todo(
        &self,
        list_id: &str,
        todo: &CreateTodoRequest,
    ) -> Result<Todo, ApiError> {
        self.client
            .post_json(&format!("/lists/{list_id}/todos"), todo)
            .await
    }

    async fn update_todo_user_status(
        &self,
        todo_id: u32,
        user_id: &str,
        checked: bool,
    ) -> Result<CheckedResponse, ApiError> {
        self.client
            .put_json(
                &format!("/todos/{todo_id}/status/{user_id}"),
                &UpdateStatusRequest { checked },
            )
            .await
    }

    async fn update_list_memo(&self, list_id: &str, memo: &str) -> Result<MemoResponse, ApiError> {
        self.client
            .put_json(&format!("/lists/{list_id}/memo"), &UpdateMemoRequest { memo })
            .await
    }

    async fn invite_user(&self, list_id: &str) -> Result<InviteUserResponse, ApiError> {
        self.client.post(&format!("/lists/{list_id}/users")).await
    }

    async fn update_user_name(
        &self,
        list_id: &str,
        user_id: &str,
        name: &str,
    ) -> Result<NameResponse, ApiError> {
        self.client
            .put_json(
                &format!("/lists/{list_id}/users/{user_id}/name"),
                &UpdateNameRequest { name },
            )
            .await
    }
}
