//! Transport integration tests against an in-process HTTP server.
//!
//! These exercise the real reqwest path: URL joining, JSON bodies, and the
//! single-point error normalization.

#![cfg(not(target_arch = "wasm32"))]

use std::net::SocketAddr;

use serde_json::json;
use warp::Filter;

use shared_todo_ui::api::{ApiClient, Backend, CreateTodoRequest, ListsApi};
use shared_todo_ui::error::ApiError;
use shared_todo_ui::models::Priority;

async fn serve(
    filter: impl Filter<Extract = impl warp::Reply, Error = warp::Rejection>
        + Clone
        + Send
        + Sync
        + 'static,
) -> SocketAddr {
    let (addr, server) = warp::serve(filter).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn backend_at(addr: SocketAddr) -> Backend {
    Backend::new(ApiClient::new(format!("http://{addr}/api")))
}

#[tokio::test]
async fn create_list_posts_and_decodes() {
    let route = warp::path!("api" / "lists")
        .and(warp::post())
        .map(|| warp::reply::json(&json!({ "listId": "l1", "userId": "u1" })));
    let backend = backend_at(serve(route).await);

    let created = backend.create_list().await.unwrap();

    assert_eq!(created.list_id, "l1");
    assert_eq!(created.user_id, "u1");
}

#[tokio::test]
async fn get_list_data_hits_the_nested_path() {
    let route = warp::path!("api" / "lists" / String / "users" / String)
        .and(warp::get())
        .map(|list_id: String, user_id: String| {
            warp::reply::json(&json!({
                "users": [
                    { "id": user_id, "displayName": "User 1", "listId": list_id }
                ],
                "todos": [
                    {
                        "id": 1,
                        "listId": list_id,
                        "title": "Test Todo 1",
                        "priority": "high",
                        "dueDate": null,
                        "isCompleted": false
                    }
                ],
                "memo": "Test memo"
            }))
        });
    let backend = backend_at(serve(route).await);

    let data = backend.get_list_data("test-list", "user1").await.unwrap();

    assert_eq!(data.users.len(), 1);
    assert_eq!(data.users[0].id, "user1");
    assert_eq!(data.todos[0].priority, Priority::High);
    assert_eq!(data.memo, "Test memo");
}

#[tokio::test]
async fn create_todo_sends_the_camel_case_body() {
    let route = warp::path!("api" / "lists" / String / "todos")
        .and(warp::post())
        .and(warp::body::json())
        .map(|list_id: String, body: serde_json::Value| {
            assert_eq!(body["title"], "New Todo");
            assert_eq!(body["priority"], "medium");
            assert_eq!(body["dueDate"], serde_json::Value::Null);
            warp::reply::json(&json!({
                "id": 3,
                "listId": list_id,
                "title": body["title"],
                "priority": body["priority"],
                "dueDate": null,
                "isCompleted": false
            }))
        });
    let backend = backend_at(serve(route).await);

    let todo = backend
        .create_todo(
            "test-list",
            &CreateTodoRequest {
                title: "New Todo".to_string(),
                priority: Priority::Medium,
                due_date: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(todo.id, 3);
    assert_eq!(todo.title, "New Todo");
}

#[tokio::test]
async fn update_memo_round_trips_the_body() {
    let route = warp::path!("api" / "lists" / String / "memo")
        .and(warp::put())
        .and(warp::body::json())
        .map(|_list_id: String, body: serde_json::Value| {
            warp::reply::json(&json!({ "memo": body["memo"] }))
        });
    let backend = backend_at(serve(route).await);

    let updated = backend.update_list_memo("l1", "Updated memo").await.unwrap();

    assert_eq!(updated.memo, "Updated memo");
}

#[tokio::test]
async fn update_status_puts_the_target_value() {
    let route = warp::path!("api" / "todos" / u32 / "status" / String)
        .and(warp::put())
        .and(warp::body::json())
        .map(|_todo_id: u32, _user_id: String, body: serde_json::Value| {
            warp::reply::json(&json!({ "checked": body["checked"] }))
        });
    let backend = backend_at(serve(route).await);

    let echoed = backend
        .update_todo_user_status(1, "user1", true)
        .await
        .unwrap();

    assert!(echoed.checked);
}

#[tokio::test]
async fn server_errors_carry_status_and_backend_message() {
    let route = warp::path!("api" / "lists" / String / "users" / String)
        .and(warp::get())
        .map(|_l: String, _u: String| {
            warp::reply::with_status(
                warp::reply::json(&json!({ "error": "User not found in this list" })),
                warp::http::StatusCode::NOT_FOUND,
            )
        });
    let backend = backend_at(serve(route).await);

    let err = backend.get_list_data("l1", "nobody").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "404: User not found in this list");
}

#[tokio::test]
async fn missing_error_body_falls_back_to_the_generic_message() {
    let route = warp::path!("api" / "lists").and(warp::post()).map(|| {
        warp::reply::with_status(
            warp::reply::html("oops"),
            warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        )
    });
    let backend = backend_at(serve(route).await);

    let err = backend.create_list().await.unwrap_err();

    assert_eq!(err.to_string(), "500: サーバーエラーが発生しました");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on the discard port.
    let backend = Backend::new(ApiClient::new("http://127.0.0.1:9/api"));

    let err = backend.create_list().await.unwrap_err();

    assert_eq!(err, ApiError::Network);
    assert_eq!(
        err.to_string(),
        "ネットワークエラー: サーバーに接続できません"
    );
}
