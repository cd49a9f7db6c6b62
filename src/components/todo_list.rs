//! Todo List Page
//!
//! Detail screen for `/:list_id/:user_id`: member strip, memo, the create
//! form, and the active/completed partition. All data comes from the
//! controller's hydrate-everything load.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::Backend;
use crate::components::{InviteModal, MemoPanel, NameModal, NewTodoForm, TodoItem};
use crate::controllers::{ListController, TodoListController};
use crate::shell::BrowserShell;

#[component]
pub fn TodoListPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let shell = BrowserShell::new({
        let navigate = navigate.clone();
        move |path: &str| navigate(path, Default::default())
    });
    let controller: ListController = TodoListController::new(Backend::from_env(), shell);

    // (Re)bind whenever the route params change; the router reuses this
    // component when navigating between two detail URLs, and a rebind makes
    // the controller drop whatever the previous params still have in flight.
    Effect::new({
        let controller = controller.clone();
        move |_| {
            let map = params.get();
            match (map.get("list_id"), map.get("user_id")) {
                (Some(list_id), Some(user_id)) => {
                    let controller = controller.clone();
                    spawn_local(async move {
                        controller.activate(list_id, user_id).await;
                    });
                }
                // Malformed route; nothing to show here.
                _ => {
                    let navigate = navigate.clone();
                    spawn_local(async move {
                        navigate("/", Default::default());
                    });
                }
            }
        }
    });

    on_cleanup({
        let controller = controller.clone();
        move || controller.teardown()
    });

    let users = controller.users;

    let active_items = {
        let controller = controller.clone();
        move || {
            controller
                .active_todos()
                .into_iter()
                .map(|todo| {
                    view! { <TodoItem todo=todo controller=controller.clone()/> }
                })
                .collect_view()
        }
    };
    let completed_items = {
        let controller = controller.clone();
        move || {
            controller
                .completed_todos()
                .into_iter()
                .map(|todo| {
                    view! { <TodoItem todo=todo controller=controller.clone()/> }
                })
                .collect_view()
        }
    };

    let open_name_modal = {
        let controller = controller.clone();
        move |_| controller.open_name_modal()
    };
    let open_invite_modal = {
        let controller = controller.clone();
        move |_| controller.open_invite_modal()
    };

    view! {
        <div class="todo-list-page">
            <header class="page-header">
                <h1>"ToDo リスト"</h1>
                <div class="header-actions">
                    <button on:click=open_name_modal>"表示名を設定"</button>
                    <button on:click=open_invite_modal>"ユーザーを招待"</button>
                </div>
            </header>

            <section class="members">
                <h2>"メンバー"</h2>
                <ul class="member-list">
                    {move || {
                        let viewer_id = params.get().get("user_id").unwrap_or_default();
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                let class = if user.id == viewer_id {
                                    "member self"
                                } else {
                                    "member"
                                };
                                view! { <li class=class>{user.display_label().to_string()}</li> }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <MemoPanel controller=controller.clone()/>
            <NewTodoForm controller=controller.clone()/>

            <section class="todos">
                <h3>"未完了"</h3>
                <ul class="todo-items">{active_items}</ul>
                <h3>"完了済み"</h3>
                <ul class="todo-items">{completed_items}</ul>
            </section>

            <InviteModal controller=controller.clone()/>
            <NameModal controller=controller.clone()/>
        </div>
    }
}
