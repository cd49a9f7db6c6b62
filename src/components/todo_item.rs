//! Todo Row
//!
//! One list entry with its per-collaborator checkboxes. Toggling sends the
//! target value and the controller reloads the whole list afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controllers::ListController;
use crate::models::Todo;
use crate::todos::is_checked_by;

#[component]
pub fn TodoItem(todo: Todo, controller: ListController) -> impl IntoView {
    let users = controller.users;
    let todo_id = todo.id;
    let title = todo.title.clone();
    let priority = todo.priority;
    let due_date = todo.due_date.clone();
    let row_class = if todo.is_completed {
        "todo-item completed"
    } else {
        "todo-item"
    };

    view! {
        <li class=row_class>
            <div class="todo-main">
                <span class="todo-title">{title}</span>
                <span class=format!("todo-priority {}", priority.value())>{priority.label()}</span>
                {due_date.map(|date| view! { <span class="todo-due">{date}</span> })}
            </div>
            <div class="todo-statuses">
                {move || {
                    users
                        .get()
                        .into_iter()
                        .map(|user| {
                            let checked = is_checked_by(&todo, &user.id);
                            let label = user.display_label().to_string();
                            let user_id = user.id.clone();
                            let controller = controller.clone();
                            view! {
                                <label class="status-checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |_| {
                                            let controller = controller.clone();
                                            let user_id = user_id.clone();
                                            spawn_local(async move {
                                                controller
                                                    .update_todo_status(todo_id, &user_id, !checked)
                                                    .await;
                                            });
                                        }
                                    />
                                    {label}
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </li>
    }
}
