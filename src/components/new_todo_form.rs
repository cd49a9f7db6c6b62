//! New Todo Form
//!
//! Title, priority and optional due date. Submitting an empty title is a
//! no-op; the controller resets the fields after a successful create.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controllers::ListController;
use crate::models::Priority;

#[component]
pub fn NewTodoForm(controller: ListController) -> impl IntoView {
    let title = controller.todo_title;
    let priority = controller.todo_priority;
    let due_date = controller.todo_due_date;

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            controller.create_todo().await;
        });
    };

    view! {
        <section class="new-todo">
            <h2>"新しいToDoを追加"</h2>
            <form class="new-todo-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="タイトル"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || priority.get().value()
                    on:change=move |ev| priority.set(Priority::from_value(&event_target_value(&ev)))
                >
                    <option value="high">"高"</option>
                    <option value="medium">"中"</option>
                    <option value="low">"低"</option>
                </select>
                <input
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| due_date.set(event_target_value(&ev))
                />
                <button type="submit">"追加"</button>
            </form>
        </section>
    }
}
