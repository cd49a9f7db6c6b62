//! Home Page
//!
//! Landing screen with the single "create a list" action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::Backend;
use crate::controllers::HomeController;
use crate::shell::BrowserShell;

#[component]
pub fn Home() -> impl IntoView {
    let navigate = use_navigate();
    let shell = BrowserShell::new(move |path: &str| navigate(path, Default::default()));
    let controller = HomeController::new(Backend::from_env(), shell);
    let creating = controller.creating;

    let create_list = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.create_list().await;
        });
    };

    view! {
        <div class="home">
            <h1>"共有ToDoリスト"</h1>
            <p>"リストを作成して、URLを仲間に共有しましょう。"</p>
            <button on:click=create_list disabled=move || creating.get()>
                {move || if creating.get() { "作成中..." } else { "新しいリストを作成" }}
            </button>
        </div>
    }
}
