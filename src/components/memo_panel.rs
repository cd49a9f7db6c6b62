//! Shared Memo Panel
//!
//! Free-text memo with an explicit save action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controllers::ListController;

#[component]
pub fn MemoPanel(controller: ListController) -> impl IntoView {
    let draft = controller.memo_draft;

    let save = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.save_memo().await;
        });
    };

    view! {
        <section class="memo-panel">
            <h2>"メモ"</h2>
            <textarea
                placeholder="共有メモを入力..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            ></textarea>
            <button on:click=save>"メモを保存"</button>
        </section>
    }
}
