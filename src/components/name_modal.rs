//! Display Name Modal
//!
//! Edits the current user's display name; confirmed changes reload the list
//! so every collaborator row picks up the new name.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controllers::ListController;

#[component]
pub fn NameModal(controller: ListController) -> impl IntoView {
    let show = controller.show_name_modal;
    let name = controller.new_display_name;

    view! {
        {move || {
            show.get()
                .then(|| {
                    let submit = {
                        let controller = controller.clone();
                        move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            let controller = controller.clone();
                            spawn_local(async move {
                                controller.update_user_name().await;
                            });
                        }
                    };
                    let cancel = {
                        let controller = controller.clone();
                        move |_| controller.close_name_modal()
                    };
                    view! {
                        <div class="fixed modal-overlay">
                            <div class="modal">
                                <h2>"表示名を設定"</h2>
                                <form on:submit=submit>
                                    <input
                                        type="text"
                                        placeholder="表示名"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                    <button type="submit">"更新"</button>
                                    <button type="button" class="cancel-btn" on:click=cancel>
                                        "キャンセル"
                                    </button>
                                </form>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
