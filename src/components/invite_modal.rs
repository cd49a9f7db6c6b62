//! Invite Modal
//!
//! Generates a shareable URL for a new collaborator. The URL is shown for the
//! user to copy, never auto-copied.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controllers::ListController;

#[component]
pub fn InviteModal(controller: ListController) -> impl IntoView {
    let show = controller.show_invite_modal;
    let invite_url = controller.invite_url;

    view! {
        {move || {
            show.get()
                .then(|| {
                    let generate = {
                        let controller = controller.clone();
                        move |_| {
                            let controller = controller.clone();
                            spawn_local(async move {
                                controller.generate_invite().await;
                            });
                        }
                    };
                    let close = {
                        let controller = controller.clone();
                        move |_| controller.close_invite_modal()
                    };
                    view! {
                        <div class="fixed modal-overlay">
                            <div class="modal">
                                <h2>"ユーザーを招待"</h2>
                                <p>"下のURLを共有すると、このリストに参加できます。"</p>
                                <button on:click=generate>"URL生成"</button>
                                {move || {
                                    let url = invite_url.get();
                                    (!url.is_empty())
                                        .then(|| {
                                            view! {
                                                <input
                                                    class="invite-url"
                                                    type="text"
                                                    readonly
                                                    prop:value=url.clone()
                                                />
                                            }
                                        })
                                }}
                                <button class="cancel-btn" on:click=close>"閉じる"</button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
