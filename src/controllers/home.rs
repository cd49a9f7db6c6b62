//! Home View Controller
//!
//! One action: create a list and move to it.

use leptos::prelude::*;

use crate::api::ListsApi;
use crate::shell::UiShell;

const CREATE_FAILED: &str = "リストの作成に失敗しました";

#[derive(Clone)]
pub struct HomeController<A, S> {
    api: A,
    shell: S,
    /// True strictly while the create request is in flight; the UI disables
    /// the trigger and swaps its label on it.
    pub creating: RwSignal<bool>,
}

impl<A: ListsApi, S: UiShell> HomeController<A, S> {
    pub fn new(api: A, shell: S) -> Self {
        Self {
            api,
            shell,
            creating: RwSignal::new(false),
        }
    }

    /// Create a new list and navigate to it as its first user. On failure the
    /// busy flag is cleared so the action can simply be retried.
    pub async fn create_list(&self) {
        self.creating.set(true);
        let result = self.api.create_list().await;
        self.creating.set(false);
        match result {
            Ok(created) => {
                self.shell
                    .navigate(&format!("/{}/{}", created.list_id, created.user_id));
            }
            Err(_) => self.shell.alert(CREATE_FAILED),
        }
    }
}
