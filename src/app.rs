//! Application Root
//!
//! Two routes: the creation screen at `/` and the per-user list detail at
//! `/:list_id/:user_id` (the shape invite links take).

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Home, TodoListPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"ページが見つかりません"</p> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/:list_id/:user_id") view=TodoListPage/>
                </Routes>
            </main>
        </Router>
    }
}
