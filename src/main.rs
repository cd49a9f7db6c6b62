//! Shared ToDo Frontend Entry Point

use leptos::prelude::*;
use shared_todo_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
