//! UI Shell Seam
//!
//! The two browser side effects controllers perform (alert, navigate) behind a
//! trait, so controller logic runs headless in tests.

use std::sync::Arc;

pub trait UiShell {
    /// Blocking user-facing message.
    fn alert(&self, message: &str);
    /// Client-side route change.
    fn navigate(&self, path: &str);
}

/// Real shell: `window.alert` plus the router's navigate function.
#[derive(Clone)]
pub struct BrowserShell {
    navigate: Arc<dyn Fn(&str) + Send + Sync>,
}

impl BrowserShell {
    pub fn new(navigate: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            navigate: Arc::new(navigate),
        }
    }
}

impl UiShell for BrowserShell {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path)
    }
}
