//! Client Configuration
//!
//! Endpoints are baked in at build time (the CSR analog of Vite env vars);
//! both fall back to the local development setup.

use std::time::Duration;

/// Upper bound for any single backend request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL of the backend REST API.
pub fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:8080/api")
}

/// Origin this frontend is served from, used to build shareable invite links.
pub fn client_origin() -> &'static str {
    option_env!("CLIENT_ORIGIN").unwrap_or("http://localhost:3000")
}

/// Join the client origin with the backend-relative invite path, verbatim.
pub fn invite_link(origin: &str, path: &str) -> String {
    format!("{origin}{path}")
}
