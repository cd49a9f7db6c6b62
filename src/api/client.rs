//! HTTP Transport Client
//!
//! Thin wrapper over reqwest: fixed base URL, fixed timeout, and one central
//! place where every failure mode collapses into an `ApiError`.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::REQUEST_TIMEOUT;
use crate::error::ApiError;

/// Error body shape used by the backend: `{ "error": "..." }`.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// One client per process; cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::GET, path)).await
    }

    /// POST without a body.
    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::POST, path)).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::PUT, path).json(body)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .timeout(REQUEST_TIMEOUT)
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|err| {
            if err.is_builder() {
                ApiError::Request
            } else {
                ApiError::Network
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|_| ApiError::Request);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "サーバーエラーが発生しました".to_string());
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
