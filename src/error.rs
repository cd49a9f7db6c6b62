//! API Error Taxonomy
//!
//! Every transport failure is normalized into one of three kinds at the client
//! boundary, so the rest of the frontend only ever sees an `ApiError`.

use thiserror::Error;

/// Uniform error for all backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status and (usually) an error body.
    #[error("{status}: {message}")]
    Server { status: u16, message: String },
    /// Request went out but no response came back (network down, timeout).
    #[error("ネットワークエラー: サーバーに接続できません")]
    Network,
    /// The request never left the client, or the response body was unusable.
    #[error("リクエストエラーが発生しました")]
    Request,
}

impl ApiError {
    /// Whether the backend said the addressed list or user does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_render_status_and_message() {
        let err = ApiError::Server {
            status: 404,
            message: "User not found in this list".to_string(),
        };
        assert_eq!(err.to_string(), "404: User not found in this list");
        assert!(err.is_not_found());
    }

    #[test]
    fn only_404_counts_as_not_found() {
        let err = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(!ApiError::Network.is_not_found());
        assert!(!ApiError::Request.is_not_found());
    }

    #[test]
    fn fixed_messages_for_local_failures() {
        assert_eq!(
            ApiError::Network.to_string(),
            "ネットワークエラー: サーバーに接続できません"
        );
        assert_eq!(ApiError::Request.to_string(), "リクエストエラーが発生しました");
    }
}
