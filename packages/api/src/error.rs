//! Error taxonomy for backend calls.
//!
//! | Variant | Cause |
//! |---------|-------|
//! | [`ApiError::Transport`] | The request never got a response (DNS, offline, CORS, reset). |
//! | [`ApiError::Unauthorized`] | 401 or 403: the session is missing, expired or lacks rights. |
//! | [`ApiError::Status`] | Any other non-2xx status; `message` comes from the body's `message` field when present. |
//! | [`ApiError::Rejected`] | 2xx, but the body flags a domain failure (e.g. login `count != 1`). |
//! | [`ApiError::Decode`] | 2xx with a body of an unexpected shape. |

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("session expired or access denied (HTTP {status})")]
    Unauthorized { status: u16 },
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e)
        }
    }
}

impl From<store::UnreadShapeError> for ApiError {
    fn from(e: store::UnreadShapeError) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text suitable for an alert or inline error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Could not reach the server. Please try again.".to_string(),
            ApiError::Unauthorized { .. } => "Your session has expired. Please log in again.".to_string(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Rejected(message) => message.clone(),
            ApiError::Decode(_) => "The server returned an unexpected response.".to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turn a non-2xx status and its body into an [`ApiError`].
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    if status == 401 || status == 403 {
        return ApiError::Unauthorized { status };
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    ApiError::Status { status, message }
}
