//! # Login payloads
//!
//! The login endpoint reports success through a `count` field in the body
//! rather than the HTTP status: `count == 1` means the credentials matched and
//! the body carries the user and a bearer token; anything else is a rejection
//! whose reason may be in `message`.

use serde::{Deserialize, Serialize};
use store::SessionUser;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn is_success(&self) -> bool {
        self.count == 1
    }
}
