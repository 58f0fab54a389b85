//! Request and response bodies exchanged with the CODEFLIX backend.

mod auth;
mod upload;

pub use auth::{LoginRequest, LoginResponse};
pub use upload::{UploadRequest, UploadTarget};
