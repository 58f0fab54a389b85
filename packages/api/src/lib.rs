//! # API crate: REST client and session flows for CODEFLIX
//!
//! The frontend does not own the backend contract; it only calls it. This
//! crate is everything the UI needs to do so.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`chat`] | [`chat::refresh_unread`]: fetch the unread count into an [`store::UnreadCounter`]. |
//! | [`client`] | [`ApiClient`]: base URL + bearer token over `reqwest`. Auth, chat unread count, presigned uploads, paged listings. |
//! | [`error`] | [`ApiError`]: transport, 401/403, other statuses, body-flag rejections, decode failures. |
//! | [`models`] | Request/response bodies (login, upload). |
//! | [`session`] | Flows that combine the client with a [`store::SessionStore`]: login, logout, the settings-page gate, role upgrade, invalid-session handling. |
//!
//! ## Endpoints used
//!
//! - `POST /api/user/login`, `POST /api/user/logout`, `GET /api/user/me`
//! - `GET /api/chat/unreadCount?userId=`
//! - `POST /api/upload-url`, then a direct `PUT` to the returned URL
//! - any listing path through [`ApiClient::fetch_page`]

pub mod chat;
pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use session::{Navigation, SettingsGate, HOME_PATH, LOGIN_PATH, SETTINGS_PATH};

pub use store::{Page, PageQuery, Session, SessionUser, UserPatch};
