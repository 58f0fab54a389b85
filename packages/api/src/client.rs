//! HTTP client for the CODEFLIX REST backend.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use store::{CodeflixConfig, Page, PageQuery, Session, SessionUser};

use crate::error::{status_error, ApiError};
use crate::models::{LoginRequest, LoginResponse, UploadRequest, UploadTarget};

/// Thin wrapper around [`reqwest::Client`] that knows the backend base URL and
/// the current bearer token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            token: None,
        }
    }

    pub fn from_config(config: &CodeflixConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// A client authenticated as the given session.
    pub fn for_session(&self, session: &Session) -> Self {
        self.clone().with_token(session.access_token.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "backend returned an error status");
        Err(status_error(status.as_u16(), &body))
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::send(builder).await?;
        Ok(response.json::<T>().await?)
    }

    /// `POST /api/user/login`. Returns the raw body; see [`crate::session::login`]
    /// for the flow that interprets it.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        Self::send_json(self.request(Method::POST, "/api/user/login").json(&body)).await
    }

    /// `POST /api/user/logout`.
    pub async fn logout(&self) -> Result<(), ApiError> {
        Self::send(self.request(Method::POST, "/api/user/logout")).await?;
        Ok(())
    }

    /// `GET /api/user/me`. An empty body or `null` means no active session.
    pub async fn me(&self) -> Result<Option<SessionUser>, ApiError> {
        let response = Self::send(self.request(Method::GET, "/api/user/me")).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Option<SessionUser>>(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET /api/chat/unreadCount?userId=`.
    pub async fn unread_count(&self, user_id: u64) -> Result<u32, ApiError> {
        let builder = self
            .request(Method::GET, "/api/chat/unreadCount")
            .query(&[("userId", user_id)]);
        let body: Value = Self::send_json(builder).await?;
        Ok(store::parse_unread_count(&body)?)
    }

    /// `POST /api/upload-url`: ask the backend for a presigned upload destination.
    pub async fn upload_url(&self, file_name: &str, content_type: &str) -> Result<UploadTarget, ApiError> {
        let body = UploadRequest {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
        };
        Self::send_json(self.request(Method::POST, "/api/upload-url").json(&body)).await
    }

    /// PUT `bytes` straight to the presigned URL and return the public file URL.
    ///
    /// The presigned URL already carries its own authorization, so no bearer
    /// token is attached.
    pub async fn put_upload(
        &self,
        target: &UploadTarget,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ApiError> {
        let builder = self
            .http
            .put(&target.upload_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes);
        Self::send(builder).await?;
        Ok(target.file_url.clone())
    }

    /// `GET <path>?page=..&size=..&sort=..&<filters>` returning one [`Page`].
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &PageQuery,
    ) -> Result<Page<T>, ApiError> {
        let builder = self
            .request(Method::GET, path)
            .query(&query.to_query_pairs());
        Self::send_json(builder).await
    }
}
