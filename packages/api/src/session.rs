//! # Session flows
//!
//! The page-level sequences that move the [`SessionStore`] between states by
//! talking to the backend. UI components call these and only decide how to
//! show the outcome (alert, inline error, navigation).
//!
//! | Flow | Success | Failure |
//! |------|---------|---------|
//! | [`login`] | user + token stored, go to `/` | `ApiError::Rejected` with the backend's reason |
//! | [`logout`] | store cleared, go to `/` | backend errors are logged; the store is cleared anyway |
//! | [`gate_settings`] | stored user, or the one from `GET /api/user/me` | redirect to [`LOGIN_PATH`] |
//! | [`apply_role_upgrade`] | new token stored, profile re-fetched | error; the new token stays |
//! | [`handle_unauthorized`] | n/a | 401/403 clears the store and redirects to login |

use store::{Session, SessionStorage, SessionStore, SessionUser};

use crate::client::ApiClient;
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/auth/user/login";
pub const HOME_PATH: &str = "/";
pub const SETTINGS_PATH: &str = "/dashboard/settings";

/// Where the UI should go next, and what to tell the user on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub to: String,
    pub notice: Option<String>,
}

impl Navigation {
    pub fn to(path: &str) -> Self {
        Self {
            to: path.to_string(),
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

/// Outcome of opening a page that needs a logged-in user.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsGate {
    Ready(SessionUser),
    Redirect(Navigation),
}

/// Log in with email and password.
pub async fn login<S: SessionStorage>(
    client: &ApiClient,
    store: &SessionStore<S>,
    email: &str,
    password: &str,
) -> Result<Navigation, ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Rejected("Please enter your email and password.".to_string()));
    }

    let response = client.login(email, password).await?;
    if !response.is_success() {
        let reason = response
            .message
            .unwrap_or_else(|| "Invalid email or password.".to_string());
        return Err(ApiError::Rejected(reason));
    }
    let Some(user) = response.user else {
        return Err(ApiError::Decode("login succeeded without a user".to_string()));
    };

    let name = user.name.clone();
    match response.access_token {
        Some(token) => store.login(user, token).await,
        None => {
            tracing::warn!("login response carried no access token");
            store.set_user(user).await
        }
    };
    tracing::info!("logged in as {}", name);

    Ok(Navigation::to(HOME_PATH).with_notice(format!("Welcome, {name}!")))
}

/// Log out. The local session is always cleared, even if the backend call fails.
pub async fn logout<S: SessionStorage>(client: &ApiClient, store: &SessionStore<S>) -> Navigation {
    let session = store.snapshot();
    if let Err(e) = client.for_session(&session).logout().await {
        tracing::warn!("backend logout failed: {}", e);
    }
    store.clear_user().await;
    Navigation::to(HOME_PATH).with_notice("You have been logged out.")
}

/// Resolve the user for a page that requires one (dashboard settings).
pub async fn gate_settings<S: SessionStorage>(
    client: &ApiClient,
    store: &SessionStore<S>,
) -> SettingsGate {
    let session = store.snapshot();
    if let Some(user) = session.user.clone() {
        return SettingsGate::Ready(user);
    }

    match client.for_session(&session).me().await {
        Ok(Some(user)) => {
            store.set_user(user.clone()).await;
            SettingsGate::Ready(user)
        }
        Ok(None) => SettingsGate::Redirect(Navigation::to(LOGIN_PATH)),
        Err(e) => {
            tracing::warn!("fallback profile fetch failed: {}", e);
            let nav = handle_unauthorized(store, &e)
                .await
                .unwrap_or_else(|| Navigation::to(LOGIN_PATH));
            SettingsGate::Redirect(nav)
        }
    }
}

/// Store a freshly minted token (instructor upgrade) and reload the profile with it.
pub async fn apply_role_upgrade<S: SessionStorage>(
    client: &ApiClient,
    store: &SessionStore<S>,
    token: String,
) -> Result<Session, ApiError> {
    let session = store.set_access_token(token).await;
    match client.for_session(&session).me().await? {
        Some(user) => Ok(store.set_user(user).await),
        None => Err(ApiError::Rejected(
            "Profile could not be reloaded after the role change.".to_string(),
        )),
    }
}

/// Shared reaction to a failed page-level fetch.
///
/// Returns a redirect to the login page (after clearing the session) for
/// 401/403, and `None` for everything else.
pub async fn handle_unauthorized<S: SessionStorage>(
    store: &SessionStore<S>,
    error: &ApiError,
) -> Option<Navigation> {
    if !error.is_unauthorized() {
        return None;
    }
    store.clear_user().await;
    Some(Navigation::to(LOGIN_PATH).with_notice(error.user_message()))
}
