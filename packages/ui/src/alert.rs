//! Blocking user notices.

/// Show `message` to the user.
///
/// Uses the browser's native `alert()` on the web; elsewhere it is only logged.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("alert: {}", message);
    }
}

