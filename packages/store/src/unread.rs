//! # Unread chat message count
//!
//! The header badge shows how many chat messages are unread for the current
//! user. The backend endpoint has been observed returning either a bare integer
//! or an object, so [`parse_unread_count`] is the one place that validates the
//! response shape:
//!
//! | Body | Result |
//! |------|--------|
//! | `5` | `Ok(5)` |
//! | `{"unreadCount": 5}` | `Ok(5)` (authoritative field) |
//! | `{"count": 5}` | `Ok(5)` (legacy field) |
//! | `-1`, `1.5`, `"5"`, `{}` | `Err(UnreadShapeError)` |
//!
//! [`UnreadCounter`] holds the last good value. Requests are sequenced so a slow
//! response cannot overwrite a newer one, and a failed request leaves the
//! previous value in place.

use serde_json::Value;

use crate::sequence::{RequestSequencer, RequestTicket};

/// The unread-count response did not have an accepted shape.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unexpected unread-count response: {0}")]
pub struct UnreadShapeError(pub String);

/// Validate an unread-count response body.
pub fn parse_unread_count(body: &Value) -> Result<u32, UnreadShapeError> {
    let number = match body {
        Value::Number(_) => body,
        Value::Object(map) => map
            .get("unreadCount")
            .or_else(|| map.get("count"))
            .ok_or_else(|| UnreadShapeError(body.to_string()))?,
        _ => return Err(UnreadShapeError(body.to_string())),
    };
    number
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| UnreadShapeError(body.to_string()))
}

/// Header-scoped unread counter.
#[derive(Clone, Debug, Default)]
pub struct UnreadCounter {
    count: u32,
    sequencer: RequestSequencer,
}

impl UnreadCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Register a new fetch. Any fetch begun earlier becomes stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.sequencer.next()
    }

    /// Apply the outcome of a fetch. Returns `true` when the count changed.
    pub fn complete<E: std::fmt::Display>(
        &mut self,
        ticket: RequestTicket,
        result: Result<u32, E>,
    ) -> bool {
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(
                generation = ticket.generation(),
                "discarding stale unread-count response"
            );
            return false;
        }
        match result {
            Ok(count) => {
                let changed = count != self.count;
                self.count = count;
                changed
            }
            Err(e) => {
                tracing::warn!("unread-count fetch failed, keeping {}: {}", self.count, e);
                false
            }
        }
    }

    /// Reset to zero (logout) and drop any in-flight fetch.
    pub fn reset(&mut self) {
        self.sequencer.cancel_all();
        self.count = 0;
    }
}
