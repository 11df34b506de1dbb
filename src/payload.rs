//! Wire payload for the HipChat room notification API.

use serde::{Deserialize, Serialize};

/// JSON body of `POST room/{id}/notification`.
///
/// Built fresh per dispatch and discarded once the request completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Background color for the message.
    pub color: String,
    /// Rendered message text (HTML-ish).
    pub message: String,
    /// Whether the message should trigger room notifications.
    pub notify: bool,
}

impl NotificationPayload {
    pub fn new(color: String, message: String, notify: bool) -> Self {
        Self {
            color,
            message,
            notify,
        }
    }
}
