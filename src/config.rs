//! Notifier configuration supplied by the host pipeline.

use serde::{Deserialize, Serialize};

/// HipChat API endpoint used when no override is configured.
pub const DEFAULT_HIPCHAT_BASE_URL: &str = "https://api.hipchat.com/v2/";

/// Configuration for one notifier instance, immutable per dispatch.
///
/// Only `token` and `room_id` are required; everything else falls back
/// to a default. Blank strings count as unset. Missing or bogus
/// credentials are not validated here - the HipChat API rejects them
/// and the rejection surfaces through the diagnostic log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Base URL of the host UI, used for generating permalinks back to
    /// events inside notification messages.
    pub base_url: Option<String>,
    /// HipChat API base URL. Defaults to [`DEFAULT_HIPCHAT_BASE_URL`].
    pub hipchat_base_url: Option<String>,
    /// Message template. `{level}`, `{message}` and `{time}` are
    /// substituted; see [`crate::render::DEFAULT_TEMPLATE`].
    pub message_template: Option<String>,
    /// Admin or notification token.
    pub token: String,
    /// ID or name of the room to post messages to.
    pub room_id: String,
    /// Background color override: "yellow", "red", "green", "purple",
    /// "gray" or "random". When unset the color follows the event level.
    pub color: Option<String>,
    /// Whether messages should trigger notifications for people in the
    /// room (tab color, sound).
    #[serde(default)]
    pub notify: bool,
    /// Proxy server for the outbound HTTPS request.
    pub proxy_server: Option<String>,
}

impl NotifierConfig {
    /// Create a config with the two required settings.
    pub fn new(token: impl Into<String>, room_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            room_id: room_id.into(),
            ..Default::default()
        }
    }

    /// Resolved HipChat API base URL, always with a trailing slash so
    /// request paths can be appended directly.
    pub fn resolved_hipchat_base_url(&self) -> String {
        let url = match self.hipchat_base_url.as_deref() {
            Some(u) if !u.trim().is_empty() => u.trim(),
            _ => DEFAULT_HIPCHAT_BASE_URL,
        };
        if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{}/", url)
        }
    }
}
