//! Per-event dispatch: render, build, POST, surface rejections.

use anyhow::{Context, Result};
use tracing::error;

use crate::client::build_client;
use crate::color::select_color;
use crate::config::NotifierConfig;
use crate::event::LogEvent;
use crate::payload::NotificationPayload;
use crate::render::render_message;

/// Sends one HipChat room notification per log event.
///
/// Stateless across dispatches: every call builds its own client and
/// payload, and the client is dropped when the call returns on every
/// exit path.
pub struct HipChatNotifier {
    config: NotifierConfig,
}

impl HipChatNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Dispatch one event.
    ///
    /// A non-2xx reply is logged once with its full diagnostic context
    /// (uri, status code, status message, response body) and swallowed;
    /// the call still resolves `Ok`. Only transport-level failures
    /// (DNS, connect, TLS, timeout) reach the caller as `Err`. No
    /// retries, no queueing.
    pub async fn dispatch(&self, event: &LogEvent) -> Result<()> {
        let (client, base_url) = build_client(&self.config)?;

        let message = render_message(&self.config, event);
        let color = select_color(self.config.color.as_deref(), event.level);
        let payload = NotificationPayload::new(color, message, self.config.notify);

        let url = format!(
            "{}room/{}/notification?auth_token={}",
            base_url, self.config.room_id, self.config.token
        );

        let response = client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("failed to send HipChat notification request")?;

        if !response.status().is_success() {
            let status = response.status();
            let uri = response.url().clone();
            let body = response
                .text()
                .await
                .context("failed to read HipChat error response body")?;
            error!(
                uri = %uri,
                status_code = status.as_u16(),
                status_message = status.canonical_reason().unwrap_or("unknown"),
                "could not send HipChat message, server replied {} {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown"),
                body
            );
        }

        Ok(())
    }

    /// Dispatch one event, blocking the calling thread until delivery
    /// has fully resolved. For hosts that invoke the notifier from a
    /// synchronous, single-threaded call path with no runtime of their
    /// own; per-event ordering follows from the call blocking.
    ///
    /// Must not be called from within an async runtime - use
    /// [`Self::dispatch`] there.
    pub fn dispatch_blocking(&self, event: &LogEvent) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to build dispatch runtime")?;
        runtime.block_on(self.dispatch(event))
    }
}
