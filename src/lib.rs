//! HipChat Notifier - relay structured log events to a HipChat room
//!
//! One dispatch per event: render the message from a template, pick a
//! background color from the event level, POST the notification to the
//! HipChat room API and surface rejections through tracing.

pub mod client;
pub mod color;
pub mod config;
pub mod dispatcher;
pub mod event;
pub mod payload;
pub mod render;

pub use client::build_client;
pub use color::{level_color, select_color};
pub use config::{NotifierConfig, DEFAULT_HIPCHAT_BASE_URL};
pub use dispatcher::HipChatNotifier;
pub use event::{Level, LogEvent};
pub use payload::NotificationPayload;
pub use render::{render_message, DEFAULT_TEMPLATE};
