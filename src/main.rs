//! hipchat-notify CLI
//!
//! Reads one log event as JSON and relays it to a HipChat room. Stands
//! in for the host pipeline when scripting or testing dispatches.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use hipchat_notifier::{HipChatNotifier, LogEvent, NotifierConfig};

#[derive(Parser)]
#[command(name = "hipchat-notify")]
#[command(about = "Relay a structured log event to a HipChat room")]
#[command(version)]
struct Cli {
    /// Admin or notification token
    #[arg(long)]
    token: String,
    /// ID or name of the room to post to
    #[arg(long)]
    room: String,
    /// Base URL of the host UI, for event permalinks
    #[arg(long)]
    base_url: Option<String>,
    /// HipChat API base URL (default: https://api.hipchat.com/v2/)
    #[arg(long)]
    hipchat_base_url: Option<String>,
    /// Message template; {level}, {message} and {time} are substituted
    #[arg(long)]
    template: Option<String>,
    /// Background color override (default: auto from event level)
    #[arg(long)]
    color: Option<String>,
    /// Trigger room notifications (tab color, sound)
    #[arg(long)]
    notify: bool,
    /// Proxy server for the outbound request
    #[arg(long)]
    proxy_server: Option<String>,
    /// Event JSON file; reads stdin when omitted
    event: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log level via RUST_LOG, default info.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let raw = match &cli.event {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read event from stdin")?;
            buf
        }
    };
    let event: LogEvent = serde_json::from_str(&raw).context("invalid event JSON")?;

    let config = NotifierConfig {
        base_url: cli.base_url,
        hipchat_base_url: cli.hipchat_base_url,
        message_template: cli.template,
        token: cli.token,
        room_id: cli.room,
        color: cli.color,
        notify: cli.notify,
        proxy_server: cli.proxy_server,
    };

    HipChatNotifier::new(config).dispatch(&event).await
}
