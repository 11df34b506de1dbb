//! HTTP client construction for the HipChat API.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{tls, Client, Proxy};

use crate::config::NotifierConfig;

/// Build the client for one dispatch, plus the resolved API base URL
/// (always slash-terminated).
///
/// `Accept` is pinned to `application/json` for every request the
/// client makes. HipChat Server rejects TLS 1.0, so negotiation is
/// restricted to TLS 1.1 and 1.2 at construction time. When a proxy
/// server is configured all traffic is routed through it; proxy
/// credentials, if any, travel embedded in the proxy URL.
pub fn build_client(config: &NotifierConfig) -> Result<(Client, String)> {
    let base_url = config.resolved_hipchat_base_url();

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder()
        .default_headers(headers)
        .min_tls_version(tls::Version::TLS_1_1)
        .max_tls_version(tls::Version::TLS_1_2);

    if let Some(proxy) = config
        .proxy_server
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        builder = builder.proxy(Proxy::all(proxy).context("invalid proxy server address")?);
    }

    let client = builder.build().context("failed to build HTTP client")?;
    Ok((client, base_url))
}
