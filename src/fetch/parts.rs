// src/fetch/parts.rs
use reqwest::Client;
use tracing::{info, warn};
use url::Url;

/// GET one part file and return its body text.
///
/// Failures stay local to the part: a transport error, a non-success
/// status, or an unreadable body is logged and answered with `None` so the
/// caller can move on to the next part. No retries.
pub async fn fetch_part(client: &Client, url: &Url) -> Option<String> {
    info!(%url, "requesting part");
    let resp = match client.get(url.clone()).send().await {
        Ok(resp) => resp,
        Err(err) => {
            warn!(%url, error = %err, "request failed");
            return None;
        }
    };
    if !resp.status().is_success() {
        warn!(%url, status = %resp.status(), "failed to download part");
        return None;
    }
    match resp.text().await {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(%url, error = %err, "reading response body failed");
            None
        }
    }
}
