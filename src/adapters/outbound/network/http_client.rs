use crate::shared::error::ShellError;
use crate::shared::Result;
use anyhow::Context;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builds the HTTP client shared by one repository
///
/// No retry and no default headers beyond the user agent.
pub(super) fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let user_agent = format!("postboard/{}", env!("CARGO_PKG_VERSION"));
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .context("Failed to build HTTP client")?;
    Ok(client)
}

/// Parses an endpoint URL, accepting only absolute http and https URLs
pub fn parse_endpoint(url: &str) -> std::result::Result<Url, ShellError> {
    let invalid = |reason: String| ShellError::InvalidEndpoint {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

/// Issues one GET and decodes the JSON body
///
/// # Errors
/// - Transport failures and timeouts, with the endpoint as context
/// - `ShellError::HttpStatus` for any non-2xx status
/// - `ShellError::MalformedPayload` when the body does not decode into `T`
pub(super) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &Url,
) -> Result<T> {
    tracing::debug!(%url, "GET");

    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ShellError::HttpStatus {
            endpoint: url.to_string(),
            status: status.as_u16(),
        }
        .into());
    }

    let body = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;
    tracing::debug!(%url, %status, bytes = body.len(), "response received");

    serde_json::from_slice(&body).map_err(|e| {
        ShellError::MalformedPayload {
            endpoint: url.to_string(),
            details: e.to_string(),
        }
        .into()
    })
}
