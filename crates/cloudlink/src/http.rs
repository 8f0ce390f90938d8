//! HTTP request dispatch to the Cloudlink service
//!
//! Every operation is one JSON POST to `/{cloud}/{method}`. The client's
//! `auth` credentials are injected into the body before it is serialized,
//! and the response envelope `{status, data, error?}` is mapped to either
//! the `data` payload or an API error.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::error::{CloudlinkError, Result};

/// Fallback message when the service reports failure without an `error` field
const UNKNOWN_ERROR: &str = "Unknown error";

/// Wire response envelope from the Cloudlink service
///
/// `status: true` means `data` carries the result; anything else is a
/// failure described by `error`. No other states exist.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    status: bool,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    error: Option<String>,
}

/// Build the request URL for a method call
///
/// `cloud` is enum-validated and `method` comes from the fixed operation
/// table, so inserting both verbatim cannot corrupt the path.
pub(crate) fn endpoint_url(config: &ClientConfig, method: &str) -> String {
    let scheme = if config.server.secure { "https" } else { "http" };
    format!(
        "{}://{}:{}/{}/{}",
        scheme, config.server.host, config.server.port, config.cloud, method
    )
}

/// Send one request to the service and map its response envelope
///
/// The caller's `params` may already contain an `auth` key; the client
/// configuration always wins.
pub(crate) async fn dispatch(
    client: &reqwest::Client,
    config: &ClientConfig,
    method: &str,
    params: Map<String, Value>,
) -> Result<Value> {
    let mut body = params;
    body.insert("auth".to_string(), config.auth.clone());
    let body = serde_json::to_vec(&body)?;

    let url = endpoint_url(config, method);
    tracing::debug!("POST {} ({} bytes)", url, body.len());

    let response = client
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    // Buffer the whole body before parsing; the envelope is one document
    let text = response.text().await?;
    let envelope: ResponseEnvelope =
        serde_json::from_str(&text).map_err(CloudlinkError::MalformedResponse)?;

    if envelope.status {
        Ok(envelope.data)
    } else {
        let message = envelope.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        tracing::debug!("{} failed: {}", method, message);
        Err(CloudlinkError::ApiError(message))
    }
}
