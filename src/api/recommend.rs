//! Recommend Endpoint
//!
//! `GET {base}/recommend?user_id=..&k=..` and classification of its result.

use reqwest::Url;
use serde_json::Value;

use super::transport::HttpTransport;
use crate::config::ApiConfig;
use crate::error::{ApiError, SubmitOutcome};
use crate::models::Recommendation;

/// Build the request URL; parameters are percent-encoded
pub fn request_url(config: &ApiConfig, user_id: &str, k: u32) -> Result<Url, ApiError> {
    let k = k.to_string();
    Url::parse_with_params(&config.endpoint(), [("user_id", user_id), ("k", k.as_str())])
        .map_err(|e| ApiError::Other {
            message: format!("Invalid API URL {}: {}", config.endpoint(), e),
        })
}

/// Fetch recommendations for one user
pub async fn get_recommendations<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    user_id: &str,
    k: u32,
) -> Result<Recommendation, ApiError> {
    let url = request_url(config, user_id, k)?;
    log::info!(target: "api", "GET {}", url);

    let reply = transport.get(&url).await?;
    if !reply.is_success() {
        let detail = if reply.body.is_empty() {
            reply.reason_phrase().to_string()
        } else {
            reply.body
        };
        return Err(ApiError::Http { status: reply.status, detail });
    }

    let raw: Value = serde_json::from_str(&reply.body)?;
    Ok(Recommendation::from_value(raw)?)
}

/// Run one request and fold every result into a [`SubmitOutcome`]
pub async fn fetch_recommendations<T: HttpTransport>(
    transport: &T,
    config: &ApiConfig,
    user_id: &str,
    k: u32,
) -> SubmitOutcome {
    match get_recommendations(transport, config, user_id, k).await {
        Ok(payload) => {
            log::info!(target: "api", "Received {} items for {}", payload.items().len(), payload.subject_id());
            SubmitOutcome::Success { payload }
        }
        Err(err) => {
            log::error!(target: "api", "{:?}", err);
            SubmitOutcome::from_error(&err)
        }
    }
}
