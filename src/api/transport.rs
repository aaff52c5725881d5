//! HTTP Transport
//!
//! The single seam between the form and the network.

use reqwest::{Client, StatusCode, Url};

use crate::error::ApiError;

/// Status and body text of a finished HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Standard reason phrase for the status, empty if unknown
    pub fn reason_phrase(&self) -> &'static str {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("")
    }
}

/// Issues GET requests. Futures are not `Send`; everything runs on the
/// browser event loop.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn get(&self, url: &Url) -> Result<HttpReply, ApiError>;
}

/// Transport backed by `reqwest` (browser `fetch` on wasm32).
///
/// No timeout is configured; the platform default applies.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpReply, ApiError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpReply { status: 200, body: String::new() }.is_success());
        assert!(HttpReply { status: 204, body: String::new() }.is_success());
        assert!(!HttpReply { status: 304, body: String::new() }.is_success());
        assert!(!HttpReply { status: 404, body: String::new() }.is_success());
    }

    #[test]
    fn test_reason_phrase() {
        assert_eq!(HttpReply { status: 404, body: String::new() }.reason_phrase(), "Not Found");
        assert_eq!(HttpReply { status: 599, body: String::new() }.reason_phrase(), "");
    }
}
