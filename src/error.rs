//! Errors and Submission Outcomes

use crate::models::Recommendation;

/// Message shown when an error carries no text of its own
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error calling API.";

/// Message shown when the identifier field is blank
pub const EMPTY_IDENTIFIER_MESSAGE: &str = "Please enter a user ID.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx status; `detail` is the body text or the reason phrase
    #[error("API error ({status}): {detail}")]
    Http { status: u16, detail: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    /// Anything else, e.g. an unparsable endpoint URL
    #[error("{message}")]
    Other { message: String },
}

/// How one submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Identifier was blank; nothing was sent
    Empty,
    /// Server answered with a non-success status
    HttpError { code: u16, body: String },
    /// Request never completed or the body could not be decoded
    TransportError { message: String },
    Success { payload: Recommendation },
}

impl SubmitOutcome {
    /// Classify a failed request
    pub fn from_error(err: &ApiError) -> Self {
        match err {
            ApiError::Http { status, detail } => SubmitOutcome::HttpError {
                code: *status,
                body: detail.clone(),
            },
            other => SubmitOutcome::TransportError { message: other.to_string() },
        }
    }

    /// Status text for a failed outcome, `None` on success
    pub fn error_message(&self) -> Option<String> {
        match self {
            SubmitOutcome::Empty => Some(EMPTY_IDENTIFIER_MESSAGE.to_string()),
            SubmitOutcome::HttpError { code, body } => Some(
                ApiError::Http { status: *code, detail: body.clone() }.to_string(),
            ),
            SubmitOutcome::TransportError { message } => {
                if message.trim().is_empty() {
                    Some(UNKNOWN_ERROR_MESSAGE.to_string())
                } else {
                    Some(message.clone())
                }
            }
            SubmitOutcome::Success { .. } => None,
        }
    }
}
