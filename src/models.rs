//! Frontend Models
//!
//! Form input and the recommendation payload returned by the API.

use serde::Deserialize;
use serde_json::Value;

/// Smallest accepted result count
pub const MIN_RESULT_COUNT: u32 = 1;
/// Largest accepted result count
pub const MAX_RESULT_COUNT: u32 = 100;
/// Result count shown when the page loads
pub const DEFAULT_RESULT_COUNT: u32 = 10;

/// Values typed into the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInput {
    /// Raw identifier text, untrimmed
    pub identifier: String,
    /// Requested number of items (k)
    pub result_count: u32,
}

impl Default for QueryInput {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            result_count: DEFAULT_RESULT_COUNT,
        }
    }
}

impl QueryInput {
    /// Identifier with surrounding whitespace removed, `None` if blank
    pub fn trimmed_identifier(&self) -> Option<&str> {
        let trimmed = self.identifier.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Clamp a parsed result count into `[MIN_RESULT_COUNT, MAX_RESULT_COUNT]`.
///
/// Non-positive values map to the minimum.
pub fn clamp_result_count(n: i64) -> u32 {
    n.clamp(MIN_RESULT_COUNT as i64, MAX_RESULT_COUNT as i64) as u32
}

/// Parse the text of the number field. Anything that is not a number maps
/// to the minimum; fractions are truncated.
pub fn parse_result_count(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => clamp_result_count(n.trunc() as i64),
        _ => MIN_RESULT_COUNT,
    }
}

/// Success body of `GET /recommend` (matches API)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationResponse {
    pub user_id: String,
    /// Item ids in rank order
    pub recommended_items: Vec<String>,
}

/// A decoded response together with the exact JSON it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub response: RecommendationResponse,
    pub raw: Value,
}

impl Recommendation {
    /// Decode a JSON value, keeping the value for the raw dump
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let response = RecommendationResponse::deserialize(&raw)?;
        Ok(Self { response, raw })
    }

    pub fn subject_id(&self) -> &str {
        &self.response.user_id
    }

    pub fn items(&self) -> &[String] {
        &self.response.recommended_items
    }
}
