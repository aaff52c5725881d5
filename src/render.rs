//! Render Model
//!
//! Pure projection of [`FormState`] into the text the page shows.
//! Components read this instead of poking at the state directly.

use crate::models::Recommendation;
use crate::state::{FormState, Lifecycle, Severity};

/// Entry shown in place of an empty list
pub const EMPTY_LIST_PLACEHOLDER: &str = "No recommendations returned.";

pub const SUBMIT_LABEL: &str = "Get Recommendations";
pub const SUBMIT_LABEL_BUSY: &str = "Querying…";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub status: String,
    pub severity: Severity,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub results: Option<ResultsView>,
}

impl RenderModel {
    /// CSS class of the status line
    pub fn status_class(&self) -> String {
        format!("status {}", self.severity.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    /// "Recommendations for <id>"
    pub title: String,
    /// "Returned <n> items"
    pub meta: String,
    /// Rank-ordered entries, or the single placeholder
    pub entries: Vec<String>,
    /// Pretty-printed response
    pub raw_json: String,
}

impl ResultsView {
    pub fn from_recommendation(rec: &Recommendation) -> Self {
        let items = rec.items();
        let entries = if items.is_empty() {
            vec![EMPTY_LIST_PLACEHOLDER.to_string()]
        } else {
            items
                .iter()
                .enumerate()
                .map(|(idx, item)| format!("#{} {}", idx + 1, item))
                .collect()
        };

        Self {
            title: format!("Recommendations for {}", rec.subject_id()),
            meta: format!("Returned {} items", items.len()),
            entries,
            raw_json: pretty_json(rec),
        }
    }
}

fn pretty_json(rec: &Recommendation) -> String {
    // Serializing a Value cannot fail
    serde_json::to_string_pretty(&rec.raw).unwrap_or_else(|_| rec.raw.to_string())
}

/// Project the state into what the page shows.
///
/// Results appear only for a succeeded submission; idle, in-flight and
/// failed states show the status line alone.
pub fn render(state: &FormState) -> RenderModel {
    let busy = state.is_in_flight();
    RenderModel {
        status: state.status().to_string(),
        severity: state.severity(),
        submit_label: if busy { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL },
        submit_disabled: busy,
        results: match state.lifecycle() {
            Lifecycle::Succeeded => state.result().map(ResultsView::from_recommendation),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitOutcome;
    use serde_json::{json, Value};

    fn settled(body: Value) -> FormState {
        let mut state = FormState::new();
        state.update_identifier("U1");
        let pending = state.begin_submit().unwrap();
        let payload = Recommendation::from_value(body).unwrap();
        state.settle(pending.ticket, SubmitOutcome::Success { payload });
        state
    }

    #[test]
    fn test_idle_renders_status_only() {
        let model = render(&FormState::new());
        assert_eq!(model.status, "");
        assert_eq!(model.status_class(), "status info");
        assert_eq!(model.submit_label, SUBMIT_LABEL);
        assert!(!model.submit_disabled);
        assert!(model.results.is_none());
    }

    #[test]
    fn test_success_round_trip() {
        let body = json!({ "user_id": "U1", "recommended_items": ["B1", "B2"] });
        let model = render(&settled(body.clone()));

        assert_eq!(model.status, "Done.");
        let results = model.results.unwrap();
        assert_eq!(results.title, "Recommendations for U1");
        assert_eq!(results.meta, "Returned 2 items");
        assert_eq!(results.entries, vec!["#1 B1", "#2 B2"]);
        assert_eq!(serde_json::from_str::<Value>(&results.raw_json).unwrap(), body);
        assert_eq!(
            results.raw_json,
            "{\n  \"user_id\": \"U1\",\n  \"recommended_items\": [\n    \"B1\",\n    \"B2\"\n  ]\n}"
        );
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let model = render(&settled(json!({ "user_id": "U1", "recommended_items": [] })));
        let results = model.results.unwrap();
        assert_eq!(results.meta, "Returned 0 items");
        assert_eq!(results.entries, vec![EMPTY_LIST_PLACEHOLDER]);
    }

    #[test]
    fn test_http_error_renders_no_results() {
        let mut state = settled(json!({ "user_id": "U1", "recommended_items": ["B1"] }));
        let pending = state.begin_submit().unwrap();
        state.settle(pending.ticket, SubmitOutcome::HttpError { code: 404, body: "user not found".to_string() });

        let model = render(&state);
        assert_eq!(model.severity, Severity::Error);
        assert_eq!(model.status_class(), "status error");
        assert!(model.status.contains("404"));
        assert!(model.status.contains("user not found"));
        assert!(model.results.is_none());
    }

    #[test]
    fn test_in_flight_hides_previous_results() {
        let mut state = settled(json!({ "user_id": "U1", "recommended_items": ["B1"] }));
        assert!(render(&state).results.is_some());

        state.begin_submit().unwrap();
        let model = render(&state);
        assert!(model.results.is_none());
        assert!(model.submit_disabled);
        assert_eq!(model.submit_label, SUBMIT_LABEL_BUSY);
        assert_eq!(model.status, "Calling /recommend…");
    }

    #[test]
    fn test_unknown_transport_error() {
        let mut state = FormState::new();
        state.update_identifier("U1");
        let pending = state.begin_submit().unwrap();
        state.settle(pending.ticket, SubmitOutcome::TransportError { message: String::new() });

        let model = render(&state);
        assert_eq!(model.status, "Unknown error calling API.");
        assert_eq!(model.severity, Severity::Error);
        assert!(!model.submit_disabled);
    }
}
