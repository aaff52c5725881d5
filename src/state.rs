//! Form State
//!
//! The single state record behind the page. Every mutation goes through
//! the methods below; the components only read it and call them.

use crate::error::SubmitOutcome;
use crate::models::{clamp_result_count, parse_result_count, QueryInput, Recommendation};

/// Status text while a request is outstanding
pub const IN_FLIGHT_MESSAGE: &str = "Calling /recommend…";
/// Status text after a successful request
pub const DONE_MESSAGE: &str = "Done.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

/// Identifies one submission; only the newest ticket may settle the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Everything the network call needs, captured at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub ticket: Ticket,
    pub user_id: String,
    pub k: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    input: QueryInput,
    lifecycle: Lifecycle,
    status: String,
    severity: Severity,
    result: Option<Recommendation>,
    /// Ticket number of the most recent submission
    generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &QueryInput {
        &self.input
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Result of the latest submission, present only when it succeeded
    pub fn result(&self) -> Option<&Recommendation> {
        self.result.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.lifecycle == Lifecycle::InFlight
    }

    pub fn update_identifier(&mut self, text: impl Into<String>) {
        self.input.identifier = text.into();
    }

    pub fn update_result_count(&mut self, n: i64) {
        self.input.result_count = clamp_result_count(n);
    }

    /// Update the count from the raw text of the number field
    pub fn update_result_count_text(&mut self, raw: &str) {
        self.update_result_count(i64::from(parse_result_count(raw)));
    }

    /// Start a submission.
    ///
    /// Any outstanding request is superseded. A blank identifier fails the
    /// form immediately and returns `None`; no request must be made.
    /// Otherwise the previous result is cleared and the query to send is
    /// returned.
    pub fn begin_submit(&mut self) -> Option<PendingQuery> {
        self.generation += 1;
        let Some(user_id) = self.input.trimmed_identifier().map(str::to_string) else {
            self.apply(SubmitOutcome::Empty);
            return None;
        };

        self.lifecycle = Lifecycle::InFlight;
        self.status = IN_FLIGHT_MESSAGE.to_string();
        self.severity = Severity::Info;
        self.result = None;

        Some(PendingQuery {
            ticket: Ticket(self.generation),
            user_id,
            k: self.input.result_count,
        })
    }

    /// Finish a submission. Outcomes of superseded submissions are dropped;
    /// returns whether the outcome was applied.
    pub fn settle(&mut self, ticket: Ticket, outcome: SubmitOutcome) -> bool {
        if ticket.0 != self.generation {
            log::warn!(target: "state", "Ignoring response for superseded submission #{}", ticket.0);
            return false;
        }
        self.apply(outcome);
        true
    }

    fn apply(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Success { payload } => {
                self.lifecycle = Lifecycle::Succeeded;
                self.status = DONE_MESSAGE.to_string();
                self.severity = Severity::Info;
                self.result = Some(payload);
            }
            failed => {
                self.lifecycle = Lifecycle::Failed;
                self.status = failed.error_message().unwrap_or_default();
                self.severity = Severity::Error;
                self.result = None;
            }
        }
    }
}
