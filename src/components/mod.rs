//! UI Components
//!
//! Leptos components for the recommendation page.

mod query_form;
mod results_panel;
mod status_line;

pub use query_form::QueryForm;
pub use results_panel::ResultsPanel;
pub use status_line::StatusLine;
