//! Results Panel Component
//!
//! Ranked recommendation list and the raw response. Rendered only when
//! the latest submission succeeded.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::render::ResultsView;

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.view.with(|m| m.results.clone()).map(results_section)}
    }
}

fn results_section(results: ResultsView) -> impl IntoView {
    let ResultsView { title, meta, entries, raw_json } = results;

    view! {
        <section class="results" id="results">
            <div class="results-header">
                <div class="results-title">{title}</div>
                <div class="results-meta">{meta}</div>
            </div>

            <ul class="recommendations" id="recommendations-list">
                {entries.into_iter().map(|entry| view! { <li>{entry}</li> }).collect_view()}
            </ul>

            <div class="raw-json">
                <strong>"Raw response"</strong>
                <pre id="raw-json">{raw_json}</pre>
            </div>
        </section>
    }
}
