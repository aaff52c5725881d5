//! Recommendation Frontend App
//!
//! Single view: query form, status line, results.

use leptos::prelude::*;

use crate::components::{QueryForm, ResultsPanel, StatusLine};
use crate::config::ApiConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(ApiConfig::default()));

    view! {
        <div class="page">
            <div class="app">
                <header class="app-header">
                    <div>
                        <div class="app-title">"Book Recommendation"</div>
                        <div class="app-subtitle">
                            "Query " <code>"/recommend"</code> " with a user id and " <code>"k"</code> "."
                        </div>
                    </div>
                    <span class="pill">"Demo"</span>
                </header>

                <QueryForm />
                <StatusLine />
                <ResultsPanel />
            </div>
        </div>
    }
}
