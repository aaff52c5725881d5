//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ReqwestTransport};
use crate::config::ApiConfig;
use crate::render::{render, RenderModel};
use crate::state::FormState;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The form state record - read/write
    pub state: RwSignal<FormState>,
    /// What the page shows, derived from `state`
    pub view: Memo<RenderModel>,
    /// Endpoint settings
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        let state = RwSignal::new(FormState::new());
        Self {
            state,
            view: Memo::new(move |_| state.with(render)),
            config: StoredValue::new(config),
        }
    }

    pub fn set_identifier(&self, text: String) {
        self.state.update(|s| s.update_identifier(text));
    }

    pub fn set_result_count(&self, raw: &str) {
        self.state.update(|s| s.update_result_count_text(raw));
    }

    /// Validate, send the request and settle the form when it answers
    pub fn submit(&self) {
        let Some(pending) = self.state.try_update(|s| s.begin_submit()).flatten() else {
            log::warn!(target: "app", "Submit rejected: blank user ID");
            return;
        };
        let config = self.config.get_value();
        let state = self.state;

        log::info!(target: "app", "Submitting user_id={} k={}", pending.user_id, pending.k);
        spawn_local(async move {
            let transport = ReqwestTransport::default();
            let outcome = api::fetch_recommendations(&transport, &config, &pending.user_id, pending.k).await;
            state.update(|s| {
                s.settle(pending.ticket, outcome);
            });
        });
    }
}
