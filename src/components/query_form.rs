//! Query Form Component
//!
//! User ID and Top K inputs plus the submit button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{MAX_RESULT_COUNT, MIN_RESULT_COUNT};

/// Form that collects the query and submits it
#[component]
pub fn QueryForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form id="recommend-form" on:submit=on_submit>
            <div>
                <label for="user-id">"User ID"</label>
                <input
                    id="user-id"
                    type="text"
                    placeholder="e.g. A30TK6U7DNS82R"
                    required
                    prop:value=move || ctx.state.with(|s| s.input().identifier.clone())
                    on:input=move |ev| ctx.set_identifier(event_target_value(&ev))
                />
            </div>

            <div>
                <label for="k">"Top K"</label>
                <input
                    id="k"
                    type="number"
                    min=MIN_RESULT_COUNT.to_string()
                    max=MAX_RESULT_COUNT.to_string()
                    required
                    prop:value=move || ctx.state.with(|s| s.input().result_count.to_string())
                    on:input=move |ev| ctx.set_result_count(&event_target_value(&ev))
                />
            </div>

            <div>
                <button
                    id="submit-btn"
                    type="submit"
                    disabled=move || ctx.view.with(|m| m.submit_disabled)
                >
                    <span id="btn-label">{move || ctx.view.with(|m| m.submit_label)}</span>
                </button>
            </div>
        </form>
    }
}
