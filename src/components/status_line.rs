//! Status Line Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Status message, styled by severity
#[component]
pub fn StatusLine() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div id="status" class=move || ctx.view.with(|m| m.status_class())>
            {move || ctx.view.with(|m| m.status.clone())}
        </div>
    }
}
