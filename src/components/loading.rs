//! Loading Placeholder

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into, default = "Loading...".to_string())] message: String) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner"></div>
            <p class="loading-text">{message}</p>
        </div>
    }
}
