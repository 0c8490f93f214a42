//! Project Selector Component

use leptos::prelude::*;

use crate::store::{store_selected_project, use_dashboard_store, DashboardStateStoreFields};

/// Dropdown switching the active project, with its description beside it
#[component]
pub fn ProjectSelector() -> impl IntoView {
    let store = use_dashboard_store();

    let selected_value = move || store.selected_project().get().map(|id| id.to_string()).unwrap_or_default();
    let description = move || {
        store_selected_project(&store)
            .map(|p| p.description)
            .filter(|d| !d.is_empty())
    };

    view! {
        <div class="project-selector">
            <label for="project-select">"Project:"</label>
            <select
                id="project-select"
                prop:value=selected_value
                on:change=move |ev| {
                    let id = event_target_value(&ev).parse().ok();
                    store.selected_project().set(id);
                }
            >
                <For
                    each=move || store.projects().get()
                    key=|project| (project.id, project.name.clone())
                    children=move |project| view! {
                        <option value=project.id.to_string()>{project.name}</option>
                    }
                />
            </select>
            {move || description().map(|text| view! { <p class="project-description">{text}</p> })}
        </div>
    }
}
