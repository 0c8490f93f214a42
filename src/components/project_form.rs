//! New Project Form Component
//!
//! Modal form; on success the project is appended and selected.

use leptos::prelude::*;
use leptos::task::spawn_local;

use kanbanflow_core::api::ProjectApi;
use kanbanflow_core::dashboard::ProjectForm;
use kanbanflow_core::DashboardError;

use crate::api::use_api;
use crate::store::{store_add_project, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn ProjectFormModal() -> impl IntoView {
    let api = use_api();
    let store = use_dashboard_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal(None::<DashboardError>);
    let (submitting, set_submitting) = signal(false);

    let close = move || {
        set_name.set(String::new());
        set_description.set(String::new());
        set_error.set(None);
        store.show_project_form().set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = ProjectForm { name: name.get_untracked(), description: description.get_untracked() };
        let new_project = match form.validate() {
            Ok(project) => project,
            Err(e) => {
                set_error.set(Some(e.into()));
                return;
            }
        };

        let api = api.clone();
        set_submitting.set(true);
        spawn_local(async move {
            let result = api.create_project(&new_project).await;
            set_submitting.set(false);
            match result {
                Ok(project) => {
                    log::info!("[API] Created project {} ({})", project.name, project.id);
                    store_add_project(&store, project);
                    close();
                }
                Err(e) => {
                    log::error!("[API] Failed to create project: {}", e);
                    set_error.set(Some(DashboardError::CreateProjectFailed));
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>"New Project"</h3>
                <form on:submit=on_submit>
                    <div class="form-field">
                        <label for="project-name">"Project name"</label>
                        <input
                            id="project-name"
                            type="text"
                            placeholder="e.g. Website redesign"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="project-description">"Description (optional)"</label>
                        <textarea
                            id="project-description"
                            rows="3"
                            placeholder="What is this project about?"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    {move || error.get().map(|e| view! { <p class="form-error">{e.to_string()}</p> })}

                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                            "Create Project"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
