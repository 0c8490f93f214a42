//! New Task Form Component
//!
//! Modal form creating a pending task in the selected project.

use leptos::prelude::*;
use leptos::task::spawn_local;

use kanbanflow_core::api::TaskApi;
use kanbanflow_core::dashboard::TaskForm;
use kanbanflow_core::domain::Priority;
use kanbanflow_core::DashboardError;

use crate::api::use_api;
use crate::store::{store_bump_reload, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn TaskFormModal() -> impl IntoView {
    let api = use_api();
    let store = use_dashboard_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (error, set_error) = signal(None::<DashboardError>);
    let (submitting, set_submitting) = signal(false);

    let close = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_priority.set(Priority::default());
        set_error.set(None);
        store.show_task_form().set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(project) = store.selected_project().get_untracked() else {
            set_error.set(Some(DashboardError::NoProjectSelected));
            return;
        };
        let form = TaskForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: priority.get_untracked(),
        };
        let new_task = match form.validate(project) {
            Ok(task) => task,
            Err(e) => {
                set_error.set(Some(e.into()));
                return;
            }
        };

        let api = api.clone();
        set_submitting.set(true);
        spawn_local(async move {
            let result = api.create_task(&new_task).await;
            set_submitting.set(false);
            match result {
                Ok(task) => {
                    log::info!("[API] Created task {} in project {}", task.id, task.project);
                    close();
                    store_bump_reload(&store);
                }
                Err(e) => {
                    log::error!("[API] Failed to create task: {}", e);
                    set_error.set(Some(DashboardError::CreateTaskFailed));
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>"New Task"</h3>
                <form on:submit=on_submit>
                    <div class="form-field">
                        <label for="task-title">"Title"</label>
                        <input
                            id="task-title"
                            type="text"
                            placeholder="e.g. Implement login"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="task-description">"Description (optional)"</label>
                        <textarea
                            id="task-description"
                            rows="3"
                            placeholder="Details of the task..."
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-field">
                        <label for="task-priority">"Priority"</label>
                        <select
                            id="task-priority"
                            prop:value=move || priority.get().as_str()
                            on:change=move |ev| set_priority.set(Priority::from_str(&event_target_value(&ev)))
                        >
                            {Priority::ALL.into_iter().map(|p| view! {
                                <option value=p.as_str()>{p.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    {move || error.get().map(|e| view! { <p class="form-error">{e.to_string()}</p> })}

                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                            "Create Task"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
