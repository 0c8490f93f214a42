//! Dashboard Page
//!
//! Project list, creation forms and the board of the selected project.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use kanbanflow_core::api::ProjectApi;
use kanbanflow_core::dashboard::project_count_label;
use kanbanflow_core::DashboardError;

use crate::api::{use_api, ApiClient};
use crate::components::{KanbanBoard, Layout, Loading, ProjectFormModal, ProjectSelector, TaskFormModal};
use crate::store::{store_selected_project, store_set_projects, DashboardState, DashboardStateStoreFields, DashboardStore};

fn load_projects(store: DashboardStore, api: ApiClient) {
    store.loading().set(true);
    store.error().set(None);
    spawn_local(async move {
        match api.list_projects().await {
            Ok(projects) => {
                log::debug!("[API] Loaded {} projects", projects.len());
                store_set_projects(&store, projects);
            }
            Err(e) => {
                log::error!("[API] Failed to load projects: {}", e);
                store.error().set(Some(DashboardError::LoadProjectsFailed));
            }
        }
        store.loading().set(false);
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let store = Store::new(DashboardState::new());
    provide_context(store);

    load_projects(store, api.clone());

    let header_summary = move || {
        let count = store.projects().with(|p| p.len());
        match store_selected_project(&store) {
            Some(project) => format!("{} • Current project: {}", project_count_label(count), project.name),
            None => project_count_label(count),
        }
    };
    let has_projects = move || store.projects().with(|p| !p.is_empty());
    let reload_key = Signal::derive(move || store.reload_key().get());
    // Memos so the board is only remounted when the project really changes
    let first_load = Memo::new(move |_| store.loading().get() && !has_projects());
    let board_project = Memo::new(move |_| store.selected_project().get());

    let error_banner = move || {
        store.error().get().map(|err| {
            let api = api.clone();
            view! {
                <div class="dashboard-error">
                    <span>{err.to_string()}</span>
                    {(err == DashboardError::LoadProjectsFailed).then(|| view! {
                        <button class="retry-btn" on:click=move |_| load_projects(store, api.clone())>"Retry"</button>
                    })}
                    <button class="dismiss-btn" on:click=move |_| store.error().set(None)>"×"</button>
                </div>
            }
        })
    };

    let content = move || {
        if first_load.get() {
            return view! { <Loading message="Loading dashboard..." /> }.into_any();
        }
        match board_project.get() {
            Some(project_id) => view! {
                <KanbanBoard project_id=project_id reload_key=reload_key />
            }.into_any(),
            None => view! {
                <div class="empty-state">
                    <h3>"No projects yet"</h3>
                    <p>"Create your first project to start organizing tasks"</p>
                    <button class="primary-btn" on:click=move |_| store.show_project_form().set(true)>
                        "Create Project"
                    </button>
                </div>
            }.into_any(),
        }
    };

    view! {
        <Layout>
            <div class="dashboard">
                <div class="dashboard-header">
                    <div>
                        <h2>"Boards"</h2>
                        <p class="dashboard-summary">{header_summary}</p>
                    </div>
                    <div class="dashboard-actions">
                        <button class="primary-btn" on:click=move |_| store.show_project_form().set(true)>
                            "+ New Project"
                        </button>
                        <Show when=move || store.selected_project().get().is_some()>
                            <button class="secondary-btn" on:click=move |_| store.show_task_form().set(true)>
                                "+ New Task"
                            </button>
                        </Show>
                    </div>
                </div>

                {error_banner}

                <Show when=has_projects>
                    <ProjectSelector />
                </Show>

                <div class="dashboard-content">{content}</div>

                <Show when=move || store.show_project_form().get()>
                    <ProjectFormModal />
                </Show>
                <Show when=move || store.show_task_form().get()>
                    <TaskFormModal />
                </Show>
            </div>
        </Layout>
    }
}
