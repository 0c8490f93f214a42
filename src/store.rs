//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use kanbanflow_core::dashboard::{append_project, initial_selection};
use kanbanflow_core::domain::{find_by_id, Project, ProjectId};
use kanbanflow_core::DashboardError;

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Cached project list, in backend order plus freshly created ones
    pub projects: Vec<Project>,
    /// Project whose board is shown
    pub selected_project: Option<ProjectId>,
    /// Bumped after a task is created so the board reloads
    pub reload_key: u32,
    pub loading: bool,
    pub error: Option<DashboardError>,
    pub show_project_form: bool,
    pub show_task_form: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the project list, keeping a still-valid selection
pub fn store_set_projects(store: &DashboardStore, projects: Vec<Project>) {
    // Page may be gone by the time the list arrives
    let Some(current) = store.selected_project().try_get_untracked() else { return };
    store.selected_project().set(initial_selection(&projects, current));
    store.projects().set(projects);
}

/// Append a created project and switch to it
pub fn store_add_project(store: &DashboardStore, project: Project) {
    let id = project.id;
    append_project(&mut store.projects().write(), project);
    store.selected_project().set(Some(id));
}

/// Force the board to reload its tasks
pub fn store_bump_reload(store: &DashboardStore) {
    store.reload_key().update(|key| *key = key.wrapping_add(1));
}

/// Currently selected project, if it is still in the list
pub fn store_selected_project(store: &DashboardStore) -> Option<Project> {
    let id = store.selected_project().get()?;
    store.projects().with(|projects| find_by_id(projects, id).cloned())
}
