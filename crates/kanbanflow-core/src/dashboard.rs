//! Dashboard Helpers
//!
//! Project list bookkeeping and the two creation forms.

use crate::domain::{find_by_id, NewProject, NewTask, Priority, Project, ProjectId, TaskStatus};
use crate::error::FormError;

/// Keep the current selection if it still exists, otherwise pick the first project
pub fn initial_selection(projects: &[Project], current: Option<ProjectId>) -> Option<ProjectId> {
    match current {
        Some(id) if find_by_id(projects, id).is_some() => Some(id),
        _ => projects.first().map(|p| p.id),
    }
}

/// Append a freshly created project, replacing a cached copy with the same id
pub fn append_project(projects: &mut Vec<Project>, project: Project) {
    projects.retain(|p| p.id != project.id);
    projects.push(project);
}

/// "3 projects", "1 project"
pub fn project_count_label(count: usize) -> String {
    if count == 1 {
        "1 project".to_string()
    } else {
        format!("{} projects", count)
    }
}

/// New project form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
}

impl ProjectForm {
    pub fn validate(&self) -> Result<NewProject, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingField("Project name"));
        }
        Ok(NewProject {
            name: name.to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

/// New task form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl TaskForm {
    /// Build the creation payload; new tasks always start in `pending`
    pub fn validate(&self, project: ProjectId) -> Result<NewTask, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingField("Title"));
        }
        Ok(NewTask {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority,
            status: TaskStatus::Pending,
            project,
        })
    }
}
