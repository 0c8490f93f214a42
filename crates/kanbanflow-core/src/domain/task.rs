//! Task Entity
//!
//! A card on the board. Its `status` decides the column it is shown in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::project::ProjectId;

pub type TaskId = u32;

/// Board column a task lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Columns in display order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "📋",
            TaskStatus::InProgress => "⚡",
            TaskStatus::Completed => "✅",
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Unknown values fall back to the default priority
    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "🟢 Low",
            Priority::Medium => "🟡 Medium",
            Priority::High => "🔴 High",
        }
    }
}

/// A task as returned by `/tasks/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    pub project: ProjectId,
    /// Creator's username (read-only)
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a pending task with default values
    pub fn new(id: TaskId, project: ProjectId, title: String) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            status: TaskStatus::Pending,
            priority: Priority::Medium,
            project,
            created_by: None,
            assigned_to: None,
            created_at: DateTime::<Utc>::default(),
            updated_at: None,
            due_date: None,
        }
    }

    pub fn creator_initial(&self) -> char {
        super::user::avatar_initial(self.created_by.as_deref().unwrap_or(""))
    }

    /// Creation date as shown in the detail view, e.g. `March 1, 2024 10:15`
    pub fn created_at_display(&self) -> String {
        self.created_at.format("%B %-d, %Y %H:%M").to_string()
    }
}

impl Entity for Task {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Body of `POST /tasks/` and `PUT /tasks/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub project: ProjectId,
}

/// Body of `PATCH /tasks/{id}/update_status/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: TaskStatus,
}
