//! Project Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::entity::Entity;

pub type ProjectId = u32;

/// A board owned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Owner's username (read-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(id: ProjectId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            owner: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Project {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Body of `POST /projects/` and `PUT /projects/{id}/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}
