//! Domain Layer
//!
//! Records owned by the backend, mirrored on the client for display.
//! This layer has NO browser dependencies (serde and chrono only).

mod entity;
mod user;
mod project;
mod task;

pub use entity::{find_by_id, find_by_id_mut, Entity};
pub use user::{AuthResponse, Credentials, Registration, User};
pub use project::{NewProject, Project, ProjectId};
pub use task::{NewTask, Priority, StatusUpdate, Task, TaskId, TaskStatus};
