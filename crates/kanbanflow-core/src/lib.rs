//! KanbanFlow Client Core
//!
//! Everything the web client decides without touching the browser:
//! - domain: records mirrored from the backend
//! - api: endpoint table, API traits, 401 policy
//! - session: authentication state machine and its workflows
//! - guard: route guard decisions
//! - board: task columns and optimistic status changes
//! - dashboard: project list helpers and creation forms

pub mod api;
pub mod board;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod guard;
pub mod session;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;

pub use error::{ApiError, ApiResult, BoardError, DashboardError, FormError, SessionError};
