//! UI Components
//!
//! Reusable Leptos components.

mod board_column;
mod guards;
mod kanban_board;
mod layout;
mod loading;
mod project_form;
mod project_selector;
mod task_card;
mod task_detail;
mod task_form;

pub use board_column::BoardColumn;
pub use guards::{HomeRedirect, ProtectedRoute, PublicRoute};
pub use kanban_board::{provide_board_dnd, KanbanBoard};
pub use layout::Layout;
pub use loading::Loading;
pub use project_form::ProjectFormModal;
pub use project_selector::ProjectSelector;
pub use task_card::TaskCard;
pub use task_detail::TaskDetail;
pub use task_form::TaskFormModal;
