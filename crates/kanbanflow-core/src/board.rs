//! Board State
//!
//! Task list of one project, split into the three status columns.
//!
//! Status changes are optimistic and happen in two phases:
//! `begin_move` updates the task locally and hands back a `PendingMove` that
//! captures the status the task had before the move; `settle_move` either
//! keeps the new status or restores exactly the captured one.
//!
//! Overlapping moves of one task are versioned. Only the latest move may
//! revert the card, and once the last in-flight request for a task settles
//! the task converges to the status the backend acknowledged last.
//! Unsettled moves survive a reload: the reloaded list still shows their
//! optimistic status and their answers are still applied.

use std::collections::HashMap;

use crate::domain::{find_by_id, find_by_id_mut, ProjectId, Task, TaskId, TaskStatus};
use crate::error::{ApiResult, BoardError};

/// Tasks grouped by column, arrival order kept inside each column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardColumns {
    pub pending: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
}

impl BoardColumns {
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Pending => &self.pending,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split tasks into the three columns
pub fn partition(tasks: &[Task]) -> BoardColumns {
    let mut columns = BoardColumns::default();
    for task in tasks {
        match task.status {
            TaskStatus::Pending => columns.pending.push(task.clone()),
            TaskStatus::InProgress => columns.in_progress.push(task.clone()),
            TaskStatus::Completed => columns.completed.push(task.clone()),
        }
    }
    columns
}

/// Proof that a load was started; stale tickets are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// A status change applied locally and waiting for the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub task_id: TaskId,
    /// Status before the optimistic update
    pub from: TaskStatus,
    pub to: TaskStatus,
    version: u64,
}

/// What `settle_move` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Backend accepted the move
    Confirmed,
    /// Backend rejected the latest move; status restored
    Reverted,
    /// An older move failed while a newer one is still in charge
    Superseded,
    /// The task left the board while the request was in flight
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    latest: u64,
    /// Status the card shows for the latest move
    shown: TaskStatus,
    outstanding: u32,
    acknowledged: TaskStatus,
    acknowledged_version: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    project: ProjectId,
    tasks: Vec<Task>,
    selected: Option<TaskId>,
    loading: bool,
    error: Option<BoardError>,
    generation: u64,
    next_version: u64,
    in_flight: HashMap<TaskId, InFlight>,
}

impl Board {
    /// Empty board for a project; loading until the first load finishes
    pub fn new(project: ProjectId) -> Self {
        Self {
            project,
            tasks: Vec::new(),
            selected: None,
            loading: true,
            error: None,
            generation: 0,
            next_version: 1,
            in_flight: HashMap::new(),
        }
    }

    pub fn project(&self) -> ProjectId {
        self.project
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        find_by_id(&self.tasks, id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<BoardError> {
        self.error
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn columns(&self) -> BoardColumns {
        partition(&self.tasks)
    }

    /// Number of tasks with a status request still in flight
    #[cfg(test)]
    pub fn moves_in_flight(&self) -> usize {
        self.in_flight.len()
    }

    // ========================
    // Loading
    // ========================

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket { generation: self.generation }
    }

    /// Apply a load result. Returns false when the ticket was superseded.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: ApiResult<Vec<Task>>) -> bool {
        if ticket.generation != self.generation {
            log::debug!("[BOARD] Dropping stale load for project {}", self.project);
            return false;
        }
        self.loading = false;
        match result {
            Ok(tasks) => {
                log::debug!("[BOARD] Loaded {} tasks for project {}", tasks.len(), self.project);
                self.tasks = tasks;
                self.carry_over_moves();
                if let Some(id) = self.selected {
                    if self.task(id).is_none() {
                        self.selected = None;
                    }
                }
            }
            Err(e) => {
                log::error!("[BOARD] Failed to load tasks for project {}: {}", self.project, e);
                self.error = Some(BoardError::LoadFailed);
            }
        }
        true
    }

    // ========================
    // Optimistic status change
    // ========================

    /// Phase one of a drag: apply the move locally.
    ///
    /// Returns `None` (and changes nothing) when the drop had no destination
    /// or the task is unknown.
    pub fn begin_move(&mut self, task_id: TaskId, destination: Option<TaskStatus>) -> Option<PendingMove> {
        let to = destination?;
        let task = find_by_id_mut(&mut self.tasks, task_id)?;
        let from = task.status;
        task.status = to;

        let version = self.next_version;
        self.next_version += 1;

        let entry = self.in_flight.entry(task_id).or_insert(InFlight {
            latest: version,
            shown: to,
            outstanding: 0,
            acknowledged: from,
            acknowledged_version: 0,
        });
        entry.latest = version;
        entry.shown = to;
        entry.outstanding += 1;

        log::debug!("[BOARD] Move task {}: {} -> {} (v{})", task_id, from.as_str(), to.as_str(), version);
        Some(PendingMove {
            task_id,
            from,
            to,
            version,
        })
    }

    /// Phase two: commit or compensate with the backend's answer.
    pub fn settle_move(&mut self, pending: PendingMove, result: ApiResult<Task>) -> MoveOutcome {
        let Some(mut flight) = self.in_flight.get(&pending.task_id).copied() else {
            log::debug!("[BOARD] Task {} is no longer on the board", pending.task_id);
            return MoveOutcome::Stale;
        };
        flight.outstanding = flight.outstanding.saturating_sub(1);
        let is_latest = flight.latest == pending.version;

        let outcome = match &result {
            Ok(_) => {
                if pending.version > flight.acknowledged_version {
                    flight.acknowledged = pending.to;
                    flight.acknowledged_version = pending.version;
                }
                MoveOutcome::Confirmed
            }
            Err(e) => {
                log::error!("[BOARD] Status update for task {} failed: {}", pending.task_id, e);
                self.error = Some(BoardError::StatusUpdateFailed);
                if is_latest {
                    flight.shown = pending.from;
                    self.set_status(pending.task_id, pending.from);
                    MoveOutcome::Reverted
                } else {
                    MoveOutcome::Superseded
                }
            }
        };

        if flight.outstanding == 0 {
            self.in_flight.remove(&pending.task_id);
            self.set_status(pending.task_id, flight.acknowledged);
        } else {
            self.in_flight.insert(pending.task_id, flight);
        }
        outcome
    }

    /// Re-apply unsettled moves onto a freshly loaded list.
    ///
    /// The reloaded status becomes the fallback for tasks with nothing
    /// acknowledged yet. Tasks gone from the list drop their moves.
    fn carry_over_moves(&mut self) {
        let tasks = &mut self.tasks;
        self.in_flight.retain(|&task_id, flight| {
            let Some(task) = find_by_id_mut(tasks.as_mut_slice(), task_id) else {
                return false;
            };
            if flight.acknowledged_version == 0 {
                flight.acknowledged = task.status;
            }
            task.status = flight.shown;
            true
        });
    }

    fn set_status(&mut self, task_id: TaskId, status: TaskStatus) {
        if let Some(task) = find_by_id_mut(&mut self.tasks, task_id) {
            task.status = status;
        }
    }

    // ========================
    // Detail view
    // ========================

    pub fn select(&mut self, task_id: TaskId) {
        if self.task(task_id).is_some() {
            self.selected = Some(task_id);
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Selected task as it currently is in the list
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.task(id))
    }
}
