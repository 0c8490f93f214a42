//! Kanban Board Component
//!
//! Three status columns for one project. Dragging a card onto another
//! column changes its status optimistically; uses leptos-dragdrop with the
//! columns as drop targets.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use kanbanflow_core::api::TaskApi;
use kanbanflow_core::board::{Board, MoveOutcome};
use kanbanflow_core::domain::{ProjectId, TaskId, TaskStatus};
use kanbanflow_core::BoardError;

use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DndSignals};

use crate::api::{use_api, ApiClient};
use crate::components::{BoardColumn, Loading, TaskDetail};

/// How long a failed status change stays on screen
const STATUS_ERROR_MS: u32 = 4000;

/// Fetch the project's tasks and replace the list
fn load_tasks(board: RwSignal<Board>, api: ApiClient) {
    let Some(ticket) = board.try_update(|b| b.begin_load()) else { return };
    let project = board.with_untracked(|b| b.project());
    spawn_local(async move {
        let result = api.list_tasks(project).await;
        // The board may have been unmounted meanwhile
        board.try_update(|b| b.finish_load(ticket, result));
    });
}

/// Drop handler: apply locally, then confirm or roll back
fn move_task(board: RwSignal<Board>, api: ApiClient, task_id: TaskId, destination: Option<TaskStatus>) {
    let Some(Some(pending)) = board.try_update(|b| b.begin_move(task_id, destination)) else {
        log::debug!("[BOARD] Task {} dropped outside any column", task_id);
        return;
    };

    spawn_local(async move {
        let result = api.update_status(pending.task_id, pending.to).await;
        let outcome = board.try_update(|b| b.settle_move(pending, result));
        log::debug!("[BOARD] Task {} move settled: {:?}", pending.task_id, outcome);

        if matches!(outcome, Some(MoveOutcome::Reverted | MoveOutcome::Superseded)) {
            TimeoutFuture::new(STATUS_ERROR_MS).await;
            board.try_update(|b| {
                if b.error() == Some(BoardError::StatusUpdateFailed) {
                    b.dismiss_error();
                }
            });
        }
    });
}

/// Drag state shared by every board mount.
///
/// The document listeners are bound once; drops go to whichever board is
/// mounted at the time.
#[derive(Clone, Copy)]
pub struct BoardDnd {
    signals: DndSignals<TaskStatus>,
    active: RwSignal<Option<RwSignal<Board>>>,
}

/// Create the shared drag state and bind its document listeners
pub fn provide_board_dnd(api: ApiClient) {
    let signals = create_dnd_signals::<TaskStatus>();
    let active = RwSignal::new(None::<RwSignal<Board>>);
    let shared = BoardDnd { signals, active };

    bind_global_mouseup(signals, move |task_id, target| match shared.mounted() {
        Some(board) => move_task(board, api.clone(), task_id, target),
        None => log::debug!("[BOARD] Drop of task {} with no board mounted", task_id),
    });

    provide_context(shared);
}

impl BoardDnd {
    fn mount(&self, board: RwSignal<Board>) {
        self.active.set(Some(board));
    }

    /// Forget `board` unless another board took its place already
    fn release(&self, board: RwSignal<Board>) {
        self.active.try_update(|slot| {
            if *slot == Some(board) {
                *slot = None;
            }
        });
    }

    fn mounted(&self) -> Option<RwSignal<Board>> {
        self.active.try_get_untracked().flatten()
    }
}

fn use_board_dnd() -> BoardDnd {
    use_context::<BoardDnd>().expect("BoardDnd should be provided")
}

#[component]
pub fn KanbanBoard(project_id: ProjectId, #[prop(into)] reload_key: Signal<u32>) -> impl IntoView {
    let api = use_api();
    let board = RwSignal::new(Board::new(project_id));
    let shared = use_board_dnd();
    let dnd = shared.signals;

    shared.mount(board);
    on_cleanup(move || shared.release(board));

    // Load on mount and whenever a task was created
    let load_api = api.clone();
    Effect::new(move |_| {
        let key = reload_key.get();
        log::debug!("[BOARD] Loading tasks for project {}, reload key {}", project_id, key);
        load_tasks(board, load_api.clone());
    });

    let columns = Memo::new(move |_| board.with(|b| b.columns()));
    let selected = Memo::new(move |_| board.with(|b| b.selected_task().cloned()));
    let show_loading = move || board.with(|b| b.is_loading() && b.tasks().is_empty());

    let on_select = Callback::new(move |task_id: TaskId| board.update(|b| b.select(task_id)));
    let on_close = Callback::new(move |_: ()| board.update(|b| b.close_detail()));

    let retry_api = api;
    let error_banner = move || {
        board.with(|b| b.error()).map(|err| {
            let api = retry_api.clone();
            view! {
                <div class="board-error">
                    <span class="board-error-text">{err.to_string()}</span>
                    {(err == BoardError::LoadFailed).then(|| view! {
                        <button class="retry-btn" on:click=move |_| load_tasks(board, api.clone())>"Retry"</button>
                    })}
                    <button class="dismiss-btn" on:click=move |_| board.update(|b| b.dismiss_error())>"×"</button>
                </div>
            }
        })
    };

    view! {
        <div class="kanban-board">
            {error_banner}

            <Show
                when=move || !show_loading()
                fallback=|| view! { <Loading message="Loading tasks..." /> }
            >
                <div class="kanban-columns">
                    {TaskStatus::ALL.into_iter().map(|status| {
                        let tasks = Signal::derive(move || columns.with(|c| c.column(status).to_vec()));
                        view! {
                            <BoardColumn status=status tasks=tasks dnd=dnd on_select=on_select />
                        }
                    }).collect_view()}
                </div>
            </Show>

            {move || selected.get().map(|task| view! { <TaskDetail task=task on_close=on_close /> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_dnd() -> BoardDnd {
        BoardDnd {
            signals: create_dnd_signals(),
            active: RwSignal::new(None),
        }
    }

    fn mounted_project(dnd: &BoardDnd) -> Option<ProjectId> {
        dnd.mounted().map(|board| board.with_untracked(|b| b.project()))
    }

    #[test]
    fn test_drops_follow_the_mounted_board() {
        let dnd = board_dnd();
        let first = RwSignal::new(Board::new(1));
        let second = RwSignal::new(Board::new(2));

        dnd.mount(first);
        assert_eq!(mounted_project(&dnd), Some(1));

        // project switch: new board mounts before the old one is cleaned up
        dnd.mount(second);
        dnd.release(first);
        assert_eq!(mounted_project(&dnd), Some(2));

        dnd.release(second);
        assert_eq!(mounted_project(&dnd), None);
    }
}
