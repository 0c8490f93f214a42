//! Board Column Component
//!
//! One status column; acts as a drop target for dragged cards.

use leptos::prelude::*;

use kanbanflow_core::domain::{Task, TaskId, TaskStatus};
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter, DndSignals};

use crate::components::TaskCard;

#[component]
pub fn BoardColumn(
    status: TaskStatus,
    tasks: Signal<Vec<Task>>,
    dnd: DndSignals<TaskStatus>,
    on_select: Callback<TaskId>,
) -> impl IntoView {
    let on_mouseenter = make_on_target_mouseenter(dnd, status);
    let on_mouseleave = make_on_mouseleave(dnd);

    let column_class = move || {
        let base = format!("kanban-column column-{}", status.as_str());
        if dnd.is_over(status) {
            format!("{} drop-over", base)
        } else if dnd.is_active() {
            format!("{} drop-ready", base)
        } else {
            base
        }
    };

    view! {
        <section class=column_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <header class="column-header">
                <h3 class="column-title">
                    <span class="column-icon">{status.icon()}</span>
                    {status.title()}
                </h3>
                <span class="column-count">{move || tasks.with(|t| t.len())}</span>
            </header>

            <div class="column-body">
                <Show
                    when=move || tasks.with(|t| !t.is_empty())
                    fallback=move || view! {
                        <div class="column-empty">
                            <div class="column-empty-icon">{status.icon()}</div>
                            <p>"No tasks here"</p>
                        </div>
                    }
                >
                    <For
                        each=move || tasks.get()
                        // Every displayed field, so edits made elsewhere re-render the card
                        key=|task| (task.id, task.title.clone(), task.description.clone(), task.priority)
                        children=move |task| view! { <TaskCard task=task dnd=dnd on_select=on_select /> }
                    />
                </Show>
            </div>
        </section>
    }
}
