//! Task Card Component

use leptos::prelude::*;

use kanbanflow_core::domain::{Task, TaskId, TaskStatus};
use leptos_dragdrop::{make_on_mousedown, DndSignals};

/// Draggable card; a plain click opens the detail view
#[component]
pub fn TaskCard(task: Task, dnd: DndSignals<TaskStatus>, on_select: Callback<TaskId>) -> impl IntoView {
    let id = task.id;
    let on_mousedown = make_on_mousedown(dnd, id);

    let on_click = move |_: web_sys::MouseEvent| {
        // The click that ends a drag is not a selection
        if dnd.just_dragged() {
            return;
        }
        on_select.run(id);
    };

    let card_class = move || if dnd.is_dragging(id) { "task-card dragging" } else { "task-card" };
    let creator = task.created_by.clone().unwrap_or_default();
    let description = (!task.description.is_empty()).then(|| task.description.clone());

    view! {
        <div class=card_class on:mousedown=on_mousedown on:click=on_click>
            <h4 class="task-title">{task.title.clone()}</h4>
            {description.map(|text| view! { <p class="task-description">{text}</p> })}
            <div class="task-meta">
                <span class=format!("priority-badge priority-{}", task.priority.as_str())>
                    {task.priority.label()}
                </span>
                <span class="avatar small" title=creator>{task.creator_initial()}</span>
            </div>
        </div>
    }
}
