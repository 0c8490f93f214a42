//! Task Detail Component
//!
//! Read-only modal for one task. Closing it is the only action.

use leptos::prelude::*;

use kanbanflow_core::domain::Task;

#[component]
pub fn TaskDetail(task: Task, on_close: Callback<()>) -> impl IntoView {
    let status_class = format!("status-badge status-{}", task.status.as_str());
    let priority_class = format!("priority-badge priority-{}", task.priority.as_str());
    let description = (!task.description.is_empty()).then(|| task.description.clone());

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal task-detail" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{task.title.clone()}</h3>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                {description.map(|text| view! {
                    <div class="detail-field">
                        <label>"Description"</label>
                        <p class="detail-description">{text}</p>
                    </div>
                })}

                <div class="detail-grid">
                    <div class="detail-field">
                        <label>"Status"</label>
                        <span class=status_class>{format!("{} {}", task.status.icon(), task.status.title())}</span>
                    </div>
                    <div class="detail-field">
                        <label>"Priority"</label>
                        <span class=priority_class>{task.priority.label()}</span>
                    </div>
                </div>

                <div class="detail-field">
                    <label>"Created by"</label>
                    <div class="detail-creator">
                        <span class="avatar">{task.creator_initial()}</span>
                        <span>{task.created_by.clone().unwrap_or_default()}</span>
                    </div>
                </div>

                <div class="detail-field">
                    <label>"Created"</label>
                    <p>{task.created_at_display()}</p>
                </div>

                <div class="modal-actions">
                    <button class="secondary-btn" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
