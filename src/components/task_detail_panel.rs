//! Task Detail Panel
//!
//! Read-only view of one task with edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_panels::SlideOver;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::components::{PriorityPill, StatusPill};
use crate::context::{use_app_context, AppContext};
use crate::models::Task;
use crate::store::{use_dashboard_store, DashboardStateStoreFields, DashboardStore};

pub const DELETE_FAILED_ALERT: &str = "Could not delete the task. Please try again.";

/// Fetch a task and show it in the detail panel. On failure the panel is
/// left as it was.
pub fn open_task_detail(ctx: AppContext, store: DashboardStore, id: String) {
    let config = ctx.config();
    spawn_local(async move {
        match api::get_task(&config, &id).await {
            Ok(task) => store.update(|s| s.show_task(task)),
            Err(e) => log::error!("[TaskDetail] failed to load task {}: {}", id, e),
        }
    });
}

#[component]
pub fn TaskDetailPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let delete_current = move || {
        let Some(id) = store.read_untracked().current_task_id() else {
            return;
        };
        let config = ctx.config();
        spawn_local(async move {
            match api::delete_task(&config, &id).await {
                Ok(()) => {
                    log::info!("[TaskDetail] deleted task {}", id);
                    store.update(|s| s.task_deleted(&id));
                    ctx.reload();
                }
                Err(e) => {
                    log::error!("[TaskDetail] failed to delete task {}: {}", id, e);
                    let _ = window().alert_with_message(DELETE_FAILED_ALERT);
                }
            }
        });
    };

    view! {
        <SlideOver
            id="task-detail-panel".to_string()
            open=Signal::derive(move || store.detail_open().get())
            title=Signal::derive(move || {
                store.current_task().with(|t| t.as_ref().map(|t| t.title.clone()).unwrap_or_default())
            })
            on_close=move |_: ()| store.update(|s| s.close_detail())
        >
            {move || store.current_task().get().map(|task| view! {
                <TaskDetailBody task=task />
                <div class="panel-actions">
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| {
                            store.update(|s| {
                                s.open_edit();
                            })
                        }
                    >
                        "Edit"
                    </button>
                    <DeleteConfirmButton
                        button_class="btn-danger"
                        label="Delete"
                        prompt="Delete this task?"
                        on_confirm=move |_: ()| delete_current()
                    />
                </div>
            })}
        </SlideOver>
    }
}

#[component]
fn TaskDetailBody(task: Task) -> impl IntoView {
    let due = task.due_date_short().unwrap_or_else(|| "No due date".to_string());
    let description = task
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description.".to_string());
    let project = task.project.as_ref().map(|p| p.name.clone());
    let assignee = task.assignee.as_ref().map(|u| u.username.clone());

    view! {
        <dl class="task-detail" data-task-id=task.id.clone()>
            <div class="detail-row">
                <dt>"Status"</dt>
                <dd><StatusPill status=task.status /></dd>
            </div>
            <div class="detail-row">
                <dt>"Priority"</dt>
                <dd><PriorityPill priority=task.priority /></dd>
            </div>
            <div class="detail-row">
                <dt>"Due"</dt>
                <dd>{due}</dd>
            </div>
            {project.map(|name| view! {
                <div class="detail-row">
                    <dt>"Project"</dt>
                    <dd>{name}</dd>
                </div>
            })}
            {assignee.map(|name| view! {
                <div class="detail-row">
                    <dt>"Assignee"</dt>
                    <dd>{name}</dd>
                </div>
            })}
            <div class="detail-row detail-description">
                <dt>"Description"</dt>
                <dd>{description}</dd>
            </div>
        </dl>
    }
}
