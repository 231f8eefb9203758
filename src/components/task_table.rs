//! Task Table Component
//!
//! Renders the current task list. The body is rebuilt from scratch whenever
//! the list changes.

use leptos::prelude::*;

use crate::components::CompleteCheckbox;
use crate::components::{PriorityPill, StatusPill};
use crate::components::open_task_detail;
use crate::context::use_app_context;
use crate::rows::{TableBody, TaskRow};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn TaskTable() -> impl IntoView {
    let store = use_dashboard_store();
    let body = Memo::new(move |_| TableBody::from_tasks(&store.tasks().read()));

    view! {
        <table class="tasks-table">
            <thead>
                <tr>
                    <th class="col-check"></th>
                    <th>"Title"</th>
                    <th>"Status"</th>
                    <th>"Priority"</th>
                    <th>"Due"</th>
                </tr>
            </thead>
            <tbody id="tasks-table-body">
                {move || match body.get() {
                    TableBody::Empty => view! {
                        <tr class="placeholder-row">
                            <td colspan="5">"No tasks found."</td>
                        </tr>
                    }.into_any(),
                    TableBody::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <TaskRowView row=row /> })
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}

/// One task row; clicking anywhere but the checkbox opens the detail panel
#[component]
fn TaskRowView(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let id = row.id.clone();

    view! {
        <tr
            class="task-row"
            data-task-id=row.id.clone()
            on:click=move |_| open_task_detail(ctx, store, id.clone())
        >
            <td class="col-check">
                <CompleteCheckbox task_id=row.id.clone() done=row.done />
            </td>
            <td class="task-title">{row.title}</td>
            <td><StatusPill status=row.status /></td>
            <td><PriorityPill priority=row.priority /></td>
            <td class="task-due">{row.due}</td>
        </tr>
    }
}
