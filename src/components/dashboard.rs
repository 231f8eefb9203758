//! Task Dashboard
//!
//! Table, filters, search and the three slide-over panels.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_panels::bind_global_escape;

use crate::api;
use crate::components::{
    CreateTaskPanel, EditTaskPanel, SearchBox, StatsBar, StatusTabs, TaskDetailPanel, TaskTable,
};
use crate::context::use_app_context;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let status_filter = Memo::new(move |_| store.status_filter().get());
    let search_query = Memo::new(move |_| store.search_query().get());

    // Reload when the trigger, filter or applied query changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let status = status_filter.get();
        let query = search_query.get();
        let config = ctx.config();
        log::debug!("[Dashboard] loading tasks: filter={:?} q={:?} trigger={}", status, query, trigger);

        spawn_local(async move {
            let q = Some(query.as_str()).filter(|q| !q.is_empty());
            match api::list_tasks(&config, status.query_value(), q).await {
                Ok(list) => {
                    log::debug!("[Dashboard] loaded {} tasks", list.tasks.len());
                    store.update(|s| s.tasks_loaded(list));
                }
                Err(e) => log::error!("[Dashboard] failed to load tasks: {}", e),
            }
        });
    });

    bind_global_escape(move || store.update(|s| s.close_topmost()));

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Tasks"</h1>
                <button
                    id="open-add-task"
                    type="button"
                    class="btn-primary"
                    on:click=move |_| store.update(|s| s.open_create())
                >
                    "New task"
                </button>
            </header>

            <StatsBar />

            <div class="dashboard-toolbar">
                <StatusTabs />
                <SearchBox />
            </div>

            <TaskTable />

            <CreateTaskPanel />
            <TaskDetailPanel />
            <EditTaskPanel />
        </div>
    }
}
