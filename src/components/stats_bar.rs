//! Stats Bar Component
//!
//! Weekly counters above the task table. Hidden until a list response
//! carries stats.

use leptos::prelude::*;

use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_dashboard_store();
    let stats = Memo::new(move |_| store.stats().get());

    view! {
        {move || stats.get().map(|s| view! {
            <div class="stats-bar">
                <div class="stat-card">
                    <span class="stat-label">"In progress this week"</span>
                    <span id="stat-in-progress" class="stat-value">{s.tasks_in_progress_this_week}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Completed this week"</span>
                    <span id="stat-completed" class="stat-value">{s.tasks_completed_this_week}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Urgent today"</span>
                    <span id="stat-urgent" class="stat-value">{s.tasks_urgent_today}</span>
                </div>
            </div>
        })}
    }
}
