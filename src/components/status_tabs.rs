//! Status Tabs Component
//!
//! All / In Progress / Completed filter tabs.

use leptos::prelude::*;

use crate::store::{use_dashboard_store, DashboardStateStoreFields, StatusFilter};

#[component]
pub fn StatusTabs() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="status-tabs" role="tablist">
            {StatusFilter::TABS.iter().map(|tab| {
                let tab = *tab;
                let is_active = move || store.status_filter().get() == tab;
                view! {
                    <button
                        type="button"
                        role="tab"
                        class=move || if is_active() { "status-tab active" } else { "status-tab" }
                        aria-selected=move || is_active().to_string()
                        on:click=move |_| {
                            let changed = store.try_update(|s| s.set_status_filter(tab)).unwrap_or(false);
                            if changed {
                                log::info!("[StatusTabs] filter -> {:?}", tab);
                            }
                        }
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
