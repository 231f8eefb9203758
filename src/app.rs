//! Taskboard App
//!
//! Reads the endpoint configuration from the page and mounts either the
//! task dashboard or the tips page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Dashboard, TipsPage};
use crate::config::{current_page, initial_saved_tips, ApiConfig, Page};
use crate::context::AppContext;
use crate::store::{DashboardState, TipsState};

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let config = ApiConfig::from_document();
    let page = current_page();
    log::info!("[App] mounting {:?} page (list endpoint {})", page, config.list_url);

    provide_context(AppContext::new((reload_trigger, set_reload_trigger), config));
    provide_context(Store::new(DashboardState::new()));
    provide_context(Store::new(TipsState::new(initial_saved_tips())));

    match page {
        Page::Dashboard => view! { <Dashboard /> }.into_any(),
        Page::Tips => view! { <TipsPage /> }.into_any(),
    }
}
