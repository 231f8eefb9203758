//! Search Box Component
//!
//! Debounced title suggestions under the search input. Submitting applies
//! the text as the list filter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_panels::Debouncer;

use crate::api;
use crate::components::open_task_detail;
use crate::context::use_app_context;
use crate::rows::should_suggest;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

pub const SEARCH_DEBOUNCE_MS: u32 = 350;

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let (input_value, set_input_value) = signal(String::new());
    let debouncer = StoredValue::new(Debouncer::new(SEARCH_DEBOUNCE_MS));

    let suggestions = Memo::new(move |_| store.suggestions().get());

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_input_value.set(value.clone());

        let debouncer = debouncer.get_value();
        if !should_suggest(&value) {
            debouncer.cancel();
            store.update(|s| s.clear_suggestions());
            return;
        }

        let config = ctx.config();
        spawn_local(async move {
            let Some(ticket) = debouncer.settle().await else {
                return;
            };
            let query = value.trim();
            let result = api::list_tasks(&config, None, Some(query)).await;
            // A newer keystroke or a submit invalidated this lookup
            if !debouncer.is_current(ticket) {
                log::debug!("[Search] dropping stale suggestions for {:?}", query);
                return;
            }
            match result {
                Ok(list) => store.update(|s| s.set_suggestions(list.tasks)),
                Err(e) => {
                    log::error!("[Search] suggestion lookup for {:?} failed: {}", query, e);
                    store.update(|s| s.clear_suggestions());
                }
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        debouncer.get_value().cancel();
        let query = input_value.get_untracked();
        log::info!("[Search] applying query {:?}", query.trim());
        store.update(|s| s.apply_search(&query));
    };

    view! {
        <div class="search-wrapper">
            <form id="task-search-form" class="search-form" on:submit=on_submit>
                <input
                    id="task-search-input"
                    type="search"
                    name="q"
                    placeholder="Search tasks..."
                    autocomplete="off"
                    class="form-input"
                    prop:value=move || input_value.get()
                    on:input=on_input
                />
            </form>

            <Show when=move || !suggestions.get().is_empty()>
                <ul id="search-suggestions" class="autocomplete-list">
                    <For
                        each=move || suggestions.get()
                        key=|task| task.id.clone()
                        children=move |task| {
                            let id = task.id.clone();
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="autocomplete-item"
                                        data-task-id=task.id.clone()
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            store.update(|s| s.clear_suggestions());
                                            open_task_detail(ctx, store, id.clone());
                                        }
                                    >
                                        {task.title}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
