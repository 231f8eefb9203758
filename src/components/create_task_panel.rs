//! Create Task Panel
//!
//! Slide-over form for new tasks. On success the list reloads from the
//! server; nothing is inserted locally.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_panels::SlideOver;

use crate::api;
use crate::components::TaskFormFields;
use crate::context::use_app_context;
use crate::forms::TaskField;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn CreateTaskPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = store.create_form().get_untracked();
        let config = ctx.config();

        spawn_local(async move {
            match api::create_task(&config, &form.args()).await {
                Ok(task) => {
                    log::info!("[CreateTask] created {:?}", task.map(|t| t.id));
                    store.update(|s| s.close_create());
                    ctx.reload();
                }
                Err(e) => {
                    log::error!("[CreateTask] create failed: {}", e);
                    store.update(|s| s.create_failed(e.form_message()));
                }
            }
        });
    };

    view! {
        <SlideOver
            id="add-task-panel".to_string()
            open=Signal::derive(move || store.create_open().get())
            title="New task".to_string()
            on_close=move |_: ()| store.update(|s| s.close_create())
        >
            <form id="add-task-form" class="task-form" on:submit=on_submit>
                <TaskFormFields
                    form=Signal::derive(move || store.create_form().get())
                    on_change=move |(field, value): (TaskField, String)| {
                        store.create_form().write().set(field, value)
                    }
                />

                {move || store.create_error().get().map(|msg| view! {
                    <p id="add-task-error" class="form-error">{msg}</p>
                })}

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| store.update(|s| s.close_create())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">"Create task"</button>
                </div>
            </form>
        </SlideOver>
    }
}
