//! Edit Task Panel
//!
//! Opened from the detail panel, prefilled from the cached task.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_panels::SlideOver;

use crate::api;
use crate::components::open_task_detail;
use crate::components::TaskFormFields;
use crate::context::use_app_context;
use crate::forms::TaskField;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn EditTaskPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = store.read_untracked().current_task_id() else {
            return;
        };
        let form = store.edit_form().get_untracked();
        let config = ctx.config();

        spawn_local(async move {
            match api::update_task(&config, &id, &form.args()).await {
                Ok(updated) => {
                    log::info!("[EditTask] updated task {}", id);
                    let refetch = store.try_update(|s| s.edit_succeeded(updated)).unwrap_or(false);
                    ctx.reload();
                    if refetch {
                        open_task_detail(ctx, store, id);
                    }
                }
                Err(e) => {
                    log::error!("[EditTask] update of {} failed: {}", id, e);
                    store.update(|s| s.edit_failed(e.form_message()));
                }
            }
        });
    };

    view! {
        <SlideOver
            id="edit-task-panel".to_string()
            open=Signal::derive(move || store.edit_open().get())
            title="Edit task".to_string()
            on_close=move |_: ()| store.update(|s| s.close_edit())
        >
            <form id="edit-task-form" class="task-form" on:submit=on_submit>
                <TaskFormFields
                    form=Signal::derive(move || store.edit_form().get())
                    on_change=move |(field, value): (TaskField, String)| {
                        store.edit_form().write().set(field, value)
                    }
                />

                {move || store.edit_error().get().map(|msg| view! {
                    <p id="edit-task-error" class="form-error">{msg}</p>
                })}

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| store.update(|s| s.close_edit())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">"Save changes"</button>
                </div>
            </form>
        </SlideOver>
    }
}
