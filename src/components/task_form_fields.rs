//! Task Form Fields Component
//!
//! Inputs shared by the create and edit panels.

use leptos::prelude::*;

use crate::forms::{TaskField, TaskForm};
use crate::models::{TaskPriority, TaskStatus};

#[component]
pub fn TaskFormFields(
    #[prop(into)] form: Signal<TaskForm>,
    #[prop(into)] on_change: Callback<(TaskField, String)>,
) -> impl IntoView {
    let field_value = move |field: TaskField| move || form.with(|f| f.get(field).to_string());

    view! {
        <label class="form-label">
            "Title"
            <input
                type="text"
                name="title"
                required
                class="form-input"
                prop:value=field_value(TaskField::Title)
                on:input=move |ev| on_change.run((TaskField::Title, event_target_value(&ev)))
            />
        </label>

        <label class="form-label">
            "Description"
            <textarea
                name="description"
                rows="4"
                class="form-input"
                prop:value=field_value(TaskField::Description)
                on:input=move |ev| on_change.run((TaskField::Description, event_target_value(&ev)))
            ></textarea>
        </label>

        <div class="form-row">
            <label class="form-label">
                "Status"
                <select
                    name="status"
                    class="form-input"
                    on:change=move |ev| on_change.run((TaskField::Status, event_target_value(&ev)))
                >
                    {TaskStatus::ALL.iter().map(|status| {
                        let value = status.as_str();
                        view! {
                            <option
                                value=value
                                prop:selected=move || form.with(|f| f.status == value)
                            >
                                {status.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>

            <label class="form-label">
                "Priority"
                <select
                    name="priority"
                    class="form-input"
                    on:change=move |ev| on_change.run((TaskField::Priority, event_target_value(&ev)))
                >
                    {TaskPriority::ALL.iter().map(|priority| {
                        let value = priority.as_str();
                        view! {
                            <option
                                value=value
                                prop:selected=move || form.with(|f| f.priority == value)
                            >
                                {priority.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
        </div>

        <label class="form-label">
            "Due date"
            <input
                type="date"
                name="due_date"
                class="form-input"
                prop:value=field_value(TaskField::DueDate)
                on:input=move |ev| on_change.run((TaskField::DueDate, event_target_value(&ev)))
            />
        </label>
    }
}
