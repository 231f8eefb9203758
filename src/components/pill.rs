//! Status and priority pills

use leptos::prelude::*;

use crate::models::{TaskPriority, TaskStatus};

#[component]
pub fn StatusPill(status: TaskStatus) -> impl IntoView {
    view! { <span class=status.pill_class()>{status.label()}</span> }
}

#[component]
pub fn PriorityPill(priority: TaskPriority) -> impl IntoView {
    view! { <span class=priority.pill_class()>{priority.label()}</span> }
}
