//! Complete Checkbox Component
//!
//! Row checkbox that marks a task done. Checked optimistically; reverted if
//! the server refuses.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;

pub const COMPLETE_FAILED_ALERT: &str = "Could not mark the task as completed. Please try again.";

/// Checkbox visual state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxState {
    pub checked: bool,
    pub disabled: bool,
}

impl CheckboxState {
    pub fn new(done: bool) -> Self {
        Self { checked: done, disabled: done }
    }

    /// User ticked the box: pre-check and lock while the request runs.
    /// Returns false when there is nothing to do.
    pub fn begin(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.checked = true;
        self.disabled = true;
        true
    }

    pub fn succeeded(&mut self) {
        self.checked = true;
        self.disabled = true;
    }

    pub fn failed(&mut self) {
        self.checked = false;
        self.disabled = false;
    }
}

#[component]
pub fn CompleteCheckbox(task_id: String, done: bool) -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(CheckboxState::new(done));
    let task_id = StoredValue::new(task_id);

    let on_change = move |ev: web_sys::Event| {
        if !event_target_checked(&ev) || !state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }
        let id = task_id.get_value();
        let config = ctx.config();
        spawn_local(async move {
            match api::complete_task(&config, &id).await {
                Ok(()) => {
                    log::info!("[CompleteCheckbox] task {} completed", id);
                    state.update(|s| s.succeeded());
                    ctx.reload();
                }
                Err(e) => {
                    log::error!("[CompleteCheckbox] failed to complete task {}: {}", id, e);
                    state.update(|s| s.failed());
                    let _ = window().alert_with_message(COMPLETE_FAILED_ALERT);
                }
            }
        });
    };

    view! {
        <input
            type="checkbox"
            class="task-complete-checkbox"
            prop:checked=move || state.get().checked
            prop:disabled=move || state.get().disabled
            on:click=|ev| ev.stop_propagation()
            on:change=on_change
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_task_starts_locked() {
        let state = CheckboxState::new(true);
        assert!(state.checked && state.disabled);
    }

    #[test]
    fn test_success_leaves_checked_and_disabled() {
        let mut state = CheckboxState::new(false);
        assert!(state.begin());
        state.succeeded();
        assert_eq!(state, CheckboxState { checked: true, disabled: true });
    }

    #[test]
    fn test_failure_reverts() {
        let mut state = CheckboxState::new(false);
        state.begin();
        state.failed();
        assert_eq!(state, CheckboxState { checked: false, disabled: false });
    }

    #[test]
    fn test_begin_ignored_while_locked() {
        let mut state = CheckboxState::new(false);
        assert!(state.begin());
        assert!(!state.begin());
    }
}
