//! Delete Confirm Button Component
//!
//! Inline delete confirmation: nothing is sent until the user confirms.

use leptos::prelude::*;

/// Whether the confirm/cancel pair is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfirmState {
    pub pending: bool,
}

impl ConfirmState {
    /// First click: ask instead of acting.
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Returns true when the caller should run the delete. Only a pending
    /// prompt can be confirmed, and only once.
    pub fn confirm(&mut self) -> bool {
        let fire = self.pending;
        self.pending = false;
        fire
    }
}

/// Inline delete confirmation button
///
/// Shows the delete button initially. When clicked, shows `prompt` with
/// confirm/cancel buttons; cancel returns to the initial state.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `label` - Text of the initial button
/// * `prompt` - Question shown while waiting for confirmation
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(ConfirmState::default());

    view! {
        <Show when=move || !state.get().pending>
            <button
                type="button"
                class=button_class.clone()
                title=label.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    state.update(|s| s.request());
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || state.get().pending>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        if state.try_update(|s| s.confirm()).unwrap_or(false) {
                            on_confirm.run(());
                        }
                    }
                >
                    "Delete"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        state.update(|s| s.cancel());
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
