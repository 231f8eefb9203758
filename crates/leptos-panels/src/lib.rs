//! Leptos Panel Utilities
//!
//! Slide-over panels toggled by a single CSS class, plus a debouncer
//! for input-driven lookups.

mod debounce;

pub use debounce::Debouncer;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Class that pushes a slide-over panel off screen.
pub const HIDDEN_CLASS: &str = "translate-x-full";

/// Compose a panel's class attribute from its base classes and visibility.
pub fn panel_class(base: &str, open: bool) -> String {
    if open {
        base.to_string()
    } else if base.is_empty() {
        HIDDEN_CLASS.to_string()
    } else {
        format!("{} {}", base, HIDDEN_CLASS)
    }
}

/// Base classes of every slide-over panel
pub const PANEL_BASE: &str =
    "fixed inset-y-0 right-0 z-40 w-full max-w-md transform transition-transform duration-300 panel";

/// Right-hand slide-over panel.
///
/// Visibility is the single `translate-x-full` class; the element stays
/// mounted so CSS can animate it.
#[component]
pub fn SlideOver(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] id: String,
    children: Children,
) -> impl IntoView {
    view! {
        <aside
            id=id
            class=move || panel_class(PANEL_BASE, open.get())
            aria-hidden=move || (!open.get()).to_string()
        >
            <div class="panel-header">
                <h2 class="panel-title">{move || title.get()}</h2>
                <button type="button" class="close-btn" on:click=move |_| on_close.run(())>
                    "×"
                </button>
            </div>
            <div class="panel-body">{children()}</div>
        </aside>
    }
}

/// Bind a document-level Escape handler.
///
/// `on_escape` runs on every Escape keydown; callers decide which panel
/// (if any) to close.
pub fn bind_global_escape<F>(on_escape: F)
where
    F: Fn() + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_escape();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_panel_keeps_base_classes_only() {
        assert_eq!(panel_class("fixed inset-y-0 right-0", true), "fixed inset-y-0 right-0");
    }

    #[test]
    fn closed_panel_appends_hidden_class() {
        assert_eq!(
            panel_class("fixed inset-y-0 right-0", false),
            "fixed inset-y-0 right-0 translate-x-full"
        );
        assert_eq!(panel_class("", false), "translate-x-full");
    }
}
