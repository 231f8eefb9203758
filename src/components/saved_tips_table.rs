//! Saved Tips Table

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::SavedTip;
use crate::store::{use_tips_store, TipsStateStoreFields};

const DELETE_FAILED: &str = "Could not delete tip.";
const DELETE_NETWORK: &str = "Network error while deleting tip.";

/// Delete failures never echo the server's `error` text.
fn delete_error_message(err: &ApiError) -> String {
    err.fixed_tip_message(DELETE_FAILED, DELETE_NETWORK)
}

#[component]
pub fn SavedTipsTable() -> impl IntoView {
    let store = use_tips_store();
    let saved = Memo::new(move |_| store.saved().get());

    view! {
        <section class="saved-tips">
            <h2>"Saved tips"</h2>
            <table class="saved-tips-table">
                <thead>
                    <tr>
                        <th>"Tip"</th>
                        <th>"Category"</th>
                        <th>"Saved"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="saved-tips-table-body">
                    <Show when=move || saved.with(|s| s.is_empty())>
                        <tr id="saved-tips-empty-row" class="placeholder-row">
                            <td colspan="4">"No saved tips yet."</td>
                        </tr>
                    </Show>
                    <For
                        each=move || saved.get()
                        key=|tip| tip.id_string()
                        children=move |tip| view! { <SavedTipRow tip=tip /> }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn SavedTipRow(tip: SavedTip) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_tips_store();
    let id = tip.id_string();
    let created = tip.created_display();
    let category = tip.category.clone().unwrap_or_default();

    let delete = {
        let id = id.clone();
        move |_: ()| {
            let id = id.clone();
            let config = ctx.config();
            spawn_local(async move {
                match api::delete_tip(&config, &id).await {
                    Ok(()) => {
                        log::info!("[Tips] deleted saved tip {}", id);
                        store.update(|s| s.tip_removed(&id));
                    }
                    Err(e) => {
                        log::error!("[Tips] deleting tip {} failed: {}", id, e);
                        store.update(|s| s.show_error(delete_error_message(&e)));
                    }
                }
            });
        }
    };

    view! {
        <tr class="saved-tip-row" data-tip-id=id>
            <td class="saved-tip-text">{tip.text}</td>
            <td class="saved-tip-category">{category}</td>
            <td class="saved-tip-created">{created}</td>
            <td class="saved-tip-actions">
                <DeleteConfirmButton
                    button_class="btn-danger"
                    label="Delete"
                    prompt="Delete this tip?"
                    on_confirm=delete
                />
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OkResponse;

    #[test]
    fn test_rejected_delete_shows_fixed_message() {
        let resp: OkResponse = serde_json::from_str(r#"{"ok":false,"error":"Tip not found"}"#).unwrap();
        let err = resp.into_result().unwrap_err();
        assert_eq!(delete_error_message(&err), "Could not delete tip.");
    }

    #[test]
    fn test_transport_failure_shows_network_message() {
        let err = ApiError::Network("offline".into());
        assert_eq!(delete_error_message(&err), "Network error while deleting tip.");
    }
}
