//! Tips Page
//!
//! Fetch a motivational tip, optionally keep it, and manage the saved list.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SaveTipArgs};
use crate::components::SavedTipsTable;
use crate::context::use_app_context;
use crate::store::{use_tips_store, TipsStateStoreFields};

/// Pause between the tip response and showing it
pub const TIP_REVEAL_DELAY_MS: u32 = 1200;

const LOAD_FAILED: &str = "Could not load a tip.";
const LOAD_NETWORK: &str = "Network error while loading a tip.";
const SAVE_FAILED: &str = "Could not save the tip.";
const SAVE_NETWORK: &str = "Network error while saving tip.";

#[component]
pub fn TipsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_tips_store();

    let loading = Memo::new(move |_| store.loading().get());
    let button_label = Memo::new(move |_| store.read().button_label());
    let layout = Memo::new(move |_| store.layout().get());

    let get_tip = move |_: web_sys::MouseEvent| {
        if loading.get_untracked() {
            return;
        }
        store.update(|s| s.begin_fetch());
        let config = ctx.config();

        spawn_local(async move {
            match api::fetch_tip(&config).await {
                Ok(tip) => {
                    TimeoutFuture::new(TIP_REVEAL_DELAY_MS).await;
                    store.update(|s| s.tip_loaded(tip));
                }
                Err(e) if e.is_rejection() => {
                    TimeoutFuture::new(TIP_REVEAL_DELAY_MS).await;
                    log::warn!("[Tips] tip request rejected: {}", e);
                    store.update(|s| s.fetch_failed(e.tip_message(LOAD_FAILED, LOAD_NETWORK)));
                }
                Err(e) => {
                    log::error!("[Tips] tip request failed: {}", e);
                    store.update(|s| s.fetch_failed(LOAD_NETWORK.to_string()));
                }
            }
        });
    };

    let save_tip = move |_: web_sys::MouseEvent| {
        let (text, category) = match store.read_untracked().tip_to_save() {
            Ok(pair) => pair,
            Err(msg) => {
                store.update(|s| s.show_error(msg.to_string()));
                return;
            }
        };
        let config = ctx.config();

        spawn_local(async move {
            let args = SaveTipArgs { text: &text, category: &category };
            match api::save_tip(&config, &args).await {
                Ok(mut saved) => {
                    log::info!("[Tips] saved tip {}", saved.id_string());
                    if saved.category.is_none() && !category.is_empty() {
                        saved.category = Some(category.clone());
                    }
                    store.update(|s| s.tip_saved(saved));
                }
                Err(e) => {
                    log::error!("[Tips] saving tip failed: {}", e);
                    store.update(|s| s.show_error(e.tip_message(SAVE_FAILED, SAVE_NETWORK)));
                }
            }
        });
    };

    view! {
        <div id="tips-container" class=move || layout.get().class()>
            <section class="tip-generator">
                <button
                    id="get-tip-btn"
                    type="button"
                    class="btn-primary"
                    prop:disabled=move || loading.get()
                    on:click=get_tip
                >
                    {move || button_label.get()}
                </button>

                <Show when=move || loading.get()>
                    <p id="tip-loading" class="tip-loading">"Finding a tip for you..."</p>
                </Show>

                {move || store.error().get().map(|msg| view! {
                    <p id="tip-error" class="tip-message error">{msg}</p>
                })}
                {move || store.success().get().map(|msg| view! {
                    <p id="tip-success" class="tip-message success">{msg}</p>
                })}

                <Show when=move || store.card_visible().get()>
                    {move || store.current_tip().get().map(|tip| {
                        let category = tip.category_line();
                        view! {
                            <div id="tip-card" class="tip-card">
                                <p id="tip-text" class="tip-text">{tip.text}</p>
                                {category.map(|line| view! {
                                    <p id="tip-category" class="tip-category">{line}</p>
                                })}
                                <div class="tip-actions">
                                    <button
                                        id="save-tip-btn"
                                        type="button"
                                        class="btn-secondary"
                                        on:click=save_tip
                                    >
                                        "Save tip"
                                    </button>
                                    <button
                                        id="close-tip-btn"
                                        type="button"
                                        class="btn-secondary"
                                        on:click=move |_| store.update(|s| s.close_card())
                                    >
                                        "Close"
                                    </button>
                                </div>
                            </div>
                        }
                    })}
                </Show>
            </section>

            <SavedTipsTable />
        </div>
    }
}
