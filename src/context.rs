//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ApiConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the task list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the task list - write
    set_reload_trigger: WriteSignal<u32>,
    /// Endpoint configuration read at startup
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: ApiConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
