//! Taskboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod models;
mod rows;
mod store;

use app::App;
use leptos::prelude::*;

/// Header printed above the buffered log lines when the app panics
const RECENT_LOG_HEADER: &str = "--- recent log records ---";

/// Lines dumped after a panic message: header plus buffered records.
fn panic_report(records: Vec<String>) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }
    std::iter::once(RECENT_LOG_HEADER.to_string()).chain(records).collect()
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        for line in panic_report(console_logger::recent()) {
            web_sys::console::error_1(&line.into());
        }
    }));
}

fn main() {
    install_panic_hook();
    if let Err(e) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_report_empty_without_records() {
        assert!(panic_report(Vec::new()).is_empty());
    }

    #[test]
    fn test_panic_report_lists_records_after_header() {
        let report = panic_report(vec!["a".into(), "b".into()]);
        assert_eq!(report, vec![RECENT_LOG_HEADER.to_string(), "a".into(), "b".into()]);
    }
}
