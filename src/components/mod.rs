//! UI Components
//!
//! Leptos components for the task dashboard and the tips page.

mod complete_checkbox;
mod create_task_panel;
mod dashboard;
mod delete_confirm_button;
mod edit_task_panel;
mod pill;
mod saved_tips_table;
mod search_box;
mod stats_bar;
mod status_tabs;
mod task_detail_panel;
mod task_form_fields;
mod task_table;
mod tips_page;

pub use complete_checkbox::CompleteCheckbox;
pub use create_task_panel::CreateTaskPanel;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_task_panel::EditTaskPanel;
pub use pill::{PriorityPill, StatusPill};
pub use saved_tips_table::SavedTipsTable;
pub use search_box::SearchBox;
pub use stats_bar::StatsBar;
pub use status_tabs::StatusTabs;
pub use task_detail_panel::{open_task_detail, TaskDetailPanel};
pub use task_form_fields::TaskFormFields;
pub use task_table::TaskTable;
pub use tips_page::TipsPage;
