//! Application State Stores
//!
//! Dashboard and tips view state, held in `reactive_stores` stores for
//! fine-grained reactivity. Every transition is a plain method so it can be
//! exercised without a browser.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::TaskList;
use crate::forms::TaskForm;
use crate::models::{SavedTip, Task, TaskStats, Tip};

/// Maximum entries in the search dropdown
pub const MAX_SUGGESTIONS: usize = 5;

pub const TIP_SAVED_MESSAGE: &str = "Tip saved.";
pub const TIP_DELETED_MESSAGE: &str = "Tip deleted successfully!";
pub const NO_TIP_TO_SAVE: &str = "No tip to save.";

/// Status tabs above the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    InProgress,
    Done,
}

impl StatusFilter {
    pub const TABS: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::InProgress, StatusFilter::Done];

    /// `status` query value; `None` lists everything.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::InProgress => Some("in_progress"),
            StatusFilter::Done => Some("done"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::InProgress => "In Progress",
            StatusFilter::Done => "Completed",
        }
    }
}

/// Dashboard view state
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Rows currently in the table
    pub tasks: Vec<Task>,
    /// Weekly counters, when the list response carried them
    pub stats: Option<TaskStats>,
    pub status_filter: StatusFilter,
    /// Query applied to the list (not the live search box text)
    pub search_query: String,
    pub suggestions: Vec<Task>,
    pub create_open: bool,
    pub create_form: TaskForm,
    pub create_error: Option<String>,
    pub detail_open: bool,
    /// Last task shown in the detail panel
    pub current_task: Option<Task>,
    pub edit_open: bool,
    pub edit_form: TaskForm,
    pub edit_error: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table contents. Stats only change when present.
    pub fn tasks_loaded(&mut self, list: TaskList) {
        self.tasks = list.tasks;
        if list.stats.is_some() {
            self.stats = list.stats;
        }
    }

    /// Returns true when the filter actually changed.
    pub fn set_status_filter(&mut self, filter: StatusFilter) -> bool {
        let changed = self.status_filter != filter;
        self.status_filter = filter;
        changed
    }

    pub fn apply_search(&mut self, query: &str) {
        self.search_query = query.trim().to_string();
        self.suggestions.clear();
    }

    pub fn set_suggestions(&mut self, mut tasks: Vec<Task>) {
        tasks.truncate(MAX_SUGGESTIONS);
        self.suggestions = tasks;
    }

    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
    }

    // ---- create panel ----

    pub fn open_create(&mut self) {
        self.create_open = true;
    }

    /// Hide the panel, clear its error and reset the form.
    pub fn close_create(&mut self) {
        self.create_open = false;
        self.create_error = None;
        self.create_form = TaskForm::default();
    }

    pub fn create_failed(&mut self, message: String) {
        self.create_error = Some(message);
    }

    // ---- detail panel ----

    pub fn show_task(&mut self, task: Task) {
        self.current_task = Some(task);
        self.detail_open = true;
    }

    pub fn close_detail(&mut self) {
        self.detail_open = false;
        self.current_task = None;
        self.close_edit();
    }

    pub fn current_task_id(&self) -> Option<String> {
        self.current_task.as_ref().map(|t| t.id.clone())
    }

    // ---- edit panel ----

    /// Prefill from the cached task. No-op without one.
    pub fn open_edit(&mut self) -> bool {
        match &self.current_task {
            Some(task) => {
                self.edit_form = TaskForm::from_task(task);
                self.edit_error = None;
                self.edit_open = true;
                true
            }
            None => false,
        }
    }

    pub fn close_edit(&mut self) {
        self.edit_open = false;
        self.edit_error = None;
    }

    pub fn edit_failed(&mut self, message: String) {
        self.edit_error = Some(message);
    }

    /// Apply a successful update. Returns true when the detail panel has to
    /// be re-fetched because the response carried no task.
    pub fn edit_succeeded(&mut self, updated: Option<Task>) -> bool {
        self.close_edit();
        match updated {
            Some(task) => {
                if self.detail_open {
                    self.current_task = Some(task);
                }
                false
            }
            None => self.detail_open,
        }
    }

    /// Deleting the task on screen closes its detail panel.
    pub fn task_deleted(&mut self, id: &str) {
        if self.current_task_id().as_deref() == Some(id) {
            self.close_detail();
        }
    }

    /// Escape closes the top-most open panel.
    pub fn close_topmost(&mut self) {
        if self.edit_open {
            self.close_edit();
        } else if self.detail_open {
            self.close_detail();
        } else if self.create_open {
            self.close_create();
        }
    }
}

/// Tips container layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipsLayout {
    #[default]
    Centered,
    Split,
}

impl TipsLayout {
    pub fn class(&self) -> &'static str {
        match self {
            TipsLayout::Centered => "flex flex-col gap-6 items-center",
            TipsLayout::Split => "flex flex-col gap-6 md:flex-row md:items-start md:justify-between",
        }
    }
}

/// Tips widget state
#[derive(Clone, Debug, Default, Store)]
pub struct TipsState {
    pub current_tip: Option<Tip>,
    pub card_visible: bool,
    pub loading: bool,
    /// Set once the first tip request has been made
    pub requested: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub saved: Vec<SavedTip>,
    pub layout: TipsLayout,
}

impl TipsState {
    pub fn new(saved: Vec<SavedTip>) -> Self {
        Self {
            saved,
            ..Default::default()
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Generating..."
        } else if self.requested {
            "Get a new tip"
        } else {
            "Get a tip"
        }
    }

    pub fn show_error(&mut self, message: String) {
        self.error = Some(message);
        self.success = None;
    }

    pub fn show_success(&mut self, message: String) {
        self.success = Some(message);
        self.error = None;
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn begin_fetch(&mut self) {
        self.clear_messages();
        self.loading = true;
        self.requested = true;
    }

    pub fn tip_loaded(&mut self, tip: Tip) {
        self.loading = false;
        self.current_tip = Some(tip);
        self.card_visible = true;
        self.layout = TipsLayout::Split;
    }

    pub fn fetch_failed(&mut self, message: String) {
        self.loading = false;
        self.show_error(message);
        self.card_visible = false;
        self.layout = TipsLayout::Centered;
    }

    pub fn close_card(&mut self) {
        self.card_visible = false;
        self.clear_messages();
        self.layout = TipsLayout::Centered;
    }

    /// Text and category of the displayed tip, or the message to show.
    pub fn tip_to_save(&self) -> Result<(String, String), &'static str> {
        let tip = self.current_tip.as_ref().filter(|_| self.card_visible);
        match tip {
            Some(tip) if !tip.text.trim().is_empty() => Ok((
                tip.text.trim().to_string(),
                tip.category.clone().unwrap_or_default().trim().to_string(),
            )),
            _ => Err(NO_TIP_TO_SAVE),
        }
    }

    /// Newest first; the empty placeholder disappears with the first row.
    pub fn tip_saved(&mut self, tip: SavedTip) {
        self.show_success(TIP_SAVED_MESSAGE.to_string());
        self.saved.insert(0, tip);
    }

    pub fn tip_removed(&mut self, id: &str) {
        self.saved.retain(|t| t.id_string() != id);
        self.show_success(TIP_DELETED_MESSAGE.to_string());
    }
}

/// Type aliases for the stores
pub type DashboardStore = Store<DashboardState>;
pub type TipsStore = Store<TipsState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

/// Get the tips store from context
pub fn use_tips_store() -> TipsStore {
    expect_context::<TipsStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str) -> Task {
        serde_json::from_value(serde_json::json!({ "id": id, "title": title })).unwrap()
    }

    fn saved(id: u32, text: &str) -> SavedTip {
        serde_json::from_value(serde_json::json!({ "id": id, "text": text, "created_at": "2025-01-01T10:00:00Z" }))
            .unwrap()
    }

    #[test]
    fn test_filter_query_values() {
        assert_eq!(StatusFilter::All.query_value(), None);
        assert_eq!(StatusFilter::InProgress.query_value(), Some("in_progress"));
        assert_eq!(StatusFilter::Done.query_value(), Some("done"));
    }

    #[test]
    fn test_set_filter_reports_change() {
        let mut state = DashboardState::new();
        assert!(!state.set_status_filter(StatusFilter::All));
        assert!(state.set_status_filter(StatusFilter::Done));
    }

    #[test]
    fn test_tasks_loaded_replaces_rows_keeps_stats_when_absent() {
        let mut state = DashboardState::new();
        state.tasks_loaded(TaskList {
            tasks: vec![task("1", "a"), task("2", "b")],
            count: Some(2),
            stats: Some(TaskStats { tasks_in_progress_this_week: 1, tasks_completed_this_week: 2, tasks_urgent_today: 3 }),
        });
        state.tasks_loaded(TaskList { tasks: vec![task("3", "c")], count: None, stats: None });

        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].id, "3");
        assert_eq!(state.stats.unwrap().tasks_urgent_today, 3);
    }

    #[test]
    fn test_close_create_resets_form_and_error() {
        let mut state = DashboardState::new();
        state.open_create();
        state.create_form.title = "draft".into();
        state.create_failed("This field is required.".into());

        state.close_create();
        assert!(!state.create_open);
        assert_eq!(state.create_error, None);
        assert_eq!(state.create_form, TaskForm::default());
    }

    #[test]
    fn test_failed_create_adds_no_rows() {
        let mut state = DashboardState::new();
        state.open_create();
        state.create_failed("Something went wrong.".into());
        assert!(state.tasks.is_empty());
        assert!(state.create_open);
    }

    #[test]
    fn test_detail_lifecycle() {
        let mut state = DashboardState::new();
        state.show_task(task("7", "Read"));
        assert!(state.detail_open);
        assert_eq!(state.current_task_id().as_deref(), Some("7"));

        state.close_detail();
        assert!(!state.detail_open);
        assert_eq!(state.current_task_id(), None);
    }

    #[test]
    fn test_open_edit_requires_current_task() {
        let mut state = DashboardState::new();
        assert!(!state.open_edit());
        assert!(!state.edit_open);

        state.show_task(task("7", "Read"));
        assert!(state.open_edit());
        assert_eq!(state.edit_form.title, "Read");
    }

    #[test]
    fn test_edit_success_refreshes_detail() {
        let mut state = DashboardState::new();
        state.show_task(task("7", "Read"));
        state.open_edit();
        state.edit_failed("oops".into());

        let needs_refetch = state.edit_succeeded(Some(task("7", "Read twice")));
        assert!(!needs_refetch);
        assert!(!state.edit_open);
        assert_eq!(state.edit_error, None);
        assert_eq!(state.current_task.as_ref().unwrap().title, "Read twice");
    }

    #[test]
    fn test_edit_success_without_task_refetches() {
        let mut state = DashboardState::new();
        state.show_task(task("7", "Read"));
        state.open_edit();
        assert!(state.edit_succeeded(None));
    }

    #[test]
    fn test_delete_closes_matching_detail_only() {
        let mut state = DashboardState::new();
        state.show_task(task("7", "Read"));
        state.task_deleted("8");
        assert!(state.detail_open);
        state.task_deleted("7");
        assert!(!state.detail_open);
    }

    #[test]
    fn test_suggestions_capped() {
        let mut state = DashboardState::new();
        state.set_suggestions((0..8).map(|i| task(&i.to_string(), "t")).collect());
        assert_eq!(state.suggestions.len(), MAX_SUGGESTIONS);
        state.apply_search("  t ");
        assert_eq!(state.search_query, "t");
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn test_close_topmost_order() {
        let mut state = DashboardState::new();
        state.open_create();
        state.show_task(task("1", "a"));
        state.open_edit();

        state.close_topmost();
        assert!(!state.edit_open && state.detail_open);
        state.close_topmost();
        assert!(!state.detail_open && state.create_open);
        state.close_topmost();
        assert!(!state.create_open);
    }

    #[test]
    fn test_tip_fetch_cycle() {
        let mut tips = TipsState::new(Vec::new());
        assert_eq!(tips.button_label(), "Get a tip");
        tips.begin_fetch();
        assert_eq!(tips.button_label(), "Generating...");

        tips.tip_loaded(Tip { text: "Stretch".into(), category: Some("health".into()) });
        assert_eq!(tips.button_label(), "Get a new tip");
        assert!(tips.card_visible);
        assert_eq!(tips.layout, TipsLayout::Split);

        tips.close_card();
        assert!(!tips.card_visible);
        assert_eq!(tips.layout, TipsLayout::Centered);
    }

    #[test]
    fn test_tip_fetch_failure_resets_layout() {
        let mut tips = TipsState::new(Vec::new());
        tips.tip_loaded(Tip { text: "Stretch".into(), category: None });
        tips.begin_fetch();
        tips.fetch_failed("Could not load a tip.".into());
        assert!(!tips.loading);
        assert!(!tips.card_visible);
        assert_eq!(tips.layout, TipsLayout::Centered);
        assert_eq!(tips.error.as_deref(), Some("Could not load a tip."));
    }

    #[test]
    fn test_messages_are_exclusive() {
        let mut tips = TipsState::new(Vec::new());
        tips.show_error("bad".into());
        tips.show_success("good".into());
        assert_eq!(tips.error, None);
        tips.show_error("bad".into());
        assert_eq!(tips.success, None);
    }

    #[test]
    fn test_nothing_to_save() {
        let tips = TipsState::new(Vec::new());
        assert_eq!(tips.tip_to_save(), Err(NO_TIP_TO_SAVE));

        let mut tips = TipsState::new(Vec::new());
        tips.tip_loaded(Tip { text: "Hydrate".into(), category: None });
        assert_eq!(tips.tip_to_save(), Ok(("Hydrate".to_string(), String::new())));
        tips.close_card();
        assert_eq!(tips.tip_to_save(), Err(NO_TIP_TO_SAVE));
    }

    #[test]
    fn test_saved_tips_prepend_and_remove() {
        let mut tips = TipsState::new(vec![saved(1, "old")]);
        tips.tip_saved(saved(2, "new"));
        assert_eq!(tips.saved[0].text, "new");
        assert_eq!(tips.success.as_deref(), Some(TIP_SAVED_MESSAGE));

        tips.tip_removed("1");
        assert_eq!(tips.saved.len(), 1);
        assert_eq!(tips.success.as_deref(), Some(TIP_DELETED_MESSAGE));
    }
}
