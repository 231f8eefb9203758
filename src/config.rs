//! Endpoint Configuration
//!
//! API paths come from `data-*` attributes on `<body>`, falling back to the
//! stock routes. Relative paths are resolved against the page origin.

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Url;

use crate::error::ApiError;
use crate::models::SavedTip;

pub const DEFAULT_LIST_URL: &str = "/tasks/api/tasks/";
pub const DEFAULT_CREATE_URL: &str = "/tasks/api/tasks/create/";
pub const DEFAULT_DETAIL_BASE_URL: &str = "/tasks/api/tasks/";
pub const DEFAULT_TIP_URL: &str = "/tasks/api/tip/";
pub const DEFAULT_TIP_SAVE_URL: &str = "/tasks/api/tip/save/";
pub const DEFAULT_TIP_DELETE_BASE_URL: &str = "/tasks/api/tip/";

/// Element holding the saved tips rendered into the page
pub const SAVED_TIPS_SCRIPT_ID: &str = "saved-tips-data";

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Which page the body asks us to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Tips,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub origin: String,
    pub list_url: String,
    pub create_url: String,
    pub detail_base_url: String,
    pub tip_url: String,
    pub tip_save_url: String,
    pub tip_delete_base_url: String,
}

impl ApiConfig {
    /// Build from an attribute lookup (`"list-url"` → `data-list-url`).
    pub fn from_lookup(origin: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |name: &str, fallback: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            list_url: pick("list-url", DEFAULT_LIST_URL),
            create_url: pick("create-url", DEFAULT_CREATE_URL),
            detail_base_url: pick("detail-base-url", DEFAULT_DETAIL_BASE_URL),
            tip_url: pick("tip-url", DEFAULT_TIP_URL),
            tip_save_url: pick("tip-save-url", DEFAULT_TIP_SAVE_URL),
            tip_delete_base_url: pick("tip-delete-base-url", DEFAULT_TIP_DELETE_BASE_URL),
        }
    }

    /// Read the live page: body data attributes plus `location.origin`.
    pub fn from_document() -> Self {
        let origin = window().location().origin().unwrap_or_default();
        let body = document().body();
        Self::from_lookup(&origin, |name| {
            body.as_ref()
                .and_then(|b| b.get_attribute(&format!("data-{}", name)))
        })
    }

    fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        let base = Url::parse(&format!("{}/", self.origin)).map_err(|e| ApiError::Config(e.to_string()))?;
        base.join(path).map_err(|e| ApiError::Config(e.to_string()))
    }

    fn with_id(base: &str, id: &str, suffix: &str) -> String {
        let mut path = base.to_string();
        if !path.ends_with('/') {
            path.push('/');
        }
        path.push_str(&utf8_percent_encode(id, PATH_SEGMENT).to_string());
        path.push('/');
        path.push_str(suffix);
        path
    }

    /// List endpoint; empty filters are left off the query string.
    pub fn list(&self, status: Option<&str>, query: Option<&str>) -> Result<Url, ApiError> {
        let mut url = self.resolve(&self.list_url)?;
        let status = status.filter(|s| !s.is_empty());
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        if status.is_some() || query.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(s) = status {
                pairs.append_pair("status", s);
            }
            if let Some(q) = query {
                pairs.append_pair("q", q);
            }
        }
        Ok(url)
    }

    pub fn create(&self) -> Result<Url, ApiError> {
        self.resolve(&self.create_url)
    }

    pub fn detail(&self, id: &str) -> Result<Url, ApiError> {
        self.resolve(&Self::with_id(&self.detail_base_url, id, ""))
    }

    pub fn update(&self, id: &str) -> Result<Url, ApiError> {
        self.resolve(&Self::with_id(&self.detail_base_url, id, "update/"))
    }

    pub fn delete(&self, id: &str) -> Result<Url, ApiError> {
        self.resolve(&Self::with_id(&self.detail_base_url, id, "delete/"))
    }

    pub fn complete(&self, id: &str) -> Result<Url, ApiError> {
        self.resolve(&Self::with_id(&self.detail_base_url, id, "complete/"))
    }

    pub fn tip(&self) -> Result<Url, ApiError> {
        self.resolve(&self.tip_url)
    }

    pub fn tip_save(&self) -> Result<Url, ApiError> {
        self.resolve(&self.tip_save_url)
    }

    pub fn tip_delete(&self, id: &str) -> Result<Url, ApiError> {
        self.resolve(&Self::with_id(&self.tip_delete_base_url, id, "delete/"))
    }
}

pub fn page_from_attr(value: Option<&str>) -> Page {
    match value.map(str::trim) {
        Some("tips") => Page::Tips,
        _ => Page::Dashboard,
    }
}

pub fn current_page() -> Page {
    let attr = document().body().and_then(|b| b.get_attribute("data-page"));
    page_from_attr(attr.as_deref())
}

/// Parse the saved-tips JSON document; blank means none saved yet.
pub fn parse_saved_tips(raw: &str) -> Result<Vec<SavedTip>, ApiError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn initial_saved_tips() -> Vec<SavedTip> {
    let raw = document()
        .get_element_by_id(SAVED_TIPS_SCRIPT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    match parse_saved_tips(&raw) {
        Ok(tips) => tips,
        Err(e) => {
            log::error!("[Config] could not read saved tips: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config() -> ApiConfig {
        ApiConfig::from_lookup("http://localhost:8000/", |_| None)
    }

    #[test]
    fn test_defaults_when_attributes_missing() {
        let cfg = config();
        assert_eq!(cfg.origin, "http://localhost:8000");
        assert_eq!(cfg.list_url, DEFAULT_LIST_URL);
        assert_eq!(cfg.tip_save_url, DEFAULT_TIP_SAVE_URL);
    }

    #[test]
    fn test_attributes_override_defaults() {
        let attrs: HashMap<&str, &str> = [("list-url", "/api/v2/tasks/"), ("create-url", "  ")].into();
        let cfg = ApiConfig::from_lookup("https://app.example", |k| attrs.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.list_url, "/api/v2/tasks/");
        assert_eq!(cfg.create_url, DEFAULT_CREATE_URL);
    }

    #[test]
    fn test_list_url_query() {
        let cfg = config();
        assert_eq!(cfg.list(None, None).unwrap().as_str(), "http://localhost:8000/tasks/api/tasks/");
        assert_eq!(
            cfg.list(Some("done"), Some(" report ")).unwrap().as_str(),
            "http://localhost:8000/tasks/api/tasks/?status=done&q=report"
        );
        assert_eq!(
            cfg.list(None, Some("a&b")).unwrap().as_str(),
            "http://localhost:8000/tasks/api/tasks/?q=a%26b"
        );
    }

    #[test]
    fn test_task_routes() {
        let cfg = config();
        assert_eq!(cfg.detail("42").unwrap().path(), "/tasks/api/tasks/42/");
        assert_eq!(cfg.update("42").unwrap().path(), "/tasks/api/tasks/42/update/");
        assert_eq!(cfg.delete("42").unwrap().path(), "/tasks/api/tasks/42/delete/");
        assert_eq!(cfg.complete("42").unwrap().path(), "/tasks/api/tasks/42/complete/");
    }

    #[test]
    fn test_ids_are_escaped() {
        let cfg = config();
        assert_eq!(cfg.detail("a/b c").unwrap().path(), "/tasks/api/tasks/a%2Fb%20c/");
    }

    #[test]
    fn test_tip_routes() {
        let cfg = config();
        assert_eq!(cfg.tip().unwrap().path(), "/tasks/api/tip/");
        assert_eq!(cfg.tip_delete("9").unwrap().path(), "/tasks/api/tip/9/delete/");
    }

    #[test]
    fn test_absolute_endpoint_kept() {
        let cfg = ApiConfig::from_lookup("http://localhost", |k| {
            (k == "tip-url").then(|| "https://tips.example/random/".to_string())
        });
        assert_eq!(cfg.tip().unwrap().as_str(), "https://tips.example/random/");
    }

    #[test]
    fn test_page_selection() {
        assert_eq!(page_from_attr(Some("tips")), Page::Tips);
        assert_eq!(page_from_attr(Some("dashboard")), Page::Dashboard);
        assert_eq!(page_from_attr(None), Page::Dashboard);
    }

    #[test]
    fn test_parse_saved_tips() {
        assert!(parse_saved_tips("").unwrap().is_empty());
        let tips = parse_saved_tips(r#"[{"id":1,"text":"Breathe","created_at":"2025-01-01T00:00:00Z"}]"#).unwrap();
        assert_eq!(tips.len(), 1);
        assert!(parse_saved_tips("{oops").is_err());
    }
}
