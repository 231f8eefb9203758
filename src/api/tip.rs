//! Tip Requests

use serde::{Deserialize, Serialize};

use super::{get_envelope, post_empty, post_json, OkResponse};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{SavedTip, Tip};

#[derive(Serialize)]
pub struct SaveTipArgs<'a> {
    pub text: &'a str,
    pub category: &'a str,
}

/// `{ok, tip?, error?}` used by the get and save endpoints
#[derive(Debug, Deserialize)]
pub struct TipResponse<T> {
    #[serde(default)]
    pub ok: bool,
    pub tip: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> TipResponse<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.ok, self.tip) {
            (true, Some(tip)) => Ok(tip),
            (_, _) => Err(ApiError::Rejected(self.error)),
        }
    }
}

pub async fn fetch_tip(config: &ApiConfig) -> Result<Tip, ApiError> {
    get_envelope::<TipResponse<Tip>>(config.tip()?).await?.into_result()
}

pub async fn save_tip(config: &ApiConfig, args: &SaveTipArgs<'_>) -> Result<SavedTip, ApiError> {
    post_json::<_, TipResponse<SavedTip>>(config.tip_save()?, args).await?.into_result()
}

pub async fn delete_tip(config: &ApiConfig, id: &str) -> Result<(), ApiError> {
    post_empty::<OkResponse>(config.tip_delete(id)?).await?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_ok() {
        let resp: TipResponse<Tip> =
            serde_json::from_str(r#"{"ok":true,"tip":{"text":"Take a walk","category":"health"}}"#).unwrap();
        let tip = resp.into_result().unwrap();
        assert_eq!(tip.text, "Take a walk");
        assert_eq!(tip.category.as_deref(), Some("health"));
    }

    #[test]
    fn test_tip_error_message_kept() {
        let resp: TipResponse<Tip> = serde_json::from_str(r#"{"ok":false,"error":"Rate limited"}"#).unwrap();
        assert_eq!(resp.into_result(), Err(ApiError::Rejected(Some("Rate limited".into()))));
    }

    #[test]
    fn test_ok_without_tip_is_rejected() {
        let resp: TipResponse<SavedTip> = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert_eq!(resp.into_result(), Err(ApiError::Rejected(None)));
    }
}
