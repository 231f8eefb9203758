//! API Errors
//!
//! One error type for every request the client makes, plus the user-facing
//! wording each screen shows for it.

use thiserror::Error;

pub const GENERIC_FORM_ERROR: &str = "Something went wrong.";
pub const NETWORK_FORM_ERROR: &str = "Network error. Please try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Fetch itself failed (offline, CORS, DNS)
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx with a body that is not the expected envelope
    #[error("HTTP {0}")]
    Status(u16),
    /// 2xx but the body did not parse
    #[error("Malformed response: {0}")]
    Decode(String),
    /// Server answered `ok: false` / `success: false`
    #[error("Rejected by server{}", .0.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Rejected(Option<String>),
    /// Form validation failed server-side; only `title` is surfaced
    #[error("Validation failed")]
    Validation { title: Option<String> },
    #[error("Bad endpoint: {0}")]
    Config(String),
}

impl ApiError {
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Network(err.to_string())
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Inline message for the create/edit task forms
    pub fn form_message(&self) -> String {
        match self {
            ApiError::Validation { title: Some(msg) } if !msg.is_empty() => msg.clone(),
            ApiError::Network(_) => NETWORK_FORM_ERROR.to_string(),
            _ => GENERIC_FORM_ERROR.to_string(),
        }
    }

    /// True when the server answered with a readable `ok: false`.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected(_) | ApiError::Validation { .. })
    }

    /// Message for the tips widget: server text or `fallback` for a
    /// rejection, `network` when no readable answer came back.
    pub fn tip_message(&self, fallback: &str, network: &str) -> String {
        match self {
            ApiError::Rejected(Some(msg)) if !msg.is_empty() => msg.clone(),
            ApiError::Rejected(_) | ApiError::Validation { .. } => fallback.to_string(),
            _ => network.to_string(),
        }
    }

    /// Like `tip_message`, but a rejection always shows `rejected` and
    /// ignores any server text.
    pub fn fixed_tip_message(&self, rejected: &str, network: &str) -> String {
        if self.is_rejection() {
            rejected.to_string()
        } else {
            network.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_error_is_shown() {
        let err = ApiError::Validation { title: Some("This field is required.".into()) };
        assert_eq!(err.form_message(), "This field is required.");
    }

    #[test]
    fn test_other_validation_falls_back_to_generic() {
        assert_eq!(ApiError::Validation { title: None }.form_message(), GENERIC_FORM_ERROR);
        assert_eq!(ApiError::Status(500).form_message(), GENERIC_FORM_ERROR);
        assert_eq!(ApiError::Decode("eof".into()).form_message(), GENERIC_FORM_ERROR);
    }

    #[test]
    fn test_network_error_message() {
        let err = ApiError::Network("offline".into());
        assert!(err.is_network());
        assert_eq!(err.form_message(), NETWORK_FORM_ERROR);
    }

    #[test]
    fn test_tip_message() {
        let fallback = "Could not save the tip.";
        let network = "Network error while saving tip.";
        assert_eq!(ApiError::Rejected(Some("Quota hit".into())).tip_message(fallback, network), "Quota hit");
        assert_eq!(ApiError::Rejected(None).tip_message(fallback, network), fallback);
        assert_eq!(ApiError::Network("x".into()).tip_message(fallback, network), network);
        assert_eq!(ApiError::Decode("eof".into()).tip_message(fallback, network), network);
        assert!(ApiError::Rejected(None).is_rejection());
        assert!(!ApiError::Status(502).is_rejection());
    }

    #[test]
    fn test_fixed_tip_message_ignores_server_text() {
        let (rejected, network) = ("Could not delete tip.", "Network error while deleting tip.");
        assert_eq!(ApiError::Rejected(Some("Tip not found".into())).fixed_tip_message(rejected, network), rejected);
        assert_eq!(ApiError::Rejected(None).fixed_tip_message(rejected, network), rejected);
        assert_eq!(ApiError::Status(500).fixed_tip_message(rejected, network), network);
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Rejected(Some("nope".into())).to_string(), "Rejected by server: nope");
        assert_eq!(ApiError::Rejected(None).to_string(), "Rejected by server");
        assert_eq!(ApiError::Status(404).to_string(), "HTTP 404");
    }
}
