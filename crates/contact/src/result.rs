use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, FieldErrors};

pub const SENT_MESSAGE: &str = "Your message has been sent successfully!";
pub const INVALID_MESSAGE: &str = "Invalid form data. Please check your inputs.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Email is not configured. Please set the SMTP password in the server configuration.";
pub const NOT_CONFIGURED_REASON: &str = "Email configuration error";

/// Why a submission did not go out.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureDetail {
    Validation { fields: FieldErrors },
    Config { reason: String },
    Transport { reason: String },
}

/// Outcome returned by the gateway to whoever submitted the form.
///
/// Every failure is carried as data. The transport detail is always a plain
/// string so the result can be rendered or serialized by any caller.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FailureDetail>,
}

impl SubmissionResult {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SENT_MESSAGE.to_owned(),
            error: None,
        }
    }

    pub fn invalid(fields: FieldErrors) -> Self {
        Self {
            success: false,
            message: INVALID_MESSAGE.to_owned(),
            error: Some(FailureDetail::Validation { fields }),
        }
    }

    pub fn not_configured() -> Self {
        Self {
            success: false,
            message: NOT_CONFIGURED_MESSAGE.to_owned(),
            error: Some(FailureDetail::Config {
                reason: NOT_CONFIGURED_REASON.to_owned(),
            }),
        }
    }

    pub fn failed(reason: impl Display) -> Self {
        let reason = reason.to_string();

        Self {
            success: false,
            message: format!("Failed to send email: {reason}. Please try again later."),
            error: Some(FailureDetail::Transport { reason }),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match &self.error {
            Some(FailureDetail::Validation { fields }) => Some(fields),
            _ => None,
        }
    }
}

impl From<crate::Result<()>> for SubmissionResult {
    fn from(value: crate::Result<()>) -> Self {
        match value {
            Ok(_) => Self::sent(),
            Err(Error::Validate(fields)) => Self::invalid(fields),
            Err(Error::NotConfigured) => Self::not_configured(),
            Err(Error::Transport(reason)) => Self::failed(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_omits_error() {
        let json = serde_json::to_value(SubmissionResult::sent()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "success": true, "message": SENT_MESSAGE })
        );
    }

    #[test]
    fn test_failure_detail_is_tagged() {
        let json = serde_json::to_value(SubmissionResult::failed("connection refused")).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(
            json["message"],
            "Failed to send email: connection refused. Please try again later."
        );
        assert_eq!(
            json["error"],
            serde_json::json!({ "kind": "transport", "reason": "connection refused" })
        );
    }

    #[test]
    fn test_from_error() {
        let result = SubmissionResult::from(Err(Error::NotConfigured));
        assert!(!result.success);
        assert_eq!(result.message, NOT_CONFIGURED_MESSAGE);
        assert!(matches!(result.error, Some(FailureDetail::Config { .. })));

        let mut fields = FieldErrors::default();
        fields.insert("email", "Please enter a valid email address");
        let result = SubmissionResult::from(Err(Error::Validate(fields.clone())));
        assert_eq!(result.message, INVALID_MESSAGE);
        assert_eq!(result.field_errors(), Some(&fields));
    }

    #[test]
    fn test_round_trip_json() {
        let mut fields = FieldErrors::default();
        fields.insert("name", "Name must be at least 2 characters");
        let result = SubmissionResult::invalid(fields);

        let json = serde_json::to_string(&result).unwrap();
        let decoded: SubmissionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, result);
    }
}
