/// Uniform outcome of a send
use crate::constants::{FAILURE_MESSAGE, STATUS_FAILURE, STATUS_SUCCESS, SUCCESS_MESSAGE};
use crate::error::MailerError;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSuccess {
    pub status_code: u16,
    pub message: String,
    /// Provider message id, when the provider reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_response: Option<String>,
}

impl SendSuccess {
    pub fn new(provider_response: Option<String>) -> Self {
        Self {
            status_code: STATUS_SUCCESS,
            message: SUCCESS_MESSAGE.to_string(),
            provider_response,
        }
    }
}

/// The single failure shape callers observe; the cause is kept intact.
#[derive(Debug, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}: {error}")]
pub struct SendFailure {
    pub status_code: u16,
    pub message: String,
    #[source]
    #[serde(serialize_with = "serialize_cause")]
    pub error: MailerError,
}

impl From<MailerError> for SendFailure {
    fn from(error: MailerError) -> Self {
        Self {
            status_code: STATUS_FAILURE,
            message: FAILURE_MESSAGE.to_string(),
            error,
        }
    }
}

fn serialize_cause<S>(error: &MailerError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_success_serialization() {
        let json = serde_json::to_value(SendSuccess::new(None)).unwrap();
        assert_eq!(json, serde_json::json!({"statusCode": 200, "message": "Success"}));

        let json = serde_json::to_value(SendSuccess::new(Some("msg-1".to_string()))).unwrap();
        assert_eq!(json["providerResponse"], "msg-1");
    }

    #[test]
    fn test_failure_wraps_cause() {
        let failure = SendFailure::from(MailerError::from(ValidationError::MissingSender));
        assert_eq!(failure.status_code, 400);
        assert_eq!(failure.message, "Error occurred while sending email");
        assert!(matches!(
            failure.error,
            MailerError::Validation(ValidationError::MissingSender)
        ));

        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["error"], "Validation error: sender mandatory");
    }
}
