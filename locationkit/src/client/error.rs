//! Client error types and service error mapping.

use serde_json::Value;
use thiserror::Error;

use super::http::HttpResponse;
use crate::model::{ValidationExceptionField, ValidationExceptionReason};

/// Header carrying the service error code.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

/// Errors returned by [`LocationClient`](super::LocationClient).
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Access denied: {message}")]
    AccessDenied { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal server error: {message}")]
    InternalServer { message: String },

    #[error("Resource not found: {message}")]
    ResourceNotFound { message: String },

    #[error("Service quota exceeded: {message}")]
    ServiceQuotaExceeded { message: String },

    #[error("Request throttled: {message}")]
    Throttling { message: String },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        reason: Option<ValidationExceptionReason>,
        fields: Vec<ValidationExceptionField>,
    },

    /// Any other service error code.
    #[error("Service error {code} (HTTP {status}): {message}")]
    Service {
        code: String,
        status: u16,
        message: String,
    },

    /// A URI member required to build the request path was not set.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LocationError {
    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Throttling { .. } | Self::InternalServer { .. } | Self::Http(_) => true,
            Self::Service { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Service error code, for errors that came from the service.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::AccessDenied { .. } => Some("AccessDeniedException"),
            Self::Conflict { .. } => Some("ConflictException"),
            Self::InternalServer { .. } => Some("InternalServerException"),
            Self::ResourceNotFound { .. } => Some("ResourceNotFoundException"),
            Self::ServiceQuotaExceeded { .. } => Some("ServiceQuotaExceededException"),
            Self::Throttling { .. } => Some("ThrottlingException"),
            Self::Validation { .. } => Some("ValidationException"),
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Maps a non-2xx response to an error.
    ///
    /// The code comes from the `x-amzn-ErrorType` header, falling back to
    /// the `__type` or `code` body members.
    pub fn from_response(response: &HttpResponse) -> Self {
        let body: Value = serde_json::from_slice(&response.body).unwrap_or(Value::Null);

        let raw_code = response
            .header(ERROR_TYPE_HEADER)
            .map(str::to_string)
            .or_else(|| string_member(&body, &["__type", "code", "Code"]));
        let code = raw_code.as_deref().map(sanitize_error_code).unwrap_or("");
        let message = string_member(&body, &["message", "Message"]).unwrap_or_default();

        match code {
            "AccessDeniedException" => Self::AccessDenied { message },
            "ConflictException" => Self::Conflict { message },
            "InternalServerException" => Self::InternalServer { message },
            "ResourceNotFoundException" => Self::ResourceNotFound { message },
            "ServiceQuotaExceededException" => Self::ServiceQuotaExceeded { message },
            "ThrottlingException" => Self::Throttling { message },
            "ValidationException" => Self::Validation {
                message,
                reason: string_member(&body, &["reason", "Reason"])
                    .map(ValidationExceptionReason::from),
                fields: validation_fields(&body),
            },
            "" => Self::Service {
                code: "Unknown".to_string(),
                status: response.status,
                message,
            },
            other => Self::Service {
                code: other.to_string(),
                status: response.status,
                message,
            },
        }
    }
}

/// Strips the namespace prefix (`aws.geo#`) and the `:url` suffix some
/// services append to error codes.
pub fn sanitize_error_code(raw: &str) -> &str {
    let code = raw.split(':').next().unwrap_or(raw);
    code.rsplit('#').next().unwrap_or(code).trim()
}

fn string_member(body: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| body.get(*name).and_then(Value::as_str))
        .map(str::to_string)
}

fn validation_fields(body: &Value) -> Vec<ValidationExceptionField> {
    let Some(list) = body
        .get("fieldList")
        .or_else(|| body.get("FieldList"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    list.iter()
        .map(|field| ValidationExceptionField {
            name: string_member(field, &["name", "Name"]),
            message: string_member(field, &["message", "Message"]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, headers: &[(&str, &str)], body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_sanitize_error_code() {
        assert_eq!(
            sanitize_error_code("aws.geo#ResourceNotFoundException"),
            "ResourceNotFoundException"
        );
        assert_eq!(
            sanitize_error_code("ThrottlingException:http://internal.amazon.com/"),
            "ThrottlingException"
        );
        assert_eq!(sanitize_error_code("ConflictException"), "ConflictException");
    }

    #[test]
    fn test_code_from_header_wins() {
        let error = LocationError::from_response(&response(
            404,
            &[("X-Amzn-ErrorType", "ResourceNotFoundException:http://x/")],
            r#"{"__type":"ConflictException","message":"tracker fleet not found"}"#,
        ));
        match error {
            LocationError::ResourceNotFound { message } => {
                assert_eq!(message, "tracker fleet not found")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_code_from_body_type() {
        let error = LocationError::from_response(&response(
            429,
            &[],
            r#"{"__type":"com.amazonaws.geo#ThrottlingException","Message":"slow down"}"#,
        ));
        assert!(matches!(error, LocationError::Throttling { ref message } if message == "slow down"));
        assert!(error.is_retryable());
    }

    #[test]
    fn test_validation_error_fields() {
        let error = LocationError::from_response(&response(
            400,
            &[("x-amzn-ErrorType", "ValidationException")],
            r#"{
                "message": "bad input",
                "reason": "FieldValidationFailed",
                "fieldList": [{"name": "TrackerName", "message": "too long"}]
            }"#,
        ));
        match error {
            LocationError::Validation {
                message,
                reason,
                fields,
            } => {
                assert_eq!(message, "bad input");
                assert_eq!(reason, Some(ValidationExceptionReason::FieldValidationFailed));
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].name.as_deref(), Some("TrackerName"));
                assert_eq!(fields[0].message.as_deref(), Some("too long"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_code_maps_to_service() {
        let error = LocationError::from_response(&response(
            503,
            &[("x-amzn-ErrorType", "ServiceUnavailableException")],
            "",
        ));
        match &error {
            LocationError::Service { code, status, .. } => {
                assert_eq!(code, "ServiceUnavailableException");
                assert_eq!(*status, 503);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(error.is_retryable());
        assert_eq!(error.code(), Some("ServiceUnavailableException"));
    }

    #[test]
    fn test_missing_code_on_client_error() {
        let error = LocationError::from_response(&response(400, &[], "not json"));
        assert!(matches!(
            error,
            LocationError::Service { ref code, status: 400, .. } if code == "Unknown"
        ));
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(LocationError::InternalServer { message: String::new() }.is_retryable());
        assert!(LocationError::Http("reset".into()).is_retryable());
        assert!(!LocationError::AccessDenied { message: String::new() }.is_retryable());
        assert!(!LocationError::MissingParameter("tracker_name").is_retryable());
    }
}
