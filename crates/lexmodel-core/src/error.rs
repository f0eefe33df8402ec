//! Errors from binding requests and interpreting service responses.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::validate::ValidationReport;

/// A request could not be turned into an HTTP request.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("missing required URI member '{0}'")]
    MissingLabel(&'static str),

    #[error("invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("endpoint '{0}' cannot carry a path")]
    EndpointNotHierarchical(String),

    #[error("failed to serialize request body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Failure of [`prepare`](crate::operation::prepare).
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error(transparent)]
    Validation(#[from] ValidationReport),

    #[error(transparent)]
    Binding(#[from] BindingError),
}

/// Failure of [`decode_response`](crate::operation::decode_response).
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Resource that still refers to the one being deleted or changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReference {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// An error response from the service, classified by exception type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("internal failure: {message}")]
    InternalFailure { message: String },

    #[error("limit exceeded: {message}")]
    LimitExceeded {
        message: String,
        /// Value of the `Retry-After` header, in seconds.
        retry_after_seconds: Option<String>,
    },

    #[error("not found: {message}")]
    NotFound { message: String },

    /// Usually a stale `checksum` on a put.
    #[error("precondition failed: {message}")]
    PreconditionFailed { message: String },

    #[error("resource in use: {message}")]
    ResourceInUse {
        message: String,
        reference_type: Option<String>,
        example_reference: Option<ResourceReference>,
    },

    #[error("{code} (HTTP {status}): {message}")]
    Unknown {
        code: String,
        status: u16,
        message: String,
    },
}

/// Members of a JSON error body. Each is read on its own, so a member of an
/// unexpected type is dropped without losing the rest.
#[derive(Debug, Default)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
    type_name: Option<String>,
    reference_type: Option<String>,
    example_reference: Option<ResourceReference>,
}

impl ErrorBody {
    fn parse(body: &[u8]) -> Self {
        let Ok(value) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };
        let text = |member: &str| value.get(member).and_then(Value::as_str).map(str::to_string);
        Self {
            message: text("message").or_else(|| text("Message")),
            code: text("code"),
            type_name: text("__type"),
            reference_type: text("referenceType"),
            example_reference: value
                .get("exampleReference")
                .and_then(|reference| ResourceReference::deserialize(reference).ok()),
        }
    }
}

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const RETRY_AFTER_HEADER: &str = "retry-after";

impl ServiceError {
    /// Classify a non-2xx response.
    ///
    /// The exception name comes from the `x-amzn-ErrorType` header, then the
    /// body's `code` or `__type` member. When none is present the HTTP status
    /// picks the closest exception.
    pub fn from_response(status: u16, headers: &[(&str, &str)], body: &[u8]) -> Self {
        let parsed = ErrorBody::parse(body);

        let code = header(headers, ERROR_TYPE_HEADER)
            .map(str::to_string)
            .or(parsed.code)
            .or(parsed.type_name)
            .map(|raw| normalize_code(&raw).to_string());

        let message = parsed.message.unwrap_or_default();

        let code = match code {
            Some(code) => code,
            None => match status_fallback(status) {
                Some(code) => code.to_string(),
                None => {
                    return Self::Unknown {
                        code: "Unknown".to_string(),
                        status,
                        message,
                    };
                }
            },
        };

        match code.as_str() {
            "BadRequestException" => Self::BadRequest { message },
            "ConflictException" => Self::Conflict { message },
            "InternalFailureException" => Self::InternalFailure { message },
            "LimitExceededException" => Self::LimitExceeded {
                message,
                retry_after_seconds: header(headers, RETRY_AFTER_HEADER).map(str::to_string),
            },
            "NotFoundException" => Self::NotFound { message },
            "PreconditionFailedException" => Self::PreconditionFailed { message },
            "ResourceInUseException" => Self::ResourceInUse {
                message,
                reference_type: parsed.reference_type,
                example_reference: parsed.example_reference,
            },
            _ => Self::Unknown {
                code,
                status,
                message,
            },
        }
    }

    /// Exception name as the service reports it.
    pub fn code(&self) -> &str {
        match self {
            Self::BadRequest { .. } => "BadRequestException",
            Self::Conflict { .. } => "ConflictException",
            Self::InternalFailure { .. } => "InternalFailureException",
            Self::LimitExceeded { .. } => "LimitExceededException",
            Self::NotFound { .. } => "NotFoundException",
            Self::PreconditionFailed { .. } => "PreconditionFailedException",
            Self::ResourceInUse { .. } => "ResourceInUseException",
            Self::Unknown { code, .. } => code,
        }
    }

    /// Whether sending the same request again may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LimitExceeded { .. } | Self::InternalFailure { .. })
    }
}

fn header<'a>(headers: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}

/// `aws.lex#NotFoundException:http://internal/` -> `NotFoundException`.
fn normalize_code(raw: &str) -> &str {
    let without_suffix = raw.split(':').next().unwrap_or(raw);
    without_suffix
        .rsplit('#')
        .next()
        .unwrap_or(without_suffix)
        .trim()
}

fn status_fallback(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("BadRequestException"),
        404 => Some("NotFoundException"),
        409 => Some("ConflictException"),
        412 => Some("PreconditionFailedException"),
        429 => Some("LimitExceededException"),
        500 => Some("InternalFailureException"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_from_header_wins() {
        let err = ServiceError::from_response(
            404,
            &[("X-Amzn-ErrorType", "NotFoundException:http://internal.amazon.com/")],
            br#"{"code": "BadRequestException", "message": "bot PizzaBot not found"}"#,
        );
        assert_eq!(
            err,
            ServiceError::NotFound {
                message: "bot PizzaBot not found".to_string()
            }
        );
    }

    #[test]
    fn test_code_from_namespaced_type_member() {
        let err = ServiceError::from_response(
            412,
            &[],
            br#"{"__type": "com.amazonaws.lexmodels#PreconditionFailedException", "Message": "checksum mismatch"}"#,
        );
        assert_eq!(err.code(), "PreconditionFailedException");
        assert_eq!(err.to_string(), "precondition failed: checksum mismatch");
    }

    #[test]
    fn test_resource_in_use_carries_reference() {
        let body = br#"{
            "message": "intent is used by a bot",
            "referenceType": "Bot",
            "exampleReference": {"name": "PizzaBot", "version": "3"}
        }"#;
        let err = ServiceError::from_response(
            400,
            &[("x-amzn-errortype", "ResourceInUseException")],
            body,
        );
        match err {
            ServiceError::ResourceInUse {
                reference_type,
                example_reference,
                ..
            } => {
                assert_eq!(reference_type.as_deref(), Some("Bot"));
                assert_eq!(example_reference.unwrap().version.as_deref(), Some("3"));
            }
            other => panic!("expected ResourceInUse, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_member_keeps_the_others() {
        let err = ServiceError::from_response(
            400,
            &[("x-amzn-ErrorType", "ResourceInUseException")],
            br#"{"message": "intent in use", "exampleReference": "PizzaBot:3"}"#,
        );
        assert_eq!(
            err,
            ServiceError::ResourceInUse {
                message: "intent in use".to_string(),
                reference_type: None,
                example_reference: None,
            }
        );

        let err = ServiceError::from_response(
            404,
            &[],
            br#"{"code": 7, "__type": "NotFoundException", "message": "gone"}"#,
        );
        assert_eq!(
            err,
            ServiceError::NotFound {
                message: "gone".to_string()
            }
        );
    }

    #[test]
    fn test_both_message_spellings_prefer_lowercase() {
        let err = ServiceError::from_response(
            409,
            &[],
            br#"{"message": "lower", "Message": "upper", "code": "ConflictException"}"#,
        );
        assert_eq!(err.to_string(), "conflict: lower");
    }

    #[test]
    fn test_limit_exceeded_reads_retry_after() {
        let err = ServiceError::from_response(
            429,
            &[("Retry-After", "30")],
            br#"{"message": "slow down"}"#,
        );
        assert_eq!(
            err,
            ServiceError::LimitExceeded {
                message: "slow down".to_string(),
                retry_after_seconds: Some("30".to_string()),
            }
        );
        assert!(err.is_retryable());
    }

    #[test]
    fn test_status_fallback_without_code() {
        let err = ServiceError::from_response(409, &[], b"");
        assert_eq!(err.code(), "ConflictException");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_unrecognised_code_is_kept() {
        let err = ServiceError::from_response(
            403,
            &[("x-amzn-ErrorType", "AccessDeniedException")],
            br#"{"message": "no"}"#,
        );
        assert_eq!(
            err,
            ServiceError::Unknown {
                code: "AccessDeniedException".to_string(),
                status: 403,
                message: "no".to_string(),
            }
        );
    }

    #[test]
    fn test_no_code_and_unmapped_status() {
        let err = ServiceError::from_response(418, &[], b"<html>teapot</html>");
        assert_eq!(err.code(), "Unknown");
    }
}
