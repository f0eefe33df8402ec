//! Binding requests to REST-JSON HTTP requests and decoding responses.
//!
//! Each request shape implements [`LexOperation`], which says where its
//! members go: URI labels, query parameters or the JSON body. [`prepare`]
//! produces a transport-agnostic [`PreparedRequest`]; [`decode_response`]
//! turns a status, headers and body back into the operation's result or a
//! classified [`ServiceError`].

mod bindings;
mod catalog;

use std::fmt;

use lexmodel_types::config::{ClientConfig, ValidationMode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, debug_span};
use url::Url;

use crate::error::{BindingError, PrepareError, ResponseError, ServiceError};
use crate::validate::{Validate, validate};

pub use catalog::{AnyRequest, DispatchError, OPERATIONS, OperationInfo};

/// Content type of every request body sent to the service.
pub const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request shape bound to one service operation.
pub trait LexOperation: Serialize + Validate {
    /// Operation name as the service documents it (`GetBot`).
    const NAME: &'static str;
    const METHOD: HttpMethod;
    /// Path template, for display only.
    const PATH: &'static str;
    /// Wire names of members carried in the URI instead of the body.
    const URI_MEMBERS: &'static [&'static str] = &[];

    type Output: DeserializeOwned;

    /// Unencoded path segments. A trailing empty segment yields a trailing `/`.
    fn path_segments(&self) -> Result<Vec<String>, BindingError>;

    /// Query parameters in order. Repeated keys are allowed.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON body: every set member except those in [`Self::URI_MEMBERS`].
    /// `GET` and `DELETE` operations send no body.
    fn body(&self) -> Result<Option<Vec<u8>>, BindingError> {
        if matches!(Self::METHOD, HttpMethod::Get | HttpMethod::Delete) {
            return Ok(None);
        }
        let mut value = serde_json::to_value(self)?;
        if let Some(members) = value.as_object_mut() {
            for member in Self::URI_MEMBERS {
                members.remove(*member);
            }
        }
        Ok(Some(serde_json::to_vec(&value)?))
    }
}

/// A bound request, ready for any HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub operation: &'static str,
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
}

impl PreparedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Body as text, when present and valid UTF-8.
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|body| std::str::from_utf8(body).ok())
    }
}

/// Base URL for `config`: the override when set, else the regional endpoint.
pub fn endpoint(config: &ClientConfig) -> Result<Url, BindingError> {
    let raw = match &config.endpoint {
        Some(endpoint) => endpoint.clone(),
        None => format!("https://models.lex.{}.amazonaws.com", config.region),
    };
    match Url::parse(&raw) {
        Ok(url) => Ok(url),
        Err(source) => Err(BindingError::InvalidEndpoint {
            endpoint: raw,
            source,
        }),
    }
}

/// Check (unless disabled) and bind `request` against `config`.
pub fn prepare<O: LexOperation>(
    config: &ClientConfig,
    request: &O,
) -> Result<PreparedRequest, PrepareError> {
    let span = debug_span!("lex.prepare", lex.operation = O::NAME, lex.method = %O::METHOD);
    let _guard = span.enter();

    if config.validation == ValidationMode::Strict {
        validate(request)?;
    }

    let mut url = endpoint(config)?;
    let segments = request.path_segments()?;
    {
        let base = url.to_string();
        let mut path = url
            .path_segments_mut()
            .map_err(|()| BindingError::EndpointNotHierarchical(base))?;
        path.pop_if_empty().extend(segments.iter());
    }

    let query = request.query();
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &query {
            pairs.append_pair(key, value);
        }
    }

    let body = request.body()?;

    let mut headers = vec![
        ("accept", "application/json".to_string()),
        ("user-agent", user_agent(config)),
    ];
    if body.is_some() {
        headers.push(("content-type", JSON_CONTENT_TYPE.to_string()));
    }

    debug!(url = %url, body_bytes = body.as_ref().map_or(0, Vec::len), "request bound");

    Ok(PreparedRequest {
        operation: O::NAME,
        method: O::METHOD,
        url,
        headers,
        body,
    })
}

/// Interpret a response to operation `O`.
///
/// A 2xx status decodes the body (an empty body reads as `{}`); anything else
/// becomes a [`ServiceError`].
pub fn decode_response<O: LexOperation>(
    status: u16,
    headers: &[(&str, &str)],
    body: &[u8],
) -> Result<O::Output, ResponseError> {
    if (200..300).contains(&status) {
        let body: &[u8] = if body.is_empty() { b"{}" } else { body };
        return serde_json::from_slice(body).map_err(|source| ResponseError::Decode {
            operation: O::NAME,
            source,
        });
    }

    let error = ServiceError::from_response(status, headers, body);
    debug!(
        lex.operation = O::NAME,
        status,
        code = error.code(),
        retryable = error.is_retryable(),
        "service returned an error"
    );
    Err(error.into())
}

fn user_agent(config: &ClientConfig) -> String {
    let base = concat!("lexmodel/", env!("CARGO_PKG_VERSION"));
    match &config.user_agent {
        Some(suffix) => format!("{base} {suffix}"),
        None => base.to_string(),
    }
}

/// A URI label value, which must be present and non-empty.
pub(crate) fn label(member: &'static str, value: &Option<String>) -> Result<String, BindingError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(BindingError::MissingLabel(member)),
    }
}

#[cfg(test)]
mod tests {
    use lexmodel_types::bot::{CreateBotVersionRequest, GetBotRequest, GetBotResult, PutBotRequest};
    use lexmodel_types::delete::{DeleteBotRequest, EmptyResult};
    use lexmodel_types::enums::{BotStatus, Locale};
    use lexmodel_types::intent::Intent;

    use super::*;

    fn lenient() -> ClientConfig {
        ClientConfig {
            validation: ValidationMode::Off,
            ..ClientConfig::default()
        }
    }

    #[test]
    fn test_regional_endpoint() {
        let config = ClientConfig {
            region: "eu-west-1".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(
            endpoint(&config).unwrap().as_str(),
            "https://models.lex.eu-west-1.amazonaws.com/"
        );
    }

    #[test]
    fn test_invalid_endpoint_override() {
        let config = ClientConfig {
            endpoint: Some("not a url".to_string()),
            ..ClientConfig::default()
        };
        assert!(matches!(
            endpoint(&config),
            Err(BindingError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_get_has_no_body() {
        let request = GetBotRequest::default()
            .name("PizzaBot")
            .version_or_alias("$LATEST");
        let prepared = prepare(&ClientConfig::default(), &request).unwrap();
        assert_eq!(prepared.method, HttpMethod::Get);
        assert_eq!(
            prepared.url.as_str(),
            "https://models.lex.us-east-1.amazonaws.com/bots/PizzaBot/versions/$LATEST"
        );
        assert!(prepared.body.is_none());
        assert!(prepared.header("content-type").is_none());
        assert!(prepared.header("User-Agent").unwrap().starts_with("lexmodel/"));
    }

    #[test]
    fn test_put_body_drops_uri_members() {
        let request = PutBotRequest::default()
            .name("PizzaBot")
            .locale(Locale::EnUs)
            .child_directed(false)
            .intents(Intent::new("OrderPizza", "1"));
        let prepared = prepare(&ClientConfig::default(), &request).unwrap();
        assert_eq!(prepared.method, HttpMethod::Put);
        assert_eq!(prepared.header("content-type"), Some(JSON_CONTENT_TYPE));

        let body: serde_json::Value = serde_json::from_slice(prepared.body.as_ref().unwrap()).unwrap();
        assert!(body.get("name").is_none());
        assert_eq!(body["locale"], "en-US");
        assert_eq!(body["intents"][0]["intentName"], "OrderPizza");
    }

    #[test]
    fn test_labels_are_percent_encoded() {
        let request = GetBotRequest::default()
            .name("Pizza Bot/2")
            .version_or_alias("1");
        let prepared = prepare(&lenient(), &request).unwrap();
        assert_eq!(prepared.url.path(), "/bots/Pizza%20Bot%2F2/versions/1");
    }

    #[test]
    fn test_endpoint_override_keeps_base_path() {
        let config = ClientConfig {
            endpoint: Some("http://localhost:4566/lex".to_string()),
            ..ClientConfig::default()
        };
        let request = CreateBotVersionRequest::default().name("PizzaBot");
        let prepared = prepare(&config, &request).unwrap();
        assert_eq!(
            prepared.url.as_str(),
            "http://localhost:4566/lex/bots/PizzaBot/versions"
        );
        assert_eq!(prepared.body_text(), Some("{}"));
    }

    #[test]
    fn test_missing_label_fails_binding() {
        let request = GetBotRequest::default().name("PizzaBot");
        let err = prepare(&lenient(), &request).unwrap_err();
        assert!(matches!(
            err,
            PrepareError::Binding(BindingError::MissingLabel("versionOrAlias"))
        ));
    }

    #[test]
    fn test_strict_mode_rejects_before_binding() {
        let request = GetBotRequest::default().name("PizzaBot");
        let err = prepare(&ClientConfig::default(), &request).unwrap_err();
        match err {
            PrepareError::Validation(report) => assert!(report.has("versionOrAlias")),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_success() {
        let body = br#"{"name": "PizzaBot", "status": "READY", "version": "$LATEST"}"#;
        let result: GetBotResult = decode_response::<GetBotRequest>(200, &[], body).unwrap();
        assert_eq!(result.status, Some(BotStatus::Ready));
    }

    #[test]
    fn test_decode_empty_success_body() {
        let result = decode_response::<GetBotRequest>(200, &[], b"").unwrap();
        assert_eq!(result, GetBotResult::default());
    }

    #[test]
    fn test_decode_delete_no_content() {
        let result = decode_response::<DeleteBotRequest>(204, &[], b"").unwrap();
        assert_eq!(result, EmptyResult {});
    }

    #[test]
    fn test_decode_error_response() {
        let err = decode_response::<GetBotRequest>(
            404,
            &[("x-amzn-ErrorType", "NotFoundException")],
            br#"{"message": "missing"}"#,
        )
        .unwrap_err();
        match err {
            ResponseError::Service(ServiceError::NotFound { message }) => {
                assert_eq!(message, "missing")
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_response::<GetBotRequest>(200, &[], br#""PizzaBot""#).unwrap_err();
        assert!(matches!(
            err,
            ResponseError::Decode {
                operation: "GetBot",
                ..
            }
        ));
    }
}
