/*
[INPUT]:  Error sources (transport, serialization, Wallex error payloads)
[OUTPUT]: Structured error types and normalized API errors
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or new observed error payload shapes
*/

use std::collections::HashMap;
use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use thiserror::Error;

/// Main error type for the Wallex adapter.
///
/// The three families are disjoint by construction:
/// - [`WallexError::Request`]: the call never reached a classifiable server
///   outcome (the server's state is unknown).
/// - [`WallexError::Api`]: the server rejected the call with a non-2xx status.
/// - [`WallexError::Config`] / [`WallexError::InvalidRequest`]: reported
///   before any network activity.
#[derive(Error, Debug)]
pub enum WallexError {
    /// Failure before a classified server response was obtained
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The server returned a non-success status; carries the normalized payload
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Client misconfiguration (missing API key, bad base URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller-side validation failure, rejected before dispatch
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type alias for Wallex operations
pub type Result<T> = std::result::Result<T, WallexError>;

/// The stage of the request/response cycle at which a transport failure
/// occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStage {
    PreparingParameters,
    PreparingBody,
    CreatingRequest,
    SendingRequest,
    ReadingResponse,
    ParsingResponse,
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestStage::PreparingParameters => "preparing request parameters",
            RequestStage::PreparingBody => "preparing request body",
            RequestStage::CreatingRequest => "creating request",
            RequestStage::SendingRequest => "sending request",
            RequestStage::ReadingResponse => "reading response",
            RequestStage::ParsingResponse => "parsing response",
        };
        f.write_str(label)
    }
}

/// A failure that occurred before the Wallex server produced a classifiable
/// response: parameter encoding, body encoding, request construction, network
/// transport, body read, or decoding of a *successful* response.
///
/// Distinct from [`ApiError`]: a `RequestError` means the server's state is
/// unknown, not that the server rejected the call.
#[derive(Error, Debug)]
#[error("request failed while {stage}: {source}")]
pub struct RequestError {
    pub stage: RequestStage,
    #[source]
    pub source: RequestCause,
}

impl RequestError {
    pub(crate) fn new(stage: RequestStage, source: impl Into<RequestCause>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }
}

/// Underlying cause of a [`RequestError`].
#[derive(Error, Debug)]
pub enum RequestCause {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

/// A normalized non-2xx Wallex API response.
///
/// Wallex returns error payloads in at least four shapes:
///
/// ```json
/// { "success": false, "code": 1201, "message": "invalid API key format", "result": {} }
/// { "detail": "missing required parameter" }
/// { "message": "something went wrong" }
/// { ...undocumented fields... }
/// ```
///
/// [`parse_error_response`] extracts the most complete representation
/// possible from any of them:
/// - `message` is never empty (falls back to a status-code template),
/// - `code` is set only when the payload declared a positive numeric code,
/// - `result` preserves the raw `result`/`detail` fragment verbatim,
/// - `fields` records every top-level key the server sent, stringified.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status_code: u16,

    /// Human-readable description; always populated.
    pub message: String,

    /// Failure flag mirrored from the payload, `false` when absent.
    pub success: bool,

    /// Machine-readable Wallex error code, when the payload declared one.
    pub code: Option<i32>,

    /// Raw, uninterpreted payload fragment from `result` or `detail` keys.
    pub result: Option<String>,

    /// Every top-level key of the payload mapped to the stringified value(s).
    /// Array values are flattened to one string per element.
    pub fields: HashMap<String, Vec<String>>,
}

/// Documented Wallex error envelope, decoded best-effort in the first
/// normalization pass. Every field is optional so that partial envelopes
/// still decode.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    success: bool,
    #[serde(default)]
    code: Option<i32>,
    #[serde(default)]
    result: Option<Box<RawValue>>,
}

/// Build an [`ApiError`] from a non-2xx Wallex response body of unknown shape.
///
/// Two best-effort passes, merged by priority; later steps only fill gaps
/// left by earlier ones:
///
/// 1. Decode the documented envelope (`message`, `success`, `code`,
///    `result`). Decode failure is tolerated silently.
/// 2. Decode the payload as a generic JSON object and record every top-level
///    key in `fields`. A string `detail` value additionally becomes the raw
///    `result`, and the `message` if none was adopted in pass 1. Decode
///    failure (including non-object top-level JSON) is tolerated silently.
/// 3. If no message was adopted, synthesize one from the status code.
///
/// The return value is always fully populated and safe to surface, no matter
/// how malformed the payload was.
pub(crate) fn parse_error_response(status: StatusCode, body: &[u8]) -> ApiError {
    let mut api_err = ApiError {
        status_code: status.as_u16(),
        message: String::new(),
        success: false,
        code: None,
        result: None,
        fields: HashMap::new(),
    };

    // Pass 1: documented Wallex envelope.
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        api_err.success = envelope.success;
        if let Some(code) = envelope.code.filter(|code| *code > 0) {
            api_err.code = Some(code);
            api_err
                .fields
                .insert("code".to_string(), vec![code.to_string()]);
        }
        if let Some(message) = envelope.message.filter(|message| !message.is_empty()) {
            api_err
                .fields
                .insert("message".to_string(), vec![message.clone()]);
            api_err.message = message;
        }
        if let Some(result) = envelope.result {
            let raw = result.get();
            if raw != "null" {
                api_err.result = Some(raw.to_string());
            }
        }
    }

    // Pass 2: generic object decode, capturing documented and undocumented
    // fields alike.
    if let Ok(raw) = serde_json::from_slice::<Map<String, Value>>(body) {
        for (key, value) in raw {
            match value {
                Value::String(text) => {
                    if key == "detail" {
                        api_err.result = Some(text.clone());
                        if api_err.message.is_empty() {
                            api_err.message = text.clone();
                        }
                    }
                    api_err.fields.insert(key, vec![text]);
                }
                Value::Array(items) => {
                    let rendered = items.iter().map(render_value).collect();
                    api_err.fields.insert(key, rendered);
                }
                other => {
                    api_err.fields.insert(key, vec![render_value(&other)]);
                }
            }
        }
    }

    if api_err.message.is_empty() {
        api_err.message = format!("Wallex API error (status {})", status.as_u16());
    }

    api_err
}

/// Render a JSON value as text for the `fields` map. Strings render bare;
/// everything else renders as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
