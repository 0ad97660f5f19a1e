//! Wire envelopes returned by the `query-json-file` tools.
//!
//! Every tool call answers with exactly one of:
//!
//! ```text
//! generate-json-schema  { "data": <schema>, "success": true }
//! query-json-file       { "count": n, "data": [...], "error": null, "query": q, "status": "success" }
//! any failure           { "code": "NOT_FOUND", "error": "File not found: ...", "success": false }
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const TOOL_GENERATE_JSON_SCHEMA: &str = "generate-json-schema";
pub const TOOL_QUERY_JSON_FILE: &str = "query-json-file";

/// Closed set of failure codes carried by [`ErrorEnvelope::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    PermissionDenied,
    InvalidFormat,
    IoError,
    #[serde(rename = "UNKNOWN_ERROR")]
    Unknown,
    SchemaInferenceError,
    QueryError,
    InvalidArguments,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::IoError => "IO_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
            Self::SchemaInferenceError => "SCHEMA_INFERENCE_ERROR",
            Self::QueryError => "QUERY_ERROR",
            Self::InvalidArguments => "INVALID_ARGUMENTS",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SuccessEnvelope<T> {
    pub data: T,
    pub success: bool,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            success: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Success,
}

/// Result of a JSONPath query. `error` is always serialized, as `null` on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QueryEnvelope {
    pub count: usize,
    pub data: Vec<serde_json::Value>,
    pub error: Option<String>,
    pub query: String,
    pub status: QueryStatus,
}

impl QueryEnvelope {
    pub fn success(query: impl Into<String>, data: Vec<serde_json::Value>) -> Self {
        Self {
            count: data.len(),
            data,
            error: None,
            query: query.into(),
            status: QueryStatus::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: ErrorCode,
    pub error: String,
    pub success: bool,
}

impl ErrorEnvelope {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            code,
            error: error.into(),
            success: false,
        }
    }

    /// Pretty JSON text of the envelope; this is the message callers see on failure.
    pub fn to_json(&self) -> String {
        serialize_json(self).unwrap_or_else(|_| {
            format!(
                "{{\"code\":\"{}\",\"error\":\"\",\"success\":false}}",
                self.code
            )
        })
    }
}

/// Two-space pretty JSON, the layout used for every tool response.
pub fn serialize_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
