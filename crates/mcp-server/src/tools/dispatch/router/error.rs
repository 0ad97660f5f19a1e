use query_json_engine::DomainError;
use query_json_protocol::{serialize_json, ErrorCode, ErrorEnvelope};
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use serde::Serialize;
use serde_json::json;

pub(super) fn tool_success<T: Serialize>(envelope: &T) -> CallToolResult {
    CallToolResult::success(vec![Content::text(
        serialize_json(envelope).unwrap_or_default(),
    )])
}

pub(super) fn tool_error_envelope(envelope: ErrorEnvelope) -> CallToolResult {
    let mut result = CallToolResult::error(vec![Content::text(envelope.to_json())]);
    result.structured_content = Some(json!(envelope));
    result
}

/// Invalid arguments are a protocol fault; every other failure is reported as tool output.
pub(super) fn tool_failure(tool: &str, error: DomainError) -> Result<CallToolResult, McpError> {
    let envelope = error.to_envelope();
    if envelope.code == ErrorCode::InvalidArguments {
        log::debug!("{tool}: rejected arguments: {error}");
        return Err(McpError::invalid_params(
            envelope.to_json(),
            Some(json!(envelope)),
        ));
    }
    log::warn!("{tool}: {error}");
    Ok(tool_error_envelope(envelope))
}
