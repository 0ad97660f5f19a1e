use super::super::{CallToolResult, McpError, QueryJsonFileRequest, QueryJsonFileService};
use crate::tools::schemas::parse_arguments;
use query_json_protocol::TOOL_QUERY_JSON_FILE;
use rmcp::model::JsonObject;

use super::error::{tool_failure, tool_success};

/// Evaluate a JSONPath query against the file and report every match.
pub(in crate::tools::dispatch) async fn query_json_file(
    service: &QueryJsonFileService,
    arguments: JsonObject,
) -> Result<CallToolResult, McpError> {
    let request: QueryJsonFileRequest = match parse_arguments(arguments) {
        Ok(request) => request,
        Err(error) => return tool_failure(TOOL_QUERY_JSON_FILE, error),
    };
    match service.toolkit().query_json_file(&request).await {
        Ok(envelope) => Ok(tool_success(&envelope)),
        Err(error) => tool_failure(TOOL_QUERY_JSON_FILE, error),
    }
}
