use super::super::{CallToolResult, GenerateJsonSchemaRequest, McpError, QueryJsonFileService};
use crate::tools::schemas::parse_arguments;
use query_json_protocol::TOOL_GENERATE_JSON_SCHEMA;
use rmcp::model::JsonObject;

use super::error::{tool_failure, tool_success};

/// Load the file, infer its schema and wrap it in a success envelope.
pub(in crate::tools::dispatch) async fn generate_json_schema(
    service: &QueryJsonFileService,
    arguments: JsonObject,
) -> Result<CallToolResult, McpError> {
    let request: GenerateJsonSchemaRequest = match parse_arguments(arguments) {
        Ok(request) => request,
        Err(error) => return tool_failure(TOOL_GENERATE_JSON_SCHEMA, error),
    };
    match service.toolkit().generate_json_schema(&request).await {
        Ok(envelope) => Ok(tool_success(&envelope)),
        Err(error) => tool_failure(TOOL_GENERATE_JSON_SCHEMA, error),
    }
}
