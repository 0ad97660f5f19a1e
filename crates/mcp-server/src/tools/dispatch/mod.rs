use std::sync::Arc;

use rmcp::handler::server::tool::{cached_schema_for_type, ToolRouter};
use rmcp::model::{
    CallToolResult, Implementation, JsonObject, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};

use super::catalog::SERVER_NAME;
use super::schemas::generate_json_schema::GenerateJsonSchemaRequest;
use super::schemas::query_json_file::QueryJsonFileRequest;
use super::toolkit::JsonToolkit;

mod router;

const INSTRUCTIONS: &[&str] = &[
    "This MCP server provides tools to perform JSONPath-based queries on JSON files.",
    "Use the `query-json-file` tool to perform JSONPath queries on a specific JSON file. Use JSONPath query syntax to specify the query.",
    "Use the `generate-json-schema` tool to generate a JSON schema from a JSON file. This can be used to introspect the structure of the JSON file without reading it. This is useful for large JSON files.",
];

/// Query JSON File MCP Service
#[derive(Clone)]
pub struct QueryJsonFileService {
    toolkit: Arc<JsonToolkit>,
    tool_router: ToolRouter<Self>,
}

impl QueryJsonFileService {
    pub fn new() -> Self {
        Self::with_toolkit(JsonToolkit::standard())
    }

    pub fn with_toolkit(toolkit: JsonToolkit) -> Self {
        Self {
            toolkit: Arc::new(toolkit),
            tool_router: Self::tool_router(),
        }
    }

    pub(in crate::tools) fn toolkit(&self) -> &JsonToolkit {
        &self.toolkit
    }

    /// Registered tools, in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

impl Default for QueryJsonFileService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for QueryJsonFileService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.join("\n\n")),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[tool_router]
impl QueryJsonFileService {
    // Arguments arrive as a raw object so decoding failures get the error envelope too.

    /// Infer a JSON Schema from a JSON file
    #[tool(
        name = "generate-json-schema",
        description = "Generate a JSON schema from a JSON file",
        input_schema = cached_schema_for_type::<GenerateJsonSchemaRequest>()
    )]
    pub async fn generate_json_schema(
        &self,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        router::generate_json_schema::generate_json_schema(self, arguments).await
    }

    /// Evaluate a JSONPath query against a JSON file
    #[tool(
        name = "query-json-file",
        description = "Perform JSONPath queries on a JSON file",
        input_schema = cached_schema_for_type::<QueryJsonFileRequest>()
    )]
    pub async fn query_json_file(&self, arguments: JsonObject) -> Result<CallToolResult, McpError> {
        router::query_json_file::query_json_file(self, arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn rejected_envelope(err: McpError) -> Value {
        serde_json::from_str(&err.message).expect("error message is the failure envelope")
    }

    #[test]
    fn registers_exactly_the_two_tools() {
        let service = QueryJsonFileService::new();
        let names: Vec<String> = service
            .tools()
            .iter()
            .map(|tool| tool.name.to_string())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.iter().any(|n| n == query_json_protocol::TOOL_GENERATE_JSON_SCHEMA));
        assert!(names.iter().any(|n| n == query_json_protocol::TOOL_QUERY_JSON_FILE));
    }

    #[test]
    fn query_tool_requires_file_path_and_query() {
        let service = QueryJsonFileService::new();
        let tool = service
            .tools()
            .into_iter()
            .find(|tool| tool.name == query_json_protocol::TOOL_QUERY_JSON_FILE)
            .expect("query tool registered");
        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        let required: Vec<&str> = schema["required"]
            .as_array()
            .expect("required list")
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"filePath"));
        assert!(required.contains(&"query"));
        assert!(schema["properties"]["filePath"]["description"]
            .as_str()
            .is_some_and(|d| d.contains("absolute path")));
    }

    #[test]
    fn info_carries_instructions_and_tools_capability() {
        let info = QueryJsonFileService::new().get_info();
        let instructions = info.instructions.unwrap_or_default();
        assert!(instructions.contains("`query-json-file`"));
        assert!(instructions.contains("`generate-json-schema`"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn info_reports_this_server() {
        let info = QueryJsonFileService::new().get_info();
        assert_eq!(info.server_info.name, "query-json-file");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn undecodable_query_arguments_are_invalid_arguments() {
        let service = QueryJsonFileService::new();
        for (arguments, detail) in [
            (json!({ "query": "$.a" }), "missing field `filePath`"),
            (json!({ "filePath": "/tmp/a.json" }), "missing field `query`"),
            (json!({ "filePath": 42, "query": "$.a" }), "invalid type"),
            (json!({ "filePath": "/tmp/a.json", "query": ["$.a"] }), "invalid type"),
        ] {
            let err = router::query_json_file::query_json_file(&service, object(arguments))
                .await
                .unwrap_err();
            let envelope = rejected_envelope(err);
            assert_eq!(envelope["code"], json!("INVALID_ARGUMENTS"));
            assert_eq!(envelope["success"], json!(false));
            assert!(
                envelope["error"].as_str().is_some_and(|e| e.contains(detail)),
                "{envelope}"
            );
        }
    }

    #[tokio::test]
    async fn schema_tool_without_arguments_is_invalid_arguments() {
        let service = QueryJsonFileService::new();
        let err = router::generate_json_schema::generate_json_schema(&service, JsonObject::new())
            .await
            .unwrap_err();
        let envelope = rejected_envelope(err);
        assert_eq!(envelope["code"], json!("INVALID_ARGUMENTS"));
        assert_eq!(
            envelope["error"],
            json!("Invalid arguments: missing field `filePath`")
        );
    }
}
