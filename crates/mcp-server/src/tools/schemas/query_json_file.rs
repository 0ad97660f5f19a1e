use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryJsonFileRequest {
    /// Path to the JSON file
    #[schemars(description = "The absolute path to the JSON file")]
    pub file_path: String,

    /// JSONPath expression
    #[schemars(description = "JSONPath query string (e.g., \"$.key\" or \"$[*].name\")")]
    pub query: String,
}
