use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateJsonSchemaRequest {
    /// Path to the JSON file
    #[schemars(description = "The absolute path to the JSON file")]
    pub file_path: String,
}
