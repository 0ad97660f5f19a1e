use query_json_protocol::{serialize_json, ErrorEnvelope, QueryEnvelope, SuccessEnvelope};
use rmcp::schemars;
use serde_json::json;

use super::QueryJsonFileService;

pub const SERVER_NAME: &str = "query-json-file";

/// Tool inventory as printed by `--print-tools`: registered tools plus the envelope schemas
/// their text responses follow.
pub fn tool_inventory_json(version: &str) -> String {
    let tools = QueryJsonFileService::new().tools();
    let payload = json!({
        "server": SERVER_NAME,
        "version": version,
        "tools": tools,
        "envelopes": {
            "success": schemars::schema_for!(SuccessEnvelope<serde_json::Value>),
            "query": schemars::schema_for!(QueryEnvelope),
            "error": schemars::schema_for!(ErrorEnvelope),
        },
    });
    serialize_json(&payload).unwrap_or_default()
}
