pub mod generate_json_schema;
pub mod query_json_file;

use query_json_engine::{DomainError, Result};
use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;

/// Decode raw tool arguments into a request; missing or mistyped fields are invalid arguments.
pub fn parse_arguments<T: DeserializeOwned>(arguments: JsonObject) -> Result<T> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|err| DomainError::InvalidArguments(err.to_string()))
}
