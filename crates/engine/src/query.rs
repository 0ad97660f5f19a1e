use crate::error::{DomainError, Result};
use serde_json::Value;
use serde_json_path::JsonPath;

/// Evaluates a path expression against a parsed document.
///
/// Implementations return every match in document order; no match is an empty sequence, not an
/// error.
pub trait PathQuery: Send + Sync {
    fn query(&self, document: &Value, query: &str) -> Result<Vec<Value>>;
}

/// JSONPath (RFC 9535) evaluation backed by `serde_json_path`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPathQuery;

impl PathQuery for JsonPathQuery {
    fn query(&self, document: &Value, query: &str) -> Result<Vec<Value>> {
        let path = JsonPath::parse(query).map_err(|err| DomainError::Query(err.to_string()))?;
        Ok(path.query(document).all().into_iter().cloned().collect())
    }
}
