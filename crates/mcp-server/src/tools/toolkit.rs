use std::sync::Arc;

use query_json_engine::{
    load_json, DomainError, JsonPathQuery, PathQuery, Result, SchemaInferrer, ShapeInferrer,
};
use query_json_protocol::{serialize_json, QueryEnvelope, SuccessEnvelope};
use serde_json::Value;

use super::diagnostics::{DiagnosticSink, StderrSink};
use super::schemas::generate_json_schema::GenerateJsonSchemaRequest;
use super::schemas::query_json_file::QueryJsonFileRequest;

/// The two tool façades: validate, load the file, run the adapter, build the success envelope.
///
/// Failures come back as [`DomainError`]; turning them into wire errors is the router's job.
pub struct JsonToolkit {
    inferrer: Arc<dyn SchemaInferrer>,
    paths: Arc<dyn PathQuery>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl JsonToolkit {
    pub fn new(
        inferrer: Arc<dyn SchemaInferrer>,
        paths: Arc<dyn PathQuery>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            inferrer,
            paths,
            diagnostics,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            Arc::new(ShapeInferrer),
            Arc::new(JsonPathQuery),
            Arc::new(StderrSink),
        )
    }

    pub async fn generate_json_schema(
        &self,
        request: &GenerateJsonSchemaRequest,
    ) -> Result<SuccessEnvelope<Value>> {
        let document = load_json(&request.file_path).await?;
        let schema = self.inferrer.infer(&document)?;
        let pretty = serialize_json(&schema)
            .map_err(|err| DomainError::SchemaInference(err.to_string()))?;
        self.diagnostics.schema_generated(&request.file_path, &pretty);
        Ok(SuccessEnvelope::new(schema))
    }

    pub async fn query_json_file(&self, request: &QueryJsonFileRequest) -> Result<QueryEnvelope> {
        if request.query.trim().is_empty() {
            return Err(DomainError::InvalidArguments(
                "query must be a non-empty JSONPath expression".to_string(),
            ));
        }
        let document = load_json(&request.file_path).await?;
        let matches = self.paths.query(&document, &request.query)?;
        log::debug!(
            "query {} on {} matched {} value(s)",
            request.query,
            request.file_path,
            matches.len()
        );
        Ok(QueryEnvelope::success(request.query.clone(), matches))
    }
}
