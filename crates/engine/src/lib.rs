//! # Query JSON Engine
//!
//! The pieces behind the `query-json-file` tools.
//!
//! ```text
//! file path
//!     │
//!     ├──> load_json            (read + parse, failures become DomainError)
//!     │      └─> serde_json::Value
//!     │
//!     ├──> SchemaInferrer       (ShapeInferrer: genson-style merge)
//!     │      └─> JSON Schema
//!     │
//!     └──> PathQuery            (JsonPathQuery: RFC 9535 JSONPath)
//!            └─> ordered matches
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use query_json_engine::{load_json, JsonPathQuery, PathQuery};
//!
//! #[tokio::main]
//! async fn main() -> query_json_engine::Result<()> {
//!     let document = load_json("/tmp/data.json").await?;
//!     let titles = JsonPathQuery.query(&document, "$.posts[*].title")?;
//!     println!("{} titles", titles.len());
//!     Ok(())
//! }
//! ```

mod error;
mod infer;
mod loader;
mod query;

pub use error::{DomainError, Result};
pub use infer::{SchemaInferrer, ShapeInferrer};
pub use loader::{classify_read_error, load_json, parse_json};
pub use query::{JsonPathQuery, PathQuery};
