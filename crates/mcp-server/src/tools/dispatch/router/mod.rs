mod error;
pub(super) mod generate_json_schema;
pub(super) mod query_json_file;
