use query_json_protocol::{ErrorCode, ErrorEnvelope};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("File not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied reading file: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON format in file: {}", .path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unknown error reading file: {}", .path.display())]
    Unknown {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Schema inference failed: {0}")]
    SchemaInference(String),

    #[error("JSONPath query failed: {0}")]
    Query(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl DomainError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::PermissionDenied { .. } => ErrorCode::PermissionDenied,
            Self::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            Self::Io { .. } => ErrorCode::IoError,
            Self::Unknown { .. } => ErrorCode::Unknown,
            Self::SchemaInference(_) => ErrorCode::SchemaInferenceError,
            Self::Query(_) => ErrorCode::QueryError,
            Self::InvalidArguments(_) => ErrorCode::InvalidArguments,
        }
    }

    pub fn to_envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::new(self.code(), self.to_string())
    }
}
