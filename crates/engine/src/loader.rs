use crate::error::{DomainError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::io;
use std::path::Path;

/// Read `path` in full and parse it as JSON.
///
/// The document is either returned complete or not at all. A single read is attempted.
pub async fn load_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| classify_read_error(path, err))?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    parse_json(path, &bytes)
}

/// Parse raw file contents. Invalid UTF-8 is reported as a format error, like any other
/// syntax problem.
///
/// Nesting depth is not limited; the parser moves to a heap-allocated stack segment when the
/// current one runs low.
pub fn parse_json(path: &Path, bytes: &[u8]) -> Result<Value> {
    let invalid = |source| DomainError::InvalidFormat {
        path: path.to_path_buf(),
        source,
    };
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(invalid)?;
    deserializer.end().map_err(invalid)?;
    Ok(value)
}

pub fn classify_read_error(path: &Path, err: io::Error) -> DomainError {
    let path = path.to_path_buf();
    match err.kind() {
        io::ErrorKind::NotFound => DomainError::NotFound { path, source: err },
        io::ErrorKind::PermissionDenied => DomainError::PermissionDenied { path, source: err },
        _ if has_structured_message(&err) => DomainError::Io { path, source: err },
        _ => DomainError::Unknown { path, source: err },
    }
}

// A bare `io::ErrorKind` (no OS code, no payload) only carries the kind's generic label.
fn has_structured_message(err: &io::Error) -> bool {
    err.raw_os_error().is_some()
        || err
            .get_ref()
            .is_some_and(|inner| !inner.to_string().trim().is_empty())
}
