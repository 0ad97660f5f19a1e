use std::io::Write;

/// Side channel for artifacts produced while serving a tool call.
///
/// Never touches stdout: with the stdio transport that stream carries the protocol.
pub trait DiagnosticSink: Send + Sync {
    /// Called with the pretty-printed schema after every successful inference.
    fn schema_generated(&self, file_path: &str, schema: &str);
}

/// Writes generated schemas to stderr, regardless of the log filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn schema_generated(&self, file_path: &str, schema: &str) {
        log::debug!("schema generated for {file_path}");
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{schema}");
    }
}
