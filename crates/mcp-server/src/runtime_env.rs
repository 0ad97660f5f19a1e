use crate::args::{ServerSettings, Transport};
use std::env;

pub const ENV_TRANSPORT: &str = "QUERY_JSON_FILE_TRANSPORT";
pub const ENV_HOST: &str = "QUERY_JSON_FILE_HOST";
pub const ENV_PORT: &str = "QUERY_JSON_FILE_PORT";

#[derive(Debug, Clone)]
pub struct EnvDefaults {
    pub settings: ServerSettings,
    pub applied_env: Vec<String>,
    pub warnings: Vec<String>,
}

/// Server settings from the environment. Command-line flags are applied on top.
///
/// Unusable values are reported as warnings and never fail startup.
pub fn defaults_from_env() -> EnvDefaults {
    defaults_from_lookup(|key| env::var(key).ok())
}

fn defaults_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EnvDefaults {
    let mut settings = ServerSettings::default();
    let mut applied_env = Vec::new();
    let mut warnings = Vec::new();

    if let Some(raw) = non_empty(lookup(ENV_TRANSPORT)) {
        match Transport::parse(&raw) {
            Some(transport) => {
                settings.transport = transport;
                applied_env.push(ENV_TRANSPORT.to_string());
            }
            None => warnings.push(format!(
                "{ENV_TRANSPORT}={raw} is not a transport (expected stdio or http); using {}",
                settings.transport
            )),
        }
    }

    if let Some(host) = non_empty(lookup(ENV_HOST)) {
        settings.host = host;
        applied_env.push(ENV_HOST.to_string());
    }

    if let Some(raw) = non_empty(lookup(ENV_PORT)) {
        match raw.parse::<u16>() {
            Ok(port) => {
                settings.port = port;
                applied_env.push(ENV_PORT.to_string());
            }
            Err(err) => warnings.push(format!(
                "{ENV_PORT}={raw} is not a valid port ({err}); using {}",
                settings.port
            )),
        }
    }

    EnvDefaults {
        settings,
        applied_env,
        warnings,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
