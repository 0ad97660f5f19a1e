use std::fmt;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Transport {
    Stdio,
    Http,
}

impl Transport {
    /// `httpStream` is accepted as an alias of `http`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "stdio" => Some(Self::Stdio),
            "http" | "httpStream" => Some(Self::Http),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdio => "stdio",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerSettings {
    pub transport: Transport,
    pub host: String,
    /// Only used by the HTTP transport.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            transport: Transport::Stdio,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum CliCommand {
    Serve {
        settings: ServerSettings,
        /// Arguments that were not understood; they are skipped, not rejected.
        ignored: Vec<String>,
    },
    Help,
    Version,
    PrintTools,
}

/// Parse process arguments (without the program name) on top of `defaults`.
///
/// Flags taking a value consume the next argument even when that value is unusable, in which
/// case the default stays in place.
pub fn parse_args<I>(args: I, defaults: ServerSettings) -> CliCommand
where
    I: IntoIterator<Item = String>,
{
    let mut settings = defaults;
    let mut ignored = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" => return CliCommand::Help,
            "--version" | "-V" => return CliCommand::Version,
            "--print-tools" => return CliCommand::PrintTools,
            "--host" | "-h" => match args.next() {
                Some(host) => settings.host = host,
                None => ignored.push(arg),
            },
            "--port" | "-p" => match args.next() {
                Some(value) => match value.trim().parse::<u16>() {
                    Ok(port) => settings.port = port,
                    Err(_) => ignored.push(format!("{arg} {value}")),
                },
                None => ignored.push(arg),
            },
            "--transport" | "-t" => match args.next() {
                Some(value) => match Transport::parse(&value) {
                    Some(transport) => settings.transport = transport,
                    None => ignored.push(format!("{arg} {value}")),
                },
                None => ignored.push(arg),
            },
            _ => ignored.push(arg),
        }
    }

    CliCommand::Serve { settings, ignored }
}
