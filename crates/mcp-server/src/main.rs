//! Query JSON File MCP Server
//!
//! Lets AI agents inspect JSON files without reading them whole.
//!
//! ## Tools
//!
//! - `generate-json-schema` - Infer a JSON Schema from a JSON file
//! - `query-json-file` - Evaluate a JSONPath query against a JSON file
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "query-json-file": {
//!       "command": "query-json-file"
//!     }
//!   }
//! }
//! ```
//!
//! or serve over HTTP with `query-json-file --transport http --port 3000`.

use anyhow::Result;
use std::env;

mod args;
mod runtime_env;
mod tools;
mod transport;

use args::CliCommand;
use tools::catalog;
use tools::QueryJsonFileService;

fn print_help() {
    println!("Query JSON File MCP Server");
    println!();
    println!("Usage:");
    println!("  query-json-file [options]");
    println!();
    println!("Options:");
    println!("  -t, --transport <type>   Transport type: 'stdio' or 'http' (default: stdio)");
    println!("  -p, --port <number>      Port for HTTP transport (default: 3000)");
    println!("  -h, --host <string>      Host for HTTP transport (default: localhost)");
    println!("  -V, --version            Print version and exit");
    println!("      --print-tools        Print tool inventory as JSON and exit");
    println!("      --help               Show this help message");
    println!();
    println!("Environment:");
    println!(
        "  {}, {}, {} set the defaults above; flags win.",
        runtime_env::ENV_TRANSPORT,
        runtime_env::ENV_HOST,
        runtime_env::ENV_PORT
    );
    println!();
    println!("Examples:");
    println!("  query-json-file                           # Start with stdio transport");
    println!("  query-json-file --transport http          # Start with HTTP transport on port 3000");
    println!("  query-json-file -t http -p 8080           # Start with HTTP transport on port 8080");
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_defaults = runtime_env::defaults_from_env();
    let command = args::parse_args(env::args().skip(1), env_defaults.settings);
    let (settings, ignored) = match command {
        CliCommand::Serve { settings, ignored } => (settings, ignored),
        CliCommand::Help => {
            print_help();
            std::process::exit(0);
        }
        CliCommand::Version => {
            println!("query-json-file {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        CliCommand::PrintTools => {
            println!("{}", catalog::tool_inventory_json(env!("CARGO_PKG_VERSION")));
            std::process::exit(0);
        }
    };

    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    for warning in &env_defaults.warnings {
        log::warn!("{warning}");
    }
    if !env_defaults.applied_env.is_empty() {
        log::debug!("settings from environment: {}", env_defaults.applied_env.join(", "));
    }
    for arg in &ignored {
        log::debug!("ignoring unrecognized argument: {arg}");
    }

    log::info!(
        "Starting Query JSON File MCP server with {} transport",
        settings.transport
    );

    let service = QueryJsonFileService::new();
    transport::serve(service, &settings).await?;

    log::info!("Query JSON File MCP server stopped");
    Ok(())
}
