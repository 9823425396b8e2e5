use std::env::VarError;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use papierkram_mcp::api::{self, ApiState};
use papierkram_mcp::client::PapierkramClient;
use papierkram_mcp::config::{self, Config, Overrides};
use papierkram_mcp::logging::init_logging;
use papierkram_mcp::mcp::McpServer;
use papierkram_mcp::registry::execute::execute;
use papierkram_mcp::registry::{catalog, CommandRegistry};

// ── CLI argument parsing ─────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "papierkram-mcp",
    about = "Papierkram accounting API exposed as MCP tools",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// API base URL (overrides PAPIERKRAM_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log filter directive, e.g. "debug" (overrides PAPIERKRAM_LOG)
    #[arg(long, global = true)]
    log: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server on stdin/stdout (default)
    Serve,
    /// Run the REST API on 127.0.0.1
    Http {
        /// Port to bind; 0 picks a free one
        #[arg(long, default_value_t = 0)]
        port: u16,
    },
    /// Print the command catalog (no API token needed)
    Tools {
        /// Category slug or command name to show in detail
        #[arg(long)]
        category: Option<String>,
        /// Output the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Invoke a single command and print its result
    Call {
        /// Command name, e.g. "list_invoices"
        name: String,
        /// Arguments as a JSON object
        #[arg(long)]
        params: Option<String>,
    },
}

// ── Subcommands ──────────────────────────────────────────────────

fn print_tools(registry: &CommandRegistry, category: Option<&str>, json: bool) {
    if json {
        let entries = catalog::to_catalog(registry);
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_else(|_| entries.to_string())
        );
    } else {
        println!("{}", catalog::help_text(registry, category));
    }
}

async fn run_stdio(registry: Arc<CommandRegistry>, client: Arc<PapierkramClient>) -> Result<(), String> {
    info!(
        commands = registry.len(),
        base_url = client.base_url(),
        "Papierkram MCP server running on stdio"
    );
    McpServer::new(registry, client)
        .serve_stdio()
        .await
        .map_err(|e| format!("MCP transport failed: {e}"))
}

async fn run_http(
    registry: Arc<CommandRegistry>,
    client: Arc<PapierkramClient>,
    port: u16,
) -> Result<(), String> {
    let commands = registry.len();
    let port = api::start_api_server(ApiState { registry, client }, port).await?;
    info!(commands, "REST API listening on http://127.0.0.1:{port}/api/tools");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to wait for shutdown signal: {e}"))?;
    info!("shutting down");
    Ok(())
}

async fn run_call(
    registry: &CommandRegistry,
    client: &Arc<PapierkramClient>,
    name: &str,
    params: Option<&str>,
) -> Result<(), String> {
    let input = match params {
        Some(raw) => serde_json::from_str::<Value>(raw).map_err(|e| format!("Invalid --params JSON: {e}"))?,
        None => serde_json::json!({}),
    };
    let output = execute(registry, client, name, input).await?;
    println!("{}", output.render());
    Ok(())
}

// ── Startup ──────────────────────────────────────────────────────

/// What a command-executing subcommand runs against.
struct Runtime {
    registry: Arc<CommandRegistry>,
    client: Arc<PapierkramClient>,
}

/// Resolve the credential and build the client. The registry is only built
/// once both succeeded.
fn prepare<F>(overrides: &Overrides, env: F) -> Result<Runtime, String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let config = Config::from_env_fn(overrides, env).map_err(|e| e.to_string())?;
    let client = PapierkramClient::new(config.endpoint).map_err(|e| e.to_string())?;
    Ok(Runtime {
        registry: Arc::new(CommandRegistry::new()),
        client: Arc::new(client),
    })
}

// ── Entry point ──────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let overrides = Overrides {
        base_url: cli.base_url,
        log_filter: cli.log,
    };
    init_logging(&config::log_filter(&overrides));

    let command = cli.command.unwrap_or(Commands::Serve);

    if let Commands::Tools { category, json } = &command {
        print_tools(&CommandRegistry::new(), category.as_deref(), *json);
        return;
    }

    let Runtime { registry, client } = match prepare(&overrides, |key| std::env::var(key)) {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let outcome = match command {
        Commands::Serve => run_stdio(registry, client).await,
        Commands::Http { port } => run_http(registry, client, port).await,
        Commands::Call { name, params } => {
            run_call(&registry, &client, &name, params.as_deref()).await
        }
        Commands::Tools { .. } => Ok(()),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use papierkram_mcp::config::{ENV_API_TOKEN, ENV_BASE_URL};

    use super::*;

    #[test]
    fn test_missing_token_stops_startup() {
        let err = prepare(&Overrides::default(), |_| Err(VarError::NotPresent))
            .err()
            .expect("startup must fail without a token");
        assert!(err.contains(ENV_API_TOKEN));
    }

    #[test]
    fn test_bad_base_url_stops_startup() {
        let env = |key: &str| match key {
            ENV_API_TOKEN => Ok("tok".to_string()),
            ENV_BASE_URL => Ok("not a url".to_string()),
            _ => Err(VarError::NotPresent),
        };
        assert!(prepare(&Overrides::default(), env).is_err());
    }

    #[test]
    fn test_token_present_registers_every_command() {
        let env = |key: &str| match key {
            ENV_API_TOKEN => Ok("tok".to_string()),
            _ => Err(VarError::NotPresent),
        };
        let runtime = prepare(&Overrides::default(), env).unwrap();
        assert_eq!(runtime.registry.len(), CommandRegistry::new().len());
        assert_eq!(runtime.client.base_url(), config::DEFAULT_BASE_URL);
    }
}
