use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::client::PapierkramClient;
use crate::error::AppError;

use super::{CommandOutput, CommandRegistry};

/// Execute a command by name with raw JSON arguments.
/// This is the single dispatch point for all surfaces (MCP, REST, CLI).
///
/// Unknown names and malformed arguments are rejected here, before any
/// request is made. `null` arguments count as `{}`.
pub async fn execute(
    registry: &CommandRegistry,
    client: &Arc<PapierkramClient>,
    name: &str,
    input: Value,
) -> Result<CommandOutput, AppError> {
    let Some(descriptor) = registry.get(name) else {
        warn!(command = name, "unknown command");
        return Err(AppError::UnknownCommand {
            name: name.to_string(),
        });
    };

    info!(command = descriptor.name, "invoking command");
    match descriptor.invoke(Arc::clone(client), input).await {
        Ok(payload) => Ok(CommandOutput::new(descriptor.name, payload)),
        Err(e) => {
            warn!(command = descriptor.name, error = %e, "command failed");
            Err(e)
        }
    }
}
