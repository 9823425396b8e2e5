#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::PapierkramClient;
use crate::registry::params::NoParams;
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

pub async fn get_info(client: Arc<PapierkramClient>, _p: NoParams) -> Outcome {
    client.get_info().await
}

pub fn commands() -> Vec<CommandDescriptor> {
    vec![command(
        CommandCategory::Info,
        "get_info",
        "Show Papierkram account information",
        get_info,
    )]
}
